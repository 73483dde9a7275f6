//! Command-line interface for sourceprompt
//!
//! `sourceprompt [OPTIONS] <PATH_OR_URL>` renders a tree; `version` prints
//! the version.

use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing::Level;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

mod render;

/// Converts your codebase into LLM prompt.
/// Accepts local directory path or git repo URL as an argument.
#[derive(Parser)]
#[command(name = "sourceprompt")]
#[command(author, version, about, long_about = None)]
#[command(subcommand_negates_reqs = true)]
pub struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    #[command(flatten)]
    render: render::RenderArgs,

    /// Enable verbose output (sets log level to DEBUG)
    #[arg(short, long, global = true)]
    verbose: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Prints the version of sourceprompt
    Version,
}

pub fn run() -> Result<()> {
    let cli = Cli::parse();

    // Per-target RUST_LOG directives still apply; the default level is WARN, or DEBUG with --verbose.
    let filter = if cli.verbose {
        EnvFilter::from_default_env().add_directive(Level::DEBUG.into())
    } else {
        EnvFilter::from_default_env().add_directive(Level::WARN.into())
    };
    let _ = tracing_subscriber::registry()
        .with(fmt::layer().with_writer(std::io::stderr))
        .with(filter)
        .try_init();

    match cli.command {
        Some(Commands::Version) => {
            println!("sourceprompt version {}", env!("CARGO_PKG_VERSION"));
            Ok(())
        }
        None => render::run(cli.render),
    }
}
