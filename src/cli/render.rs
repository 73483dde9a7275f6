//! Default command: render a tree into a prompt

use anyhow::{Context, Result};
use clap::Args;
use std::path::PathBuf;
use tracing::debug;

use crate::config::{load_config, merge_cli_with_config, CliOverrides};
use crate::output;
use crate::prompt::generate_prompt;

#[derive(Args)]
pub struct RenderArgs {
    /// Local directory path or git repository URL
    #[arg(value_name = "PATH_OR_URL", required = true)]
    pub path: Option<String>,

    /// Return just file contents without LLM prompt
    #[arg(short, long)]
    pub raw: bool,

    /// Output file path
    #[arg(short, long, value_name = "FILE")]
    pub output: Option<PathBuf>,

    /// Prompt file path or URL
    #[arg(short, long, value_name = "FILE_OR_URL")]
    pub prompt: Option<String>,

    /// Regular expression of filename patterns to include (repeatable)
    #[arg(short, long, value_name = "REGEX")]
    pub include: Vec<String>,

    /// Regular expression of filename patterns to exclude (repeatable)
    #[arg(short, long, value_name = "REGEX")]
    pub exclude: Vec<String>,

    /// Branch or tag to clone when PATH_OR_URL is a repository URL
    #[arg(short, long, value_name = "REF")]
    pub branch: Option<String>,

    /// Path to config file (sourceprompt.toml or .sourceprompt.yml)
    #[arg(short, long, value_name = "FILE")]
    pub config: Option<PathBuf>,
}

pub fn run(args: RenderArgs) -> Result<()> {
    let Some(input) = args.path.as_deref() else {
        anyhow::bail!("argument must be a valid git URL or file path");
    };

    let cwd = std::env::current_dir()?;
    let file_config = load_config(&cwd, args.config.as_deref())?;

    let cli_overrides = CliOverrides {
        raw: args.raw.then_some(true),
        prompt: args.prompt.clone(),
        include: non_empty(&args.include),
        exclude: non_empty(&args.exclude),
        output: args.output.clone(),
        branch: args.branch.clone(),
    };
    let config = merge_cli_with_config(file_config, cli_overrides);
    debug!(input, ?config, "Effective configuration");

    let text = generate_prompt(input, &config)
        .with_context(|| format!("failed to build prompt for {input}"))?;

    output::emit(&text, config.output.as_deref())?;
    Ok(())
}

fn non_empty(values: &[String]) -> Option<Vec<String>> {
    if values.is_empty() {
        None
    } else {
        Some(values.to_vec())
    }
}
