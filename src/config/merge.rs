//! CLI argument merging with config

use crate::domain::Config;
use std::path::PathBuf;

#[derive(Debug, Default, Clone)]
pub struct CliOverrides {
    pub raw: Option<bool>,
    pub prompt: Option<String>,
    pub include: Option<Vec<String>>,
    pub exclude: Option<Vec<String>>,
    pub output: Option<PathBuf>,
    pub branch: Option<String>,
}

/// Apply command-line values over `base_config`. Lists replace rather than extend.
pub fn merge_cli_with_config(mut base_config: Config, cli: CliOverrides) -> Config {
    if let Some(raw) = cli.raw {
        base_config.raw = raw;
    }
    if let Some(prompt) = cli.prompt {
        base_config.prompt = Some(prompt);
    }

    if let Some(include) = cli.include {
        base_config.include = include;
    }
    if let Some(exclude) = cli.exclude {
        base_config.exclude = exclude;
    }

    if let Some(output) = cli.output {
        base_config.output = Some(output);
    }
    if let Some(branch) = cli.branch {
        base_config.branch = Some(branch);
    }

    base_config
}
