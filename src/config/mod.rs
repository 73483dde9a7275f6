//! Configuration loading
//!
//! Defaults, then an optional config file, then `SOURCEPROMPT_*` environment
//! variables. Command-line flags are applied on top by [`merge_cli_with_config`].

use crate::domain::Config;
use crate::error::{Result, SourcePromptError};
use figment::providers::{Env, Format, Serialized, Toml, Yaml};
use figment::Figment;
use std::path::{Path, PathBuf};
use tracing::debug;

mod merge;

pub use merge::{merge_cli_with_config, CliOverrides};

/// Config file names looked up in the working directory, in order.
pub const CONFIG_FILE_NAMES: &[&str] =
    &["sourceprompt.toml", ".sourceprompt.toml", ".sourceprompt.yml", ".sourceprompt.yaml"];

pub const ENV_PREFIX: &str = "SOURCEPROMPT_";

/// Load configuration, looking for a config file under `anchor` unless
/// `explicit` names one.
pub fn load_config(anchor: &Path, explicit: Option<&Path>) -> Result<Config> {
    let file = match explicit {
        Some(path) => {
            if !path.is_file() {
                return Err(SourcePromptError::InvalidInput(format!(
                    "config file not found: {}",
                    path.display()
                )));
            }
            Some(path.to_path_buf())
        }
        None => discover_config_file(anchor),
    };

    let mut figment = Figment::from(Serialized::defaults(Config::default()));
    if let Some(path) = &file {
        debug!(path = %path.display(), "Loading config file");
        figment = if is_yaml(path) {
            figment.merge(Yaml::file(path))
        } else {
            figment.merge(Toml::file(path))
        };
    }
    let config: Config = figment.merge(Env::prefixed(ENV_PREFIX)).extract()?;
    debug!(?config, "Configuration loaded");
    Ok(config)
}

fn discover_config_file(anchor: &Path) -> Option<PathBuf> {
    CONFIG_FILE_NAMES.iter().map(|name| anchor.join(name)).find(|path| path.is_file())
}

fn is_yaml(path: &Path) -> bool {
    matches!(path.extension().and_then(|e| e.to_str()), Some("yml" | "yaml"))
}
