//! Resolution of the input argument into a local traversal root
//!
//! Local directories are used in place. Remote repositories are cloned with
//! the `git` executable into a temporary directory that is removed when the
//! returned [`RepoContext`] is dropped.

use crate::error::{Result, SourcePromptError};
use reqwest::Url;
use std::path::{Path, PathBuf};
use std::process::Command;
use tempfile::TempDir;
use tracing::{debug, warn};

const CLONE_DIR_PREFIX: &str = "sourceprompt-git-clone-";

/// A resolved input ready for traversal.
#[derive(Debug)]
pub struct RepoContext {
    /// Directory (or single file) to walk
    pub root_path: PathBuf,

    /// Prefix removed from visited paths for display
    pub strip_prefix: String,

    clone_dir: Option<TempDir>,
}

/// Whether `input` is a URL with both a scheme and a host.
pub fn is_url(input: &str) -> bool {
    Url::parse(input).map(|url| url.host_str().is_some_and(|h| !h.is_empty())).unwrap_or(false)
}

/// Turn a path or repository URL into something the renderer can walk.
pub fn fetch_repository(input: &str, branch: Option<&str>) -> Result<RepoContext> {
    if is_url(input) {
        clone_repository(input, branch, &std::env::temp_dir())
    } else {
        if branch.is_some() {
            debug!("Ignoring branch for local path");
        }
        local_repository(Path::new(input))
    }
}

fn local_repository(path: &Path) -> Result<RepoContext> {
    if path.is_dir() {
        return Ok(RepoContext {
            root_path: path.to_path_buf(),
            strip_prefix: path.to_string_lossy().into_owned(),
            clone_dir: None,
        });
    }
    if path.is_file() {
        // Show a single file by its name rather than an empty label.
        let parent = path.parent().map(|p| p.to_string_lossy().into_owned()).unwrap_or_default();
        return Ok(RepoContext {
            root_path: path.to_path_buf(),
            strip_prefix: parent,
            clone_dir: None,
        });
    }
    Err(SourcePromptError::InvalidInput(format!(
        "argument must be a valid git URL or file path: {}",
        path.display()
    )))
}

/// Clone `url` into a fresh directory under `parent`.
///
/// The directory is removed again if `git` fails.
fn clone_repository(url: &str, branch: Option<&str>, parent: &Path) -> Result<RepoContext> {
    let clone_dir = tempfile::Builder::new()
        .prefix(CLONE_DIR_PREFIX)
        .tempdir_in(parent)
        .map_err(|e| SourcePromptError::io(parent, e))?;
    debug!(url = %url, dir = %clone_dir.path().display(), "Cloning using git");

    let mut cmd = Command::new("git");
    cmd.env("GIT_TERMINAL_PROMPT", "0");
    cmd.arg("clone").arg("--depth").arg("1");
    if let Some(branch) = branch {
        cmd.arg("--branch").arg(branch);
    }
    cmd.arg(url).arg(clone_dir.path());

    let output = cmd.output().map_err(|e| SourcePromptError::Clone {
        url: url.to_string(),
        reason: format!("could not run git: {e}"),
    })?;
    if !output.status.success() {
        return Err(SourcePromptError::Clone {
            url: url.to_string(),
            reason: String::from_utf8_lossy(&output.stderr).trim().to_string(),
        });
    }
    debug!(dir = %clone_dir.path().display(), "Repository cloned successfully");

    let root_path = clone_dir.path().to_path_buf();
    Ok(RepoContext {
        strip_prefix: root_path.to_string_lossy().into_owned(),
        root_path,
        clone_dir: Some(clone_dir),
    })
}

impl Drop for RepoContext {
    fn drop(&mut self) {
        let Some(dir) = self.clone_dir.take() else {
            return;
        };
        let path = dir.path().to_path_buf();
        match dir.close() {
            Ok(()) => debug!(dir = %path.display(), "Temporary directory removed"),
            Err(e) => warn!(dir = %path.display(), error = %e, "Failed to remove temporary directory"),
        }
    }
}
