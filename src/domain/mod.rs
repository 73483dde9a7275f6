//! Core domain types
//!
//! Defines the per-invocation `Config`, the `FileRecord` produced for every
//! rendered file, and the `ScanStats` summary of a walk.

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// A single file selected for rendering.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileRecord {
    /// Path with the traversal prefix removed; what appears in the output
    pub display_path: String,

    /// Raw file content
    pub content: Vec<u8>,

    /// Fence language hint (may be empty)
    pub language: &'static str,

    /// Fence delimiter
    pub fence: &'static str,
}

/// Statistics collected while walking a tree
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ScanStats {
    /// Every entry the walker produced, directories included
    pub entries_visited: usize,

    /// Files rendered into the output
    pub files_rendered: usize,

    /// Directories and hidden paths
    pub skipped_hidden_or_dir: usize,

    /// Files rejected because no include pattern matched
    pub skipped_include: usize,

    /// Files rejected by an exclude pattern
    pub skipped_exclude: usize,

    /// Files classified as binary
    pub skipped_binary: usize,

    /// Total bytes of rendered file content
    pub bytes_rendered: u64,
}

/// Configuration for one invocation.
///
/// Built once from defaults, an optional config file, the environment and
/// the command line, then passed by reference into the pipeline.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    /// Skip the prompt header entirely
    #[serde(default)]
    pub raw: bool,

    /// Custom prompt: local file path or http(s) URL
    #[serde(default)]
    pub prompt: Option<String>,

    /// Include regular expressions (empty means everything)
    #[serde(default, alias = "includes")]
    pub include: Vec<String>,

    /// Exclude regular expressions
    #[serde(default, alias = "excludes")]
    pub exclude: Vec<String>,

    /// Output file; stdout when unset
    #[serde(default)]
    pub output: Option<PathBuf>,

    /// Branch or tag to check out when the input is a remote repository
    #[serde(default, alias = "ref")]
    pub branch: Option<String>,
}
