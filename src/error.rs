//! Error types shared by the rendering pipeline and its collaborators

use std::path::PathBuf;
use thiserror::Error;

pub type Result<T, E = SourcePromptError> = std::result::Result<T, E>;

#[derive(Error, Debug)]
#[non_exhaustive]
pub enum SourcePromptError {
    #[error("failed to read {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to walk directory: {0}")]
    Walk(#[from] walkdir::Error),

    #[error("invalid pattern \"{pattern}\": {source}")]
    Pattern {
        pattern: String,
        #[source]
        source: regex::Error,
    },

    #[error("failed to read prompt file {path}: {source}")]
    PromptFile {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to download prompt from {url}: HTTP {status}")]
    PromptFetch { url: String, status: u16 },

    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("failed to clone git repository {url}: {reason}")]
    Clone { url: String, reason: String },

    #[error("failed to write output {path}: {source}")]
    OutputWrite {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("configuration error: {0}")]
    Config(#[from] Box<figment::Error>),

    #[error("{0}")]
    InvalidInput(String),
}

impl From<figment::Error> for SourcePromptError {
    fn from(err: figment::Error) -> Self {
        SourcePromptError::Config(Box::new(err))
    }
}

impl SourcePromptError {
    pub(crate) fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        SourcePromptError::Io { path: path.into(), source }
    }
}
