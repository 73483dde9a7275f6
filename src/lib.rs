//! sourceprompt: convert a codebase into a single LLM prompt
//!
//! Walks a local directory (or a freshly cloned repository), renders every
//! text file as a labelled, fenced markdown block and prefixes the result
//! with an instructional prompt.

pub mod cli;
pub mod config;
pub mod domain;
pub mod error;
pub mod fetch;
pub mod output;
pub mod prompt;
pub mod render;
pub mod scan;
pub mod utils;

pub use domain::{Config, FileRecord, ScanStats};
pub use error::{Result, SourcePromptError};
pub use prompt::{generate_prompt, PromptSource, DEFAULT_PROMPT};
pub use render::render_tree;
pub use scan::PathFilter;
