//! Utility functions

pub mod encoding;
pub mod paths;

pub use encoding::{is_binary_file, looks_binary, SNIFF_LEN};
pub use paths::display_path;
