//! Display path computation

use std::path::Path;

/// Remove `prefix` from `path` and trim leading separators.
///
/// This is plain string prefix removal: a path that does not start with
/// `prefix` is returned unchanged apart from separator trimming. An empty
/// prefix strips nothing.
pub fn display_path(path: &Path, prefix: &str) -> String {
    let full = path.to_string_lossy();
    let stripped = full.strip_prefix(prefix).unwrap_or(&full);
    stripped.trim_start_matches(['/', '\\']).to_string()
}

/// Whether a display path names a hidden entry (leading `.`).
pub fn is_hidden(display_path: &str) -> bool {
    display_path.starts_with('.')
}
