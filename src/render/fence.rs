//! Code fence selection

/// Standard fence.
pub const FENCE: &str = "```";

/// Fence for markdown files, one backtick longer than any fence they are
/// likely to contain.
pub const MARKDOWN_FENCE: &str = "````";

pub fn is_markdown(path: &str) -> bool {
    let lower = path.to_ascii_lowercase();
    lower.ends_with(".md") || lower.ends_with(".markdown")
}

pub fn fence_for(path: &str) -> &'static str {
    if is_markdown(path) {
        MARKDOWN_FENCE
    } else {
        FENCE
    }
}
