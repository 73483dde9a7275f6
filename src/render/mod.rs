//! Rendering of file records into fenced markdown blocks

pub mod fence;
pub mod language;

pub use fence::{fence_for, is_markdown};
pub use language::detect_language;

use crate::domain::{FileRecord, ScanStats};
use crate::error::Result;
use crate::scan::{FileScanner, PathFilter};
use std::path::Path;
use tracing::debug;

/// Walk `root` and render every eligible file.
///
/// `prefix` is removed from visited paths before display and filtering.
/// On error nothing is returned; partial output is dropped.
pub fn render_tree(root: &Path, prefix: &str, filter: &PathFilter) -> Result<Vec<u8>> {
    render_tree_with_stats(root, prefix, filter).map(|(out, _)| out)
}

/// Same as [`render_tree`], also returning what the walk saw.
pub fn render_tree_with_stats(
    root: &Path,
    prefix: &str,
    filter: &PathFilter,
) -> Result<(Vec<u8>, ScanStats)> {
    let mut scanner = FileScanner::new(root).strip_prefix(prefix).filter(filter.clone());
    let mut out = Vec::new();
    scanner.scan_with(|record| {
        append_block(&mut out, &record);
        Ok(())
    })?;
    debug!(
        files = scanner.stats().files_rendered,
        bytes = scanner.stats().bytes_rendered,
        "Rendering done"
    );
    Ok((out, scanner.stats().clone()))
}

/// Append one labelled, fenced block.
///
/// Content bytes are copied unchanged and always followed by exactly one
/// newline before the closing fence.
pub fn append_block(out: &mut Vec<u8>, record: &FileRecord) {
    out.push(b'`');
    out.extend_from_slice(record.display_path.as_bytes());
    out.extend_from_slice(b"`\n\n");

    out.extend_from_slice(record.fence.as_bytes());
    out.extend_from_slice(record.language.as_bytes());
    out.push(b'\n');

    out.extend_from_slice(&record.content);
    if record.content.last() != Some(&b'\n') {
        out.push(b'\n');
    }

    out.extend_from_slice(record.fence.as_bytes());
    out.extend_from_slice(b"\n\n");
}
