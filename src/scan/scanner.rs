//! Deterministic directory walker
//!
//! Visits entries in lexicographic depth-first order, applies the hidden,
//! filter and binary checks, and hands every surviving file to a visitor.

use crate::domain::{FileRecord, ScanStats};
use crate::error::{Result, SourcePromptError};
use crate::render::{detect_language, fence_for};
use crate::scan::filter::{PathFilter, Rejection};
use crate::utils::paths::is_hidden;
use crate::utils::{display_path, is_binary_file};
use std::fs;
use std::path::PathBuf;
use tracing::debug;
use walkdir::{DirEntry, WalkDir};

pub struct FileScanner {
    root: PathBuf,
    prefix: String,
    filter: PathFilter,
    stats: ScanStats,
}

impl FileScanner {
    /// Scanner over `root`, stripping `root` itself from displayed paths.
    pub fn new(root: impl Into<PathBuf>) -> Self {
        let root = root.into();
        let prefix = root.to_string_lossy().into_owned();
        Self { root, prefix, filter: PathFilter::default(), stats: ScanStats::default() }
    }

    pub fn strip_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.prefix = prefix.into();
        self
    }

    pub fn filter(mut self, filter: PathFilter) -> Self {
        self.filter = filter;
        self
    }

    pub fn stats(&self) -> &ScanStats {
        &self.stats
    }

    /// Walk the tree and call `visit` for each renderable file, in walk order.
    ///
    /// The first error, from the walk, a sniff, a read or the visitor,
    /// stops the walk and is returned.
    pub fn scan_with<F>(&mut self, mut visit: F) -> Result<()>
    where
        F: FnMut(FileRecord) -> Result<()>,
    {
        self.stats = ScanStats::default();
        let prefix = self.prefix.clone();

        let walker = WalkDir::new(&self.root)
            .follow_links(false)
            .sort_by_file_name()
            .into_iter()
            .filter_entry(|entry| !is_hidden_dir(entry, &prefix));

        for entry in walker {
            let entry = entry?;
            self.stats.entries_visited += 1;
            let path = entry.path();
            let shown = display_path(path, &prefix);
            debug!(path = %path.display(), display = %shown, "Processing");

            if path.is_dir() || is_hidden(&shown) {
                debug!(path = %path.display(), "Skipped: path is dir or starts with dot");
                self.stats.skipped_hidden_or_dir += 1;
                continue;
            }

            match self.filter.check(&shown) {
                Ok(()) => {}
                Err(Rejection::NotIncluded) => {
                    debug!(path = %path.display(), "Skipped: doesn't match any include pattern");
                    self.stats.skipped_include += 1;
                    continue;
                }
                Err(Rejection::Excluded) => {
                    debug!(path = %path.display(), "Skipped: matches exclude pattern");
                    self.stats.skipped_exclude += 1;
                    continue;
                }
            }

            if is_binary_file(path)? {
                debug!(path = %path.display(), "Skipped: binary file");
                self.stats.skipped_binary += 1;
                continue;
            }

            let content = fs::read(path).map_err(|e| SourcePromptError::io(path, e))?;
            self.stats.files_rendered += 1;
            self.stats.bytes_rendered += content.len() as u64;

            visit(FileRecord {
                language: detect_language(&shown),
                fence: fence_for(&shown),
                display_path: shown,
                content,
            })?;
        }

        debug!(stats = ?self.stats, "Walk complete");
        Ok(())
    }
}

// Descendants of a hidden directory are hidden too, so there is no need
// to descend. The root is never pruned.
fn is_hidden_dir(entry: &DirEntry, prefix: &str) -> bool {
    entry.depth() > 0 && entry.file_type().is_dir() && is_hidden(&display_path(entry.path(), prefix))
}
