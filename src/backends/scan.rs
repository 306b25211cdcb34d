//! Source file collection
//!
//! Walks the root with walkdir, pruning excluded directories before they are
//! entered and keeping files whose name ends with a recognized extension.
//! Each directory's files come before anything from its subdirectories;
//! within those two groups the filesystem's listing order is kept.

use anyhow::{Context, Result};
use std::fs;
use std::path::Path;
use walkdir::{DirEntry, WalkDir};

use crate::core::model::ScanOutcome;
use crate::core::paths::{
    has_source_extension, is_excluded_dir, EXCLUDED_DIR_PATTERNS, SOURCE_EXTENSIONS,
};

/// Fixed rules for a scan
#[derive(Debug, Clone, Copy)]
pub struct ScanConfig {
    /// Recognized file-name suffixes
    pub extensions: &'static [&'static str],

    /// Substrings that prune a directory subtree
    pub excluded_dirs: &'static [&'static str],
}

impl Default for ScanConfig {
    fn default() -> Self {
        Self {
            extensions: SOURCE_EXTENSIONS,
            excluded_dirs: EXCLUDED_DIR_PATTERNS,
        }
    }
}

/// Collect source files under `root`
pub fn collect_source_files(root: &Path, config: &ScanConfig) -> Result<ScanOutcome> {
    // Only an unreadable root is fatal; errors deeper in the tree are skipped.
    fs::read_dir(root)
        .with_context(|| format!("Failed to read root directory: {}", root.display()))?;

    let mut outcome = ScanOutcome::default();
    // Stable sort: files first, then subdirectories, listing order otherwise
    let mut walker = WalkDir::new(root)
        .follow_links(false)
        .sort_by(|a, b| a.file_type().is_dir().cmp(&b.file_type().is_dir()))
        .into_iter();

    while let Some(entry) = walker.next() {
        let entry = match entry {
            Ok(e) => e,
            Err(_) => continue,
        };

        let path = entry.path();

        if entry.file_type().is_dir() {
            if is_excluded_dir(path, config.excluded_dirs) {
                outcome.pruned_dirs.push(path.to_path_buf());
                walker.skip_current_dir();
            }
            continue;
        }

        // Symlinked directories are listed but never entered or dumped
        if is_symlinked_dir(&entry) {
            continue;
        }

        let name = entry.file_name().to_string_lossy();
        if has_source_extension(&name, config.extensions) {
            outcome.files.push(path.to_path_buf());
        }
    }

    Ok(outcome)
}

fn is_symlinked_dir(entry: &DirEntry) -> bool {
    entry.file_type().is_symlink() && entry.path().is_dir()
}
