//! Run model
//!
//! What the collector hands to the dumper, and what a finished dump reports.

use serde::Serialize;
use std::path::PathBuf;

/// Result of walking the root directory
#[derive(Debug, Clone, Default)]
pub struct ScanOutcome {
    /// Files to dump, in walk order
    pub files: Vec<PathBuf>,

    /// Directories skipped because they matched an excluded substring
    pub pruned_dirs: Vec<PathBuf>,
}

impl ScanOutcome {
    pub fn file_count(&self) -> usize {
        self.files.len()
    }
}

/// Summary of a completed dump
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct DumpSummary {
    /// Directory that was scanned
    pub root: String,

    /// File the dump was written to
    pub output: String,

    /// Number of sections written (one per collected file)
    pub sections: usize,

    /// Sections written as error placeholders
    pub failed: usize,

    /// Total bytes written to the output file
    pub bytes: u64,

    /// xxh3 digest of the output file
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hash: Option<String>,
}

impl DumpSummary {
    /// Sections whose contents were dumped successfully
    pub fn dumped(&self) -> usize {
        self.sections - self.failed
    }
}
