//! Path rules
//!
//! Directory exclusion and extension matching used by the collector.
//! Both are plain, case-sensitive string checks.

use std::path::Path;

/// Extensions a file name must end with to be dumped
pub const SOURCE_EXTENSIONS: &[&str] = &[
    ".py", ".js", ".ts", ".java", ".cpp", ".c", ".cs", ".html", ".css", ".json", ".md",
];

/// Substrings that prune a directory (and everything below it)
pub const EXCLUDED_DIR_PATTERNS: &[&str] = &["node_modules", ".git", "venv", "__pycache__"];

/// Render a path for headers and console output
pub fn display_path(path: &Path) -> String {
    path.to_string_lossy().into_owned()
}

/// Check whether a directory's full path contains any excluded substring.
///
/// Matches anywhere in the path, not only on whole segments: `advenvironment`
/// is pruned because it contains `venv`.
pub fn is_excluded_dir(path: &Path, patterns: &[&str]) -> bool {
    let full = path.to_string_lossy();
    patterns.iter().any(|pattern| full.contains(pattern))
}

/// Check whether a file name ends with one of the recognized extensions
pub fn has_source_extension(name: &str, extensions: &[&str]) -> bool {
    extensions.iter().any(|ext| name.ends_with(ext))
}
