//! Section rendering
//!
//! The dump file is a sequence of sections, each opened by a header line
//! carrying the source path:
//!
//! ```text
//! \n\n--- FILE: <path> ---\n\n<contents>
//! \n\n--- FILE: <path> (Error reading: <reason>) ---\n\n
//! ```

/// Marker that opens every section header
pub const HEADER_PREFIX: &str = "--- FILE: ";

/// Header written before a file's contents
pub fn section_header(path: &str) -> String {
    format!("\n\n{}{} ---\n\n", HEADER_PREFIX, path)
}

/// Placeholder written instead of contents when a file cannot be read
pub fn error_section(path: &str, reason: &str) -> String {
    format!(
        "\n\n{}{} (Error reading: {}) ---\n\n",
        HEADER_PREFIX, path, reason
    )
}

/// Count the sections in a rendered dump
#[cfg(test)]
pub fn count_sections(dump: &str) -> usize {
    dump.matches(&format!("\n\n{}", HEADER_PREFIX)).count()
}
