//! Console progress reporting
//!
//! Progress goes to stderr so stdout stays free for `--json` summaries.
//! Nothing printed here affects the dump itself.

use colored::Colorize;
use std::path::Path;

use crate::core::model::DumpSummary;
use crate::core::paths::display_path;

/// How chatty the console should be
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Verbosity {
    Quiet,
    #[default]
    Normal,
    Verbose,
}

impl Verbosity {
    /// Resolve the `--quiet`/`--verbose` flags; quiet wins
    pub fn from_flags(quiet: bool, verbose: bool) -> Self {
        if quiet {
            Verbosity::Quiet
        } else if verbose {
            Verbosity::Verbose
        } else {
            Verbosity::Normal
        }
    }
}

/// Prints human-readable progress lines
#[derive(Debug, Clone, Copy, Default)]
pub struct Reporter {
    verbosity: Verbosity,
}

impl Reporter {
    pub fn new(verbosity: Verbosity, color: bool) -> Self {
        if !color {
            colored::control::set_override(false);
        }
        Self { verbosity }
    }

    /// Reporter that prints nothing
    #[cfg(test)]
    pub fn silent() -> Self {
        Self {
            verbosity: Verbosity::Quiet,
        }
    }

    fn normal(&self) -> bool {
        self.verbosity != Verbosity::Quiet
    }

    fn verbose(&self) -> bool {
        self.verbosity == Verbosity::Verbose
    }

    pub fn started(&self) {
        if self.normal() {
            eprintln!("🚀 {}", "codedump started".bold());
        }
    }

    pub fn scanning(&self, root: &Path) {
        if self.normal() {
            eprintln!("📌 Scanning directory: {}", display_path(root).cyan());
        }
    }

    pub fn pruned(&self, dir: &Path) {
        if self.verbose() {
            eprintln!("   {} {}", "skip".dimmed(), display_path(dir).dimmed());
        }
    }

    pub fn found(&self, count: usize) {
        if self.normal() {
            eprintln!("✅ Found {} source files", count.to_string().green());
        }
    }

    pub fn reading(&self, path: &Path) {
        if self.normal() {
            eprintln!("📂 Reading {}", display_path(path));
        }
    }

    pub fn read_failed(&self, path: &Path, reason: &str) {
        if self.verbose() {
            eprintln!(
                "   {} {}: {}",
                "⚠️  error".yellow(),
                display_path(path),
                reason
            );
        }
    }

    pub fn saved(&self, summary: &DumpSummary) {
        if !self.normal() {
            return;
        }
        eprintln!("🎉 Saved project dump to {}", summary.output.bold());
        if summary.failed > 0 {
            eprintln!(
                "   {} dumped, {} could not be read",
                summary.dumped(),
                summary.failed.to_string().yellow()
            );
        }
    }
}
