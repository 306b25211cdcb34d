//! CLI module - Command-line interface definitions and handlers

use anyhow::{Context, Result};
use clap::Parser;

use crate::core::report::{Reporter, Verbosity};

/// codedump - concatenate the source files under the current directory into one file.
#[derive(Parser, Debug)]
#[command(name = "codedump")]
#[command(
    author,
    version,
    about,
    long_about = r#"codedump scans the current directory and writes every recognized source
file into project_dump.txt, each under a header naming its path:

    --- FILE: /path/to/file.py ---

Recognized extensions: .py .js .ts .java .cpp .c .cs .html .css .json .md
Skipped directories: any path containing node_modules, .git, venv or __pycache__

Files that cannot be read as UTF-8 get an "(Error reading: ...)" header instead
of their contents. The output file is overwritten on every run.

Examples:
    codedump
    codedump --quiet --json
"#
)]
pub struct Cli {
    /// Quiet mode (no progress output).
    #[arg(
        short,
        long,
        long_help = "Suppress progress lines on stderr. The dump file is written as usual,\n\
and --json still prints the summary to stdout."
    )]
    pub quiet: bool,

    /// Verbose mode (show skipped directories and read errors).
    #[arg(
        short,
        long,
        long_help = "Also report every pruned directory and every file that could not be\n\
read. Ignored when --quiet is given."
    )]
    pub verbose: bool,

    /// Disable colored output.
    #[arg(
        long,
        long_help = "Disable colored output. This is useful when piping stderr to a file or\n\
when your terminal does not support ANSI colors."
    )]
    pub no_color: bool,

    /// Print a JSON summary of the run on stdout.
    #[arg(
        long,
        long_help = "Print one JSON object describing the run on stdout once the dump is\n\
written: root, output, sections, failed, bytes and an xxh3 hash of the output."
    )]
    pub json: bool,
}

/// Run the CLI with parsed arguments
pub fn run(cli: Cli) -> Result<()> {
    let reporter = Reporter::new(
        Verbosity::from_flags(cli.quiet, cli.verbose),
        !cli.no_color,
    );

    let root = std::env::current_dir().context("Failed to determine current directory")?;

    crate::flows::dump::run_dump(&root, &reporter, cli.json)
}
