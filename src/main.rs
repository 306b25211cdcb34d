//! codedump - Concatenate source files into a single annotated dump
//!
//! codedump:
//! - Walks the current directory, pruning dependency/VCS/cache folders
//! - Keeps files with a recognized source extension
//! - Writes every file into `project_dump.txt` under a `--- FILE: <path> ---` header

use anyhow::Result;
use clap::Parser;

mod backends;
mod cli;
mod core;
mod flows;

fn main() -> Result<()> {
    let cli = cli::Cli::parse();
    cli::run(cli)
}
