//! Dump flow - Write every collected source file into one annotated file
//!
//! The output is truncated up front and filled section by section in
//! collection order. A file that cannot be read becomes an error placeholder
//! section; only failures on the output itself abort the run.

use anyhow::{Context, Result};
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

use crate::backends::scan::{collect_source_files, ScanConfig};
use crate::core::file_reader::read_source;
use crate::core::model::DumpSummary;
use crate::core::paths::display_path;
use crate::core::render::{error_section, section_header};
use crate::core::report::Reporter;
use crate::core::util::HashingWriter;

/// Name of the dump file, created in the scanned directory
pub const OUTPUT_FILE: &str = "project_dump.txt";

/// Write one section per file into `out`.
///
/// The returned summary carries section, failure and byte counts only.
pub fn write_sections<W: Write>(
    files: &[PathBuf],
    out: &mut W,
    reporter: &Reporter,
) -> Result<DumpSummary> {
    let mut summary = DumpSummary::default();

    for path in files {
        reporter.reading(path);
        let shown = display_path(path);

        let written = match read_source(path) {
            Ok(content) => {
                write_chunk(out, &section_header(&shown), &shown)?
                    + write_chunk(out, &content, &shown)?
            }
            Err(err) => {
                let reason = err.to_string();
                reporter.read_failed(path, &reason);
                summary.failed += 1;
                write_chunk(out, &error_section(&shown, &reason), &shown)?
            }
        };

        summary.sections += 1;
        summary.bytes += written;
    }

    Ok(summary)
}

fn write_chunk<W: Write>(out: &mut W, chunk: &str, shown: &str) -> Result<u64> {
    out.write_all(chunk.as_bytes())
        .with_context(|| format!("Failed to write section for {}", shown))?;
    Ok(chunk.len() as u64)
}

/// Create (or truncate) `output` and dump `files` into it
pub fn save_contents(files: &[PathBuf], output: &Path, reporter: &Reporter) -> Result<DumpSummary> {
    let file = File::create(output)
        .with_context(|| format!("Failed to create output file: {}", output.display()))?;
    let mut writer = HashingWriter::new(BufWriter::new(file));

    let mut summary = write_sections(files, &mut writer, reporter)?;
    writer
        .flush()
        .with_context(|| format!("Failed to flush output file: {}", output.display()))?;

    summary.output = display_path(output);
    summary.hash = Some(writer.hex_digest());
    Ok(summary)
}

/// Run the dump over `root`, writing `OUTPUT_FILE` inside it
pub fn run_dump(root: &Path, reporter: &Reporter, json: bool) -> Result<()> {
    reporter.started();
    reporter.scanning(root);

    let outcome = collect_source_files(root, &ScanConfig::default())?;
    for dir in &outcome.pruned_dirs {
        reporter.pruned(dir);
    }
    reporter.found(outcome.file_count());

    let mut summary = save_contents(&outcome.files, &root.join(OUTPUT_FILE), reporter)?;
    summary.root = display_path(root);
    reporter.saved(&summary);

    if json {
        println!("{}", serde_json::to_string(&summary)?);
    }

    Ok(())
}
