//! Strict UTF-8 file reading
//!
//! Content is never converted lossily: a file that is not valid UTF-8 is
//! reported as a read failure instead. Decoded text has its line endings
//! normalized to `\n` (`\r\n` and lone `\r` alike).

use std::fs;
use std::path::Path;
use std::string::FromUtf8Error;
use thiserror::Error;

/// Why a source file could not be dumped
#[derive(Error, Debug)]
pub enum ReadError {
    /// Opening or reading the file failed (permissions, vanished file, ...)
    #[error("{0}")]
    Io(#[from] std::io::Error),

    /// The bytes were read but are not valid UTF-8
    #[error("invalid UTF-8: {0}")]
    Decode(#[from] FromUtf8Error),
}

/// Read a file's full contents as UTF-8 text with `\n` line endings
pub fn read_source(path: &Path) -> Result<String, ReadError> {
    let bytes = fs::read(path)?;
    Ok(normalize_newlines(String::from_utf8(bytes)?))
}

/// Turn `\r\n` and lone `\r` into `\n`
fn normalize_newlines(text: String) -> String {
    if !text.contains('\r') {
        return text;
    }
    text.replace("\r\n", "\n").replace('\r', "\n")
}
