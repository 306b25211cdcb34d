//! Common utilities

use std::io::{self, Write};
use xxhash_rust::xxh3::Xxh3;

/// Format an xxh3 digest as 16 hex digits
pub fn format_digest(digest: u64) -> String {
    format!("{:016x}", digest)
}

/// Compute the xxh3 hash of bytes as 16 hex digits
#[cfg(test)]
pub fn hash_bytes(data: &[u8]) -> String {
    format_digest(xxhash_rust::xxh3::xxh3_64(data))
}

/// Writer that hashes everything passed through to the inner writer
pub struct HashingWriter<W: Write> {
    inner: W,
    hasher: Xxh3,
}

impl<W: Write> HashingWriter<W> {
    pub fn new(inner: W) -> Self {
        Self {
            inner,
            hasher: Xxh3::new(),
        }
    }

    /// Hex xxh3 digest of all bytes written so far
    pub fn hex_digest(&self) -> String {
        format_digest(self.hasher.digest())
    }
}

impl<W: Write> Write for HashingWriter<W> {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        let written = self.inner.write(buf)?;
        self.hasher.update(&buf[..written]);
        Ok(written)
    }

    fn flush(&mut self) -> io::Result<()> {
        self.inner.flush()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hash_bytes() {
        let hash = hash_bytes(b"hello world");
        assert_eq!(hash.len(), 16); // 64-bit hex
        assert_eq!(hash, hash_bytes(b"hello world"));
        assert_ne!(hash, hash_bytes(b"hello world!"));
    }

    #[test]
    fn test_hashing_writer_matches_one_shot_hash() {
        let mut writer = HashingWriter::new(Vec::new());
        writer.write_all(b"\n\n--- FILE: a.py ---\n\n").unwrap();
        writer.write_all(b"x=1").unwrap();
        writer.flush().unwrap();

        let expected = hash_bytes(b"\n\n--- FILE: a.py ---\n\nx=1");
        assert_eq!(writer.hex_digest(), expected);
        assert_eq!(writer.inner, b"\n\n--- FILE: a.py ---\n\nx=1".to_vec());
    }

    #[test]
    fn test_hashing_writer_empty() {
        let writer = HashingWriter::new(Vec::new());
        assert_eq!(writer.hex_digest(), hash_bytes(b""));
    }
}
