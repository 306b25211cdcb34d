//! Backends module - File system operations
//!
//! Provides:
//! - scan: Source file collection with walkdir

pub mod scan;
