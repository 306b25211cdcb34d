//! Core module - Contains the fundamental data structures and utilities
//!
//! This module provides:
//! - Run model (scan outcome, dump summary)
//! - Section rendering for the dump file
//! - Path rules (exclusions, extensions)
//! - Strict UTF-8 file reading
//! - Console progress reporting
//! - Common utilities

pub mod file_reader;
pub mod model;
pub mod paths;
pub mod render;
pub mod report;
pub mod util;
