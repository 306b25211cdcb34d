//! Flows module - Operations combining multiple stages
//!
//! Provides:
//! - dump: Collect source files and write them into one annotated file

pub mod dump;
