//! Backends module - Filesystem stages of the pipeline
//!
//! Provides:
//! - extract: Zip archive extraction
//! - locate: Repository root discovery
//! - scan: File collection with ignore
//! - write: Single-file and multi-part output

pub mod extract;
pub mod locate;
pub mod scan;
pub mod write;
