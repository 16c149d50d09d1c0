//! Core module - Contains the fundamental data structures and utilities
//!
//! This module provides:
//! - Repository model and run report
//! - Pipeline error type
//! - Extension filter for source files
//! - Serializer for the delimited text format
//! - Token estimation
//! - Report rendering and path helpers

pub mod error;
pub mod filter;
pub mod model;
pub mod paths;
pub mod render;
pub mod serialize;
pub mod tokenizer;
pub mod util;
