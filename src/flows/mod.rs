//! Flows module - Operations combining multiple backends
//!
//! Provides:
//! - pack: Archive to prompt-ready text files

pub mod pack;
