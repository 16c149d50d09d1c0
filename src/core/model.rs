//! Repository model
//!
//! The collector produces a [`Repository`] of [`RepositoryFile`]s, the
//! serializer fills in the authoritative token total, and the pipeline
//! summarizes the run as a [`PackReport`].

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use crate::core::tokenizer::estimate_tokens;

/// One text file collected from the repository
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RepositoryFile {
    /// Path relative to the repository root, using '/' as separator
    path: String,

    /// Full file contents (always valid UTF-8)
    contents: String,

    /// Estimated token count of `contents` (informational)
    tokens: usize,
}

impl RepositoryFile {
    pub fn new(path: impl Into<String>, contents: impl Into<String>) -> Self {
        let contents = contents.into();
        let tokens = estimate_tokens(&contents);
        Self {
            path: path.into(),
            contents,
            tokens,
        }
    }

    pub fn path(&self) -> &str {
        &self.path
    }

    pub fn contents(&self) -> &str {
        &self.contents
    }

    pub fn tokens(&self) -> usize {
        self.tokens
    }
}

/// The ordered set of files making up one repository
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Repository {
    pub files: Vec<RepositoryFile>,

    /// Estimate over the serialized blob; `None` until serialized
    #[serde(skip_serializing_if = "Option::is_none")]
    pub total_tokens: Option<usize>,
}

impl Repository {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, file: RepositoryFile) {
        self.files.push(file);
    }

    pub fn file_count(&self) -> usize {
        self.files.len()
    }

    pub fn is_empty(&self) -> bool {
        self.files.is_empty()
    }

    /// Iterate over file paths in traversal order
    pub fn paths(&self) -> impl Iterator<Item = &str> {
        self.files.iter().map(|f| f.path())
    }
}

/// Summary of a finished pipeline run
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PackReport {
    /// Name of the repository root directory found in the archive
    pub repository: String,

    /// Number of files included in the output
    pub files: usize,

    /// Length of the serialized blob in bytes
    pub bytes: usize,

    /// Estimated tokens of the whole serialized blob
    pub total_tokens: usize,

    /// Written output files, in part order
    pub outputs: Vec<PathBuf>,

    /// xxh3 checksum of the serialized blob
    pub content_hash: String,
}
