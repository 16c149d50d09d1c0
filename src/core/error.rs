//! Pipeline errors
//!
//! Every stage fails fast with one of these errors. Each variant carries the
//! path that caused it so the CLI can report it without extra context.

use std::io;
use std::path::PathBuf;
use thiserror::Error;
use zip::result::ZipError;

/// Broad classification of a [`PackError`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    Extraction,
    NotFound,
    Walk,
    Write,
    Config,
}

impl ErrorKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            ErrorKind::Extraction => "EXTRACTION_ERROR",
            ErrorKind::NotFound => "NOT_FOUND",
            ErrorKind::Walk => "WALK_ERROR",
            ErrorKind::Write => "WRITE_ERROR",
            ErrorKind::Config => "INVALID_CONFIG",
        }
    }
}

#[derive(Debug, Error)]
pub enum PackError {
    #[error("failed to create scratch directory: {source}")]
    Scratch {
        #[source]
        source: io::Error,
    },

    #[error("failed to extract {}: {source}", .path.display())]
    Extraction {
        path: PathBuf,
        #[source]
        source: ZipError,
    },

    #[error("archive {} contains unsafe entry path: {entry}", .archive.display())]
    UnsafeEntry { archive: PathBuf, entry: String },

    #[error("no subdirectories found in: {}", .path.display())]
    NotFound { path: PathBuf },

    #[error("failed to read {}: {source}", .path.display())]
    Walk {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("failed to write to file {}: {source}", .path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("invalid configuration: {0}")]
    InvalidConfig(String),
}

impl PackError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            PackError::Scratch { .. }
            | PackError::Extraction { .. }
            | PackError::UnsafeEntry { .. } => ErrorKind::Extraction,
            PackError::NotFound { .. } => ErrorKind::NotFound,
            PackError::Walk { .. } => ErrorKind::Walk,
            PackError::Write { .. } => ErrorKind::Write,
            PackError::InvalidConfig(_) => ErrorKind::Config,
        }
    }

    pub(crate) fn extraction(path: impl Into<PathBuf>, source: impl Into<ZipError>) -> Self {
        PackError::Extraction {
            path: path.into(),
            source: source.into(),
        }
    }

    pub(crate) fn walk(path: impl Into<PathBuf>, source: io::Error) -> Self {
        PackError::Walk {
            path: path.into(),
            source,
        }
    }

    pub(crate) fn write(path: impl Into<PathBuf>, source: io::Error) -> Self {
        PackError::Write {
            path: path.into(),
            source,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_kind_mapping() {
        let err = PackError::NotFound {
            path: PathBuf::from("/tmp/x"),
        };
        assert_eq!(err.kind(), ErrorKind::NotFound);
        assert_eq!(err.kind().as_str(), "NOT_FOUND");

        let err = PackError::UnsafeEntry {
            archive: PathBuf::from("a.zip"),
            entry: "../evil".to_string(),
        };
        assert_eq!(err.kind(), ErrorKind::Extraction);
    }

    #[test]
    fn test_message_includes_path() {
        let err = PackError::write(
            "out/proj_2.txt",
            io::Error::new(io::ErrorKind::PermissionDenied, "denied"),
        );
        let msg = err.to_string();
        assert!(msg.contains("out/proj_2.txt"));
        assert!(msg.contains("denied"));
    }
}
