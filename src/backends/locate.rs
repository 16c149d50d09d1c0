//! Repository root discovery
//!
//! Archives exported from code hosts wrap everything in one top-level
//! folder. The locator unwraps it before the tree is walked.

use std::fs;
use std::path::{Path, PathBuf};
use tracing::debug;

use crate::core::error::PackError;

/// Return the first subdirectory of `dir`
///
/// Entries are ordered by file name, so an archive with several top-level
/// directories always resolves to the same one. Plain files are ignored.
pub fn find_repository_root(dir: &Path) -> Result<PathBuf, PackError> {
    let entries = fs::read_dir(dir).map_err(|e| PackError::walk(dir, e))?;

    let mut subdirs = Vec::new();
    for entry in entries {
        let entry = entry.map_err(|e| PackError::walk(dir, e))?;
        let file_type = entry.file_type().map_err(|e| PackError::walk(entry.path(), e))?;
        if file_type.is_dir() {
            subdirs.push(entry.path());
        }
    }

    subdirs.sort();
    let root = subdirs.into_iter().next().ok_or_else(|| PackError::NotFound {
        path: dir.to_path_buf(),
    })?;

    debug!(root = %root.display(), "repository root located");
    Ok(root)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::error::ErrorKind;
    use tempfile::tempdir;

    #[test]
    fn test_single_subdir() {
        let temp = tempdir().unwrap();
        fs::create_dir(temp.path().join("proj")).unwrap();

        let root = find_repository_root(temp.path()).unwrap();
        assert_eq!(root, temp.path().join("proj"));
    }

    #[test]
    fn test_skips_files() {
        let temp = tempdir().unwrap();
        fs::write(temp.path().join("aaa.txt"), "x").unwrap();
        fs::create_dir(temp.path().join("zzz")).unwrap();

        let root = find_repository_root(temp.path()).unwrap();
        assert_eq!(root, temp.path().join("zzz"));
    }

    #[test]
    fn test_multiple_subdirs_is_deterministic() {
        let temp = tempdir().unwrap();
        fs::create_dir(temp.path().join("beta")).unwrap();
        fs::create_dir(temp.path().join("alpha")).unwrap();

        let root = find_repository_root(temp.path()).unwrap();
        assert_eq!(root, temp.path().join("alpha"));
    }

    #[test]
    fn test_no_subdir() {
        let temp = tempdir().unwrap();
        fs::write(temp.path().join("main.go"), "package main").unwrap();

        let err = find_repository_root(temp.path()).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::NotFound);
    }

    #[test]
    fn test_missing_dir() {
        let temp = tempdir().unwrap();
        let err = find_repository_root(&temp.path().join("nope")).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Walk);
    }
}
