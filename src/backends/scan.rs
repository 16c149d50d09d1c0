//! File collection backend
//!
//! Uses the ignore crate for a sorted depth-first walk of the repository
//! root. Every regular file that passes the extension filter and holds
//! valid UTF-8 becomes a RepositoryFile.
//!
//! The extension filter is checked before a file is read, so rejected files
//! are never opened and a read failure on one of them cannot abort the walk.

use ignore::WalkBuilder;
use std::fs;
use std::io;
use std::path::Path;
use tracing::{debug, info, warn};

use crate::core::error::PackError;
use crate::core::filter::ExtensionFilter;
use crate::core::model::{Repository, RepositoryFile};
use crate::core::paths::{make_relative, normalize_path};

/// Options controlling which files are collected
#[derive(Debug, Clone, Default)]
pub struct ScanOptions {
    /// Accepted extensions; `None` collects every text file
    pub filter: Option<ExtensionFilter>,

    /// Honor .gitignore and .ignore files inside the tree
    pub respect_ignore: bool,
}

/// Walk `root` and collect its text files in traversal order
///
/// Binary (non-UTF-8) files are skipped silently. Any I/O failure aborts
/// the walk and no partial repository is returned.
pub fn collect_files(root: &Path, options: &ScanOptions) -> Result<Repository, PackError> {
    let mut builder = WalkBuilder::new(root);
    builder
        .standard_filters(false)
        .follow_links(false)
        .sort_by_file_name(|a, b| a.cmp(b));

    if options.respect_ignore {
        builder
            .ignore(true)
            .git_ignore(true)
            .git_exclude(true)
            .require_git(false);
    }

    let mut repo = Repository::new();
    let mut skipped_binary = 0usize;

    for result in builder.build() {
        let entry = match result {
            Ok(entry) => entry,
            // Malformed ignore rules are reported but do not stop the walk
            Err(err) if err.io_error().is_none() => {
                warn!(error = %err, "ignoring walk warning");
                continue;
            }
            Err(err) => return Err(walk_error(root, err)),
        };

        let is_file = entry.file_type().map(|ft| ft.is_file()).unwrap_or(false);
        if !is_file {
            continue;
        }

        let path = entry.path();
        if let Some(filter) = &options.filter {
            if !filter.accepts(path) {
                continue;
            }
        }

        let bytes = fs::read(path).map_err(|e| PackError::walk(path, e))?;
        let contents = match String::from_utf8(bytes) {
            Ok(contents) => contents,
            Err(_) => {
                debug!(path = %path.display(), "skipping non-UTF-8 file");
                skipped_binary += 1;
                continue;
            }
        };

        let relative = make_relative(path, root).unwrap_or_else(|| normalize_path(path));
        repo.push(RepositoryFile::new(relative, contents));
    }

    info!(files = repo.file_count(), skipped_binary, "repository collected");
    Ok(repo)
}

fn walk_error(root: &Path, err: ignore::Error) -> PackError {
    match err {
        ignore::Error::WithPath { path, err } => walk_error(&path, *err),
        ignore::Error::WithDepth { err, .. } | ignore::Error::WithLineNumber { err, .. } => {
            walk_error(root, *err)
        }
        ignore::Error::Io(source) => PackError::walk(root, source),
        other => PackError::walk(root, io::Error::other(other.to_string())),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::BTreeSet;
    use tempfile::tempdir;

    fn write_file(root: &Path, relative: &str, contents: &[u8]) {
        let path = root.join(relative);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).unwrap();
        }
        fs::write(path, contents).unwrap();
    }

    fn all_files() -> ScanOptions {
        ScanOptions::default()
    }

    #[test]
    fn test_collect_empty_dir() {
        let temp = tempdir().unwrap();
        let repo = collect_files(temp.path(), &all_files()).unwrap();
        assert!(repo.is_empty());
    }

    #[test]
    fn test_collect_sorted_depth_first() {
        let temp = tempdir().unwrap();
        write_file(temp.path(), "b.txt", b"b");
        write_file(temp.path(), "a.txt", b"a");
        write_file(temp.path(), "sub/zz.md", b"z");
        write_file(temp.path(), "sub/deeper/x.rs", b"x");
        write_file(temp.path(), "z.txt", b"z");

        let repo = collect_files(temp.path(), &all_files()).unwrap();

        assert_eq!(
            repo.paths().collect::<Vec<_>>(),
            vec!["a.txt", "b.txt", "sub/deeper/x.rs", "sub/zz.md", "z.txt"]
        );
    }

    #[test]
    fn test_skips_non_utf8() {
        let temp = tempdir().unwrap();
        write_file(temp.path(), "main.go", b"package main\n");
        write_file(temp.path(), "logo.png", &[0x89, 0x50, 0x4e, 0x47, 0xff, 0xfe, 0x00]);

        let repo = collect_files(temp.path(), &all_files()).unwrap();

        assert_eq!(repo.paths().collect::<Vec<_>>(), vec!["main.go"]);
    }

    #[test]
    fn test_filter_by_extension() {
        let temp = tempdir().unwrap();
        write_file(temp.path(), "main.go", b"package main");
        write_file(temp.path(), "README.md", b"# readme");
        write_file(temp.path(), "web/App.JS", b"export {}");
        write_file(temp.path(), "Makefile", b"all:");

        let options = ScanOptions {
            filter: Some(ExtensionFilter::source_defaults()),
            respect_ignore: false,
        };
        let repo = collect_files(temp.path(), &options).unwrap();

        let paths: BTreeSet<_> = repo.paths().collect();
        assert_eq!(paths, BTreeSet::from(["main.go", "web/App.JS"]));
    }

    #[cfg(unix)]
    #[test]
    fn test_rejected_file_is_never_read() {
        use std::os::unix::fs::PermissionsExt;

        let temp = tempdir().unwrap();
        write_file(temp.path(), "main.go", b"package main");
        write_file(temp.path(), "secret.key", b"hidden");
        let locked = temp.path().join("secret.key");
        fs::set_permissions(&locked, fs::Permissions::from_mode(0o000)).unwrap();
        // Permission bits do not apply to root
        if fs::read(&locked).is_ok() {
            return;
        }

        let options = ScanOptions {
            filter: Some(ExtensionFilter::source_defaults()),
            respect_ignore: false,
        };
        let repo = collect_files(temp.path(), &options).unwrap();
        assert_eq!(repo.paths().collect::<Vec<_>>(), vec!["main.go"]);

        let err = collect_files(temp.path(), &all_files()).unwrap_err();
        assert_eq!(err.kind(), crate::core::error::ErrorKind::Walk);
    }

    #[test]
    fn test_count_matches_files_on_disk() {
        let temp = tempdir().unwrap();
        for i in 0..25 {
            write_file(temp.path(), &format!("d{}/f{}.py", i % 4, i), b"pass\n");
        }

        let repo = collect_files(temp.path(), &all_files()).unwrap();
        assert_eq!(repo.file_count(), 25);
    }

    #[test]
    fn test_hidden_and_ignored_files_included_by_default() {
        let temp = tempdir().unwrap();
        write_file(temp.path(), ".gitignore", b"build/\n");
        write_file(temp.path(), ".env.example", b"KEY=value");
        write_file(temp.path(), "build/out.txt", b"generated");

        let repo = collect_files(temp.path(), &all_files()).unwrap();

        let paths: BTreeSet<_> = repo.paths().collect();
        assert_eq!(
            paths,
            BTreeSet::from([".env.example", ".gitignore", "build/out.txt"])
        );
    }

    #[test]
    fn test_respect_ignore() {
        let temp = tempdir().unwrap();
        write_file(temp.path(), ".gitignore", b"build/\n*.log\n");
        write_file(temp.path(), "build/out.txt", b"generated");
        write_file(temp.path(), "debug.log", b"trace");
        write_file(temp.path(), "src/lib.rs", b"pub fn f() {}");

        let options = ScanOptions {
            filter: None,
            respect_ignore: true,
        };
        let repo = collect_files(temp.path(), &options).unwrap();

        let paths: BTreeSet<_> = repo.paths().collect();
        assert_eq!(paths, BTreeSet::from([".gitignore", "src/lib.rs"]));
    }

    #[test]
    fn test_per_file_tokens() {
        let temp = tempdir().unwrap();
        write_file(temp.path(), "a.txt", b"1234567");

        let repo = collect_files(temp.path(), &all_files()).unwrap();
        assert_eq!(repo.files[0].tokens(), 2);
        assert_eq!(repo.files[0].contents(), "1234567");
    }

    #[test]
    fn test_missing_root_is_walk_error() {
        let temp = tempdir().unwrap();
        let err = collect_files(&temp.path().join("missing"), &all_files()).unwrap_err();
        assert_eq!(err.kind(), crate::core::error::ErrorKind::Walk);
    }
}
