//! Zip archive extraction
//!
//! Expands every entry of an archive under a destination directory,
//! keeping relative paths and the declared unix file modes.

use std::fs::{self, File};
use std::io;
use std::path::Path;
use tracing::{debug, info};
use zip::ZipArchive;

use crate::core::error::PackError;

/// Extract `archive` into `dest`, returning the number of entries written
///
/// The first failing entry aborts the extraction. Entries whose names would
/// resolve outside `dest` are rejected.
pub fn extract_archive(archive: &Path, dest: &Path) -> Result<usize, PackError> {
    let file = File::open(archive).map_err(|e| PackError::extraction(archive, e))?;
    let mut zip = ZipArchive::new(file).map_err(|e| PackError::extraction(archive, e))?;

    fs::create_dir_all(dest).map_err(|e| PackError::extraction(dest, e))?;

    for index in 0..zip.len() {
        let mut entry = zip
            .by_index(index)
            .map_err(|e| PackError::extraction(archive, e))?;

        let relative = entry
            .enclosed_name()
            .ok_or_else(|| PackError::UnsafeEntry {
                archive: archive.to_path_buf(),
                entry: entry.name().to_string(),
            })?;
        let out_path = dest.join(relative);

        if entry.is_dir() {
            fs::create_dir_all(&out_path).map_err(|e| PackError::extraction(&out_path, e))?;
            continue;
        }

        if let Some(parent) = out_path.parent() {
            fs::create_dir_all(parent).map_err(|e| PackError::extraction(parent, e))?;
        }

        let mut out_file =
            File::create(&out_path).map_err(|e| PackError::extraction(&out_path, e))?;
        io::copy(&mut entry, &mut out_file).map_err(|e| PackError::extraction(&out_path, e))?;
        drop(out_file);

        if let Some(mode) = entry.unix_mode() {
            set_mode(&out_path, mode)?;
        }

        debug!(entry = %entry.name(), "extracted");
    }

    info!(archive = %archive.display(), entries = zip.len(), "archive extracted");
    Ok(zip.len())
}

#[cfg(unix)]
fn set_mode(path: &Path, mode: u32) -> Result<(), PackError> {
    use std::os::unix::fs::PermissionsExt;

    fs::set_permissions(path, fs::Permissions::from_mode(mode & 0o7777))
        .map_err(|e| PackError::extraction(path, e))
}

#[cfg(not(unix))]
fn set_mode(_path: &Path, _mode: u32) -> Result<(), PackError> {
    Ok(())
}
