//! Output writing
//!
//! Persists the serialized blob as one `<name>.txt` file or as numbered
//! `<name>_<i>.txt` parts of bounded byte size.

use std::fs;
use std::path::{Path, PathBuf};
use tracing::info;

use crate::core::error::PackError;

/// Path of an output file; the current directory yields a bare file name
fn output_path(out_dir: &Path, file_name: String) -> PathBuf {
    if out_dir == Path::new(".") || out_dir.as_os_str().is_empty() {
        PathBuf::from(file_name)
    } else {
        out_dir.join(file_name)
    }
}

/// Write the whole blob to `<out_dir>/<base_name>.txt`, replacing any existing file
pub fn write_single(out_dir: &Path, base_name: &str, blob: &str) -> Result<PathBuf, PackError> {
    let path = output_path(out_dir, format!("{}.txt", base_name));
    fs::write(&path, blob).map_err(|e| PackError::write(&path, e))?;
    info!(path = %path.display(), bytes = blob.len(), "output saved");
    Ok(path)
}

/// Split `blob` into byte slices of at most `max_part_size` bytes
///
/// Splits ignore UTF-8 char boundaries and file blocks. An empty blob
/// still yields a single empty part.
pub fn split_parts(blob: &[u8], max_part_size: usize) -> Vec<&[u8]> {
    if blob.is_empty() {
        return vec![blob];
    }
    blob.chunks(max_part_size.max(1)).collect()
}

/// Write the blob as `<out_dir>/<base_name>_1.txt`, `_2.txt`, ...
///
/// The first failed write aborts; parts already written stay on disk.
pub fn write_parts(
    out_dir: &Path,
    base_name: &str,
    blob: &str,
    max_part_size: usize,
) -> Result<Vec<PathBuf>, PackError> {
    if max_part_size == 0 {
        return Err(PackError::InvalidConfig(
            "maximum part size must be at least 1 byte".to_string(),
        ));
    }

    let parts = split_parts(blob.as_bytes(), max_part_size);
    let mut written = Vec::with_capacity(parts.len());

    for (index, part) in parts.into_iter().enumerate() {
        let path = output_path(out_dir, format!("{}_{}.txt", base_name, index + 1));
        fs::write(&path, part).map_err(|e| PackError::write(&path, e))?;
        info!(path = %path.display(), bytes = part.len(), "part saved");
        written.push(path);
    }

    Ok(written)
}
