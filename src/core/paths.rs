//! Path normalization utilities
//!
//! Ensures all paths are normalized to use '/' as separator and are relative to root.

use std::path::Path;

/// Normalize a path to use '/' as separator (for cross-platform consistency)
pub fn normalize_path(path: &Path) -> String {
    path.to_string_lossy().replace('\\', "/")
}

/// Make a path relative to the root directory
pub fn make_relative(path: &Path, root: &Path) -> Option<String> {
    path.strip_prefix(root).ok().map(normalize_path)
}

/// Base name for output files: the directory name without its extension
///
/// `proj` stays `proj`, `lib-1.2` becomes `lib-1`.
pub fn output_base_name(path: &Path) -> String {
    path.file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_else(|| "repository".to_string())
}

/// Lower-cased extension of a path, without the dot
pub fn lowercase_extension(path: &Path) -> Option<String> {
    path.extension()
        .map(|ext| ext.to_string_lossy().to_lowercase())
}
