//! Extension-based file filter
//!
//! A filter accepts or rejects a file by its lower-cased extension. When no
//! filter is configured every UTF-8 text file is collected.

use std::collections::BTreeSet;
use std::path::Path;

use crate::core::paths::lowercase_extension;

/// Extensions collected by default: common source and markup files
pub const SOURCE_EXTENSIONS: &[&str] = &[
    "go", "js", "ts", "py", "java", "c", "cpp", "cs", "php", "rb", "swift", "html", "css", "json",
    "xml",
];

/// Set of accepted file extensions (lower-case, without the leading dot)
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExtensionFilter {
    extensions: BTreeSet<String>,
}

impl ExtensionFilter {
    /// Build a filter from a list such as `["rs", ".toml", "MD"]`
    ///
    /// Blank entries are ignored.
    pub fn from_list<I, S>(extensions: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let extensions = extensions
            .into_iter()
            .map(|ext| ext.as_ref().trim().trim_start_matches('.').to_lowercase())
            .filter(|ext| !ext.is_empty())
            .collect();
        Self { extensions }
    }

    /// The default source-code filter
    pub fn source_defaults() -> Self {
        Self::from_list(SOURCE_EXTENSIONS)
    }

    /// Whether a file with this path should be collected
    pub fn accepts(&self, path: &Path) -> bool {
        lowercase_extension(path)
            .map(|ext| self.extensions.contains(&ext))
            .unwrap_or(false)
    }

    pub fn is_empty(&self) -> bool {
        self.extensions.is_empty()
    }

    pub fn extensions(&self) -> impl Iterator<Item = &str> {
        self.extensions.iter().map(String::as_str)
    }
}
