//! Repository serializer
//!
//! Renders a repository into one delimited text blob:
//!
//! ```text
//! ----
//! <relative path>
//! <file contents>
//! ----
//! ...
//! --END--
//! ```
//!
//! Contents are not escaped. A file whose contents contain a `----` line is
//! indistinguishable from a block boundary when reading the blob back.

use crate::core::model::Repository;
use crate::core::tokenizer::estimate_tokens;

/// Line written before every file block
pub const FILE_SEPARATOR: &str = "----";

/// Terminal marker, written without a trailing newline
pub const END_MARKER: &str = "--END--";

/// Serialize the repository and record the blob's token estimate
pub fn serialize_repository(repo: &mut Repository) -> String {
    let capacity = repo
        .files
        .iter()
        .map(|f| FILE_SEPARATOR.len() + f.path().len() + f.contents().len() + 3)
        .sum::<usize>()
        + END_MARKER.len();

    let mut output = String::with_capacity(capacity);
    for file in &repo.files {
        output.push_str(FILE_SEPARATOR);
        output.push('\n');
        output.push_str(file.path());
        output.push('\n');
        output.push_str(file.contents());
        output.push('\n');
    }
    output.push_str(END_MARKER);

    repo.total_tokens = Some(estimate_tokens(&output));
    output
}
