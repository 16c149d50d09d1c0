//! zipprompt - Flatten a zipped source repository into prompt-ready text
//!
//! The pipeline extracts the archive into a scratch directory, finds the
//! repository root, collects its UTF-8 text files, serializes them into one
//! delimited blob with a token estimate, and writes the blob as one file or
//! as numbered parts.

pub mod backends;
pub mod cli;
pub mod core;
pub mod flows;

#[cfg(test)]
pub(crate) mod test_support;

pub use crate::core::error::{ErrorKind, PackError};
pub use crate::core::model::{PackReport, Repository, RepositoryFile};
pub use crate::flows::pack::{pack_archive, PackConfig};
