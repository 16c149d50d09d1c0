//! Pack flow - Turn a zipped repository into prompt-ready text files
//!
//! Stages run strictly in sequence, each consuming the previous stage's full
//! output: extract -> locate -> collect -> serialize -> write. The scratch
//! directory is a `TempDir`, so it is removed on every exit path.

use anyhow::Result;
use std::path::{Path, PathBuf};
use tempfile::TempDir;
use tracing::info;

use crate::backends::extract::extract_archive;
use crate::backends::locate::find_repository_root;
use crate::backends::scan::{collect_files, ScanOptions};
use crate::backends::write::{write_parts, write_single};
use crate::core::error::PackError;
use crate::core::filter::ExtensionFilter;
use crate::core::model::PackReport;
use crate::core::paths::output_base_name;
use crate::core::render::{RenderConfig, Renderer};
use crate::core::serialize::serialize_repository;
use crate::core::util::{hash_bytes, MIB};

/// Default maximum part size (1 MiB)
pub const DEFAULT_MAX_PART_SIZE: usize = MIB;

/// Options for one pipeline run
#[derive(Debug, Clone)]
pub struct PackConfig {
    /// Write numbered parts instead of a single file
    pub split_into_parts: bool,

    /// Maximum bytes per part (only used when splitting)
    pub max_part_size: usize,

    /// Directory receiving the output files
    pub output_dir: PathBuf,

    /// Accepted extensions; `None` collects every text file
    pub filter: Option<ExtensionFilter>,

    /// Honor .gitignore and .ignore files inside the archive
    pub respect_ignore: bool,

    /// Where the scratch directory is created; `None` uses the system temp dir
    pub scratch_parent: Option<PathBuf>,
}

impl Default for PackConfig {
    fn default() -> Self {
        Self {
            split_into_parts: false,
            max_part_size: DEFAULT_MAX_PART_SIZE,
            output_dir: PathBuf::from("."),
            filter: Some(ExtensionFilter::source_defaults()),
            respect_ignore: false,
            scratch_parent: None,
        }
    }
}

impl PackConfig {
    fn validate(&self) -> Result<(), PackError> {
        if self.split_into_parts && self.max_part_size == 0 {
            return Err(PackError::InvalidConfig(
                "maximum part size must be at least 1 byte".to_string(),
            ));
        }
        if self.filter.as_ref().is_some_and(ExtensionFilter::is_empty) {
            return Err(PackError::InvalidConfig(
                "extension filter has no extensions".to_string(),
            ));
        }
        Ok(())
    }

    fn scan_options(&self) -> ScanOptions {
        ScanOptions {
            filter: self.filter.clone(),
            respect_ignore: self.respect_ignore,
        }
    }
}

/// Run the whole pipeline for one archive
pub fn pack_archive(archive: &Path, config: &PackConfig) -> Result<PackReport, PackError> {
    config.validate()?;

    let mut builder = tempfile::Builder::new();
    builder.prefix("repo");
    let scratch = match &config.scratch_parent {
        Some(parent) => builder.tempdir_in(parent),
        None => builder.tempdir(),
    }
    .map_err(|source| PackError::Scratch { source })?;

    let report = pack_in_scratch(archive, config, &scratch);

    // Removal errors are logged, not returned
    if let Err(err) = scratch.close() {
        tracing::warn!(error = %err, "failed to remove scratch directory");
    }

    report
}

fn pack_in_scratch(
    archive: &Path,
    config: &PackConfig,
    scratch: &TempDir,
) -> Result<PackReport, PackError> {
    extract_archive(archive, scratch.path())?;

    let root = find_repository_root(scratch.path())?;
    info!(root = %root.display(), "unzipped");

    let mut repo = collect_files(&root, &config.scan_options())?;
    let blob = serialize_repository(&mut repo);
    let total_tokens = repo.total_tokens.unwrap_or_default();

    let base_name = output_base_name(&root);
    let outputs = if config.split_into_parts {
        write_parts(&config.output_dir, &base_name, &blob, config.max_part_size)?
    } else {
        vec![write_single(&config.output_dir, &base_name, &blob)?]
    };

    Ok(PackReport {
        repository: base_name,
        files: repo.file_count(),
        bytes: blob.len(),
        total_tokens,
        outputs,
        content_hash: hash_bytes(blob.as_bytes()),
    })
}

/// Run the pack command
pub fn run_pack(archive: &Path, config: &PackConfig, render: RenderConfig) -> Result<()> {
    let report = pack_archive(archive, config)?;

    let renderer = Renderer::with_config(render);
    println!("{}", renderer.render(&report));

    Ok(())
}
