//! Helpers for building zip fixtures in unit tests

use std::fs::File;
use std::io::Write;
use std::path::Path;
use zip::write::SimpleFileOptions;
use zip::ZipWriter;

pub struct ZipEntry<'a> {
    name: &'a str,
    contents: Option<&'a [u8]>,
    mode: Option<u32>,
}

impl<'a> ZipEntry<'a> {
    pub fn file(name: &'a str, contents: &'a [u8]) -> Self {
        Self {
            name,
            contents: Some(contents),
            mode: None,
        }
    }

    pub fn dir(name: &'a str) -> Self {
        Self {
            name,
            contents: None,
            mode: None,
        }
    }

    pub fn with_mode(mut self, mode: u32) -> Self {
        self.mode = Some(mode);
        self
    }
}

pub fn build_zip(path: &Path, entries: &[ZipEntry<'_>]) {
    let mut writer = ZipWriter::new(File::create(path).unwrap());

    for entry in entries {
        let mut options = SimpleFileOptions::default();
        if let Some(mode) = entry.mode {
            options = options.unix_permissions(mode);
        }
        match entry.contents {
            Some(contents) => {
                writer.start_file(entry.name, options).unwrap();
                writer.write_all(contents).unwrap();
            }
            None => writer.add_directory(entry.name, options).unwrap(),
        }
    }

    writer.finish().unwrap();
}
