//! In-memory image archive and ZIP serialization.
//!
//! Entries keep insertion order. Inserting a name that already exists
//! replaces the earlier bytes in place, so the written ZIP never carries
//! duplicate names. Writing to disk goes through `<path>.part` and an atomic
//! rename.

use std::collections::HashMap;
use std::fs;
use std::io::{Cursor, Write};
use std::path::{Path, PathBuf};
use thiserror::Error;
use zip::write::SimpleFileOptions;
use zip::{CompressionMethod, ZipWriter};

/// Temporary file suffix used before atomic rename.
pub const TEMP_SUFFIX: &str = ".part";

#[derive(Error, Debug)]
pub enum ArchiveError {
    #[error("zip: {0}")]
    Zip(#[from] zip::result::ZipError),

    #[error("write {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Archive {
    entries: Vec<(String, Vec<u8>)>,
    /// Name -> position in `entries`.
    index: HashMap<String, usize>,
}

impl Archive {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds an entry. Returns true when an existing entry of the same name was replaced.
    pub fn insert(&mut self, name: impl Into<String>, bytes: Vec<u8>) -> bool {
        let name = name.into();
        match self.index.get(&name) {
            Some(&pos) => {
                self.entries[pos].1 = bytes;
                true
            }
            None => {
                self.index.insert(name.clone(), self.entries.len());
                self.entries.push((name, bytes));
                false
            }
        }
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|(n, _)| n.as_str())
    }

    pub fn get(&self, name: &str) -> Option<&[u8]> {
        self.index
            .get(name)
            .map(|&pos| self.entries[pos].1.as_slice())
    }

    /// Serializes all entries into a deflate-compressed ZIP.
    pub fn to_zip_bytes(&self) -> Result<Vec<u8>, ArchiveError> {
        let mut zip = ZipWriter::new(Cursor::new(Vec::new()));
        let options = SimpleFileOptions::default().compression_method(CompressionMethod::Deflated);
        for (name, bytes) in &self.entries {
            zip.start_file(name.as_str(), options)?;
            zip.write_all(bytes).map_err(zip::result::ZipError::Io)?;
        }
        Ok(zip.finish()?.into_inner())
    }

    /// Writes the ZIP to `path` atomically.
    pub fn write_to(&self, path: &Path) -> Result<u64, ArchiveError> {
        let bytes = self.to_zip_bytes()?;
        let tmp = temp_path(path);
        let io_err = |source: std::io::Error| ArchiveError::Io {
            path: path.to_path_buf(),
            source,
        };
        fs::write(&tmp, &bytes).map_err(io_err)?;
        if let Err(e) = fs::rename(&tmp, path) {
            let _ = fs::remove_file(&tmp);
            return Err(io_err(e));
        }
        tracing::debug!(
            path = %path.display(),
            entries = self.len(),
            bytes = bytes.len(),
            "archive written"
        );
        Ok(bytes.len() as u64)
    }
}

/// Path for the temp file: appends `.part` to the final path.
pub fn temp_path(final_path: &Path) -> PathBuf {
    let mut o = final_path.as_os_str().to_owned();
    o.push(TEMP_SUFFIX);
    PathBuf::from(o)
}
