//! # Archive Store
//!
//! This module owns the decoded contents of the backing ZIP file: a flat,
//! ordered list of entries with full paths, held entirely in memory for the
//! lifetime of the engine.
//!
//! Mutations go through [`ZipStore::rewrite`], which re-encodes the complete
//! replacement entry set into a new archive image and atomically swaps it
//! over the backing file. The in-memory entry list is only committed after
//! the swap succeeds, so memory and disk never diverge: a failed rewrite
//! leaves both exactly as they were.

use std::fs;
use std::io::{Cursor, Read, Write};
use std::path::{Path, PathBuf};

use tempfile::NamedTempFile;
use zip::read::ZipArchive;
use zip::write::{FileOptions, ZipWriter};
use zip::{CompressionMethod, DateTime};

use crate::error::ShellError;

/// One record stored in the backing archive, either a file or a directory
/// marker.
#[derive(Debug, Clone)]
pub struct ArchiveEntry {
    /// Forward-slash-separated path with no leading `/` (the archive's
    /// serialized form). Directory markers end with `/`. Unique within the
    /// store.
    pub path: String,
    /// Modification time, copied verbatim on every rewrite.
    pub modified: DateTime,
    /// The compression method the entry was stored with.
    pub compression: CompressionMethod,
    /// Unix permission bits from the external attributes, when present.
    pub unix_mode: Option<u32>,
    /// Entry content; empty for directory markers.
    pub data: Vec<u8>,
}

impl ArchiveEntry {
    /// Directories are exactly the entries whose path ends with `/`; there
    /// is no implicit directory inference from file paths.
    pub fn is_dir(&self) -> bool {
        self.path.ends_with('/')
    }
}

/// The in-memory view of the backing ZIP file plus its on-disk location.
#[derive(Debug)]
pub struct ZipStore {
    path: PathBuf,
    entries: Vec<ArchiveEntry>,
}

impl ZipStore {
    /// Reads the entire backing file into memory and decodes every entry.
    ///
    /// Fails with [`ShellError::ArchiveNotFound`] if the path does not exist
    /// and [`ShellError::CorruptArchive`] if the bytes are not a valid ZIP
    /// archive.
    pub fn load(path: &Path) -> Result<Self, ShellError> {
        let bytes = fs::read(path).map_err(|e| {
            if e.kind() == std::io::ErrorKind::NotFound {
                ShellError::ArchiveNotFound(path.to_path_buf())
            } else {
                ShellError::Io {
                    source: e,
                    path: path.to_path_buf(),
                }
            }
        })?;
        let entries = decode(&bytes)?;
        tracing::debug!(path = %path.display(), entries = entries.len(), "archive loaded");
        Ok(Self {
            path: path.to_path_buf(),
            entries,
        })
    }

    /// Current in-memory snapshot, in the archive's insertion order.
    pub fn entries(&self) -> &[ArchiveEntry] {
        &self.entries
    }

    /// Replaces the full entry set.
    ///
    /// Re-encodes `entries` into a complete new archive image, persists it
    /// atomically over the backing file, and only then replaces the
    /// in-memory snapshot. On any failure the previous on-disk content and
    /// the in-memory snapshot both remain intact.
    pub fn rewrite(&mut self, entries: Vec<ArchiveEntry>) -> Result<(), ShellError> {
        let image = encode(&entries)?;
        self.persist(&image)?;
        self.entries = entries;
        Ok(())
    }

    /// Writes `image` next to the backing file and renames it into place.
    fn persist(&self, image: &[u8]) -> Result<(), ShellError> {
        let dir = self.path.parent().filter(|p| !p.as_os_str().is_empty());
        let dir = dir.unwrap_or_else(|| Path::new("."));
        let mut tmp = NamedTempFile::new_in(dir).map_err(|e| ShellError::Io {
            source: e,
            path: dir.to_path_buf(),
        })?;
        tmp.write_all(image).map_err(|e| ShellError::Io {
            source: e,
            path: tmp.path().to_path_buf(),
        })?;
        tmp.persist(&self.path).map_err(|e| ShellError::Io {
            source: e.error,
            path: self.path.clone(),
        })?;
        tracing::debug!(path = %self.path.display(), bytes = image.len(), "archive rewritten");
        Ok(())
    }
}

fn decode(bytes: &[u8]) -> Result<Vec<ArchiveEntry>, ShellError> {
    let mut archive = ZipArchive::new(Cursor::new(bytes))?;
    let mut entries = Vec::with_capacity(archive.len());
    for i in 0..archive.len() {
        let mut file = archive.by_index(i)?;
        let mut data = Vec::with_capacity(file.size() as usize);
        file.read_to_end(&mut data)?;
        entries.push(ArchiveEntry {
            path: file.name().to_string(),
            modified: file.last_modified(),
            compression: file.compression(),
            unix_mode: file.unix_mode(),
            data,
        });
    }
    Ok(entries)
}

fn encode(entries: &[ArchiveEntry]) -> Result<Vec<u8>, ShellError> {
    let mut writer = ZipWriter::new(Cursor::new(Vec::new()));
    for entry in entries {
        let mut options = FileOptions::default()
            .compression_method(entry.compression)
            .last_modified_time(entry.modified);
        if let Some(mode) = entry.unix_mode {
            options = options.unix_permissions(mode);
        }
        if entry.is_dir() {
            writer.add_directory(entry.path.trim_end_matches('/'), options)?;
        } else {
            writer.start_file(entry.path.as_str(), options)?;
            writer.write_all(&entry.data)?;
        }
    }
    Ok(writer.finish()?.into_inner())
}
