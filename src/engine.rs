//! # Virtual Filesystem Engine
//!
//! The navigation and mutation operations over the archive store, plus the
//! single piece of mutable session state: the cursor (current working
//! directory).
//!
//! Every operation either completes fully or leaves the engine untouched.
//! `cd` validates its target before replacing the cursor, and `mv` hands a
//! complete rebuilt entry set to the store, which commits memory only after
//! the backing file has been atomically replaced.

use std::path::Path;

use crate::error::ShellError;
use crate::paths;
use crate::store::{ArchiveEntry, ZipStore};

/// An open session over one backing archive: the decoded entry set and the
/// current working directory.
pub struct Engine {
    store: ZipStore,
    cursor: String,
}

impl Engine {
    /// Loads the backing archive and starts the session at the root.
    pub fn open(archive: &Path) -> Result<Self, ShellError> {
        Ok(Self {
            store: ZipStore::load(archive)?,
            cursor: "/".to_string(),
        })
    }

    /// The cursor's path, verbatim: absolute, `/`-terminated.
    pub fn current_location(&self) -> &str {
        &self.cursor
    }

    /// Names of the immediate children of the current directory, in the
    /// store's entry order. Both files and subdirectory markers appear;
    /// a subdirectory's trailing `/` is trimmed.
    pub fn list(&self) -> Vec<String> {
        self.store
            .entries()
            .iter()
            .filter_map(|e| paths::immediate_child(&self.cursor, &e.path))
            .map(str::to_string)
            .collect()
    }

    /// Moves the cursor. `..` pops one segment without an existence check
    /// (ancestors of a valid cursor exist; popping at root is a no-op).
    /// Any other target must resolve to an existing directory, else the
    /// cursor is left unchanged.
    pub fn change_directory(&mut self, path: &str) -> Result<(), ShellError> {
        if path == ".." {
            self.cursor = paths::normalize(&self.cursor, "..");
            return Ok(());
        }
        let target = paths::normalize(&self.cursor, path);
        if !paths::exists_as_directory(&self.store, &target) {
            return Err(ShellError::DirectoryNotFound(path.to_string()));
        }
        tracing::debug!(from = %self.cursor, to = %target, "cd");
        self.cursor = target;
        Ok(())
    }

    /// Renames or moves one entry, then persists the whole archive.
    ///
    /// A destination is treated as a directory target when the caller's
    /// input ends with `/` or when entries already live under it; the
    /// effective destination is then `dst/<basename(src)>`. The moved
    /// entry keeps its content and metadata; rename-within-directory and
    /// cross-directory move are the same operation.
    pub fn rename(&mut self, src: &str, dst: &str) -> Result<(), ShellError> {
        let src_key = paths::store_key(&paths::resolve_entry(&self.cursor, src)).to_string();
        let dst_key = paths::store_key(&paths::resolve_entry(&self.cursor, dst)).to_string();

        if !self.store.entries().iter().any(|e| e.path == src_key) {
            return Err(ShellError::SourceNotFound(src.to_string()));
        }

        let dst_is_dir = dst.ends_with('/') || paths::has_children(&self.store, &dst_key);

        let mut target = if dst_is_dir {
            paths::join(&dst_key, paths::basename(&src_key))
        } else {
            dst_key
        };
        // A directory marker keeps its marker slash at the destination.
        if src_key.ends_with('/') && !target.ends_with('/') {
            target.push('/');
        }

        tracing::debug!(src = %src_key, dst = %target, "mv");
        let rebuilt: Vec<ArchiveEntry> = self
            .store
            .entries()
            .iter()
            .map(|e| {
                if e.path == src_key {
                    let mut moved = e.clone();
                    moved.path = target.clone();
                    moved
                } else {
                    e.clone()
                }
            })
            .collect();
        self.store.rewrite(rebuilt)
    }
}
