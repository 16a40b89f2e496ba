//! Blob persistence behind the record store.
//!
//! # Design
//! The whole record collection lives in one serialized blob under a single
//! slot. `Storage` exposes exactly that surface: read the blob if it
//! exists, replace it wholesale.
//! Backends only move bytes; record semantics (parsing, healing, id
//! assignment) stay in [`TodoStore`](crate::TodoStore), so memory, file, or
//! any future backend substitute without touching call sites.

use std::io;
use std::path::{Path, PathBuf};

/// Get/set access to one serialized blob.
pub trait Storage: Send {
    /// Returns the current blob, or `None` when nothing has been stored yet.
    fn load(&self) -> io::Result<Option<String>>;

    /// Replaces the blob.
    fn save(&mut self, blob: &str) -> io::Result<()>;
}

/// Volatile in-process storage. State is lost on drop; useful for tests and
/// throwaway sessions.
#[derive(Debug, Default)]
pub struct MemoryStorage {
    blob: Option<String>,
}

impl MemoryStorage {
    pub fn new() -> Self {
        Self::default()
    }
}

impl Storage for MemoryStorage {
    fn load(&self) -> io::Result<Option<String>> {
        Ok(self.blob.clone())
    }

    fn save(&mut self, blob: &str) -> io::Result<()> {
        self.blob = Some(blob.to_string());
        Ok(())
    }
}

/// Storage backed by a single file. A missing file reads as `None`; saves
/// replace the file's entire contents. A write interrupted mid-way leaves a
/// blob the store treats as corrupt and resets on the next read.
#[derive(Debug, Clone)]
pub struct FileStorage {
    path: PathBuf,
}

impl FileStorage {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl Storage for FileStorage {
    fn load(&self) -> io::Result<Option<String>> {
        match std::fs::read_to_string(&self.path) {
            Ok(blob) => Ok(Some(blob)),
            Err(err) if err.kind() == io::ErrorKind::NotFound => Ok(None),
            Err(err) => Err(err),
        }
    }

    fn save(&mut self, blob: &str) -> io::Result<()> {
        std::fs::write(&self.path, blob)
    }
}
