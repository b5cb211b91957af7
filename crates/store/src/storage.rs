//! Durable key-value storage seam.
//!
//! The stores only need two primitives from the host: read a string blob by
//! key, write a string blob by key. Everything else (serialization, dedup,
//! eviction) lives above this trait.

use std::collections::HashMap;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use thiserror::Error;

/// Errors from durable storage access.
#[derive(Debug, Error)]
pub enum StorageError {
    /// Underlying I/O failed (file unreadable, disk full, ...).
    #[error("storage I/O error: {0}")]
    Io(#[from] io::Error),

    /// Snapshot could not be encoded for writing.
    #[error("snapshot encoding error: {0}")]
    Encode(#[from] serde_json::Error),
}

/// String-keyed durable storage.
///
/// Implementations are expected to be local and synchronous; writes must be
/// visible to a subsequent `read` from the same backend. Concurrent writers
/// to the same key are last-writer-wins.
pub trait StorageBackend {
    /// Read the value stored under `key`, or `None` if the key has never
    /// been written.
    ///
    /// # Errors
    ///
    /// Returns [`StorageError`] if the backing medium cannot be read.
    fn read(&self, key: &str) -> Result<Option<String>, StorageError>;

    /// Write `value` under `key`, replacing any previous value.
    ///
    /// # Errors
    ///
    /// Returns [`StorageError`] if the value cannot be durably written.
    fn write(&mut self, key: &str, value: &str) -> Result<(), StorageError>;
}

// =============================================================================
// MemoryBackend
// =============================================================================

/// In-memory backend for tests and ephemeral sessions.
///
/// Nothing survives the process; reads and writes are infallible.
#[derive(Debug, Default)]
pub struct MemoryBackend {
    values: HashMap<String, String>,
}

impl MemoryBackend {
    /// Create an empty in-memory backend.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

impl StorageBackend for MemoryBackend {
    fn read(&self, key: &str) -> Result<Option<String>, StorageError> {
        Ok(self.values.get(key).cloned())
    }

    fn write(&mut self, key: &str, value: &str) -> Result<(), StorageError> {
        self.values.insert(key.to_owned(), value.to_owned());
        Ok(())
    }
}

// =============================================================================
// FileBackend
// =============================================================================

/// File-per-key backend rooted at a data directory.
///
/// Each key maps to `<dir>/<key>.json`. Writes go to a temp file and are
/// renamed into place so a crash mid-write leaves the previous snapshot
/// intact rather than a truncated one. This does not coordinate concurrent
/// writers; two processes sharing a directory are last-writer-wins.
#[derive(Debug, Clone)]
pub struct FileBackend {
    dir: PathBuf,
}

impl FileBackend {
    /// Create a backend rooted at `dir`.
    ///
    /// The directory is created lazily on first write, so constructing a
    /// backend never touches the filesystem.
    #[must_use]
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    /// The directory this backend stores files under.
    #[must_use]
    pub fn dir(&self) -> &Path {
        &self.dir
    }

    fn path_for(&self, key: &str) -> PathBuf {
        self.dir.join(format!("{key}.json"))
    }
}

impl StorageBackend for FileBackend {
    fn read(&self, key: &str) -> Result<Option<String>, StorageError> {
        match fs::read_to_string(self.path_for(key)) {
            Ok(value) => Ok(Some(value)),
            Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(None),
            Err(e) => Err(e.into()),
        }
    }

    fn write(&mut self, key: &str, value: &str) -> Result<(), StorageError> {
        fs::create_dir_all(&self.dir)?;
        let tmp = self.dir.join(format!("{key}.json.tmp"));
        fs::write(&tmp, value)?;
        fs::rename(&tmp, self.path_for(key))?;
        Ok(())
    }
}
