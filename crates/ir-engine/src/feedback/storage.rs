//! Durable backends for the feedback snapshot.

use std::fs;
use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex, PoisonError};

use ir_protocol::FeedbackSnapshot;
use thiserror::Error;

/// Errors from reading or writing the learning document.
#[derive(Debug, Error)]
pub enum StorageError {
    #[error("storage I/O failed: {0}")]
    Io(#[from] std::io::Error),

    #[error("invalid learning document: {0}")]
    Serialization(#[from] serde_json::Error),
}

/// Where the feedback snapshot lives between runs.
pub trait FeedbackStorage: Send + Sync {
    /// Read the stored snapshot. `Ok(None)` means nothing was stored yet.
    fn load(&self) -> Result<Option<FeedbackSnapshot>, StorageError>;

    /// Replace the stored snapshot with `snapshot`.
    fn save(&self, snapshot: &FeedbackSnapshot) -> Result<(), StorageError>;
}

// ── JSON file ─────────────────────────────────────────────────

/// Pretty-printed JSON file, replaced atomically via a sibling temp file.
#[derive(Debug, Clone)]
pub struct JsonFileStorage {
    path: PathBuf,
}

impl JsonFileStorage {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn temp_path(&self) -> PathBuf {
        let mut name = self.path.file_name().unwrap_or_default().to_os_string();
        name.push(".tmp");
        self.path.with_file_name(name)
    }
}

impl FeedbackStorage for JsonFileStorage {
    fn load(&self) -> Result<Option<FeedbackSnapshot>, StorageError> {
        if !self.path.exists() {
            return Ok(None);
        }
        let raw = fs::read_to_string(&self.path)?;
        Ok(Some(serde_json::from_str(&raw)?))
    }

    fn save(&self, snapshot: &FeedbackSnapshot) -> Result<(), StorageError> {
        let json = serde_json::to_string_pretty(snapshot)?;
        let tmp = self.temp_path();
        fs::write(&tmp, json)?;
        fs::rename(&tmp, &self.path)?;
        Ok(())
    }
}

// ── In memory ─────────────────────────────────────────────────

#[derive(Debug, Default)]
struct MemoryInner {
    document: Option<String>,
    failing_saves: usize,
    saves: usize,
}

/// Keeps the serialized document in memory. Clones share the same document,
/// so a test can keep a handle while the store owns another.
#[derive(Debug, Clone, Default)]
pub struct MemoryStorage {
    inner: Arc<Mutex<MemoryInner>>,
}

impl MemoryStorage {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start from an existing raw document, valid or not.
    pub fn with_document(document: impl Into<String>) -> Self {
        let storage = Self::new();
        storage.lock().document = Some(document.into());
        storage
    }

    /// Make the next `count` saves fail with an I/O error.
    pub fn fail_next_saves(&self, count: usize) {
        self.lock().failing_saves = count;
    }

    /// Raw stored document, if any.
    pub fn document(&self) -> Option<String> {
        self.lock().document.clone()
    }

    /// Successful saves so far.
    pub fn saves(&self) -> usize {
        self.lock().saves
    }

    fn lock(&self) -> std::sync::MutexGuard<'_, MemoryInner> {
        self.inner.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

impl FeedbackStorage for MemoryStorage {
    fn load(&self) -> Result<Option<FeedbackSnapshot>, StorageError> {
        match &self.lock().document {
            Some(raw) => Ok(Some(serde_json::from_str(raw)?)),
            None => Ok(None),
        }
    }

    fn save(&self, snapshot: &FeedbackSnapshot) -> Result<(), StorageError> {
        let json = serde_json::to_string_pretty(snapshot)?;
        let mut inner = self.lock();
        if inner.failing_saves > 0 {
            inner.failing_saves -= 1;
            return Err(std::io::Error::other("injected write failure").into());
        }
        inner.document = Some(json);
        inner.saves += 1;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> FeedbackSnapshot {
        let mut snapshot = FeedbackSnapshot::default();
        snapshot
            .confidence_adjustments
            .insert("open chrome".into(), 0.7);
        snapshot
    }

    #[test]
    fn file_missing_loads_none() {
        let dir = tempfile::tempdir().unwrap();
        let storage = JsonFileStorage::new(dir.path().join("learning.json"));
        assert!(storage.load().unwrap().is_none());
    }

    #[test]
    fn file_round_trip() {
        let dir = tempfile::tempdir().unwrap();
        let storage = JsonFileStorage::new(dir.path().join("learning.json"));
        storage.save(&sample()).unwrap();
        assert_eq!(storage.load().unwrap(), Some(sample()));
        assert!(!storage.temp_path().exists());
    }

    #[test]
    fn file_save_overwrites() {
        let dir = tempfile::tempdir().unwrap();
        let storage = JsonFileStorage::new(dir.path().join("learning.json"));
        storage.save(&sample()).unwrap();
        storage.save(&FeedbackSnapshot::default()).unwrap();
        assert_eq!(storage.load().unwrap(), Some(FeedbackSnapshot::default()));
    }

    #[test]
    fn file_corrupt_document_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("learning.json");
        fs::write(&path, "{not json").unwrap();
        let err = JsonFileStorage::new(path).load().unwrap_err();
        assert!(matches!(err, StorageError::Serialization(_)));
    }

    #[test]
    fn file_save_into_missing_directory_fails() {
        let dir = tempfile::tempdir().unwrap();
        let storage = JsonFileStorage::new(dir.path().join("nope").join("learning.json"));
        assert!(matches!(
            storage.save(&sample()).unwrap_err(),
            StorageError::Io(_)
        ));
    }

    #[test]
    fn memory_clones_share_document() {
        let storage = MemoryStorage::new();
        let handle = storage.clone();
        storage.save(&sample()).unwrap();
        assert_eq!(handle.load().unwrap(), Some(sample()));
        assert_eq!(handle.saves(), 1);
    }

    #[test]
    fn memory_injected_failures_run_out() {
        let storage = MemoryStorage::new();
        storage.fail_next_saves(1);
        assert!(storage.save(&sample()).is_err());
        assert!(storage.save(&sample()).is_ok());
        assert_eq!(storage.saves(), 1);
    }
}
