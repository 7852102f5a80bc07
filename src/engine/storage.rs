//! The single named key-value slot a snapshot lives in.
//!
//! Native builds keep one JSON file per key inside a data directory; the web
//! build uses `window.localStorage`. Tests use [`MemoryStorage`], which can
//! also simulate a full quota.

use std::collections::HashMap;
use std::fmt;

/// Error types for snapshot storage
#[derive(Debug, Clone, PartialEq)]
pub enum StorageError {
    /// The backend refused the write because it is full
    QuotaExceeded,
    /// No storage backend is available (e.g. localStorage disabled)
    Unavailable,
    /// Underlying I/O failure
    Io(String),
}

impl fmt::Display for StorageError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StorageError::QuotaExceeded => write!(f, "Storage limit reached"),
            StorageError::Unavailable => write!(f, "Storage unavailable"),
            StorageError::Io(msg) => write!(f, "Storage I/O error: {}", msg),
        }
    }
}

impl std::error::Error for StorageError {}

/// A synchronous, process-local key-value store.
///
/// Reads are infallible by contract: an unreadable slot is reported as absent.
pub trait SnapshotStorage {
    fn read(&self, key: &str) -> Option<String>;
    fn write(&mut self, key: &str, value: &str) -> Result<(), StorageError>;
    fn remove(&mut self, key: &str) -> Result<(), StorageError>;
}

/// In-memory slots. `with_quota` makes writes of larger values fail.
#[derive(Debug, Default, Clone)]
pub struct MemoryStorage {
    slots: HashMap<String, String>,
    quota_bytes: Option<usize>,
}

impl MemoryStorage {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_quota(quota_bytes: usize) -> Self {
        Self {
            slots: HashMap::new(),
            quota_bytes: Some(quota_bytes),
        }
    }

    /// Seeds a slot directly, bypassing the quota.
    pub fn insert(&mut self, key: &str, value: impl Into<String>) {
        self.slots.insert(key.to_string(), value.into());
    }

    pub fn contains(&self, key: &str) -> bool {
        self.slots.contains_key(key)
    }
}

impl SnapshotStorage for MemoryStorage {
    fn read(&self, key: &str) -> Option<String> {
        self.slots.get(key).cloned()
    }

    fn write(&mut self, key: &str, value: &str) -> Result<(), StorageError> {
        if let Some(quota) = self.quota_bytes {
            if value.len() > quota {
                return Err(StorageError::QuotaExceeded);
            }
        }
        self.slots.insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove(&mut self, key: &str) -> Result<(), StorageError> {
        self.slots.remove(key);
        Ok(())
    }
}

impl<S: SnapshotStorage + ?Sized> SnapshotStorage for Box<S> {
    fn read(&self, key: &str) -> Option<String> {
        (**self).read(key)
    }

    fn write(&mut self, key: &str, value: &str) -> Result<(), StorageError> {
        (**self).write(key, value)
    }

    fn remove(&mut self, key: &str) -> Result<(), StorageError> {
        (**self).remove(key)
    }
}

#[cfg(not(target_arch = "wasm32"))]
pub use native::FileStorage;

#[cfg(not(target_arch = "wasm32"))]
mod native {
    use std::fs;
    use std::io::ErrorKind;
    use std::path::{Path, PathBuf};

    use super::{SnapshotStorage, StorageError};
    use crate::config::snapshot_filename;

    /// One `<key>.json` file per slot inside `dir`.
    #[derive(Debug, Clone)]
    pub struct FileStorage {
        dir: PathBuf,
    }

    impl FileStorage {
        pub fn new(dir: impl Into<PathBuf>) -> Self {
            Self { dir: dir.into() }
        }

        pub fn dir(&self) -> &Path {
            &self.dir
        }

        pub fn path_for(&self, key: &str) -> PathBuf {
            self.dir.join(snapshot_filename(key))
        }
    }

    impl SnapshotStorage for FileStorage {
        fn read(&self, key: &str) -> Option<String> {
            let path = self.path_for(key);
            match fs::read_to_string(&path) {
                Ok(text) => Some(text),
                Err(e) if e.kind() == ErrorKind::NotFound => None,
                Err(e) => {
                    log::warn!("Could not read snapshot {}: {}", path.display(), e);
                    None
                }
            }
        }

        fn write(&mut self, key: &str, value: &str) -> Result<(), StorageError> {
            fs::create_dir_all(&self.dir).map_err(|e| StorageError::Io(e.to_string()))?;
            // Readers never see a half-written snapshot
            let path = self.path_for(key);
            let tmp = path.with_extension("json.tmp");
            fs::write(&tmp, value).map_err(|e| match e.kind() {
                ErrorKind::StorageFull => StorageError::QuotaExceeded,
                _ => StorageError::Io(e.to_string()),
            })?;
            fs::rename(&tmp, &path).map_err(|e| StorageError::Io(e.to_string()))
        }

        fn remove(&mut self, key: &str) -> Result<(), StorageError> {
            match fs::remove_file(self.path_for(key)) {
                Ok(()) => Ok(()),
                Err(e) if e.kind() == ErrorKind::NotFound => Ok(()),
                Err(e) => Err(StorageError::Io(e.to_string())),
            }
        }
    }
}

#[cfg(target_arch = "wasm32")]
pub use web::LocalStorage;

#[cfg(target_arch = "wasm32")]
mod web {
    use super::{SnapshotStorage, StorageError};

    /// `window.localStorage`. Browsers throw `QuotaExceededError` when full.
    #[derive(Debug, Default, Clone, Copy)]
    pub struct LocalStorage;

    impl LocalStorage {
        fn backend() -> Option<web_sys::Storage> {
            web_sys::window()?.local_storage().ok().flatten()
        }
    }

    impl SnapshotStorage for LocalStorage {
        fn read(&self, key: &str) -> Option<String> {
            Self::backend()?.get_item(key).ok().flatten()
        }

        fn write(&mut self, key: &str, value: &str) -> Result<(), StorageError> {
            let storage = Self::backend().ok_or(StorageError::Unavailable)?;
            // The only failure localStorage reports for setItem is a full quota
            storage
                .set_item(key, value)
                .map_err(|_| StorageError::QuotaExceeded)
        }

        fn remove(&mut self, key: &str) -> Result<(), StorageError> {
            let storage = Self::backend().ok_or(StorageError::Unavailable)?;
            storage
                .remove_item(key)
                .map_err(|_| StorageError::Unavailable)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn memory_quota_rejects_large_values_only() {
        let mut storage = MemoryStorage::with_quota(4);
        assert_eq!(storage.write("k", "tiny"), Ok(()));
        assert_eq!(storage.write("k", "too large"), Err(StorageError::QuotaExceeded));
        assert_eq!(storage.read("k").as_deref(), Some("tiny"));
    }

    #[test]
    fn file_storage_round_trips_and_removes() {
        let dir = tempfile::tempdir().unwrap();
        let mut storage = FileStorage::new(dir.path().join("nested"));

        assert_eq!(storage.read("slot"), None);
        storage.write("slot", "{\"a\":1}").unwrap();
        assert!(storage.path_for("slot").ends_with("slot.json"));
        assert_eq!(storage.read("slot").as_deref(), Some("{\"a\":1}"));

        storage.remove("slot").unwrap();
        assert_eq!(storage.read("slot"), None);
        // Removing an absent slot is fine
        storage.remove("slot").unwrap();
    }
}
