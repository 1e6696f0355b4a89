use std::path::{Path, PathBuf};

use fr_core::ports::{StorageAdapterPort, StorageError};
use tracing::debug;

use super::backend::FileKvBackend;

/// Durable adapter over the file-backed store.
///
/// Never returns `Err`: quota, I/O and corruption failures are logged and turned into
/// a no-op (writes) or `None` (reads), the way a sandboxed browser context behaves.
pub struct LocalStorageAdapter {
    backend: FileKvBackend,
}

impl LocalStorageAdapter {
    /// Create adapter over a custom store file.
    pub fn new(path: PathBuf, quota_bytes: u64) -> Self {
        Self {
            backend: FileKvBackend::new(path, quota_bytes),
        }
    }

    /// Create adapter with the default store file inside `base_dir`.
    pub fn with_base_dir(base_dir: &Path, quota_bytes: u64) -> Self {
        Self {
            backend: FileKvBackend::with_base_dir(base_dir, quota_bytes),
        }
    }

    pub(crate) fn from_backend(backend: FileKvBackend) -> Self {
        Self { backend }
    }

    pub fn path(&self) -> &Path {
        self.backend.path()
    }
}

impl StorageAdapterPort for LocalStorageAdapter {
    fn get_item(&self, key: &str) -> Result<Option<String>, StorageError> {
        match self.backend.get(key) {
            Ok(value) => Ok(value),
            Err(err) => {
                debug!(key, error = %err, "local storage read failed; treating as absent");
                Ok(None)
            }
        }
    }

    fn set_item(&self, key: &str, value: &str) -> Result<(), StorageError> {
        if let Err(err) = self.backend.set(key, value) {
            debug!(key, error = %err, "local storage write failed silently");
        }
        Ok(())
    }

    fn remove_item(&self, key: &str) -> Result<(), StorageError> {
        if let Err(err) = self.backend.remove(key) {
            debug!(key, error = %err, "local storage remove failed silently");
        }
        Ok(())
    }

    fn clear(&self) -> Result<(), StorageError> {
        if let Err(err) = self.backend.clear() {
            debug!(error = %err, "local storage clear failed silently");
        }
        Ok(())
    }

    fn kind(&self) -> &'static str {
        "local"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn adapter_persists_through_backend() {
        let temp_dir = TempDir::new().unwrap();
        let adapter = LocalStorageAdapter::with_base_dir(temp_dir.path(), 1024);

        adapter.set_item("fact.rip.joined", "2024-01-01T00:00:00.000Z").unwrap();

        let reopened = LocalStorageAdapter::with_base_dir(temp_dir.path(), 1024);
        assert_eq!(
            reopened.get_item("fact.rip.joined").unwrap().as_deref(),
            Some("2024-01-01T00:00:00.000Z")
        );
    }

    #[test]
    fn quota_failure_is_a_silent_no_op() {
        let temp_dir = TempDir::new().unwrap();
        let adapter = LocalStorageAdapter::with_base_dir(temp_dir.path(), 8);

        assert!(adapter.set_item("fact.rip.visited", "true").is_ok());
        assert_eq!(adapter.get_item("fact.rip.visited").unwrap(), None);
    }

    #[test]
    fn corrupt_store_reads_as_absent() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("store.json");
        std::fs::write(&path, "[1, 2").unwrap();
        let adapter = LocalStorageAdapter::new(path, 1024);

        assert_eq!(adapter.get_item("fact.rip.visited").unwrap(), None);
        assert!(adapter.remove_item("fact.rip.visited").is_ok());
        assert!(adapter.clear().is_ok());
    }

    #[test]
    fn unwritable_location_never_errors() {
        let temp_dir = TempDir::new().unwrap();
        // A regular file where the data directory should be.
        let blocker = temp_dir.path().join("blocker");
        std::fs::write(&blocker, "").unwrap();
        let adapter = LocalStorageAdapter::with_base_dir(&blocker, 1024);

        assert!(adapter.set_item("k", "v").is_ok());
        assert_eq!(adapter.get_item("k").unwrap(), None);
    }
}
