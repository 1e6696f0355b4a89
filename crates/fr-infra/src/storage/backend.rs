//! File-backed key/value backend.
//!
//! The whole store is a single JSON object of string values, rewritten atomically
//! (temp file + rename) on every mutation and bounded by a byte quota.
//!
//! Every backend opened on the same file shares one write lock, so the journey
//! adapter and the emergency store never lose each other's writes.

use std::collections::{BTreeMap, HashMap};
use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, Mutex, OnceLock};

use fr_core::ports::StorageError;

type Entries = BTreeMap<String, String>;

static WRITE_LOCKS: OnceLock<Mutex<HashMap<PathBuf, Arc<Mutex<()>>>>> = OnceLock::new();
static TMP_COUNTER: AtomicU64 = AtomicU64::new(0);

/// The lock shared by every backend on `path`.
fn write_lock_for(path: &Path) -> Arc<Mutex<()>> {
    let registry = WRITE_LOCKS.get_or_init(Default::default);
    let mut locks = match registry.lock() {
        Ok(guard) => guard,
        Err(poisoned) => poisoned.into_inner(),
    };
    locks.entry(path.to_path_buf()).or_default().clone()
}

pub(crate) struct FileKvBackend {
    path: PathBuf,
    quota_bytes: u64,
    /// Serializes read-modify-write cycles on `path` within the process.
    write_lock: Arc<Mutex<()>>,
}

impl FileKvBackend {
    pub(crate) fn new(path: PathBuf, quota_bytes: u64) -> Self {
        let write_lock = write_lock_for(&path);
        Self {
            path,
            quota_bytes,
            write_lock,
        }
    }

    pub(crate) fn with_base_dir(base_dir: &Path, quota_bytes: u64) -> Self {
        Self::new(base_dir.join(super::DEFAULT_STORAGE_FILE), quota_bytes)
    }

    pub(crate) fn path(&self) -> &Path {
        &self.path
    }

    pub(crate) fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        Ok(self.read_entries()?.remove(key))
    }

    pub(crate) fn set(&self, key: &str, value: &str) -> Result<(), StorageError> {
        self.mutate(|entries| {
            entries.insert(key.to_string(), value.to_string());
        })
    }

    pub(crate) fn remove(&self, key: &str) -> Result<(), StorageError> {
        self.mutate(|entries| {
            entries.remove(key);
        })
    }

    pub(crate) fn clear(&self) -> Result<(), StorageError> {
        self.mutate(BTreeMap::clear)
    }

    /// Write then delete `key`, proving the backend is usable.
    pub(crate) fn probe(&self, key: &str) -> Result<(), StorageError> {
        self.set(key, "test")?;
        self.remove(key)
    }

    fn mutate(&self, f: impl FnOnce(&mut Entries)) -> Result<(), StorageError> {
        let _guard = self
            .write_lock
            .lock()
            .map_err(|_| StorageError::Unavailable("storage lock poisoned".to_string()))?;
        let mut entries = self.read_entries()?;
        f(&mut entries);
        self.write_entries(&entries)
    }

    fn read_entries(&self) -> Result<Entries, StorageError> {
        if !self.path.exists() {
            return Ok(Entries::new());
        }
        let content = fs::read_to_string(&self.path)?;
        if content.trim().is_empty() {
            return Ok(Entries::new());
        }
        serde_json::from_str(&content).map_err(|e| StorageError::Corrupted(e.to_string()))
    }

    fn write_entries(&self, entries: &Entries) -> Result<(), StorageError> {
        let json = serde_json::to_vec(entries).map_err(|e| StorageError::Corrupted(e.to_string()))?;
        let needed = json.len() as u64;
        if needed > self.quota_bytes {
            return Err(StorageError::QuotaExceeded {
                needed,
                quota: self.quota_bytes,
            });
        }

        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)?;
        }
        let tmp_path = self.tmp_path();
        let mut file = fs::File::create(&tmp_path)?;
        file.write_all(&json)?;
        file.sync_all()?;
        if let Err(err) = fs::rename(&tmp_path, &self.path) {
            let _ = fs::remove_file(&tmp_path);
            return Err(err.into());
        }
        Ok(())
    }

    /// A temp file name no other write in this process uses.
    fn tmp_path(&self) -> PathBuf {
        let seq = TMP_COUNTER.fetch_add(1, Ordering::Relaxed);
        let name = self
            .path
            .file_name()
            .map(|name| name.to_string_lossy().into_owned())
            .unwrap_or_default();
        self.path
            .with_file_name(format!("{name}.{}.{seq}.tmp", std::process::id()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    const QUOTA: u64 = 1024;

    #[test]
    fn get_returns_none_when_file_missing() {
        let temp_dir = TempDir::new().unwrap();
        let backend = FileKvBackend::new(temp_dir.path().join("missing.json"), QUOTA);

        assert_eq!(backend.get("k").unwrap(), None);
    }

    #[test]
    fn set_get_remove_round_trip() {
        let temp_dir = TempDir::new().unwrap();
        let backend = FileKvBackend::with_base_dir(temp_dir.path(), QUOTA);

        backend.set("a", "1").unwrap();
        backend.set("b", "2").unwrap();
        assert_eq!(backend.get("a").unwrap().as_deref(), Some("1"));

        backend.remove("a").unwrap();
        assert_eq!(backend.get("a").unwrap(), None);
        assert_eq!(backend.get("b").unwrap().as_deref(), Some("2"));

        backend.clear().unwrap();
        assert_eq!(backend.get("b").unwrap(), None);
    }

    #[test]
    fn values_persist_across_instances() {
        let temp_dir = TempDir::new().unwrap();
        FileKvBackend::with_base_dir(temp_dir.path(), QUOTA)
            .set("fact.rip.visited", "true")
            .unwrap();

        let reopened = FileKvBackend::with_base_dir(temp_dir.path(), QUOTA);
        assert_eq!(reopened.get("fact.rip.visited").unwrap().as_deref(), Some("true"));
    }

    #[test]
    fn write_beyond_quota_is_rejected_and_leaves_store_untouched() {
        let temp_dir = TempDir::new().unwrap();
        let backend = FileKvBackend::with_base_dir(temp_dir.path(), 32);
        backend.set("k", "v").unwrap();

        let err = backend.set("big", &"x".repeat(64)).unwrap_err();

        assert!(matches!(err, StorageError::QuotaExceeded { quota: 32, .. }));
        assert_eq!(backend.get("k").unwrap().as_deref(), Some("v"));
        assert_eq!(backend.get("big").unwrap(), None);
    }

    #[test]
    fn corrupt_file_reports_corruption() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("store.json");
        fs::write(&path, "{not json").unwrap();

        let backend = FileKvBackend::new(path, QUOTA);

        assert!(matches!(backend.get("k"), Err(StorageError::Corrupted(_))));
    }

    #[test]
    fn empty_file_reads_as_empty_store() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("store.json");
        fs::write(&path, "").unwrap();

        let backend = FileKvBackend::new(path, QUOTA);

        assert_eq!(backend.get("k").unwrap(), None);
    }

    #[test]
    fn backends_on_the_same_file_do_not_lose_writes() {
        let temp_dir = TempDir::new().unwrap();
        let first = Arc::new(FileKvBackend::with_base_dir(temp_dir.path(), 1 << 20));
        let second = Arc::new(FileKvBackend::with_base_dir(temp_dir.path(), 1 << 20));

        let writers: Vec<_> = [("a", first), ("b", second)]
            .into_iter()
            .map(|(prefix, backend)| {
                std::thread::spawn(move || {
                    for i in 0..100 {
                        backend.set(&format!("{prefix}{i}"), "v").unwrap();
                    }
                })
            })
            .collect();
        for writer in writers {
            writer.join().unwrap();
        }

        let reopened = FileKvBackend::with_base_dir(temp_dir.path(), 1 << 20);
        for prefix in ["a", "b"] {
            for i in 0..100 {
                assert!(reopened.get(&format!("{prefix}{i}")).unwrap().is_some());
            }
        }
        let leftovers = fs::read_dir(temp_dir.path())
            .unwrap()
            .filter_map(Result::ok)
            .filter(|entry| entry.file_name().to_string_lossy().ends_with(".tmp"))
            .count();
        assert_eq!(leftovers, 0);
    }

    #[test]
    fn probe_leaves_no_key_behind() {
        let temp_dir = TempDir::new().unwrap();
        let backend = FileKvBackend::with_base_dir(temp_dir.path(), QUOTA);

        backend.probe("__test__").unwrap();

        assert_eq!(backend.get("__test__").unwrap(), None);
    }
}
