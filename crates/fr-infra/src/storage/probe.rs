use std::path::Path;
use std::sync::Arc;

use fr_core::ports::StorageAdapterPort;
use tracing::{info, warn};

use super::backend::FileKvBackend;
use super::{LocalStorageAdapter, MemoryStorageAdapter};

/// Key written and deleted to prove the durable store is usable.
pub const PROBE_KEY: &str = "__test__";

/// Pick the storage adapter once, at startup.
///
/// The durable store is probed with a write/delete; any failure falls back to an
/// in-memory adapter so the journey still works, just without persistence.
pub fn select_storage_adapter(data_dir: &Path, quota_bytes: u64) -> Arc<dyn StorageAdapterPort> {
    let backend = FileKvBackend::with_base_dir(data_dir, quota_bytes);
    match backend.probe(PROBE_KEY) {
        Ok(()) => {
            info!(path = %backend.path().display(), "using durable local storage");
            Arc::new(LocalStorageAdapter::from_backend(backend))
        }
        Err(err) => {
            warn!(
                path = %backend.path().display(),
                error = %err,
                "durable storage unavailable, falling back to memory storage"
            );
            Arc::new(MemoryStorageAdapter::new())
        }
    }
}
