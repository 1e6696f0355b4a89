//! Emergency storage for the error boundary.
//!
//! This is the only code outside the storage adapters that reaches the durable
//! backend directly. The error boundary sits above the storage provider, so it cannot
//! depend on the injected adapter.

use std::path::{Path, PathBuf};

use fr_core::error_report::{EmergencyRecord, EMERGENCY_STORAGE_KEY};
use fr_core::ports::EmergencyStoragePort;
use tracing::debug;

use crate::storage::backend::FileKvBackend;

pub struct FileEmergencyStorage {
    backend: FileKvBackend,
}

impl FileEmergencyStorage {
    pub fn new(path: PathBuf, quota_bytes: u64) -> Self {
        Self {
            backend: FileKvBackend::new(path, quota_bytes),
        }
    }

    /// Share the durable store file inside `base_dir`.
    pub fn with_base_dir(base_dir: &Path, quota_bytes: u64) -> Self {
        Self {
            backend: FileKvBackend::with_base_dir(base_dir, quota_bytes),
        }
    }
}

impl EmergencyStoragePort for FileEmergencyStorage {
    fn set_error(&self, record: &EmergencyRecord) {
        let json = match serde_json::to_string(record) {
            Ok(json) => json,
            Err(err) => {
                debug!(error = %err, "failed to serialize emergency record");
                return;
            }
        };
        if let Err(err) = self.backend.set(EMERGENCY_STORAGE_KEY, &json) {
            debug!(error = %err, "failed to persist emergency record");
        }
    }

    fn get_error(&self) -> Option<EmergencyRecord> {
        let raw = self.backend.get(EMERGENCY_STORAGE_KEY).ok().flatten()?;
        match serde_json::from_str(&raw) {
            Ok(record) => Some(record),
            Err(err) => {
                debug!(error = %err, "ignoring unreadable emergency record");
                None
            }
        }
    }

    fn clear_error(&self) {
        if let Err(err) = self.backend.remove(EMERGENCY_STORAGE_KEY) {
            debug!(error = %err, "failed to clear emergency record");
        }
    }
}
