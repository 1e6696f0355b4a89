//! Emergency storage port.
//!
//! The error boundary sits above the storage provider and cannot use the injected
//! adapter, so it persists crash diagnostics through this narrow port instead. It is
//! the single sanctioned bypass of [`StorageAdapterPort`](super::StorageAdapterPort).

use crate::error_report::EmergencyRecord;

pub trait EmergencyStoragePort: Send + Sync {
    /// Persist the record. Fails silently.
    fn set_error(&self, record: &EmergencyRecord);

    fn get_error(&self) -> Option<EmergencyRecord>;

    /// Remove the record. Fails silently.
    fn clear_error(&self);
}
