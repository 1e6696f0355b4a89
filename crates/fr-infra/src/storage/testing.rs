//! Storage test doubles.
//!
//! [`AuditingStorageAdapter`] records every key an adapter is asked about, so tests can
//! assert that a component only touches the keys it owns. [`FailingStorageAdapter`]
//! errors on every call, for exercising the guarded storage utility.

use std::sync::{Arc, Mutex};

use fr_core::ports::{StorageAdapterPort, StorageError};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StorageOp {
    Get,
    Set,
    Remove,
    Clear,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StorageAccess {
    pub op: StorageOp,
    /// `None` for `clear`.
    pub key: Option<String>,
}

pub struct AuditingStorageAdapter {
    inner: Arc<dyn StorageAdapterPort>,
    log: Mutex<Vec<StorageAccess>>,
}

impl AuditingStorageAdapter {
    pub fn new(inner: Arc<dyn StorageAdapterPort>) -> Self {
        Self {
            inner,
            log: Mutex::new(Vec::new()),
        }
    }

    pub fn accesses(&self) -> Vec<StorageAccess> {
        self.log.lock().map(|log| log.clone()).unwrap_or_default()
    }

    /// Distinct keys touched, in first-access order.
    pub fn touched_keys(&self) -> Vec<String> {
        let mut keys: Vec<String> = Vec::new();
        for key in self.accesses().into_iter().filter_map(|a| a.key) {
            if !keys.contains(&key) {
                keys.push(key);
            }
        }
        keys
    }

    fn record(&self, op: StorageOp, key: Option<&str>) {
        if let Ok(mut log) = self.log.lock() {
            log.push(StorageAccess {
                op,
                key: key.map(str::to_string),
            });
        }
    }
}

impl StorageAdapterPort for AuditingStorageAdapter {
    fn get_item(&self, key: &str) -> Result<Option<String>, StorageError> {
        self.record(StorageOp::Get, Some(key));
        self.inner.get_item(key)
    }

    fn set_item(&self, key: &str, value: &str) -> Result<(), StorageError> {
        self.record(StorageOp::Set, Some(key));
        self.inner.set_item(key, value)
    }

    fn remove_item(&self, key: &str) -> Result<(), StorageError> {
        self.record(StorageOp::Remove, Some(key));
        self.inner.remove_item(key)
    }

    fn clear(&self) -> Result<(), StorageError> {
        self.record(StorageOp::Clear, None);
        self.inner.clear()
    }

    fn kind(&self) -> &'static str {
        self.inner.kind()
    }
}

#[derive(Default)]
pub struct FailingStorageAdapter;

impl FailingStorageAdapter {
    fn fail<T>() -> Result<T, StorageError> {
        Err(StorageError::Unavailable("storage disabled".to_string()))
    }
}

impl StorageAdapterPort for FailingStorageAdapter {
    fn get_item(&self, _key: &str) -> Result<Option<String>, StorageError> {
        Self::fail()
    }

    fn set_item(&self, _key: &str, _value: &str) -> Result<(), StorageError> {
        Self::fail()
    }

    fn remove_item(&self, _key: &str) -> Result<(), StorageError> {
        Self::fail()
    }

    fn clear(&self) -> Result<(), StorageError> {
        Self::fail()
    }

    fn kind(&self) -> &'static str {
        "failing"
    }
}
