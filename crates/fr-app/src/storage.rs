//! Guarded storage utility.
//!
//! Application code reaches persistence only through [`Storage`], which wraps the
//! injected [`StorageAdapterPort`] and converts every adapter failure into a logged
//! no-op: reads degrade to `None`, writes to `false`.
//!
//! 应用层唯一的持久化入口；适配器错误在此被吞掉并记录日志。

use std::fmt;
use std::sync::Arc;

use fr_core::ports::StorageAdapterPort;
use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::Value;
use tracing::{debug, error, warn};

#[derive(Clone)]
pub struct Storage {
    adapter: Arc<dyn StorageAdapterPort>,
}

impl Storage {
    pub fn new(adapter: Arc<dyn StorageAdapterPort>) -> Self {
        Self { adapter }
    }

    pub fn adapter(&self) -> &Arc<dyn StorageAdapterPort> {
        &self.adapter
    }

    pub fn kind(&self) -> &'static str {
        self.adapter.kind()
    }

    pub fn get(&self, key: &str) -> Option<String> {
        match self.adapter.get_item(key) {
            Ok(value) => value,
            Err(err) => {
                warn!(key, adapter = self.adapter.kind(), error = %err, "Storage read failed");
                None
            }
        }
    }

    /// Returns `true` when the adapter accepted the write.
    pub fn set(&self, key: &str, value: &str) -> bool {
        match self.adapter.set_item(key, value) {
            Ok(()) => true,
            Err(err) => {
                error!(key, adapter = self.adapter.kind(), error = %err, "Storage write failed");
                false
            }
        }
    }

    pub fn remove(&self, key: &str) -> bool {
        match self.adapter.remove_item(key) {
            Ok(()) => true,
            Err(err) => {
                error!(key, adapter = self.adapter.kind(), error = %err, "Storage remove failed");
                false
            }
        }
    }

    pub fn clear(&self) -> bool {
        match self.adapter.clear() {
            Ok(()) => true,
            Err(err) => {
                error!(adapter = self.adapter.kind(), error = %err, "Storage clear failed");
                false
            }
        }
    }
}

impl fmt::Debug for Storage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Storage")
            .field("adapter", &self.adapter.kind())
            .finish()
    }
}

/// A single persisted value kept in sync with one storage key.
///
/// Stored values are JSON, except strings which are written verbatim. A stored value
/// that is not valid JSON is read back as a raw string when `T` accepts one, and
/// otherwise falls back to the initial value.
pub struct PersistedValue<T> {
    storage: Storage,
    key: String,
    initial: T,
    value: T,
}

impl<T> PersistedValue<T>
where
    T: Serialize + DeserializeOwned + Clone,
{
    pub fn load(storage: Storage, key: impl Into<String>, initial: T) -> Self {
        let key = key.into();
        let value = storage
            .get(&key)
            .and_then(|raw| decode::<T>(&key, &raw))
            .unwrap_or_else(|| initial.clone());

        Self {
            storage,
            key,
            initial,
            value,
        }
    }

    pub fn key(&self) -> &str {
        &self.key
    }

    pub fn get(&self) -> &T {
        &self.value
    }

    /// Update the in-memory value and persist it.
    ///
    /// A value serializing to `null` removes the key instead.
    pub fn set(&mut self, value: T) {
        match serde_json::to_value(&value) {
            Ok(Value::Null) => {
                self.storage.remove(&self.key);
            }
            Ok(Value::String(raw)) => {
                self.storage.set(&self.key, &raw);
            }
            Ok(other) => {
                self.storage.set(&self.key, &other.to_string());
            }
            Err(err) => {
                error!(key = %self.key, error = %err, "Failed to serialize persisted value");
            }
        }
        self.value = value;
    }

    /// Drop the stored key and return to the initial value.
    pub fn remove(&mut self) {
        self.storage.remove(&self.key);
        self.value = self.initial.clone();
    }

    /// Apply an out-of-band storage change for `key`.
    ///
    /// Changes to other keys and removals are ignored.
    pub fn apply_change(&mut self, key: &str, new_value: Option<&str>) {
        if key != self.key {
            return;
        }
        if let Some(value) = new_value.and_then(|raw| decode::<T>(&self.key, raw)) {
            self.value = value;
        }
    }
}

fn decode<T: DeserializeOwned>(key: &str, raw: &str) -> Option<T> {
    serde_json::from_str(raw)
        .or_else(|_| serde_json::from_value(Value::String(raw.to_string())))
        .map_err(|err| debug!(key, error = %err, "Stored value does not match expected type"))
        .ok()
}

#[cfg(test)]
mod tests {
    use super::*;
    use fr_infra::storage::testing::FailingStorageAdapter;
    use fr_infra::MemoryStorageAdapter;
    use serde::Deserialize;

    fn memory() -> Storage {
        Storage::new(Arc::new(MemoryStorageAdapter::new()))
    }

    #[test]
    fn storage_round_trips_through_adapter() {
        let storage = memory();
        assert!(storage.set("fact.rip.visited", "true"));
        assert_eq!(storage.get("fact.rip.visited").as_deref(), Some("true"));
        assert!(storage.remove("fact.rip.visited"));
        assert_eq!(storage.get("fact.rip.visited"), None);
    }

    #[test]
    fn storage_swallows_adapter_failures() {
        let storage = Storage::new(Arc::new(FailingStorageAdapter));
        assert_eq!(storage.get("k"), None);
        assert!(!storage.set("k", "v"));
        assert!(!storage.remove("k"));
        assert!(!storage.clear());
    }

    #[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
    struct Prefs {
        muted: bool,
    }

    #[test]
    fn persisted_value_reads_json_and_falls_back_to_initial() {
        let storage = memory();
        storage.set("prefs", r#"{"muted":true}"#);
        storage.set("broken", "{not json");

        let prefs = PersistedValue::load(storage.clone(), "prefs", Prefs { muted: false });
        assert_eq!(prefs.get(), &Prefs { muted: true });

        let broken = PersistedValue::load(storage, "broken", Prefs { muted: false });
        assert_eq!(broken.get(), &Prefs { muted: false });
    }

    #[test]
    fn persisted_value_keeps_non_json_strings_verbatim() {
        let storage = memory();
        storage.set("fact.rip.joined", "2024-01-01T00:00:00.000Z");

        let mut joined = PersistedValue::load(storage.clone(), "fact.rip.joined", None::<String>);
        assert_eq!(joined.get().as_deref(), Some("2024-01-01T00:00:00.000Z"));

        joined.set(Some("2025-02-02T00:00:00.000Z".to_string()));
        assert_eq!(
            storage.get("fact.rip.joined").as_deref(),
            Some("2025-02-02T00:00:00.000Z")
        );

        joined.set(None);
        assert_eq!(storage.get("fact.rip.joined"), None);
    }

    #[test]
    fn persisted_value_applies_only_matching_changes() {
        let storage = memory();
        let mut count = PersistedValue::load(storage, "count", 0u32);

        count.apply_change("other", Some("5"));
        assert_eq!(*count.get(), 0);

        count.apply_change("count", None);
        assert_eq!(*count.get(), 0);

        count.apply_change("count", Some("7"));
        assert_eq!(*count.get(), 7);

        count.remove();
        assert_eq!(*count.get(), 0);
    }
}
