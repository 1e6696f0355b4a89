//! Storage adapter selection.

use std::sync::Arc;

use fr_core::ports::StorageAdapterPort;
use tracing::info;

use crate::storage::Storage;

/// Holds the single adapter shared by every consumer in the app.
///
/// An explicitly injected adapter always wins; otherwise the supplied default
/// (normally the probing selector from the infrastructure crate) is used.
#[derive(Clone)]
pub struct StorageProvider {
    adapter: Arc<dyn StorageAdapterPort>,
}

impl StorageProvider {
    pub fn new(adapter: Arc<dyn StorageAdapterPort>) -> Self {
        Self { adapter }
    }

    pub fn select<F>(injected: Option<Arc<dyn StorageAdapterPort>>, default: F) -> Self
    where
        F: FnOnce() -> Arc<dyn StorageAdapterPort>,
    {
        let adapter = match injected {
            Some(adapter) => adapter,
            None => default(),
        };
        info!(adapter = adapter.kind(), "Storage adapter selected");
        Self { adapter }
    }

    pub fn adapter(&self) -> Arc<dyn StorageAdapterPort> {
        Arc::clone(&self.adapter)
    }

    pub fn storage(&self) -> Storage {
        Storage::new(self.adapter())
    }
}
