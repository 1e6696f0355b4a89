//! Storage adapters.
//!
//! ## Access rule / 访问规则
//!
//! The durable backend ([`backend::FileKvBackend`]) is private to this crate. Only the
//! [`LocalStorageAdapter`] and the emergency storage module can reach it; everything
//! else persists through [`StorageAdapterPort`](fr_core::ports::StorageAdapterPort).

pub(crate) mod backend;
mod local;
mod memory;
mod probe;
#[cfg(any(test, feature = "testing"))]
pub mod testing;

pub use local::LocalStorageAdapter;
pub use memory::MemoryStorageAdapter;
pub use probe::{select_storage_adapter, PROBE_KEY};

/// File name of the durable key/value store inside the data directory.
pub const DEFAULT_STORAGE_FILE: &str = "local_storage.json";
