//! Storage adapter port.
//!
//! All persistence funnels through this trait. The adapters shipped in `fr-infra`
//! never return `Err`: backend failures become no-ops or `None`. The `Result` exists
//! so that other adapters can report failures to the guarded storage utility, which
//! is the only caller expected to see them.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum StorageError {
    #[error("storage quota exceeded: {needed} bytes needed, {quota} allowed")]
    QuotaExceeded { needed: u64, quota: u64 },

    #[error("storage unavailable: {0}")]
    Unavailable(String),

    #[error("storage data corrupted: {0}")]
    Corrupted(String),

    #[error("storage io error: {0}")]
    Io(#[from] std::io::Error),
}

/// Uniform key/value persistence.
pub trait StorageAdapterPort: Send + Sync {
    fn get_item(&self, key: &str) -> Result<Option<String>, StorageError>;

    fn set_item(&self, key: &str, value: &str) -> Result<(), StorageError>;

    fn remove_item(&self, key: &str) -> Result<(), StorageError>;

    fn clear(&self) -> Result<(), StorageError>;

    /// Short adapter name for logs.
    fn kind(&self) -> &'static str;
}
