pub mod config;
pub mod emergency;
pub mod storage;
pub mod telemetry;
pub mod time;

pub use emergency::FileEmergencyStorage;
pub use storage::{select_storage_adapter, LocalStorageAdapter, MemoryStorageAdapter};
pub use telemetry::{HttpErrorReporter, HttpTelemetrySender};
pub use time::SystemClock;
