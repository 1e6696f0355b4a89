//! Ports implemented by infrastructure and shell crates.

pub mod clock;
pub mod emergency;
pub mod journey_event;
pub mod reload;
pub mod storage;
pub mod telemetry;

pub use clock::ClockPort;
pub use emergency::EmergencyStoragePort;
pub use journey_event::JourneyEventPort;
pub use reload::ReloadPort;
pub use storage::{StorageAdapterPort, StorageError};
pub use telemetry::{ErrorReportPort, TelemetryError, TelemetryPort};
