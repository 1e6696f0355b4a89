use async_trait::async_trait;
use thiserror::Error;

use crate::error_report::{ErrorReport, ErrorReportPayload};
use crate::telemetry::TelemetryEvent;

#[derive(Debug, Error)]
pub enum TelemetryError {
    #[error("no endpoint configured")]
    Disabled,

    #[error("request failed: {0}")]
    Transport(String),

    #[error("endpoint responded with status {0}")]
    Status(u16),

    #[error("failed to serialize payload: {0}")]
    Serialize(#[from] serde_json::Error),
}

/// Best-effort, at-most-once event channel.
///
/// Implementations swallow and log every failure; callers never observe one.
#[async_trait]
pub trait TelemetryPort: Send + Sync {
    async fn send_event(&self, event: TelemetryEvent);

    /// POST a caught render failure as an `error_boundary` event.
    async fn send_error(&self, report: &ErrorReport);
}

/// User-initiated error report submission.
#[async_trait]
pub trait ErrorReportPort: Send + Sync {
    /// Whether a report endpoint is configured at all.
    fn is_enabled(&self) -> bool;

    async fn send_report(&self, payload: &ErrorReportPayload) -> Result<(), TelemetryError>;
}
