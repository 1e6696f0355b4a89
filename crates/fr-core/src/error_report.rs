//! Error boundary report models.

use serde::{Deserialize, Serialize};

use crate::telemetry::Viewport;

/// Storage key owned by the error boundary.
pub const EMERGENCY_STORAGE_KEY: &str = "fact.rip.emergency";

/// Structured report built when a render failure is caught.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ErrorReport {
    pub id: String,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub stack: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub component_stack: Option<String>,
    /// ISO-8601.
    pub timestamp: String,
    pub user_agent: String,
    pub viewport: Viewport,
    pub url: String,
}

impl ErrorReport {
    /// Payload for the separate "send report" endpoint.
    pub fn to_payload(&self) -> ErrorReportPayload {
        ErrorReportPayload {
            error_id: self.id.clone(),
            message: self.message.clone(),
            stack: self.stack.clone(),
            user_agent: self.user_agent.clone(),
            timestamp: self.timestamp.clone(),
        }
    }

    /// Record persisted through emergency storage.
    pub fn to_emergency_record(&self, timestamp_ms: i64) -> EmergencyRecord {
        EmergencyRecord {
            message: self.message.clone(),
            stack: self.stack.clone(),
            id: self.id.clone(),
            timestamp: timestamp_ms,
        }
    }
}

/// Body of the user-initiated error report POST.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ErrorReportPayload {
    pub error_id: String,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub stack: Option<String>,
    pub user_agent: String,
    pub timestamp: String,
}

/// Crash diagnostics kept under [`EMERGENCY_STORAGE_KEY`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EmergencyRecord {
    pub message: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub stack: Option<String>,
    pub id: String,
    /// Milliseconds since the Unix epoch.
    pub timestamp: i64,
}
