use std::time::Duration;

use fr_core::ports::TelemetryError;
use serde::Serialize;
use tracing::debug;

/// Thin JSON POST client shared by the telemetry and report senders.
#[derive(Clone)]
pub struct JsonPoster {
    client: reqwest::Client,
}

impl JsonPoster {
    pub fn new(timeout: Duration) -> Result<Self, TelemetryError> {
        let client = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| TelemetryError::Transport(e.to_string()))?;
        Ok(Self { client })
    }

    /// One POST with `Content-Type: application/json`. Non-2xx is an error.
    pub async fn post<T: Serialize + ?Sized>(&self, endpoint: &str, body: &T) -> Result<(), TelemetryError> {
        let body = serde_json::to_vec(body)?;
        let response = self
            .client
            .post(endpoint)
            .header(reqwest::header::CONTENT_TYPE, "application/json")
            .body(body)
            .send()
            .await
            .map_err(|e| TelemetryError::Transport(e.to_string()))?;

        let status = response.status();
        debug!(endpoint, status = status.as_u16(), "json post completed");
        if status.is_success() {
            Ok(())
        } else {
            Err(TelemetryError::Status(status.as_u16()))
        }
    }
}
