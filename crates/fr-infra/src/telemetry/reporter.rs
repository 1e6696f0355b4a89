use std::time::Duration;

use async_trait::async_trait;
use fr_core::error_report::ErrorReportPayload;
use fr_core::ports::{ErrorReportPort, TelemetryError};
use tracing::info;

use super::JsonPoster;

/// Sends user-initiated error reports to a dedicated endpoint.
pub struct HttpErrorReporter {
    poster: JsonPoster,
    endpoint: Option<String>,
}

impl HttpErrorReporter {
    pub fn new(endpoint: Option<String>, timeout: Duration) -> Result<Self, TelemetryError> {
        Ok(Self {
            poster: JsonPoster::new(timeout)?,
            endpoint,
        })
    }
}

#[async_trait]
impl ErrorReportPort for HttpErrorReporter {
    fn is_enabled(&self) -> bool {
        self.endpoint.is_some()
    }

    async fn send_report(&self, payload: &ErrorReportPayload) -> Result<(), TelemetryError> {
        let endpoint = self.endpoint.as_deref().ok_or(TelemetryError::Disabled)?;
        self.poster.post(endpoint, payload).await?;
        info!(error_id = %payload.error_id, "error report sent");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use mockito::{Matcher, Server};
    use serde_json::json;

    fn payload() -> ErrorReportPayload {
        ErrorReportPayload {
            error_id: "err_1_abc".to_string(),
            message: "boom".to_string(),
            stack: None,
            user_agent: "test-agent".to_string(),
            timestamp: "2024-01-01T00:00:00.000Z".to_string(),
        }
    }

    #[tokio::test]
    async fn send_report_posts_payload() {
        let mut server = Server::new_async().await;
        let mock = server
            .mock("POST", "/report")
            .match_header("content-type", "application/json")
            .match_body(Matcher::Json(json!({
                "errorId": "err_1_abc",
                "message": "boom",
                "userAgent": "test-agent",
                "timestamp": "2024-01-01T00:00:00.000Z"
            })))
            .with_status(201)
            .create_async()
            .await;

        let reporter =
            HttpErrorReporter::new(Some(format!("{}/report", server.url())), Duration::from_secs(5)).unwrap();

        assert!(reporter.is_enabled());
        reporter.send_report(&payload()).await.unwrap();
        mock.assert_async().await;
    }

    #[tokio::test]
    async fn non_success_status_is_an_error() {
        let mut server = Server::new_async().await;
        server.mock("POST", "/report").with_status(503).create_async().await;

        let reporter =
            HttpErrorReporter::new(Some(format!("{}/report", server.url())), Duration::from_secs(5)).unwrap();

        let err = reporter.send_report(&payload()).await.unwrap_err();
        assert!(matches!(err, TelemetryError::Status(503)));
    }

    #[tokio::test]
    async fn disabled_reporter_refuses() {
        let reporter = HttpErrorReporter::new(None, Duration::from_secs(5)).unwrap();

        assert!(!reporter.is_enabled());
        assert!(matches!(
            reporter.send_report(&payload()).await,
            Err(TelemetryError::Disabled)
        ));
    }
}
