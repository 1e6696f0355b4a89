use std::time::Duration;

use async_trait::async_trait;
use fr_core::error_report::ErrorReport;
use fr_core::ports::{TelemetryError, TelemetryPort};
use fr_core::telemetry::TelemetryEvent;
use serde::Serialize;
use tracing::{error, info};

use super::JsonPoster;

/// Fire-and-forget telemetry over HTTP.
///
/// At most one POST per event, no retries. Without an endpoint the event is only
/// logged.
pub struct HttpTelemetrySender {
    poster: JsonPoster,
    endpoint: Option<String>,
}

#[derive(Serialize)]
struct ErrorBoundaryEvent<'a> {
    action: &'static str,
    #[serde(flatten)]
    report: &'a ErrorReport,
}

impl HttpTelemetrySender {
    pub fn new(endpoint: Option<String>, timeout: Duration) -> Result<Self, TelemetryError> {
        Ok(Self {
            poster: JsonPoster::new(timeout)?,
            endpoint,
        })
    }

    pub fn endpoint(&self) -> Option<&str> {
        self.endpoint.as_deref()
    }
}

#[async_trait]
impl TelemetryPort for HttpTelemetrySender {
    async fn send_event(&self, event: TelemetryEvent) {
        let Some(endpoint) = self.endpoint.as_deref() else {
            info!(action = %event.action, event = ?event, "[Telemetry]");
            return;
        };

        if let Err(err) = self.poster.post(endpoint, &event).await {
            error!(endpoint, error = %err, "[Telemetry] Failed to send");
            info!(event = ?event, "[Telemetry] Fallback");
        }
    }

    async fn send_error(&self, report: &ErrorReport) {
        let Some(endpoint) = self.endpoint.as_deref() else {
            return;
        };

        let event = ErrorBoundaryEvent {
            action: "error_boundary",
            report,
        };
        if let Err(err) = self.poster.post(endpoint, &event).await {
            error!(endpoint, error_id = %report.id, error = %err, "[Telemetry] Failed to send error event");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use fr_core::telemetry::{ClientInfo, Viewport};
    use mockito::{Matcher, Server};
    use serde_json::json;

    fn sender(endpoint: Option<String>) -> HttpTelemetrySender {
        HttpTelemetrySender::new(endpoint, Duration::from_secs(5)).unwrap()
    }

    fn event() -> TelemetryEvent {
        TelemetryEvent::new(
            "join_watchtower",
            "2024-01-01T00:00:00.000Z",
            false,
            &ClientInfo {
                user_agent: "test-agent".to_string(),
                viewport: Viewport {
                    width: 390,
                    height: 844,
                },
                url: "https://fact.rip/".to_string(),
            },
        )
    }

    #[tokio::test]
    async fn send_event_posts_json_once() {
        let mut server = Server::new_async().await;
        let mock = server
            .mock("POST", "/api/telemetry")
            .match_header("content-type", "application/json")
            .match_body(Matcher::Json(json!({
                "action": "join_watchtower",
                "timestamp": "2024-01-01T00:00:00.000Z",
                "returning": false,
                "user_agent": "test-agent",
                "viewport": { "width": 390, "height": 844 }
            })))
            .with_status(204)
            .expect(1)
            .create_async()
            .await;

        sender(Some(format!("{}/api/telemetry", server.url())))
            .send_event(event())
            .await;

        mock.assert_async().await;
    }

    #[tokio::test]
    async fn server_error_is_swallowed_without_retry() {
        let mut server = Server::new_async().await;
        let mock = server
            .mock("POST", "/api/telemetry")
            .with_status(500)
            .expect(1)
            .create_async()
            .await;

        sender(Some(format!("{}/api/telemetry", server.url())))
            .send_event(event())
            .await;

        mock.assert_async().await;
    }

    #[tokio::test]
    async fn unreachable_endpoint_is_swallowed() {
        // Port 9 (discard) on localhost is expected to refuse connections.
        sender(Some("http://127.0.0.1:9/api/telemetry".to_string()))
            .send_event(event())
            .await;
    }

    #[tokio::test]
    async fn no_endpoint_only_logs() {
        let sender = sender(None);
        assert_eq!(sender.endpoint(), None);
        sender.send_event(event()).await;
    }

    #[tokio::test]
    async fn send_error_posts_error_boundary_action() {
        let mut server = Server::new_async().await;
        let mock = server
            .mock("POST", "/api/telemetry")
            .match_body(Matcher::PartialJson(json!({
                "action": "error_boundary",
                "id": "err_1_abc",
                "message": "boom",
                "componentStack": "Landing"
            })))
            .with_status(200)
            .expect(1)
            .create_async()
            .await;

        let report = ErrorReport {
            id: "err_1_abc".to_string(),
            message: "boom".to_string(),
            stack: None,
            component_stack: Some("Landing".to_string()),
            timestamp: "2024-01-01T00:00:00.000Z".to_string(),
            user_agent: "test-agent".to_string(),
            viewport: Viewport::default(),
            url: "https://fact.rip/".to_string(),
        };
        sender(Some(format!("{}/api/telemetry", server.url())))
            .send_error(&report)
            .await;

        mock.assert_async().await;
    }
}
