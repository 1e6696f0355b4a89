//! Telemetry event model.
//!
//! Events are POSTed as JSON to an optional endpoint. The shape is fixed:
//! `{ action, timestamp, returning, user_agent, viewport: {width, height}, ...extra }`.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Client viewport in CSS pixels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Viewport {
    pub width: u32,
    pub height: u32,
}

impl Default for Viewport {
    fn default() -> Self {
        Self {
            width: 1280,
            height: 720,
        }
    }
}

/// What the client knows about itself, attached to telemetry and error reports.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ClientInfo {
    pub user_agent: String,
    pub viewport: Viewport,
    pub url: String,
}

impl Default for ClientInfo {
    fn default() -> Self {
        Self {
            user_agent: concat!("fact-rip/", env!("CARGO_PKG_VERSION")).to_string(),
            viewport: Viewport::default(),
            url: "https://fact.rip/".to_string(),
        }
    }
}

/// A single fire-and-forget telemetry event.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TelemetryEvent {
    pub action: String,
    /// ISO-8601.
    pub timestamp: String,
    pub returning: bool,
    pub user_agent: String,
    pub viewport: Viewport,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl TelemetryEvent {
    pub fn new(
        action: impl Into<String>,
        timestamp: impl Into<String>,
        returning: bool,
        client: &ClientInfo,
    ) -> Self {
        Self {
            action: action.into(),
            timestamp: timestamp.into(),
            returning,
            user_agent: client.user_agent.clone(),
            viewport: client.viewport,
            extra: Map::new(),
        }
    }

    /// Attach an additional top-level field.
    pub fn with_field(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.extra.insert(key.into(), value.into());
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn telemetry_event_flattens_extra_fields() {
        let client = ClientInfo {
            user_agent: "test-agent".to_string(),
            viewport: Viewport {
                width: 390,
                height: 844,
            },
            url: "https://fact.rip/".to_string(),
        };
        let event = TelemetryEvent::new("join_watchtower", "2024-01-01T00:00:00.000Z", false, &client)
            .with_field("source", "cta");

        let value = serde_json::to_value(&event).unwrap();

        assert_eq!(
            value,
            json!({
                "action": "join_watchtower",
                "timestamp": "2024-01-01T00:00:00.000Z",
                "returning": false,
                "user_agent": "test-agent",
                "viewport": { "width": 390, "height": 844 },
                "source": "cta"
            })
        );
    }
}
