//! # Configuration DTO / 配置数据
//!
//! ## Responsibilities / 职责
//!
//! - Define configuration data structures
//! - Provide TOML → DTO mapping
//!
//! ## Prohibited / 禁止事项
//!
//! - No I/O (loading lives in `fr-infra::config`)
//! - No endpoint precedence logic (resolved by `fr-infra::config::EndpointConfig`)
//!
//! Missing sections and keys fall back to [`defaults`]; present values are accepted
//! as they are.

mod defaults;

use std::path::PathBuf;
use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::telemetry::{ClientInfo, Viewport};

pub use defaults::{
    DEFAULT_CONFIRM_DELAY_MS, DEFAULT_FRAME_INTERVAL_MS, DEFAULT_HTTP_TIMEOUT_MS,
    DEFAULT_MODAL_DELAY_MS, DEFAULT_MODAL_FADE_OUT_MS, DEFAULT_STORAGE_QUOTA_BYTES,
};

/// Application configuration.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub storage: StorageSettings,
    pub telemetry: TelemetrySettings,
    pub timings: JourneyTimings,
    pub client: ClientSettings,
}

/// `[storage]` section.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct StorageSettings {
    /// Directory holding the durable key/value file. Empty means "platform default".
    pub data_dir: PathBuf,
    /// Byte budget of the durable store, like a browser's per-origin quota.
    pub quota_bytes: u64,
}

/// `[telemetry]` section. Empty endpoints are disabled.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TelemetrySettings {
    pub endpoint: String,
    pub report_endpoint: String,
    pub timeout_ms: u64,
}

/// `[timings]` section: non-functional animation tuning.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct JourneyTimings {
    /// START_JOIN → SHOW_MODAL.
    pub modal_delay_ms: u64,
    /// MODAL_READY → CONFIRM_JOIN.
    pub confirm_delay_ms: u64,
    /// CLOSE_MODAL → MODAL_HIDDEN.
    pub modal_fade_out_ms: u64,
    /// RESET → RESET_COMPLETE (one frame).
    pub frame_interval_ms: u64,
}

impl JourneyTimings {
    pub fn modal_delay(&self) -> Duration {
        Duration::from_millis(self.modal_delay_ms)
    }

    pub fn confirm_delay(&self) -> Duration {
        Duration::from_millis(self.confirm_delay_ms)
    }

    pub fn modal_fade_out(&self) -> Duration {
        Duration::from_millis(self.modal_fade_out_ms)
    }

    pub fn frame_interval(&self) -> Duration {
        Duration::from_millis(self.frame_interval_ms)
    }
}

/// `[client]` section.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ClientSettings {
    pub user_agent: String,
    pub viewport_width: u32,
    pub viewport_height: u32,
    pub url: String,
}

impl ClientSettings {
    pub fn to_client_info(&self) -> ClientInfo {
        ClientInfo {
            user_agent: self.user_agent.clone(),
            viewport: Viewport {
                width: self.viewport_width,
                height: self.viewport_height,
            },
            url: self.url.clone(),
        }
    }
}

impl AppConfig {
    /// Create AppConfig from a parsed TOML value.
    pub fn from_toml(toml_value: &toml::Value) -> anyhow::Result<Self> {
        let config = toml_value
            .clone()
            .try_into()
            .map_err(|e| anyhow::anyhow!("Failed to map TOML into AppConfig: {e}"))?;
        Ok(config)
    }

    /// Parse AppConfig from TOML text.
    pub fn from_toml_str(content: &str) -> anyhow::Result<Self> {
        let value: toml::Value =
            toml::from_str(content).map_err(|e| anyhow::anyhow!("Failed to parse config as TOML: {e}"))?;
        Self::from_toml(&value)
    }

    pub fn client_info(&self) -> ClientInfo {
        self.client.to_client_info()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn from_toml_str_reads_all_sections() {
        let config = AppConfig::from_toml_str(
            r#"
            [storage]
            data_dir = "/tmp/fact"
            quota_bytes = 1024

            [telemetry]
            endpoint = "https://t.example/api"
            report_endpoint = "https://r.example/api"
            timeout_ms = 250

            [timings]
            modal_delay_ms = 10
            confirm_delay_ms = 20
            modal_fade_out_ms = 30
            frame_interval_ms = 40

            [client]
            user_agent = "ua"
            viewport_width = 390
            viewport_height = 844
            url = "https://fact.rip/x"
            "#,
        )
        .unwrap();

        assert_eq!(config.storage.data_dir, PathBuf::from("/tmp/fact"));
        assert_eq!(config.storage.quota_bytes, 1024);
        assert_eq!(config.telemetry.endpoint, "https://t.example/api");
        assert_eq!(config.telemetry.timeout_ms, 250);
        assert_eq!(config.timings.confirm_delay(), Duration::from_millis(20));
        assert_eq!(config.timings.frame_interval(), Duration::from_millis(40));
        assert_eq!(config.client_info().viewport, Viewport { width: 390, height: 844 });
    }

    #[test]
    fn missing_sections_fall_back_to_defaults() {
        let config = AppConfig::from_toml_str("").unwrap();

        assert_eq!(config, AppConfig::default());
        assert_eq!(config.timings.modal_delay_ms, DEFAULT_MODAL_DELAY_MS);
        assert_eq!(config.timings.confirm_delay_ms, DEFAULT_CONFIRM_DELAY_MS);
        assert_eq!(config.storage.quota_bytes, DEFAULT_STORAGE_QUOTA_BYTES);
        assert!(config.telemetry.endpoint.is_empty());
    }

    #[test]
    fn partial_section_keeps_other_defaults() {
        let config = AppConfig::from_toml_str("[timings]\nmodal_delay_ms = 0\n").unwrap();
        assert_eq!(config.timings.modal_delay_ms, 0);
        assert_eq!(config.timings.frame_interval_ms, DEFAULT_FRAME_INTERVAL_MS);
    }

    #[test]
    fn invalid_toml_is_an_error() {
        let err = AppConfig::from_toml_str("[timings\n").unwrap_err();
        assert!(err.to_string().contains("Failed to parse"));
    }
}
