//! # Configuration Loader / 配置加载器
//!
//! - Read TOML configuration files into [`AppConfig`]
//! - Resolve telemetry endpoints once, at startup
//! - Resolve the data directory
//!
//! Endpoint precedence: explicit override (CLI flag or environment) > configured
//! value > disabled.

use std::path::{Path, PathBuf};

use anyhow::Context;
use fr_core::config::{StorageSettings, TelemetrySettings};
use fr_core::AppConfig;

pub const TELEMETRY_ENDPOINT_ENV: &str = "FACT_RIP_TELEMETRY_ENDPOINT";
pub const ERROR_REPORT_ENDPOINT_ENV: &str = "FACT_RIP_ERROR_REPORT_ENDPOINT";

/// Directory name under the platform data dir.
pub const APP_DIR_NAME: &str = "fact.rip";

/// Load configuration from a TOML file.
pub fn load_config(config_path: &Path) -> anyhow::Result<AppConfig> {
    let content = std::fs::read_to_string(config_path)
        .with_context(|| format!("Failed to read config file: {}", config_path.display()))?;
    AppConfig::from_toml_str(&content)
        .with_context(|| format!("Failed to load config file: {}", config_path.display()))
}

/// Endpoint overrides, highest precedence.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EndpointOverrides {
    pub telemetry: Option<String>,
    pub error_report: Option<String>,
}

impl EndpointOverrides {
    /// Read overrides from the process environment.
    pub fn from_env() -> Self {
        Self {
            telemetry: std::env::var(TELEMETRY_ENDPOINT_ENV).ok(),
            error_report: std::env::var(ERROR_REPORT_ENDPOINT_ENV).ok(),
        }
    }

    /// Fill unset overrides from `other`. Blank values count as unset.
    pub fn or(self, other: EndpointOverrides) -> Self {
        Self {
            telemetry: non_empty(self.telemetry.as_deref())
                .or_else(|| non_empty(other.telemetry.as_deref())),
            error_report: non_empty(self.error_report.as_deref())
                .or_else(|| non_empty(other.error_report.as_deref())),
        }
    }
}

/// Endpoints resolved once at startup. `None` disables the network call.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EndpointConfig {
    pub telemetry: Option<String>,
    pub error_report: Option<String>,
}

impl EndpointConfig {
    pub fn resolve(overrides: EndpointOverrides, settings: &TelemetrySettings) -> Self {
        Self {
            telemetry: pick(overrides.telemetry, &settings.endpoint),
            error_report: pick(overrides.error_report, &settings.report_endpoint),
        }
    }
}

fn pick(override_value: Option<String>, configured: &str) -> Option<String> {
    non_empty(override_value.as_deref()).or_else(|| non_empty(Some(configured)))
}

fn non_empty(value: Option<&str>) -> Option<String> {
    value.map(str::trim).filter(|v| !v.is_empty()).map(str::to_string)
}

/// The configured data dir, or `<platform data dir>/fact.rip`.
pub fn resolve_data_dir(settings: &StorageSettings) -> PathBuf {
    if !settings.data_dir.as_os_str().is_empty() {
        return settings.data_dir.clone();
    }
    dirs::data_dir()
        .unwrap_or_else(std::env::temp_dir)
        .join(APP_DIR_NAME)
}
