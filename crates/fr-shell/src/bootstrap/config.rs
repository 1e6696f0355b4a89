//! # Configuration / 配置
//!
//! ## Responsibilities / 职责
//!
//! - Load `.env` and the optional TOML config file
//! - Apply command-line overrides
//! - Resolve endpoints and the data directory once, at startup
//!
//! No validation: whatever the file says is taken as fact.

use std::path::PathBuf;

use fr_core::AppConfig;
use fr_infra::config::{load_config, resolve_data_dir, EndpointConfig, EndpointOverrides};

use crate::cli::GlobalOptions;

/// Everything the shell needs, resolved once.
#[derive(Debug, Clone)]
pub struct ShellSettings {
    pub config: AppConfig,
    pub data_dir: PathBuf,
    pub endpoints: EndpointConfig,
}

impl ShellSettings {
    pub fn logs_dir(&self) -> PathBuf {
        self.data_dir.join("logs")
    }
}

/// Resolve settings with overrides read from `options` and the process environment.
pub fn resolve_settings(options: &GlobalOptions) -> anyhow::Result<ShellSettings> {
    let _ = dotenvy::dotenv();
    resolve_settings_with_env(options, EndpointOverrides::from_env())
}

/// Command-line values beat `env`, which beats the config file.
pub fn resolve_settings_with_env(
    options: &GlobalOptions,
    env: EndpointOverrides,
) -> anyhow::Result<ShellSettings> {
    let mut config = match &options.config {
        Some(path) => load_config(path)?,
        None => AppConfig::default(),
    };
    if let Some(data_dir) = &options.data_dir {
        config.storage.data_dir = data_dir.clone();
    }

    let cli = EndpointOverrides {
        telemetry: options.telemetry_endpoint.clone(),
        error_report: options.report_endpoint.clone(),
    };
    let endpoints = EndpointConfig::resolve(cli.or(env), &config.telemetry);
    let data_dir = resolve_data_dir(&config.storage);

    Ok(ShellSettings {
        config,
        data_dir,
        endpoints,
    })
}
