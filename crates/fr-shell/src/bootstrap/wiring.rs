//! # Dependency Injection / 依赖注入模块
//!
//! ## Responsibilities / 职责
//!
//! - Create infra implementations (storage, emergency storage, HTTP senders, clock)
//! - Inject them into [`AppDeps`]
//!
//! ## Prohibited / 禁止事项
//!
//! No business logic and no configuration validation. This is the only place that
//! depends on `fr-infra` and `fr-app` at once, and only to assemble them.

use std::sync::Arc;
use std::time::Duration;

use fr_app::journey::{FanoutJourneyEvents, LoggingJourneyEvents};
use fr_app::{AppDeps, StorageProvider};
use fr_core::ports::{JourneyEventPort, ReloadPort, StorageAdapterPort, TelemetryError};
use fr_infra::{
    select_storage_adapter, FileEmergencyStorage, HttpErrorReporter, HttpTelemetrySender,
    SystemClock,
};

use super::config::ShellSettings;

pub type WiringResult<T> = Result<T, WiringError>;

#[derive(Debug, thiserror::Error)]
pub enum WiringError {
    #[error("HTTP client initialization failed: {0}")]
    HttpClient(#[from] TelemetryError),
}

/// Optional adapters supplied by the caller instead of the defaults.
#[derive(Default, Clone)]
pub struct Overrides {
    pub storage: Option<Arc<dyn StorageAdapterPort>>,
    pub journey_events: Option<Arc<dyn JourneyEventPort>>,
}

pub fn wire_dependencies(
    settings: &ShellSettings,
    reload: Arc<dyn ReloadPort>,
    overrides: Overrides,
) -> WiringResult<AppDeps> {
    let config = &settings.config;
    let quota = config.storage.quota_bytes;
    let timeout = Duration::from_millis(config.telemetry.timeout_ms);

    let storage = StorageProvider::select(overrides.storage, || {
        select_storage_adapter(&settings.data_dir, quota)
    });
    let telemetry = HttpTelemetrySender::new(settings.endpoints.telemetry.clone(), timeout)?;
    let error_reporter =
        HttpErrorReporter::new(settings.endpoints.error_report.clone(), timeout)?;

    let mut journey_events = FanoutJourneyEvents::default().with(Arc::new(LoggingJourneyEvents));
    if let Some(extra) = overrides.journey_events {
        journey_events = journey_events.with(extra);
    }

    Ok(AppDeps {
        storage: storage.adapter(),
        emergency: Arc::new(FileEmergencyStorage::with_base_dir(&settings.data_dir, quota)),
        telemetry: Arc::new(telemetry),
        error_reporter: Arc::new(error_reporter),
        journey_events: Arc::new(journey_events),
        reload,
        clock: Arc::new(SystemClock),
        client: config.client_info(),
        timings: config.timings,
    })
}
