use std::any::Any;
use std::future::Future;
use std::panic::{catch_unwind, AssertUnwindSafe};
use std::sync::Arc;

use fr_core::ports::{
    ClockPort, EmergencyStoragePort, ErrorReportPort, ReloadPort, TelemetryPort,
};
use fr_core::{ClientInfo, EmergencyRecord, ErrorReport};
use futures::FutureExt;
use tracing::{error, info_span, warn, Instrument};

use super::error_id::generate_error_id;
use super::recovery::RecoveryScreen;

pub struct ErrorBoundaryDeps {
    pub telemetry: Arc<dyn TelemetryPort>,
    pub reporter: Arc<dyn ErrorReportPort>,
    pub emergency: Arc<dyn EmergencyStoragePort>,
    pub reload: Arc<dyn ReloadPort>,
    pub clock: Arc<dyn ClockPort>,
    pub client: ClientInfo,
}

/// Result of running a render step inside the boundary.
pub enum BoundaryOutcome<T> {
    Rendered(T),
    Recovery(RecoveryScreen),
}

impl<T> BoundaryOutcome<T> {
    pub fn is_recovery(&self) -> bool {
        matches!(self, BoundaryOutcome::Recovery(_))
    }

    pub fn rendered(self) -> Option<T> {
        match self {
            BoundaryOutcome::Rendered(value) => Some(value),
            BoundaryOutcome::Recovery(_) => None,
        }
    }

    pub fn recovery(self) -> Option<RecoveryScreen> {
        match self {
            BoundaryOutcome::Rendered(_) => None,
            BoundaryOutcome::Recovery(screen) => Some(screen),
        }
    }
}

struct CaughtFailure {
    message: String,
    stack: Option<String>,
}

impl CaughtFailure {
    fn from_error(err: &anyhow::Error) -> Self {
        let chain = format!("{err:?}");
        let message = err.to_string();
        Self {
            stack: (chain != message).then_some(chain),
            message,
        }
    }

    fn from_panic(payload: Box<dyn Any + Send>) -> Self {
        let detail = payload
            .downcast_ref::<&str>()
            .map(|s| s.to_string())
            .or_else(|| payload.downcast_ref::<String>().cloned())
            .unwrap_or_else(|| "unknown panic payload".to_string());
        Self {
            message: format!("panic: {detail}"),
            stack: None,
        }
    }
}

/// Top-level failure isolation for render steps.
#[derive(Clone)]
pub struct ErrorBoundary {
    deps: Arc<ErrorBoundaryDeps>,
}

impl ErrorBoundary {
    pub fn new(deps: ErrorBoundaryDeps) -> Self {
        Self {
            deps: Arc::new(deps),
        }
    }

    /// Diagnostics left behind by the last caught failure, if any.
    pub fn last_crash(&self) -> Option<EmergencyRecord> {
        self.deps.emergency.get_error()
    }

    pub fn render<T, F>(&self, component_stack: &str, render: F) -> BoundaryOutcome<T>
    where
        F: FnOnce() -> anyhow::Result<T>,
    {
        match catch_unwind(AssertUnwindSafe(render)) {
            Ok(Ok(value)) => BoundaryOutcome::Rendered(value),
            Ok(Err(err)) => {
                BoundaryOutcome::Recovery(self.catch(CaughtFailure::from_error(&err), component_stack))
            }
            Err(payload) => {
                BoundaryOutcome::Recovery(self.catch(CaughtFailure::from_panic(payload), component_stack))
            }
        }
    }

    pub async fn render_async<T, Fut>(&self, component_stack: &str, render: Fut) -> BoundaryOutcome<T>
    where
        Fut: Future<Output = anyhow::Result<T>>,
    {
        match AssertUnwindSafe(render).catch_unwind().await {
            Ok(Ok(value)) => BoundaryOutcome::Rendered(value),
            Ok(Err(err)) => {
                BoundaryOutcome::Recovery(self.catch(CaughtFailure::from_error(&err), component_stack))
            }
            Err(payload) => {
                BoundaryOutcome::Recovery(self.catch(CaughtFailure::from_panic(payload), component_stack))
            }
        }
    }

    fn catch(&self, failure: CaughtFailure, component_stack: &str) -> RecoveryScreen {
        let deps = &self.deps;
        let now_ms = deps.clock.now_ms();
        let report = ErrorReport {
            id: generate_error_id(now_ms),
            message: failure.message,
            stack: failure.stack,
            component_stack: Some(component_stack.to_string()),
            timestamp: deps.clock.now_iso(),
            user_agent: deps.client.user_agent.clone(),
            viewport: deps.client.viewport,
            url: deps.client.url.clone(),
        };

        error!(
            error_id = %report.id,
            message = %report.message,
            component_stack = %component_stack,
            stack = report.stack.as_deref().unwrap_or_default(),
            "[ErrorBoundary] Caught render failure"
        );

        self.send_to_telemetry(&report);
        deps.emergency.set_error(&report.to_emergency_record(now_ms));

        RecoveryScreen::new(report, Arc::clone(&self.deps))
    }

    fn send_to_telemetry(&self, report: &ErrorReport) {
        let Ok(runtime) = tokio::runtime::Handle::try_current() else {
            warn!(error_id = %report.id, "no async runtime, error report not sent to telemetry");
            return;
        };
        let telemetry = Arc::clone(&self.deps.telemetry);
        let report = report.clone();
        let span = info_span!("usecase.error_boundary.telemetry", error_id = %report.id);
        runtime.spawn(async move { telemetry.send_error(&report).await }.instrument(span));
    }
}
