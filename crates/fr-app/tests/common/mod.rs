#![allow(dead_code)]

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use fr_app::journey::BroadcastJourneyEvents;
use fr_app::{Storage, UserJourneyContext};
use fr_core::config::JourneyTimings;
use fr_core::ports::{ClockPort, ReloadPort, StorageAdapterPort, TelemetryPort};
use fr_core::{ClientInfo, ErrorReport, JourneyEvent, TelemetryEvent};
use tokio::sync::broadcast;

pub const TS: &str = "2024-01-01T00:00:00.000Z";
pub const NOW_MS: i64 = 1_704_067_200_000;

pub fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}

/// Records every telemetry call.
#[derive(Default)]
pub struct RecordingTelemetry {
    events: Mutex<Vec<TelemetryEvent>>,
    errors: Mutex<Vec<ErrorReport>>,
}

impl RecordingTelemetry {
    pub fn events(&self) -> Vec<TelemetryEvent> {
        self.events.lock().unwrap().clone()
    }

    pub fn errors(&self) -> Vec<ErrorReport> {
        self.errors.lock().unwrap().clone()
    }
}

#[async_trait]
impl TelemetryPort for RecordingTelemetry {
    async fn send_event(&self, event: TelemetryEvent) {
        self.events.lock().unwrap().push(event);
    }

    async fn send_error(&self, report: &ErrorReport) {
        self.errors.lock().unwrap().push(report.clone());
    }
}

/// Telemetry whose requests never complete.
pub struct HangingTelemetry;

#[async_trait]
impl TelemetryPort for HangingTelemetry {
    async fn send_event(&self, _event: TelemetryEvent) {
        std::future::pending::<()>().await
    }

    async fn send_error(&self, _report: &ErrorReport) {
        std::future::pending::<()>().await
    }
}

pub struct FixedClock(pub i64);

impl ClockPort for FixedClock {
    fn now_ms(&self) -> i64 {
        self.0
    }
}

#[derive(Default)]
pub struct CountingReload(AtomicUsize);

impl CountingReload {
    pub fn count(&self) -> usize {
        self.0.load(Ordering::SeqCst)
    }
}

impl ReloadPort for CountingReload {
    fn reload(&self) {
        self.0.fetch_add(1, Ordering::SeqCst);
    }
}

pub struct Harness {
    pub context: UserJourneyContext,
    pub events: broadcast::Receiver<JourneyEvent>,
}

pub fn journey(
    adapter: Arc<dyn StorageAdapterPort>,
    telemetry: Arc<dyn TelemetryPort>,
) -> Harness {
    init_tracing();
    let events = BroadcastJourneyEvents::new();
    let rx = events.subscribe();
    let context = UserJourneyContext::new(
        Storage::new(adapter),
        Arc::new(events),
        telemetry,
        ClientInfo::default(),
        JourneyTimings::default(),
    );
    Harness {
        context,
        events: rx,
    }
}

pub fn drain(rx: &mut broadcast::Receiver<JourneyEvent>) -> Vec<JourneyEvent> {
    let mut out = Vec::new();
    while let Ok(event) = rx.try_recv() {
        out.push(event);
    }
    out
}
