mod common;

use std::sync::Arc;
use std::time::Duration;

use common::{CountingReload, FixedClock, RecordingTelemetry, NOW_MS, TS};
use fr_app::journey::LoggingJourneyEvents;
use fr_app::{App, AppDeps};
use fr_core::config::JourneyTimings;
use fr_core::journey::{JOINED_TIMESTAMP_KEY, VISITED_KEY};
use fr_core::{ClientInfo, ModalState};
use fr_infra::{FileEmergencyStorage, HttpErrorReporter, MemoryStorageAdapter};
use tempfile::TempDir;

fn app(dir: &TempDir, storage: MemoryStorageAdapter) -> App {
    App::new(AppDeps {
        storage: Arc::new(storage),
        emergency: Arc::new(FileEmergencyStorage::with_base_dir(dir.path(), 1024)),
        telemetry: Arc::new(RecordingTelemetry::default()),
        error_reporter: Arc::new(HttpErrorReporter::new(None, Duration::from_secs(1)).unwrap()),
        journey_events: Arc::new(LoggingJourneyEvents),
        reload: Arc::new(CountingReload::default()),
        clock: Arc::new(FixedClock(NOW_MS)),
        client: ClientInfo::default(),
        timings: JourneyTimings::default(),
    })
}

#[tokio::test]
async fn start_renders_returning_visitor() {
    let dir = TempDir::new().unwrap();
    let app = app(
        &dir,
        MemoryStorageAdapter::with_entries([(VISITED_KEY, "true"), (JOINED_TIMESTAMP_KEY, TS)]),
    );

    let view = app.start().await.unwrap();

    assert_eq!(view.title.text, "The Loop Persists.");
    assert!(view.modal.is_none());
    assert!(!view.cta.disabled);
    assert_eq!(app.storage().adapter().kind(), "memory");
}

#[tokio::test(start_paused = true)]
async fn join_through_app_shows_confirmed_modal() {
    let dir = TempDir::new().unwrap();
    let app = app(&dir, MemoryStorageAdapter::new());
    app.start().await.unwrap();

    app.journey().join_watchtower(TS).await.unwrap().finished().await;

    let view = app.landing_view().await;
    let modal = view.modal.expect("modal visible after join");
    assert_eq!(modal.state, ModalState::Ready);
    assert_eq!(modal.reset_label, Some("Reset"));
    assert_eq!(view.title.text, "The Loop Persists.");

    app.shutdown();
    assert!(app.journey().is_shut_down());
}
