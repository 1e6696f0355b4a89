//! Assembled application.

use std::sync::Arc;

use fr_core::ports::ClockPort;
use fr_core::view::LandingView;

use crate::deps::AppDeps;
use crate::error_boundary::{ErrorBoundary, ErrorBoundaryDeps};
use crate::journey::{JourneyError, PendingTransition, UserJourneyContext};
use crate::storage_provider::StorageProvider;

/// The journey context wrapped in its error boundary.
pub struct App {
    journey: Arc<UserJourneyContext>,
    boundary: ErrorBoundary,
    storage: StorageProvider,
    clock: Arc<dyn ClockPort>,
}

impl App {
    pub fn new(deps: AppDeps) -> Self {
        let storage = StorageProvider::new(deps.storage);
        let journey = UserJourneyContext::new(
            storage.storage(),
            deps.journey_events,
            Arc::clone(&deps.telemetry),
            deps.client.clone(),
            deps.timings,
        );
        let boundary = ErrorBoundary::new(ErrorBoundaryDeps {
            telemetry: deps.telemetry,
            reporter: deps.error_reporter,
            emergency: deps.emergency,
            reload: deps.reload,
            clock: Arc::clone(&deps.clock),
            client: deps.client,
        });

        Self {
            journey: Arc::new(journey),
            boundary,
            storage,
            clock: deps.clock,
        }
    }

    pub fn journey(&self) -> &Arc<UserJourneyContext> {
        &self.journey
    }

    pub fn boundary(&self) -> &ErrorBoundary {
        &self.boundary
    }

    pub fn storage(&self) -> &StorageProvider {
        &self.storage
    }

    /// Current landing screen.
    pub async fn landing_view(&self) -> LandingView {
        LandingView::from_state(&self.journey.state().await)
    }

    /// Initialize the journey from storage.
    pub async fn start(&self) -> Result<LandingView, JourneyError> {
        let state = self.journey.initialize().await?;
        Ok(LandingView::from_state(&state))
    }

    /// Join now, stamped with the current time.
    pub async fn join(&self) -> Result<PendingTransition, JourneyError> {
        self.journey.join_watchtower(self.clock.now_iso()).await
    }

    pub fn shutdown(&self) {
        self.journey.shutdown();
    }
}
