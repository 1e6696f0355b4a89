//! User journey context.
//!
//! Drives the [`UserJourneyStateMachine`] and owns every side effect around it:
//! persistence of the visited/joined keys, modal lifecycle notifications, the
//! join telemetry event, and the timed follow-up transitions.

use std::future::Future;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::time::Duration;

use fr_core::config::JourneyTimings;
use fr_core::journey::StorageKey;
use fr_core::ports::{JourneyEventPort, TelemetryPort};
use fr_core::{
    ClientInfo, JourneyAction, JourneyEvent, PersistedJourney, TelemetryEvent, UserJourneyState,
    UserJourneyStateMachine,
};
use tokio::task::JoinHandle;
use tokio_util::sync::CancellationToken;
use tracing::{debug, error, info, info_span, Instrument};

use super::error::JourneyError;
use super::store::JourneyStore;
use crate::storage::Storage;

/// Telemetry action name for the join call-to-action.
pub const JOIN_ACTION: &str = "join_watchtower";

/// An out-of-band change to a storage key, e.g. from another process.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StorageChange {
    pub key: String,
    pub new_value: Option<String>,
}

/// Handle to a scheduled follow-up transition.
///
/// Dropping the handle does not cancel the transition; shutting the context down
/// does.
#[derive(Debug)]
pub struct PendingTransition {
    handle: JoinHandle<()>,
}

impl PendingTransition {
    pub fn is_finished(&self) -> bool {
        self.handle.is_finished()
    }

    /// Wait until the transition has run to completion or been cancelled.
    pub async fn finished(self) {
        if let Err(err) = self.handle.await {
            if err.is_panic() {
                error!(error = %err, "journey transition task panicked");
            }
        }
    }
}

/// Live journey state plus its side effects.
///
/// Dropping the context cancels every pending transition.
pub struct UserJourneyContext {
    inner: Arc<Inner>,
}

struct Inner {
    store: JourneyStore,
    initialized: AtomicBool,
    storage: Storage,
    events: Arc<dyn JourneyEventPort>,
    telemetry: Arc<dyn TelemetryPort>,
    client: ClientInfo,
    timings: JourneyTimings,
    cancel: CancellationToken,
}

impl UserJourneyContext {
    pub fn new(
        storage: Storage,
        events: Arc<dyn JourneyEventPort>,
        telemetry: Arc<dyn TelemetryPort>,
        client: ClientInfo,
        timings: JourneyTimings,
    ) -> Self {
        Self {
            inner: Arc::new(Inner {
                store: JourneyStore::default(),
                initialized: AtomicBool::new(false),
                storage,
                events,
                telemetry,
                client,
                timings,
                cancel: CancellationToken::new(),
            }),
        }
    }

    pub async fn state(&self) -> UserJourneyState {
        self.inner.store.get_state().await
    }

    pub fn is_initialized(&self) -> bool {
        self.inner.initialized.load(Ordering::Acquire)
    }

    pub fn is_shut_down(&self) -> bool {
        self.inner.cancel.is_cancelled()
    }

    /// Load the persisted fields, enable persistence and announce the modal state.
    ///
    /// Runs once; later calls return the current state. Nothing is written to
    /// storage before this completes.
    pub async fn initialize(&self) -> Result<UserJourneyState, JourneyError> {
        self.ensure_running()?;
        let inner = &self.inner;
        let _dispatch_guard = inner.store.acquire_dispatch_lock().await;

        if inner.initialized.load(Ordering::Acquire) {
            debug!("journey already initialized");
            return Ok(inner.store.get_state().await);
        }

        let persisted = inner.read_persisted();
        info!(
            adapter = inner.storage.kind(),
            has_visited = persisted.has_visited,
            has_joined = persisted.joined_timestamp.is_some(),
            "journey initialized from storage"
        );
        let state = inner
            .apply(JourneyAction::Initialize(persisted.into_partial()))
            .await;
        inner.initialized.store(true, Ordering::Release);
        inner.persist(&state);
        inner.events.emit(JourneyEvent::for_modal_state(state.modal_state));
        Ok(state)
    }

    /// Apply a single action.
    pub async fn dispatch(&self, action: JourneyAction) -> Result<UserJourneyState, JourneyError> {
        self.ensure_running()?;
        Ok(self.inner.dispatch(action).await)
    }

    /// Start the join flow.
    ///
    /// Sends the join telemetry event in the background, enters the loading state
    /// immediately, shows the modal after the modal delay, and confirms the join
    /// after the confirm delay.
    pub async fn join_watchtower(
        &self,
        timestamp: impl Into<String>,
    ) -> Result<PendingTransition, JourneyError> {
        self.ensure_running()?;
        let timestamp = timestamp.into();

        {
            let _dispatch_guard = self.inner.store.acquire_dispatch_lock().await;
            let current = self.inner.store.get_state().await;
            if current.is_loading {
                return Err(JourneyError::JoinInProgress);
            }
            self.inner.send_join_telemetry(&timestamp, current.has_joined());
            self.inner.apply(JourneyAction::StartJoin).await;
        }

        let inner = Arc::clone(&self.inner);
        let delays = (inner.timings.modal_delay(), inner.timings.confirm_delay());
        Ok(self.schedule(info_span!("usecase.journey.join"), async move {
            if !inner.sleep(delays.0).await {
                return;
            }
            inner.dispatch(JourneyAction::ShowModal).await;
            inner.dispatch(JourneyAction::ModalReady).await;

            if !inner.sleep(delays.1).await {
                return;
            }
            inner
                .dispatch(JourneyAction::ConfirmJoin {
                    timestamp: timestamp.clone(),
                })
                .await;
            inner.events.emit(JourneyEvent::JoinConfirmed { timestamp });
        }))
    }

    /// Start closing the modal; it is hidden after the fade-out delay.
    pub async fn close_modal(&self) -> Result<PendingTransition, JourneyError> {
        self.ensure_running()?;
        self.inner.dispatch(JourneyAction::CloseModal).await;

        let inner = Arc::clone(&self.inner);
        let fade_out = inner.timings.modal_fade_out();
        Ok(self.schedule(info_span!("usecase.journey.close_modal"), async move {
            if inner.sleep(fade_out).await {
                inner.dispatch(JourneyAction::ModalHidden).await;
            }
        }))
    }

    /// Forget the visitor.
    ///
    /// Both journey keys are removed before this returns. `reset:complete` is
    /// emitted on the next frame, followed by the return to the initial state.
    pub async fn reset(&self) -> Result<PendingTransition, JourneyError> {
        self.ensure_running()?;
        self.inner.dispatch(JourneyAction::Reset).await;
        for key in StorageKey::ALL {
            self.inner.storage.remove(key.as_str());
        }
        info!("journey storage cleared");

        let inner = Arc::clone(&self.inner);
        let frame = inner.timings.frame_interval();
        Ok(self.schedule(info_span!("usecase.journey.reset"), async move {
            if inner.sleep(frame).await {
                inner.events.emit(JourneyEvent::ResetComplete);
                inner.dispatch(JourneyAction::ResetComplete).await;
            }
        }))
    }

    /// Re-read the journey keys after an external change to one of them.
    ///
    /// Returns `false` when the change does not concern the journey.
    pub async fn on_storage_change(&self, change: &StorageChange) -> Result<bool, JourneyError> {
        self.ensure_running()?;
        if StorageKey::from_key(&change.key).is_none() {
            return Ok(false);
        }
        debug!(key = %change.key, "journey key changed externally");
        let persisted = self.inner.read_persisted();
        self.inner
            .dispatch(JourneyAction::Initialize(persisted.into_partial()))
            .await;
        Ok(true)
    }

    /// Cancel every pending transition. Further operations fail with
    /// [`JourneyError::ShutDown`].
    pub fn shutdown(&self) {
        if !self.inner.cancel.is_cancelled() {
            info!("journey context shutting down");
            self.inner.cancel.cancel();
        }
    }

    fn ensure_running(&self) -> Result<(), JourneyError> {
        if self.inner.cancel.is_cancelled() {
            return Err(JourneyError::ShutDown);
        }
        Ok(())
    }

    fn schedule<F>(&self, span: tracing::Span, task: F) -> PendingTransition
    where
        F: Future<Output = ()> + Send + 'static,
    {
        PendingTransition {
            handle: tokio::spawn(task.instrument(span)),
        }
    }
}

impl Drop for UserJourneyContext {
    fn drop(&mut self) {
        self.inner.cancel.cancel();
    }
}

impl Inner {
    async fn dispatch(&self, action: JourneyAction) -> UserJourneyState {
        let _dispatch_guard = self.store.acquire_dispatch_lock().await;
        self.apply(action).await
    }

    /// Reduce, store, persist and notify. Caller holds the dispatch lock.
    async fn apply(&self, action: JourneyAction) -> UserJourneyState {
        let action_name = action.name();
        let from = self.store.get_state().await;
        let next = UserJourneyStateMachine::reduce(from.clone(), action);
        debug!(action = action_name, from = ?from, to = ?next, "journey state transition");
        self.store.set_state(next.clone()).await;

        if self.initialized.load(Ordering::Acquire) {
            self.persist_changes(&from, &next);
        }
        if from.modal_state != next.modal_state {
            self.events.emit(JourneyEvent::for_modal_state(next.modal_state));
        }
        next
    }

    fn read_persisted(&self) -> PersistedJourney {
        let visited = self.storage.get(StorageKey::HasVisited.as_str());
        let joined = self.storage.get(StorageKey::JoinedTimestamp.as_str());
        PersistedJourney::from_raw(visited.as_deref(), joined.as_deref())
    }

    fn persist(&self, state: &UserJourneyState) {
        let persisted = PersistedJourney::from_state(state);
        for key in StorageKey::ALL {
            self.write_key(key, persisted.raw_value(key));
        }
    }

    fn persist_changes(&self, from: &UserJourneyState, to: &UserJourneyState) {
        let before = PersistedJourney::from_state(from);
        let after = PersistedJourney::from_state(to);
        for key in StorageKey::ALL {
            let value = after.raw_value(key);
            if before.raw_value(key) != value {
                self.write_key(key, value);
            }
        }
    }

    fn write_key(&self, key: StorageKey, value: Option<&str>) {
        match value {
            Some(value) => self.storage.set(key.as_str(), value),
            None => self.storage.remove(key.as_str()),
        };
    }

    fn send_join_telemetry(&self, timestamp: &str, returning: bool) {
        let event = TelemetryEvent::new(JOIN_ACTION, timestamp, returning, &self.client);
        let telemetry = Arc::clone(&self.telemetry);
        tokio::spawn(
            async move { telemetry.send_event(event).await }
                .instrument(info_span!("usecase.journey.telemetry", action = JOIN_ACTION)),
        );
    }

    /// Returns `false` when cancelled before `duration` elapsed.
    async fn sleep(&self, duration: Duration) -> bool {
        tokio::select! {
            biased;
            _ = self.cancel.cancelled() => {
                debug!("journey transition cancelled");
                false
            }
            _ = tokio::time::sleep(duration) => !self.cancel.is_cancelled(),
        }
    }
}
