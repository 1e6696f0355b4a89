use std::sync::Arc;

use fr_core::UserJourneyState;
use tokio::sync::Mutex;

/// Shared journey state plus the lock serializing dispatches.
///
/// ## Lock Ordering
/// Acquire `dispatch_lock` first, then `state`. Reads take only `state`.
#[derive(Clone)]
pub struct JourneyStore {
    state: Arc<Mutex<UserJourneyState>>,
    dispatch_lock: Arc<Mutex<()>>,
}

impl JourneyStore {
    pub fn new(initial_state: UserJourneyState) -> Self {
        Self {
            state: Arc::new(Mutex::new(initial_state)),
            dispatch_lock: Arc::new(Mutex::new(())),
        }
    }

    pub async fn get_state(&self) -> UserJourneyState {
        self.state.lock().await.clone()
    }

    pub async fn acquire_dispatch_lock(&self) -> tokio::sync::MutexGuard<'_, ()> {
        self.dispatch_lock.lock().await
    }

    /// Only call while holding the dispatch lock.
    pub async fn set_state(&self, state: UserJourneyState) {
        *self.state.lock().await = state;
    }
}

impl Default for JourneyStore {
    fn default() -> Self {
        Self::new(UserJourneyState::initial())
    }
}
