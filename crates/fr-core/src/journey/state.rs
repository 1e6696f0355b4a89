use serde::{Deserialize, Serialize};

/// Join-confirmation dialog lifecycle.
///
/// `Hidden -> Showing -> Ready -> Closing -> Hidden`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ModalState {
    /// Not rendered. Initial and terminal state.
    #[default]
    Hidden,
    /// Entrance animation running.
    Showing,
    /// Interactive.
    Ready,
    /// Exit animation running.
    Closing,
}

impl ModalState {
    /// Whether the dialog occupies the screen in this state.
    pub fn is_visible(self) -> bool {
        !matches!(self, ModalState::Hidden)
    }
}

/// Visitor journey state.
///
/// Only `has_visited` and `joined_timestamp` are mirrored to storage; `modal_state`
/// and `is_loading` are transient UI state.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct UserJourneyState {
    /// Set once the visitor has confirmed joining.
    pub has_visited: bool,
    /// ISO-8601 join timestamp, verbatim as it was confirmed.
    pub joined_timestamp: Option<String>,
    pub modal_state: ModalState,
    pub is_loading: bool,
}

impl UserJourneyState {
    /// The documented initial state: hidden, not visited, not joined, not loading.
    pub fn initial() -> Self {
        Self::default()
    }

    /// Whether the visitor has a confirmed join on record.
    pub fn has_joined(&self) -> bool {
        self.joined_timestamp.is_some()
    }
}

/// Partial state merged by [`JourneyAction::Initialize`](super::JourneyAction::Initialize).
///
/// `None` leaves the corresponding field untouched. `joined_timestamp` is doubly
/// optional so that "clear the timestamp" can be distinguished from "leave it".
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct PartialJourneyState {
    pub has_visited: Option<bool>,
    pub joined_timestamp: Option<Option<String>>,
    pub modal_state: Option<ModalState>,
    pub is_loading: Option<bool>,
}

impl PartialJourneyState {
    /// Merge into `state`, field by field.
    pub fn apply_to(self, mut state: UserJourneyState) -> UserJourneyState {
        if let Some(has_visited) = self.has_visited {
            state.has_visited = has_visited;
        }
        if let Some(joined_timestamp) = self.joined_timestamp {
            state.joined_timestamp = joined_timestamp;
        }
        if let Some(modal_state) = self.modal_state {
            state.modal_state = modal_state;
        }
        if let Some(is_loading) = self.is_loading {
            state.is_loading = is_loading;
        }
        state
    }
}
