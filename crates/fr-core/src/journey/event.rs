use serde::Serialize;

use super::state::ModalState;

/// Coarse lifecycle notifications for external observers.
///
/// This is a side channel, not part of the state contract.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "type")]
pub enum JourneyEvent {
    ModalShowing,
    ModalReady,
    ModalClosing,
    ModalHidden,
    JoinConfirmed { timestamp: String },
    ResetComplete,
}

impl JourneyEvent {
    /// Wire name, e.g. `modal:ready`.
    pub fn name(&self) -> &'static str {
        match self {
            JourneyEvent::ModalShowing => "modal:showing",
            JourneyEvent::ModalReady => "modal:ready",
            JourneyEvent::ModalClosing => "modal:closing",
            JourneyEvent::ModalHidden => "modal:hidden",
            JourneyEvent::JoinConfirmed { .. } => "join:confirmed",
            JourneyEvent::ResetComplete => "reset:complete",
        }
    }

    /// The notification for entering `state`.
    pub fn for_modal_state(state: ModalState) -> Self {
        match state {
            ModalState::Hidden => JourneyEvent::ModalHidden,
            ModalState::Showing => JourneyEvent::ModalShowing,
            ModalState::Ready => JourneyEvent::ModalReady,
            ModalState::Closing => JourneyEvent::ModalClosing,
        }
    }
}

impl std::fmt::Display for JourneyEvent {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}
