//! User journey state machine.
//!
//! Defines a pure, total reducer for the visitor/modal lifecycle. Timing, storage and
//! telemetry are side effects owned by the orchestrator, never by this module.

use super::action::JourneyAction;
use super::state::{ModalState, UserJourneyState};

/// Pure journey state machine.
///
/// 纯状态机：不包含副作用。
pub struct UserJourneyStateMachine;

impl UserJourneyStateMachine {
    /// Produce the next state for `action`.
    ///
    /// Every action is accepted in every state; there are no invalid transitions.
    pub fn reduce(state: UserJourneyState, action: JourneyAction) -> UserJourneyState {
        match action {
            JourneyAction::Initialize(partial) => partial.apply_to(state),
            JourneyAction::StartJoin => UserJourneyState {
                is_loading: true,
                ..state
            },
            JourneyAction::ShowModal => UserJourneyState {
                is_loading: false,
                modal_state: ModalState::Showing,
                ..state
            },
            JourneyAction::ModalReady => UserJourneyState {
                modal_state: ModalState::Ready,
                ..state
            },
            JourneyAction::ConfirmJoin { timestamp } => UserJourneyState {
                has_visited: true,
                joined_timestamp: Some(timestamp),
                modal_state: ModalState::Ready,
                ..state
            },
            JourneyAction::CloseModal => UserJourneyState {
                modal_state: ModalState::Closing,
                ..state
            },
            JourneyAction::ModalHidden => UserJourneyState {
                modal_state: ModalState::Hidden,
                ..state
            },
            JourneyAction::Reset => UserJourneyState {
                modal_state: ModalState::Hidden,
                ..UserJourneyState::initial()
            },
            JourneyAction::ResetComplete => UserJourneyState::initial(),
        }
    }
}
