//! User journey domain module.
//!
//! This module defines the visitor/modal state, the actions that drive it, the pure
//! reducer, the persisted storage contract and the lifecycle notifications emitted to
//! observers.

pub mod action;
pub mod event;
pub mod persisted;
pub mod state;
pub mod state_machine;

pub use action::JourneyAction;
pub use event::JourneyEvent;
pub use persisted::{PersistedJourney, StorageKey, JOINED_TIMESTAMP_KEY, VISITED_FLAG, VISITED_KEY};
pub use state::{ModalState, PartialJourneyState, UserJourneyState};
pub use state_machine::UserJourneyStateMachine;
