//! User journey orchestration.
//!
//! ## Responsibilities / 职责
//!
//! - Owns the live [`UserJourneyState`](fr_core::UserJourneyState) behind a dispatch lock
//! - Persists the visited/joined fields once initialized
//! - Schedules the timed join, close and reset transitions
//! - Emits journey lifecycle events to observers

mod context;
mod error;
pub mod events;
mod store;

pub use context::{PendingTransition, StorageChange, UserJourneyContext, JOIN_ACTION};
pub use error::JourneyError;
pub use events::{BroadcastJourneyEvents, FanoutJourneyEvents, LoggingJourneyEvents};
pub use store::JourneyStore;
