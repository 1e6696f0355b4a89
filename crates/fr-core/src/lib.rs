//! # fr-core
//!
//! Core domain models and business logic for fact.rip.
//!
//! This crate contains pure business logic without any infrastructure dependencies:
//! the user-journey state machine, the persisted key contract, telemetry and error
//! report models, view models for the landing screen, and the ports implemented by
//! `fr-infra`.

// Public module exports
pub mod branding;
pub mod config;
pub mod error_report;
pub mod journey;
pub mod ports;
pub mod telemetry;
pub mod view;

// Re-export commonly used types at the crate root
pub use config::AppConfig;
pub use error_report::{EmergencyRecord, ErrorReport, ErrorReportPayload};
pub use journey::{
    JourneyAction, JourneyEvent, ModalState, PartialJourneyState, PersistedJourney,
    UserJourneyState, UserJourneyStateMachine,
};
pub use telemetry::{ClientInfo, TelemetryEvent, Viewport};
