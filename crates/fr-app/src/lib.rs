//! fact.rip application layer.
//!
//! Use cases and orchestration: the guarded storage utility, the user journey
//! context, the error boundary and the assembled [`App`].

pub mod app;
pub mod deps;
pub mod error_boundary;
pub mod journey;
pub mod storage;
pub mod storage_provider;

pub use app::App;
pub use deps::AppDeps;
pub use error_boundary::{BoundaryOutcome, ErrorBoundary, RecoveryScreen, ReportOutcome};
pub use journey::{JourneyError, PendingTransition, StorageChange, UserJourneyContext};
pub use storage::{PersistedValue, Storage};
pub use storage_provider::StorageProvider;
