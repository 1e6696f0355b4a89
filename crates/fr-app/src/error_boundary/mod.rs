//! Error boundary.
//!
//! ## Responsibilities / 职责
//!
//! - Runs a render step and catches both returned errors and panics
//! - Builds an [`ErrorReport`](fr_core::ErrorReport) with a unique id
//! - Sends the report to telemetry and persists it through emergency storage
//! - Hands back a [`RecoveryScreen`] whose only exit is a full reload

mod boundary;
mod error_id;
mod recovery;

pub use boundary::{BoundaryOutcome, ErrorBoundary, ErrorBoundaryDeps};
pub use error_id::generate_error_id;
pub use recovery::{RecoveryScreen, RecoveryView, ReportButtonView, ReportOutcome};
