pub mod config;
pub mod run;
pub mod tracing;
pub mod wiring;

pub use config::{resolve_settings, ShellSettings};
pub use run::{run, run_with, RunStatus};
pub use wiring::{wire_dependencies, Overrides};
