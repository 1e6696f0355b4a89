//! fact.rip terminal shell.
//!
//! Bootstraps logging and configuration, wires infrastructure adapters into the
//! application, and renders the landing and recovery screens to a terminal.

pub mod adapters;
pub mod bootstrap;
pub mod cli;
pub mod render;

pub use bootstrap::run;
pub use cli::Cli;
