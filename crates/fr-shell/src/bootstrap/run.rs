//! Command execution.
//!
//! Every command runs inside the error boundary. A resumed recovery screen
//! remounts the app once and shows the landing screen.

use std::io::Write;
use std::process::ExitCode;
use std::sync::Arc;

use anyhow::Context;
use fr_app::{App, BoundaryOutcome};
use fr_core::{EmergencyRecord, UserJourneyState};
use serde::Serialize;
use tracing::{info, info_span, warn, Instrument};

use super::config::{resolve_settings, ShellSettings};
use super::tracing::init_tracing_subscriber;
use super::wiring::{wire_dependencies, Overrides};
use crate::adapters::RemountSignal;
use crate::cli::{Cli, Command, GlobalOptions};
use crate::render::{render_landing, render_recovery, render_report_outcome};

/// How a command ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RunStatus {
    Rendered,
    /// The recovery screen was shown.
    Recovered,
}

impl From<RunStatus> for ExitCode {
    fn from(status: RunStatus) -> Self {
        match status {
            RunStatus::Rendered => ExitCode::SUCCESS,
            RunStatus::Recovered => ExitCode::FAILURE,
        }
    }
}

#[derive(Serialize)]
struct StatusReport<'a> {
    adapter: &'a str,
    state: UserJourneyState,
    #[serde(skip_serializing_if = "Option::is_none")]
    last_crash: Option<EmergencyRecord>,
}

/// Entry point used by the binary.
pub async fn run(cli: Cli) -> anyhow::Result<ExitCode> {
    let settings = resolve_settings(&cli.options)?;
    if let Err(err) = init_tracing_subscriber(Some(&settings.logs_dir())) {
        eprintln!("Failed to initialize tracing: {err}");
    }
    info!(
        data_dir = %settings.data_dir.display(),
        telemetry = settings.endpoints.telemetry.is_some(),
        error_report = settings.endpoints.error_report.is_some(),
        "fact.rip starting"
    );

    let mut stdout = std::io::stdout().lock();
    let status = run_with(&settings, &cli, Overrides::default(), &mut stdout).await?;
    Ok(status.into())
}

/// Run `cli.command` against `settings`, writing screens to `out`.
pub async fn run_with(
    settings: &ShellSettings,
    cli: &Cli,
    overrides: Overrides,
    out: &mut dyn Write,
) -> anyhow::Result<RunStatus> {
    let remount = Arc::new(RemountSignal::default());
    let mut command = cli.command;
    let mut remounted = false;

    loop {
        let deps = wire_dependencies(settings, remount.clone(), overrides.clone())?;
        let app = App::new(deps);
        let status = execute(&app, command, &cli.options, out).await?;
        app.shutdown();

        if remount.take() && !remounted {
            info!("remounting after recovery");
            remounted = true;
            command = Command::Show;
            continue;
        }
        return Ok(status);
    }
}

async fn execute(
    app: &App,
    command: Command,
    options: &GlobalOptions,
    out: &mut dyn Write,
) -> anyhow::Result<RunStatus> {
    let span = info_span!("shell.command", command = ?command);
    let outcome = app
        .boundary()
        .render_async(command.component_stack(), run_command(app, command))
        .instrument(span)
        .await;

    match outcome {
        BoundaryOutcome::Rendered(screen) => {
            write!(out, "{screen}").context("Failed to write output")?;
            Ok(RunStatus::Rendered)
        }
        BoundaryOutcome::Recovery(mut recovery) => {
            write!(out, "{}", render_recovery(&recovery.view()))
                .context("Failed to write output")?;
            if options.send_report {
                let outcome = recovery.send_report().await;
                writeln!(out, "{}", render_report_outcome(outcome))
                    .context("Failed to write output")?;
            }
            if options.resume {
                recovery.resume();
            }
            Ok(RunStatus::Recovered)
        }
    }
}

async fn run_command(app: &App, command: Command) -> anyhow::Result<String> {
    app.start().await?;
    let journey = app.journey();

    match command {
        Command::Show => {}
        Command::Join { dismiss } => {
            app.join().await?.finished().await;
            if dismiss {
                journey.close_modal().await?.finished().await;
            }
        }
        Command::Close => {
            if journey.state().await.modal_state.is_visible() {
                journey.close_modal().await?.finished().await;
            } else {
                warn!("modal is not open, nothing to close");
            }
        }
        Command::Reset => {
            journey.reset().await?.finished().await;
        }
        Command::Status => {
            let report = StatusReport {
                adapter: app.storage().adapter().kind(),
                state: journey.state().await,
                last_crash: app.boundary().last_crash(),
            };
            let mut json = serde_json::to_string_pretty(&report)?;
            json.push('\n');
            return Ok(json);
        }
    }

    Ok(render_landing(&app.landing_view().await))
}
