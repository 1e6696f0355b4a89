use std::sync::Arc;

use fr_core::branding::BRANDING;
use fr_core::ErrorReport;
use tracing::{error, info};

use super::boundary::ErrorBoundaryDeps;

/// Result of a "send report" press.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReportOutcome {
    Sent,
    /// A report already went out; the button is disabled.
    AlreadySent,
    /// The POST failed; the button stays enabled.
    Failed,
    /// No report endpoint is configured.
    Disabled,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReportButtonView {
    pub label: &'static str,
    pub disabled: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecoveryView {
    pub title: &'static str,
    pub body: &'static str,
    pub error_id: String,
    pub resume_label: &'static str,
    pub report_button: Option<ReportButtonView>,
    /// Message and stack, debug builds only.
    pub details: Option<String>,
}

/// The screen shown in place of the app after a caught failure.
pub struct RecoveryScreen {
    report: ErrorReport,
    deps: Arc<ErrorBoundaryDeps>,
    report_sent: bool,
}

impl RecoveryScreen {
    pub(super) fn new(report: ErrorReport, deps: Arc<ErrorBoundaryDeps>) -> Self {
        Self {
            report,
            deps,
            report_sent: false,
        }
    }

    pub fn error_id(&self) -> &str {
        &self.report.id
    }

    pub fn report(&self) -> &ErrorReport {
        &self.report
    }

    pub fn view(&self) -> RecoveryView {
        let copy = &BRANDING.error;
        let report_button = self.deps.reporter.is_enabled().then(|| ReportButtonView {
            label: if self.report_sent { copy.reported } else { copy.report },
            disabled: self.report_sent,
        });
        let details = cfg!(debug_assertions).then(|| match &self.report.stack {
            Some(stack) => format!("{}\n{}", self.report.message, stack),
            None => self.report.message.clone(),
        });

        RecoveryView {
            title: copy.title,
            body: copy.body,
            error_id: self.report.id.clone(),
            resume_label: copy.resume,
            report_button,
            details,
        }
    }

    /// Clear the emergency record and re-mount the app.
    pub fn resume(self) {
        info!(error_id = %self.report.id, "[ErrorBoundary] Resuming after failure");
        self.deps.emergency.clear_error();
        self.deps.reload.reload();
    }

    pub async fn send_report(&mut self) -> ReportOutcome {
        if !self.deps.reporter.is_enabled() {
            return ReportOutcome::Disabled;
        }
        if self.report_sent {
            return ReportOutcome::AlreadySent;
        }

        match self.deps.reporter.send_report(&self.report.to_payload()).await {
            Ok(()) => {
                info!(error_id = %self.report.id, "[ErrorBoundary] Report sent");
                self.report_sent = true;
                ReportOutcome::Sent
            }
            Err(err) => {
                error!(error_id = %self.report.id, error = %err, "[ErrorBoundary] Failed to send report");
                ReportOutcome::Failed
            }
        }
    }
}
