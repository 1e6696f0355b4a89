//! Plain-text rendering of the landing and recovery screens.

use std::fmt::Write;

use fr_app::error_boundary::RecoveryView;
use fr_app::ReportOutcome;
use fr_core::branding::BRANDING;
use fr_core::view::{LandingView, ModalView};
use fr_core::ModalState;

const RULE_WIDTH: usize = 48;

pub fn render_landing(view: &LandingView) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "{}", BRANDING.meta_title);
    let _ = writeln!(out, "{}", "=".repeat(RULE_WIDTH));
    let _ = writeln!(out);
    let _ = writeln!(out, "  {}", view.title.text);
    let _ = writeln!(out, "  {}", "-".repeat(RULE_WIDTH - 4));
    let _ = writeln!(out, "  * {}", view.pulse.aria_label);
    let _ = writeln!(out);

    let cta = if view.cta.disabled {
        format!("  ( {} )", view.cta.label)
    } else {
        format!("  [ {} ]", view.cta.label)
    };
    let _ = writeln!(out, "{cta}");
    let _ = writeln!(
        out,
        "  {} (after {} ms)",
        view.seal.alt,
        view.seal.appear_after.as_millis()
    );

    if let Some(modal) = &view.modal {
        let _ = writeln!(out);
        render_modal(&mut out, modal);
    }
    out
}

fn render_modal(out: &mut String, modal: &ModalView) {
    let border = "#".repeat(RULE_WIDTH);
    let _ = writeln!(out, "{border}");
    let _ = writeln!(out, "# {}", modal.title);
    let _ = writeln!(out, "# {}", modal.body);
    let mut actions = format!("# [ {} ]", modal.continue_label);
    if let Some(reset) = modal.reset_label {
        let _ = write!(actions, " [ {reset} ]");
    }
    let _ = writeln!(out, "{actions}");
    if modal.state == ModalState::Closing {
        let _ = writeln!(out, "# (closing)");
    }
    let _ = writeln!(out, "{border}");
}

pub fn render_recovery(view: &RecoveryView) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "{}", "!".repeat(RULE_WIDTH));
    let _ = writeln!(out, "  {}", view.title);
    let _ = writeln!(out);
    let _ = writeln!(out, "  {}", view.body);
    let _ = writeln!(out);
    let _ = writeln!(out, "  Error ID: {}", view.error_id);
    if let Some(details) = &view.details {
        let _ = writeln!(out);
        for line in details.lines() {
            let _ = writeln!(out, "  | {line}");
        }
    }
    let _ = writeln!(out);
    let mut actions = format!("  [ {} ] (--resume)", view.resume_label);
    if let Some(button) = &view.report_button {
        if button.disabled {
            let _ = write!(actions, "  ( {} )", button.label);
        } else {
            let _ = write!(actions, "  [ {} ] (--send-report)", button.label);
        }
    }
    let _ = writeln!(out, "{actions}");
    let _ = writeln!(out, "{}", "!".repeat(RULE_WIDTH));
    out
}

pub fn render_report_outcome(outcome: ReportOutcome) -> &'static str {
    match outcome {
        ReportOutcome::Sent => BRANDING.error.reported,
        ReportOutcome::AlreadySent => "Report already sent",
        ReportOutcome::Failed => "Report could not be sent",
        ReportOutcome::Disabled => "Error reporting is not configured",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use fr_app::error_boundary::ReportButtonView;
    use fr_core::UserJourneyState;

    #[test]
    fn new_visitor_landing_has_title_and_cta() {
        let out = render_landing(&LandingView::from_state(&UserJourneyState::initial()));

        assert!(out.contains("The Loop Closes."));
        assert!(out.contains("[ Join the Watchtower ]"));
        assert!(out.contains("after 5000 ms"));
        assert!(!out.contains("Watchtower Activated"));
    }

    #[test]
    fn joined_landing_shows_modal_with_reset() {
        let state = UserJourneyState {
            has_visited: true,
            joined_timestamp: Some("2024-01-01T00:00:00.000Z".to_string()),
            modal_state: ModalState::Ready,
            is_loading: false,
        };

        let out = render_landing(&LandingView::from_state(&state));

        assert!(out.contains("The Loop Persists."));
        assert!(out.contains("Already Watching"));
        assert!(out.contains("[ Continue ] [ Reset ]"));
    }

    #[test]
    fn loading_cta_is_rendered_disabled() {
        let state = UserJourneyState {
            is_loading: true,
            ..UserJourneyState::initial()
        };

        let out = render_landing(&LandingView::from_state(&state));

        assert!(out.contains("( Registering... )"));
    }

    #[test]
    fn recovery_screen_lists_error_id_and_actions() {
        let view = RecoveryView {
            title: "The Loop Fractures",
            body: "body",
            error_id: "err_1_abcdefghi".to_string(),
            resume_label: "Resume Observation",
            report_button: Some(ReportButtonView {
                label: "Send Report",
                disabled: false,
            }),
            details: None,
        };

        let out = render_recovery(&view);

        assert!(out.contains("Error ID: err_1_abcdefghi"));
        assert!(out.contains("[ Resume Observation ]"));
        assert!(out.contains("[ Send Report ]"));
    }
}
