use super::state::PartialJourneyState;

/// Actions accepted by the journey reducer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum JourneyAction {
    /// Merge externally loaded state (from storage) into the current state.
    Initialize(PartialJourneyState),
    /// The CTA was pressed; the join is being registered.
    StartJoin,
    /// Modal entrance begins.
    ShowModal,
    /// Modal is interactive.
    ModalReady,
    /// Join is confirmed at `timestamp`.
    ConfirmJoin { timestamp: String },
    /// Modal exit begins.
    CloseModal,
    /// Modal exit finished.
    ModalHidden,
    /// Reset requested; storage is being cleared.
    Reset,
    /// Reset finished.
    ResetComplete,
}

impl JourneyAction {
    /// Stable name used in logs, e.g. `CONFIRM_JOIN`.
    pub fn name(&self) -> &'static str {
        match self {
            JourneyAction::Initialize(_) => "INITIALIZE",
            JourneyAction::StartJoin => "START_JOIN",
            JourneyAction::ShowModal => "SHOW_MODAL",
            JourneyAction::ModalReady => "MODAL_READY",
            JourneyAction::ConfirmJoin { .. } => "CONFIRM_JOIN",
            JourneyAction::CloseModal => "CLOSE_MODAL",
            JourneyAction::ModalHidden => "MODAL_HIDDEN",
            JourneyAction::Reset => "RESET",
            JourneyAction::ResetComplete => "RESET_COMPLETE",
        }
    }
}
