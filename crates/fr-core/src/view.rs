//! Landing screen view models.
//!
//! Presentational components carry no logic of their own: each view here is a pure
//! projection of [`UserJourneyState`] and [`BRANDING`]. Renderers (terminal, tests)
//! only format these.

use std::time::Duration;

use serde::Serialize;

use crate::branding::BRANDING;
use crate::journey::{ModalState, UserJourneyState};

/// Seal entrance delay for a first visit.
pub const SEAL_DELAY_NEW_VISITOR: Duration = Duration::from_millis(5_000);
/// Seal entrance delay for a returning visitor.
pub const SEAL_DELAY_RETURNING: Duration = Duration::from_millis(2_000);

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TitleView {
    pub text: &'static str,
    pub is_returning: bool,
}

impl TitleView {
    pub fn from_state(state: &UserJourneyState) -> Self {
        let is_returning = state.has_visited;
        Self {
            text: if is_returning {
                BRANDING.title.returning
            } else {
                BRANDING.title.first_visit
            },
            is_returning,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CtaView {
    pub label: &'static str,
    pub disabled: bool,
}

impl CtaView {
    pub fn from_state(state: &UserJourneyState) -> Self {
        Self {
            label: if state.is_loading {
                BRANDING.button.loading
            } else {
                BRANDING.button.cta
            },
            disabled: state.is_loading,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ModalView {
    pub state: ModalState,
    pub title: &'static str,
    pub body: &'static str,
    pub continue_label: &'static str,
    /// Present only once the visitor has joined.
    pub reset_label: Option<&'static str>,
}

impl ModalView {
    /// `None` while the modal is hidden.
    pub fn from_state(state: &UserJourneyState) -> Option<Self> {
        if !state.modal_state.is_visible() {
            return None;
        }
        let has_joined = state.has_joined();
        Some(Self {
            state: state.modal_state,
            title: if has_joined {
                BRANDING.modal.title_returning
            } else {
                BRANDING.modal.title_new
            },
            body: if has_joined {
                BRANDING.modal.body_returning
            } else {
                BRANDING.modal.body_new
            },
            continue_label: BRANDING.button.continue_label,
            reset_label: has_joined.then_some(BRANDING.button.reset),
        })
    }

    /// Only a ready modal accepts input.
    pub fn is_interactive(&self) -> bool {
        self.state == ModalState::Ready
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SealView {
    pub alt: &'static str,
    #[serde(with = "duration_ms")]
    pub appear_after: Duration,
}

impl SealView {
    pub fn from_state(state: &UserJourneyState) -> Self {
        Self {
            alt: BRANDING.accessibility.seal,
            appear_after: if state.has_visited {
                SEAL_DELAY_RETURNING
            } else {
                SEAL_DELAY_NEW_VISITOR
            },
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PulseView {
    pub aria_label: &'static str,
}

impl Default for PulseView {
    fn default() -> Self {
        Self {
            aria_label: BRANDING.accessibility.pulse,
        }
    }
}

/// The progress bar is purely decorative.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub struct ProgressBarView;

/// Everything the landing screen renders.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LandingView {
    pub title: TitleView,
    pub progress_bar: ProgressBarView,
    pub pulse: PulseView,
    pub seal: SealView,
    pub cta: CtaView,
    pub modal: Option<ModalView>,
}

impl LandingView {
    pub fn from_state(state: &UserJourneyState) -> Self {
        Self {
            title: TitleView::from_state(state),
            progress_bar: ProgressBarView,
            pulse: PulseView::default(),
            seal: SealView::from_state(state),
            cta: CtaView::from_state(state),
            modal: ModalView::from_state(state),
        }
    }
}

mod duration_ms {
    use std::time::Duration;

    use serde::Serializer;

    pub fn serialize<S: Serializer>(value: &Duration, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_u64(value.as_millis() as u64)
    }
}
