//! Branding copy.
//!
//! All user-facing text lives here so view models never hard-code strings.

pub struct TitleCopy {
    pub first_visit: &'static str,
    pub returning: &'static str,
}

pub struct ModalCopy {
    pub title_new: &'static str,
    pub title_returning: &'static str,
    pub body_new: &'static str,
    pub body_returning: &'static str,
}

pub struct ButtonCopy {
    pub cta: &'static str,
    pub loading: &'static str,
    pub continue_label: &'static str,
    pub reset: &'static str,
}

pub struct ErrorCopy {
    pub title: &'static str,
    pub body: &'static str,
    pub resume: &'static str,
    pub report: &'static str,
    pub reported: &'static str,
}

pub struct AccessibilityCopy {
    pub pulse: &'static str,
    pub seal: &'static str,
}

pub struct Branding {
    pub title: TitleCopy,
    pub modal: ModalCopy,
    pub button: ButtonCopy,
    pub error: ErrorCopy,
    pub accessibility: AccessibilityCopy,
    pub meta_title: &'static str,
    pub meta_description: &'static str,
}

pub const BRANDING: Branding = Branding {
    title: TitleCopy {
        first_visit: "The Loop Closes.",
        returning: "The Loop Persists.",
    },
    modal: ModalCopy {
        title_new: "Watchtower Activated",
        title_returning: "Already Watching",
        body_new: "Your surveillance has begun. The accountability engine marks your witness.",
        body_returning: "Your vigilance continues. The loop persists through observation.",
    },
    button: ButtonCopy {
        cta: "Join the Watchtower",
        loading: "Registering...",
        continue_label: "Continue",
        reset: "Reset",
    },
    error: ErrorCopy {
        title: "The Loop Fractures",
        body: "An unexpected error has interrupted the surveillance. The memory persists, but observation has paused.",
        resume: "Resume Observation",
        report: "Send Report",
        reported: "Report Sent",
    },
    accessibility: AccessibilityCopy {
        pulse: "Actor monitoring in progress",
        seal: "Custodes Engine Verified Seal",
    },
    meta_title: "fact.rip | The Loop Closes",
    meta_description: "Civic memory utility engineered to document accountability events",
};
