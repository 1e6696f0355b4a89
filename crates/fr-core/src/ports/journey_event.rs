use crate::journey::JourneyEvent;

/// Receives journey lifecycle notifications.
pub trait JourneyEventPort: Send + Sync {
    fn emit(&self, event: JourneyEvent);
}
