use std::sync::atomic::{AtomicBool, Ordering};

use fr_core::ports::ReloadPort;
use tracing::info;

/// Requests a fresh mount of the app; the run loop polls it after each command.
#[derive(Debug, Default)]
pub struct RemountSignal {
    requested: AtomicBool,
}

impl RemountSignal {
    /// Returns whether a remount was requested and clears the request.
    pub fn take(&self) -> bool {
        self.requested.swap(false, Ordering::AcqRel)
    }
}

impl ReloadPort for RemountSignal {
    fn reload(&self) {
        info!("remount requested");
        self.requested.store(true, Ordering::Release);
    }
}
