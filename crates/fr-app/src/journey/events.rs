//! [`JourneyEventPort`] implementations.

use std::sync::Arc;

use fr_core::ports::JourneyEventPort;
use fr_core::JourneyEvent;
use tokio::sync::broadcast;
use tracing::info;

const DEFAULT_CHANNEL_CAPACITY: usize = 32;

/// Logs every journey event.
#[derive(Debug, Default, Clone, Copy)]
pub struct LoggingJourneyEvents;

impl JourneyEventPort for LoggingJourneyEvents {
    fn emit(&self, event: JourneyEvent) {
        match &event {
            JourneyEvent::JoinConfirmed { timestamp } => {
                info!(event = event.name(), timestamp = %timestamp, "[Journey]")
            }
            _ => info!(event = event.name(), "[Journey]"),
        }
    }
}

/// Fans events out to any number of subscribers.
///
/// Emitting with no live subscriber is not an error; slow subscribers observe
/// `RecvError::Lagged` rather than blocking the journey.
#[derive(Clone)]
pub struct BroadcastJourneyEvents {
    tx: broadcast::Sender<JourneyEvent>,
}

impl BroadcastJourneyEvents {
    pub fn new() -> Self {
        Self::with_capacity(DEFAULT_CHANNEL_CAPACITY)
    }

    pub fn with_capacity(capacity: usize) -> Self {
        let (tx, _) = broadcast::channel(capacity);
        Self { tx }
    }

    pub fn subscribe(&self) -> broadcast::Receiver<JourneyEvent> {
        self.tx.subscribe()
    }
}

impl Default for BroadcastJourneyEvents {
    fn default() -> Self {
        Self::new()
    }
}

impl JourneyEventPort for BroadcastJourneyEvents {
    fn emit(&self, event: JourneyEvent) {
        let _ = self.tx.send(event);
    }
}

/// Forwards each event to every inner port in order.
#[derive(Clone, Default)]
pub struct FanoutJourneyEvents {
    ports: Vec<Arc<dyn JourneyEventPort>>,
}

impl FanoutJourneyEvents {
    pub fn new(ports: Vec<Arc<dyn JourneyEventPort>>) -> Self {
        Self { ports }
    }

    pub fn with(mut self, port: Arc<dyn JourneyEventPort>) -> Self {
        self.ports.push(port);
        self
    }
}

impl JourneyEventPort for FanoutJourneyEvents {
    fn emit(&self, event: JourneyEvent) {
        for port in &self.ports {
            port.emit(event.clone());
        }
    }
}
