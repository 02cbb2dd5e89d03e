//! Event Log Adapter
//!
//! Implements `VotingEventSink` by keeping every event in memory.

use crate::domain::VotingEvent;
use crate::ports::outbound::VotingEventSink;
use parking_lot::Mutex;
use tracing::trace;

/// Append-only in-memory event log.
#[derive(Debug, Default)]
pub struct InMemoryEventLog {
    events: Mutex<Vec<VotingEvent>>,
}

impl InMemoryEventLog {
    /// Create an empty log.
    pub fn new() -> Self {
        Self::default()
    }

    /// Copy of all events so far, oldest first.
    pub fn events(&self) -> Vec<VotingEvent> {
        self.events.lock().clone()
    }

    /// Number of events recorded.
    pub fn len(&self) -> usize {
        self.events.lock().len()
    }

    /// Whether nothing has been recorded.
    pub fn is_empty(&self) -> bool {
        self.events.lock().is_empty()
    }

    /// Remove and return all events.
    pub fn drain(&self) -> Vec<VotingEvent> {
        std::mem::take(&mut *self.events.lock())
    }
}

impl VotingEventSink for InMemoryEventLog {
    fn publish(&self, event: &VotingEvent) {
        trace!(event = event.name(), "[crv] Event recorded");
        self.events.lock().push(event.clone());
    }
}
