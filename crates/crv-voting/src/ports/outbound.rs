//! # Outbound Ports
//!
//! What a voting session needs from its environment: an eligibility set,
//! a clock, and optionally somewhere to publish events.

use crate::domain::{Address, Timestamp, VotingError, VotingEvent};

/// Eligibility set - outbound port.
///
/// Read-only: this is all a voting session needs to check who may commit.
pub trait VoterRegistry: Send + Sync {
    /// Whether `voter` is eligible.
    fn is_registered(&self, voter: &Address) -> bool;

    /// Number of eligible voters.
    fn registered_count(&self) -> usize;

    /// All eligible voters, sorted.
    fn registered_voters(&self) -> Vec<Address>;
}

/// Registration side of the eligibility set - outbound port.
///
/// Grows only: there is no way to deregister a voter. Whoever holds a
/// registrar can add voters without any session's administrator check, so
/// sessions never hand one out.
pub trait VoterRegistrar: VoterRegistry {
    /// Add `voter`. Fails with [`VotingError::AlreadyRegistered`] if present.
    fn register_voter(&self, voter: Address) -> Result<(), VotingError>;
}

/// Clock - outbound port.
///
/// Readings are assumed non-decreasing.
pub trait TimeSource: Send + Sync {
    /// Current time in seconds.
    fn now(&self) -> Timestamp;
}

/// Wall-clock time source (UNIX seconds).
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemTimeSource;

impl TimeSource for SystemTimeSource {
    fn now(&self) -> Timestamp {
        std::time::SystemTime::now()
            .duration_since(std::time::UNIX_EPOCH)
            .unwrap_or_default()
            .as_secs()
    }
}

/// Event sink - outbound port.
///
/// Receives one event per successful state change, after the change.
pub trait VotingEventSink: Send + Sync {
    /// Publish `event`.
    fn publish(&self, event: &VotingEvent);
}
