//! # Domain Invariants
//!
//! Business rules shared by the commitment store and the session.

use super::errors::{Hash, Secret, VotingError};
use super::value_objects::{Phase, VoteTally};
use crate::algorithms::compute_commitment;

/// Invariant: phase durations are positive.
pub fn invariant_positive_duration(phase: &'static str, secs: u64) -> Result<(), VotingError> {
    if secs == 0 {
        return Err(VotingError::InvalidDuration { phase });
    }
    Ok(())
}

/// Invariant: reveal proves the commitment.
///
/// Keccak-256(vote_byte || secret) must equal the stored commitment.
pub fn invariant_commitment_matches(vote: bool, secret: &Secret, commitment: &Hash) -> bool {
    compute_commitment(vote, secret) == *commitment
}

/// Invariant: only successful reveals are counted, so the tally can never
/// exceed the number of stored commitments.
pub fn invariant_tally_bounded(tally: &VoteTally, committed: usize) -> bool {
    tally.total() <= committed as u64
}

/// Invariant: phase never regresses between two observations.
pub fn invariant_phase_monotonic(earlier: Phase, later: Phase) -> bool {
    earlier.can_transition_to(later)
}
