//! # Commitment Store
//!
//! The commit-reveal primitive: one record per voter, commit uniqueness,
//! reveal verification. Knows nothing about time, eligibility or tallies.
//!
//! ## Record Lifecycle
//!
//! ```text
//! Uncommitted --commit--> Committed --reveal(valid proof)--> Revealed
//! ```
//!
//! No transition goes back, and a failed call leaves the record untouched.

use super::entities::CommitmentRecord;
use super::errors::{Address, Hash, RevealFailure, Secret, VotingError};
use super::invariants::invariant_commitment_matches;
use super::value_objects::VoterState;
use std::collections::HashMap;

/// Per-voter commitment records.
#[derive(Clone, Debug, Default)]
pub struct CommitRevealLogic {
    /// Records by voter.
    votes: HashMap<Address, CommitmentRecord>,
    /// Number of records with `revealed == true`.
    revealed: usize,
}

impl CommitRevealLogic {
    /// Creates an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Store `commitment` for `voter`.
    ///
    /// The digest is opaque here; its preimage is only checked on reveal.
    pub fn commit(&mut self, voter: Address, commitment: Hash) -> Result<(), VotingError> {
        if self.votes.contains_key(&voter) {
            return Err(VotingError::AlreadyCommitted(voter));
        }
        self.votes.insert(voter, CommitmentRecord::new(commitment));
        Ok(())
    }

    /// Open `voter`'s commitment with `(vote, secret)`.
    ///
    /// Returns the revealed vote. Tallying is the caller's job.
    pub fn reveal(
        &mut self,
        voter: Address,
        vote: bool,
        secret: &Secret,
    ) -> Result<bool, VotingError> {
        let record = self
            .votes
            .get_mut(&voter)
            .ok_or(VotingError::invalid_reveal(RevealFailure::NoCommitment))?;

        if record.revealed {
            return Err(VotingError::invalid_reveal(RevealFailure::AlreadyRevealed));
        }

        if !invariant_commitment_matches(vote, secret, &record.commitment) {
            return Err(VotingError::invalid_reveal(
                RevealFailure::CommitmentMismatch,
            ));
        }

        record.revealed = true;
        record.vote = vote;
        self.revealed += 1;
        Ok(vote)
    }

    /// Read accessor. `None` if `voter` never committed.
    pub fn votes(&self, voter: &Address) -> Option<&CommitmentRecord> {
        self.votes.get(voter)
    }

    /// Lifecycle state of `voter`'s record.
    pub fn voter_state(&self, voter: &Address) -> VoterState {
        self.votes
            .get(voter)
            .map(CommitmentRecord::state)
            .unwrap_or_default()
    }

    /// Number of stored commitments.
    pub fn commit_count(&self) -> usize {
        self.votes.len()
    }

    /// Number of accepted reveals.
    pub fn reveal_count(&self) -> usize {
        self.revealed
    }

    /// Voters who committed but have not revealed, sorted.
    pub fn unrevealed_voters(&self) -> Vec<Address> {
        let mut voters: Vec<Address> = self
            .votes
            .iter()
            .filter(|(_, record)| !record.revealed)
            .map(|(voter, _)| *voter)
            .collect();
        voters.sort_unstable();
        voters
    }
}
