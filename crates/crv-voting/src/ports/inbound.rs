//! # Inbound Ports
//!
//! API trait defining what a voting session can do.

use crate::domain::{
    Address, CommitmentRecord, Hash, Phase, PhaseSchedule, Secret, Turnout, VoteTally,
    VotingError,
};

/// Commit-reveal voting API - inbound port.
///
/// Every mutating call names its `caller`; administrative calls are refused
/// for anyone but the session's administrator.
pub trait CommitRevealVotingApi {
    /// Make `voter` eligible. Administrator only.
    fn register_voter(&mut self, caller: Address, voter: Address) -> Result<(), VotingError>;

    /// Fix the schedule from the current time. Administrator only, once.
    fn start_voting(&mut self, caller: Address) -> Result<PhaseSchedule, VotingError>;

    /// Store `caller`'s commitment during the commit window.
    fn commit_vote(&mut self, caller: Address, commitment: Hash) -> Result<(), VotingError>;

    /// Open `caller`'s commitment during the reveal window and count the vote.
    fn reveal_vote(
        &mut self,
        caller: Address,
        vote: bool,
        secret: &Secret,
    ) -> Result<(), VotingError>;

    /// Current `(yes, no)` counts.
    fn get_results(&self) -> (u64, u64);

    /// Whether `voter` is eligible.
    fn is_registered(&self, voter: &Address) -> bool;

    /// `voter`'s commitment record; a zeroed record if none.
    fn votes(&self, voter: &Address) -> CommitmentRecord;

    /// Phase at the current time.
    fn phase(&self) -> Phase;

    /// Window boundaries, once started.
    fn schedule(&self) -> Option<PhaseSchedule>;

    /// Current tally.
    fn tally(&self) -> VoteTally;

    /// Participation counts.
    fn turnout(&self) -> Turnout;
}
