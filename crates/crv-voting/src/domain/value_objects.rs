//! # Domain Value Objects
//!
//! Immutable value types for commit-reveal voting.

use super::errors::Timestamp;
use serde::{Deserialize, Serialize};

/// Session phase.
///
/// Never stored: always projected from the clock and a [`PhaseSchedule`].
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Phase {
    /// `start_voting` has not been called.
    #[default]
    NotStarted,
    /// Commitments are accepted.
    Commit,
    /// Reveals are accepted and tallied.
    Reveal,
    /// Results are final.
    Ended,
}

impl Phase {
    /// Check if moving from `self` to `next` is allowed as time passes.
    ///
    /// Phases only advance; staying put is allowed.
    pub fn can_transition_to(&self, next: Phase) -> bool {
        next >= *self
    }

    /// Check if terminal state.
    pub fn is_terminal(&self) -> bool {
        matches!(self, Self::Ended)
    }
}

impl std::fmt::Display for Phase {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            Phase::NotStarted => "not_started",
            Phase::Commit => "commit",
            Phase::Reveal => "reveal",
            Phase::Ended => "ended",
        };
        f.write_str(s)
    }
}

/// Window boundaries fixed by `start_voting`.
///
/// Commit is `[commit_start, commit_end)`, reveal is `[commit_end, reveal_end)`,
/// and everything from `reveal_end` on is ended.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct PhaseSchedule {
    /// When voting was started.
    pub commit_start: Timestamp,
    /// First instant of the reveal window.
    pub commit_end: Timestamp,
    /// First instant after the reveal window.
    pub reveal_end: Timestamp,
}

impl PhaseSchedule {
    /// Phase at `now`.
    ///
    /// A clock reading earlier than `commit_start` still counts as commit:
    /// voting has been started, and phases never go back.
    pub fn phase_at(&self, now: Timestamp) -> Phase {
        if now >= self.reveal_end {
            Phase::Ended
        } else if now >= self.commit_end {
            Phase::Reveal
        } else {
            Phase::Commit
        }
    }

    /// Seconds left in the phase active at `now`, or `None` once ended.
    pub fn remaining_in_phase(&self, now: Timestamp) -> Option<u64> {
        match self.phase_at(now) {
            Phase::Commit => Some(self.commit_end.saturating_sub(now.max(self.commit_start))),
            Phase::Reveal => Some(self.reveal_end.saturating_sub(now)),
            Phase::NotStarted | Phase::Ended => None,
        }
    }
}

/// Yes/no counters.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct VoteTally {
    /// Revealed `true` votes.
    pub yes: u64,
    /// Revealed `false` votes.
    pub no: u64,
}

impl VoteTally {
    /// Create a tally.
    pub fn new(yes: u64, no: u64) -> Self {
        Self { yes, no }
    }

    /// Votes counted so far.
    pub fn total(&self) -> u64 {
        self.yes + self.no
    }

    /// Count one revealed vote.
    pub(crate) fn record(&mut self, vote: bool) {
        if vote {
            self.yes += 1;
        } else {
            self.no += 1;
        }
    }

    /// As the `(yes, no)` pair.
    pub fn as_pair(&self) -> (u64, u64) {
        (self.yes, self.no)
    }
}

impl From<VoteTally> for (u64, u64) {
    fn from(tally: VoteTally) -> Self {
        tally.as_pair()
    }
}

/// Participation counts.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Turnout {
    /// Eligible voters.
    pub registered: usize,
    /// Voters with a stored commitment.
    pub committed: usize,
    /// Voters whose reveal was accepted.
    pub revealed: usize,
}

impl Turnout {
    /// Committed voters that have not revealed.
    pub fn unrevealed(&self) -> usize {
        self.committed.saturating_sub(self.revealed)
    }
}

/// Whether the administrator may register voters once voting has started.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RegistrationPolicy {
    /// Registration allowed at any time.
    #[default]
    Open,
    /// Registration refused after `start_voting`.
    ClosedAfterStart,
}

impl std::str::FromStr for RegistrationPolicy {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "open" => Ok(Self::Open),
            "closed_after_start" | "closed" => Ok(Self::ClosedAfterStart),
            other => Err(format!("unknown registration policy {:?}", other)),
        }
    }
}

/// Per-voter record lifecycle.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum VoterState {
    /// No commitment stored.
    #[default]
    Uncommitted,
    /// Commitment stored, not yet revealed.
    Committed,
    /// Reveal accepted.
    Revealed,
}

impl VoterState {
    /// Check if transition is valid.
    pub fn can_transition_to(&self, next: VoterState) -> bool {
        matches!(
            (self, next),
            (Self::Uncommitted, Self::Committed) | (Self::Committed, Self::Revealed)
        )
    }

    /// Check if terminal state.
    pub fn is_terminal(&self) -> bool {
        matches!(self, Self::Revealed)
    }
}
