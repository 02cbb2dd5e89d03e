//! # Domain Entities
//!
//! Commitment records, session configuration and emitted events.

use super::errors::{Address, ConfigError, Hash, VotingError};
use super::value_objects::{PhaseSchedule, RegistrationPolicy, VoterState};
use serde::{Deserialize, Serialize};
use std::env;

/// One voter's commitment.
///
/// `commitment` is written once at commit time; `revealed` and `vote` are
/// written once at reveal time. `vote` means nothing until `revealed`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CommitmentRecord {
    /// `Hash(vote, secret)` as submitted by the voter.
    #[serde(with = "hex::serde")]
    pub commitment: Hash,
    /// Whether a valid reveal has been accepted.
    pub revealed: bool,
    /// The revealed vote.
    pub vote: bool,
}

impl CommitmentRecord {
    /// A fresh, unrevealed record.
    pub fn new(commitment: Hash) -> Self {
        Self {
            commitment,
            revealed: false,
            vote: false,
        }
    }

    /// Lifecycle state of this record.
    pub fn state(&self) -> VoterState {
        if self.revealed {
            VoterState::Revealed
        } else {
            VoterState::Committed
        }
    }

    /// The vote, once revealed.
    pub fn revealed_vote(&self) -> Option<bool> {
        self.revealed.then_some(self.vote)
    }
}

/// Session configuration.
/// Fixed at construction; durations are immutable afterwards.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct VotingConfig {
    /// Length of the commit window in seconds.
    pub commit_duration_secs: u64,
    /// Length of the reveal window in seconds.
    pub reveal_duration_secs: u64,
    /// Whether registration stays open after start.
    #[serde(default)]
    pub registration_policy: RegistrationPolicy,
}

impl Default for VotingConfig {
    fn default() -> Self {
        Self {
            commit_duration_secs: 3600, // 1 hour
            reveal_duration_secs: 3600, // 1 hour
            registration_policy: RegistrationPolicy::Open,
        }
    }
}

impl VotingConfig {
    /// Create with the given durations and an open registration policy.
    pub fn new(commit_duration_secs: u64, reveal_duration_secs: u64) -> Self {
        Self {
            commit_duration_secs,
            reveal_duration_secs,
            registration_policy: RegistrationPolicy::Open,
        }
    }

    /// Set the registration policy.
    pub fn with_registration_policy(mut self, policy: RegistrationPolicy) -> Self {
        self.registration_policy = policy;
        self
    }

    /// Both durations must be positive.
    pub fn validate(&self) -> Result<(), VotingError> {
        super::invariants::invariant_positive_duration("commit", self.commit_duration_secs)?;
        super::invariants::invariant_positive_duration("reveal", self.reveal_duration_secs)?;
        Ok(())
    }

    /// Create configuration from environment variables.
    ///
    /// # Environment Variables
    ///
    /// - `CRV_COMMIT_DURATION_SECS`: Commit window (default: 3600)
    /// - `CRV_REVEAL_DURATION_SECS`: Reveal window (default: 3600)
    /// - `CRV_REGISTRATION_POLICY`: `open` or `closed_after_start` (default: open)
    ///
    /// Unset variables take their default; set but unparsable ones are an error.
    pub fn from_env() -> Result<Self, ConfigError> {
        let defaults = Self::default();

        let config = Self {
            commit_duration_secs: env_parse("CRV_COMMIT_DURATION_SECS")?
                .unwrap_or(defaults.commit_duration_secs),
            reveal_duration_secs: env_parse("CRV_REVEAL_DURATION_SECS")?
                .unwrap_or(defaults.reveal_duration_secs),
            registration_policy: env_parse("CRV_REGISTRATION_POLICY")?
                .unwrap_or(defaults.registration_policy),
        };

        config.validate()?;
        Ok(config)
    }
}

fn env_parse<T: std::str::FromStr>(key: &'static str) -> Result<Option<T>, ConfigError> {
    match env::var(key) {
        Ok(value) => value
            .trim()
            .parse()
            .map(Some)
            .map_err(|_| ConfigError::InvalidValue { key, value }),
        Err(_) => Ok(None),
    }
}

/// Something that happened in a session.
///
/// Published only for operations that succeeded.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum VotingEvent {
    /// An address became eligible.
    VoterRegistered {
        /// The new voter
        #[serde(with = "hex::serde")]
        voter: Address,
    },
    /// Voting began; the windows are fixed from here on.
    VotingStarted {
        /// Window boundaries
        schedule: PhaseSchedule,
    },
    /// A commitment was stored.
    VoteCommitted {
        /// Committing voter
        #[serde(with = "hex::serde")]
        voter: Address,
        /// Stored digest
        #[serde(with = "hex::serde")]
        commitment: Hash,
    },
    /// A reveal was accepted and tallied.
    VoteRevealed {
        /// Revealing voter
        #[serde(with = "hex::serde")]
        voter: Address,
        /// Revealed vote
        vote: bool,
    },
}

impl VotingEvent {
    /// Short name for logs.
    pub fn name(&self) -> &'static str {
        match self {
            VotingEvent::VoterRegistered { .. } => "voter_registered",
            VotingEvent::VotingStarted { .. } => "voting_started",
            VotingEvent::VoteCommitted { .. } => "vote_committed",
            VotingEvent::VoteRevealed { .. } => "vote_revealed",
        }
    }
}
