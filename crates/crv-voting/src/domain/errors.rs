//! # Domain Errors
//!
//! Every rejection a voting session can produce. A rejected operation never
//! leaves partial state behind.

use thiserror::Error;

/// Hash type (32-byte Keccak-256 digest).
pub type Hash = [u8; 32];

/// Address type (20-byte).
pub type Address = [u8; 20];

/// Secret type (32-byte).
pub type Secret = [u8; 32];

/// Timestamp in seconds (block-timestamp semantics).
pub type Timestamp = u64;

/// Identifies one voting session in logs and events.
pub type SessionId = uuid::Uuid;

/// Why a reveal was refused.
///
/// All three collapse into the single [`VotingError::InvalidReveal`] kind;
/// the reason is kept for diagnostics.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RevealFailure {
    /// The voter never committed.
    NoCommitment,
    /// The voter already revealed.
    AlreadyRevealed,
    /// `Hash(vote, secret)` differs from the stored commitment.
    CommitmentMismatch,
}

impl std::fmt::Display for RevealFailure {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            RevealFailure::NoCommitment => "no commitment",
            RevealFailure::AlreadyRevealed => "already revealed",
            RevealFailure::CommitmentMismatch => "commitment mismatch",
        };
        f.write_str(s)
    }
}

/// Voting error types.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum VotingError {
    /// Address is already eligible.
    #[error("Voter already registered: {}", hex::encode(.0))]
    AlreadyRegistered(Address),

    /// `start_voting` called twice.
    #[error("Voting already started")]
    AlreadyStarted,

    /// Commit outside the commit window.
    #[error("Not in commit phase")]
    NotCommitPhase,

    /// Reveal outside the reveal window.
    #[error("Not in reveal phase")]
    NotRevealPhase,

    /// Commit by an address that is not eligible.
    #[error("Voter not registered: {}", hex::encode(.0))]
    NotRegistered(Address),

    /// Second commit by the same voter.
    #[error("Already committed: {}", hex::encode(.0))]
    AlreadyCommitted(Address),

    /// Reveal does not prove the stored commitment.
    #[error("Invalid reveal: {reason}")]
    InvalidReveal {
        /// Which check failed
        reason: RevealFailure,
    },

    /// Administrative operation by someone other than the administrator.
    #[error("Unauthorized: {} is not the administrator", hex::encode(.0))]
    Unauthorized(Address),

    /// Registration attempted after start under a closed policy.
    #[error("Registration closed once voting has started")]
    RegistrationClosed,

    /// A phase duration of zero seconds.
    #[error("Invalid {phase} duration: must be at least one second")]
    InvalidDuration {
        /// `commit` or `reveal`
        phase: &'static str,
    },

    /// Phase boundary does not fit in a timestamp.
    #[error("Schedule overflow: start={start}, commit={commit_secs}s, reveal={reveal_secs}s")]
    ScheduleOverflow {
        /// Requested start
        start: Timestamp,
        /// Commit duration
        commit_secs: u64,
        /// Reveal duration
        reveal_secs: u64,
    },
}

impl VotingError {
    /// Stable snake_case label for logs and metrics.
    pub fn kind(&self) -> &'static str {
        match self {
            VotingError::AlreadyRegistered(_) => "already_registered",
            VotingError::AlreadyStarted => "already_started",
            VotingError::NotCommitPhase => "not_commit_phase",
            VotingError::NotRevealPhase => "not_reveal_phase",
            VotingError::NotRegistered(_) => "not_registered",
            VotingError::AlreadyCommitted(_) => "already_committed",
            VotingError::InvalidReveal { .. } => "invalid_reveal",
            VotingError::Unauthorized(_) => "unauthorized",
            VotingError::RegistrationClosed => "registration_closed",
            VotingError::InvalidDuration { .. } => "invalid_duration",
            VotingError::ScheduleOverflow { .. } => "schedule_overflow",
        }
    }

    /// Shorthand for an [`VotingError::InvalidReveal`] with the given reason.
    pub fn invalid_reveal(reason: RevealFailure) -> Self {
        VotingError::InvalidReveal { reason }
    }
}

/// Errors reading configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// An environment variable holds something unparsable.
    #[error("Invalid value for {key}: {value:?}")]
    InvalidValue {
        /// Variable name
        key: &'static str,
        /// Raw value
        value: String,
    },

    /// Values parse but break a rule.
    #[error("Invalid configuration: {0}")]
    Rejected(#[from] VotingError),
}
