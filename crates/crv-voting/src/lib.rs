//! # CRV Commit-Reveal Voting
//!
//! Yes/no voting where ballots stay hidden until every voter has committed.
//!
//! **Architecture:** Hexagonal (DDD + Ports/Adapters)
//!
//! ## Protocol
//!
//! ```text
//! NotStarted --start_voting--> Commit --commit_end--> Reveal --reveal_end--> Ended
//! ```
//!
//! - During **Commit**, registered voters submit `Keccak-256(vote_byte || secret)`
//! - During **Reveal**, they disclose `(vote, secret)`; matching reveals are tallied
//! - Once **Ended**, `get_results()` is final
//!
//! Phases are never stored: they are computed from the clock and the
//! boundaries fixed by `start_voting`.
//!
//! ## Guarantees
//!
//! | Guarantee | Enforced by |
//! |-----------|-------------|
//! | One commitment per voter | `CommitRevealLogic::commit` |
//! | Reveal must open the commitment | `invariant_commitment_matches` |
//! | One reveal per voter | `CommitmentRecord::revealed` |
//! | No tally during commit | phase check in `reveal_vote` |
//! | Rejections leave no trace | checks run before any mutation |
//!
//! ## Module Structure
//!
//! ```text
//! crv-voting/
//! ├── domain/          # records, schedule, tally, errors, invariants, commitment store
//! ├── algorithms/      # commitment hashing, secrets, schedule computation
//! ├── ports/           # API trait, VoterRegistry/Registrar, TimeSource, VotingEventSink
//! ├── adapters/        # in-memory registry, manual clock, event log
//! └── service/         # CommitRevealVoting session
//! ```
//!
//! ## Example
//!
//! ```rust
//! use std::sync::Arc;
//! use crv_voting::{
//!     seal_vote, CommitRevealVoting, InMemoryVoterRegistry, ManualClock, VotingConfig,
//! };
//!
//! let admin = [0xAD; 20];
//! let alice = [0xA1; 20];
//! let clock = Arc::new(ManualClock::new(1_700_000_000));
//! let registry = Arc::new(InMemoryVoterRegistry::new());
//! let mut session =
//!     CommitRevealVoting::new(VotingConfig::new(60, 60), admin, registry, clock.clone())?;
//!
//! session.register_voter(admin, alice)?;
//! session.start_voting(admin)?;
//!
//! let ballot = seal_vote(true);
//! session.commit_vote(alice, ballot.commitment)?;
//!
//! clock.advance(60);
//! session.reveal_vote(alice, ballot.vote, ballot.secret.as_bytes())?;
//!
//! clock.advance(60);
//! assert_eq!(session.get_results(), (1, 0));
//! # Ok::<(), crv_voting::VotingError>(())
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod adapters;
pub mod algorithms;
pub mod domain;
pub mod ports;
pub mod service;

// Re-exports
pub use adapters::{InMemoryEventLog, InMemoryVoterRegistry, ManualClock};
pub use algorithms::{
    compute_commitment, compute_schedule, generate_secret, phase_at, seal_vote,
    verify_commitment, SealedVote,
};
pub use domain::{
    invariant_commitment_matches, invariant_phase_monotonic, invariant_positive_duration,
    invariant_tally_bounded, Address, CommitRevealLogic, CommitmentRecord, ConfigError, Hash,
    Phase, PhaseSchedule, RegistrationPolicy, RevealFailure, Secret, SessionId, Timestamp,
    Turnout, VoteSecret, VoteTally, VoterState, VotingConfig, VotingError, VotingEvent,
};
pub use ports::{
    CommitRevealVotingApi, SystemTimeSource, TimeSource, VoterRegistrar, VoterRegistry,
    VotingEventSink,
};
pub use service::CommitRevealVoting;

/// Crate version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
