//! # Shared Fixtures
//!
//! A ready-made election: administrator, a manual clock, a fresh registry and
//! an event log, plus voters that hold their sealed ballots.

use std::sync::Arc;

use crv_voting::{
    seal_vote, Address, CommitRevealVoting, InMemoryEventLog, InMemoryVoterRegistry, ManualClock,
    SealedVote, Timestamp, VotingConfig,
};

/// Administrator used by every fixture.
pub const ADMIN: Address = [0xAD; 20];

/// Clock reading at construction.
pub const GENESIS: Timestamp = 1_700_000_000;

/// Session type used throughout the suite.
pub type Session = CommitRevealVoting<InMemoryVoterRegistry, ManualClock>;

/// A session and the handles a test needs to drive it.
pub struct Election {
    pub session: Session,
    pub clock: Arc<ManualClock>,
    pub registry: Arc<InMemoryVoterRegistry>,
    pub events: Arc<InMemoryEventLog>,
}

impl Election {
    /// Build a session with `config`, not yet started.
    pub fn new(config: VotingConfig) -> Self {
        let clock = Arc::new(ManualClock::new(GENESIS));
        let registry = Arc::new(InMemoryVoterRegistry::new());
        let events = Arc::new(InMemoryEventLog::new());
        let session = CommitRevealVoting::new(config, ADMIN, registry.clone(), clock.clone())
            .expect("valid config")
            .with_event_sink(events.clone());

        Self {
            session,
            clock,
            registry,
            events,
        }
    }

    /// One-hour windows, `voters` registered, voting started.
    pub fn started(voters: &[Address]) -> Self {
        let mut election = Self::new(VotingConfig::new(3600, 3600));
        for voter in voters {
            election
                .session
                .register_voter(ADMIN, *voter)
                .expect("registration");
        }
        election.session.start_voting(ADMIN).expect("start");
        election
    }

    /// Move the clock into the reveal window.
    pub fn enter_reveal(&self) {
        let schedule = self.session.schedule().expect("started");
        self.clock.set(schedule.commit_end);
    }

    /// Move the clock past the reveal window.
    pub fn end(&self) {
        let schedule = self.session.schedule().expect("started");
        self.clock.set(schedule.reveal_end);
    }
}

/// A voter and the ballot they sealed.
pub struct Voter {
    pub address: Address,
    pub ballot: SealedVote,
}

impl Voter {
    /// Voter `n` with a freshly sealed `vote`.
    pub fn new(n: u8, vote: bool) -> Self {
        Self {
            address: address(n),
            ballot: seal_vote(vote),
        }
    }
}

/// Deterministic address `n`.
pub fn address(n: u8) -> Address {
    let mut address = [0u8; 20];
    address[0] = 0x10;
    address[19] = n;
    address
}
