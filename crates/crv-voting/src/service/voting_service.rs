//! Voting Service - session orchestration
//!
//! Owns the schedule and the tally, holds the commitment store, and reaches
//! eligibility and time through injected ports. Every operation reads the
//! clock once, checks the phase, then delegates.

use crate::algorithms::{compute_schedule, phase_at};
use crate::domain::{
    invariant_tally_bounded, Address, CommitRevealLogic, CommitmentRecord, Hash, Phase,
    PhaseSchedule, RegistrationPolicy, Secret, SessionId, Timestamp, Turnout, VoteTally,
    VotingConfig, VotingError, VotingEvent,
};
use crate::ports::inbound::CommitRevealVotingApi;
use crate::ports::outbound::{TimeSource, VoterRegistrar, VoterRegistry, VotingEventSink};
use crv_telemetry::{
    log_voter_event, metric_inc, session_span, OPERATIONS_REJECTED, SESSIONS_STARTED,
    VOTERS_REGISTERED, VOTES_COMMITTED, VOTES_REVEALED,
};
use std::collections::HashSet;
use std::sync::Arc;
use tracing::{debug, info, warn};
use uuid::Uuid;

/// One commit-reveal voting session.
///
/// Mutations take `&mut self`, so operations on a session are serialized.
/// Several sessions may share one registry. Under
/// [`RegistrationPolicy::ClosedAfterStart`] the eligible set is frozen at
/// `start_voting`; later additions to a shared registry do not reach it.
pub struct CommitRevealVoting<R, T>
where
    R: VoterRegistrar,
    T: TimeSource,
{
    session_id: SessionId,
    config: VotingConfig,
    administrator: Address,
    registry: Arc<R>,
    clock: Arc<T>,
    events: Option<Arc<dyn VotingEventSink>>,
    /// `None` until `start_voting`.
    schedule: Option<PhaseSchedule>,
    /// Eligible set frozen at start under `ClosedAfterStart`.
    frozen_voters: Option<HashSet<Address>>,
    logic: CommitRevealLogic,
    tally: VoteTally,
}

impl<R, T> CommitRevealVoting<R, T>
where
    R: VoterRegistrar,
    T: TimeSource,
{
    /// Create a session. Fails if either duration is zero.
    pub fn new(
        config: VotingConfig,
        administrator: Address,
        registry: Arc<R>,
        clock: Arc<T>,
    ) -> Result<Self, VotingError> {
        config.validate()?;

        let session_id = Uuid::new_v4();
        info!(
            session = %session_id,
            commit_secs = config.commit_duration_secs,
            reveal_secs = config.reveal_duration_secs,
            policy = ?config.registration_policy,
            "[crv] Voting session created"
        );

        Ok(Self {
            session_id,
            config,
            administrator,
            registry,
            clock,
            events: None,
            schedule: None,
            frozen_voters: None,
            logic: CommitRevealLogic::new(),
            tally: VoteTally::default(),
        })
    }

    /// Publish every accepted operation to `sink`.
    pub fn with_event_sink(mut self, sink: Arc<dyn VotingEventSink>) -> Self {
        self.events = Some(sink);
        self
    }

    // =========================================================================
    // Write operations
    // =========================================================================

    /// Make `voter` eligible. Administrator only.
    pub fn register_voter(&mut self, caller: Address, voter: Address) -> Result<(), VotingError> {
        let _span = session_span!("register_voter", session = %self.session_id).entered();

        self.require_administrator(caller)?;
        if self.config.registration_policy == RegistrationPolicy::ClosedAfterStart
            && self.schedule.is_some()
        {
            return Err(reject(VotingError::RegistrationClosed));
        }
        self.registry.register_voter(voter).map_err(reject)?;

        metric_inc!(VOTERS_REGISTERED);
        log_voter_event!(info, "[crv] Voter registered", voter);
        self.publish(VotingEvent::VoterRegistered { voter });
        Ok(())
    }

    /// Fix the commit and reveal windows from the current time.
    /// Administrator only; only once.
    pub fn start_voting(&mut self, caller: Address) -> Result<PhaseSchedule, VotingError> {
        let _span = session_span!("start_voting", session = %self.session_id).entered();

        self.require_administrator(caller)?;
        if self.schedule.is_some() {
            return Err(reject(VotingError::AlreadyStarted));
        }

        let now = self.clock.now();
        let schedule = compute_schedule(
            now,
            self.config.commit_duration_secs,
            self.config.reveal_duration_secs,
        )
        .map_err(reject)?;
        self.schedule = Some(schedule);
        if self.config.registration_policy == RegistrationPolicy::ClosedAfterStart {
            self.frozen_voters = Some(self.registry.registered_voters().into_iter().collect());
        }

        metric_inc!(SESSIONS_STARTED);
        info!(
            commit_start = schedule.commit_start,
            commit_end = schedule.commit_end,
            reveal_end = schedule.reveal_end,
            "[crv] Voting started"
        );
        self.publish(VotingEvent::VotingStarted { schedule });
        Ok(schedule)
    }

    /// Store `caller`'s commitment. Commit phase and eligible voters only.
    pub fn commit_vote(&mut self, caller: Address, commitment: Hash) -> Result<(), VotingError> {
        let _span = session_span!("commit_vote", session = %self.session_id).entered();

        if self.current_phase() != Phase::Commit {
            return Err(reject(VotingError::NotCommitPhase));
        }
        if !self.is_registered(&caller) {
            return Err(reject(VotingError::NotRegistered(caller)));
        }
        self.logic.commit(caller, commitment).map_err(reject)?;

        metric_inc!(VOTES_COMMITTED);
        log_voter_event!(
            info,
            "[crv] Vote committed",
            caller,
            committed = self.logic.commit_count()
        );
        self.publish(VotingEvent::VoteCommitted {
            voter: caller,
            commitment,
        });
        Ok(())
    }

    /// Open `caller`'s commitment and count the vote. Reveal phase only.
    pub fn reveal_vote(
        &mut self,
        caller: Address,
        vote: bool,
        secret: &Secret,
    ) -> Result<(), VotingError> {
        let _span = session_span!("reveal_vote", session = %self.session_id).entered();

        if self.current_phase() != Phase::Reveal {
            return Err(reject(VotingError::NotRevealPhase));
        }
        let vote = self.logic.reveal(caller, vote, secret).map_err(reject)?;
        self.tally.record(vote);
        debug_assert!(invariant_tally_bounded(&self.tally, self.logic.commit_count()));

        metric_inc!(VOTES_REVEALED, &[if vote { "yes" } else { "no" }]);
        log_voter_event!(
            info,
            "[crv] Vote revealed",
            caller,
            vote,
            yes = self.tally.yes,
            no = self.tally.no
        );
        self.publish(VotingEvent::VoteRevealed {
            voter: caller,
            vote,
        });
        Ok(())
    }

    // =========================================================================
    // Queries
    // =========================================================================

    /// `(yes, no)` counts of accepted reveals. Final once ended.
    pub fn get_results(&self) -> (u64, u64) {
        self.tally.as_pair()
    }

    /// Current tally.
    pub fn tally(&self) -> VoteTally {
        self.tally
    }

    /// Phase at the current clock reading.
    pub fn phase(&self) -> Phase {
        self.current_phase()
    }

    /// True only during the commit window.
    pub fn is_commit_phase(&self) -> bool {
        self.current_phase() == Phase::Commit
    }

    /// True only during the reveal window.
    pub fn is_reveal_phase(&self) -> bool {
        self.current_phase() == Phase::Reveal
    }

    /// True once the reveal window has closed.
    pub fn is_voting_ended(&self) -> bool {
        self.current_phase().is_terminal()
    }

    /// Whether the tally can no longer change.
    pub fn is_result_final(&self) -> bool {
        self.is_voting_ended()
    }

    /// Whether `voter` may commit in this session.
    pub fn is_registered(&self, voter: &Address) -> bool {
        match &self.frozen_voters {
            Some(frozen) => frozen.contains(voter),
            None => self.registry.is_registered(voter),
        }
    }

    /// `voter`'s commitment record, or a zeroed, unrevealed one if absent.
    pub fn votes(&self, voter: &Address) -> CommitmentRecord {
        self.logic.votes(voter).copied().unwrap_or_default()
    }

    /// Window boundaries, once started.
    pub fn schedule(&self) -> Option<PhaseSchedule> {
        self.schedule
    }

    /// Participation counts.
    pub fn turnout(&self) -> Turnout {
        Turnout {
            registered: self
                .frozen_voters
                .as_ref()
                .map_or_else(|| self.registry.registered_count(), HashSet::len),
            committed: self.logic.commit_count(),
            revealed: self.logic.reveal_count(),
        }
    }

    /// Voters who committed but have not revealed, sorted.
    pub fn unrevealed_voters(&self) -> Vec<Address> {
        self.logic.unrevealed_voters()
    }

    /// This session's id.
    pub fn session_id(&self) -> SessionId {
        self.session_id
    }

    /// The administrator fixed at construction.
    pub fn administrator(&self) -> Address {
        self.administrator
    }

    /// Session configuration.
    pub fn config(&self) -> &VotingConfig {
        &self.config
    }

    /// Read-only view of the injected registry.
    pub fn voter_registry(&self) -> &dyn VoterRegistry {
        self.registry.as_ref()
    }

    /// Read access to the commitment store.
    pub fn commit_reveal_logic(&self) -> &CommitRevealLogic {
        &self.logic
    }

    // =========================================================================
    // Internal
    // =========================================================================

    fn current_phase(&self) -> Phase {
        let now: Timestamp = self.clock.now();
        let phase = phase_at(self.schedule.as_ref(), now);
        debug!(now, %phase, "[crv] Phase evaluated");
        phase
    }

    fn require_administrator(&self, caller: Address) -> Result<(), VotingError> {
        if caller != self.administrator {
            return Err(reject(VotingError::Unauthorized(caller)));
        }
        Ok(())
    }

    fn publish(&self, event: VotingEvent) {
        if let Some(sink) = &self.events {
            sink.publish(&event);
        }
    }
}

/// Log and count a rejection, then hand the error back.
fn reject(error: VotingError) -> VotingError {
    metric_inc!(OPERATIONS_REJECTED, &[error.kind()]);
    warn!(reason = error.kind(), %error, "[crv] Operation rejected");
    error
}

impl<R, T> CommitRevealVotingApi for CommitRevealVoting<R, T>
where
    R: VoterRegistrar,
    T: TimeSource,
{
    fn register_voter(&mut self, caller: Address, voter: Address) -> Result<(), VotingError> {
        CommitRevealVoting::register_voter(self, caller, voter)
    }

    fn start_voting(&mut self, caller: Address) -> Result<PhaseSchedule, VotingError> {
        CommitRevealVoting::start_voting(self, caller)
    }

    fn commit_vote(&mut self, caller: Address, commitment: Hash) -> Result<(), VotingError> {
        CommitRevealVoting::commit_vote(self, caller, commitment)
    }

    fn reveal_vote(
        &mut self,
        caller: Address,
        vote: bool,
        secret: &Secret,
    ) -> Result<(), VotingError> {
        CommitRevealVoting::reveal_vote(self, caller, vote, secret)
    }

    fn get_results(&self) -> (u64, u64) {
        CommitRevealVoting::get_results(self)
    }

    fn is_registered(&self, voter: &Address) -> bool {
        CommitRevealVoting::is_registered(self, voter)
    }

    fn votes(&self, voter: &Address) -> CommitmentRecord {
        CommitRevealVoting::votes(self, voter)
    }

    fn phase(&self) -> Phase {
        CommitRevealVoting::phase(self)
    }

    fn schedule(&self) -> Option<PhaseSchedule> {
        CommitRevealVoting::schedule(self)
    }

    fn tally(&self) -> VoteTally {
        CommitRevealVoting::tally(self)
    }

    fn turnout(&self) -> Turnout {
        CommitRevealVoting::turnout(self)
    }
}
