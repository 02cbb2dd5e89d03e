//! # Timing Attacks
//!
//! Late commits, early reveals, and an outsider trying to move the schedule.

#[cfg(test)]
mod tests {
    use crate::fixtures::{address, Election, Voter, ADMIN};
    use crv_voting::{
        CommitmentRecord, RegistrationPolicy, VoterRegistrar, VotingConfig, VotingError,
    };

    #[test]
    fn test_commit_after_seeing_reveals() {
        let honest = Voter::new(1, true);
        let late = Voter::new(2, false);
        let mut election = Election::started(&[honest.address, late.address]);
        election
            .session
            .commit_vote(honest.address, honest.ballot.commitment)
            .unwrap();

        election.enter_reveal();
        election
            .session
            .reveal_vote(
                honest.address,
                honest.ballot.vote,
                honest.ballot.secret.as_bytes(),
            )
            .unwrap();

        assert_eq!(
            election
                .session
                .commit_vote(late.address, late.ballot.commitment),
            Err(VotingError::NotCommitPhase)
        );
        assert_eq!(election.session.turnout().committed, 1);
    }

    #[test]
    fn test_reveal_after_end_frozen() {
        let voter = Voter::new(1, true);
        let mut election = Election::started(&[voter.address]);
        election
            .session
            .commit_vote(voter.address, voter.ballot.commitment)
            .unwrap();
        election.end();

        assert_eq!(
            election.session.reveal_vote(
                voter.address,
                voter.ballot.vote,
                voter.ballot.secret.as_bytes()
            ),
            Err(VotingError::NotRevealPhase)
        );
        election.clock.advance(u64::MAX);
        assert_eq!(election.session.get_results(), (0, 0));
    }

    #[test]
    fn test_outsider_cannot_restart_or_register() {
        let mallory = address(0x66);
        let mut election = Election::new(VotingConfig::new(60, 60));

        assert_eq!(
            election.session.start_voting(mallory),
            Err(VotingError::Unauthorized(mallory))
        );
        assert_eq!(
            election.session.register_voter(mallory, mallory),
            Err(VotingError::Unauthorized(mallory))
        );
        assert!(election.events.is_empty());

        let schedule = election.session.start_voting(ADMIN).unwrap();
        election.clock.advance(59);
        assert_eq!(
            election.session.start_voting(mallory),
            Err(VotingError::Unauthorized(mallory))
        );
        assert_eq!(
            election.session.start_voting(ADMIN),
            Err(VotingError::AlreadyStarted)
        );
        assert_eq!(election.session.schedule(), Some(schedule));
    }

    #[test]
    fn test_unregistered_commit_in_window() {
        let mut election = Election::started(&[address(1)]);
        let outsider = Voter::new(9, true);
        assert_eq!(
            election
                .session
                .commit_vote(outsider.address, outsider.ballot.commitment),
            Err(VotingError::NotRegistered(outsider.address))
        );
        assert_eq!(
            election.session.votes(&outsider.address),
            CommitmentRecord::default()
        );
    }

    #[test]
    fn test_late_voter_via_registry_handle_cannot_commit() {
        let honest = Voter::new(1, true);
        let late = Voter::new(2, false);
        let mut election = Election::new(
            VotingConfig::new(60, 60)
                .with_registration_policy(RegistrationPolicy::ClosedAfterStart),
        );
        election.session.register_voter(ADMIN, honest.address).unwrap();
        election.session.start_voting(ADMIN).unwrap();

        assert_eq!(
            election.session.register_voter(late.address, late.address),
            Err(VotingError::Unauthorized(late.address))
        );
        assert_eq!(
            election.session.register_voter(ADMIN, late.address),
            Err(VotingError::RegistrationClosed)
        );

        // Going around the session straight to the shared registry
        election.registry.register_voter(late.address).unwrap();

        assert_eq!(
            election
                .session
                .commit_vote(late.address, late.ballot.commitment),
            Err(VotingError::NotRegistered(late.address))
        );
        election
            .session
            .commit_vote(honest.address, honest.ballot.commitment)
            .unwrap();
        assert_eq!(election.session.turnout().committed, 1);
    }
}
