//! # Double Voting
//!
//! A voter tries to be counted twice: by committing twice, by revealing
//! twice, or by re-registering.

#[cfg(test)]
mod tests {
    use crate::fixtures::{Election, Voter, ADMIN};
    use crv_voting::{compute_commitment, RevealFailure, VotingError};

    #[test]
    fn test_second_commit_cannot_replace_first() {
        let voter = Voter::new(1, false);
        let mut election = Election::started(&[voter.address]);
        election
            .session
            .commit_vote(voter.address, voter.ballot.commitment)
            .unwrap();

        // Attacker changes their mind after seeing how others behave
        let swapped = compute_commitment(true, voter.ballot.secret.as_bytes());
        assert_eq!(
            election.session.commit_vote(voter.address, swapped),
            Err(VotingError::AlreadyCommitted(voter.address))
        );
        assert_eq!(
            election.session.votes(&voter.address).commitment,
            voter.ballot.commitment
        );

        election.enter_reveal();
        let result = election.session.reveal_vote(
            voter.address,
            true,
            voter.ballot.secret.as_bytes(),
        );
        assert_eq!(
            result,
            Err(VotingError::invalid_reveal(RevealFailure::CommitmentMismatch))
        );
        assert_eq!(election.session.get_results(), (0, 0));
    }

    #[test]
    fn test_replayed_reveal_counts_once() {
        let voter = Voter::new(1, true);
        let mut election = Election::started(&[voter.address]);
        election
            .session
            .commit_vote(voter.address, voter.ballot.commitment)
            .unwrap();
        election.enter_reveal();

        let secret = voter.ballot.secret.as_bytes();
        election
            .session
            .reveal_vote(voter.address, true, secret)
            .unwrap();
        for _ in 0..10 {
            assert_eq!(
                election.session.reveal_vote(voter.address, true, secret),
                Err(VotingError::invalid_reveal(RevealFailure::AlreadyRevealed))
            );
        }
        assert_eq!(election.session.get_results(), (1, 0));
    }

    #[test]
    fn test_reregistration_grants_nothing() {
        let voter = Voter::new(1, true);
        let mut election = Election::started(&[voter.address]);
        assert_eq!(
            election.session.register_voter(ADMIN, voter.address),
            Err(VotingError::AlreadyRegistered(voter.address))
        );
        assert_eq!(election.session.turnout().registered, 1);
    }

    #[test]
    fn test_reveal_under_someone_elses_commitment() {
        let honest = Voter::new(1, true);
        let thief = Voter::new(2, false);
        let mut election = Election::started(&[honest.address, thief.address]);
        election
            .session
            .commit_vote(honest.address, honest.ballot.commitment)
            .unwrap();
        // Thief copies the honest commitment from the public log
        election
            .session
            .commit_vote(thief.address, honest.ballot.commitment)
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

        // Without the secret the copied commitment cannot be opened
        for vote in [true, false] {
            assert!(election
                .session
                .reveal_vote(thief.address, vote, thief.ballot.secret.as_bytes())
                .is_err());
        }
        assert_eq!(election.session.get_results(), (1, 0));
    }
}
