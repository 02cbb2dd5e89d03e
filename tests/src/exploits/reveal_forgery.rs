//! # Reveal Forgery
//!
//! Attempts to open a commitment with anything other than the exact
//! `(vote, secret)` preimage.

#[cfg(test)]
mod tests {
    use crate::fixtures::{address, Election, Voter};
    use crv_voting::{compute_commitment, RevealFailure, VotingError};
    use rand::Rng;
    use sha3::{Digest, Keccak256};

    fn mismatch() -> Result<(), VotingError> {
        Err(VotingError::invalid_reveal(RevealFailure::CommitmentMismatch))
    }

    #[test]
    fn test_flipped_bits_rejected() {
        let voter = Voter::new(1, true);
        let mut election = Election::started(&[voter.address]);
        election
            .session
            .commit_vote(voter.address, voter.ballot.commitment)
            .unwrap();
        election.enter_reveal();

        let secret = *voter.ballot.secret.as_bytes();
        for byte in 0..32 {
            for bit in 0..8 {
                let mut forged = secret;
                forged[byte] ^= 1 << bit;
                assert_eq!(
                    election.session.reveal_vote(voter.address, true, &forged),
                    mismatch()
                );
            }
        }
        assert_eq!(
            election.session.reveal_vote(voter.address, false, &secret),
            mismatch()
        );

        // The honest reveal still works after every failed attempt
        election
            .session
            .reveal_vote(voter.address, true, &secret)
            .unwrap();
        assert_eq!(election.session.get_results(), (1, 0));
    }

    #[test]
    fn test_random_secrets_rejected() {
        let voter = Voter::new(1, false);
        let mut election = Election::started(&[voter.address]);
        election
            .session
            .commit_vote(voter.address, voter.ballot.commitment)
            .unwrap();
        election.enter_reveal();

        let mut rng = rand::thread_rng();
        for _ in 0..256 {
            let guess: [u8; 32] = rng.gen();
            let vote: bool = rng.gen();
            assert!(election
                .session
                .reveal_vote(voter.address, vote, &guess)
                .is_err());
        }
        assert_eq!(election.session.get_results(), (0, 0));
    }

    #[test]
    fn test_alternate_encodings_rejected() {
        let secret = [0x11u8; 32];
        let voter = address(1);
        let mut election = Election::started(&[voter]);
        election
            .session
            .commit_vote(voter, compute_commitment(true, &secret))
            .unwrap();
        election.enter_reveal();

        // Secret first, vote last
        let mut hasher = Keccak256::new();
        hasher.update(secret);
        hasher.update([1u8]);
        let mut reordered = [0u8; 32];
        reordered.copy_from_slice(&hasher.finalize());
        assert_ne!(reordered, compute_commitment(true, &secret));

        // The packed encoding is the one reproduced here
        let mut hasher = Keccak256::new();
        hasher.update([1u8]);
        hasher.update(secret);
        let mut packed = [0u8; 32];
        packed.copy_from_slice(&hasher.finalize());
        assert_eq!(
            hex::encode(packed),
            "797d2d2c2c2b0f820ed98bee1c33fd6d17efaca9b4de83ae4ad04d4a5ece79c2"
        );

        election.session.reveal_vote(voter, true, &secret).unwrap();
    }

    #[test]
    fn test_reveal_without_commitment() {
        let voter = address(1);
        let mut election = Election::started(&[voter]);
        election.enter_reveal();

        assert_eq!(
            election.session.reveal_vote(voter, true, &[0u8; 32]),
            Err(VotingError::invalid_reveal(RevealFailure::NoCommitment))
        );
        // Outsiders get the same treatment
        assert_eq!(
            election.session.reveal_vote(address(66), true, &[0u8; 32]),
            Err(VotingError::invalid_reveal(RevealFailure::NoCommitment))
        );
        assert_eq!(election.session.get_results(), (0, 0));
    }
}
