//! # Commitment Hashing
//!
//! `Hash(vote, secret) = Keccak-256(vote_byte || secret)` where `vote_byte`
//! is `0x01` for yes and `0x00` for no. The encoding is fixed: voters compute
//! commitments off-line and the session must reproduce them bit for bit.

use crate::domain::{invariant_commitment_matches, Hash, Secret, VoteSecret};
use rand::RngCore;
use serde::{Deserialize, Serialize};
use sha3::{Digest, Keccak256};

/// Compute the commitment for `(vote, secret)`.
pub fn compute_commitment(vote: bool, secret: &Secret) -> Hash {
    let mut hasher = Keccak256::new();
    hasher.update([vote as u8]);
    hasher.update(secret);
    let result = hasher.finalize();
    let mut hash = [0u8; 32];
    hash.copy_from_slice(&result);
    hash
}

/// Check that `(vote, secret)` opens `commitment`.
pub fn verify_commitment(vote: bool, secret: &Secret, commitment: &Hash) -> bool {
    invariant_commitment_matches(vote, secret, commitment)
}

/// Generate a cryptographically secure random secret.
pub fn generate_secret() -> VoteSecret {
    let mut secret = [0u8; 32];
    rand::thread_rng().fill_bytes(&mut secret);
    let sealed = VoteSecret::new(secret);
    zeroize::Zeroize::zeroize(&mut secret);
    sealed
}

/// A vote ready to be committed, with everything needed to reveal it later.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SealedVote {
    /// The hidden vote.
    pub vote: bool,
    /// Blinding secret. Keep it until the reveal window.
    pub secret: VoteSecret,
    /// Digest to submit during the commit window.
    #[serde(with = "hex::serde")]
    pub commitment: Hash,
}

/// Pick a fresh secret for `vote` and compute its commitment.
pub fn seal_vote(vote: bool) -> SealedVote {
    let secret = generate_secret();
    let commitment = compute_commitment(vote, secret.as_bytes());
    SealedVote {
        vote,
        secret,
        commitment,
    }
}
