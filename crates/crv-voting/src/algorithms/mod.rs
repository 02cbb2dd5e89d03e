//! # Algorithms Module
//!
//! Commitment hashing and phase scheduling.

pub mod commitment;
pub mod phase;

pub use commitment::{
    compute_commitment, generate_secret, seal_vote, verify_commitment, SealedVote,
};
pub use phase::{compute_schedule, phase_at};
