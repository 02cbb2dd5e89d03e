//! # Domain Module
//!
//! Core domain types for commit-reveal voting.

pub mod commit_reveal;
pub mod entities;
pub mod errors;
pub mod invariants;
pub mod secure_secret;
pub mod value_objects;

pub use commit_reveal::CommitRevealLogic;
pub use entities::*;
pub use errors::*;
pub use invariants::*;
pub use secure_secret::VoteSecret;
pub use value_objects::*;
