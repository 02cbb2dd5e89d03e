//! # Service Layer
//!
//! The voting session that ties the commitment store to a schedule, a
//! registry and a clock.

mod voting_service;

pub use voting_service::CommitRevealVoting;
