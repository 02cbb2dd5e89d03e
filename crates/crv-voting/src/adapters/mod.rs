//! # Adapters Layer (Hexagonal Architecture)
//!
//! In-memory implementations of the outbound ports.

mod clock;
mod event_log;
mod voter_registry;

pub use clock::ManualClock;
pub use event_log::InMemoryEventLog;
pub use voter_registry::InMemoryVoterRegistry;
