//! Voter Registry Adapter
//!
//! Implements the `VoterRegistry` port in memory.

use crate::domain::{Address, VotingError};
use crate::ports::outbound::{VoterRegistrar, VoterRegistry};
use crv_telemetry::log_voter_event;
use parking_lot::RwLock;
use std::collections::HashSet;
use tracing::debug;

/// In-memory eligibility set.
#[derive(Debug, Default)]
pub struct InMemoryVoterRegistry {
    voters: RwLock<HashSet<Address>>,
}

impl InMemoryVoterRegistry {
    /// Create an empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a registry pre-populated with `voters`. Duplicates collapse.
    pub fn with_voters(voters: impl IntoIterator<Item = Address>) -> Self {
        Self {
            voters: RwLock::new(voters.into_iter().collect()),
        }
    }
}

impl VoterRegistry for InMemoryVoterRegistry {
    fn is_registered(&self, voter: &Address) -> bool {
        self.voters.read().contains(voter)
    }

    fn registered_count(&self) -> usize {
        self.voters.read().len()
    }

    fn registered_voters(&self) -> Vec<Address> {
        let mut voters: Vec<Address> = self.voters.read().iter().copied().collect();
        voters.sort_unstable();
        voters
    }
}

impl VoterRegistrar for InMemoryVoterRegistry {
    fn register_voter(&self, voter: Address) -> Result<(), VotingError> {
        let mut voters = self.voters.write();
        if !voters.insert(voter) {
            debug!("[crv] Duplicate registration refused");
            return Err(VotingError::AlreadyRegistered(voter));
        }
        log_voter_event!(
            debug,
            "[crv] Voter added to registry",
            voter,
            size = voters.len()
        );
        Ok(())
    }
}
