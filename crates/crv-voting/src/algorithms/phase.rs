//! # Phase Scheduling
//!
//! Window boundaries are fixed once, at start; the phase is recomputed from
//! the clock on every call.

use crate::domain::{
    invariant_positive_duration, Phase, PhaseSchedule, Timestamp, VotingConfig, VotingError,
};

/// Compute the schedule for a session started at `start`.
///
/// Fails if either duration is zero or a boundary overflows `u64`.
pub fn compute_schedule(
    start: Timestamp,
    commit_secs: u64,
    reveal_secs: u64,
) -> Result<PhaseSchedule, VotingError> {
    invariant_positive_duration("commit", commit_secs)?;
    invariant_positive_duration("reveal", reveal_secs)?;

    let overflow = || VotingError::ScheduleOverflow {
        start,
        commit_secs,
        reveal_secs,
    };
    let commit_end = start.checked_add(commit_secs).ok_or_else(overflow)?;
    let reveal_end = commit_end.checked_add(reveal_secs).ok_or_else(overflow)?;

    Ok(PhaseSchedule {
        commit_start: start,
        commit_end,
        reveal_end,
    })
}

impl PhaseSchedule {
    /// Compute the schedule for `config` starting at `start`.
    pub fn for_config(start: Timestamp, config: &VotingConfig) -> Result<Self, VotingError> {
        compute_schedule(
            start,
            config.commit_duration_secs,
            config.reveal_duration_secs,
        )
    }
}

/// Phase at `now` for an optional schedule (`None` means not started).
pub fn phase_at(schedule: Option<&PhaseSchedule>, now: Timestamp) -> Phase {
    match schedule {
        Some(schedule) => schedule.phase_at(now),
        None => Phase::NotStarted,
    }
}
