//! # CRV Election Simulator
//!
//! Runs one complete election on a simulated clock and prints the result
//! and the Prometheus counters it produced.
//!
//! ```bash
//! crv-simulate [VOTERS] [ABSTAIN_EVERY]
//! ```
//!
//! Session durations come from `CRV_COMMIT_DURATION_SECS` and
//! `CRV_REVEAL_DURATION_SECS`; logging from `CRV_LOG_LEVEL`.

use std::sync::Arc;

use anyhow::{Context, Result};
use rand::Rng;
use tracing::info;

use crv_telemetry::{gather_metrics, init_telemetry, TelemetryConfig};
use crv_voting::{
    seal_vote, Address, CommitRevealVoting, InMemoryEventLog, InMemoryVoterRegistry,
    ManualClock, SystemTimeSource, TimeSource, VotingConfig,
};

const ADMIN: Address = [0xAD; 20];

fn voter_address(i: u32) -> Address {
    let mut address = [0u8; 20];
    address[0] = 0x10;
    address[16..].copy_from_slice(&i.to_be_bytes());
    address
}

fn arg(index: usize, default: u32) -> Result<u32> {
    match std::env::args().nth(index) {
        Some(raw) => raw
            .parse()
            .with_context(|| format!("argument {} must be a number, got {:?}", index, raw)),
        None => Ok(default),
    }
}

fn main() -> Result<()> {
    let _telemetry = init_telemetry(&TelemetryConfig::from_env())
        .context("Failed to initialize telemetry")?;

    let voters = arg(1, 10)?;
    let abstain_every = arg(2, 0)?;
    let config = VotingConfig::from_env().context("Invalid voting configuration")?;

    // Simulated time starts at the real clock and is advanced by hand
    let clock = Arc::new(ManualClock::new(SystemTimeSource.now()));
    let registry = Arc::new(InMemoryVoterRegistry::new());
    let events = Arc::new(InMemoryEventLog::new());
    let mut session = CommitRevealVoting::new(config, ADMIN, registry, clock.clone())?
        .with_event_sink(events.clone());

    info!(session = %session.session_id(), voters, "[crv] Simulation starting");

    for i in 0..voters {
        session.register_voter(ADMIN, voter_address(i))?;
    }
    let schedule = session.start_voting(ADMIN)?;

    let mut rng = rand::thread_rng();
    let ballots: Vec<_> = (0..voters).map(|_| seal_vote(rng.gen())).collect();
    for (i, ballot) in ballots.iter().enumerate() {
        session.commit_vote(voter_address(i as u32), ballot.commitment)?;
    }

    clock.set(schedule.commit_end);
    for (i, ballot) in ballots.iter().enumerate() {
        if abstain_every > 0 && i as u32 % abstain_every == 0 {
            continue;
        }
        session.reveal_vote(voter_address(i as u32), ballot.vote, ballot.secret.as_bytes())?;
    }

    clock.set(schedule.reveal_end);
    let (yes, no) = session.get_results();
    let turnout = session.turnout();

    println!("session:     {}", session.session_id());
    println!("registered:  {}", turnout.registered);
    println!("committed:   {}", turnout.committed);
    println!("revealed:    {}", turnout.revealed);
    println!("yes / no:    {} / {}", yes, no);
    println!("events:      {}", events.len());
    println!();
    print!("{}", gather_metrics()?);

    Ok(())
}
