//! # Commit-Reveal Voting Benchmarks
//!
//! | Operation | Expected cost |
//! |-----------|---------------|
//! | Commitment hash | one Keccak-256 over 33 bytes |
//! | Commit | O(1) registry lookup + map insert |
//! | Reveal | one Keccak-256 + map update |

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use crv_voting::{
    compute_commitment, seal_vote, verify_commitment, CommitRevealVoting, InMemoryVoterRegistry,
    ManualClock, SealedVote, VotingConfig,
};
use rand::Rng;
use std::sync::Arc;

const ADMIN: [u8; 20] = [0xAD; 20];

fn voter(i: u32) -> [u8; 20] {
    let mut address = [0u8; 20];
    address[..4].copy_from_slice(&i.to_be_bytes());
    address
}

// ============================================================================
// Commitment hashing
// ============================================================================

fn bench_commitment(c: &mut Criterion) {
    let mut group = c.benchmark_group("commitment");
    let secret: [u8; 32] = rand::thread_rng().gen();
    let commitment = compute_commitment(true, &secret);

    group.bench_function("compute", |b| {
        b.iter(|| black_box(compute_commitment(black_box(true), black_box(&secret))))
    });
    group.bench_function("verify", |b| {
        b.iter(|| black_box(verify_commitment(true, &secret, &commitment)))
    });
    group.bench_function("seal_vote", |b| b.iter(|| black_box(seal_vote(true))));
    group.finish();
}

// ============================================================================
// Full election
// ============================================================================

fn bench_election(c: &mut Criterion) {
    let mut group = c.benchmark_group("election");

    for size in [100u32, 1_000, 10_000] {
        let ballots: Vec<SealedVote> = (0..size).map(|i| seal_vote(i % 2 == 0)).collect();

        group.throughput(Throughput::Elements(size as u64));
        group.bench_with_input(BenchmarkId::new("commit_reveal", size), &size, |b, _| {
            b.iter(|| {
                let clock = Arc::new(ManualClock::new(0));
                let registry = Arc::new(InMemoryVoterRegistry::with_voters(
                    (0..size).map(voter),
                ));
                let config = VotingConfig::new(10, 10);
                let mut session =
                    CommitRevealVoting::new(config, ADMIN, registry, clock.clone()).unwrap();
                session.start_voting(ADMIN).unwrap();

                for (i, ballot) in ballots.iter().enumerate() {
                    session
                        .commit_vote(voter(i as u32), ballot.commitment)
                        .unwrap();
                }
                clock.advance(10);
                for (i, ballot) in ballots.iter().enumerate() {
                    session
                        .reveal_vote(voter(i as u32), ballot.vote, ballot.secret.as_bytes())
                        .unwrap();
                }
                black_box(session.get_results())
            })
        });
    }
    group.finish();
}

criterion_group!(benches, bench_commitment, bench_election);
criterion_main!(benches);
