//! Prometheus metrics for voting sessions.
//!
//! All metrics follow the naming convention: `crv_<metric>_<unit>`
//!
//! Counters are process-wide: several sessions running in one process add
//! into the same series.

use lazy_static::lazy_static;
use prometheus::{Encoder, IntCounter, IntCounterVec, Opts, Registry, TextEncoder};

use crate::TelemetryError;

lazy_static! {
    /// Global metrics registry
    pub static ref REGISTRY: Registry = Registry::new();

    /// Voters added to a registry
    pub static ref VOTERS_REGISTERED: IntCounter = IntCounter::new(
        "crv_voters_registered_total",
        "Total number of voters registered as eligible"
    ).expect("metric creation failed");

    /// Sessions moved out of NotStarted
    pub static ref SESSIONS_STARTED: IntCounter = IntCounter::new(
        "crv_sessions_started_total",
        "Total number of voting sessions started"
    ).expect("metric creation failed");

    /// Accepted commitments
    pub static ref VOTES_COMMITTED: IntCounter = IntCounter::new(
        "crv_votes_committed_total",
        "Total number of vote commitments accepted"
    ).expect("metric creation failed");

    /// Accepted reveals by revealed value
    pub static ref VOTES_REVEALED: IntCounterVec = IntCounterVec::new(
        Opts::new("crv_votes_revealed_total", "Total number of votes revealed and tallied"),
        &["vote"]  // vote: yes/no
    ).expect("metric creation failed");

    /// Rejected operations by error kind
    pub static ref OPERATIONS_REJECTED: IntCounterVec = IntCounterVec::new(
        Opts::new("crv_operations_rejected_total", "Operations rejected by the voting session"),
        &["reason"]
    ).expect("metric creation failed");
}

/// Handle proving the metrics have been registered
pub struct MetricsHandle {
    _registered: usize,
}

/// Register all metrics with the global registry.
///
/// Safe to call more than once: collectors that are already registered are skipped.
pub fn register_metrics() -> Result<MetricsHandle, TelemetryError> {
    let metrics: Vec<Box<dyn prometheus::core::Collector>> = vec![
        Box::new(VOTERS_REGISTERED.clone()),
        Box::new(SESSIONS_STARTED.clone()),
        Box::new(VOTES_COMMITTED.clone()),
        Box::new(VOTES_REVEALED.clone()),
        Box::new(OPERATIONS_REJECTED.clone()),
    ];

    let mut registered = 0;
    for metric in metrics {
        match REGISTRY.register(metric) {
            Ok(()) => registered += 1,
            Err(prometheus::Error::AlreadyReg) => {}
            Err(e) => return Err(TelemetryError::MetricsInit(e.to_string())),
        }
    }

    Ok(MetricsHandle {
        _registered: registered,
    })
}

/// Encode all registered metrics as Prometheus text format.
pub fn gather_metrics() -> Result<String, TelemetryError> {
    let encoder = TextEncoder::new();
    let metric_families = REGISTRY.gather();
    let mut buffer = Vec::new();
    encoder
        .encode(&metric_families, &mut buffer)
        .map_err(|e| TelemetryError::MetricsInit(e.to_string()))?;
    String::from_utf8(buffer).map_err(|e| TelemetryError::MetricsInit(e.to_string()))
}
