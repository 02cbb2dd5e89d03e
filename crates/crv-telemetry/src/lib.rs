//! # CRV Telemetry
//!
//! Logging and metrics for the commit-reveal voting workspace.
//!
//! ## Components
//!
//! - **Logging**: `tracing-subscriber` with an `EnvFilter`, pretty or JSON output
//! - **Metrics**: Prometheus counters for registrations, commits, reveals and rejections
//!
//! ## Usage
//!
//! ```rust,ignore
//! use crv_telemetry::{init_telemetry, TelemetryConfig};
//!
//! fn main() {
//!     let config = TelemetryConfig::from_env();
//!     let _guard = init_telemetry(&config).expect("Failed to init telemetry");
//!
//!     // Voting sessions now log and count their operations
//! }
//! ```
//!
//! ## Environment Variables
//!
//! | Variable | Default | Description |
//! |----------|---------|-------------|
//! | `CRV_SERVICE_NAME` | `commit-reveal-voting` | Service name attached to logs |
//! | `CRV_LOG_LEVEL` | `info` | Log level filter (falls back to `RUST_LOG`) |
//! | `CRV_JSON_LOGS` | `false` | Emit JSON formatted logs |
//! | `CRV_CONSOLE_OUTPUT` | `true` | Write logs to stdout |

#![warn(missing_docs)]

mod config;
mod logging;
pub mod metrics;

pub use config::TelemetryConfig;
pub use logging::{hex_address, init_logging, LoggingGuard};
pub use metrics::{
    gather_metrics, register_metrics, MetricsHandle, OPERATIONS_REJECTED, SESSIONS_STARTED,
    VOTERS_REGISTERED, VOTES_COMMITTED, VOTES_REVEALED,
};

use thiserror::Error;

/// Telemetry initialization errors
#[derive(Error, Debug)]
pub enum TelemetryError {
    /// The subscriber could not be installed (usually: one is already set).
    #[error("Failed to initialize logging: {0}")]
    LoggingInit(String),

    /// A metric could not be registered or encoded.
    #[error("Failed to initialize Prometheus metrics: {0}")]
    MetricsInit(String),

    /// The configuration is unusable.
    #[error("Invalid configuration: {0}")]
    Config(String),
}

/// Initialize logging and metrics.
///
/// Returns a guard that must be held for the lifetime of the application.
pub fn init_telemetry(config: &TelemetryConfig) -> Result<TelemetryGuard, TelemetryError> {
    // Metrics first so counters incremented during startup are exported
    let metrics_handle = register_metrics()?;
    let logging_guard = init_logging(config)?;

    Ok(TelemetryGuard {
        _logging: logging_guard,
        _metrics: metrics_handle,
    })
}

/// Guard that keeps telemetry active.
pub struct TelemetryGuard {
    _logging: LoggingGuard,
    _metrics: MetricsHandle,
}

impl Drop for TelemetryGuard {
    fn drop(&mut self) {
        tracing::info!("Shutting down telemetry...");
    }
}

/// Convenience macro for creating a span scoped to one voting session.
///
/// # Example
///
/// ```rust,ignore
/// use crv_telemetry::session_span;
///
/// let _span = session_span!("commit_vote", session = %session_id).entered();
/// ```
#[macro_export]
macro_rules! session_span {
    ($name:expr, $($field:tt)*) => {
        tracing::info_span!($name, $($field)*)
    };
}

/// Convenience macro for recording a metric increment.
#[macro_export]
macro_rules! metric_inc {
    ($metric:expr) => {
        $metric.inc()
    };
    ($metric:expr, $labels:expr) => {
        $metric.with_label_values($labels).inc()
    };
}
