//! Structured logging setup.
//!
//! Every log line carries the emitting target and, inside a session span,
//! the session id. Output is either human readable or JSON (one object per
//! line) for log shippers.

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::{TelemetryConfig, TelemetryError};

/// Logging handle. Holding it has no effect beyond documenting that logging is live.
pub struct LoggingGuard {
    _initialized: bool,
}

/// Install the global `tracing` subscriber.
///
/// Fails with [`TelemetryError::LoggingInit`] when a global subscriber is
/// already set, so call it once near process start.
pub fn init_logging(config: &TelemetryConfig) -> Result<LoggingGuard, TelemetryError> {
    let env_filter = EnvFilter::try_new(&config.log_level)
        .map_err(|e| TelemetryError::Config(format!("log level {:?}: {}", config.log_level, e)))?;

    if !config.console_output {
        tracing_subscriber::registry()
            .with(env_filter)
            .try_init()
            .map_err(|e| TelemetryError::LoggingInit(e.to_string()))?;
    } else if config.json_logs {
        let json_layer = tracing_subscriber::fmt::layer()
            .json()
            .with_target(true)
            .with_current_span(true)
            .with_file(true)
            .with_line_number(true);

        tracing_subscriber::registry()
            .with(env_filter)
            .with(json_layer)
            .try_init()
            .map_err(|e| TelemetryError::LoggingInit(e.to_string()))?;
    } else {
        let fmt_layer = tracing_subscriber::fmt::layer()
            .with_target(true)
            .with_thread_ids(false)
            .with_ansi(true);

        tracing_subscriber::registry()
            .with(env_filter)
            .with(fmt_layer)
            .try_init()
            .map_err(|e| TelemetryError::LoggingInit(e.to_string()))?;
    }

    tracing::info!(
        service = %config.service_name,
        json_logs = config.json_logs,
        "Logging initialized"
    );

    Ok(LoggingGuard { _initialized: true })
}

/// Log a voting event with the standard `voter` field rendered as hex.
#[macro_export]
macro_rules! log_voter_event {
    ($level:ident, $msg:expr, $voter:expr $(, $($field:tt)*)?) => {
        tracing::$level!(
            voter = %$crate::hex_address(&$voter),
            $($($field)*,)?
            $msg
        )
    };
}

/// Render an address (or any byte string) as `0x`-prefixed lowercase hex.
pub fn hex_address(bytes: &[u8]) -> String {
    format!("0x{}", hex::encode(bytes))
}
