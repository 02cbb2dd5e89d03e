//! Telemetry configuration from environment variables.

use std::env;

/// Configuration for logging and metrics.
#[derive(Debug, Clone)]
pub struct TelemetryConfig {
    /// Service name attached to every log line
    pub service_name: String,

    /// Log level filter (trace, debug, info, warn, error) or a full `EnvFilter` directive
    pub log_level: String,

    /// Whether to enable console output
    pub console_output: bool,

    /// Whether to enable JSON formatted logs
    pub json_logs: bool,
}

impl Default for TelemetryConfig {
    fn default() -> Self {
        Self {
            service_name: "commit-reveal-voting".to_string(),
            log_level: "info".to_string(),
            console_output: true,
            json_logs: false,
        }
    }
}

impl TelemetryConfig {
    /// Create configuration from environment variables.
    ///
    /// # Environment Variables
    ///
    /// - `CRV_SERVICE_NAME`: Service name (default: commit-reveal-voting)
    /// - `CRV_LOG_LEVEL` or `RUST_LOG`: Log level (default: info)
    /// - `CRV_CONSOLE_OUTPUT`: Enable console output (default: true)
    /// - `CRV_JSON_LOGS`: Enable JSON logs (default: false)
    pub fn from_env() -> Self {
        Self {
            service_name: env::var("CRV_SERVICE_NAME")
                .unwrap_or_else(|_| "commit-reveal-voting".to_string()),

            log_level: env::var("CRV_LOG_LEVEL")
                .or_else(|_| env::var("RUST_LOG"))
                .unwrap_or_else(|_| "info".to_string()),

            console_output: env::var("CRV_CONSOLE_OUTPUT")
                .map(|v| parse_flag(&v, true))
                .unwrap_or(true),

            json_logs: env::var("CRV_JSON_LOGS")
                .map(|v| parse_flag(&v, false))
                .unwrap_or(false),
        }
    }

    /// Configuration suited to tests: debug level, no JSON.
    pub fn for_testing() -> Self {
        Self {
            log_level: "debug".to_string(),
            ..Self::default()
        }
    }
}

/// Interpret a boolean-ish environment value, keeping `default` for anything unrecognized.
fn parse_flag(value: &str, default: bool) -> bool {
    match value.trim().to_lowercase().as_str() {
        "true" | "1" | "yes" | "on" => true,
        "false" | "0" | "no" | "off" => false,
        _ => default,
    }
}
