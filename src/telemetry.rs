//! Tracing subscriber setup.

use thiserror::Error;

use crate::config::TelemetryConfig;

#[derive(Debug, Error)]
pub enum TelemetryError {
    #[error("invalid log level/filter '{0}'")]
    EnvFilter(String),

    #[error("telemetry error: {0}")]
    Subscriber(String),
}

/// Installs the global subscriber. `RUST_LOG` overrides the configured filter.
///
/// Logs go to stderr so command output on stdout stays machine-readable.
pub fn init(config: &TelemetryConfig) -> Result<(), TelemetryError> {
    let env_filter = match tracing_subscriber::EnvFilter::try_from_default_env() {
        Ok(filter) => filter,
        Err(_) => config
            .env_filter()
            .map_err(|_| TelemetryError::EnvFilter(config.log_level.clone()))?,
    };

    let builder = tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .with_target(false);

    let result = if config.json {
        builder.json().try_init()
    } else {
        builder.compact().with_ansi(false).try_init()
    };

    result.map_err(|e| TelemetryError::Subscriber(e.to_string()))
}
