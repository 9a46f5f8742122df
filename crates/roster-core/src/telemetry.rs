//! Tracing setup for the data-access layer.
//!
//! Provides the logging configuration struct and, behind the
//! `telemetry` feature, a `tracing-subscriber` initializer with
//! env-filter support and optional JSON output.

use serde::{Deserialize, Serialize};

#[cfg(feature = "telemetry")]
use crate::RosterResult;

/// Logging configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Log level filter (e.g. "info", "roster_dao=debug").
    #[serde(default = "default_level")]
    pub level: String,

    /// Emit structured JSON instead of human-readable output.
    #[serde(default)]
    pub json: bool,
}

fn default_level() -> String {
    "info".to_string()
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_level(),
            json: false,
        }
    }
}

/// Initializes the global tracing subscriber.
///
/// The `RUST_LOG` environment variable takes precedence over the
/// configured level. Returns an error if a subscriber is already set.
#[cfg(feature = "telemetry")]
pub fn init_tracing(config: &LoggingConfig) -> RosterResult<()> {
    use crate::RosterError;
    use tracing_subscriber::{fmt, EnvFilter};

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(config.level.clone()));

    let result = if config.json {
        fmt().with_env_filter(filter).json().try_init()
    } else {
        fmt().with_env_filter(filter).try_init()
    };

    result.map_err(|e| RosterError::Configuration(format!("Failed to init tracing: {}", e)))
}
