//! Observability for the trivia service
//!
//! Structured logging through `tracing`. The subscriber is installed once at
//! process start by the CLI; library code only emits events.
//!
//! Level selection: `RUST_LOG` wins when set, otherwise `logging.level` from
//! the config file.

use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Logging configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Filter directive (default: "info")
    #[serde(default = "default_level")]
    pub level: String,

    /// Emit one JSON object per line instead of human-readable output
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

impl LoggingConfig {
    /// Build the level filter this config describes
    pub fn env_filter(&self) -> Result<EnvFilter, ObservabilityError> {
        EnvFilter::try_from_default_env()
            .or_else(|_| EnvFilter::try_new(&self.level))
            .map_err(|e| ObservabilityError::InvalidFilter(e.to_string()))
    }
}

/// Observability setup failures
#[derive(Debug, Error)]
pub enum ObservabilityError {
    #[error("Invalid log filter: {0}")]
    InvalidFilter(String),

    #[error("Failed to install log subscriber: {0}")]
    Install(String),
}

/// Install the global subscriber
pub fn init_logging(config: &LoggingConfig) -> Result<(), ObservabilityError> {
    let filter = config.env_filter()?;

    if config.json {
        tracing_subscriber::registry()
            .with(filter)
            .with(tracing_subscriber::fmt::layer().json().with_target(true))
            .try_init()
            .map_err(|e| ObservabilityError::Install(e.to_string()))
    } else {
        tracing_subscriber::registry()
            .with(filter)
            .with(tracing_subscriber::fmt::layer().with_target(true))
            .try_init()
            .map_err(|e| ObservabilityError::Install(e.to_string()))
    }
}
