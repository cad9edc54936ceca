//! CLI-specific error types
//!
//! Every CLI error is fatal: it is printed to stderr and the process exits
//! non-zero.

use thiserror::Error;

use crate::app::AppError;
use crate::config::ConfigError;
use crate::observability::ObservabilityError;

/// CLI error
#[derive(Debug, Error)]
pub enum CliError {
    #[error("TRIVIA_CLI_CONFIG_ERROR: {0}")]
    Config(#[from] ConfigError),

    #[error("TRIVIA_CLI_LOGGING_ERROR: {0}")]
    Logging(#[from] ObservabilityError),

    #[error("TRIVIA_CLI_APP_ERROR: {0}")]
    App(#[from] AppError),

    #[error("TRIVIA_CLI_BOOT_FAILED: {0}")]
    BootFailed(String),
}

impl CliError {
    const CONFIG: &'static str = "TRIVIA_CLI_CONFIG_ERROR";
    const LOGGING: &'static str = "TRIVIA_CLI_LOGGING_ERROR";
    const APP: &'static str = "TRIVIA_CLI_APP_ERROR";
    const BOOT: &'static str = "TRIVIA_CLI_BOOT_FAILED";

    pub fn boot_failed(msg: impl Into<String>) -> Self {
        Self::BootFailed(msg.into())
    }

    /// Get the error code string
    pub fn code_str(&self) -> &'static str {
        match self {
            Self::Config(_) => Self::CONFIG,
            Self::Logging(_) => Self::LOGGING,
            Self::App(_) => Self::APP,
            Self::BootFailed(_) => Self::BOOT,
        }
    }
}

/// CLI result type
pub type CliResult<T> = Result<T, CliError>;
