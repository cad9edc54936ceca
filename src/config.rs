//! Service configuration
//!
//! Loaded from a JSON file at startup and passed explicitly to the
//! components that need it. Every field has a default, so an absent file or
//! an empty object yields a working configuration.
//!
//! ```json
//! {
//!   "database_path": "./trivia.db",
//!   "server": { "host": "0.0.0.0", "port": 5000, "cors_origins": [] },
//!   "page_boundary": "full_pages_only",
//!   "quiz_seed": null,
//!   "logging": { "level": "info", "json": false }
//! }
//! ```

use std::fs;
use std::net::SocketAddr;
use std::path::{Path, PathBuf};

use axum::http::HeaderValue;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::engine::PageBoundary;
use crate::observability::LoggingConfig;

/// Configuration errors
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config {path}: {source}")]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Invalid config JSON: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("Invalid config: {0}")]
    Invalid(String),
}

/// HTTP listener settings
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ServerConfig {
    #[serde(default = "default_host")]
    pub host: String,

    #[serde(default = "default_port")]
    pub port: u16,

    /// Allowed CORS origins; empty allows any origin
    #[serde(default)]
    pub cors_origins: Vec<String>,
}

fn default_host() -> String {
    "0.0.0.0".to_string()
}

fn default_port() -> u16 {
    5000
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
            cors_origins: Vec::new(),
        }
    }
}

impl ServerConfig {
    /// Parsed listen address
    pub fn socket_addr(&self) -> Result<SocketAddr, ConfigError> {
        format!("{}:{}", self.host, self.port)
            .parse()
            .map_err(|e| ConfigError::Invalid(format!("bad listen address: {e}")))
    }

    /// Parsed CORS origins
    pub fn origin_headers(&self) -> Result<Vec<HeaderValue>, ConfigError> {
        self.cors_origins
            .iter()
            .map(|origin| {
                HeaderValue::from_str(origin)
                    .map_err(|_| ConfigError::Invalid(format!("bad CORS origin: {origin}")))
            })
            .collect()
    }
}

/// Top-level service configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AppConfig {
    /// SQLite database file
    #[serde(default = "default_database_path")]
    pub database_path: String,

    #[serde(default)]
    pub server: ServerConfig,

    /// Which page numbers the question listing accepts
    #[serde(default)]
    pub page_boundary: PageBoundary,

    /// Fixed seed for quiz selection; entropy when absent
    #[serde(default)]
    pub quiz_seed: Option<u64>,

    #[serde(default)]
    pub logging: LoggingConfig,
}

fn default_database_path() -> String {
    "./trivia.db".to_string()
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            database_path: default_database_path(),
            server: ServerConfig::default(),
            page_boundary: PageBoundary::default(),
            quiz_seed: None,
            logging: LoggingConfig::default(),
        }
    }
}

impl AppConfig {
    /// Load and validate a config file. A missing file yields the defaults.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        if !path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_json(&content)
    }

    /// Parse and validate a config document
    pub fn from_json(content: &str) -> Result<Self, ConfigError> {
        let config: AppConfig = serde_json::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.database_path.trim().is_empty() {
            return Err(ConfigError::Invalid("database_path must not be empty".into()));
        }
        if self.server.port == 0 {
            return Err(ConfigError::Invalid("server.port must be > 0".into()));
        }
        self.server.socket_addr()?;
        self.server.origin_headers()?;
        Ok(())
    }

    pub fn database_path(&self) -> &Path {
        Path::new(&self.database_path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_object_gives_defaults() {
        let config = AppConfig::from_json("{}").unwrap();
        assert_eq!(config, AppConfig::default());
        assert_eq!(config.server.port, 5000);
        assert_eq!(config.page_boundary, PageBoundary::FullPagesOnly);
        assert_eq!(config.quiz_seed, None);
    }

    #[test]
    fn test_full_config() {
        let config = AppConfig::from_json(
            r#"{
                "database_path": "/var/lib/trivia.db",
                "server": {"host": "127.0.0.1", "port": 8080, "cors_origins": ["http://localhost:3000"]},
                "page_boundary": "any_non_empty_page",
                "quiz_seed": 42,
                "logging": {"level": "debug", "json": true}
            }"#,
        )
        .unwrap();

        assert_eq!(config.database_path(), Path::new("/var/lib/trivia.db"));
        assert_eq!(config.server.socket_addr().unwrap().port(), 8080);
        assert_eq!(config.page_boundary, PageBoundary::AnyNonEmptyPage);
        assert_eq!(config.quiz_seed, Some(42));
        assert!(config.logging.json);
    }

    #[test]
    fn test_rejects_zero_port() {
        let err = AppConfig::from_json(r#"{"server": {"port": 0}}"#).unwrap_err();
        assert!(matches!(err, ConfigError::Invalid(_)));
    }

    #[test]
    fn test_rejects_empty_database_path() {
        let err = AppConfig::from_json(r#"{"database_path": " "}"#).unwrap_err();
        assert!(matches!(err, ConfigError::Invalid(_)));
    }

    #[test]
    fn test_rejects_unknown_boundary() {
        let err = AppConfig::from_json(r#"{"page_boundary": "sometimes"}"#).unwrap_err();
        assert!(matches!(err, ConfigError::Parse(_)));
    }

    #[test]
    fn test_missing_file_gives_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let config = AppConfig::load(&dir.path().join("absent.json")).unwrap();
        assert_eq!(config, AppConfig::default());
    }
}
