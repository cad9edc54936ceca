//! CLI command implementations
//!
//! Both commands load the config first, install logging, and only then touch
//! the database.

use std::path::Path;

use serde_json::json;
use tracing::info;

use crate::app::{SeedData, TriviaApp};
use crate::config::AppConfig;
use crate::observability::init_logging;

use super::args::{Cli, Command};
use super::errors::{CliError, CliResult};

/// Main CLI entry point
///
/// Parses arguments and dispatches to the appropriate command.
/// This is the only function that main.rs should call.
pub fn run() -> CliResult<()> {
    let cli = Cli::parse_args();
    run_command(cli.command)
}

/// Run the appropriate command based on CLI args
pub fn run_command(cmd: Command) -> CliResult<()> {
    match cmd {
        Command::Init { config, seed } => {
            let config = AppConfig::load(&config)?;
            init_logging(&config.logging)?;
            init(&config, seed.as_deref())
        }
        Command::Serve { config, port } => {
            let config = AppConfig::load(&config)?;
            init_logging(&config.logging)?;
            serve(config, port)
        }
    }
}

/// Create the schema in the configured database and load optional seed data
pub fn init(config: &AppConfig, seed: Option<&Path>) -> CliResult<()> {
    let app = TriviaApp::open(config.clone())?;

    let seeded = match seed {
        Some(path) => {
            let data = SeedData::load(path)?;
            let ids = data.apply(app.store().as_ref())?;
            json!({"categories": data.categories.len(), "questions": ids.len()})
        }
        None => json!(null),
    };

    app.close()?;

    println!(
        "{}",
        json!({"initialized": true, "database": config.database_path, "seeded": seeded})
    );
    Ok(())
}

/// Run the HTTP API until Ctrl-C
pub fn serve(mut config: AppConfig, port: Option<u16>) -> CliResult<()> {
    if let Some(port) = port {
        config.server.port = port;
        config.validate()?;
    }

    let rt = tokio::runtime::Runtime::new()
        .map_err(|e| CliError::boot_failed(format!("Failed to create tokio runtime: {}", e)))?;

    let app = TriviaApp::open(config)?;
    info!(
        host = %app.config().server.host,
        port = app.config().server.port,
        "Starting trivia API"
    );

    let served = rt.block_on(app.serve());
    app.close()?;
    served?;

    Ok(())
}
