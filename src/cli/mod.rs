//! CLI module for the trivia service
//!
//! Provides command-line interface for:
//! - init: Create the database schema and load seed data
//! - serve: Run the HTTP API

mod args;
mod commands;
mod errors;

pub use args::{Cli, Command};
pub use commands::{init, run, run_command, serve};
pub use errors::{CliError, CliResult};
