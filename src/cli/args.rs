//! CLI argument definitions using clap
//!
//! Commands:
//! - trivia init --config <path> [--seed <file>]
//! - trivia serve --config <path> [--port <port>]

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Trivia API - categories, questions and quizzes over HTTP
#[derive(Parser, Debug)]
#[command(name = "trivia")]
#[command(version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Create the database schema, optionally loading seed data
    Init {
        /// Path to configuration file
        #[arg(long, default_value = "./trivia.json")]
        config: PathBuf,

        /// JSON file of categories and questions to load
        #[arg(long)]
        seed: Option<PathBuf>,
    },

    /// Start the HTTP API
    Serve {
        /// Path to configuration file
        #[arg(long, default_value = "./trivia.json")]
        config: PathBuf,

        /// Listen port, overriding the config file
        #[arg(long)]
        port: Option<u16>,
    },
}

impl Cli {
    /// Parse command line arguments
    pub fn parse_args() -> Self {
        Cli::parse()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_serve_defaults() {
        let cli = Cli::try_parse_from(["trivia", "serve"]).unwrap();
        match cli.command {
            Command::Serve { config, port } => {
                assert_eq!(config, PathBuf::from("./trivia.json"));
                assert_eq!(port, None);
            }
            other => panic!("unexpected command: {:?}", other),
        }
    }

    #[test]
    fn test_init_with_seed() {
        let cli = Cli::try_parse_from([
            "trivia", "init", "--config", "/etc/trivia.json", "--seed", "seed.json",
        ])
        .unwrap();
        match cli.command {
            Command::Init { config, seed } => {
                assert_eq!(config, PathBuf::from("/etc/trivia.json"));
                assert_eq!(seed, Some(PathBuf::from("seed.json")));
            }
            other => panic!("unexpected command: {:?}", other),
        }
    }
}
