//! CLI interface and argument parsing
//!
//! This module provides the command-line interface for Keeper using clap.

pub mod commands;

use crate::config::{load_config, LoggingConfig};
use clap::{Parser, Subcommand};

/// Level used when neither the flag nor a readable config names one
const FALLBACK_LOG_LEVEL: &str = "warn";

/// Keeper - game server operator console
#[derive(Parser, Debug)]
#[command(name = "keeper")]
#[command(version, about, long_about = None)]
#[command(author = "Keeper Contributors")]
pub struct Cli {
    /// Path to configuration file
    #[arg(short, long, default_value = "keeper.toml", env = "KEEPER_CONFIG")]
    pub config: String,

    /// Log level (trace, debug, info, warn, error)
    #[arg(short, long, env = "KEEPER_LOG_LEVEL")]
    pub log_level: Option<String>,

    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Commands,
}

impl Cli {
    /// Log level and logging settings for this invocation
    ///
    /// A readable config supplies `[application].log_level` and `[logging]`;
    /// `--log-level` wins over the former. Without one (or for `init`, which
    /// writes it) logging stays on the console.
    pub fn logging_settings(&self) -> (String, LoggingConfig) {
        let loaded = match self.command {
            Commands::Init(_) => None,
            _ => load_config(&self.config).ok(),
        };

        match loaded {
            Some(config) => (
                self.log_level.clone().unwrap_or(config.application.log_level),
                config.logging,
            ),
            None => (
                self.log_level
                    .clone()
                    .unwrap_or_else(|| FALLBACK_LOG_LEVEL.to_string()),
                LoggingConfig {
                    local_enabled: false,
                    ..LoggingConfig::default()
                },
            ),
        }
    }
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Initialize a new configuration file
    Init(commands::init::InitArgs),

    /// Validate configuration file
    ValidateConfig(commands::validate::ValidateArgs),

    /// Inspect and change game server settings
    Settings(commands::settings::SettingsArgs),

    /// Manage console accounts
    Auth(commands::auth::AuthArgs),
}
