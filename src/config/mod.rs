//! Configuration management for Keeper.
//!
//! This module provides TOML-based loading, parsing, and validation of the
//! console's own configuration. It is separate from the game server
//! settings the console edits.
//!
//! # Overview
//!
//! Keeper uses TOML configuration files with support for:
//! - Environment variable substitution (`${VAR_NAME}`)
//! - `KEEPER_<SECTION>_<KEY>` environment overrides
//! - Default values for every setting
//! - Validation on load
//!
//! # Configuration Structure
//!
//! - [`ApplicationConfig`] - Log level
//! - [`SettingsConfig`] - Game server settings file
//! - [`AuthConfig`] - Account store, reserved identifier, console access level
//! - [`LoggingConfig`] - Local file logging
//!
//! # Example Configuration
//!
//! ```toml
//! [application]
//! log_level = "info"
//!
//! [settings]
//! path = "/srv/zircon/settings.toml"
//!
//! [auth]
//! accounts_path = "/srv/zircon/accounts.json"
//! reserved_identifier = "admin@zircon.local"
//! bootstrap_secret = "${KEEPER_BOOTSTRAP_SECRET}"
//! console_access_level = "supervisor"
//!
//! [logging]
//! local_enabled = true
//! local_path = "/var/log/keeper"
//! local_rotation = "daily"
//! ```
//!
//! ```rust,no_run
//! use keeper::config::load_config;
//!
//! # fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let config = load_config("keeper.toml")?;
//! println!("Settings file: {}", config.settings.path);
//! # Ok(())
//! # }
//! ```

pub mod loader;
pub mod schema;
pub mod secret;

// Re-export commonly used types
pub use loader::load_config;
pub use schema::{
    ApplicationConfig, AuthConfig, ConsoleConfig, LoggingConfig, SettingsConfig, StoreBackend,
};
pub use secret::{secret_string, SecretString, SecretValue};
