//! Configuration schema types
//!
//! This module defines the configuration structure of the Keeper console.

use crate::config::SecretString;
use crate::domain::AccessLevel;
use serde::{Deserialize, Serialize};

/// Storage backend selection
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum StoreBackend {
    /// Files on local disk
    #[default]
    File,
    /// Process memory, nothing survives a restart
    Memory,
}

/// Main Keeper configuration
///
/// This is the root configuration structure that maps to the TOML file.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct ConsoleConfig {
    /// Application-level settings
    #[serde(default)]
    pub application: ApplicationConfig,

    /// Game server settings file
    #[serde(default)]
    pub settings: SettingsConfig,

    /// Console accounts
    #[serde(default)]
    pub auth: AuthConfig,

    /// Logging configuration
    #[serde(default)]
    pub logging: LoggingConfig,
}

impl ConsoleConfig {
    /// Validates the configuration
    ///
    /// # Errors
    ///
    /// Returns an error if any configuration values are invalid
    pub fn validate(&self) -> Result<(), String> {
        self.application.validate()?;
        self.settings.validate()?;
        self.auth.validate()?;
        self.logging.validate()?;
        Ok(())
    }
}

/// Application-level configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApplicationConfig {
    /// Log level (trace, debug, info, warn, error)
    #[serde(default = "default_log_level")]
    pub log_level: String,
}

impl ApplicationConfig {
    fn validate(&self) -> Result<(), String> {
        let valid_levels = ["trace", "debug", "info", "warn", "error"];
        if !valid_levels.contains(&self.log_level.as_str()) {
            return Err(format!(
                "Invalid log_level '{}'. Must be one of: {}",
                self.log_level,
                valid_levels.join(", ")
            ));
        }
        Ok(())
    }
}

impl Default for ApplicationConfig {
    fn default() -> Self {
        Self {
            log_level: default_log_level(),
        }
    }
}

/// Game server settings file
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SettingsConfig {
    #[serde(default)]
    pub store: StoreBackend,

    /// Path of the TOML settings file
    #[serde(default = "default_settings_path")]
    pub path: String,
}

impl SettingsConfig {
    fn validate(&self) -> Result<(), String> {
        if self.store == StoreBackend::File && self.path.trim().is_empty() {
            return Err("settings.path cannot be empty".to_string());
        }
        Ok(())
    }
}

impl Default for SettingsConfig {
    fn default() -> Self {
        Self {
            store: StoreBackend::File,
            path: default_settings_path(),
        }
    }
}

/// Console account configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AuthConfig {
    #[serde(default)]
    pub store: StoreBackend,

    /// Path of the JSON account file
    #[serde(default = "default_accounts_path")]
    pub accounts_path: String,

    /// Identifier of the bootstrapped super admin account
    #[serde(default = "default_reserved_identifier")]
    pub reserved_identifier: String,

    /// Secret for the bootstrapped account
    /// Stored securely in memory and automatically zeroized on drop
    #[serde(default)]
    pub bootstrap_secret: Option<SecretString>,

    /// Level required to use the console
    #[serde(default = "default_console_access_level")]
    pub console_access_level: AccessLevel,
}

impl AuthConfig {
    fn validate(&self) -> Result<(), String> {
        if self.reserved_identifier.trim().is_empty() {
            return Err("auth.reserved_identifier cannot be empty".to_string());
        }
        if self.store == StoreBackend::File && self.accounts_path.trim().is_empty() {
            return Err("auth.accounts_path cannot be empty".to_string());
        }
        if self.console_access_level == AccessLevel::Guest {
            return Err("auth.console_access_level cannot be guest".to_string());
        }
        Ok(())
    }
}

impl Default for AuthConfig {
    fn default() -> Self {
        Self {
            store: StoreBackend::File,
            accounts_path: default_accounts_path(),
            reserved_identifier: default_reserved_identifier(),
            bootstrap_secret: None,
            console_access_level: default_console_access_level(),
        }
    }
}

/// Logging configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Enable local file logging
    #[serde(default = "default_true")]
    pub local_enabled: bool,

    /// Local log directory
    #[serde(default = "default_local_path")]
    pub local_path: String,

    /// Log rotation strategy
    #[serde(default = "default_local_rotation")]
    pub local_rotation: String,
}

impl LoggingConfig {
    fn validate(&self) -> Result<(), String> {
        let valid_rotations = ["daily", "hourly", "never"];
        if !valid_rotations.contains(&self.local_rotation.as_str()) {
            return Err(format!(
                "Invalid logging.local_rotation '{}'. Must be one of: {}",
                self.local_rotation,
                valid_rotations.join(", ")
            ));
        }
        if self.local_enabled && self.local_path.trim().is_empty() {
            return Err("logging.local_path cannot be empty".to_string());
        }
        Ok(())
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            local_enabled: true,
            local_path: default_local_path(),
            local_rotation: default_local_rotation(),
        }
    }
}

// Default value functions
fn default_log_level() -> String {
    "info".to_string()
}

fn default_settings_path() -> String {
    "./keeper-settings.toml".to_string()
}

fn default_accounts_path() -> String {
    "./keeper-accounts.json".to_string()
}

fn default_reserved_identifier() -> String {
    "admin@keeper.local".to_string()
}

fn default_console_access_level() -> AccessLevel {
    AccessLevel::Supervisor
}

fn default_true() -> bool {
    true
}

fn default_local_path() -> String {
    "./logs".to_string()
}

fn default_local_rotation() -> String {
    "daily".to_string()
}
