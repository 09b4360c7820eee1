//! Validate config command implementation
//!
//! This module implements the `validate-config` command for validating
//! the Keeper configuration file.

use super::{EXIT_CONFIG, EXIT_OK};
use crate::config::load_config;
use crate::core::registry::SettingRegistry;
use clap::Args;

/// Arguments for the validate-config command
#[derive(Args, Debug)]
pub struct ValidateArgs {}

impl ValidateArgs {
    /// Execute the validate-config command
    pub fn execute(&self, config_path: &str) -> anyhow::Result<i32> {
        tracing::info!(config_path = %config_path, "Validating configuration");

        println!("🔍 Validating configuration file: {config_path}");
        println!();

        // Loading also validates
        let config = match load_config(config_path) {
            Ok(c) => {
                println!("✅ Configuration is valid");
                c
            }
            Err(e) => {
                println!("❌ Failed to load configuration file");
                println!("   Error: {e}");
                return Ok(EXIT_CONFIG);
            }
        };

        let registry = match SettingRegistry::server() {
            Ok(r) => r,
            Err(e) => {
                println!("❌ Built-in settings table is invalid");
                println!("   Error: {e}");
                return Ok(EXIT_CONFIG);
            }
        };

        println!();
        println!("Configuration Summary:");
        println!("  Log Level: {}", config.application.log_level);
        println!("  Settings Store: {:?}", config.settings.store);
        println!("  Settings File: {}", config.settings.path);
        println!("  Known Sections: {}", registry.section_names().join(", "));
        println!("  Account Store: {:?}", config.auth.store);
        println!("  Account File: {}", config.auth.accounts_path);
        println!("  Reserved Account: {}", config.auth.reserved_identifier);
        println!("  Console Access Level: {}", config.auth.console_access_level);
        println!(
            "  Bootstrap Secret: {}",
            if config.auth.bootstrap_secret.is_some() {
                "configured"
            } else {
                "not set (default will be used)"
            }
        );
        println!(
            "  File Logging: {}",
            if config.logging.local_enabled {
                format!("{} ({})", config.logging.local_path, config.logging.local_rotation)
            } else {
                "disabled".to_string()
            }
        );
        println!();
        Ok(EXIT_OK)
    }
}
