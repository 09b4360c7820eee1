//! Init command implementation
//!
//! This module implements the `init` command for generating a sample
//! configuration file.

use super::{EXIT_CONFIG, EXIT_FATAL, EXIT_OK};
use clap::Args;
use std::fs;
use std::path::Path;

/// Arguments for the init command
#[derive(Args, Debug)]
pub struct InitArgs {
    /// Path where to create the configuration file
    #[arg(short, long, default_value = "keeper.toml")]
    pub output: String,

    /// Include example values and comments
    #[arg(long)]
    pub with_examples: bool,

    /// Overwrite existing file
    #[arg(long)]
    pub force: bool,
}

impl InitArgs {
    /// Execute the init command
    pub fn execute(&self) -> anyhow::Result<i32> {
        tracing::info!(output = %self.output, "Initializing configuration file");

        println!("📝 Initializing Keeper configuration");
        println!();

        if Path::new(&self.output).exists() && !self.force {
            println!("❌ Configuration file already exists: {}", self.output);
            println!("   Use --force to overwrite");
            return Ok(EXIT_CONFIG);
        }

        let config_content = if self.with_examples {
            Self::generate_config_with_examples()
        } else {
            Self::generate_minimal_config()
        };

        match fs::write(&self.output, config_content) {
            Ok(_) => {
                println!("✅ Configuration file created: {}", self.output);
                println!();
                println!("Next steps:");
                println!("  1. Edit {} with your settings", self.output);
                println!("  2. Set KEEPER_AUTH_BOOTSTRAP_SECRET in a .env file");
                println!("  3. Validate configuration: keeper validate-config");
                println!("  4. Create the first account: keeper auth bootstrap");
                println!();
                Ok(EXIT_OK)
            }
            Err(e) => {
                println!("❌ Failed to write configuration file");
                println!("   Error: {e}");
                Ok(EXIT_FATAL)
            }
        }
    }

    /// Generate minimal configuration
    fn generate_minimal_config() -> String {
        r#"# Keeper Configuration File
# Game server operator console

[application]
log_level = "info"

[settings]
store = "file"
path = "./keeper-settings.toml"

[auth]
store = "file"
accounts_path = "./keeper-accounts.json"
reserved_identifier = "admin@keeper.local"
console_access_level = "supervisor"

[logging]
local_enabled = true
local_path = "./logs"
local_rotation = "daily"
"#
        .to_string()
    }

    /// Generate configuration with examples and comments
    fn generate_config_with_examples() -> String {
        r#"# Keeper Configuration File
# Game server operator console
#
# Values may reference environment variables with ${VAR}. Any key can also
# be overridden with KEEPER_<SECTION>_<KEY>, e.g. KEEPER_SETTINGS_PATH.

# ============================================================================
# Application Settings
# ============================================================================
[application]
# Log level (trace, debug, info, warn, error)
log_level = "info"

# ============================================================================
# Game Server Settings File
# ============================================================================
[settings]
# Where settings are stored: "file" or "memory"
# - file: TOML file on local disk, written atomically
# - memory: nothing survives a restart (testing only)
store = "file"

# Path of the TOML settings file
path = "./keeper-settings.toml"

# ============================================================================
# Console Accounts
# ============================================================================
[auth]
# Where accounts are stored: "file" or "memory"
store = "file"

# Path of the JSON account file
accounts_path = "./keeper-accounts.json"

# Identifier of the super admin account created by `keeper auth bootstrap`
reserved_identifier = "admin@keeper.local"

# Secret of the bootstrapped account (use an environment variable, or set
# KEEPER_AUTH_BOOTSTRAP_SECRET). Without it the well-known default secret is
# used; change it immediately.
# bootstrap_secret = "${KEEPER_BOOTSTRAP_SECRET}"

# Lowest level allowed to sign in: admin, supervisor or superadmin
console_access_level = "supervisor"

# ============================================================================
# Logging Configuration
# ============================================================================
[logging]
# Enable local JSON file logging
local_enabled = true

# Local log directory
local_path = "./logs"

# Log rotation (daily, hourly or never)
local_rotation = "daily"
"#
        .to_string()
    }
}
