//! Auth command implementation
//!
//! Manages console accounts in the configured account store. Secrets are
//! read from the command line or the environment and wrapped immediately.

use super::{open_verifier, EXIT_CONFIG, EXIT_FATAL, EXIT_OK, EXIT_REJECTED};
use crate::adapters::storage::create_credential_store;
use crate::config::{load_config, secret_string, SecretString};
use crate::core::auth::DEFAULT_BOOTSTRAP_SECRET;
use crate::domain::{AccessLevel, AuthError};
use clap::{Args, Subcommand};

/// Arguments for the auth command
#[derive(Args, Debug)]
pub struct AuthArgs {
    #[command(subcommand)]
    pub action: AuthAction,
}

/// Account operations
#[derive(Subcommand, Debug)]
pub enum AuthAction {
    /// Check an identifier and secret the way the console sign-in does
    Verify {
        /// Account identifier (email)
        identifier: String,

        /// Account secret
        #[arg(long, env = "KEEPER_SECRET", hide_env_values = true)]
        secret: String,
    },

    /// Create the reserved super admin account if it does not exist
    Bootstrap {
        /// Secret for the new account; falls back to auth.bootstrap_secret
        #[arg(long, env = "KEEPER_BOOTSTRAP_SECRET", hide_env_values = true)]
        secret: Option<String>,
    },

    /// Change an account's access level
    Grant {
        /// Account identifier (email)
        identifier: String,

        /// New level: guest, admin, supervisor or superadmin
        level: AccessLevel,
    },

    /// List accounts and their access levels
    List,
}

impl AuthArgs {
    /// Execute the auth command
    pub fn execute(&self, config_path: &str) -> anyhow::Result<i32> {
        let config = match load_config(config_path) {
            Ok(c) => c,
            Err(e) => {
                println!("❌ Failed to load configuration file");
                println!("   Error: {e}");
                return Ok(EXIT_CONFIG);
            }
        };
        let verifier = open_verifier(&config);

        match &self.action {
            AuthAction::Verify { identifier, secret } => {
                let secret = secret_string(secret.clone());
                match verifier.verify(identifier, &secret) {
                    Ok(principal) => {
                        println!(
                            "✅ Verified {} ({})",
                            principal.identifier, principal.access_level
                        );
                        Ok(EXIT_OK)
                    }
                    Err(AuthError::Store(e)) => {
                        println!("❌ Account store error: {e}");
                        Ok(EXIT_FATAL)
                    }
                    Err(e) => {
                        println!("❌ {e}");
                        Ok(EXIT_REJECTED)
                    }
                }
            }

            AuthAction::Bootstrap { secret } => {
                let secret: SecretString = match (secret, &config.auth.bootstrap_secret) {
                    (Some(s), _) => secret_string(s.clone()),
                    (None, Some(configured)) => configured.clone(),
                    (None, None) => {
                        println!("⚠️  No bootstrap secret configured, using the default");
                        secret_string(DEFAULT_BOOTSTRAP_SECRET.to_string())
                    }
                };

                match verifier.bootstrap_default_principal(&secret) {
                    Ok(principal) => {
                        println!(
                            "✅ Created {} ({})",
                            principal.identifier, principal.access_level
                        );
                        Ok(EXIT_OK)
                    }
                    Err(AuthError::AlreadyExists(identifier)) => {
                        println!("ℹ️  Account already exists: {identifier}");
                        Ok(EXIT_REJECTED)
                    }
                    Err(e) => {
                        println!("❌ Bootstrap failed: {e}");
                        Ok(EXIT_FATAL)
                    }
                }
            }

            AuthAction::Grant { identifier, level } => {
                match verifier.set_access_level(identifier, *level) {
                    Ok(previous) => {
                        println!("✅ {identifier}: {previous} -> {level}");
                        Ok(EXIT_OK)
                    }
                    Err(AuthError::NotFound) => {
                        println!("❌ Unknown account: {identifier}");
                        Ok(EXIT_REJECTED)
                    }
                    Err(e) => {
                        println!("❌ Grant failed: {e}");
                        Ok(EXIT_FATAL)
                    }
                }
            }

            AuthAction::List => {
                let credentials = create_credential_store(&config).list()?;
                if credentials.is_empty() {
                    println!("No accounts found.");
                    println!("Run 'keeper auth bootstrap' to create the first one.");
                    return Ok(EXIT_OK);
                }
                println!("{:<40} {:<12} SCHEMES", "IDENTIFIER", "LEVEL");
                for credential in &credentials {
                    let schemes: Vec<String> = credential
                        .hashes
                        .iter()
                        .map(|h| h.scheme.to_string())
                        .collect();
                    println!(
                        "{:<40} {:<12} {}",
                        credential.identifier,
                        credential.access_level.to_string(),
                        schemes.join(", ")
                    );
                }
                Ok(EXIT_OK)
            }
        }
    }
}
