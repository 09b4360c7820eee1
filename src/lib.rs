// Keeper - Game Server Operator Console
// Copyright (c) 2025 Keeper Contributors
// Licensed under the MIT License

//! # Keeper - Operator Console Core for a Live Game Server
//!
//! Keeper holds the parts of a game server's operator console that need
//! more than CRUD glue: a typed runtime settings registry that can be edited,
//! saved and reloaded while the server runs, and an administrator credential
//! verifier that accepts two successive password-hashing schemes.
//!
//! ## Architecture
//!
//! - [`cli`] - Command-line interface and argument parsing
//! - [`core`] - Business logic (coercion, registry, persistence, auth)
//! - [`adapters`] - Settings and credential stores, game server access
//! - [`domain`] - Core domain types and errors
//! - [`config`] - Configuration management
//! - [`logging`] - Structured logging and observability
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use keeper::adapters::file::TomlSettingsStore;
//! use keeper::core::persistence::SettingsPersistence;
//! use keeper::core::registry::SettingRegistry;
//! use std::sync::Arc;
//!
//! fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let registry = SettingRegistry::server()?;
//!     let persistence =
//!         SettingsPersistence::new(Arc::new(TomlSettingsStore::new("settings.toml")));
//!
//!     // Pull stored values over the defaults
//!     persistence.load(&registry)?;
//!
//!     let outcome = registry.update_many([("MaxLevel", "70"), ("RelogDelay", "90")]);
//!     println!("{outcome}");
//!
//!     if outcome.all_ok() {
//!         persistence.save(&registry)?;
//!     }
//!     Ok(())
//! }
//! ```
//!
//! ## Credential Verification
//!
//! ```rust,no_run
//! use keeper::adapters::memory::MemoryCredentialStore;
//! use keeper::config::secret_string;
//! use keeper::core::auth::CredentialVerifier;
//! use std::sync::Arc;
//!
//! # fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let verifier = CredentialVerifier::new(Arc::new(MemoryCredentialStore::new()), "admin@keeper.local");
//! verifier.bootstrap_default_principal(&secret_string("change-me".to_string()))?;
//!
//! let principal = verifier.verify("admin@keeper.local", &secret_string("change-me".to_string()))?;
//! println!("{} signed in as {}", principal.identifier, principal.access_level);
//! # Ok(())
//! # }
//! ```
//!
//! ## Error Handling
//!
//! Keeper uses the [`domain::ConsoleError`] type for all library errors.
//! Authentication failures are [`domain::AuthError`] and convert into it:
//!
//! ```rust,no_run
//! use keeper::domain::ConsoleError;
//!
//! fn example() -> Result<(), ConsoleError> {
//!     // Reading, parsing and validation failures all surface as ConsoleError
//!     let config = keeper::config::load_config("keeper.toml")?;
//!     println!("Settings file: {}", config.settings.path);
//!     Ok(())
//! }
//! ```

pub mod adapters;
pub mod cli;
pub mod config;
pub mod core;
pub mod domain;
pub mod logging;
