//! CLI command implementations
//!
//! This module contains all CLI command implementations.

pub mod auth;
pub mod init;
pub mod settings;
pub mod validate;

use crate::adapters::storage::{create_credential_store, create_settings_store};
use crate::config::ConsoleConfig;
use crate::core::auth::CredentialVerifier;
use crate::core::persistence::SettingsPersistence;
use crate::core::registry::SettingRegistry;

/// Exit code for success
pub const EXIT_OK: i32 = 0;
/// Exit code for a partial batch or a rejected credential
pub const EXIT_REJECTED: i32 = 1;
/// Exit code for configuration errors
pub const EXIT_CONFIG: i32 = 2;
/// Exit code for fatal errors
pub const EXIT_FATAL: i32 = 5;

/// Builds the server registry and loads the stored settings over its defaults
///
/// A store with nothing written yet leaves every default in place.
pub(crate) fn open_settings(
    config: &ConsoleConfig,
) -> crate::domain::Result<(SettingRegistry, SettingsPersistence)> {
    let registry = SettingRegistry::server()?;
    let persistence = SettingsPersistence::new(create_settings_store(config));

    if persistence.has_stored() {
        persistence.load(&registry)?;
    } else {
        tracing::info!(location = %persistence.location(), "No stored settings yet, using defaults");
    }
    Ok((registry, persistence))
}

/// Builds a verifier over the configured account store
pub(crate) fn open_verifier(config: &ConsoleConfig) -> CredentialVerifier {
    CredentialVerifier::new(
        create_credential_store(config),
        &config.auth.reserved_identifier,
    )
    .with_console_level(config.auth.console_access_level)
}
