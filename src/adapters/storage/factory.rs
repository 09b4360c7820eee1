//! Store factory
//!
//! This module provides factory functions to create stores based on configuration.

use crate::adapters::file::{JsonCredentialStore, TomlSettingsStore};
use crate::adapters::memory::{MemoryCredentialStore, MemorySettingsStore};
use crate::adapters::storage::traits::{CredentialStore, SettingsStore};
use crate::config::schema::{ConsoleConfig, StoreBackend};
use std::sync::Arc;

/// Create the settings store named by `settings.store`
pub fn create_settings_store(config: &ConsoleConfig) -> Arc<dyn SettingsStore> {
    match config.settings.store {
        StoreBackend::File => {
            tracing::debug!(path = %config.settings.path, "Using TOML settings file");
            Arc::new(TomlSettingsStore::new(&config.settings.path))
        }
        StoreBackend::Memory => {
            tracing::debug!("Using in-memory settings store");
            Arc::new(MemorySettingsStore::new())
        }
    }
}

/// Create the credential store named by `auth.store`
pub fn create_credential_store(config: &ConsoleConfig) -> Arc<dyn CredentialStore> {
    match config.auth.store {
        StoreBackend::File => {
            tracing::debug!(path = %config.auth.accounts_path, "Using JSON account file");
            Arc::new(JsonCredentialStore::new(&config.auth.accounts_path))
        }
        StoreBackend::Memory => {
            tracing::debug!("Using in-memory account store");
            Arc::new(MemoryCredentialStore::new())
        }
    }
}
