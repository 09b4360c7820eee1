//! Storage abstraction layer
//!
//! This module provides the trait-based abstraction over where setting
//! values and credentials live, plus factories that build the stores named
//! by the console configuration.

pub mod factory;
pub mod traits;

pub use factory::{create_credential_store, create_settings_store};
pub use traits::{CredentialStore, SettingsStore};
