//! Storage abstraction traits
//!
//! This module defines the traits that storage adapters must implement
//! to back the settings registry and the credential verifier.

use crate::core::auth::Credential;
use crate::core::persistence::{SettingsDocument, StoreReceipt};
use crate::domain::{AccessLevel, AuthError, Result};

/// External store of setting values
///
/// Implementations must make `write` replace the stored document as a
/// whole, so a concurrent or later `read` never sees a half-written one.
pub trait SettingsStore: Send + Sync {
    /// Human-readable location used in logs and errors
    fn location(&self) -> String;

    /// Whether a document has been stored yet
    fn exists(&self) -> bool;

    /// Reads the stored document
    ///
    /// # Errors
    ///
    /// Returns [`crate::domain::ConsoleError::Persistence`] when nothing is
    /// stored or the stored text cannot be parsed.
    fn read(&self) -> Result<SettingsDocument>;

    /// Replaces the stored document
    ///
    /// # Errors
    ///
    /// Returns [`crate::domain::ConsoleError::Persistence`] when the write
    /// fails.
    fn write(&self, document: &SettingsDocument) -> Result<StoreReceipt>;
}

/// Store of console credentials
///
/// Identifiers are unique and matched case-insensitively.
pub trait CredentialStore: Send + Sync {
    /// Finds the credential for `identifier`, ignoring case
    fn find(&self, identifier: &str) -> std::result::Result<Option<Credential>, AuthError>;

    /// Adds a credential
    ///
    /// # Errors
    ///
    /// Returns [`AuthError::AlreadyExists`] when the identifier is taken.
    fn insert(&self, credential: Credential) -> std::result::Result<(), AuthError>;

    /// Sets the access level of an existing credential and returns the old one
    ///
    /// # Errors
    ///
    /// Returns [`AuthError::NotFound`] when the identifier is unknown.
    fn update_access_level(
        &self,
        identifier: &str,
        level: AccessLevel,
    ) -> std::result::Result<AccessLevel, AuthError>;

    /// Every stored credential in insertion order
    fn list(&self) -> std::result::Result<Vec<Credential>, AuthError>;
}
