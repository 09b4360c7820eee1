//! Domain error types
//!
//! This module defines the error hierarchy for Keeper.
//! All errors are domain-specific and don't expose third-party types.

use thiserror::Error;

/// Main Keeper error type
///
/// This is the primary error type used throughout the library.
/// Conversion failures are local to one key and are reported per key by the
/// batch operations rather than aborting them.
#[derive(Debug, Error)]
pub enum ConsoleError {
    /// Text does not match the grammar of the target value kind
    #[error("Cannot convert '{text}' to {kind} for setting '{key}'")]
    Conversion {
        /// Setting key (empty when converting outside a registry)
        key: String,
        /// Name of the target value kind
        kind: String,
        /// The rejected text
        text: String,
    },

    /// Unknown setting key or section
    #[error("Not found: {0}")]
    NotFound(String),

    /// Write attempted on a read-only setting
    #[error("Setting '{0}' is read-only")]
    ReadOnly(String),

    /// External settings store unreadable or unwritable
    #[error("Persistence error: {0}")]
    Persistence(String),

    /// Console configuration errors
    #[error("Configuration error: {0}")]
    Configuration(String),

    /// Authentication errors
    #[error("Authentication error: {0}")]
    Auth(#[from] AuthError),

    /// Serialization/deserialization errors
    #[error("Serialization error: {0}")]
    Serialization(String),

    /// I/O errors
    #[error("I/O error: {0}")]
    Io(String),
}

impl ConsoleError {
    /// Conversion failure for a value that is not bound to a setting yet
    pub fn conversion(kind: impl Into<String>, text: impl Into<String>) -> Self {
        ConsoleError::Conversion {
            key: String::new(),
            kind: kind.into(),
            text: text.into(),
        }
    }

    /// Attaches the setting key to a conversion failure
    pub fn for_key(self, key: &str) -> Self {
        match self {
            ConsoleError::Conversion { kind, text, .. } => ConsoleError::Conversion {
                key: key.to_string(),
                kind,
                text,
            },
            other => other,
        }
    }
}

/// Credential verification errors
///
/// `NotFound` and `InvalidCredential` share one message so that callers
/// cannot use the text to enumerate identifiers.
#[derive(Debug, Error)]
pub enum AuthError {
    /// Identifier or secret was empty
    #[error("Identifier and secret are required")]
    EmptyInput,

    /// No credential registered for the identifier
    #[error("Invalid identifier or secret")]
    NotFound,

    /// Secret did not match any stored hash
    #[error("Invalid identifier or secret")]
    InvalidCredential,

    /// Secret matched but the access level is below the required one
    #[error("Insufficient access: {actual} is below {required}")]
    InsufficientAccess {
        /// Level held by the account
        actual: String,
        /// Level required by the operation
        required: String,
    },

    /// Credential already registered (bootstrap only)
    #[error("Credential already exists: {0}")]
    AlreadyExists(String),

    /// Credential store failure
    #[error("Credential store error: {0}")]
    Store(String),
}

// Conversion from std::io::Error
impl From<std::io::Error> for ConsoleError {
    fn from(err: std::io::Error) -> Self {
        ConsoleError::Io(err.to_string())
    }
}

// Conversion from serde_json::Error
impl From<serde_json::Error> for ConsoleError {
    fn from(err: serde_json::Error) -> Self {
        ConsoleError::Serialization(err.to_string())
    }
}

// Conversion from toml parse errors
impl From<toml::de::Error> for ConsoleError {
    fn from(err: toml::de::Error) -> Self {
        ConsoleError::Configuration(format!("TOML parse error: {err}"))
    }
}
