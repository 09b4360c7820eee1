//! Console authentication
//!
//! Credentials carry tagged hashes from two schemes. Verification tries the
//! current scheme first and falls back to the legacy one, then requires the
//! console access level.
//!
//! - [`hash`] - PBKDF2 hashing primitive shared by both schemes
//! - [`credential`] - Stored credential records
//! - [`verifier`] - [`CredentialVerifier`]

pub mod credential;
pub mod hash;
pub mod verifier;

pub use credential::{Credential, HashScheme, PasswordHash};
pub use verifier::{CredentialVerifier, DEFAULT_BOOTSTRAP_SECRET, DEFAULT_CONSOLE_LEVEL};
