//! Console credential verification

use super::credential::{Credential, HashScheme};
use super::hash;
use crate::adapters::storage::CredentialStore;
use crate::config::SecretString;
use crate::domain::{AccessLevel, AuthError, Principal};
use secrecy::ExposeSecret;
use std::sync::Arc;

/// Well-known secret of a freshly bootstrapped account, to be changed on first use
pub const DEFAULT_BOOTSTRAP_SECRET: &str = "123456";

/// Level required to enter the console
pub const DEFAULT_CONSOLE_LEVEL: AccessLevel = AccessLevel::Supervisor;

/// Verifies identifier/secret pairs against a credential store
///
/// # Examples
///
/// ```
/// use keeper::adapters::memory::MemoryCredentialStore;
/// use keeper::config::secret_string;
/// use keeper::core::auth::CredentialVerifier;
/// use keeper::domain::AccessLevel;
/// use std::sync::Arc;
///
/// let verifier = CredentialVerifier::new(Arc::new(MemoryCredentialStore::new()), "root@keeper");
/// verifier.bootstrap_default_principal(&secret_string("changeme".into())).unwrap();
///
/// let principal = verifier.verify("ROOT@keeper", &secret_string("changeme".into())).unwrap();
/// assert_eq!(principal.access_level, AccessLevel::SuperAdmin);
/// ```
pub struct CredentialVerifier {
    store: Arc<dyn CredentialStore>,
    reserved_identifier: String,
    console_level: AccessLevel,
}

impl CredentialVerifier {
    pub fn new(store: Arc<dyn CredentialStore>, reserved_identifier: impl Into<String>) -> Self {
        Self {
            store,
            reserved_identifier: reserved_identifier.into(),
            console_level: DEFAULT_CONSOLE_LEVEL,
        }
    }

    /// Overrides the level required by [`Self::verify`]
    pub fn with_console_level(mut self, level: AccessLevel) -> Self {
        self.console_level = level;
        self
    }

    pub fn reserved_identifier(&self) -> &str {
        &self.reserved_identifier
    }

    /// Verifies a submitted pair and requires console access
    ///
    /// The current scheme is tried before the legacy one; a match on either
    /// is enough. Unknown identifiers and wrong secrets produce errors with
    /// the same message, and both cost one key derivation per scheme.
    ///
    /// # Errors
    ///
    /// - [`AuthError::EmptyInput`] for a blank identifier or secret
    /// - [`AuthError::NotFound`] for an unknown identifier
    /// - [`AuthError::InvalidCredential`] when no stored hash matches
    /// - [`AuthError::InsufficientAccess`] when the secret is right but the
    ///   account is below the console level
    pub fn verify(&self, identifier: &str, secret: &SecretString) -> Result<Principal, AuthError> {
        let secret: &str = secret.expose_secret().as_ref();
        if identifier.trim().is_empty() || secret.trim().is_empty() {
            return Err(AuthError::EmptyInput);
        }

        let Some(credential) = self.store.find(identifier)? else {
            for _ in HashScheme::PRIORITY {
                hash::dummy_derivation(secret);
            }
            crate::log_auth_outcome!(identifier, "rejected", "unknown identifier");
            return Err(AuthError::NotFound);
        };

        let Some(scheme) = credential.matching_scheme(secret) else {
            crate::log_auth_outcome!(identifier, "rejected", "secret mismatch");
            return Err(AuthError::InvalidCredential);
        };

        if credential.access_level < self.console_level {
            crate::log_auth_outcome!(identifier, "rejected", "insufficient access");
            return Err(AuthError::InsufficientAccess {
                actual: credential.access_level.to_string(),
                required: self.console_level.to_string(),
            });
        }

        if scheme == HashScheme::Legacy {
            tracing::debug!(identifier = %credential.identifier, "Verified with legacy hash scheme");
        }
        crate::log_auth_outcome!(identifier, "accepted", scheme);
        Ok(Principal::new(credential.identifier, credential.access_level))
    }

    /// Checks that a verified principal holds at least `required`
    pub fn authorize(principal: &Principal, required: AccessLevel) -> Result<(), AuthError> {
        if principal.has_permission(required) {
            Ok(())
        } else {
            Err(AuthError::InsufficientAccess {
                actual: principal.access_level.to_string(),
                required: required.to_string(),
            })
        }
    }

    pub fn default_principal_exists(&self) -> Result<bool, AuthError> {
        Ok(self.store.find(&self.reserved_identifier)?.is_some())
    }

    /// Creates the reserved SuperAdmin account, enrolled under both schemes
    ///
    /// # Errors
    ///
    /// Returns [`AuthError::AlreadyExists`] once the reserved identifier is
    /// registered.
    pub fn bootstrap_default_principal(&self, secret: &SecretString) -> Result<Principal, AuthError> {
        let secret: &str = secret.expose_secret().as_ref();
        if secret.trim().is_empty() {
            return Err(AuthError::EmptyInput);
        }
        if self.default_principal_exists()? {
            return Err(AuthError::AlreadyExists(self.reserved_identifier.clone()));
        }

        let credential = Credential::for_secret(&self.reserved_identifier, secret, AccessLevel::SuperAdmin);
        self.store.insert(credential)?;

        tracing::info!(identifier = %self.reserved_identifier, "Created default super admin account");
        if secret == DEFAULT_BOOTSTRAP_SECRET {
            tracing::warn!("Default account uses the well-known bootstrap secret; change it now");
        }
        Ok(Principal::new(&self.reserved_identifier, AccessLevel::SuperAdmin))
    }

    /// Changes an account's access level and returns the previous one
    pub fn set_access_level(&self, identifier: &str, level: AccessLevel) -> Result<AccessLevel, AuthError> {
        let previous = self.store.update_access_level(identifier, level)?;
        tracing::info!(
            identifier,
            from = %previous,
            to = %level,
            "Access level changed"
        );
        Ok(previous)
    }
}
