//! In-memory stores
//!
//! Used by tests and by embedders that persist through their own means.

use crate::adapters::storage::{CredentialStore, SettingsStore};
use crate::core::auth::Credential;
use crate::core::persistence::checksum::calculate_checksum_bytes;
use crate::core::persistence::{SettingsDocument, StoreReceipt};
use crate::domain::{AccessLevel, AuthError, ConsoleError, Result};
use parking_lot::RwLock;

/// Settings store holding the last written document
#[derive(Debug, Default)]
pub struct MemorySettingsStore {
    document: RwLock<Option<SettingsDocument>>,
}

impl MemorySettingsStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_document(document: SettingsDocument) -> Self {
        Self {
            document: RwLock::new(Some(document)),
        }
    }

    /// Copy of the stored document, if any
    pub fn document(&self) -> Option<SettingsDocument> {
        self.document.read().clone()
    }
}

impl SettingsStore for MemorySettingsStore {
    fn location(&self) -> String {
        "memory".to_string()
    }

    fn exists(&self) -> bool {
        self.document.read().is_some()
    }

    fn read(&self) -> Result<SettingsDocument> {
        self.document
            .read()
            .clone()
            .ok_or_else(|| ConsoleError::Persistence("no settings stored in memory".to_string()))
    }

    fn write(&self, document: &SettingsDocument) -> Result<StoreReceipt> {
        let rendered = format!("{document:?}");
        *self.document.write() = Some(document.clone());
        Ok(StoreReceipt {
            location: self.location(),
            bytes: rendered.len(),
            checksum: calculate_checksum_bytes(rendered.as_bytes()),
        })
    }
}

/// Credential store backed by a vector
#[derive(Debug, Default)]
pub struct MemoryCredentialStore {
    credentials: RwLock<Vec<Credential>>,
}

impl MemoryCredentialStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl CredentialStore for MemoryCredentialStore {
    fn find(&self, identifier: &str) -> std::result::Result<Option<Credential>, AuthError> {
        Ok(self
            .credentials
            .read()
            .iter()
            .find(|c| c.identifier.eq_ignore_ascii_case(identifier))
            .cloned())
    }

    fn insert(&self, credential: Credential) -> std::result::Result<(), AuthError> {
        let mut credentials = self.credentials.write();
        if credentials
            .iter()
            .any(|c| c.identifier.eq_ignore_ascii_case(&credential.identifier))
        {
            return Err(AuthError::AlreadyExists(credential.identifier));
        }
        credentials.push(credential);
        Ok(())
    }

    fn update_access_level(
        &self,
        identifier: &str,
        level: AccessLevel,
    ) -> std::result::Result<AccessLevel, AuthError> {
        let mut credentials = self.credentials.write();
        let credential = credentials
            .iter_mut()
            .find(|c| c.identifier.eq_ignore_ascii_case(identifier))
            .ok_or(AuthError::NotFound)?;
        Ok(std::mem::replace(&mut credential.access_level, level))
    }

    fn list(&self) -> std::result::Result<Vec<Credential>, AuthError> {
        Ok(self.credentials.read().clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_credential_uniqueness_ignores_case() {
        let store = MemoryCredentialStore::new();
        store
            .insert(Credential::for_secret("Gm@Keeper", "abc", AccessLevel::Admin))
            .unwrap();
        let err = store
            .insert(Credential::for_secret("gm@keeper", "xyz", AccessLevel::Guest))
            .unwrap_err();
        assert!(matches!(err, AuthError::AlreadyExists(_)));
        assert_eq!(store.list().unwrap().len(), 1);
    }

    #[test]
    fn test_update_access_level_returns_previous() {
        let store = MemoryCredentialStore::new();
        store
            .insert(Credential::for_secret("gm@keeper", "abc", AccessLevel::Admin))
            .unwrap();
        let previous = store.update_access_level("GM@KEEPER", AccessLevel::SuperAdmin).unwrap();
        assert_eq!(previous, AccessLevel::Admin);
        assert_eq!(
            store.find("gm@keeper").unwrap().unwrap().access_level,
            AccessLevel::SuperAdmin
        );
    }

    #[test]
    fn test_settings_store_round_trip() {
        let store = MemorySettingsStore::new();
        assert!(!store.exists());
        assert!(store.read().is_err());
        let receipt = store.write(&SettingsDocument::default()).unwrap();
        assert!(store.exists());
        assert_eq!(receipt.checksum.len(), 64);
        assert_eq!(store.read().unwrap(), SettingsDocument::default());
    }
}
