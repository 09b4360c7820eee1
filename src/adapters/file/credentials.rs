//! JSON account file
//!
//! The whole file is a JSON array of credentials. Hashes are base64
//! encoded. Every mutation rewrites the file atomically.

use super::atomic::write_atomic;
use crate::adapters::storage::CredentialStore;
use crate::core::auth::Credential;
use crate::domain::{AccessLevel, AuthError};
use parking_lot::Mutex;
use std::path::{Path, PathBuf};

/// Credential store backed by a JSON file
///
/// The file is read on every lookup so edits made by other processes are
/// picked up; writers are serialized by an in-process lock.
#[derive(Debug)]
pub struct JsonCredentialStore {
    path: PathBuf,
    write_lock: Mutex<()>,
}

impl JsonCredentialStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            write_lock: Mutex::new(()),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn load(&self) -> Result<Vec<Credential>, AuthError> {
        if !self.path.exists() {
            return Ok(Vec::new());
        }
        let text = std::fs::read_to_string(&self.path)
            .map_err(|e| AuthError::Store(format!("Cannot read {}: {e}", self.path.display())))?;
        if text.trim().is_empty() {
            return Ok(Vec::new());
        }
        serde_json::from_str(&text)
            .map_err(|e| AuthError::Store(format!("Invalid account file {}: {e}", self.path.display())))
    }

    fn save(&self, credentials: &[Credential]) -> Result<(), AuthError> {
        let text = serde_json::to_string_pretty(credentials)
            .map_err(|e| AuthError::Store(e.to_string()))?;
        write_atomic(&self.path, text.as_bytes()).map_err(|e| AuthError::Store(e.to_string()))
    }
}

impl CredentialStore for JsonCredentialStore {
    fn find(&self, identifier: &str) -> Result<Option<Credential>, AuthError> {
        Ok(self
            .load()?
            .into_iter()
            .find(|c| c.identifier.eq_ignore_ascii_case(identifier)))
    }

    fn insert(&self, credential: Credential) -> Result<(), AuthError> {
        let _guard = self.write_lock.lock();
        let mut credentials = self.load()?;
        if credentials
            .iter()
            .any(|c| c.identifier.eq_ignore_ascii_case(&credential.identifier))
        {
            return Err(AuthError::AlreadyExists(credential.identifier));
        }
        credentials.push(credential);
        self.save(&credentials)
    }

    fn update_access_level(&self, identifier: &str, level: AccessLevel) -> Result<AccessLevel, AuthError> {
        let _guard = self.write_lock.lock();
        let mut credentials = self.load()?;
        let credential = credentials
            .iter_mut()
            .find(|c| c.identifier.eq_ignore_ascii_case(identifier))
            .ok_or(AuthError::NotFound)?;
        let previous = std::mem::replace(&mut credential.access_level, level);
        self.save(&credentials)?;
        Ok(previous)
    }

    fn list(&self) -> Result<Vec<Credential>, AuthError> {
        self.load()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::auth::HashScheme;
    use tempfile::TempDir;

    #[test]
    fn test_missing_file_is_empty() {
        let dir = TempDir::new().unwrap();
        let store = JsonCredentialStore::new(dir.path().join("accounts.json"));
        assert!(store.list().unwrap().is_empty());
        assert!(store.find("anyone").unwrap().is_none());
    }

    #[test]
    fn test_insert_persists_across_instances() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("accounts.json");
        JsonCredentialStore::new(&path)
            .insert(Credential::for_secret("gm@keeper", "abc", AccessLevel::Supervisor))
            .unwrap();

        let reopened = JsonCredentialStore::new(&path);
        let credential = reopened.find("GM@KEEPER").unwrap().unwrap();
        assert_eq!(credential.matching_scheme("abc"), Some(HashScheme::Current));
    }

    #[test]
    fn test_update_access_level_persists() {
        let dir = TempDir::new().unwrap();
        let store = JsonCredentialStore::new(dir.path().join("accounts.json"));
        store
            .insert(Credential::for_secret("gm@keeper", "abc", AccessLevel::Admin))
            .unwrap();
        assert_eq!(
            store.update_access_level("gm@keeper", AccessLevel::SuperAdmin).unwrap(),
            AccessLevel::Admin
        );
        assert_eq!(
            store.find("gm@keeper").unwrap().unwrap().access_level,
            AccessLevel::SuperAdmin
        );
        assert!(matches!(
            store.update_access_level("ghost", AccessLevel::Admin),
            Err(AuthError::NotFound)
        ));
    }

    #[test]
    fn test_corrupt_file_is_store_error() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("accounts.json");
        std::fs::write(&path, "{not json").unwrap();
        assert!(matches!(JsonCredentialStore::new(path).list(), Err(AuthError::Store(_))));
    }
}
