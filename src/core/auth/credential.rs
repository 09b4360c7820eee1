//! Stored credential records
//!
//! A record holds one tagged hash per scheme it was enrolled with. During a
//! migration window both schemes can be present for the same identifier.

use super::hash;
use crate::domain::AccessLevel;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Construction of the hash input from the submitted secret
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum HashScheme {
    /// MD5 of `identifier-secret`, hex encoded, then PBKDF2
    Current,
    /// PBKDF2 over the secret itself
    Legacy,
}

impl HashScheme {
    /// Verification order
    pub const PRIORITY: [HashScheme; 2] = [HashScheme::Current, HashScheme::Legacy];

    /// Text fed to PBKDF2 for this scheme
    pub fn hash_input(&self, identifier: &str, secret: &str) -> String {
        match self {
            HashScheme::Current => hash::current_scheme_input(identifier, secret),
            HashScheme::Legacy => secret.to_string(),
        }
    }
}

impl fmt::Display for HashScheme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            HashScheme::Current => f.write_str("current"),
            HashScheme::Legacy => f.write_str("legacy"),
        }
    }
}

/// A hash tagged with the scheme that produced it
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PasswordHash {
    pub scheme: HashScheme,
    #[serde(with = "base64_bytes")]
    pub hash: Vec<u8>,
}

impl PasswordHash {
    /// Hashes `secret` under `scheme` with a fresh salt
    pub fn create(scheme: HashScheme, identifier: &str, secret: &str) -> Self {
        Self {
            scheme,
            hash: hash::create_hash(&scheme.hash_input(identifier, secret)),
        }
    }

    pub fn matches(&self, identifier: &str, secret: &str) -> bool {
        hash::password_matches(&self.scheme.hash_input(identifier, secret), &self.hash)
    }
}

/// Console account credential
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Credential {
    /// Canonical spelling; lookups ignore case
    pub identifier: String,
    pub hashes: Vec<PasswordHash>,
    pub access_level: AccessLevel,
}

impl Credential {
    /// Enrols `secret` under both schemes
    pub fn for_secret(identifier: impl Into<String>, secret: &str, access_level: AccessLevel) -> Self {
        let identifier = identifier.into();
        let hashes = HashScheme::PRIORITY
            .iter()
            .map(|scheme| PasswordHash::create(*scheme, &identifier, secret))
            .collect();
        Self {
            identifier,
            hashes,
            access_level,
        }
    }

    /// Enrols `secret` under a single scheme
    pub fn with_scheme(
        identifier: impl Into<String>,
        scheme: HashScheme,
        secret: &str,
        access_level: AccessLevel,
    ) -> Self {
        let identifier = identifier.into();
        let hashes = vec![PasswordHash::create(scheme, &identifier, secret)];
        Self {
            identifier,
            hashes,
            access_level,
        }
    }

    pub fn hash(&self, scheme: HashScheme) -> Option<&PasswordHash> {
        self.hashes.iter().find(|h| h.scheme == scheme)
    }

    /// First scheme, in priority order, whose hash accepts `secret`
    ///
    /// A scheme the record lacks still costs one derivation, so every miss
    /// runs exactly [`HashScheme::PRIORITY`]`.len()` of them.
    pub fn matching_scheme(&self, secret: &str) -> Option<HashScheme> {
        for scheme in HashScheme::PRIORITY {
            match self.hash(scheme) {
                Some(stored) if stored.matches(&self.identifier, secret) => return Some(scheme),
                Some(_) => {}
                None => hash::dummy_derivation(secret),
            }
        }
        None
    }
}

mod base64_bytes {
    use base64::{engine::general_purpose::STANDARD, Engine as _};
    use serde::{Deserialize, Deserializer, Serializer};

    pub fn serialize<S: Serializer>(bytes: &[u8], serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&STANDARD.encode(bytes))
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Vec<u8>, D::Error> {
        let text = String::deserialize(deserializer)?;
        STANDARD.decode(text).map_err(serde::de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_for_secret_enrols_both_schemes() {
        let credential = Credential::for_secret("admin@keeper", "s3cret", AccessLevel::SuperAdmin);
        assert!(credential.hash(HashScheme::Current).is_some());
        assert!(credential.hash(HashScheme::Legacy).is_some());
        assert_eq!(credential.matching_scheme("s3cret"), Some(HashScheme::Current));
        assert_eq!(credential.matching_scheme("wrong"), None);
    }

    #[test]
    fn test_legacy_only() {
        let credential = Credential::with_scheme("old@keeper", HashScheme::Legacy, "abc", AccessLevel::Admin);
        assert_eq!(credential.matching_scheme("abc"), Some(HashScheme::Legacy));
        assert_eq!(credential.matching_scheme("abd"), None);
    }

    #[test]
    fn test_current_hash_bound_to_identifier() {
        let hash = PasswordHash::create(HashScheme::Current, "a@keeper", "xyz");
        assert!(hash.matches("a@keeper", "xyz"));
        assert!(!hash.matches("b@keeper", "xyz"));
    }

    #[test]
    fn test_legacy_input_is_raw_secret() {
        assert_eq!(HashScheme::Legacy.hash_input("id", "pw"), "pw");
        assert_ne!(HashScheme::Current.hash_input("id", "pw"), "pw");
    }

    #[test]
    fn test_json_hashes_are_base64() {
        let credential = Credential::with_scheme("a@keeper", HashScheme::Legacy, "abc", AccessLevel::Guest);
        let json = serde_json::to_value(&credential).unwrap();
        assert_eq!(json["hashes"][0]["scheme"], "legacy");
        assert_eq!(json["access_level"], "guest");
        assert!(json["hashes"][0]["hash"].is_string());

        let back: Credential = serde_json::from_value(json).unwrap();
        assert_eq!(back, credential);
    }
}
