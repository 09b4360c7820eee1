//! Salted PBKDF2 hashes
//!
//! A stored hash is `salt (16 bytes) ++ derived key (20 bytes)`, derived
//! with PBKDF2-HMAC-SHA1 over 1354 iterations. Only the derived-key suffix
//! takes part in comparison, and the comparison is constant time.

use rand::RngCore;
use sha1::Sha1;
use subtle::ConstantTimeEq;

/// PBKDF2 iteration count
pub const ITERATIONS: u32 = 1354;

/// Salt length in bytes
pub const SALT_SIZE: usize = 16;

/// Derived key length in bytes
pub const HASH_SIZE: usize = 20;

/// Total stored hash length
pub const STORED_SIZE: usize = SALT_SIZE + HASH_SIZE;

#[cfg(test)]
thread_local! {
    static DERIVATIONS: std::cell::Cell<usize> = const { std::cell::Cell::new(0) };
}

/// Derivations run on this thread so far
#[cfg(test)]
pub(crate) fn derivation_count() -> usize {
    DERIVATIONS.with(|count| count.get())
}

fn derive(input: &str, salt: &[u8]) -> [u8; HASH_SIZE] {
    #[cfg(test)]
    DERIVATIONS.with(|count| count.set(count.get() + 1));
    let mut key = [0u8; HASH_SIZE];
    pbkdf2::pbkdf2_hmac::<Sha1>(input.as_bytes(), salt, ITERATIONS, &mut key);
    key
}

/// Hashes `input` with a fresh random salt
pub fn create_hash(input: &str) -> Vec<u8> {
    let mut salt = [0u8; SALT_SIZE];
    rand::thread_rng().fill_bytes(&mut salt);
    create_hash_with_salt(input, &salt)
}

/// Hashes `input` with the given salt
pub fn create_hash_with_salt(input: &str, salt: &[u8; SALT_SIZE]) -> Vec<u8> {
    let mut stored = Vec::with_capacity(STORED_SIZE);
    stored.extend_from_slice(salt);
    stored.extend_from_slice(&derive(input, salt));
    stored
}

/// Tests `input` against a stored hash
///
/// Malformed stored hashes never match but still cost one derivation.
pub fn password_matches(input: &str, stored: &[u8]) -> bool {
    if stored.len() != STORED_SIZE {
        dummy_derivation(input);
        return false;
    }
    let (salt, expected) = stored.split_at(SALT_SIZE);
    let derived = derive(input, salt);
    derived[..].ct_eq(expected).into()
}

/// Burns one derivation so that misses cost as much as hits
pub fn dummy_derivation(input: &str) {
    std::hint::black_box(derive(input, &[0u8; SALT_SIZE]));
}

/// Input of the current scheme: lowercase hex MD5 of `identifier-secret`
pub fn current_scheme_input(identifier: &str, secret: &str) -> String {
    format!("{:x}", md5::compute(format!("{identifier}-{secret}")))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_layout() {
        let stored = create_hash("abc");
        assert_eq!(stored.len(), STORED_SIZE);
    }

    #[test]
    fn test_match_and_mismatch() {
        let stored = create_hash("abc");
        assert!(password_matches("abc", &stored));
        assert!(!password_matches("abd", &stored));
        assert!(!password_matches("", &stored));
    }

    #[test]
    fn test_salt_is_random() {
        assert_ne!(create_hash("abc"), create_hash("abc"));
    }

    #[test]
    fn test_fixed_salt_is_deterministic() {
        let salt = [7u8; SALT_SIZE];
        assert_eq!(create_hash_with_salt("abc", &salt), create_hash_with_salt("abc", &salt));
        assert_eq!(&create_hash_with_salt("abc", &salt)[..SALT_SIZE], &salt);
    }

    #[test]
    fn test_malformed_hash_never_matches() {
        let stored = create_hash("abc");
        let before = derivation_count();
        assert!(!password_matches("abc", &stored[..20]));
        assert!(!password_matches("abc", &[]));
        assert_eq!(derivation_count() - before, 2);
    }

    #[test]
    fn test_current_scheme_input() {
        let input = current_scheme_input("a@b.c", "pw");
        assert_eq!(input.len(), 32);
        assert!(input.chars().all(|c| c.is_ascii_hexdigit() && !c.is_ascii_uppercase()));
        assert_eq!(input, current_scheme_input("a@b.c", "pw"));
        assert_ne!(input, current_scheme_input("A@b.c", "pw"));
    }
}
