//! Checksums of written settings files

use sha2::{Digest, Sha256};

/// Hex-encoded SHA-256 of raw bytes (64 characters)
///
/// # Examples
///
/// ```
/// use keeper::core::persistence::checksum::calculate_checksum_bytes;
///
/// let checksum = calculate_checksum_bytes(b"[Network]\nPort = 7000\n");
/// assert_eq!(checksum.len(), 64);
/// ```
pub fn calculate_checksum_bytes(data: &[u8]) -> String {
    let mut hasher = Sha256::new();
    hasher.update(data);
    let result = hasher.finalize();
    format!("{result:x}")
}
