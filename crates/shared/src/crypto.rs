//! Hashing helpers for tokens stored at rest.

use sha2::{Digest, Sha256};

/// Computes the SHA-256 hash of the input and returns it as a hex string.
///
/// Refresh tokens are stored hashed so a database leak does not yield
/// usable credentials.
pub fn sha256_hex(input: &str) -> String {
    let mut hasher = Sha256::new();
    hasher.update(input.as_bytes());
    hex::encode(hasher.finalize())
}
