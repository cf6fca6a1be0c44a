//! # SHA-256 Hashing
//!
//! Content hashes, envelope digests and record-name hashes all use SHA-256.

use sha2::{Digest, Sha256};

/// SHA-256 output (256-bit).
pub type Hash = [u8; 32];

/// Hash data with SHA-256 (one-shot).
pub fn sha256(data: &[u8]) -> Hash {
    Sha256::digest(data).into()
}

/// Hash several parts as one message.
pub fn sha256_parts(parts: &[&[u8]]) -> Hash {
    let mut hasher = Sha256::new();
    for part in parts {
        hasher.update(part);
    }
    hasher.finalize().into()
}

/// Uppercase hex SHA-256, the form used for specification source hashes.
pub fn sha256_hex_upper(data: &[u8]) -> String {
    hex::encode_upper(sha256(data))
}
