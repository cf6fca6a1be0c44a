//! Crypto error types.

use thiserror::Error;

/// Failures of the envelope primitives: payload cipher, key wrap, signer.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CryptoError {
    /// Payload or key-wrap encryption rejected its input.
    #[error("Encryption failed: {0}")]
    EncryptionFailed(String),

    /// Authentication tag mismatch or wrong key.
    #[error("Decryption failed: {0}")]
    DecryptionFailed(String),

    /// Symmetric or private key of the wrong size.
    #[error("Key must be {expected} bytes, got {actual}")]
    InvalidKeyLength {
        /// Required length.
        expected: usize,
        /// Supplied length.
        actual: usize,
    },

    /// Nonce of the wrong size for the selected cipher.
    #[error("Nonce must be {expected} bytes, got {actual}")]
    InvalidNonceLength {
        /// Required length.
        expected: usize,
        /// Supplied length.
        actual: usize,
    },

    /// Store signer signature does not match the ciphertext digest.
    #[error("Store signature does not verify")]
    SignatureVerificationFailed,

    /// Not a valid compressed secp256k1 point.
    #[error("Invalid secp256k1 public key")]
    InvalidPublicKey,

    /// Not a valid secp256k1 scalar.
    #[error("Invalid secp256k1 private key")]
    InvalidPrivateKey,

    /// Signature bytes do not parse.
    #[error("Malformed signature")]
    InvalidSignature,
}

impl CryptoError {
    /// Malformed key material, as opposed to a failure on well-formed input.
    pub fn is_key_error(&self) -> bool {
        matches!(
            self,
            CryptoError::InvalidPublicKey
                | CryptoError::InvalidPrivateKey
                | CryptoError::InvalidKeyLength { .. }
        )
    }
}
