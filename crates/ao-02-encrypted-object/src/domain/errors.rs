//! # Domain Errors
//!
//! Failures on the store and retrieve paths. None are retried here.

use shared_crypto::CryptoError;
use shared_types::{ErrorCode, HasErrorCode, TypesError};
use thiserror::Error;

/// Encrypted object client errors.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ObjectStoreError {
    /// The key is not among the envelope's audiences.
    #[error("Public key {public_key} is not an audience of object {hash}")]
    AudienceNotFound {
        /// Hex public key that was asked for
        public_key: String,
        /// Base64 content hash
        hash: String,
    },

    /// Integrity check, signature check or key unwrap failed.
    #[error("Decryption failed: {0}")]
    Decryption(String),

    /// A store call exceeded the configured timeout.
    #[error("Object store {operation} timed out after {timeout_ms}ms")]
    StoreTimeout {
        /// Operation that timed out (`put` or `get`)
        operation: &'static str,
        /// Configured timeout
        timeout_ms: u64,
    },

    /// No object is stored under the hash.
    #[error("Object not found: {0}")]
    ObjectNotFound(String),

    /// Transport failure talking to the store.
    #[error("Object store transport error: {0}")]
    Transport(String),

    /// Key material is malformed or inconsistent.
    #[error("Invalid key: {0}")]
    InvalidKey(String),

    /// Envelope could not be encoded or decoded.
    #[error("Envelope codec error: {0}")]
    Codec(String),

    /// Decrypted payload is not the requested message type.
    #[error("Invalid asset payload: {0}")]
    InvalidPayload(String),
}

impl HasErrorCode for ObjectStoreError {
    fn code(&self) -> ErrorCode {
        match self {
            ObjectStoreError::AudienceNotFound { .. } => ErrorCode::AudienceNotFound,
            ObjectStoreError::Decryption(_) => ErrorCode::Decryption,
            ObjectStoreError::StoreTimeout { .. } => ErrorCode::StoreTimeout,
            ObjectStoreError::ObjectNotFound(_) => ErrorCode::ObjectNotFound,
            ObjectStoreError::Transport(_) => ErrorCode::Transport,
            ObjectStoreError::InvalidKey(_) => ErrorCode::InvalidKey,
            ObjectStoreError::Codec(_) => ErrorCode::Codec,
            ObjectStoreError::InvalidPayload(_) => ErrorCode::InvalidAssetPayload,
        }
    }
}

impl From<CryptoError> for ObjectStoreError {
    fn from(err: CryptoError) -> Self {
        if err.is_key_error() {
            ObjectStoreError::InvalidKey(err.to_string())
        } else {
            ObjectStoreError::Decryption(err.to_string())
        }
    }
}

impl From<TypesError> for ObjectStoreError {
    fn from(err: TypesError) -> Self {
        match err {
            TypesError::InvalidAssetPayload(msg) => ObjectStoreError::InvalidPayload(msg),
            TypesError::Decode { .. } => ObjectStoreError::InvalidPayload(err.to_string()),
            other => ObjectStoreError::Codec(other.to_string()),
        }
    }
}

impl From<reqwest::Error> for ObjectStoreError {
    fn from(err: reqwest::Error) -> Self {
        ObjectStoreError::Transport(err.to_string())
    }
}
