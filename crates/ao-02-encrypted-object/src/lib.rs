//! # AO-02 Encrypted Object Client
//!
//! Multi-audience encryption of asset payloads into a content-addressed
//! object store.
//!
//! **Component ID:** 02
//! **Architecture:** Hexagonal (DDD + Ports/Adapters)
//!
//! ## Purpose
//!
//! - Encrypt a payload once under a fresh payload key
//! - Wrap that key for the primary recipient and every additional audience
//! - Sign the ciphertext with a single-use signer key generated per store call
//! - Store the envelope and hand back the content hash the store assigned
//! - Retrieve envelope metadata without a private key, or decrypt with one
//!
//! ## Failure Kinds
//!
//! | Error | When |
//! |-------|------|
//! | `AudienceNotFound` | Key is not among the envelope audiences |
//! | `Decryption` | Signature, key unwrap or AEAD check failed |
//! | `StoreTimeout` | Transport call exceeded the configured timeout |
//! | `ObjectNotFound` | Hash unknown to the store |
//!
//! ## Module Structure
//!
//! ```text
//! ao-02-encrypted-object/
//! ├── domain/          # EncryptedEnvelope, EnvelopeMetadata, config, errors
//! ├── algorithms/      # seal / open
//! ├── ports/           # EncryptedObjectApi, ObjectStoreTransport
//! ├── adapters/        # InMemoryObjectStore, HttpObjectStore
//! └── service          # EncryptedObjectClient
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod adapters;
pub mod algorithms;
pub mod domain;
pub mod ports;
pub mod service;

// Re-exports
pub use adapters::{HttpObjectStore, InMemoryObjectStore};
pub use domain::{
    AudienceKey, EncryptedEnvelope, EnvelopeMetadata, ObjectClientConfig, ObjectStoreError,
    DEFAULT_TIMEOUT_MS, ENVELOPE_VERSION,
};
pub use ports::{EncryptedObjectApi, ObjectStoreTransport};
pub use service::EncryptedObjectClient;

/// Crate version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
