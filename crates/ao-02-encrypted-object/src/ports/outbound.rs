//! # Outbound Ports
//!
//! The content-addressed object store this client writes to.

use crate::domain::{EncryptedEnvelope, ObjectStoreError};
use async_trait::async_trait;
use shared_crypto::Secp256k1PublicKey;
use shared_types::ContentHash;

/// Content-addressed envelope store - outbound port.
///
/// Implementations must be safe for concurrent use by many in-flight
/// requests.
#[async_trait]
pub trait ObjectStoreTransport: Send + Sync {
    /// Store a sealed envelope and return the hash the store assigned.
    async fn put(&self, envelope: &EncryptedEnvelope) -> Result<ContentHash, ObjectStoreError>;

    /// Fetch the envelope stored under `hash` on behalf of `audience`.
    async fn get(
        &self,
        hash: &ContentHash,
        audience: &Secp256k1PublicKey,
    ) -> Result<EncryptedEnvelope, ObjectStoreError>;
}
