//! In-Memory Object Store Adapter
//!
//! Content-addressed by SHA-256 of the canonical envelope encoding.

use crate::domain::{EncryptedEnvelope, ObjectStoreError};
use crate::ports::ObjectStoreTransport;
use async_trait::async_trait;
use parking_lot::RwLock;
use shared_crypto::{sha256, Secp256k1PublicKey};
use shared_types::ContentHash;
use std::collections::HashMap;
use std::time::Duration;
use tracing::debug;

/// In-memory object store.
#[derive(Default)]
pub struct InMemoryObjectStore {
    objects: RwLock<HashMap<ContentHash, Vec<u8>>>,
    latency: Option<Duration>,
}

impl InMemoryObjectStore {
    /// Create an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Store that sleeps `latency` before answering every call.
    pub fn with_latency(latency: Duration) -> Self {
        Self {
            latency: Some(latency),
            ..Self::default()
        }
    }

    /// Number of stored objects.
    pub fn len(&self) -> usize {
        self.objects.read().len()
    }

    /// Whether the store is empty.
    pub fn is_empty(&self) -> bool {
        self.objects.read().is_empty()
    }

    async fn delay(&self) {
        if let Some(latency) = self.latency {
            tokio::time::sleep(latency).await;
        }
    }
}

#[async_trait]
impl ObjectStoreTransport for InMemoryObjectStore {
    async fn put(&self, envelope: &EncryptedEnvelope) -> Result<ContentHash, ObjectStoreError> {
        self.delay().await;
        let bytes = envelope.encode()?;
        let hash = ContentHash::new(sha256(&bytes).to_vec());
        debug!(hash = %hash, size = bytes.len(), "[ao-02] In-memory put");
        self.objects.write().insert(hash.clone(), bytes);
        Ok(hash)
    }

    async fn get(
        &self,
        hash: &ContentHash,
        _audience: &Secp256k1PublicKey,
    ) -> Result<EncryptedEnvelope, ObjectStoreError> {
        self.delay().await;
        let bytes = self
            .objects
            .read()
            .get(hash)
            .cloned()
            .ok_or_else(|| ObjectStoreError::ObjectNotFound(hash.to_string()))?;
        EncryptedEnvelope::decode(&bytes)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::algorithms::seal;
    use shared_crypto::{Cipher, Secp256k1KeyPair};

    #[tokio::test]
    async fn test_put_get() {
        let store = InMemoryObjectStore::new();
        let key = Secp256k1KeyPair::generate().public_key();
        let envelope = seal(b"data", &[key], Cipher::default()).unwrap();

        let hash = store.put(&envelope).await.unwrap();
        assert_eq!(store.len(), 1);
        assert_eq!(store.get(&hash, &key).await.unwrap(), envelope);
    }

    #[tokio::test]
    async fn test_hash_is_content_address() {
        let store = InMemoryObjectStore::new();
        let key = Secp256k1KeyPair::generate().public_key();
        let envelope = seal(b"data", &[key], Cipher::default()).unwrap();

        let expected = ContentHash::new(sha256(&envelope.encode().unwrap()).to_vec());
        assert_eq!(store.put(&envelope).await.unwrap(), expected);
    }

    #[tokio::test]
    async fn test_missing_object() {
        let store = InMemoryObjectStore::new();
        let key = Secp256k1KeyPair::generate().public_key();
        let result = store.get(&ContentHash::new(vec![1, 2, 3]), &key).await;
        assert!(matches!(result, Err(ObjectStoreError::ObjectNotFound(_))));
    }
}
