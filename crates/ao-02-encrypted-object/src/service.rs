//! # Encrypted Object Client Service
//!
//! Seals payloads client-side and moves envelopes through an
//! `ObjectStoreTransport`. Every transport call is bounded by the configured
//! timeout; nothing is cached between calls.

use crate::algorithms::{audience_list, open, seal};
use crate::domain::{EncryptedEnvelope, EnvelopeMetadata, ObjectClientConfig, ObjectStoreError};
use crate::ports::{EncryptedObjectApi, ObjectStoreTransport};
use async_trait::async_trait;
use shared_crypto::{Secp256k1KeyPair, Secp256k1PublicKey};
use shared_types::{ContentHash, Message};
use std::collections::BTreeSet;
use std::future::Future;
use std::sync::Arc;
use tokio::time::timeout;
use tracing::{debug, info, warn};

/// Encrypted object client.
pub struct EncryptedObjectClient {
    transport: Arc<dyn ObjectStoreTransport>,
    config: ObjectClientConfig,
}

impl EncryptedObjectClient {
    /// Create a client over `transport`.
    pub fn new(transport: Arc<dyn ObjectStoreTransport>, config: ObjectClientConfig) -> Self {
        Self { transport, config }
    }

    /// Client configuration.
    pub fn config(&self) -> &ObjectClientConfig {
        &self.config
    }

    async fn bounded<T, F>(&self, operation: &'static str, call: F) -> Result<T, ObjectStoreError>
    where
        F: Future<Output = Result<T, ObjectStoreError>>,
    {
        match timeout(self.config.timeout, call).await {
            Ok(result) => result,
            Err(_) => {
                warn!(
                    operation,
                    timeout_ms = self.config.timeout_ms(),
                    "[ao-02] Object store call timed out"
                );
                Err(ObjectStoreError::StoreTimeout {
                    operation,
                    timeout_ms: self.config.timeout_ms(),
                })
            }
        }
    }

    async fn fetch_for(
        &self,
        hash: &ContentHash,
        public_key: &Secp256k1PublicKey,
    ) -> Result<EncryptedEnvelope, ObjectStoreError> {
        let envelope = self
            .bounded("get", self.transport.get(hash, public_key))
            .await?;
        if !envelope.has_audience(public_key) {
            return Err(ObjectStoreError::AudienceNotFound {
                public_key: public_key.to_hex(),
                hash: hash.to_string(),
            });
        }
        Ok(envelope)
    }

    /// Encode `message` and store it.
    pub async fn store_message<M: Message + Sync>(
        &self,
        message: &M,
        recipient: &Secp256k1PublicKey,
        additional_audiences: &BTreeSet<Secp256k1PublicKey>,
    ) -> Result<ContentHash, ObjectStoreError> {
        let payload = message.encode_to_vec()?;
        self.store(&payload, recipient, additional_audiences).await
    }

    /// Retrieve, decrypt and decode a typed message.
    pub async fn retrieve_and_decrypt_as<M: Message>(
        &self,
        hash: &ContentHash,
        key_pair: &Secp256k1KeyPair,
    ) -> Result<M, ObjectStoreError> {
        let plaintext = self.retrieve_and_decrypt(hash, key_pair).await?;
        M::decode(&plaintext).map_err(|e| ObjectStoreError::InvalidPayload(e.to_string()))
    }
}

#[async_trait]
impl EncryptedObjectApi for EncryptedObjectClient {
    async fn store(
        &self,
        payload: &[u8],
        recipient: &Secp256k1PublicKey,
        additional_audiences: &BTreeSet<Secp256k1PublicKey>,
    ) -> Result<ContentHash, ObjectStoreError> {
        let audiences = audience_list(recipient, additional_audiences);
        let envelope = seal(payload, &audiences, self.config.cipher)?;
        debug!(
            audiences = audiences.len(),
            size = payload.len(),
            "[ao-02] Sealed envelope"
        );

        let hash = self.bounded("put", self.transport.put(&envelope)).await?;
        info!(
            hash = %hash,
            audiences = audiences.len(),
            "[ao-02] Stored encrypted object"
        );
        Ok(hash)
    }

    async fn retrieve(
        &self,
        hash: &ContentHash,
        public_key: &Secp256k1PublicKey,
    ) -> Result<EnvelopeMetadata, ObjectStoreError> {
        Ok(self.fetch_for(hash, public_key).await?.metadata())
    }

    async fn retrieve_with_envelope(
        &self,
        hash: &ContentHash,
        public_key: &Secp256k1PublicKey,
    ) -> Result<(EnvelopeMetadata, Vec<u8>), ObjectStoreError> {
        let envelope = self.fetch_for(hash, public_key).await?;
        let metadata = envelope.metadata();
        Ok((metadata, envelope.ciphertext))
    }

    async fn retrieve_and_decrypt(
        &self,
        hash: &ContentHash,
        key_pair: &Secp256k1KeyPair,
    ) -> Result<Vec<u8>, ObjectStoreError> {
        let envelope = self.fetch_for(hash, &key_pair.public_key()).await?;
        let plaintext = open(&envelope, key_pair, &hash.to_string())?;
        info!(hash = %hash, size = plaintext.len(), "[ao-02] Retrieved and decrypted object");
        Ok(plaintext)
    }
}
