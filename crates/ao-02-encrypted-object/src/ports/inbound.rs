//! # Inbound Ports
//!
//! API trait defining what the encrypted object client can do.

use crate::domain::{EnvelopeMetadata, ObjectStoreError};
use async_trait::async_trait;
use shared_crypto::{Secp256k1KeyPair, Secp256k1PublicKey};
use shared_types::ContentHash;
use std::collections::BTreeSet;

/// Encrypted object API - inbound port.
#[async_trait]
pub trait EncryptedObjectApi: Send + Sync {
    /// Encrypt `payload` for `recipient` and every additional audience, store
    /// it and return the content hash.
    async fn store(
        &self,
        payload: &[u8],
        recipient: &Secp256k1PublicKey,
        additional_audiences: &BTreeSet<Secp256k1PublicKey>,
    ) -> Result<ContentHash, ObjectStoreError>;

    /// Envelope metadata for an audience, without a private key.
    async fn retrieve(
        &self,
        hash: &ContentHash,
        public_key: &Secp256k1PublicKey,
    ) -> Result<EnvelopeMetadata, ObjectStoreError>;

    /// Envelope metadata plus the raw ciphertext.
    async fn retrieve_with_envelope(
        &self,
        hash: &ContentHash,
        public_key: &Secp256k1PublicKey,
    ) -> Result<(EnvelopeMetadata, Vec<u8>), ObjectStoreError>;

    /// Decrypted plaintext for an audience key pair.
    async fn retrieve_and_decrypt(
        &self,
        hash: &ContentHash,
        key_pair: &Secp256k1KeyPair,
    ) -> Result<Vec<u8>, ObjectStoreError>;
}
