//! # Domain Entities
//!
//! The stored form of an asset.

use super::errors::ObjectStoreError;
use serde::{Deserialize, Serialize};
use shared_crypto::{Cipher, Nonce, Secp256k1PublicKey, Secp256k1Signature, WrappedKey};

/// Current envelope format version.
pub const ENVELOPE_VERSION: u16 = 1;

/// Payload key wrapped for one audience.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct AudienceKey {
    /// Audience public key.
    pub public_key: Secp256k1PublicKey,
    /// Payload key wrapped for that audience.
    pub wrapped_key: WrappedKey,
}

/// Encrypted, signed representation of one stored payload.
///
/// Every audience unwraps the same payload key and therefore recovers the
/// same plaintext.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct EncryptedEnvelope {
    /// Format version.
    pub version: u16,
    /// Payload cipher.
    pub cipher: Cipher,
    /// Payload nonce.
    pub nonce: Nonce,
    /// One wrap per audience; the primary recipient comes first.
    pub audiences: Vec<AudienceKey>,
    /// Single-use signer public key generated by the store call.
    pub signer: Secp256k1PublicKey,
    /// Signer signature over the SHA-256 of the ciphertext.
    pub signature: Secp256k1Signature,
    /// Encrypted payload with tag.
    pub ciphertext: Vec<u8>,
}

impl EncryptedEnvelope {
    /// Wrap entry for `public_key`, if it is an audience.
    pub fn audience(&self, public_key: &Secp256k1PublicKey) -> Option<&AudienceKey> {
        self.audiences.iter().find(|a| &a.public_key == public_key)
    }

    /// Whether `public_key` is an audience.
    pub fn has_audience(&self, public_key: &Secp256k1PublicKey) -> bool {
        self.audience(public_key).is_some()
    }

    /// Metadata view without the ciphertext.
    pub fn metadata(&self) -> EnvelopeMetadata {
        EnvelopeMetadata {
            version: self.version,
            cipher: self.cipher,
            audiences: self.audiences.clone(),
            signer: self.signer,
            content_length: self.ciphertext.len() as u64,
        }
    }

    /// Canonical binary encoding.
    pub fn encode(&self) -> Result<Vec<u8>, ObjectStoreError> {
        bincode::serialize(self).map_err(|e| ObjectStoreError::Codec(e.to_string()))
    }

    /// Decode the canonical binary encoding.
    pub fn decode(bytes: &[u8]) -> Result<Self, ObjectStoreError> {
        let envelope: Self =
            bincode::deserialize(bytes).map_err(|e| ObjectStoreError::Codec(e.to_string()))?;
        if envelope.version != ENVELOPE_VERSION {
            return Err(ObjectStoreError::Codec(format!(
                "unsupported envelope version {}",
                envelope.version
            )));
        }
        Ok(envelope)
    }
}

/// Envelope metadata returned without a private key.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct EnvelopeMetadata {
    /// Format version.
    pub version: u16,
    /// Payload cipher.
    pub cipher: Cipher,
    /// Per-audience key wraps.
    pub audiences: Vec<AudienceKey>,
    /// Store signer public key.
    pub signer: Secp256k1PublicKey,
    /// Ciphertext length in bytes.
    pub content_length: u64,
}

impl EnvelopeMetadata {
    /// Audience public keys in envelope order.
    pub fn audience_keys(&self) -> Vec<Secp256k1PublicKey> {
        self.audiences.iter().map(|a| a.public_key).collect()
    }
}
