//! # Envelope Sealing
//!
//! Pure envelope construction and opening. No I/O.
//!
//! ```text
//! seal:  DEK ← random
//!        ciphertext ← AEAD(DEK, payload)
//!        for each audience: wrap(DEK, audience)
//!        signer ← fresh key pair; signature ← sign(sha256(ciphertext))
//!
//! open:  find audience → verify signature → unwrap DEK → AEAD open
//! ```

use crate::domain::{AudienceKey, EncryptedEnvelope, ObjectStoreError, ENVELOPE_VERSION};
use shared_crypto::{
    decrypt_with, encrypt_with, sha256, unwrap_key, wrap_key, Cipher, Secp256k1KeyPair,
    Secp256k1PublicKey, SecretKey,
};
use std::collections::BTreeSet;

/// Primary recipient first, then each distinct additional audience.
pub fn audience_list(
    recipient: &Secp256k1PublicKey,
    additional: &BTreeSet<Secp256k1PublicKey>,
) -> Vec<Secp256k1PublicKey> {
    let mut out = Vec::with_capacity(additional.len() + 1);
    out.push(*recipient);
    out.extend(additional.iter().filter(|k| *k != recipient).copied());
    out
}

/// Encrypt `payload` for every key in `audiences`.
///
/// A new payload key and a new signer key pair are generated per call, so two
/// seals of the same payload share nothing.
pub fn seal(
    payload: &[u8],
    audiences: &[Secp256k1PublicKey],
    cipher: Cipher,
) -> Result<EncryptedEnvelope, ObjectStoreError> {
    if audiences.is_empty() {
        return Err(ObjectStoreError::InvalidKey(
            "at least one audience is required".to_string(),
        ));
    }

    let dek = SecretKey::generate();
    let (ciphertext, nonce) = encrypt_with(cipher, &dek, payload)?;

    let audiences = audiences
        .iter()
        .map(|public_key| {
            Ok(AudienceKey {
                public_key: *public_key,
                wrapped_key: wrap_key(public_key, &dek)?,
            })
        })
        .collect::<Result<Vec<_>, ObjectStoreError>>()?;

    let signer = Secp256k1KeyPair::generate();
    let signature = signer.sign(&sha256(&ciphertext));

    Ok(EncryptedEnvelope {
        version: ENVELOPE_VERSION,
        cipher,
        nonce,
        audiences,
        signer: signer.public_key(),
        signature,
        ciphertext,
    })
}

/// Verify the store signature over the ciphertext.
pub fn verify(envelope: &EncryptedEnvelope) -> Result<(), ObjectStoreError> {
    envelope
        .signer
        .verify(&sha256(&envelope.ciphertext), &envelope.signature)
        .map_err(|_| ObjectStoreError::Decryption("envelope signature mismatch".to_string()))
}

/// Decrypt `envelope` with an audience key pair.
pub fn open(
    envelope: &EncryptedEnvelope,
    key_pair: &Secp256k1KeyPair,
    hash_label: &str,
) -> Result<Vec<u8>, ObjectStoreError> {
    let public_key = key_pair.public_key();
    let audience =
        envelope
            .audience(&public_key)
            .ok_or_else(|| ObjectStoreError::AudienceNotFound {
                public_key: public_key.to_hex(),
                hash: hash_label.to_string(),
            })?;

    verify(envelope)?;

    let dek = unwrap_key(key_pair, &audience.wrapped_key)
        .map_err(|e| ObjectStoreError::Decryption(e.to_string()))?;
    decrypt_with(envelope.cipher, &dek, &envelope.ciphertext, &envelope.nonce)
        .map_err(|e| ObjectStoreError::Decryption(e.to_string()))
}
