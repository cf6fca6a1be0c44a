//! # ECIES Key Wrapping
//!
//! Wraps a payload key for one audience public key:
//!
//! ```text
//! ephemeral secp256k1 key  ──ECDH──▶  shared secret
//! HKDF-SHA256(salt = domain, info = ephemeral_pub ++ recipient_pub)  ──▶  KEK
//! AES-256-GCM(KEK, payload key)  ──▶  wrapped key
//! ```
//!
//! Every wrap uses a new ephemeral key, so wrapping the same payload key for
//! the same audience twice yields unrelated ciphertexts.

use crate::ecdsa::{Secp256k1KeyPair, Secp256k1PublicKey};
use crate::symmetric::{decrypt_with, encrypt_with, Cipher, Nonce, SecretKey};
use crate::CryptoError;
use hkdf::Hkdf;
use serde::{Deserialize, Serialize};
use sha2::Sha256;
use zeroize::Zeroize;

/// HKDF salt for key-encryption keys.
pub const KEY_WRAP_DOMAIN: &[u8] = b"asset-onboard/ecies-key-wrap/v1";

/// A payload key encrypted for one audience.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct WrappedKey {
    /// Ephemeral public key used for ECDH.
    pub ephemeral_public: Secp256k1PublicKey,
    /// AES-GCM nonce.
    pub nonce: Nonce,
    /// Encrypted payload key with tag.
    pub ciphertext: Vec<u8>,
}

/// Encrypt `key` so that only the holder of `recipient`'s private key can
/// recover it.
pub fn wrap_key(
    recipient: &Secp256k1PublicKey,
    key: &SecretKey,
) -> Result<WrappedKey, CryptoError> {
    let ephemeral = Secp256k1KeyPair::generate();
    let ephemeral_public = ephemeral.public_key();
    let mut shared = ephemeral.shared_secret(recipient)?;
    let kek = derive_kek(&shared, &ephemeral_public, recipient);
    shared.zeroize();
    let kek = kek?;

    let (ciphertext, nonce) = encrypt_with(Cipher::Aes256Gcm, &kek, key.as_bytes())?;
    Ok(WrappedKey {
        ephemeral_public,
        nonce,
        ciphertext,
    })
}

/// Recover a payload key with the audience key pair.
///
/// # Errors
///
/// `DecryptionFailed` when the wrap was made for another key or was tampered.
pub fn unwrap_key(
    recipient: &Secp256k1KeyPair,
    wrapped: &WrappedKey,
) -> Result<SecretKey, CryptoError> {
    let recipient_public = recipient.public_key();
    let mut shared = recipient.shared_secret(&wrapped.ephemeral_public)?;
    let kek = derive_kek(&shared, &wrapped.ephemeral_public, &recipient_public);
    shared.zeroize();
    let kek = kek?;

    let mut raw = decrypt_with(Cipher::Aes256Gcm, &kek, &wrapped.ciphertext, &wrapped.nonce)?;
    let key = SecretKey::from_slice(&raw);
    raw.zeroize();
    key
}

fn derive_kek(
    shared_secret: &[u8; 32],
    ephemeral_public: &Secp256k1PublicKey,
    recipient_public: &Secp256k1PublicKey,
) -> Result<SecretKey, CryptoError> {
    let mut info = Vec::with_capacity(66);
    info.extend_from_slice(ephemeral_public.as_bytes());
    info.extend_from_slice(recipient_public.as_bytes());

    let hkdf = Hkdf::<Sha256>::new(Some(KEY_WRAP_DOMAIN), shared_secret);
    let mut output = [0u8; 32];
    hkdf.expand(&info, &mut output)
        .map_err(|_| CryptoError::EncryptionFailed("HKDF expansion failed".to_string()))?;
    let key = SecretKey::from_bytes(output);
    output.zeroize();
    Ok(key)
}
