//! # Shared Crypto - Onboarding Cryptographic Primitives
//!
//! ## Components
//!
//! | Module | Algorithm | Use Case |
//! |--------|-----------|----------|
//! | `symmetric` | XChaCha20-Poly1305, AES-256-GCM | Payload encryption |
//! | `ecies` | secp256k1 ECDH + HKDF-SHA256 + AES-256-GCM | Per-audience key wrap |
//! | `ecdsa` | secp256k1 | Audience keys, store signer signatures |
//! | `hashing` | SHA-256 | Content and digest hashing |
//!
//! ## Security Properties
//!
//! - **XChaCha20**: 192-bit nonce, constant-time
//! - **secp256k1**: RFC 6979 deterministic, low-S normalization
//! - **ECIES**: fresh ephemeral key per wrap, domain-separated KDF

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod ecdsa;
pub mod ecies;
pub mod errors;
pub mod hashing;
pub mod symmetric;

// Re-exports
pub use ecdsa::{Secp256k1KeyPair, Secp256k1PublicKey, Secp256k1Signature};
pub use ecies::{unwrap_key, wrap_key, WrappedKey};
pub use errors::CryptoError;
pub use hashing::{sha256, sha256_hex_upper, sha256_parts, Hash};
pub use symmetric::{decrypt, decrypt_with, encrypt, encrypt_with, Cipher, Nonce, SecretKey};

/// Crate version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
