//! # Onboarding Errors
//!
//! Every component error converts into `OnboardError`; `code()` keeps the
//! component's stable identifier.

use crate::container::ConfigError;
use ao_01_metadata_address::AddressFormatError;
use ao_02_encrypted_object::ObjectStoreError;
use ao_03_spec_resolver::ResolverError;
use ao_04_scope_graph::GraphError;
use ao_05_tx_assembler::AssemblerError;
use shared_crypto::CryptoError;
use shared_types::{ErrorCode, HasErrorCode, TypesError};
use thiserror::Error;

/// Onboarding service errors.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum OnboardError {
    /// Configuration problem.
    #[error(transparent)]
    Config(#[from] ConfigError),

    /// Caller-supplied specification reference is malformed or of the wrong kind.
    #[error(transparent)]
    Address(#[from] AddressFormatError),

    /// Encrypted object store failure.
    #[error(transparent)]
    ObjectStore(#[from] ObjectStoreError),

    /// Specification lookup failure.
    #[error(transparent)]
    Resolver(#[from] ResolverError),

    /// Write batch construction failure.
    #[error(transparent)]
    Graph(#[from] GraphError),

    /// Transaction assembly failure.
    #[error(transparent)]
    Assembler(#[from] AssemblerError),

    /// Payload or message codec failure.
    #[error(transparent)]
    Types(#[from] TypesError),

    /// Key material did not parse.
    #[error("Invalid key: {0}")]
    Crypto(#[from] CryptoError),

    /// Private key does not belong to the public key it was given with.
    #[error("Private key does not match public key {0}")]
    KeyMismatch(String),

    /// Asset manager access requested but no asset manager is configured.
    #[error("Asset manager access requested but no asset manager is configured")]
    AssetManagerNotConfigured,
}

impl HasErrorCode for OnboardError {
    fn code(&self) -> ErrorCode {
        match self {
            OnboardError::Config(e) => e.code(),
            OnboardError::Address(e) => e.code(),
            OnboardError::ObjectStore(e) => e.code(),
            OnboardError::Resolver(e) => e.code(),
            OnboardError::Graph(e) => e.code(),
            OnboardError::Assembler(e) => e.code(),
            OnboardError::Types(e) => e.code(),
            OnboardError::Crypto(_) | OnboardError::KeyMismatch(_) => ErrorCode::InvalidKey,
            OnboardError::AssetManagerNotConfigured => ErrorCode::Configuration,
        }
    }
}
