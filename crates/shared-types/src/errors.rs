//! # Error Types
//!
//! Stable error identifiers shared by every component, plus the errors that
//! belong to the shared data model itself.

use ao_01_metadata_address::AddressFormatError;
use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;

/// Stable, machine-readable identifier for every failure kind.
///
/// Calling layers map these to response codes; the strings never change.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ErrorCode {
    /// Malformed externally supplied address.
    AddressFormat,
    /// Classifier not present in the registry.
    SpecificationNotFound,
    /// Scope specification has no contract specification.
    ContractSpecNotFound,
    /// Contract specification has no record specification.
    RecordSpecNotFound,
    /// Key is not an audience of the envelope.
    AudienceNotFound,
    /// Integrity or signature check failed.
    Decryption,
    /// Network call exceeded its timeout.
    StoreTimeout,
    /// Payload did not parse as the expected structure.
    InvalidAssetPayload,
    /// Content hash unknown to the store.
    ObjectNotFound,
    /// Message type missing from the type registry.
    UnregisteredMessageType,
    /// Transport-level failure talking to a collaborator.
    Transport,
    /// Key material could not be parsed.
    InvalidKey,
    /// Binary or JSON codec failure.
    Codec,
    /// Invalid configuration.
    Configuration,
}

impl ErrorCode {
    /// Wire form of the code.
    pub const fn as_str(self) -> &'static str {
        match self {
            ErrorCode::AddressFormat => "ADDRESS_FORMAT",
            ErrorCode::SpecificationNotFound => "SPECIFICATION_NOT_FOUND",
            ErrorCode::ContractSpecNotFound => "CONTRACT_SPEC_NOT_FOUND",
            ErrorCode::RecordSpecNotFound => "RECORD_SPEC_NOT_FOUND",
            ErrorCode::AudienceNotFound => "AUDIENCE_NOT_FOUND",
            ErrorCode::Decryption => "DECRYPTION",
            ErrorCode::StoreTimeout => "STORE_TIMEOUT",
            ErrorCode::InvalidAssetPayload => "INVALID_ASSET_PAYLOAD",
            ErrorCode::ObjectNotFound => "OBJECT_NOT_FOUND",
            ErrorCode::UnregisteredMessageType => "UNREGISTERED_MESSAGE_TYPE",
            ErrorCode::Transport => "TRANSPORT",
            ErrorCode::InvalidKey => "INVALID_KEY",
            ErrorCode::Codec => "CODEC",
            ErrorCode::Configuration => "CONFIGURATION",
        }
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Errors that carry a stable identifier.
pub trait HasErrorCode {
    /// Identifier for this failure.
    fn code(&self) -> ErrorCode;
}

impl HasErrorCode for AddressFormatError {
    fn code(&self) -> ErrorCode {
        ErrorCode::AddressFormat
    }
}

/// Errors raised by the shared data model.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TypesError {
    /// Asset payload could not be parsed.
    #[error("Invalid asset payload: {0}")]
    InvalidAssetPayload(String),

    /// Message failed to encode.
    #[error("Failed to encode {type_url}: {reason}")]
    Encode {
        /// Type url of the message
        type_url: &'static str,
        /// Codec error text
        reason: String,
    },

    /// Message failed to decode.
    #[error("Failed to decode {type_url}: {reason}")]
    Decode {
        /// Type url of the message
        type_url: String,
        /// Codec error text
        reason: String,
    },

    /// Content hash string is not valid base64.
    #[error("Invalid content hash: {0}")]
    InvalidContentHash(String),
}

impl HasErrorCode for TypesError {
    fn code(&self) -> ErrorCode {
        match self {
            TypesError::InvalidAssetPayload(_) => ErrorCode::InvalidAssetPayload,
            TypesError::Encode { .. } | TypesError::Decode { .. } => ErrorCode::Codec,
            TypesError::InvalidContentHash(_) => ErrorCode::Codec,
        }
    }
}
