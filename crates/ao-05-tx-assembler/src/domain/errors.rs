//! # Domain Errors

use shared_types::{ErrorCode, HasErrorCode, TypesError};
use thiserror::Error;

/// Transaction assembler errors.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AssemblerError {
    /// Message type url has no registered decoder.
    #[error("Unregistered message type: {0}")]
    UnregisteredMessageType(String),

    /// A message failed to encode or decode.
    #[error(transparent)]
    Message(#[from] TypesError),

    /// The transaction body failed to encode, decode or render.
    #[error("Transaction codec error: {0}")]
    Codec(String),
}

impl HasErrorCode for AssemblerError {
    fn code(&self) -> ErrorCode {
        match self {
            AssemblerError::UnregisteredMessageType(_) => ErrorCode::UnregisteredMessageType,
            AssemblerError::Message(e) => e.code(),
            AssemblerError::Codec(_) => ErrorCode::Codec,
        }
    }
}

impl From<serde_json::Error> for AssemblerError {
    fn from(e: serde_json::Error) -> Self {
        AssemblerError::Codec(e.to_string())
    }
}

impl From<bincode::Error> for AssemblerError {
    fn from(e: bincode::Error) -> Self {
        AssemblerError::Codec(e.to_string())
    }
}
