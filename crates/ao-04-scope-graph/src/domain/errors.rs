//! # Domain Errors

use ao_01_metadata_address::AddressFormatError;
use shared_types::{ErrorCode, HasErrorCode};
use thiserror::Error;

/// Scope graph builder errors.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GraphError {
    /// A supplied specification address is malformed or of the wrong kind.
    #[error("Invalid specification address: {0}")]
    Address(#[from] AddressFormatError),

    /// Owner address is blank.
    #[error("Owner address must not be empty")]
    EmptyOwner,
}

impl HasErrorCode for GraphError {
    fn code(&self) -> ErrorCode {
        match self {
            GraphError::Address(_) | GraphError::EmptyOwner => ErrorCode::AddressFormat,
        }
    }
}
