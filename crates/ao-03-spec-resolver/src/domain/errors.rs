//! # Domain Errors
//!
//! Registry defects are reported with their own variants so that callers
//! can tell them apart from an unknown classifier.

use ao_01_metadata_address::AddressFormatError;
use shared_types::{ErrorCode, HasErrorCode};
use thiserror::Error;

/// Specification resolver errors.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ResolverError {
    /// No asset definition for the classifier.
    #[error("No specification registered for asset type [{classifier}]")]
    SpecificationNotFound {
        /// Normalized classifier
        classifier: String,
    },

    /// Scope specification is missing or lists no contract specification.
    #[error("Could not resolve a contract spec associated with scope spec address {scope_spec}")]
    ContractSpecNotFound {
        /// Scope specification address
        scope_spec: String,
    },

    /// Contract specification has no record specification.
    #[error("Could not resolve a record spec associated with contract spec address {contract_spec}")]
    RecordSpecNotFound {
        /// Contract specification address
        contract_spec: String,
    },

    /// Registry returned a malformed address.
    #[error("Registry returned a malformed address: {0}")]
    Address(#[from] AddressFormatError),

    /// Registry or metadata query failed.
    #[error("Specification registry error: {0}")]
    Registry(String),

    /// Registry call exceeded the configured timeout.
    #[error("Specification registry call timed out after {timeout_ms}ms")]
    Timeout {
        /// Configured timeout
        timeout_ms: u64,
    },
}

impl HasErrorCode for ResolverError {
    fn code(&self) -> ErrorCode {
        match self {
            ResolverError::SpecificationNotFound { .. } => ErrorCode::SpecificationNotFound,
            ResolverError::ContractSpecNotFound { .. } => ErrorCode::ContractSpecNotFound,
            ResolverError::RecordSpecNotFound { .. } => ErrorCode::RecordSpecNotFound,
            ResolverError::Address(_) => ErrorCode::AddressFormat,
            ResolverError::Registry(_) => ErrorCode::Transport,
            ResolverError::Timeout { .. } => ErrorCode::StoreTimeout,
        }
    }
}
