//! # Domain Errors
//!
//! Every malformed address surfaces as an `AddressFormatError`. Callers must
//! not swallow it: a silently dropped address lets a scope reference a
//! specification that does not exist.

use super::value_objects::AddressKind;
use thiserror::Error;

/// Address parsing and construction errors.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AddressFormatError {
    /// Input was empty or whitespace.
    #[error("Empty address")]
    Empty,

    /// Input is not valid bech32.
    #[error("Invalid bech32 address: {0}")]
    InvalidBech32(String),

    /// Bech32 human readable part is not a metadata prefix.
    #[error("Unknown address prefix: {0}")]
    UnknownPrefix(String),

    /// Leading type byte is not a metadata kind.
    #[error("Unknown address type byte: 0x{0:02x}")]
    UnknownTypeByte(u8),

    /// Human readable part disagrees with the type byte.
    #[error("Address prefix {hrp} does not match type {kind}")]
    PrefixMismatch {
        /// Prefix found in the string
        hrp: String,
        /// Kind encoded in the type byte
        kind: AddressKind,
    },

    /// Byte length does not match the kind.
    #[error("Invalid address length for {kind}: expected {expected}, got {actual}")]
    InvalidLength {
        /// Kind encoded in the type byte
        kind: AddressKind,
        /// Expected byte length
        expected: usize,
        /// Actual byte length
        actual: usize,
    },

    /// Address is well formed but of another kind.
    #[error("Expected a {expected} address, got {actual}")]
    WrongKind {
        /// Kind the caller asked for
        expected: AddressKind,
        /// Kind actually found
        actual: AddressKind,
    },

    /// Kind needs a secondary id (session uuid or record name) that was not given.
    #[error("{0} address requires a secondary id")]
    MissingSecondary(AddressKind),

    /// A secondary id was given for a kind that has none, or of the wrong form.
    #[error("{0} address does not accept this secondary id")]
    UnexpectedSecondary(AddressKind),

    /// Record names must not be blank.
    #[error("Record name must not be empty")]
    EmptyName,

    /// Input looked like a UUID but did not parse.
    #[error("Invalid UUID: {0}")]
    InvalidUuid(String),
}
