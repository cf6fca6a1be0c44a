//! # Domain Value Objects
//!
//! The six metadata object kinds and their fixed encoding parameters.

use super::errors::AddressFormatError;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Kind of ledger metadata object an address points at.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum AddressKind {
    /// Root object for one onboarded asset.
    Scope,
    /// One contract execution against a scope.
    Session,
    /// Named output of a session.
    Record,
    /// Process/class that produces scopes.
    ContractSpecification,
    /// Allowed contract specifications for a class of scopes.
    ScopeSpecification,
    /// Named record a contract produces.
    RecordSpecification,
}

impl AddressKind {
    /// All kinds, in type-byte order.
    pub const ALL: [AddressKind; 6] = [
        AddressKind::Scope,
        AddressKind::Session,
        AddressKind::Record,
        AddressKind::ContractSpecification,
        AddressKind::ScopeSpecification,
        AddressKind::RecordSpecification,
    ];

    /// Leading byte of the binary address.
    pub const fn type_byte(self) -> u8 {
        match self {
            AddressKind::Scope => 0x00,
            AddressKind::Session => 0x01,
            AddressKind::Record => 0x02,
            AddressKind::ContractSpecification => 0x03,
            AddressKind::ScopeSpecification => 0x04,
            AddressKind::RecordSpecification => 0x05,
        }
    }

    /// Bech32 human readable part.
    pub const fn hrp(self) -> &'static str {
        match self {
            AddressKind::Scope => "scope",
            AddressKind::Session => "session",
            AddressKind::Record => "record",
            AddressKind::ContractSpecification => "contractspec",
            AddressKind::ScopeSpecification => "scopespec",
            AddressKind::RecordSpecification => "recspec",
        }
    }

    /// Whether the address carries a second component after the primary uuid.
    pub const fn has_secondary(self) -> bool {
        matches!(
            self,
            AddressKind::Session | AddressKind::Record | AddressKind::RecordSpecification
        )
    }

    /// Total byte length of an address of this kind.
    pub const fn byte_len(self) -> usize {
        if self.has_secondary() {
            33
        } else {
            17
        }
    }

    /// Look up a kind by its type byte.
    pub fn from_type_byte(byte: u8) -> Result<Self, AddressFormatError> {
        Self::ALL
            .into_iter()
            .find(|kind| kind.type_byte() == byte)
            .ok_or(AddressFormatError::UnknownTypeByte(byte))
    }

    /// Look up a kind by its bech32 prefix.
    pub fn from_hrp(hrp: &str) -> Result<Self, AddressFormatError> {
        Self::ALL
            .into_iter()
            .find(|kind| kind.hrp() == hrp)
            .ok_or_else(|| AddressFormatError::UnknownPrefix(hrp.to_string()))
    }
}

impl fmt::Display for AddressKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.hrp())
    }
}
