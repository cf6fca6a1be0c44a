//! # Specification References
//!
//! Callers may name a specification either by bech32 address or by bare UUID.
//! Both forms converge on the same `MetadataAddress` once the expected kind is
//! known.

use super::address::MetadataAddress;
use super::errors::AddressFormatError;
use super::value_objects::AddressKind;
use std::fmt;
use std::str::FromStr;
use uuid::Uuid;

/// Caller-supplied pointer to a specification.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum SpecReference {
    /// Fully formed bech32 address.
    Address(MetadataAddress),
    /// Bare specification id; the kind comes from context.
    Id(Uuid),
}

impl SpecReference {
    /// Parse a UUID string or a bech32 address.
    pub fn parse(input: &str) -> Result<Self, AddressFormatError> {
        let trimmed = input.trim();
        if trimmed.is_empty() {
            return Err(AddressFormatError::Empty);
        }
        if let Ok(id) = Uuid::parse_str(trimmed) {
            return Ok(SpecReference::Id(id));
        }
        if looks_like_uuid(trimmed) {
            return Err(AddressFormatError::InvalidUuid(trimmed.to_string()));
        }
        MetadataAddress::parse(trimmed).map(SpecReference::Address)
    }

    /// Resolve to an address of `expected` kind.
    ///
    /// Only ContractSpecification and ScopeSpecification can be built from a
    /// bare id; RecordSpecification needs a name and must be given as an address.
    pub fn resolve(&self, expected: AddressKind) -> Result<MetadataAddress, AddressFormatError> {
        match self {
            SpecReference::Address(address) => {
                address.expect_kind(expected)?;
                Ok(address.clone())
            }
            SpecReference::Id(id) => match expected {
                AddressKind::ContractSpecification => {
                    Ok(MetadataAddress::for_contract_specification(*id))
                }
                AddressKind::ScopeSpecification => {
                    Ok(MetadataAddress::for_scope_specification(*id))
                }
                AddressKind::Scope => Ok(MetadataAddress::for_scope(*id)),
                other => Err(AddressFormatError::MissingSecondary(other)),
            },
        }
    }

    /// Resolve an optional reference, falling back to a default id.
    pub fn resolve_or_default(
        reference: Option<&SpecReference>,
        expected: AddressKind,
        default_id: Uuid,
    ) -> Result<MetadataAddress, AddressFormatError> {
        match reference {
            Some(reference) => reference.resolve(expected),
            None => SpecReference::Id(default_id).resolve(expected),
        }
    }
}

fn looks_like_uuid(s: &str) -> bool {
    s.len() >= 32 && s.chars().all(|c| c.is_ascii_hexdigit() || c == '-')
}

impl From<MetadataAddress> for SpecReference {
    fn from(address: MetadataAddress) -> Self {
        SpecReference::Address(address)
    }
}

impl From<Uuid> for SpecReference {
    fn from(id: Uuid) -> Self {
        SpecReference::Id(id)
    }
}

impl FromStr for SpecReference {
    type Err = AddressFormatError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl fmt::Display for SpecReference {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SpecReference::Address(address) => write!(f, "{address}"),
            SpecReference::Id(id) => write!(f, "{id}"),
        }
    }
}
