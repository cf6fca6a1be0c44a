//! # Metadata Address
//!
//! A `MetadataAddress` is a pure function of `(kind, primary uuid, secondary)`.
//! Nothing here reads the clock or draws randomness.

use super::errors::AddressFormatError;
use super::value_objects::AddressKind;
use crate::encoding;
use serde::de::{self, Visitor};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use sha2::{Digest, Sha256};
use std::fmt;
use std::str::FromStr;
use uuid::Uuid;

/// Length of an embedded UUID.
pub const UUID_LEN: usize = 16;

/// Length of the truncated record-name hash.
pub const NAME_HASH_LEN: usize = 16;

/// Second component of a two-part address.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub enum SecondaryId {
    /// Session uuid (Session addresses).
    Uuid(Uuid),
    /// Record name (Record and RecordSpecification addresses).
    Name(String),
}

/// Deterministic byte address of a ledger metadata object.
#[derive(Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct MetadataAddress {
    kind: AddressKind,
    bytes: Vec<u8>,
}

impl MetadataAddress {
    fn compose(kind: AddressKind, primary: Uuid, secondary: &[u8]) -> Self {
        let mut bytes = Vec::with_capacity(kind.byte_len());
        bytes.push(kind.type_byte());
        bytes.extend_from_slice(primary.as_bytes());
        bytes.extend_from_slice(secondary);
        Self { kind, bytes }
    }

    /// Address of a scope.
    pub fn for_scope(scope_id: Uuid) -> Self {
        Self::compose(AddressKind::Scope, scope_id, &[])
    }

    /// Address of a session within a scope.
    pub fn for_session(scope_id: Uuid, session_id: Uuid) -> Self {
        Self::compose(AddressKind::Session, scope_id, session_id.as_bytes())
    }

    /// Address of a named record within a scope.
    pub fn for_record(scope_id: Uuid, name: &str) -> Result<Self, AddressFormatError> {
        let hash = name_hash(name)?;
        Ok(Self::compose(AddressKind::Record, scope_id, &hash))
    }

    /// Address of a contract specification.
    pub fn for_contract_specification(spec_id: Uuid) -> Self {
        Self::compose(AddressKind::ContractSpecification, spec_id, &[])
    }

    /// Address of a scope specification.
    pub fn for_scope_specification(spec_id: Uuid) -> Self {
        Self::compose(AddressKind::ScopeSpecification, spec_id, &[])
    }

    /// Address of a named record specification under a contract specification.
    pub fn for_record_specification(
        contract_spec_id: Uuid,
        name: &str,
    ) -> Result<Self, AddressFormatError> {
        let hash = name_hash(name)?;
        Ok(Self::compose(
            AddressKind::RecordSpecification,
            contract_spec_id,
            &hash,
        ))
    }

    /// Validate raw bytes and wrap them.
    pub fn from_bytes(bytes: &[u8]) -> Result<Self, AddressFormatError> {
        let first = *bytes.first().ok_or(AddressFormatError::Empty)?;
        let kind = AddressKind::from_type_byte(first)?;
        if bytes.len() != kind.byte_len() {
            return Err(AddressFormatError::InvalidLength {
                kind,
                expected: kind.byte_len(),
                actual: bytes.len(),
            });
        }
        Ok(Self {
            kind,
            bytes: bytes.to_vec(),
        })
    }

    /// Parse the bech32 form.
    pub fn parse(s: &str) -> Result<Self, AddressFormatError> {
        let trimmed = s.trim();
        if trimmed.is_empty() {
            return Err(AddressFormatError::Empty);
        }
        let (hrp, data) = encoding::decode(trimmed)?;
        let address = Self::from_bytes(&data)?;
        let kind = address.kind();
        if kind.hrp() != hrp {
            return Err(AddressFormatError::PrefixMismatch { hrp, kind });
        }
        Ok(address)
    }

    /// Object kind encoded in the type byte.
    pub fn kind(&self) -> AddressKind {
        self.kind
    }

    /// Raw address bytes.
    pub fn as_bytes(&self) -> &[u8] {
        &self.bytes
    }

    /// Consume into raw bytes.
    pub fn into_bytes(self) -> Vec<u8> {
        self.bytes
    }

    /// Recover the embedded primary uuid (scope id or specification id).
    pub fn primary_uuid(&self) -> Uuid {
        let mut raw = [0u8; UUID_LEN];
        raw.copy_from_slice(&self.bytes[1..1 + UUID_LEN]);
        Uuid::from_bytes(raw)
    }

    /// Recover the session uuid of a Session address.
    pub fn secondary_uuid(&self) -> Option<Uuid> {
        if self.kind() != AddressKind::Session {
            return None;
        }
        let mut raw = [0u8; UUID_LEN];
        raw.copy_from_slice(&self.bytes[1 + UUID_LEN..]);
        Some(Uuid::from_bytes(raw))
    }

    /// Fail with `WrongKind` unless this address is of `expected` kind.
    pub fn expect_kind(&self, expected: AddressKind) -> Result<(), AddressFormatError> {
        let actual = self.kind();
        if actual == expected {
            Ok(())
        } else {
            Err(AddressFormatError::WrongKind { expected, actual })
        }
    }

    /// Bech32 rendering.
    pub fn to_bech32(&self) -> Result<String, AddressFormatError> {
        encoding::encode(self.kind().hrp(), &self.bytes)
    }
}

/// Compute an address from its identifiers.
///
/// Session takes `SecondaryId::Uuid`; Record and RecordSpecification take
/// `SecondaryId::Name`; every other kind takes no secondary id.
pub fn address(
    kind: AddressKind,
    primary: Uuid,
    secondary: Option<SecondaryId>,
) -> Result<MetadataAddress, AddressFormatError> {
    match (kind, secondary) {
        (AddressKind::Scope, None) => Ok(MetadataAddress::for_scope(primary)),
        (AddressKind::ContractSpecification, None) => {
            Ok(MetadataAddress::for_contract_specification(primary))
        }
        (AddressKind::ScopeSpecification, None) => {
            Ok(MetadataAddress::for_scope_specification(primary))
        }
        (AddressKind::Session, Some(SecondaryId::Uuid(session_id))) => {
            Ok(MetadataAddress::for_session(primary, session_id))
        }
        (AddressKind::Record, Some(SecondaryId::Name(name))) => {
            MetadataAddress::for_record(primary, &name)
        }
        (AddressKind::RecordSpecification, Some(SecondaryId::Name(name))) => {
            MetadataAddress::for_record_specification(primary, &name)
        }
        (kind, None) => Err(AddressFormatError::MissingSecondary(kind)),
        (kind, Some(_)) => Err(AddressFormatError::UnexpectedSecondary(kind)),
    }
}

fn name_hash(name: &str) -> Result<[u8; NAME_HASH_LEN], AddressFormatError> {
    let normalized = name.trim().to_lowercase();
    if normalized.is_empty() {
        return Err(AddressFormatError::EmptyName);
    }
    let digest = Sha256::digest(normalized.as_bytes());
    let mut out = [0u8; NAME_HASH_LEN];
    out.copy_from_slice(&digest[..NAME_HASH_LEN]);
    Ok(out)
}

impl fmt::Display for MetadataAddress {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.to_bech32() {
            Ok(s) => f.write_str(&s),
            Err(_) => write!(f, "{}:{}", self.kind().hrp(), hex::encode(&self.bytes)),
        }
    }
}

impl fmt::Debug for MetadataAddress {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "MetadataAddress({})", self)
    }
}

impl FromStr for MetadataAddress {
    type Err = AddressFormatError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl Serialize for MetadataAddress {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        if serializer.is_human_readable() {
            serializer.serialize_str(&self.to_string())
        } else {
            serializer.serialize_bytes(&self.bytes)
        }
    }
}

struct AddressVisitor;

impl<'de> Visitor<'de> for AddressVisitor {
    type Value = MetadataAddress;

    fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("a bech32 metadata address or its raw bytes")
    }

    fn visit_str<E: de::Error>(self, v: &str) -> Result<Self::Value, E> {
        MetadataAddress::parse(v).map_err(E::custom)
    }

    fn visit_bytes<E: de::Error>(self, v: &[u8]) -> Result<Self::Value, E> {
        MetadataAddress::from_bytes(v).map_err(E::custom)
    }

    fn visit_byte_buf<E: de::Error>(self, v: Vec<u8>) -> Result<Self::Value, E> {
        self.visit_bytes(&v)
    }

    fn visit_seq<A: de::SeqAccess<'de>>(self, mut seq: A) -> Result<Self::Value, A::Error> {
        let mut bytes = Vec::new();
        while let Some(b) = seq.next_element::<u8>()? {
            bytes.push(b);
        }
        self.visit_bytes(&bytes)
    }
}

impl<'de> Deserialize<'de> for MetadataAddress {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        if deserializer.is_human_readable() {
            deserializer.deserialize_str(AddressVisitor)
        } else {
            deserializer.deserialize_bytes(AddressVisitor)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn uuid(n: u128) -> Uuid {
        Uuid::from_u128(n)
    }

    #[test]
    fn test_scope_layout() {
        let id = uuid(0xabc);
        let addr = MetadataAddress::for_scope(id);
        assert_eq!(addr.as_bytes().len(), 17);
        assert_eq!(addr.as_bytes()[0], 0x00);
        assert_eq!(&addr.as_bytes()[1..], id.as_bytes());
    }

    #[test]
    fn test_session_recovers_both_ids() {
        let scope = uuid(1);
        let session = uuid(2);
        let addr = MetadataAddress::for_session(scope, session);
        assert_eq!(addr.kind(), AddressKind::Session);
        assert_eq!(addr.primary_uuid(), scope);
        assert_eq!(addr.secondary_uuid(), Some(session));
    }

    #[test]
    fn test_secondary_uuid_only_for_sessions() {
        let addr = MetadataAddress::for_record(uuid(1), "Asset").unwrap();
        assert_eq!(addr.secondary_uuid(), None);
    }

    #[test]
    fn test_record_name_normalized() {
        let a = MetadataAddress::for_record_specification(uuid(5), "Asset").unwrap();
        let b = MetadataAddress::for_record_specification(uuid(5), "  asset ").unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn test_blank_record_name_rejected() {
        assert_eq!(
            MetadataAddress::for_record(uuid(1), "   "),
            Err(AddressFormatError::EmptyName)
        );
    }

    #[test]
    fn test_same_uuid_different_kinds_disjoint() {
        let id = uuid(42);
        let scope = MetadataAddress::for_scope(id);
        let cs = MetadataAddress::for_contract_specification(id);
        let ss = MetadataAddress::for_scope_specification(id);
        assert_ne!(scope, cs);
        assert_ne!(cs, ss);
        assert_ne!(scope, ss);
    }

    #[test]
    fn test_bech32_roundtrip_and_prefix() {
        let addr = MetadataAddress::for_scope_specification(uuid(77));
        let s = addr.to_string();
        assert!(s.starts_with("scopespec1"));
        assert_eq!(s.parse::<MetadataAddress>().unwrap(), addr);
    }

    #[test]
    fn test_parse_rejects_garbage() {
        assert_eq!(MetadataAddress::parse(""), Err(AddressFormatError::Empty));
        assert!(matches!(
            MetadataAddress::parse("not-an-address"),
            Err(AddressFormatError::InvalidBech32(_))
        ));
    }

    #[test]
    fn test_parse_rejects_prefix_mismatch() {
        let addr = MetadataAddress::for_scope(uuid(3));
        let forged = encoding::encode("contractspec", addr.as_bytes()).unwrap();
        assert!(matches!(
            MetadataAddress::parse(&forged),
            Err(AddressFormatError::PrefixMismatch { .. })
        ));
    }

    #[test]
    fn test_from_bytes_rejects_bad_length() {
        let mut bytes = MetadataAddress::for_scope(uuid(3)).into_bytes();
        bytes.push(0);
        assert!(matches!(
            MetadataAddress::from_bytes(&bytes),
            Err(AddressFormatError::InvalidLength { expected: 17, actual: 18, .. })
        ));
    }

    #[test]
    fn test_address_fn_secondary_rules() {
        assert!(address(AddressKind::Scope, uuid(1), None).is_ok());
        assert_eq!(
            address(AddressKind::Session, uuid(1), None),
            Err(AddressFormatError::MissingSecondary(AddressKind::Session))
        );
        assert_eq!(
            address(
                AddressKind::Scope,
                uuid(1),
                Some(SecondaryId::Uuid(uuid(2)))
            ),
            Err(AddressFormatError::UnexpectedSecondary(AddressKind::Scope))
        );
        assert_eq!(
            address(
                AddressKind::Record,
                uuid(1),
                Some(SecondaryId::Uuid(uuid(2)))
            ),
            Err(AddressFormatError::UnexpectedSecondary(AddressKind::Record))
        );
    }

    #[test]
    fn test_expect_kind() {
        let addr = MetadataAddress::for_contract_specification(uuid(9));
        assert!(addr.expect_kind(AddressKind::ContractSpecification).is_ok());
        assert!(matches!(
            addr.expect_kind(AddressKind::ScopeSpecification),
            Err(AddressFormatError::WrongKind { .. })
        ));
    }

    #[test]
    fn test_serde_json_uses_bech32() {
        let addr = MetadataAddress::for_scope(uuid(8));
        let json = serde_json::to_string(&addr).unwrap();
        assert!(json.starts_with("\"scope1"));
        let back: MetadataAddress = serde_json::from_str(&json).unwrap();
        assert_eq!(back, addr);
    }

    #[test]
    fn test_serde_bincode_uses_bytes() {
        let addr = MetadataAddress::for_session(uuid(8), uuid(9));
        let bin = bincode::serialize(&addr).unwrap();
        let back: MetadataAddress = bincode::deserialize(&bin).unwrap();
        assert_eq!(back, addr);
    }

    fn any_kind() -> impl Strategy<Value = AddressKind> {
        prop::sample::select(AddressKind::ALL.to_vec())
    }

    fn secondary_for(kind: AddressKind, n: u128) -> Option<SecondaryId> {
        match kind {
            AddressKind::Session => Some(SecondaryId::Uuid(Uuid::from_u128(n))),
            AddressKind::Record | AddressKind::RecordSpecification => {
                Some(SecondaryId::Name(format!("record-{n}")))
            }
            _ => None,
        }
    }

    proptest! {
        #[test]
        fn prop_address_is_deterministic(kind in any_kind(), p in any::<u128>(), s in any::<u128>()) {
            let a = address(kind, Uuid::from_u128(p), secondary_for(kind, s)).unwrap();
            let b = address(kind, Uuid::from_u128(p), secondary_for(kind, s)).unwrap();
            prop_assert_eq!(a, b);
        }

        #[test]
        fn prop_distinct_inputs_distinct_addresses(
            k1 in any_kind(), k2 in any_kind(),
            p1 in any::<u128>(), p2 in any::<u128>(),
            s in any::<u128>(),
        ) {
            prop_assume!(k1 != k2 || p1 != p2);
            let a = address(k1, Uuid::from_u128(p1), secondary_for(k1, s)).unwrap();
            let b = address(k2, Uuid::from_u128(p2), secondary_for(k2, s)).unwrap();
            prop_assert_ne!(a, b);
        }

        #[test]
        fn prop_bech32_roundtrip(kind in any_kind(), p in any::<u128>(), s in any::<u128>()) {
            let a = address(kind, Uuid::from_u128(p), secondary_for(kind, s)).unwrap();
            let parsed = MetadataAddress::parse(&a.to_string()).unwrap();
            prop_assert_eq!(parsed.primary_uuid(), Uuid::from_u128(p));
            prop_assert_eq!(parsed, a);
        }
    }
}
