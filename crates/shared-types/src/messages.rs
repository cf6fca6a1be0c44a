//! # Write-Operation Messages
//!
//! The six ledger write operations, the `Message` codec trait and the `Any`
//! wrapper they are packed into.
//!
//! Type urls are fixed at compile time on each message type. There is no
//! runtime lookup of decoders; `ao-05` keeps an explicit registry keyed by
//! these constants.

use crate::errors::TypesError;
use crate::metadata::{
    ContractSpecification, Party, Record, RecordSpecification, Scope, ScopeSpecification, Session,
};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A value with a fixed type url and a binary encoding.
pub trait Message: Serialize + DeserializeOwned + Sized {
    /// Type url identifying this message on the wire.
    const TYPE_URL: &'static str;

    /// Binary encoding.
    fn encode_to_vec(&self) -> Result<Vec<u8>, TypesError> {
        bincode::serialize(self).map_err(|e| TypesError::Encode {
            type_url: Self::TYPE_URL,
            reason: e.to_string(),
        })
    }

    /// Binary decoding.
    fn decode(bytes: &[u8]) -> Result<Self, TypesError> {
        bincode::deserialize(bytes).map_err(|e| TypesError::Decode {
            type_url: Self::TYPE_URL.to_string(),
            reason: e.to_string(),
        })
    }

    /// Pack into an `Any`.
    fn to_any(&self) -> Result<Any, TypesError> {
        Ok(Any {
            type_url: Self::TYPE_URL.to_string(),
            value: self.encode_to_vec()?,
        })
    }

    /// Unpack from an `Any`, checking the type url.
    fn from_any(any: &Any) -> Result<Self, TypesError> {
        if any.type_url != Self::TYPE_URL {
            return Err(TypesError::Decode {
                type_url: any.type_url.clone(),
                reason: format!("expected {}", Self::TYPE_URL),
            });
        }
        Self::decode(&any.value)
    }
}

/// Type-tagged encoded message.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Any {
    /// Type url of the encoded message.
    pub type_url: String,
    /// Encoded message bytes.
    pub value: Vec<u8>,
}

/// Write a contract specification.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MsgWriteContractSpecification {
    /// Specification to write.
    pub specification: ContractSpecification,
    /// Authorizing accounts.
    pub signers: Vec<String>,
    /// Specification uuid.
    pub spec_uuid: Uuid,
}

/// Write a scope specification.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MsgWriteScopeSpecification {
    /// Specification to write.
    pub specification: ScopeSpecification,
    /// Authorizing accounts.
    pub signers: Vec<String>,
    /// Specification uuid.
    pub spec_uuid: Uuid,
}

/// Write a scope.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MsgWriteScope {
    /// Scope to write.
    pub scope: Scope,
    /// Authorizing accounts.
    pub signers: Vec<String>,
    /// Scope uuid.
    pub scope_uuid: Uuid,
    /// Scope specification uuid.
    pub spec_uuid: Uuid,
}

/// Write a session.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MsgWriteSession {
    /// Session to write.
    pub session: Session,
    /// Authorizing accounts.
    pub signers: Vec<String>,
    /// Owning scope uuid.
    pub scope_uuid: Uuid,
    /// Session uuid.
    pub session_uuid: Uuid,
}

/// Write a record specification.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MsgWriteRecordSpecification {
    /// Specification to write.
    pub specification: RecordSpecification,
    /// Authorizing accounts.
    pub signers: Vec<String>,
    /// Owning contract specification uuid.
    pub contract_spec_uuid: Uuid,
}

/// Write a record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MsgWriteRecord {
    /// Record to write.
    pub record: Record,
    /// Authorizing accounts.
    pub signers: Vec<String>,
    /// Parties acting on the record.
    pub parties: Vec<Party>,
    /// Governing contract specification uuid.
    pub contract_spec_uuid: Uuid,
}

impl Message for MsgWriteContractSpecification {
    const TYPE_URL: &'static str = "/provenance.metadata.v1.MsgWriteContractSpecificationRequest";
}

impl Message for MsgWriteScopeSpecification {
    const TYPE_URL: &'static str = "/provenance.metadata.v1.MsgWriteScopeSpecificationRequest";
}

impl Message for MsgWriteScope {
    const TYPE_URL: &'static str = "/provenance.metadata.v1.MsgWriteScopeRequest";
}

impl Message for MsgWriteSession {
    const TYPE_URL: &'static str = "/provenance.metadata.v1.MsgWriteSessionRequest";
}

impl Message for MsgWriteRecordSpecification {
    const TYPE_URL: &'static str = "/provenance.metadata.v1.MsgWriteRecordSpecificationRequest";
}

impl Message for MsgWriteRecord {
    const TYPE_URL: &'static str = "/provenance.metadata.v1.MsgWriteRecordRequest";
}

/// One typed ledger write.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum WriteOperation {
    /// write-contract-specification
    ContractSpecification(MsgWriteContractSpecification),
    /// write-scope-specification
    ScopeSpecification(MsgWriteScopeSpecification),
    /// write-scope
    Scope(MsgWriteScope),
    /// write-session
    Session(MsgWriteSession),
    /// write-record-specification
    RecordSpecification(MsgWriteRecordSpecification),
    /// write-record
    Record(MsgWriteRecord),
}

impl WriteOperation {
    /// Type url of the wrapped message.
    pub fn type_url(&self) -> &'static str {
        match self {
            WriteOperation::ContractSpecification(_) => MsgWriteContractSpecification::TYPE_URL,
            WriteOperation::ScopeSpecification(_) => MsgWriteScopeSpecification::TYPE_URL,
            WriteOperation::Scope(_) => MsgWriteScope::TYPE_URL,
            WriteOperation::Session(_) => MsgWriteSession::TYPE_URL,
            WriteOperation::RecordSpecification(_) => MsgWriteRecordSpecification::TYPE_URL,
            WriteOperation::Record(_) => MsgWriteRecord::TYPE_URL,
        }
    }

    /// Accounts authorizing this write.
    pub fn signers(&self) -> &[String] {
        match self {
            WriteOperation::ContractSpecification(m) => &m.signers,
            WriteOperation::ScopeSpecification(m) => &m.signers,
            WriteOperation::Scope(m) => &m.signers,
            WriteOperation::Session(m) => &m.signers,
            WriteOperation::RecordSpecification(m) => &m.signers,
            WriteOperation::Record(m) => &m.signers,
        }
    }

    /// Pack the wrapped message into an `Any`.
    pub fn to_any(&self) -> Result<Any, TypesError> {
        match self {
            WriteOperation::ContractSpecification(m) => m.to_any(),
            WriteOperation::ScopeSpecification(m) => m.to_any(),
            WriteOperation::Scope(m) => m.to_any(),
            WriteOperation::Session(m) => m.to_any(),
            WriteOperation::RecordSpecification(m) => m.to_any(),
            WriteOperation::Record(m) => m.to_any(),
        }
    }

    /// Short label for logs.
    pub fn label(&self) -> &'static str {
        match self {
            WriteOperation::ContractSpecification(_) => "write-contract-specification",
            WriteOperation::ScopeSpecification(_) => "write-scope-specification",
            WriteOperation::Scope(_) => "write-scope",
            WriteOperation::Session(_) => "write-session",
            WriteOperation::RecordSpecification(_) => "write-record-specification",
            WriteOperation::Record(_) => "write-record",
        }
    }
}

impl From<MsgWriteContractSpecification> for WriteOperation {
    fn from(m: MsgWriteContractSpecification) -> Self {
        WriteOperation::ContractSpecification(m)
    }
}

impl From<MsgWriteScopeSpecification> for WriteOperation {
    fn from(m: MsgWriteScopeSpecification) -> Self {
        WriteOperation::ScopeSpecification(m)
    }
}

impl From<MsgWriteScope> for WriteOperation {
    fn from(m: MsgWriteScope) -> Self {
        WriteOperation::Scope(m)
    }
}

impl From<MsgWriteSession> for WriteOperation {
    fn from(m: MsgWriteSession) -> Self {
        WriteOperation::Session(m)
    }
}

impl From<MsgWriteRecordSpecification> for WriteOperation {
    fn from(m: MsgWriteRecordSpecification) -> Self {
        WriteOperation::RecordSpecification(m)
    }
}

impl From<MsgWriteRecord> for WriteOperation {
    fn from(m: MsgWriteRecord) -> Self {
        WriteOperation::Record(m)
    }
}
