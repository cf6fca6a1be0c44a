//! # Ledger Metadata Entities
//!
//! Immutable value types for the metadata graph written to the ledger.
//!
//! ## Clusters
//!
//! - **Specifications**: `ContractSpecification`, `ScopeSpecification`,
//!   `RecordSpecification`, `InputSpecification`
//! - **Instances**: `Scope`, `Session`, `Record`
//! - **Shared**: `Party`, `PartyType`, `Process`, `AuditFields`
//!
//! Every cross-reference is a `MetadataAddress`; account addresses of owners
//! and audiences are plain strings as issued by the ledger.

use ao_01_metadata_address::MetadataAddress;
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

// =============================================================================
// SHARED
// =============================================================================

/// Role a party plays on a scope, session or record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum PartyType {
    /// Asset originator.
    Originator,
    /// Loan servicer.
    Servicer,
    /// Investor.
    Investor,
    /// Custodian.
    Custodian,
    /// Owner; the only role this system assigns.
    Owner,
    /// Affiliate.
    Affiliate,
    /// Omnibus account.
    Omnibus,
    /// Ledger provenance account.
    Provenance,
    /// Controller.
    Controller,
    /// Validator.
    Validator,
}

/// Account address with a role.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Party {
    /// Ledger account address.
    pub address: String,
    /// Role on the object.
    pub role: PartyType,
}

impl Party {
    /// Owner party for `address`.
    pub fn owner(address: impl Into<String>) -> Self {
        Self {
            address: address.into(),
            role: PartyType::Owner,
        }
    }
}

/// Descriptor of the logic that produced a record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Process {
    /// Process name.
    pub name: String,
    /// Method invoked.
    pub method: String,
    /// Hash identifying the process code.
    pub hash: String,
}

/// Audit metadata on a session.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuditFields {
    /// Account that created the session.
    pub created_by: String,
    /// Account that last updated the session.
    pub updated_by: String,
    /// Revision counter.
    pub version: u32,
    /// Free-form audit message.
    pub message: String,
}

/// Optional human-facing description of a specification.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Description {
    /// Display name.
    pub name: String,
    /// Longer description.
    pub description: String,
}

// =============================================================================
// SPECIFICATIONS
// =============================================================================

/// Where a contract specification's code lives.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum ContractSource {
    /// Hash of the contract code.
    Hash(String),
    /// Address of a stored resource.
    ResourceId(MetadataAddress),
}

/// Process/class that produced a scope.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContractSpecification {
    /// Address of this specification.
    pub specification_id: MetadataAddress,
    /// Optional description.
    pub description: Option<Description>,
    /// Accounts that own the specification.
    pub owner_addresses: Vec<String>,
    /// Roles allowed to participate.
    pub parties_involved: Vec<PartyType>,
    /// Contract code reference.
    pub source: ContractSource,
    /// Fully qualified class of the contract.
    pub class_name: String,
}

/// Set of contract specifications allowed for a class of scopes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScopeSpecification {
    /// Address of this specification.
    pub specification_id: MetadataAddress,
    /// Optional description.
    pub description: Option<Description>,
    /// Accounts that own the specification.
    pub owner_addresses: Vec<String>,
    /// Roles allowed to participate.
    pub parties_involved: Vec<PartyType>,
    /// Allowed contract specifications.
    pub contract_spec_ids: Vec<MetadataAddress>,
}

/// Where a declared input's value comes from.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum InputSource {
    /// Content hash placeholder.
    Hash(String),
    /// Another record.
    RecordId(MetadataAddress),
}

/// One named, typed input of a record specification.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InputSpecification {
    /// Input name.
    pub name: String,
    /// Type of the input value.
    pub type_name: String,
    /// Value source.
    pub source: InputSource,
}

/// Shape of a record's result.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum DefinitionType {
    /// Proposed value, not yet recorded.
    Proposed,
    /// Single record.
    Record,
    /// List of records.
    RecordList,
}

/// Named record a contract produces.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RecordSpecification {
    /// Address of this specification.
    pub specification_id: MetadataAddress,
    /// Record name.
    pub name: String,
    /// Declared inputs.
    pub inputs: Vec<InputSpecification>,
    /// Type of the record value.
    pub type_name: String,
    /// Result shape.
    pub result_type: DefinitionType,
    /// Roles responsible for producing the record.
    pub responsible_parties: Vec<PartyType>,
}

// =============================================================================
// INSTANCES
// =============================================================================

/// Ledger root object for one onboarded asset.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Scope {
    /// Scope address.
    pub scope_id: MetadataAddress,
    /// Governing scope specification.
    pub specification_id: MetadataAddress,
    /// Owners with their roles.
    pub owners: Vec<Party>,
    /// Accounts allowed to read the encrypted payload.
    pub data_access: BTreeSet<String>,
    /// Value owner account.
    pub value_owner_address: String,
}

/// One execution of a contract against a scope.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Session {
    /// Session address.
    pub session_id: MetadataAddress,
    /// Governing contract specification.
    pub specification_id: MetadataAddress,
    /// Acting parties.
    pub parties: Vec<Party>,
    /// Session name.
    pub name: String,
    /// Audit metadata.
    pub audit: AuditFields,
}

/// Status of a record input.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum RecordInputStatus {
    /// Value proposed by the session.
    Proposed,
    /// Value taken from an existing record.
    Record,
}

/// Outcome of producing a record output.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ResultStatus {
    /// Produced successfully.
    Pass,
    /// Skipped.
    Skip,
    /// Failed.
    Fail,
}

/// Concrete input of a record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RecordInput {
    /// Input name.
    pub name: String,
    /// Type of the input value.
    pub type_name: String,
    /// Content hash, empty when no payload is attached.
    pub hash: String,
    /// Input status.
    pub status: RecordInputStatus,
}

/// Concrete output of a record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RecordOutput {
    /// Content hash, empty when no payload is attached.
    pub hash: String,
    /// Result status.
    pub status: ResultStatus,
}

/// Named output of a session.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Record {
    /// Record name.
    pub name: String,
    /// Owning session address.
    pub session_id: MetadataAddress,
    /// Producing process.
    pub process: Process,
    /// Inputs.
    pub inputs: Vec<RecordInput>,
    /// Outputs, one per input.
    pub outputs: Vec<RecordOutput>,
    /// Governing record specification.
    pub specification_id: MetadataAddress,
}
