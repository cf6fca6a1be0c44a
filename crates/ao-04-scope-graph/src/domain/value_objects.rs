//! # Value Objects
//!
//! Process-wide defaults and the fixed descriptors stamped onto every
//! onboarded asset.

use ao_01_metadata_address::MetadataAddress;
use serde::{Deserialize, Serialize};
use shared_types::{ContentHash, RecordSpecification};
use std::collections::BTreeSet;
use std::fmt;
use std::str::FromStr;
use uuid::Uuid;

/// Record name of the generic asset class.
pub const DEFAULT_RECORD_NAME: &str = "Asset";

/// Input that receives the payload content hash for generic assets.
pub const ASSET_HASH_INPUT: &str = "AssetHash";

/// Declared type of every hash input.
pub const ASSET_HASH_INPUT_TYPE: &str = "String";

/// Family of payloads sharing one contract class, record shape and process.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AssetClass {
    /// Generic onboarded asset.
    #[default]
    Asset,
    /// Servicing state of a loan pool.
    LoanPoolState,
}

impl AssetClass {
    /// Every known class.
    pub const ALL: [AssetClass; 2] = [AssetClass::Asset, AssetClass::LoanPoolState];

    /// Contract class name; its hash is the contract source hash.
    pub const fn contract_class_name(&self) -> &'static str {
        match self {
            AssetClass::Asset => "tech.figure.asset.v1beta1.Asset",
            AssetClass::LoanPoolState => "tech.figure.asset.loan.LoanPoolState",
        }
    }

    /// Human-readable contract description.
    pub const fn description(&self) -> &'static str {
        match self {
            AssetClass::Asset => "Generic onboarded asset",
            AssetClass::LoanPoolState => "Loan pool servicing state",
        }
    }

    /// Record name, also the record specification name.
    pub const fn record_name(&self) -> &'static str {
        match self {
            AssetClass::Asset => DEFAULT_RECORD_NAME,
            AssetClass::LoanPoolState => "LoanPoolState",
        }
    }

    /// Record specification type name.
    pub const fn record_type_name(&self) -> &'static str {
        match self {
            AssetClass::Asset => "AssetType",
            AssetClass::LoanPoolState => "tech.figure.asset.loan.LoanPoolState",
        }
    }

    /// The single record input, which carries the content hash.
    pub const fn hash_input(&self) -> &'static str {
        match self {
            AssetClass::Asset => ASSET_HASH_INPUT,
            AssetClass::LoanPoolState => "LoanPoolState",
        }
    }

    /// Process name stamped on records.
    pub const fn process_name(&self) -> &'static str {
        match self {
            AssetClass::Asset => "AssetOnboardProcess",
            AssetClass::LoanPoolState => "LoanPoolStateProcess",
        }
    }

    /// Process method stamped on records.
    pub const fn process_method(&self) -> &'static str {
        match self {
            AssetClass::Asset => "Asset",
            AssetClass::LoanPoolState => "LoanPoolState",
        }
    }
}

impl fmt::Display for AssetClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AssetClass::Asset => write!(f, "asset"),
            AssetClass::LoanPoolState => write!(f, "loan_pool_state"),
        }
    }
}

impl FromStr for AssetClass {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().replace('-', "_").as_str() {
            "asset" => Ok(AssetClass::Asset),
            "loan_pool_state" => Ok(AssetClass::LoanPoolState),
            other => Err(format!("unknown asset class [{other}]")),
        }
    }
}

/// Audit version of a freshly created session.
pub const INITIAL_AUDIT_VERSION: u32 = 1;

/// Default specification ids used when the caller supplies no addresses.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SpecificationDefaults {
    /// Default contract specification id.
    pub contract_spec_id: Uuid,
    /// Default scope specification id.
    pub scope_spec_id: Uuid,
}

impl SpecificationDefaults {
    /// Default contract specification address.
    pub fn contract_spec_address(&self) -> MetadataAddress {
        MetadataAddress::for_contract_specification(self.contract_spec_id)
    }

    /// Default scope specification address.
    pub fn scope_spec_address(&self) -> MetadataAddress {
        MetadataAddress::for_scope_specification(self.scope_spec_id)
    }
}

/// Whether a batch without explicit specification addresses also publishes
/// the default specifications.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SpecPublication {
    /// Defaults already exist on the ledger: emit scope, session and record.
    #[default]
    ReferenceExisting,
    /// Emit the contract, scope and record specifications too.
    PublishDefaults,
}

/// Inputs of one new-scope batch.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct NewScopeRequest {
    /// Caller-supplied scope id.
    pub scope_id: Uuid,
    /// Hash of the stored payload.
    pub content_hash: ContentHash,
    /// Owning account address.
    pub owner_address: String,
    /// Explicit scope specification.
    pub scope_spec_address: Option<MetadataAddress>,
    /// Explicit contract specification.
    pub contract_spec_address: Option<MetadataAddress>,
    /// Record specification whose inputs shape the record.
    pub record_specification: Option<RecordSpecification>,
    /// Read-only data-access addresses.
    pub additional_audiences: BTreeSet<String>,
    /// Class selecting the record shape and process.
    pub asset_class: AssetClass,
}

impl NewScopeRequest {
    /// Request with no explicit specifications and no extra audiences.
    pub fn new(scope_id: Uuid, content_hash: ContentHash, owner_address: impl Into<String>) -> Self {
        Self {
            scope_id,
            content_hash,
            owner_address: owner_address.into(),
            scope_spec_address: None,
            contract_spec_address: None,
            record_specification: None,
            additional_audiences: BTreeSet::new(),
            asset_class: AssetClass::default(),
        }
    }

    /// Select the asset class.
    pub fn with_asset_class(mut self, asset_class: AssetClass) -> Self {
        self.asset_class = asset_class;
        self
    }

    /// Attach resolved specifications.
    pub fn with_specifications(
        mut self,
        scope_spec_address: Option<MetadataAddress>,
        contract_spec_address: Option<MetadataAddress>,
        record_specification: Option<RecordSpecification>,
    ) -> Self {
        self.scope_spec_address = scope_spec_address;
        self.contract_spec_address = contract_spec_address;
        self.record_specification = record_specification;
        self
    }

    /// Attach read-only data-access addresses.
    pub fn with_audiences(mut self, audiences: impl IntoIterator<Item = String>) -> Self {
        self.additional_audiences.extend(audiences);
        self
    }

    /// Whether the caller supplied any specification address.
    pub fn has_explicit_specifications(&self) -> bool {
        self.scope_spec_address.is_some() || self.contract_spec_address.is_some()
    }
}
