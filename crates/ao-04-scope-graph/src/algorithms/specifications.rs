//! # Default Specifications
//!
//! Contract, scope and record specifications published for the
//! process-wide default ids, shaped by the asset class.

use crate::domain::{AssetClass, GraphError, SpecificationDefaults, ASSET_HASH_INPUT_TYPE};
use ao_01_metadata_address::MetadataAddress;
use shared_crypto::sha256_hex_upper;
use shared_types::{
    ContractSource, ContractSpecification, DefinitionType, Description, InputSource,
    InputSpecification, MsgWriteContractSpecification, MsgWriteRecordSpecification,
    MsgWriteScopeSpecification, PartyType, Process, RecordSpecification, ScopeSpecification,
    WriteOperation,
};
use uuid::Uuid;

/// Contract specification for `contract_spec_id`.
pub fn contract_specification(
    asset_class: AssetClass,
    contract_spec_id: Uuid,
    owner: &str,
) -> ContractSpecification {
    let class_name = asset_class.contract_class_name();
    ContractSpecification {
        specification_id: MetadataAddress::for_contract_specification(contract_spec_id),
        description: Some(Description {
            name: asset_class.record_name().to_string(),
            description: asset_class.description().to_string(),
        }),
        owner_addresses: vec![owner.to_string()],
        parties_involved: vec![PartyType::Owner],
        source: ContractSource::Hash(sha256_hex_upper(class_name.as_bytes())),
        class_name: class_name.to_string(),
    }
}

/// Scope specification allowing exactly `contract_spec_id`.
pub fn scope_specification(
    scope_spec_id: Uuid,
    contract_spec_id: Uuid,
    owner: &str,
) -> ScopeSpecification {
    ScopeSpecification {
        specification_id: MetadataAddress::for_scope_specification(scope_spec_id),
        description: Some(Description {
            name: "Asset scope".to_string(),
            description: "Scope of one onboarded asset".to_string(),
        }),
        owner_addresses: vec![owner.to_string()],
        parties_involved: vec![PartyType::Owner],
        contract_spec_ids: vec![MetadataAddress::for_contract_specification(contract_spec_id)],
    }
}

/// Record specification of `asset_class`: one hash input of type `String`.
pub fn default_record_specification(
    asset_class: AssetClass,
    contract_spec_id: Uuid,
) -> Result<RecordSpecification, GraphError> {
    let name = asset_class.record_name();
    let input = asset_class.hash_input();
    Ok(RecordSpecification {
        specification_id: MetadataAddress::for_record_specification(contract_spec_id, name)?,
        name: name.to_string(),
        inputs: vec![InputSpecification {
            name: input.to_string(),
            type_name: ASSET_HASH_INPUT_TYPE.to_string(),
            source: InputSource::Hash(sha256_hex_upper(input.as_bytes())),
        }],
        type_name: asset_class.record_type_name().to_string(),
        result_type: DefinitionType::Record,
        responsible_parties: vec![PartyType::Owner],
    })
}

/// Process descriptor stamped on every record of `asset_class`.
pub fn record_process(asset_class: AssetClass) -> Process {
    let method = asset_class.process_method();
    Process {
        name: asset_class.process_name().to_string(),
        method: method.to_string(),
        hash: sha256_hex_upper(method.as_bytes()),
    }
}

/// Specification writes, in ledger order: contract, scope, record.
pub fn specification_writes(
    owner: &str,
    asset_class: AssetClass,
    contract_spec_id: Uuid,
    scope_spec_id: Uuid,
    record_specification: RecordSpecification,
) -> [WriteOperation; 3] {
    let signers = vec![owner.to_string()];
    [
        MsgWriteContractSpecification {
            specification: contract_specification(asset_class, contract_spec_id, owner),
            signers: signers.clone(),
            spec_uuid: contract_spec_id,
        }
        .into(),
        MsgWriteScopeSpecification {
            specification: scope_specification(scope_spec_id, contract_spec_id, owner),
            signers: signers.clone(),
            spec_uuid: scope_spec_id,
        }
        .into(),
        MsgWriteRecordSpecification {
            specification: record_specification,
            signers,
            contract_spec_uuid: contract_spec_id,
        }
        .into(),
    ]
}

/// Publication batch for the process-wide default specifications.
pub fn build_specification_batch(
    owner: &str,
    defaults: &SpecificationDefaults,
    asset_class: AssetClass,
) -> Result<Vec<WriteOperation>, GraphError> {
    if owner.trim().is_empty() {
        return Err(GraphError::EmptyOwner);
    }
    let record = default_record_specification(asset_class, defaults.contract_spec_id)?;
    Ok(specification_writes(
        owner,
        asset_class,
        defaults.contract_spec_id,
        defaults.scope_spec_id,
        record,
    )
    .into())
}
