//! # New-Scope Batch
//!
//! Scope, session and record writes for one onboarded asset, optionally
//! preceded by the specification writes they reference.

use crate::algorithms::specifications::{
    default_record_specification, record_process, specification_writes,
};
use crate::domain::{
    AssetClass, GraphError, NewScopeRequest, SpecPublication, SpecificationDefaults,
    INITIAL_AUDIT_VERSION,
};
use ao_01_metadata_address::{AddressKind, MetadataAddress};
use shared_types::{
    AuditFields, MsgWriteRecord, MsgWriteScope, MsgWriteSession, Party, Record, RecordInput,
    RecordInputStatus, RecordOutput, RecordSpecification, ResultStatus, Scope, Session,
    WriteOperation,
};
use std::collections::BTreeSet;
use uuid::Uuid;

/// Build the write operations for a new scope with session `session_id`.
///
/// Emits `[CS, SS,] scope, session, [RS,] record`. The bracketed writes are
/// present only under `PublishDefaults` when the request carries no explicit
/// specification address.
pub fn build_new_scope_batch(
    request: &NewScopeRequest,
    defaults: &SpecificationDefaults,
    publication: SpecPublication,
    session_id: Uuid,
) -> Result<Vec<WriteOperation>, GraphError> {
    let owner = request.owner_address.as_str();
    if owner.trim().is_empty() {
        return Err(GraphError::EmptyOwner);
    }

    let scope_spec = match &request.scope_spec_address {
        Some(address) => address.clone(),
        None => defaults.scope_spec_address(),
    };
    scope_spec.expect_kind(AddressKind::ScopeSpecification)?;
    let contract_spec = match &request.contract_spec_address {
        Some(address) => address.clone(),
        None => defaults.contract_spec_address(),
    };
    contract_spec.expect_kind(AddressKind::ContractSpecification)?;
    let contract_spec_uuid = contract_spec.primary_uuid();
    let scope_spec_uuid = scope_spec.primary_uuid();

    let record_spec = match &request.record_specification {
        Some(spec) => spec.clone(),
        None => default_record_specification(request.asset_class, contract_spec_uuid)?,
    };

    let publish = publication == SpecPublication::PublishDefaults
        && !request.has_explicit_specifications();
    let signers = vec![owner.to_string()];
    let owners = vec![Party::owner(owner)];
    let session_address = MetadataAddress::for_session(request.scope_id, session_id);

    let mut data_access = BTreeSet::from([owner.to_string()]);
    data_access.extend(request.additional_audiences.iter().cloned());

    let scope_write = MsgWriteScope {
        scope: Scope {
            scope_id: MetadataAddress::for_scope(request.scope_id),
            specification_id: scope_spec,
            owners: owners.clone(),
            data_access,
            value_owner_address: owner.to_string(),
        },
        signers: signers.clone(),
        scope_uuid: request.scope_id,
        spec_uuid: scope_spec_uuid,
    };

    let session_write = MsgWriteSession {
        session: Session {
            session_id: session_address.clone(),
            specification_id: contract_spec,
            parties: owners.clone(),
            name: record_spec.name.clone(),
            audit: AuditFields {
                created_by: owner.to_string(),
                updated_by: owner.to_string(),
                version: INITIAL_AUDIT_VERSION,
                message: String::new(),
            },
        },
        signers: signers.clone(),
        scope_uuid: request.scope_id,
        session_uuid: session_id,
    };

    let record_write = MsgWriteRecord {
        record: build_record(
            request.asset_class,
            &record_spec,
            session_address,
            &request.content_hash.to_string(),
            contract_spec_uuid,
        )?,
        signers: signers.clone(),
        parties: owners,
        contract_spec_uuid,
    };

    let mut operations = Vec::with_capacity(if publish { 6 } else { 3 });
    if publish {
        let [contract_spec_write, scope_spec_write, record_spec_write] =
            specification_writes(
                owner,
                request.asset_class,
                contract_spec_uuid,
                scope_spec_uuid,
                record_spec,
            );
        operations.push(contract_spec_write);
        operations.push(scope_spec_write);
        operations.push(scope_write.into());
        operations.push(session_write.into());
        operations.push(record_spec_write);
    } else {
        operations.push(scope_write.into());
        operations.push(session_write.into());
    }
    operations.push(record_write.into());
    Ok(operations)
}

/// One input/output pair per declared input; only the class hash input
/// carries the content hash.
fn build_record(
    asset_class: AssetClass,
    spec: &RecordSpecification,
    session_id: MetadataAddress,
    content_hash: &str,
    contract_spec_uuid: Uuid,
) -> Result<Record, GraphError> {
    let (inputs, outputs): (Vec<RecordInput>, Vec<RecordOutput>) = spec
        .inputs
        .iter()
        .map(|input| {
            let hash = if input.name == asset_class.hash_input() {
                content_hash.to_string()
            } else {
                String::new()
            };
            (
                RecordInput {
                    name: input.name.clone(),
                    type_name: input.type_name.clone(),
                    hash: hash.clone(),
                    status: RecordInputStatus::Proposed,
                },
                RecordOutput {
                    hash,
                    status: ResultStatus::Pass,
                },
            )
        })
        .unzip();

    Ok(Record {
        name: spec.name.clone(),
        session_id,
        process: record_process(asset_class),
        inputs,
        outputs,
        specification_id: MetadataAddress::for_record_specification(
            contract_spec_uuid,
            &spec.name,
        )?,
    })
}
