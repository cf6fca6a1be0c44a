//! # Transaction Assembler Service

use crate::algorithms::{assemble, assemble_outcomes, TypeRegistry};
use crate::domain::{AssemblerError, BatchOutcome, BulkAssembly, TxBody};
use shared_types::WriteOperation;
use tracing::{debug, info, warn};

/// Assembles write batches and renders the result.
#[derive(Clone, Debug)]
pub struct TxAssembler {
    registry: TypeRegistry,
    memo: String,
}

impl Default for TxAssembler {
    fn default() -> Self {
        Self::new(TypeRegistry::metadata())
    }
}

impl TxAssembler {
    /// Assembler rendering with `registry`.
    pub fn new(registry: TypeRegistry) -> Self {
        Self {
            registry,
            memo: String::new(),
        }
    }

    /// Memo stamped on every assembled body.
    pub fn with_memo(mut self, memo: impl Into<String>) -> Self {
        self.memo = memo.into();
        self
    }

    /// Registry used for decoding and rendering.
    pub fn registry(&self) -> &TypeRegistry {
        &self.registry
    }

    /// Flatten `batches`, preserving order.
    pub fn assemble(&self, batches: &[Vec<WriteOperation>]) -> Result<TxBody, AssemblerError> {
        let mut body = assemble(batches)?;
        body.memo.clone_from(&self.memo);
        debug!(
            batches = batches.len(),
            messages = body.len(),
            "[ao-05] Assembled transaction body"
        );
        Ok(body)
    }

    /// Assemble the successful outcomes of a bulk request.
    pub fn assemble_outcomes(
        &self,
        outcomes: Vec<BatchOutcome>,
    ) -> Result<BulkAssembly, AssemblerError> {
        let mut assembly = assemble_outcomes(outcomes)?;
        assembly.tx_body.memo.clone_from(&self.memo);
        if assembly.is_complete() {
            info!(
                assets = assembly.total(),
                messages = assembly.tx_body.len(),
                "[ao-05] Assembled bulk transaction"
            );
        } else {
            warn!(
                included = assembly.included.len(),
                failed = assembly.failures.len(),
                "[ao-05] Assembled partial bulk transaction"
            );
        }
        Ok(assembly)
    }

    /// Debug JSON rendering of `body`.
    pub fn render_json(&self, body: &TxBody) -> Result<String, AssemblerError> {
        body.to_json(&self.registry)
    }

    /// Typed operations of `body`.
    pub fn decode_operations(&self, body: &TxBody) -> Result<Vec<WriteOperation>, AssemblerError> {
        body.decode_operations(&self.registry)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ao_01_metadata_address::MetadataAddress;
    use shared_types::{
        Any, AuditFields, ErrorCode, HasErrorCode, MsgWriteScope, MsgWriteSession, Party, Scope,
        Session, TypesError,
    };
    use std::collections::BTreeSet;
    use uuid::Uuid;

    fn scope_write(scope_id: Uuid) -> WriteOperation {
        let spec_id = Uuid::new_v4();
        MsgWriteScope {
            scope: Scope {
                scope_id: MetadataAddress::for_scope(scope_id),
                specification_id: MetadataAddress::for_scope_specification(spec_id),
                owners: vec![Party::owner("owner1")],
                data_access: BTreeSet::from(["owner1".to_string()]),
                value_owner_address: "owner1".into(),
            },
            signers: vec!["owner1".into()],
            scope_uuid: scope_id,
            spec_uuid: spec_id,
        }
        .into()
    }

    fn session_write(scope_id: Uuid) -> WriteOperation {
        let session_id = Uuid::new_v4();
        MsgWriteSession {
            session: Session {
                session_id: MetadataAddress::for_session(scope_id, session_id),
                specification_id: MetadataAddress::for_contract_specification(Uuid::new_v4()),
                parties: vec![Party::owner("owner1")],
                name: "Asset".into(),
                audit: AuditFields {
                    created_by: "owner1".into(),
                    updated_by: "owner1".into(),
                    version: 1,
                    message: String::new(),
                },
            },
            signers: vec!["owner1".into()],
            scope_uuid: scope_id,
            session_uuid: session_id,
        }
        .into()
    }

    #[test]
    fn test_assemble_preserves_order() {
        let a = Uuid::new_v4();
        let b = Uuid::new_v4();
        let batches = vec![
            vec![scope_write(a), session_write(a)],
            vec![scope_write(b), session_write(b)],
        ];
        let assembler = TxAssembler::default();
        let body = assembler.assemble(&batches).unwrap();
        assert_eq!(body.len(), 4);

        let decoded = assembler.decode_operations(&body).unwrap();
        let expected: Vec<WriteOperation> = batches.into_iter().flatten().collect();
        assert_eq!(decoded, expected);
    }

    #[test]
    fn test_binary_round_trip() {
        let a = Uuid::new_v4();
        let assembler = TxAssembler::default().with_memo("onboard");
        let body = assembler.assemble(&[vec![scope_write(a)]]).unwrap();
        let restored = TxBody::decode(&body.encode().unwrap()).unwrap();
        assert_eq!(restored, body);
        assert_eq!(restored.memo, "onboard");
    }

    #[test]
    fn test_json_tags_every_message() {
        let a = Uuid::new_v4();
        let assembler = TxAssembler::default();
        let body = assembler
            .assemble(&[vec![scope_write(a), session_write(a)]])
            .unwrap();
        let json: serde_json::Value =
            serde_json::from_str(&assembler.render_json(&body).unwrap()).unwrap();
        let messages = json["messages"].as_array().unwrap();
        assert_eq!(messages.len(), 2);
        assert_eq!(messages[0]["@type"], "/provenance.metadata.v1.MsgWriteScopeRequest");
        assert_eq!(
            messages[0]["scope"]["scope_id"],
            MetadataAddress::for_scope(a).to_string()
        );
        assert_eq!(messages[1]["@type"], "/provenance.metadata.v1.MsgWriteSessionRequest");
    }

    #[test]
    fn test_json_fails_on_unregistered_type() {
        let body = TxBody {
            messages: vec![Any {
                type_url: "/unknown.Msg".into(),
                value: vec![],
            }],
            memo: String::new(),
        };
        let err = TxAssembler::default().render_json(&body).unwrap_err();
        assert_eq!(err.code(), ErrorCode::UnregisteredMessageType);
    }

    #[test]
    fn test_base64_messages_one_per_message() {
        let a = Uuid::new_v4();
        let body = TxAssembler::default()
            .assemble(&[vec![scope_write(a), session_write(a)]])
            .unwrap();
        assert_eq!(body.to_base64_messages().unwrap().len(), 2);
    }

    #[test]
    fn test_outcomes_surface_failures() {
        let ok = Uuid::new_v4();
        let bad = Uuid::new_v4();
        let outcomes = vec![
            BatchOutcome::built(ok, vec![scope_write(ok), session_write(ok)]),
            BatchOutcome::failed(bad, &TypesError::InvalidAssetPayload("not json".into())),
        ];
        let assembly = TxAssembler::default().assemble_outcomes(outcomes).unwrap();

        assert!(!assembly.is_complete());
        assert_eq!(assembly.total(), 2);
        assert_eq!(assembly.included, vec![ok]);
        assert_eq!(assembly.tx_body.len(), 2);
        assert_eq!(assembly.failures[0].asset_id, bad);
        assert_eq!(assembly.failures[0].code, ErrorCode::InvalidAssetPayload);
    }
}
