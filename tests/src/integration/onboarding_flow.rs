//! # Onboarding Flow
//!
//! Single-asset onboarding end to end:
//!
//! 1. **Classified asset**: classifier resolves, three writes, record input
//!    carries the content hash
//! 2. **Graph shape**: six writes when defaults are published, three otherwise
//! 3. **Ownership vs access**: audiences read, only the owner owns
//! 4. **Deterministic addressing**: same asset id, same scope address
//! 5. **Multiple audiences**: every audience decrypts the same plaintext
//! 6. **Named specifications**: bech32 address and bare UUID converge
//! 7. **Asset classes**: loan pool state records carry their own shape

#[cfg(test)]
mod tests {
    use super::super::fixtures::{asset, defaults, HarnessBuilder, HELOC, MANAGER, OWNER};
    use ao_01_metadata_address::{MetadataAddress, SpecReference};
    use ao_04_scope_graph::{AssetClass, SpecPublication, ASSET_HASH_INPUT, DEFAULT_RECORD_NAME};
    use onboard_runtime::{ExplicitSpecs, OnboardError, Retrieved};
    use shared_types::ContentHash;
    use uuid::Uuid;
    use shared_crypto::Secp256k1KeyPair;
    use shared_types::{ErrorCode, HasErrorCode, PartyType, RecordInputStatus, WriteOperation};

    // =============================================================================
    // CLASSIFIED ASSET
    // =============================================================================

    #[tokio::test]
    async fn test_classified_asset_yields_scope_session_record() {
        let h = HarnessBuilder::default().build();
        let asset = asset("HELOC");

        let result = h
            .service
            .onboard(&asset, &h.recipient.public_key(), OWNER, false, Some(" HELOC "))
            .await
            .expect("onboard");

        assert_eq!(
            h.labels(&result.tx_body),
            vec!["write-scope", "write-session", "write-record"]
        );

        let ops = h.operations(&result.tx_body);
        let WriteOperation::Record(record) = &ops[2] else {
            panic!("expected record write");
        };
        assert_eq!(record.record.name, DEFAULT_RECORD_NAME);
        assert_eq!(record.record.inputs[0].name, ASSET_HASH_INPUT);
        assert_eq!(record.record.inputs[0].hash, result.content_hash.to_string());
        assert_eq!(record.record.inputs[0].status, RecordInputStatus::Proposed);
        assert_eq!(record.record.outputs[0].hash, result.content_hash.to_string());
        assert_eq!(record.signers, vec![OWNER.to_string()]);

        let WriteOperation::Scope(scope) = &ops[0] else {
            panic!("expected scope write");
        };
        assert_eq!(
            scope.scope.specification_id,
            defaults().scope_spec_address()
        );
    }

    #[tokio::test]
    async fn test_unknown_classifier_stores_nothing() {
        let h = HarnessBuilder::default().build();

        let err = h
            .service
            .onboard(&asset("auto"), &h.recipient.public_key(), OWNER, false, Some("auto"))
            .await
            .expect_err("unknown classifier");

        assert_eq!(err.code(), ErrorCode::SpecificationNotFound);
        assert!(h.store.is_empty());
    }

    // =============================================================================
    // GRAPH SHAPE
    // =============================================================================

    #[tokio::test]
    async fn test_publish_defaults_emits_six_writes() {
        let h = HarnessBuilder::default()
            .publication(SpecPublication::PublishDefaults)
            .build();

        let result = h
            .service
            .onboard(&asset(""), &h.recipient.public_key(), OWNER, false, None)
            .await
            .expect("onboard");

        assert_eq!(
            h.labels(&result.tx_body),
            vec![
                "write-contract-specification",
                "write-scope-specification",
                "write-scope",
                "write-session",
                "write-record-specification",
                "write-record",
            ]
        );
    }

    #[tokio::test]
    async fn test_resolved_specifications_are_not_republished() {
        let h = HarnessBuilder::default()
            .publication(SpecPublication::PublishDefaults)
            .build();

        let result = h
            .service
            .onboard(&asset(HELOC), &h.recipient.public_key(), OWNER, false, Some(HELOC))
            .await
            .expect("onboard");

        assert_eq!(result.tx_body.len(), 3);
    }

    // =============================================================================
    // OWNERSHIP VS ACCESS
    // =============================================================================

    #[tokio::test]
    async fn test_audiences_read_but_do_not_own() {
        let h = HarnessBuilder::default().build();

        let result = h
            .service
            .onboard(&asset(HELOC), &h.recipient.public_key(), OWNER, true, Some(HELOC))
            .await
            .expect("onboard");

        let ops = h.operations(&result.tx_body);
        let WriteOperation::Scope(scope) = &ops[0] else {
            panic!("expected scope write");
        };
        assert_eq!(scope.scope.owners.len(), 1);
        assert_eq!(scope.scope.owners[0].address, OWNER);
        assert_eq!(scope.scope.owners[0].role, PartyType::Owner);
        assert_eq!(scope.scope.value_owner_address, OWNER);
        assert!(scope.scope.data_access.contains(OWNER));
        assert!(scope.scope.data_access.contains(MANAGER));

        for op in &ops {
            assert_eq!(op.signers(), [OWNER.to_string()].as_slice());
        }
    }

    // =============================================================================
    // DETERMINISTIC ADDRESSING
    // =============================================================================

    #[tokio::test]
    async fn test_reonboarding_keeps_scope_and_opens_new_session() {
        let h = HarnessBuilder::default().build();
        let asset = asset(HELOC);

        let mut scopes = Vec::new();
        let mut sessions = Vec::new();
        for _ in 0..2 {
            let result = h
                .service
                .onboard(&asset, &h.recipient.public_key(), OWNER, false, Some(HELOC))
                .await
                .expect("onboard");
            let ops = h.operations(&result.tx_body);
            let (
                WriteOperation::Scope(scope),
                WriteOperation::Session(session),
                WriteOperation::Record(record),
            ) = (&ops[0], &ops[1], &ops[2])
            else {
                panic!("expected scope, session, record");
            };
            assert_eq!(
                record.record.session_id,
                MetadataAddress::for_session(asset.id, session.session_uuid)
            );
            scopes.push(scope.scope.scope_id.clone());
            sessions.push(session.session.session_id.clone());
        }

        assert_eq!(scopes[0], MetadataAddress::for_scope(asset.id));
        assert_eq!(scopes[0], scopes[1]);
        assert_ne!(sessions[0], sessions[1]);
        assert_eq!(sessions[0].primary_uuid(), asset.id);
    }

    // =============================================================================
    // MULTIPLE AUDIENCES
    // =============================================================================

    #[tokio::test]
    async fn test_every_audience_decrypts_same_plaintext() {
        let h = HarnessBuilder::default().build();
        let asset = asset(HELOC);
        let result = h
            .service
            .onboard(&asset, &h.recipient.public_key(), OWNER, true, Some(HELOC))
            .await
            .expect("onboard");

        let as_recipient = h
            .service
            .retrieve_asset(&result.content_hash, &h.recipient)
            .await
            .expect("recipient decrypts");
        let as_manager = h
            .service
            .retrieve_asset(&result.content_hash, &h.manager)
            .await
            .expect("manager decrypts");
        assert_eq!(as_recipient, asset);
        assert_eq!(as_manager, asset);

        let stranger = Secp256k1KeyPair::generate();
        let err = h
            .service
            .retrieve(
                &result.content_hash,
                &stranger.public_key(),
                Some(&stranger),
            )
            .await
            .expect_err("stranger is not an audience");
        assert_eq!(err.code(), ErrorCode::AudienceNotFound);
    }

    #[tokio::test]
    async fn test_manager_excluded_without_permission() {
        let h = HarnessBuilder::default().build();
        let result = h
            .service
            .onboard(&asset(HELOC), &h.recipient.public_key(), OWNER, false, Some(HELOC))
            .await
            .expect("onboard");

        let Retrieved::Metadata(metadata) = h
            .service
            .retrieve(&result.content_hash, &h.recipient.public_key(), None)
            .await
            .expect("metadata")
        else {
            panic!("expected metadata");
        };
        assert_eq!(metadata.audience_keys(), vec![h.recipient.public_key()]);

        let err = h
            .service
            .retrieve(&result.content_hash, &h.manager.public_key(), Some(&h.manager))
            .await
            .expect_err("manager not granted");
        assert!(matches!(err, OnboardError::ObjectStore(_)));
    }

    // =============================================================================
    // NAMED SPECIFICATIONS
    // =============================================================================

    /// Pin the session so two batches can be compared message for message.
    fn pin_session(ops: &mut [WriteOperation], session_uuid: Uuid, session_id: &MetadataAddress) {
        for op in ops.iter_mut() {
            match op {
                WriteOperation::Session(msg) => {
                    msg.session_uuid = session_uuid;
                    msg.session.session_id = session_id.clone();
                }
                WriteOperation::Record(msg) => msg.record.session_id = session_id.clone(),
                _ => {}
            }
        }
    }

    #[tokio::test]
    async fn test_address_and_uuid_specs_build_identical_transactions() {
        let h = HarnessBuilder::default()
            .publication(SpecPublication::PublishDefaults)
            .build();
        let scope_id = Uuid::new_v4();
        let hash = ContentHash::new(vec![5u8; 32]);
        let scope_spec_id = Uuid::new_v4();
        let contract_spec_id = Uuid::new_v4();

        let by_address = ExplicitSpecs {
            scope_spec: Some(
                MetadataAddress::for_scope_specification(scope_spec_id)
                    .to_string()
                    .parse()
                    .expect("bech32 scope spec"),
            ),
            contract_spec: Some(
                MetadataAddress::for_contract_specification(contract_spec_id)
                    .to_string()
                    .parse()
                    .expect("bech32 contract spec"),
            ),
        };
        let by_uuid = ExplicitSpecs {
            scope_spec: Some(scope_spec_id.to_string().parse().expect("uuid")),
            contract_spec: Some(SpecReference::Id(contract_spec_id)),
        };
        assert!(matches!(by_address.scope_spec, Some(SpecReference::Address(_))));
        assert!(matches!(by_uuid.scope_spec, Some(SpecReference::Id(_))));

        let tx_address = h
            .service
            .create_scope_tx(scope_id, &hash, OWNER, false, None, &by_address)
            .await
            .expect("address path");
        let tx_uuid = h
            .service
            .create_scope_tx(scope_id, &hash, OWNER, false, None, &by_uuid)
            .await
            .expect("uuid path");
        assert_eq!(h.labels(&tx_address), vec!["write-scope", "write-session", "write-record"]);

        let mut address_ops = h.operations(&tx_address);
        let mut uuid_ops = h.operations(&tx_uuid);
        let session_uuid = Uuid::nil();
        let session_id = MetadataAddress::for_session(scope_id, session_uuid);
        pin_session(&mut address_ops, session_uuid, &session_id);
        pin_session(&mut uuid_ops, session_uuid, &session_id);

        let pinned_address = h.assembler.assemble(&[address_ops]).expect("assemble");
        let pinned_uuid = h.assembler.assemble(&[uuid_ops]).expect("assemble");
        assert_eq!(
            pinned_address.encode().expect("encode"),
            pinned_uuid.encode().expect("encode")
        );

        let WriteOperation::Scope(scope) = &h.operations(&tx_uuid)[0] else {
            panic!("expected scope write");
        };
        assert_eq!(
            scope.scope.specification_id,
            MetadataAddress::for_scope_specification(scope_spec_id)
        );
    }

    #[tokio::test]
    async fn test_wrong_kind_spec_address_is_rejected() {
        let h = HarnessBuilder::default().build();
        let specs = ExplicitSpecs {
            scope_spec: Some(SpecReference::Address(defaults().contract_spec_address())),
            contract_spec: None,
        };

        let err = h
            .service
            .onboard_with_specs(
                &asset(""),
                &h.recipient.public_key(),
                OWNER,
                false,
                None,
                &specs,
            )
            .await
            .expect_err("contract spec given as scope spec");
        assert_eq!(err.code(), ErrorCode::AddressFormat);
        assert!(h.store.is_empty());
    }

    // =============================================================================
    // ASSET CLASSES
    // =============================================================================

    #[tokio::test]
    async fn test_loan_pool_state_onboarding() {
        let h = HarnessBuilder::default()
            .publication(SpecPublication::PublishDefaults)
            .asset_class(AssetClass::LoanPoolState)
            .build();

        let result = h
            .service
            .onboard(&asset("loan"), &h.recipient.public_key(), OWNER, false, None)
            .await
            .expect("onboard");
        let ops = h.operations(&result.tx_body);
        assert_eq!(ops.len(), 6);

        let WriteOperation::ContractSpecification(contract) = &ops[0] else {
            panic!("expected contract specification");
        };
        assert_eq!(
            contract.specification.class_name,
            AssetClass::LoanPoolState.contract_class_name()
        );
        let WriteOperation::Record(record) = &ops[5] else {
            panic!("expected record write");
        };
        assert_eq!(record.record.name, "LoanPoolState");
        assert_eq!(record.record.process.name, "LoanPoolStateProcess");
        assert_eq!(record.record.inputs[0].name, "LoanPoolState");
        assert_eq!(record.record.inputs[0].hash, result.content_hash.to_string());
    }
}
