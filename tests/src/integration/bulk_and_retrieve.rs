//! # Bulk Onboarding and Retrieval
//!
//! - Bulk: independent per-asset outcomes, input order, partial failure
//! - Retrieval: metadata without a key, plaintext with one
//! - Timeouts: a slow store surfaces `STORE_TIMEOUT` on put and get; a
//!   stalled asset in a bulk run leaves the others in the assembly

#[cfg(test)]
mod tests {
    use super::super::fixtures::{asset, HarnessBuilder, HELOC, OWNER};
    use ao_02_encrypted_object::{
        EncryptedObjectApi, EncryptedObjectClient, InMemoryObjectStore, ObjectClientConfig,
        ObjectStoreError,
    };
    use onboard_runtime::{OnboardError, Retrieved};
    use shared_crypto::Secp256k1KeyPair;
    use shared_types::{Asset, ErrorCode, HasErrorCode, Message};
    use std::collections::BTreeSet;
    use std::time::Duration;
    use uuid::Uuid;

    fn assets(n: usize) -> Vec<Asset> {
        (0..n).map(|_| asset(HELOC)).collect()
    }

    // =============================================================================
    // BULK
    // =============================================================================

    #[tokio::test]
    async fn test_bulk_preserves_input_order() {
        let h = HarnessBuilder::default().concurrency(4).build();
        let batch = assets(10);
        let ids: Vec<Uuid> = batch.iter().map(|a| a.id).collect();

        let bulk = h
            .service
            .onboard_bulk(batch, &h.recipient.public_key(), OWNER, false, Some(HELOC))
            .await
            .expect("bulk");

        assert!(bulk.is_complete());
        assert_eq!(bulk.included, ids);
        assert_eq!(bulk.tx_body.len(), 30);
        assert_eq!(h.store.len(), 10);
    }

    #[tokio::test]
    async fn test_bulk_partial_failure_keeps_other_assets() {
        let h = HarnessBuilder::default().fail_put(1).concurrency(1).build();
        let batch = assets(3);
        let ids: Vec<Uuid> = batch.iter().map(|a| a.id).collect();

        let bulk = h
            .service
            .onboard_bulk(batch, &h.recipient.public_key(), OWNER, false, Some(HELOC))
            .await
            .expect("bulk");

        assert!(!bulk.is_complete());
        assert_eq!(bulk.total(), 3);
        assert_eq!(bulk.included, vec![ids[0], ids[2]]);
        assert_eq!(bulk.failures.len(), 1);
        assert_eq!(bulk.failures[0].asset_id, ids[1]);
        assert_eq!(bulk.failures[0].code, ErrorCode::Transport);
        assert_eq!(bulk.tx_body.len(), 6);
    }

    #[tokio::test]
    async fn test_bulk_unknown_classifier_fails_whole_request() {
        let h = HarnessBuilder::default().build();

        let err = h
            .service
            .onboard_bulk(assets(2), &h.recipient.public_key(), OWNER, false, Some("auto"))
            .await
            .expect_err("unknown classifier");

        assert_eq!(err.code(), ErrorCode::SpecificationNotFound);
        assert!(h.store.is_empty());
    }

    // =============================================================================
    // RETRIEVAL
    // =============================================================================

    #[tokio::test]
    async fn test_retrieve_metadata_then_plaintext() {
        let h = HarnessBuilder::default().build();
        let asset = asset(HELOC);
        let hash = h
            .service
            .store_asset(&asset, &h.recipient.public_key(), true)
            .await
            .expect("store");

        let Retrieved::Metadata(metadata) = h
            .service
            .retrieve(&hash, &h.recipient.public_key(), None)
            .await
            .expect("metadata")
        else {
            panic!("expected metadata");
        };
        let keys = metadata.audience_keys();
        assert_eq!(keys.len(), 2);
        assert!(keys.contains(&h.manager.public_key()));

        let Retrieved::Plaintext(plaintext) = h
            .service
            .retrieve(&hash, &h.recipient.public_key(), Some(&h.recipient))
            .await
            .expect("plaintext")
        else {
            panic!("expected plaintext");
        };
        assert_eq!(plaintext, asset.encode_to_vec().expect("encode"));
    }

    #[tokio::test]
    async fn test_retrieve_unknown_hash() {
        let h = HarnessBuilder::default().build();
        let hash = "AAAA".parse().expect("base64 hash");

        let err = h
            .service
            .retrieve(&hash, &h.recipient.public_key(), None)
            .await
            .expect_err("unknown hash");
        assert_eq!(err.code(), ErrorCode::ObjectNotFound);
    }

    #[tokio::test]
    async fn test_retrieve_key_mismatch() {
        let h = HarnessBuilder::default().build();
        let hash = h
            .service
            .store_asset(&asset(HELOC), &h.recipient.public_key(), false)
            .await
            .expect("store");

        let err = h
            .service
            .retrieve(
                &hash,
                &h.recipient.public_key(),
                Some(&Secp256k1KeyPair::generate()),
            )
            .await
            .expect_err("mismatched key pair");
        assert!(matches!(err, OnboardError::KeyMismatch(_)));
        assert_eq!(err.code(), ErrorCode::InvalidKey);
    }

    // =============================================================================
    // TIMEOUTS
    // =============================================================================

    #[tokio::test(start_paused = true)]
    async fn test_slow_store_times_out() {
        let h = HarnessBuilder::default()
            .store(InMemoryObjectStore::with_latency(Duration::from_secs(5)))
            .timeout(Duration::from_millis(100))
            .build();

        let err = h
            .service
            .onboard(&asset(HELOC), &h.recipient.public_key(), OWNER, false, Some(HELOC))
            .await
            .expect_err("timeout");
        assert_eq!(err.code(), ErrorCode::StoreTimeout);
        assert!(h.store.is_empty());
    }

    #[tokio::test(start_paused = true)]
    async fn test_slow_retrieve_times_out() {
        let h = HarnessBuilder::default()
            .store(InMemoryObjectStore::with_latency(Duration::from_secs(5)))
            .timeout(Duration::from_millis(100))
            .build();
        let seeding_client = EncryptedObjectClient::new(
            h.store.clone(),
            ObjectClientConfig::with_timeout_ms(10_000),
        );
        let asset = asset(HELOC);
        let hash = seeding_client
            .store(
                &asset.encode_to_vec().expect("encode"),
                &h.recipient.public_key(),
                &BTreeSet::new(),
            )
            .await
            .expect("seed store");

        for private_key in [None, Some(&h.recipient)] {
            let err = h
                .service
                .retrieve(&hash, &h.recipient.public_key(), private_key)
                .await
                .expect_err("get timeout");
            assert_eq!(
                err,
                OnboardError::ObjectStore(ObjectStoreError::StoreTimeout {
                    operation: "get",
                    timeout_ms: 100,
                })
            );
            assert_eq!(err.code(), ErrorCode::StoreTimeout);
        }
    }

    #[tokio::test(start_paused = true)]
    async fn test_bulk_timeout_keeps_completed_stores() {
        let h = HarnessBuilder::default()
            .stall_put(1, Duration::from_secs(5))
            .timeout(Duration::from_millis(100))
            .concurrency(3)
            .build();
        let batch = assets(4);
        let ids: Vec<Uuid> = batch.iter().map(|a| a.id).collect();

        let bulk = h
            .service
            .onboard_bulk(batch, &h.recipient.public_key(), OWNER, false, Some(HELOC))
            .await
            .expect("bulk");

        assert_eq!(bulk.total(), 4);
        assert_eq!(bulk.failures.len(), 1);
        assert_eq!(bulk.failures[0].code, ErrorCode::StoreTimeout);
        assert_eq!(bulk.included.len(), 3);
        assert!(!bulk.included.contains(&bulk.failures[0].asset_id));
        let expected: Vec<Uuid> = ids
            .iter()
            .copied()
            .filter(|id| *id != bulk.failures[0].asset_id)
            .collect();
        assert_eq!(bulk.included, expected);
        assert_eq!(bulk.tx_body.len(), 9);
        assert_eq!(h.store.len(), 3);
    }
}
