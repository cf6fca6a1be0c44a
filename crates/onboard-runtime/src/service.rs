//! # Onboarding Service
//!
//! Store, resolve, build, assemble. Each call is independent; the only
//! shared state is immutable configuration and the component handles.

use crate::container::AssetManager;
use crate::errors::OnboardError;
use ao_01_metadata_address::{AddressKind, SpecReference};
use ao_02_encrypted_object::{EncryptedObjectApi, EnvelopeMetadata};
use ao_03_spec_resolver::{ResolvedSpecification, SpecificationResolverApi};
use ao_04_scope_graph::{AssetClass, NewScopeRequest, ScopeGraphBuilder};
use ao_05_tx_assembler::{BatchOutcome, BulkAssembly, TxAssembler, TxBody};
use futures::stream::{self, StreamExt};
use serde::Serialize;
use shared_crypto::{Secp256k1KeyPair, Secp256k1PublicKey};
use shared_types::{Asset, ContentHash, Message, WriteOperation};
use std::collections::BTreeSet;
use std::sync::Arc;
use tracing::{debug, info, warn};
use uuid::Uuid;

/// Outcome of onboarding one asset.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct OnboardResult {
    /// Asset id, also used as the scope id.
    pub asset_id: Uuid,
    /// Hash the object store assigned to the encrypted payload.
    pub content_hash: ContentHash,
    /// Unsigned ledger transaction.
    pub tx_body: TxBody,
}

/// What a retrieval returns.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Retrieved {
    /// Decrypted payload; a private key was supplied.
    Plaintext(Vec<u8>),
    /// Envelope metadata; no private key was supplied.
    Metadata(EnvelopeMetadata),
}

/// Caller-named specifications, each given as a bech32 address or a bare id.
///
/// A named specification replaces whatever the classifier resolved for the
/// same slot, and suppresses publication of the defaults.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ExplicitSpecs {
    /// Scope specification.
    pub scope_spec: Option<SpecReference>,
    /// Contract specification.
    pub contract_spec: Option<SpecReference>,
}

impl ExplicitSpecs {
    /// Whether no specification is named.
    pub fn is_empty(&self) -> bool {
        self.scope_spec.is_none() && self.contract_spec.is_none()
    }

    fn apply(&self, resolved: &mut ResolvedSpecification) -> Result<(), OnboardError> {
        if let Some(reference) = &self.scope_spec {
            resolved.scope_spec_address = Some(reference.resolve(AddressKind::ScopeSpecification)?);
        }
        if let Some(reference) = &self.contract_spec {
            resolved.contract_spec_address =
                Some(reference.resolve(AddressKind::ContractSpecification)?);
        }
        Ok(())
    }
}

/// Audiences granted access next to the primary recipient.
#[derive(Debug, Clone, Default)]
struct Audiences {
    keys: BTreeSet<Secp256k1PublicKey>,
    addresses: BTreeSet<String>,
}

/// Asset onboarding service.
pub struct OnboardService {
    objects: Arc<dyn EncryptedObjectApi>,
    resolver: Arc<dyn SpecificationResolverApi>,
    graph: ScopeGraphBuilder,
    assembler: TxAssembler,
    asset_manager: Option<AssetManager>,
    asset_class: AssetClass,
    bulk_concurrency: usize,
}

impl OnboardService {
    /// Create a service from its components.
    pub fn new(
        objects: Arc<dyn EncryptedObjectApi>,
        resolver: Arc<dyn SpecificationResolverApi>,
        graph: ScopeGraphBuilder,
        assembler: TxAssembler,
    ) -> Self {
        Self {
            objects,
            resolver,
            graph,
            assembler,
            asset_manager: None,
            asset_class: AssetClass::default(),
            bulk_concurrency: 1,
        }
    }

    /// Grant `manager` read access when callers ask for it.
    pub fn with_asset_manager(mut self, manager: Option<AssetManager>) -> Self {
        self.asset_manager = manager;
        self
    }

    /// Asset class shaping records and published specifications.
    pub fn with_asset_class(mut self, asset_class: AssetClass) -> Self {
        self.asset_class = asset_class;
        self
    }

    /// Asset class in use.
    pub fn asset_class(&self) -> AssetClass {
        self.asset_class
    }

    /// Maximum assets in flight during bulk onboarding.
    pub fn with_bulk_concurrency(mut self, concurrency: usize) -> Self {
        self.bulk_concurrency = concurrency.max(1);
        self
    }

    /// Scope graph builder in use.
    pub fn graph(&self) -> &ScopeGraphBuilder {
        &self.graph
    }

    fn audiences(&self, permission_asset_manager: bool) -> Result<Audiences, OnboardError> {
        if !permission_asset_manager {
            return Ok(Audiences::default());
        }
        let manager = self
            .asset_manager
            .as_ref()
            .ok_or(OnboardError::AssetManagerNotConfigured)?;
        Ok(Audiences {
            keys: BTreeSet::from([manager.public_key]),
            addresses: BTreeSet::from([manager.address.clone()]),
        })
    }

    fn build_batch(
        &self,
        scope_id: Uuid,
        content_hash: &ContentHash,
        owner_address: &str,
        audiences: &Audiences,
        resolved: &ResolvedSpecification,
    ) -> Result<Vec<WriteOperation>, OnboardError> {
        let request = NewScopeRequest::new(scope_id, content_hash.clone(), owner_address)
            .with_specifications(
                resolved.scope_spec_address.clone(),
                resolved.contract_spec_address.clone(),
                resolved.record_specification.clone(),
            )
            .with_audiences(audiences.addresses.iter().cloned())
            .with_asset_class(self.asset_class);
        Ok(self.graph.build_new_scope_batch(&request)?)
    }

    async fn specifications(
        &self,
        classifier: Option<&str>,
        specs: &ExplicitSpecs,
    ) -> Result<ResolvedSpecification, OnboardError> {
        let mut resolved = self.resolver.resolve(classifier).await?;
        specs.apply(&mut resolved)?;
        Ok(resolved)
    }

    async fn store_payload(
        &self,
        asset: &Asset,
        audience_public_key: &Secp256k1PublicKey,
        audiences: &Audiences,
    ) -> Result<ContentHash, OnboardError> {
        let payload = asset.encode_to_vec()?;
        let hash = self
            .objects
            .store(&payload, audience_public_key, &audiences.keys)
            .await?;
        debug!(
            asset_id = %asset.id,
            hash = %hash,
            additional_audiences = audiences.keys.len(),
            "[runtime] Stored asset"
        );
        Ok(hash)
    }

    /// Encrypt and store `asset`; no ledger writes are built.
    pub async fn store_asset(
        &self,
        asset: &Asset,
        audience_public_key: &Secp256k1PublicKey,
        permission_asset_manager: bool,
    ) -> Result<ContentHash, OnboardError> {
        let audiences = self.audiences(permission_asset_manager)?;
        self.store_payload(asset, audience_public_key, &audiences)
            .await
    }

    /// Build the transaction for an already stored payload.
    pub async fn create_scope_tx(
        &self,
        scope_id: Uuid,
        content_hash: &ContentHash,
        owner_address: &str,
        permission_asset_manager: bool,
        classifier: Option<&str>,
        specs: &ExplicitSpecs,
    ) -> Result<TxBody, OnboardError> {
        let audiences = self.audiences(permission_asset_manager)?;
        let resolved = self.specifications(classifier, specs).await?;
        let operations =
            self.build_batch(scope_id, content_hash, owner_address, &audiences, &resolved)?;
        Ok(self.assembler.assemble(&[operations])?)
    }

    /// Store `asset` and build the transaction describing it.
    pub async fn onboard(
        &self,
        asset: &Asset,
        audience_public_key: &Secp256k1PublicKey,
        owner_address: &str,
        permission_asset_manager: bool,
        classifier: Option<&str>,
    ) -> Result<OnboardResult, OnboardError> {
        self.onboard_with_specs(
            asset,
            audience_public_key,
            owner_address,
            permission_asset_manager,
            classifier,
            &ExplicitSpecs::default(),
        )
        .await
    }

    /// `onboard` with caller-named specifications.
    pub async fn onboard_with_specs(
        &self,
        asset: &Asset,
        audience_public_key: &Secp256k1PublicKey,
        owner_address: &str,
        permission_asset_manager: bool,
        classifier: Option<&str>,
        specs: &ExplicitSpecs,
    ) -> Result<OnboardResult, OnboardError> {
        let audiences = self.audiences(permission_asset_manager)?;
        let resolved = self.specifications(classifier, specs).await?;
        let content_hash = self
            .store_payload(asset, audience_public_key, &audiences)
            .await?;
        let operations =
            self.build_batch(asset.id, &content_hash, owner_address, &audiences, &resolved)?;
        let tx_body = self.assembler.assemble(&[operations])?;

        info!(
            asset_id = %asset.id,
            hash = %content_hash,
            asset_class = %self.asset_class,
            messages = tx_body.len(),
            "[runtime] Onboarded asset"
        );
        Ok(OnboardResult {
            asset_id: asset.id,
            content_hash,
            tx_body,
        })
    }

    /// Wrap raw file bytes in a file NFT asset with a fresh id and onboard it.
    pub async fn onboard_file(
        &self,
        filename: &str,
        content_type: Option<&str>,
        bytes: Vec<u8>,
        audience_public_key: &Secp256k1PublicKey,
        owner_address: &str,
        permission_asset_manager: bool,
    ) -> Result<OnboardResult, OnboardError> {
        let asset = Asset::file_nft(Uuid::new_v4(), filename, content_type, bytes);
        self.onboard(
            &asset,
            audience_public_key,
            owner_address,
            permission_asset_manager,
            None,
        )
        .await
    }

    /// Onboard `assets` independently, at most the configured number in
    /// flight, and assemble the successful ones in input order.
    pub async fn onboard_bulk(
        &self,
        assets: Vec<Asset>,
        audience_public_key: &Secp256k1PublicKey,
        owner_address: &str,
        permission_asset_manager: bool,
        classifier: Option<&str>,
    ) -> Result<BulkAssembly, OnboardError> {
        self.onboard_bulk_with_specs(
            assets,
            audience_public_key,
            owner_address,
            permission_asset_manager,
            classifier,
            &ExplicitSpecs::default(),
        )
        .await
    }

    /// `onboard_bulk` with caller-named specifications shared by every asset.
    pub async fn onboard_bulk_with_specs(
        &self,
        assets: Vec<Asset>,
        audience_public_key: &Secp256k1PublicKey,
        owner_address: &str,
        permission_asset_manager: bool,
        classifier: Option<&str>,
        specs: &ExplicitSpecs,
    ) -> Result<BulkAssembly, OnboardError> {
        let audiences = self.audiences(permission_asset_manager)?;
        let resolved = self.specifications(classifier, specs).await?;
        let audiences = &audiences;
        let resolved = &resolved;

        let outcomes: Vec<BatchOutcome> = stream::iter(assets)
            .map(|asset| async move {
                let result = async {
                    let hash = self
                        .store_payload(&asset, audience_public_key, audiences)
                        .await?;
                    self.build_batch(asset.id, &hash, owner_address, audiences, resolved)
                }
                .await;
                match result {
                    Ok(operations) => BatchOutcome::built(asset.id, operations),
                    Err(e) => {
                        warn!(asset_id = %asset.id, error = %e, "[runtime] Asset failed in bulk onboarding");
                        BatchOutcome::failed(asset.id, &e)
                    }
                }
            })
            .buffered(self.bulk_concurrency)
            .collect()
            .await;

        Ok(self.assembler.assemble_outcomes(outcomes)?)
    }

    /// Plaintext when `private_key` is given, envelope metadata otherwise.
    pub async fn retrieve(
        &self,
        content_hash: &ContentHash,
        public_key: &Secp256k1PublicKey,
        private_key: Option<&Secp256k1KeyPair>,
    ) -> Result<Retrieved, OnboardError> {
        match private_key {
            Some(key_pair) => {
                if key_pair.public_key() != *public_key {
                    return Err(OnboardError::KeyMismatch(public_key.to_hex()));
                }
                let plaintext = self
                    .objects
                    .retrieve_and_decrypt(content_hash, key_pair)
                    .await?;
                Ok(Retrieved::Plaintext(plaintext))
            }
            None => Ok(Retrieved::Metadata(
                self.objects.retrieve(content_hash, public_key).await?,
            )),
        }
    }

    /// Decrypt and decode a stored asset.
    pub async fn retrieve_asset(
        &self,
        content_hash: &ContentHash,
        key_pair: &Secp256k1KeyPair,
    ) -> Result<Asset, OnboardError> {
        let plaintext = self
            .objects
            .retrieve_and_decrypt(content_hash, key_pair)
            .await?;
        Ok(Asset::from_bytes(&plaintext)?)
    }

    /// Transaction publishing the default specifications of the service's
    /// asset class.
    pub fn write_specs(&self, owner_address: &str) -> Result<TxBody, OnboardError> {
        let operations = self
            .graph
            .build_specification_batch(owner_address, self.asset_class)?;
        Ok(self.assembler.assemble(&[operations])?)
    }

    /// Debug JSON of `tx_body`.
    pub fn render_json(&self, tx_body: &TxBody) -> Result<String, OnboardError> {
        Ok(self.assembler.render_json(tx_body)?)
    }
}
