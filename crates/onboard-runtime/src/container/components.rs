//! # Component Container
//!
//! Builds every onboarding component from an `OnboardConfig`.
//!
//! ```text
//! object store transport ──► EncryptedObjectClient ─┐
//! specification registry ──► SpecificationResolver ─┼──► OnboardService
//! defaults + publication ──► ScopeGraphBuilder ─────┤
//!                           TxAssembler ────────────┘
//! ```

use std::sync::Arc;

use ao_02_encrypted_object::{
    EncryptedObjectClient, HttpObjectStore, InMemoryObjectStore, ObjectClientConfig,
    ObjectStoreTransport,
};
use ao_03_spec_resolver::{InMemorySpecificationRegistry, SpecificationResolver};
use ao_04_scope_graph::algorithms::{default_record_specification, scope_specification};
use ao_04_scope_graph::{AssetClass, ScopeGraphBuilder, SpecificationDefaults};
use ao_05_tx_assembler::TxAssembler;
use tracing::info;

use crate::container::config::{AssetManager, OnboardConfig};
use crate::errors::OnboardError;
use crate::service::OnboardService;

/// Every component the onboarding service depends on.
pub struct OnboardContainer {
    /// Encrypted object client over the configured transport.
    pub objects: Arc<EncryptedObjectClient>,
    /// Classifier and specification registry.
    pub registry: Arc<InMemorySpecificationRegistry>,
    /// Resolver reading from `registry`.
    pub resolver: Arc<SpecificationResolver>,
    /// Write batch builder.
    pub graph: ScopeGraphBuilder,
    /// Transaction assembler.
    pub assembler: TxAssembler,
    /// Asset manager granted access on request.
    pub asset_manager: Option<AssetManager>,
    /// Asset class shaping records and published specifications.
    pub asset_class: AssetClass,
    /// Bulk onboarding concurrency.
    pub bulk_concurrency: usize,
}

impl OnboardContainer {
    /// Build all components. `config` is expected to be validated.
    pub fn new(config: &OnboardConfig) -> Result<Self, OnboardError> {
        let transport: Arc<dyn ObjectStoreTransport> = if config.object_store.is_memory() {
            Arc::new(InMemoryObjectStore::new())
        } else {
            Arc::new(HttpObjectStore::new(
                config.object_store.url.as_str(),
                config.object_store.timeout(),
            )?)
        };
        let objects = Arc::new(EncryptedObjectClient::new(
            transport,
            ObjectClientConfig::with_timeout_ms(config.object_store.timeout_ms),
        ));

        let defaults = config.asset_spec.defaults()?;
        let asset_manager = config.service_keys.asset_manager()?;
        let registry = Arc::new(InMemorySpecificationRegistry::new());
        let asset_class = config.asset_spec.asset_class;
        seed_registry(
            &registry,
            &defaults,
            asset_class,
            &config.asset_spec.classifiers,
            asset_manager.as_ref(),
        )?;
        let resolver = Arc::new(
            SpecificationResolver::new(registry.clone(), registry.clone())
                .with_timeout(config.registry.timeout()),
        );

        info!(
            object_store = %config.object_store.url,
            chain_id = %config.ledger.chain_id,
            classifiers = registry.classifier_count(),
            %asset_class,
            "[runtime] Components initialized"
        );

        Ok(Self {
            objects,
            registry,
            resolver,
            graph: ScopeGraphBuilder::new(defaults, config.asset_spec.publication()),
            assembler: TxAssembler::default(),
            asset_manager,
            asset_class,
            bulk_concurrency: config.bulk.concurrency,
        })
    }

    /// Onboarding service sharing this container's components.
    pub fn service(&self) -> OnboardService {
        OnboardService::new(
            self.objects.clone(),
            self.resolver.clone(),
            self.graph.clone(),
            self.assembler.clone(),
        )
        .with_asset_manager(self.asset_manager.clone())
        .with_asset_class(self.asset_class)
        .with_bulk_concurrency(self.bulk_concurrency)
    }
}

/// Register the default specifications and map each configured classifier
/// to the default scope specification.
fn seed_registry(
    registry: &InMemorySpecificationRegistry,
    defaults: &SpecificationDefaults,
    asset_class: AssetClass,
    classifiers: &[String],
    asset_manager: Option<&AssetManager>,
) -> Result<(), OnboardError> {
    let mut scope_spec =
        scope_specification(defaults.scope_spec_id, defaults.contract_spec_id, "");
    scope_spec.owner_addresses = asset_manager
        .map(|manager| vec![manager.address.clone()])
        .unwrap_or_default();
    registry.insert_scope_specification(scope_spec);
    registry.insert_record_specification(
        defaults.contract_spec_address(),
        default_record_specification(asset_class, defaults.contract_spec_id)?,
    );

    for classifier in classifiers {
        registry.register_classifier(classifier, defaults.scope_spec_address())?;
    }
    Ok(())
}
