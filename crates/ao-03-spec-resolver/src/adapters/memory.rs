//! In-Memory Specification Registry Adapter
//!
//! Implements both outbound ports. Seed it directly or from a published
//! specification batch.

use crate::domain::{normalize_classifier, AssetDefinition, ResolverError};
use crate::ports::{ClassificationRegistry, MetadataQuery};
use ao_01_metadata_address::{AddressKind, MetadataAddress};
use async_trait::async_trait;
use parking_lot::RwLock;
use shared_types::{RecordSpecification, ScopeSpecification, WriteOperation};
use std::collections::HashMap;
use std::time::Duration;
use tracing::debug;

/// In-memory classification registry and metadata store.
#[derive(Default)]
pub struct InMemorySpecificationRegistry {
    definitions: RwLock<HashMap<String, AssetDefinition>>,
    scope_specs: RwLock<HashMap<MetadataAddress, ScopeSpecification>>,
    record_specs: RwLock<HashMap<MetadataAddress, Vec<RecordSpecification>>>,
    latency: Option<Duration>,
}

impl InMemorySpecificationRegistry {
    /// Create an empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Registry that sleeps `latency` before answering every call.
    pub fn with_latency(latency: Duration) -> Self {
        Self {
            latency: Some(latency),
            ..Self::default()
        }
    }

    /// Map `classifier` (case-insensitive) to a scope specification.
    pub fn register_classifier(
        &self,
        classifier: &str,
        scope_spec_address: MetadataAddress,
    ) -> Result<(), ResolverError> {
        scope_spec_address.expect_kind(AddressKind::ScopeSpecification)?;
        let normalized = normalize_classifier(classifier).ok_or_else(|| {
            ResolverError::Registry("cannot register a blank classifier".to_string())
        })?;
        debug!(classifier = %normalized, scope_spec = %scope_spec_address, "[ao-03] Registered classifier");
        self.definitions.write().insert(
            normalized.clone(),
            AssetDefinition {
                classifier: normalized,
                scope_spec_address,
            },
        );
        Ok(())
    }

    /// Store a scope specification under its own id.
    pub fn insert_scope_specification(&self, spec: ScopeSpecification) {
        self.scope_specs
            .write()
            .insert(spec.specification_id.clone(), spec);
    }

    /// Append a record specification to a contract specification.
    ///
    /// A second write with the same id replaces the first in place.
    pub fn insert_record_specification(
        &self,
        contract_spec: MetadataAddress,
        spec: RecordSpecification,
    ) {
        let mut guard = self.record_specs.write();
        let specs = guard.entry(contract_spec).or_default();
        match specs
            .iter_mut()
            .find(|s| s.specification_id == spec.specification_id)
        {
            Some(existing) => *existing = spec,
            None => specs.push(spec),
        }
    }

    /// Apply the specification writes of a batch, ignoring instance writes.
    ///
    /// Returns the number of operations applied.
    pub fn apply_operations(&self, operations: &[WriteOperation]) -> usize {
        let mut applied = 0;
        for op in operations {
            match op {
                WriteOperation::ScopeSpecification(msg) => {
                    self.insert_scope_specification(msg.specification.clone());
                    applied += 1;
                }
                WriteOperation::RecordSpecification(msg) => {
                    let contract_spec =
                        MetadataAddress::for_contract_specification(msg.contract_spec_uuid);
                    self.insert_record_specification(contract_spec, msg.specification.clone());
                    applied += 1;
                }
                _ => {}
            }
        }
        applied
    }

    /// Number of registered classifiers.
    pub fn classifier_count(&self) -> usize {
        self.definitions.read().len()
    }

    async fn simulate_latency(&self) {
        if let Some(latency) = self.latency {
            tokio::time::sleep(latency).await;
        }
    }
}

#[async_trait]
impl ClassificationRegistry for InMemorySpecificationRegistry {
    async fn lookup_by_classifier(
        &self,
        normalized: &str,
    ) -> Result<Option<AssetDefinition>, ResolverError> {
        self.simulate_latency().await;
        Ok(self.definitions.read().get(normalized).cloned())
    }
}

#[async_trait]
impl MetadataQuery for InMemorySpecificationRegistry {
    async fn scope_specification(
        &self,
        address: &MetadataAddress,
    ) -> Result<Option<ScopeSpecification>, ResolverError> {
        self.simulate_latency().await;
        Ok(self.scope_specs.read().get(address).cloned())
    }

    async fn record_specifications(
        &self,
        contract_spec: &MetadataAddress,
    ) -> Result<Vec<RecordSpecification>, ResolverError> {
        self.simulate_latency().await;
        Ok(self
            .record_specs
            .read()
            .get(contract_spec)
            .cloned()
            .unwrap_or_default())
    }
}
