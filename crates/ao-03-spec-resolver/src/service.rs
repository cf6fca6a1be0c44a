//! # Specification Resolver Service
//!
//! classifier -> asset definition -> scope spec -> first contract spec ->
//! first record spec. Nothing is cached; each call queries the registry.

use crate::domain::{normalize_classifier, ResolvedSpecification, ResolverError};
use crate::ports::{ClassificationRegistry, MetadataQuery, SpecificationResolverApi};
use ao_01_metadata_address::AddressKind;
use async_trait::async_trait;
use std::future::Future;
use std::sync::Arc;
use std::time::Duration;
use tokio::time::timeout;
use tracing::{debug, info, warn};

/// Default bound on each registry call.
pub const DEFAULT_REGISTRY_TIMEOUT: Duration = Duration::from_secs(60);

/// Specification resolver.
pub struct SpecificationResolver {
    registry: Arc<dyn ClassificationRegistry>,
    metadata: Arc<dyn MetadataQuery>,
    call_timeout: Duration,
}

impl SpecificationResolver {
    /// Create a resolver over the two registry ports.
    pub fn new(registry: Arc<dyn ClassificationRegistry>, metadata: Arc<dyn MetadataQuery>) -> Self {
        Self {
            registry,
            metadata,
            call_timeout: DEFAULT_REGISTRY_TIMEOUT,
        }
    }

    /// Override the per-call timeout.
    pub fn with_timeout(mut self, call_timeout: Duration) -> Self {
        self.call_timeout = call_timeout;
        self
    }

    /// Per-call timeout in effect.
    pub fn call_timeout(&self) -> Duration {
        self.call_timeout
    }

    async fn bounded<T, F>(&self, call: F) -> Result<T, ResolverError>
    where
        F: Future<Output = Result<T, ResolverError>>,
    {
        let timeout_ms = self.call_timeout.as_millis() as u64;
        timeout(self.call_timeout, call).await.map_err(|_| {
            warn!(timeout_ms, "[ao-03] Registry call timed out");
            ResolverError::Timeout { timeout_ms }
        })?
    }
}

#[async_trait]
impl SpecificationResolverApi for SpecificationResolver {
    async fn resolve(
        &self,
        classifier: Option<&str>,
    ) -> Result<ResolvedSpecification, ResolverError> {
        let Some(normalized) = classifier.and_then(normalize_classifier) else {
            debug!("[ao-03] No classifier; using defaults");
            return Ok(ResolvedSpecification::default());
        };

        let definition = self
            .bounded(self.registry.lookup_by_classifier(&normalized))
            .await?
            .ok_or_else(|| ResolverError::SpecificationNotFound {
                classifier: normalized.clone(),
            })?;
        let scope_spec_address = definition.scope_spec_address;
        scope_spec_address.expect_kind(AddressKind::ScopeSpecification)?;

        let contract_spec_not_found = || ResolverError::ContractSpecNotFound {
            scope_spec: scope_spec_address.to_string(),
        };
        let scope_spec = self
            .bounded(self.metadata.scope_specification(&scope_spec_address))
            .await?
            .ok_or_else(contract_spec_not_found)?;
        if scope_spec.contract_spec_ids.len() > 1 {
            warn!(
                scope_spec = %scope_spec_address,
                count = scope_spec.contract_spec_ids.len(),
                "[ao-03] Scope spec lists several contract specs; using the first"
            );
        }
        let contract_spec_address = scope_spec
            .contract_spec_ids
            .first()
            .cloned()
            .ok_or_else(contract_spec_not_found)?;
        contract_spec_address.expect_kind(AddressKind::ContractSpecification)?;

        let record_specification = self
            .bounded(self.metadata.record_specifications(&contract_spec_address))
            .await?
            .into_iter()
            .next()
            .ok_or_else(|| ResolverError::RecordSpecNotFound {
                contract_spec: contract_spec_address.to_string(),
            })?;

        info!(
            classifier = %normalized,
            scope_spec = %scope_spec_address,
            contract_spec = %contract_spec_address,
            record_spec = %record_specification.name,
            "[ao-03] Resolved specifications"
        );

        Ok(ResolvedSpecification {
            scope_spec_address: Some(scope_spec_address),
            contract_spec_address: Some(contract_spec_address),
            record_specification: Some(record_specification),
        })
    }
}
