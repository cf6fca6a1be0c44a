//! # Scope Graph Builder Service
//!
//! Holds the immutable defaults and draws a fresh session id per batch.

use crate::algorithms::{build_new_scope_batch, build_specification_batch};
use crate::domain::{
    AssetClass, GraphError, NewScopeRequest, SpecPublication, SpecificationDefaults,
};
use shared_types::WriteOperation;
use tracing::debug;
use uuid::Uuid;

/// Builds ledger write batches for onboarded assets.
#[derive(Clone, Debug)]
pub struct ScopeGraphBuilder {
    defaults: SpecificationDefaults,
    publication: SpecPublication,
}

impl ScopeGraphBuilder {
    /// Create a builder.
    pub fn new(defaults: SpecificationDefaults, publication: SpecPublication) -> Self {
        Self {
            defaults,
            publication,
        }
    }

    /// Default specification ids.
    pub fn defaults(&self) -> &SpecificationDefaults {
        &self.defaults
    }

    /// Publication policy.
    pub fn publication(&self) -> SpecPublication {
        self.publication
    }

    /// Write operations for a new scope. Every call opens a new session.
    pub fn build_new_scope_batch(
        &self,
        request: &NewScopeRequest,
    ) -> Result<Vec<WriteOperation>, GraphError> {
        let session_id = Uuid::new_v4();
        let operations =
            build_new_scope_batch(request, &self.defaults, self.publication, session_id)?;
        debug!(
            scope_id = %request.scope_id,
            %session_id,
            operations = operations.len(),
            audiences = request.additional_audiences.len(),
            asset_class = %request.asset_class,
            "[ao-04] Built new scope batch"
        );
        Ok(operations)
    }

    /// Publication batch for the default specifications, signed by `owner`.
    pub fn build_specification_batch(
        &self,
        owner: &str,
        asset_class: AssetClass,
    ) -> Result<Vec<WriteOperation>, GraphError> {
        let operations = build_specification_batch(owner, &self.defaults, asset_class)?;
        debug!(
            %asset_class,
            contract_spec_id = %self.defaults.contract_spec_id,
            scope_spec_id = %self.defaults.scope_spec_id,
            "[ao-04] Built specification batch"
        );
        Ok(operations)
    }
}
