//! # Outbound Ports
//!
//! The asset classification registry and the ledger metadata query service.

use crate::domain::{AssetDefinition, ResolverError};
use ao_01_metadata_address::MetadataAddress;
use async_trait::async_trait;
use shared_types::{RecordSpecification, ScopeSpecification};

/// Asset classification registry - outbound port.
#[async_trait]
pub trait ClassificationRegistry: Send + Sync {
    /// Look up a normalized (lowercase) classifier.
    async fn lookup_by_classifier(
        &self,
        normalized: &str,
    ) -> Result<Option<AssetDefinition>, ResolverError>;
}

/// Ledger metadata queries - outbound port.
#[async_trait]
pub trait MetadataQuery: Send + Sync {
    /// Scope specification stored at `address`.
    async fn scope_specification(
        &self,
        address: &MetadataAddress,
    ) -> Result<Option<ScopeSpecification>, ResolverError>;

    /// Record specifications of the contract specification at `address`,
    /// in ledger order.
    async fn record_specifications(
        &self,
        contract_spec: &MetadataAddress,
    ) -> Result<Vec<RecordSpecification>, ResolverError>;
}
