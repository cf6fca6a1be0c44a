//! # Inbound Ports

use crate::domain::{ResolvedSpecification, ResolverError};
use async_trait::async_trait;

/// Specification resolver API - inbound port.
#[async_trait]
pub trait SpecificationResolverApi: Send + Sync {
    /// Resolve the specifications governing assets of `classifier`.
    async fn resolve(
        &self,
        classifier: Option<&str>,
    ) -> Result<ResolvedSpecification, ResolverError>;
}
