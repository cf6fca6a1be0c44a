//! # Ports Layer (Hexagonal Architecture)

pub mod inbound;
pub mod outbound;

pub use inbound::SpecificationResolverApi;
pub use outbound::{ClassificationRegistry, MetadataQuery};
