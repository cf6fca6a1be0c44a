//! # Domain Layer

pub mod entities;
pub mod errors;

pub use entities::{normalize_classifier, AssetDefinition, ResolvedSpecification};
pub use errors::ResolverError;
