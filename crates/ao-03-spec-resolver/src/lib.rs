//! # AO-03 Specification Resolver
//!
//! Maps an asset classifier to the scope, contract and record
//! specifications that govern it.
//!
//! **Component ID:** 03
//! **Architecture:** Hexagonal (DDD + Ports/Adapters)
//!
//! ## Purpose
//!
//! - Normalize the classifier (trim, lowercase)
//! - Look it up in the asset classification registry
//! - Follow the scope specification to its first contract specification
//! - Pick the first record specification of that contract specification
//!
//! An absent classifier is not an error: every field of the result is
//! `None` and callers fall back to the configured default specifications.
//!
//! ## Failure Kinds
//!
//! | Error | When |
//! |-------|------|
//! | `SpecificationNotFound` | Classifier unknown to the registry |
//! | `ContractSpecNotFound` | Scope spec missing or lists no contract spec |
//! | `RecordSpecNotFound` | Contract spec has no record spec |
//!
//! ## Module Structure
//!
//! ```text
//! ao-03-spec-resolver/
//! ├── domain/          # AssetDefinition, ResolvedSpecification, errors
//! ├── ports/           # SpecificationResolverApi, ClassificationRegistry, MetadataQuery
//! ├── adapters/        # InMemorySpecificationRegistry
//! └── service          # SpecificationResolver
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod adapters;
pub mod domain;
pub mod ports;
pub mod service;

// Re-exports
pub use adapters::InMemorySpecificationRegistry;
pub use domain::{normalize_classifier, AssetDefinition, ResolvedSpecification, ResolverError};
pub use ports::{ClassificationRegistry, MetadataQuery, SpecificationResolverApi};
pub use service::{SpecificationResolver, DEFAULT_REGISTRY_TIMEOUT};

/// Crate version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
