//! # AO-04 Scope Graph Builder
//!
//! Turns a stored payload hash into the ledger write operations that
//! describe it.
//!
//! **Component ID:** 04
//! **Architecture:** DDD, synchronous pure computation
//!
//! ## Emitted Batch
//!
//! | # | Operation | Present |
//! |---|-----------|---------|
//! | 1 | write-contract-specification | publishing defaults |
//! | 2 | write-scope-specification | publishing defaults |
//! | 3 | write-scope | always |
//! | 4 | write-session | always, new session id per call |
//! | 5 | write-record-specification | publishing defaults |
//! | 6 | write-record | always |
//!
//! The asset class (`Asset` or `LoanPoolState`) fixes the contract class,
//! record shape and process descriptor.
//!
//! Every operation is signed by the owner alone. Additional audiences only
//! appear in the scope's data-access set; they never receive a party role.
//!
//! ## Module Structure
//!
//! ```text
//! ao-04-scope-graph/
//! ├── domain/          # AssetClass, SpecificationDefaults, SpecPublication, NewScopeRequest, errors
//! ├── algorithms/      # build_new_scope_batch, build_specification_batch
//! └── service          # ScopeGraphBuilder
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod algorithms;
pub mod domain;
pub mod service;

// Re-exports
pub use algorithms::{build_new_scope_batch, build_specification_batch};
pub use domain::{
    AssetClass, GraphError, NewScopeRequest, SpecPublication, SpecificationDefaults,
    ASSET_HASH_INPUT, ASSET_HASH_INPUT_TYPE, DEFAULT_RECORD_NAME,
};
pub use service::ScopeGraphBuilder;

/// Crate version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

#[cfg(test)]
mod tests {
    #[test]
    #[allow(clippy::const_is_empty)]
    fn test_version() {
        assert!(!super::VERSION.is_empty());
    }
}
