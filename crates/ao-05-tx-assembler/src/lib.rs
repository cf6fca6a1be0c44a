//! # AO-05 Transaction Assembler
//!
//! Flattens independently built write batches into one transaction body.
//!
//! **Component ID:** 05
//! **Architecture:** DDD, synchronous pure computation
//!
//! ## Renderings
//!
//! | Form | Use |
//! |------|-----|
//! | `encode` / `decode` | Binary round trip |
//! | `to_base64_messages` | One base64 string per packed message |
//! | `to_json` | Debug JSON; fails on any unregistered type url |
//!
//! Bulk requests go through `assemble_outcomes`, which keeps failed assets
//! out of the body and lists them with their error code.
//!
//! ## Module Structure
//!
//! ```text
//! ao-05-tx-assembler/
//! ├── domain/          # TxBody, BatchOutcome, BulkAssembly, errors
//! ├── algorithms/      # assemble, TypeRegistry
//! └── service          # TxAssembler
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod algorithms;
pub mod domain;
pub mod service;

// Re-exports
pub use algorithms::{assemble, assemble_outcomes, TypeRegistry};
pub use domain::{AssemblerError, AssetFailure, BatchOutcome, BulkAssembly, TxBody};
pub use service::TxAssembler;

/// Crate version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
