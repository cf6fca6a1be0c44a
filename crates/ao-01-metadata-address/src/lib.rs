//! # AO-01 Metadata Addressing
//!
//! Deterministic addresses for ledger metadata objects.
//!
//! **Component ID:** 01
//! **Architecture:** Pure domain crate (no I/O, no clock, no randomness)
//!
//! ## Purpose
//!
//! Every object in the metadata graph (scope, session, record and the three
//! specification kinds) is cross-referenced by a `MetadataAddress` instead of
//! a foreign key. The address is a pure function of the object kind and its
//! identifiers:
//!
//! ```text
//! [type byte] ++ primary uuid (16) ++ secondary part
//!
//! Scope                  0x00  scope uuid
//! Session                0x01  scope uuid ++ session uuid
//! Record                 0x02  scope uuid ++ sha256(name)[..16]
//! ContractSpecification  0x03  contract spec uuid
//! ScopeSpecification     0x04  scope spec uuid
//! RecordSpecification    0x05  contract spec uuid ++ sha256(name)[..16]
//! ```
//!
//! The leading type byte keeps addresses of different kinds disjoint even
//! when the same UUID is reused across kinds.
//!
//! ## Module Structure
//!
//! ```text
//! ao-01-metadata-address/
//! ├── domain/     # AddressKind, MetadataAddress, SpecReference, errors
//! └── encoding    # bech32 rendering and parsing
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod domain;
pub mod encoding;

// Re-exports
pub use domain::{
    address, AddressFormatError, AddressKind, MetadataAddress, SecondaryId, SpecReference,
    NAME_HASH_LEN, UUID_LEN,
};

/// Crate version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
