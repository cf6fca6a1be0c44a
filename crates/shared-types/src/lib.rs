//! # Shared Types Crate
//!
//! Domain entities and write-operation messages shared by every onboarding
//! component.
//!
//! ## Design Principles
//!
//! - **Single Source of Truth**: the asset payload, the ledger metadata
//!   entities and the six write-operation messages are defined here only.
//! - **Immutable Construction**: entities are plain struct literals; nothing
//!   is mutated after a builder hands it out.
//! - **Explicit Codecs**: every message carries its type url as an associated
//!   constant; decoding never looks a parser up at runtime.
//! - **Stable Error Identifiers**: every component error maps to an `ErrorCode`.

pub mod asset;
pub mod errors;
pub mod messages;
pub mod metadata;

pub use asset::*;
pub use errors::*;
pub use messages::*;
pub use metadata::*;

pub use ao_01_metadata_address::MetadataAddress;
