//! # Domain Module
//!
//! Address kinds, the address value itself and caller-supplied references.

pub mod address;
pub mod errors;
pub mod reference;
pub mod value_objects;

pub use address::{address, MetadataAddress, SecondaryId, NAME_HASH_LEN, UUID_LEN};
pub use errors::AddressFormatError;
pub use reference::SpecReference;
pub use value_objects::AddressKind;
