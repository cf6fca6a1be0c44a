//! # Domain Layer
//!
//! Envelope entities, client configuration and errors.

pub mod entities;
pub mod errors;
pub mod value_objects;

pub use entities::{AudienceKey, EncryptedEnvelope, EnvelopeMetadata, ENVELOPE_VERSION};
pub use errors::ObjectStoreError;
pub use value_objects::{ObjectClientConfig, DEFAULT_TIMEOUT_MS};
