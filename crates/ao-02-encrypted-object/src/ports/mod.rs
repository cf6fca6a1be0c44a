//! # Ports Layer (Hexagonal Architecture)

pub mod inbound;
pub mod outbound;

pub use inbound::EncryptedObjectApi;
pub use outbound::ObjectStoreTransport;
