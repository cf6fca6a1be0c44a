//! # Adapters Layer (Hexagonal Architecture)
//!
//! Implements the outbound object store port.

mod http;
mod memory;

pub use http::HttpObjectStore;
pub use memory::InMemoryObjectStore;
