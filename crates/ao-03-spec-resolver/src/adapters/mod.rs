//! # Adapters Layer

mod memory;

pub use memory::InMemorySpecificationRegistry;
