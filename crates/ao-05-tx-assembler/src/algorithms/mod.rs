//! # Algorithms

pub mod assemble;
pub mod type_registry;

pub use assemble::{assemble, assemble_outcomes};
pub use type_registry::TypeRegistry;
