//! # Domain Layer

pub mod errors;
pub mod value_objects;

pub use errors::GraphError;
pub use value_objects::*;
