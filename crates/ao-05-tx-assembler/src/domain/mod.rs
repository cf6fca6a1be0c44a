//! # Domain Layer

pub mod entities;
pub mod errors;

pub use entities::{AssetFailure, BatchOutcome, BulkAssembly, TxBody};
pub use errors::AssemblerError;
