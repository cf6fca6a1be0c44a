//! # Algorithms
//!
//! Pure construction of write operations. Nothing here suspends.

pub mod scope_batch;
pub mod specifications;

pub use scope_batch::build_new_scope_batch;
pub use specifications::{
    build_specification_batch, contract_specification, default_record_specification,
    record_process, scope_specification, specification_writes,
};
