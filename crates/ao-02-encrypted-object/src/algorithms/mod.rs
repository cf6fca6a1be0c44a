//! # Algorithms
//!
//! Envelope sealing and opening.

pub mod envelope;

pub use envelope::{audience_list, open, seal, verify};
