//! # Onboard Runtime Library
//!
//! Wires the onboarding components behind `OnboardService`. The `ao-onboard`
//! binary in `main.rs` is a thin command-line front end over this library.
//!
//! ## Flow
//!
//! ```text
//! Asset ──► AO-03 resolve classifier
//!       ──► AO-02 encrypt + store ──► content hash
//!       ──► AO-04 build write batch (scope, session, record)
//!       ──► AO-05 assemble unsigned transaction
//! ```
//!
//! Bulk onboarding runs the store-and-build step for several assets
//! concurrently; an asset that fails is reported and the rest still land in
//! the transaction.

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod container;
pub mod errors;
pub mod service;

// Re-exports
pub use container::{ConfigError, OnboardConfig, OnboardContainer};
pub use errors::OnboardError;
pub use service::{ExplicitSpecs, OnboardResult, OnboardService, Retrieved};
