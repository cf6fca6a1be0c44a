//! # Integration Tests
//!
//! Full onboarding flows: resolver, encrypted object client, scope graph
//! builder and transaction assembler wired the way the runtime wires them.

pub mod fixtures;

mod bulk_and_retrieve;
mod onboarding_flow;
