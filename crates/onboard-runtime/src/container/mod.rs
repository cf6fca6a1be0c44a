//! # Onboarding Container
//!
//! Configuration loading and component wiring for the onboarding service.
//!
//! - `config`: TOML file, `AO_*` environment overrides, validation
//! - `components`: builds every component from a validated configuration

pub mod components;
pub mod config;

pub use components::OnboardContainer;
pub use config::{
    AssetManager, AssetSpecConfig, BulkConfig, ConfigError, LedgerConfig, ObjectStoreConfig,
    OnboardConfig, RegistryConfig, ServiceKeysConfig,
};
