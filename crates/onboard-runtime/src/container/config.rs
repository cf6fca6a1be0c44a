//! # Onboard Configuration
//!
//! Defaults, then an optional TOML file, then `AO_*` environment overrides.
//! Validation happens once, after all layers are applied.

use ao_01_metadata_address::{AddressKind, SpecReference};
use ao_04_scope_graph::{AssetClass, SpecPublication, SpecificationDefaults};
use serde::{Deserialize, Serialize};
use shared_crypto::Secp256k1PublicKey;
use shared_types::{ErrorCode, HasErrorCode};
use std::path::Path;
use std::time::Duration;
use thiserror::Error;
use uuid::Uuid;

/// Default object store endpoint.
pub const DEFAULT_OBJECT_STORE_URL: &str = "http://localhost:8081";
/// Default object store timeout.
pub const DEFAULT_OBJECT_STORE_TIMEOUT_MS: u64 = 30_000;
/// Default contract specification id.
pub const DEFAULT_CONTRACT_SPEC_ID: &str = "18573cf8-ddb9-491e-a4cb-bf2176160a63";
/// Default scope specification id.
pub const DEFAULT_SCOPE_SPEC_ID: &str = "997e8228-c37f-4668-9a66-6cfb3b2a23cd";
/// Default specification registry timeout.
pub const DEFAULT_REGISTRY_TIMEOUT_MS: u64 = 60_000;
/// Default chain id.
pub const DEFAULT_CHAIN_ID: &str = "chain-local";
/// Default bulk concurrency.
pub const DEFAULT_BULK_CONCURRENCY: usize = 4;
/// Object store url selecting the in-process store.
pub const MEMORY_OBJECT_STORE_URL: &str = "memory://";

/// Configuration errors.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    /// Config file could not be read.
    #[error("Failed to read config file {path}: {reason}")]
    Io {
        /// File path
        path: String,
        /// OS error text
        reason: String,
    },

    /// Config file is not valid TOML for this schema.
    #[error("Failed to parse config: {0}")]
    Parse(String),

    /// An environment override did not parse.
    #[error("Invalid value for {var}: {reason}")]
    Env {
        /// Variable name
        var: &'static str,
        /// Parse error text
        reason: String,
    },

    /// A field holds an unusable value.
    #[error("Invalid configuration: {0}")]
    Invalid(String),
}

impl HasErrorCode for ConfigError {
    fn code(&self) -> ErrorCode {
        ErrorCode::Configuration
    }
}

/// Complete onboarding configuration.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct OnboardConfig {
    /// Object store connection.
    pub object_store: ObjectStoreConfig,
    /// Specification registry connection.
    pub registry: RegistryConfig,
    /// Ledger identity.
    pub ledger: LedgerConfig,
    /// Default specifications.
    pub asset_spec: AssetSpecConfig,
    /// Service keys.
    pub service_keys: ServiceKeysConfig,
    /// Bulk onboarding.
    pub bulk: BulkConfig,
}

/// Object store connection.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ObjectStoreConfig {
    /// Endpoint, or `memory://` for the in-process store.
    pub url: String,
    /// Per-call timeout in milliseconds.
    pub timeout_ms: u64,
}

impl Default for ObjectStoreConfig {
    fn default() -> Self {
        Self {
            url: DEFAULT_OBJECT_STORE_URL.to_string(),
            timeout_ms: DEFAULT_OBJECT_STORE_TIMEOUT_MS,
        }
    }
}

impl ObjectStoreConfig {
    /// Per-call timeout.
    pub fn timeout(&self) -> Duration {
        Duration::from_millis(self.timeout_ms)
    }

    /// Whether the in-process store is selected.
    pub fn is_memory(&self) -> bool {
        self.url.starts_with("memory:")
    }
}

/// Specification registry connection.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RegistryConfig {
    /// Per-call timeout in milliseconds.
    pub timeout_ms: u64,
}

impl Default for RegistryConfig {
    fn default() -> Self {
        Self {
            timeout_ms: DEFAULT_REGISTRY_TIMEOUT_MS,
        }
    }
}

impl RegistryConfig {
    /// Per-call timeout.
    pub fn timeout(&self) -> Duration {
        Duration::from_millis(self.timeout_ms)
    }
}

/// Ledger identity.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LedgerConfig {
    /// Chain id.
    pub chain_id: String,
    /// Mainnet (true) or testnet (false).
    pub mainnet: bool,
}

impl Default for LedgerConfig {
    fn default() -> Self {
        Self {
            chain_id: DEFAULT_CHAIN_ID.to_string(),
            mainnet: false,
        }
    }
}

/// Default specifications.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AssetSpecConfig {
    /// Default contract specification, as a UUID or a bech32 address.
    /// Empty selects the built-in id.
    pub contract_spec_id: String,
    /// Default scope specification, as a UUID or a bech32 address.
    /// Empty selects the built-in id.
    pub scope_spec_id: String,
    /// Asset class shaping records and published specifications.
    pub asset_class: AssetClass,
    /// Publish the default specifications with every new scope.
    pub publish_specs: bool,
    /// Classifiers governed by the default scope specification.
    pub classifiers: Vec<String>,
}

impl Default for AssetSpecConfig {
    fn default() -> Self {
        Self {
            contract_spec_id: DEFAULT_CONTRACT_SPEC_ID.to_string(),
            scope_spec_id: DEFAULT_SCOPE_SPEC_ID.to_string(),
            asset_class: AssetClass::default(),
            publish_specs: false,
            classifiers: Vec::new(),
        }
    }
}

impl AssetSpecConfig {
    /// Parsed default specification ids.
    pub fn defaults(&self) -> Result<SpecificationDefaults, ConfigError> {
        Ok(SpecificationDefaults {
            contract_spec_id: spec_id(
                "contract_spec_id",
                &self.contract_spec_id,
                AddressKind::ContractSpecification,
                DEFAULT_CONTRACT_SPEC_ID,
            )?,
            scope_spec_id: spec_id(
                "scope_spec_id",
                &self.scope_spec_id,
                AddressKind::ScopeSpecification,
                DEFAULT_SCOPE_SPEC_ID,
            )?,
        })
    }

    /// Publication policy.
    pub fn publication(&self) -> SpecPublication {
        if self.publish_specs {
            SpecPublication::PublishDefaults
        } else {
            SpecPublication::ReferenceExisting
        }
    }
}

fn spec_id(
    field: &str,
    value: &str,
    kind: AddressKind,
    default_id: &str,
) -> Result<Uuid, ConfigError> {
    let invalid = |reason: String| ConfigError::Invalid(format!("asset_spec.{field}: {reason}"));
    let reference = match value.trim() {
        "" => None,
        value => Some(SpecReference::parse(value).map_err(|e| invalid(e.to_string()))?),
    };
    let default_id = Uuid::parse_str(default_id).map_err(|e| invalid(e.to_string()))?;
    let address = SpecReference::resolve_or_default(reference.as_ref(), kind, default_id)
        .map_err(|e| invalid(e.to_string()))?;
    Ok(address.primary_uuid())
}

/// Service keys.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ServiceKeysConfig {
    /// Asset manager encryption key (compressed SEC1 hex).
    pub asset_manager_public_key: Option<String>,
    /// Asset manager account address.
    pub asset_manager_address: Option<String>,
    /// Signing key (hex) used by the command line for retrieval.
    pub signing_key: Option<String>,
}

/// Asset manager granted read access when requested.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AssetManager {
    /// Encryption key.
    pub public_key: Secp256k1PublicKey,
    /// Account address.
    pub address: String,
}

impl ServiceKeysConfig {
    /// Parsed asset manager, if both halves are configured.
    pub fn asset_manager(&self) -> Result<Option<AssetManager>, ConfigError> {
        match (&self.asset_manager_public_key, &self.asset_manager_address) {
            (None, None) => Ok(None),
            (Some(key), Some(address)) => {
                let public_key = Secp256k1PublicKey::from_hex(key).map_err(|e| {
                    ConfigError::Invalid(format!("service_keys.asset_manager_public_key: {e}"))
                })?;
                if address.trim().is_empty() {
                    return Err(ConfigError::Invalid(
                        "service_keys.asset_manager_address is empty".to_string(),
                    ));
                }
                Ok(Some(AssetManager {
                    public_key,
                    address: address.trim().to_string(),
                }))
            }
            _ => Err(ConfigError::Invalid(
                "asset manager needs both a public key and an address".to_string(),
            )),
        }
    }
}

/// Bulk onboarding.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct BulkConfig {
    /// Assets stored concurrently.
    pub concurrency: usize,
}

impl Default for BulkConfig {
    fn default() -> Self {
        Self {
            concurrency: DEFAULT_BULK_CONCURRENCY,
        }
    }
}

impl OnboardConfig {
    /// Parse a TOML document.
    pub fn from_toml_str(s: &str) -> Result<Self, ConfigError> {
        toml::from_str(s).map_err(|e| ConfigError::Parse(e.to_string()))
    }

    /// Read a TOML file.
    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|e| ConfigError::Io {
            path: path.display().to_string(),
            reason: e.to_string(),
        })?;
        Self::from_toml_str(&content)
    }

    /// Full load: optional file, process environment, validation.
    pub fn load(path: Option<&Path>) -> Result<Self, ConfigError> {
        let mut config = match path {
            Some(path) => Self::from_file(path)?,
            None => Self::default(),
        };
        config.apply_env(|key| std::env::var(key).ok())?;
        config.validate()?;
        Ok(config)
    }

    /// Apply `AO_*` overrides from `lookup`.
    pub fn apply_env<F>(&mut self, lookup: F) -> Result<(), ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        fn parse<T: std::str::FromStr>(var: &'static str, value: &str) -> Result<T, ConfigError>
        where
            T::Err: std::fmt::Display,
        {
            value.trim().parse().map_err(|e: T::Err| ConfigError::Env {
                var,
                reason: e.to_string(),
            })
        }

        if let Some(v) = lookup("AO_OBJECT_STORE_URL") {
            self.object_store.url = v;
        }
        if let Some(v) = lookup("AO_OBJECT_STORE_TIMEOUT_MS") {
            self.object_store.timeout_ms = parse("AO_OBJECT_STORE_TIMEOUT_MS", &v)?;
        }
        if let Some(v) = lookup("AO_REGISTRY_TIMEOUT_MS") {
            self.registry.timeout_ms = parse("AO_REGISTRY_TIMEOUT_MS", &v)?;
        }
        if let Some(v) = lookup("AO_CHAIN_ID") {
            self.ledger.chain_id = v;
        }
        if let Some(v) = lookup("AO_MAINNET") {
            self.ledger.mainnet = parse("AO_MAINNET", &v)?;
        }
        if let Some(v) = lookup("AO_CONTRACT_SPEC_ID") {
            self.asset_spec.contract_spec_id = v;
        }
        if let Some(v) = lookup("AO_SCOPE_SPEC_ID") {
            self.asset_spec.scope_spec_id = v;
        }
        if let Some(v) = lookup("AO_ASSET_CLASS") {
            self.asset_spec.asset_class = parse("AO_ASSET_CLASS", &v)?;
        }
        if let Some(v) = lookup("AO_PUBLISH_SPECS") {
            self.asset_spec.publish_specs = parse("AO_PUBLISH_SPECS", &v)?;
        }
        if let Some(v) = lookup("AO_ASSET_MANAGER_PUBLIC_KEY") {
            self.service_keys.asset_manager_public_key = Some(v);
        }
        if let Some(v) = lookup("AO_ASSET_MANAGER_ADDRESS") {
            self.service_keys.asset_manager_address = Some(v);
        }
        if let Some(v) = lookup("AO_SIGNING_KEY") {
            self.service_keys.signing_key = Some(v);
        }
        if let Some(v) = lookup("AO_BULK_CONCURRENCY") {
            self.bulk.concurrency = parse("AO_BULK_CONCURRENCY", &v)?;
        }
        Ok(())
    }

    /// Reject values no component can work with.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.object_store.url.trim().is_empty() {
            return Err(ConfigError::Invalid("object_store.url is empty".to_string()));
        }
        if self.object_store.timeout_ms == 0 {
            return Err(ConfigError::Invalid(
                "object_store.timeout_ms must be positive".to_string(),
            ));
        }
        if self.registry.timeout_ms == 0 {
            return Err(ConfigError::Invalid(
                "registry.timeout_ms must be positive".to_string(),
            ));
        }
        if self.bulk.concurrency == 0 {
            return Err(ConfigError::Invalid(
                "bulk.concurrency must be positive".to_string(),
            ));
        }
        self.asset_spec.defaults()?;
        self.service_keys.asset_manager()?;
        Ok(())
    }

    /// One `key = value` line per field, secrets masked.
    pub fn log_lines(&self) -> Vec<String> {
        fn optional(value: &Option<String>) -> String {
            value.as_deref().unwrap_or("<unset>").to_string()
        }

        vec![
            format!("object_store.url = {}", self.object_store.url),
            format!("object_store.timeout_ms = {}", self.object_store.timeout_ms),
            format!("registry.timeout_ms = {}", self.registry.timeout_ms),
            format!("ledger.chain_id = {}", self.ledger.chain_id),
            format!("ledger.mainnet = {}", self.ledger.mainnet),
            format!("asset_spec.contract_spec_id = {}", self.asset_spec.contract_spec_id),
            format!("asset_spec.scope_spec_id = {}", self.asset_spec.scope_spec_id),
            format!("asset_spec.asset_class = {}", self.asset_spec.asset_class),
            format!("asset_spec.publish_specs = {}", self.asset_spec.publish_specs),
            format!("asset_spec.classifiers = [{}]", self.asset_spec.classifiers.join(", ")),
            format!(
                "service_keys.asset_manager_public_key = {}",
                optional(&self.service_keys.asset_manager_public_key)
            ),
            format!(
                "service_keys.asset_manager_address = {}",
                optional(&self.service_keys.asset_manager_address)
            ),
            format!(
                "service_keys.signing_key = {}",
                if self.service_keys.signing_key.is_some() {
                    "****"
                } else {
                    "<unset>"
                }
            ),
            format!("bulk.concurrency = {}", self.bulk.concurrency),
        ]
    }
}
