//! # ao-onboard
//!
//! Command-line front end for the onboarding service. Every command prints
//! one JSON document on stdout; logs go to stderr.

use std::path::{Path, PathBuf};

use anyhow::{bail, Context, Result};
use clap::{Parser, Subcommand, ValueEnum};
use serde_json::{json, Value};
use tracing::info;
use uuid::Uuid;

use ao_01_metadata_address::{MetadataAddress, SpecReference};
use ao_04_scope_graph::AssetClass;
use onboard_runtime::{ExplicitSpecs, OnboardConfig, OnboardContainer, OnboardService, Retrieved};
use onboard_telemetry::{init_telemetry, TelemetryConfig};
use shared_crypto::{Secp256k1KeyPair, Secp256k1PublicKey};
use shared_types::{Asset, ContentHash};

#[derive(Parser)]
#[command(name = "ao-onboard")]
#[command(about = "Onboard assets into the encrypted object store and build ledger writes", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Command,

    /// Enable debug logging
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Config file path
    #[arg(short, long, global = true, env = "AO_CONFIG")]
    config: Option<PathBuf>,
}

#[derive(Subcommand)]
enum Command {
    /// Store an asset and build the transaction that records it
    Onboard {
        /// Asset JSON file: one asset, or an array for bulk onboarding
        #[arg(long, conflicts_with = "file", required_unless_present = "file")]
        asset: Option<PathBuf>,

        /// Raw file to wrap as a file NFT
        #[arg(long)]
        file: Option<PathBuf>,

        /// MIME type of `--file`
        #[arg(long, requires = "file")]
        content_type: Option<String>,

        /// Recipient public key (compressed hex)
        #[arg(long)]
        public_key: String,

        /// Scope owner address
        #[arg(long)]
        owner: String,

        /// Grant the configured asset manager read access
        #[arg(long)]
        permission_asset_manager: bool,

        /// Asset classifier selecting the specifications
        #[arg(long)]
        classifier: Option<String>,

        /// Scope specification (bech32 address or UUID)
        #[arg(long, conflicts_with = "file")]
        scope_spec: Option<SpecReference>,

        /// Contract specification (bech32 address or UUID)
        #[arg(long, conflicts_with = "file")]
        contract_spec: Option<SpecReference>,

        /// Asset class (asset, loan_pool_state); defaults to the configured class
        #[arg(long)]
        asset_class: Option<AssetClass>,

        /// Transaction rendering
        #[arg(long, value_enum, default_value_t = TxFormat::Json)]
        format: TxFormat,
    },

    /// Encrypt and store an asset without building ledger writes
    Store {
        /// Asset JSON file
        #[arg(long)]
        asset: PathBuf,

        /// Recipient public key (compressed hex)
        #[arg(long)]
        public_key: String,

        /// Grant the configured asset manager read access
        #[arg(long)]
        permission_asset_manager: bool,
    },

    /// Build the transaction publishing the default specifications
    WriteSpecs {
        /// Specification owner address
        #[arg(long)]
        owner: String,

        /// Asset class (asset, loan_pool_state); defaults to the configured class
        #[arg(long)]
        asset_class: Option<AssetClass>,

        /// Transaction rendering
        #[arg(long, value_enum, default_value_t = TxFormat::Json)]
        format: TxFormat,
    },

    /// Fetch a stored object
    Retrieve {
        /// Content hash (base64)
        #[arg(long)]
        hash: String,

        /// Audience public key (compressed hex)
        #[arg(long)]
        public_key: String,

        /// Private key (hex); defaults to the configured signing key
        #[arg(long)]
        private_key: Option<String>,

        /// Return envelope metadata even when a private key is available
        #[arg(long)]
        metadata_only: bool,
    },

    /// Print the bech32 address of a metadata object
    Address {
        /// Address kind
        #[arg(value_enum)]
        kind: AddressTarget,

        /// Scope or specification id
        #[arg(long)]
        id: Uuid,

        /// Session id, for session addresses
        #[arg(long)]
        session: Option<Uuid>,

        /// Record name, for record and record specification addresses
        #[arg(long)]
        name: Option<String>,
    },
}

#[derive(Clone, Copy, ValueEnum)]
enum TxFormat {
    /// Pretty JSON with `@type` tags
    Json,
    /// One base64 string per message
    Base64,
}

#[derive(Clone, Copy, ValueEnum)]
enum AddressTarget {
    Scope,
    Session,
    Record,
    ContractSpec,
    ScopeSpec,
    RecordSpec,
}

fn public_key(hex: &str) -> Result<Secp256k1PublicKey> {
    Secp256k1PublicKey::from_hex(hex).context("invalid public key")
}

fn read_assets(path: &Path) -> Result<Vec<Asset>> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read {}", path.display()))?;
    if content.trim_start().starts_with('[') {
        serde_json::from_str(&content).context("invalid asset array")
    } else {
        Ok(vec![Asset::from_json(&content)?])
    }
}

fn render_tx(
    service: &OnboardService,
    tx: &ao_05_tx_assembler::TxBody,
    format: TxFormat,
) -> Result<Value> {
    Ok(match format {
        TxFormat::Json => serde_json::from_str(&service.render_json(tx)?)?,
        TxFormat::Base64 => json!(tx.to_base64_messages()?),
    })
}

fn with_class(service: OnboardService, asset_class: Option<AssetClass>) -> OnboardService {
    match asset_class {
        Some(asset_class) => service.with_asset_class(asset_class),
        None => service,
    }
}

fn address(
    kind: AddressTarget,
    id: Uuid,
    session: Option<Uuid>,
    name: Option<&str>,
) -> Result<MetadataAddress> {
    let record_name = || name.context("--name is required for record addresses");
    Ok(match kind {
        AddressTarget::Scope => MetadataAddress::for_scope(id),
        AddressTarget::Session => match session {
            Some(session) => MetadataAddress::for_session(id, session),
            None => bail!("--session is required for session addresses"),
        },
        AddressTarget::Record => MetadataAddress::for_record(id, record_name()?)?,
        AddressTarget::ContractSpec => MetadataAddress::for_contract_specification(id),
        AddressTarget::ScopeSpec => MetadataAddress::for_scope_specification(id),
        AddressTarget::RecordSpec => {
            MetadataAddress::for_record_specification(id, record_name()?)?
        }
    })
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let mut telemetry = TelemetryConfig::from_env();
    if cli.verbose {
        telemetry = telemetry.with_log_level("debug");
    }
    init_telemetry(&telemetry)?;

    let config = OnboardConfig::load(cli.config.as_deref())?;
    for line in config.log_lines() {
        info!("[config] {line}");
    }

    let container = OnboardContainer::new(&config)?;
    let service = container.service();

    let output = match cli.command {
        Command::Onboard {
            asset,
            file,
            content_type,
            public_key: key,
            owner,
            permission_asset_manager,
            classifier,
            scope_spec,
            contract_spec,
            asset_class,
            format,
        } => {
            let service = with_class(service, asset_class);
            let specs = ExplicitSpecs {
                scope_spec,
                contract_spec,
            };
            let key = public_key(&key)?;
            if let Some(path) = file {
                let bytes = std::fs::read(&path)
                    .with_context(|| format!("failed to read {}", path.display()))?;
                let filename = path
                    .file_name()
                    .map(|n| n.to_string_lossy().into_owned())
                    .unwrap_or_default();
                let result = service
                    .onboard_file(
                        &filename,
                        content_type.as_deref(),
                        bytes,
                        &key,
                        &owner,
                        permission_asset_manager,
                    )
                    .await?;
                json!({
                    "asset_id": result.asset_id,
                    "content_hash": result.content_hash,
                    "tx": render_tx(&service, &result.tx_body, format)?,
                })
            } else {
                let path = asset.context("--asset or --file is required")?;
                let mut assets = read_assets(&path)?;
                if assets.len() == 1 {
                    let asset = assets.remove(0);
                    let result = service
                        .onboard_with_specs(
                            &asset,
                            &key,
                            &owner,
                            permission_asset_manager,
                            classifier.as_deref(),
                            &specs,
                        )
                        .await?;
                    json!({
                        "asset_id": result.asset_id,
                        "content_hash": result.content_hash,
                        "tx": render_tx(&service, &result.tx_body, format)?,
                    })
                } else {
                    let bulk = service
                        .onboard_bulk_with_specs(
                            assets,
                            &key,
                            &owner,
                            permission_asset_manager,
                            classifier.as_deref(),
                            &specs,
                        )
                        .await?;
                    json!({
                        "included": bulk.included,
                        "failures": bulk.failures,
                        "tx": render_tx(&service, &bulk.tx_body, format)?,
                    })
                }
            }
        }

        Command::Store {
            asset,
            public_key: key,
            permission_asset_manager,
        } => {
            let key = public_key(&key)?;
            let asset = Asset::from_json(
                &std::fs::read_to_string(&asset)
                    .with_context(|| format!("failed to read {}", asset.display()))?,
            )?;
            let hash = service
                .store_asset(&asset, &key, permission_asset_manager)
                .await?;
            json!({ "asset_id": asset.id, "content_hash": hash })
        }

        Command::WriteSpecs {
            owner,
            asset_class,
            format,
        } => {
            let service = with_class(service, asset_class);
            let tx = service.write_specs(&owner)?;
            json!({ "tx": render_tx(&service, &tx, format)? })
        }

        Command::Retrieve {
            hash,
            public_key: key,
            private_key,
            metadata_only,
        } => {
            let hash: ContentHash = hash.parse()?;
            let key = public_key(&key)?;
            let key_pair = match private_key.or_else(|| config.service_keys.signing_key.clone())
            {
                Some(hex) if !metadata_only => {
                    Some(Secp256k1KeyPair::from_hex(&hex).context("invalid private key")?)
                }
                _ => None,
            };
            match service.retrieve(&hash, &key, key_pair.as_ref()).await? {
                Retrieved::Metadata(metadata) => json!({ "metadata": metadata }),
                Retrieved::Plaintext(bytes) => match Asset::from_bytes(&bytes) {
                    Ok(asset) => json!({ "asset": asset }),
                    Err(_) => json!({ "plaintext_hex": hex::encode(bytes) }),
                },
            }
        }

        Command::Address {
            kind,
            id,
            session,
            name,
        } => {
            let address = address(kind, id, session, name.as_deref())?;
            json!({ "address": address.to_bech32()?, "kind": format!("{:?}", address.kind()) })
        }
    };

    println!("{}", serde_json::to_string_pretty(&output)?);
    Ok(())
}
