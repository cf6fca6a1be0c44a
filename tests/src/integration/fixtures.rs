//! # Test Fixtures
//!
//! Builds an `OnboardService` over in-memory adapters and keeps handles to
//! the pieces a test needs to inspect.

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use uuid::Uuid;

use ao_02_encrypted_object::{
    EncryptedEnvelope, EncryptedObjectClient, InMemoryObjectStore, ObjectClientConfig,
    ObjectStoreError, ObjectStoreTransport,
};
use ao_03_spec_resolver::{InMemorySpecificationRegistry, SpecificationResolver};
use ao_04_scope_graph::{
    build_specification_batch, AssetClass, ScopeGraphBuilder, SpecPublication,
    SpecificationDefaults,
};
use ao_05_tx_assembler::{TxAssembler, TxBody};
use onboard_runtime::container::AssetManager;
use onboard_runtime::OnboardService;
use shared_crypto::{Secp256k1KeyPair, Secp256k1PublicKey};
use shared_types::{Asset, ContentHash, WriteOperation};

/// Scope owner used throughout.
pub const OWNER: &str = "tp1qowner";

/// Asset manager account address.
pub const MANAGER: &str = "tp1qmanager";

/// Classifier registered against the default scope specification.
pub const HELOC: &str = "heloc";

/// Default specification ids.
pub fn defaults() -> SpecificationDefaults {
    SpecificationDefaults {
        contract_spec_id: Uuid::parse_str("18573cf8-ddb9-491e-a4cb-bf2176160a63")
            .expect("valid uuid"),
        scope_spec_id: Uuid::parse_str("997e8228-c37f-4668-9a66-6cfb3b2a23cd")
            .expect("valid uuid"),
    }
}

/// Asset with the given type and a fresh id.
pub fn asset(asset_type: &str) -> Asset {
    Asset {
        id: Uuid::new_v4(),
        asset_type: asset_type.to_string(),
        name: "Home equity line 42".to_string(),
        description: "Second lien".to_string(),
        kv: Default::default(),
    }
}

/// What happens to the faulty put.
#[derive(Clone, Copy, Debug)]
pub enum PutFault {
    /// Fail immediately with a transport error.
    Reset,
    /// Hang for the given duration before forwarding.
    Stall(Duration),
}

/// Transport that applies `fault` to the `nth` put (0-based) and forwards
/// everything else to an in-memory store.
pub struct FaultyPutTransport {
    inner: Arc<InMemoryObjectStore>,
    fault_on: usize,
    fault: PutFault,
    puts: AtomicUsize,
}

impl FaultyPutTransport {
    /// Apply `fault` to the `fault_on`-th put.
    pub fn new(inner: Arc<InMemoryObjectStore>, fault_on: usize, fault: PutFault) -> Self {
        Self {
            inner,
            fault_on,
            fault,
            puts: AtomicUsize::new(0),
        }
    }
}

#[async_trait]
impl ObjectStoreTransport for FaultyPutTransport {
    async fn put(&self, envelope: &EncryptedEnvelope) -> Result<ContentHash, ObjectStoreError> {
        if self.puts.fetch_add(1, Ordering::SeqCst) == self.fault_on {
            match self.fault {
                PutFault::Reset => {
                    return Err(ObjectStoreError::Transport("connection reset".to_string()))
                }
                PutFault::Stall(duration) => tokio::time::sleep(duration).await,
            }
        }
        self.inner.put(envelope).await
    }

    async fn get(
        &self,
        hash: &ContentHash,
        audience: &Secp256k1PublicKey,
    ) -> Result<EncryptedEnvelope, ObjectStoreError> {
        self.inner.get(hash, audience).await
    }
}

/// Wired service plus the handles tests inspect.
pub struct Harness {
    /// Service under test.
    pub service: OnboardService,
    /// Backing object store.
    pub store: Arc<InMemoryObjectStore>,
    /// Specification registry.
    pub registry: Arc<InMemorySpecificationRegistry>,
    /// Recipient key pair.
    pub recipient: Secp256k1KeyPair,
    /// Asset manager key pair.
    pub manager: Secp256k1KeyPair,
    /// Assembler used to decode transactions.
    pub assembler: TxAssembler,
}

/// Builder for `Harness`.
pub struct HarnessBuilder {
    publication: SpecPublication,
    asset_class: AssetClass,
    transport: Option<Arc<dyn ObjectStoreTransport>>,
    store: Arc<InMemoryObjectStore>,
    timeout: Duration,
    concurrency: usize,
}

impl Default for HarnessBuilder {
    fn default() -> Self {
        Self {
            publication: SpecPublication::ReferenceExisting,
            asset_class: AssetClass::Asset,
            transport: None,
            store: Arc::new(InMemoryObjectStore::new()),
            timeout: Duration::from_secs(30),
            concurrency: 4,
        }
    }
}

impl HarnessBuilder {
    /// Publication policy of the graph builder.
    pub fn publication(mut self, publication: SpecPublication) -> Self {
        self.publication = publication;
        self
    }

    /// Asset class of the service.
    pub fn asset_class(mut self, asset_class: AssetClass) -> Self {
        self.asset_class = asset_class;
        self
    }

    /// Backing store, e.g. one with latency.
    pub fn store(mut self, store: InMemoryObjectStore) -> Self {
        self.store = Arc::new(store);
        self
    }

    /// Fail the `nth` put.
    pub fn fail_put(mut self, nth: usize) -> Self {
        self.transport = Some(Arc::new(FaultyPutTransport::new(
            self.store.clone(),
            nth,
            PutFault::Reset,
        )));
        self
    }

    /// Stall the `nth` put for `duration`.
    pub fn stall_put(mut self, nth: usize, duration: Duration) -> Self {
        self.transport = Some(Arc::new(FaultyPutTransport::new(
            self.store.clone(),
            nth,
            PutFault::Stall(duration),
        )));
        self
    }

    /// Object store call timeout.
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Bulk concurrency.
    pub fn concurrency(mut self, concurrency: usize) -> Self {
        self.concurrency = concurrency;
        self
    }

    /// Wire everything.
    pub fn build(self) -> Harness {
        let defaults = defaults();
        let registry = Arc::new(InMemorySpecificationRegistry::new());
        let specs = build_specification_batch(OWNER, &defaults, AssetClass::Asset)
            .expect("specification batch");
        registry.apply_operations(&specs);
        registry
            .register_classifier(HELOC, defaults.scope_spec_address())
            .expect("register classifier");

        let transport = self
            .transport
            .unwrap_or_else(|| self.store.clone() as Arc<dyn ObjectStoreTransport>);
        let timeout_ms = u64::try_from(self.timeout.as_millis()).expect("timeout fits u64");
        let objects = Arc::new(EncryptedObjectClient::new(
            transport,
            ObjectClientConfig::with_timeout_ms(timeout_ms),
        ));
        let resolver = Arc::new(SpecificationResolver::new(
            registry.clone(),
            registry.clone(),
        ));
        let manager = Secp256k1KeyPair::generate();
        let assembler = TxAssembler::default();

        let service = OnboardService::new(
            objects,
            resolver,
            ScopeGraphBuilder::new(defaults, self.publication),
            assembler.clone(),
        )
        .with_asset_manager(Some(AssetManager {
            public_key: manager.public_key(),
            address: MANAGER.to_string(),
        }))
        .with_asset_class(self.asset_class)
        .with_bulk_concurrency(self.concurrency);

        Harness {
            service,
            store: self.store,
            registry,
            recipient: Secp256k1KeyPair::generate(),
            manager,
            assembler,
        }
    }
}

impl Harness {
    /// Typed operations of `tx`.
    pub fn operations(&self, tx: &TxBody) -> Vec<WriteOperation> {
        self.assembler
            .decode_operations(tx)
            .expect("decodable transaction")
    }

    /// Operation labels of `tx`, in order.
    pub fn labels(&self, tx: &TxBody) -> Vec<&'static str> {
        self.operations(tx).iter().map(|op| op.label()).collect()
    }
}
