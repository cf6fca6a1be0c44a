//! # Onboarding Benchmarks
//!
//! | Component | Operation |
//! |-----------|-----------|
//! | ao-01 Metadata Address | Record address derivation, bech32 rendering |
//! | ao-04 Scope Graph | New-scope batch (3 and 6 writes) |
//! | ao-05 Tx Assembler | Bulk assembly of N batches |

use ao_01_metadata_address::MetadataAddress;
use ao_04_scope_graph::{
    build_new_scope_batch, NewScopeRequest, SpecPublication, SpecificationDefaults,
};
use ao_05_tx_assembler::TxAssembler;
use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use shared_types::ContentHash;
use uuid::Uuid;

fn defaults() -> SpecificationDefaults {
    SpecificationDefaults {
        contract_spec_id: Uuid::new_v4(),
        scope_spec_id: Uuid::new_v4(),
    }
}

fn request() -> NewScopeRequest {
    NewScopeRequest::new(Uuid::new_v4(), ContentHash::new(vec![7u8; 32]), "tp1qowner")
        .with_audiences(["tp1qmanager".to_string()])
}

fn bench_addressing(c: &mut Criterion) {
    let mut group = c.benchmark_group("ao-01-metadata-address");
    let scope_id = Uuid::new_v4();

    group.bench_function("record_address", |b| {
        b.iter(|| MetadataAddress::for_record(black_box(scope_id), black_box("Asset")))
    });

    let address = MetadataAddress::for_scope(scope_id);
    group.bench_function("to_bech32", |b| b.iter(|| black_box(&address).to_bech32()));
    group.finish();
}

fn bench_scope_batch(c: &mut Criterion) {
    let mut group = c.benchmark_group("ao-04-scope-graph");
    let defaults = defaults();
    let request = request();

    for (name, publication) in [
        ("reference_existing", SpecPublication::ReferenceExisting),
        ("publish_defaults", SpecPublication::PublishDefaults),
    ] {
        group.bench_function(name, |b| {
            b.iter(|| {
                build_new_scope_batch(
                    black_box(&request),
                    &defaults,
                    publication,
                    Uuid::new_v4(),
                )
            })
        });
    }
    group.finish();
}

fn bench_assembly(c: &mut Criterion) {
    let mut group = c.benchmark_group("ao-05-tx-assembler");
    let defaults = defaults();
    let assembler = TxAssembler::default();

    for size in [1usize, 10, 100] {
        let batches: Vec<_> = (0..size)
            .filter_map(|_| {
                build_new_scope_batch(
                    &request(),
                    &defaults,
                    SpecPublication::ReferenceExisting,
                    Uuid::new_v4(),
                )
                .ok()
            })
            .collect();

        group.throughput(Throughput::Elements(size as u64));
        group.bench_with_input(BenchmarkId::new("assemble", size), &batches, |b, batches| {
            b.iter(|| assembler.assemble(black_box(batches)))
        });
    }
    group.finish();
}

criterion_group!(benches, bench_addressing, bench_scope_batch, bench_assembly);
criterion_main!(benches);
