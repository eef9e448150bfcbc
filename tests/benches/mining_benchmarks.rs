//! # Market-Basket Mining Benchmarks
//!
//! | Stage | Input | Notes |
//! |-------|-------|-------|
//! | mb-01 Ingestion | header + detail rows | chunked join and grouping |
//! | mb-02 Apriori | encoded baskets | sequential vs parallel counting |
//! | mb-02 Rules | frequent itemsets | subset enumeration |
//! | mb-02 Recommend | rules | overlap match, rank, dedup |

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use mb_01_ingestion::{IngestOptions, TransactionIngestionApi, TransactionIngestor};
use mb_02_mining::{generate_rules, mine_frequent_itemsets, recommend, AprioriMiner, MiningConfig};
use mb_tests::fixtures::{self, CorpusShape};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use shared_types::{CancellationToken, ItemId};
use std::time::Duration;

fn shape(transactions: usize) -> CorpusShape {
    CorpusShape {
        transactions,
        items: 200,
        max_basket: 12,
        seed: 42,
    }
}

// ============================================================================
// MB-01: Ingestion
// ============================================================================

fn bench_ingestion(c: &mut Criterion) {
    let mut group = c.benchmark_group("mb-01-ingestion");

    for size in [1_000, 10_000, 50_000] {
        let (header, detail) = fixtures::sources(shape(size));
        let ingestor = TransactionIngestor::with_options(IngestOptions::default().with_chunk_size(4_096));
        let cancel = CancellationToken::new();

        group.throughput(Throughput::Elements(detail.len() as u64));
        group.bench_with_input(BenchmarkId::new("ingest", size), &size, |b, _| {
            b.iter(|| black_box(ingestor.ingest(&header, &detail, &cancel)))
        });
    }

    group.finish();
}

// ============================================================================
// MB-02: Apriori
// ============================================================================

fn bench_apriori(c: &mut Criterion) {
    let mut group = c.benchmark_group("mb-02-apriori");
    group.measurement_time(Duration::from_secs(10));

    for size in [1_000, 10_000, 50_000] {
        let baskets = fixtures::baskets(shape(size));
        let cancel = CancellationToken::new();
        let sequential = AprioriMiner::new(MiningConfig::sequential());
        let parallel = AprioriMiner::new(MiningConfig {
            parallel_threshold: 0,
            ..MiningConfig::default()
        });

        group.throughput(Throughput::Elements(size as u64));
        group.bench_with_input(BenchmarkId::new("sequential", size), &baskets, |b, baskets| {
            b.iter(|| black_box(sequential.mine(baskets, 0.01, 3, &cancel)))
        });
        group.bench_with_input(BenchmarkId::new("parallel", size), &baskets, |b, baskets| {
            b.iter(|| black_box(parallel.mine(baskets, 0.01, 3, &cancel)))
        });
    }

    group.finish();
}

// ============================================================================
// MB-02: Rules and Recommendations
// ============================================================================

fn bench_rules_and_recommend(c: &mut Criterion) {
    let mut group = c.benchmark_group("mb-02-rules");

    let baskets = fixtures::baskets(shape(10_000));
    for min_support in [0.02, 0.01, 0.005] {
        let frequent = mine_frequent_itemsets(&baskets, min_support, 3).unwrap_or_default();
        group.throughput(Throughput::Elements(frequent.len() as u64));
        group.bench_with_input(
            BenchmarkId::new("generate_rules", min_support),
            &frequent,
            |b, frequent| b.iter(|| black_box(generate_rules(frequent, 0.1))),
        );
    }

    let frequent = mine_frequent_itemsets(&baskets, 0.005, 3).unwrap_or_default();
    let rules = generate_rules(&frequent, 0.1).unwrap_or_default();
    let mut rng = StdRng::seed_from_u64(9);
    let queries: Vec<Vec<ItemId>> = (0..64)
        .map(|_| {
            (0..rng.gen_range(1..4))
                .map(|_| ItemId::new(&format!("SKU-{:04}", rng.gen_range(0..40))))
                .collect()
        })
        .collect();

    group.bench_function("recommend_top5", |b| {
        b.iter(|| {
            for query in &queries {
                black_box(recommend(query, &rules, 5));
            }
        })
    });

    group.finish();
}

criterion_group!(
    benches,
    bench_ingestion,
    bench_apriori,
    bench_rules_and_recommend,
);

criterion_main!(benches);
