mod common;

use std::num::NonZeroUsize;

use common::generate_stock_dataset;
use criterion::{BatchSize, BenchmarkId, Criterion, black_box, criterion_group, criterion_main};
use futures::io::Cursor;
use stockmax::prelude::*;
use tokio::runtime::Runtime;

/// Benchmark the full read-and-reduce pipeline across dataset sizes
fn bench_pipeline_dataset_sizes(c: &mut Criterion) {
    let mut group = c.benchmark_group("pipeline_sizes");
    let runtime = Runtime::new().unwrap();

    for (size_name, num_records) in [
        ("small_1k", 1_000),
        ("medium_10k", 10_000),
        ("large_100k", 100_000),
    ] {
        group.bench_with_input(
            BenchmarkId::from_parameter(size_name),
            &num_records,
            |b, &num_records| {
                b.to_async(&runtime).iter_batched(
                    || generate_stock_dataset(num_records, 50),
                    |csv_data| async move {
                        let outcome = MaxValueSession::default()
                            .run(Cursor::new(csv_data))
                            .await
                            .unwrap();
                        black_box(outcome);
                    },
                    BatchSize::SmallInput,
                );
            },
        );
    }

    group.finish();
}

/// Benchmark how batch size affects throughput on a fixed dataset
fn bench_batch_sizes(c: &mut Criterion) {
    let mut group = c.benchmark_group("batch_sizes");
    let runtime = Runtime::new().unwrap();
    let num_records = 50_000;

    for batch_size in [1, 10, 100, 1_000, 10_000] {
        group.bench_with_input(
            BenchmarkId::from_parameter(batch_size),
            &batch_size,
            |b, &batch_size| {
                b.to_async(&runtime).iter_batched(
                    || generate_stock_dataset(num_records, 50),
                    |csv_data| async move {
                        let session = MaxValueSession::new(NonZeroUsize::new(batch_size).unwrap());
                        black_box(session.run(Cursor::new(csv_data)).await.unwrap());
                    },
                    BatchSize::SmallInput,
                );
            },
        );
    }

    group.finish();
}

/// Benchmark line parsing alone
fn bench_line_parsing(c: &mut Criterion) {
    let lines = [
        "AAPL,2020-01-01,,101.25,INCREASED",
        "MSFT,2020-01-02,split adjusted,202.5,DECREASED",
        "BAD,2020-01-03,,n/a,INCREASED",
        "SHORT,2020-01-04",
    ];

    c.bench_function("parse_line", |b| {
        b.iter(|| {
            for line in &lines {
                black_box(parse_line(black_box(line)));
            }
        })
    });
}

criterion_group!(
    benches,
    bench_pipeline_dataset_sizes,
    bench_batch_sizes,
    bench_line_parsing,
);

criterion_main!(benches);
