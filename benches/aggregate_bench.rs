//! Criterion benchmarks for the daily aggregation pipeline

use bstats_chart::services::Aggregator;
use bstats_chart::types::RawPoint;
use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use std::hint::black_box;

/// Synthetic samples: `days` days at the API's native 30-minute rate
fn make_samples(days: i64) -> Vec<RawPoint> {
    let start_ms: i64 = 1_700_000_000_000;
    let step_ms: i64 = 30 * 60 * 1000;

    (0..days * 48)
        .map(|i| RawPoint {
            timestamp_ms: start_ms + i * step_ms,
            value: (i * 37) % 1000,
        })
        .collect()
}

fn bench_daily_max(c: &mut Criterion) {
    let mut group = c.benchmark_group("aggregator");

    for days in [30, 100, 365] {
        let samples = make_samples(days);
        group.throughput(Throughput::Elements(samples.len() as u64));
        group.bench_with_input(
            BenchmarkId::new("daily_max", format!("{} days", days)),
            &samples,
            |b, samples| {
                b.iter(|| Aggregator::daily_max(black_box(samples)));
            },
        );
    }

    group.finish();
}

fn bench_dense_series(c: &mut Criterion) {
    let samples = make_samples(365);
    let daily = Aggregator::daily_max(&samples);

    let mut group = c.benchmark_group("aggregator");
    group.throughput(Throughput::Elements(daily.len() as u64));
    group.bench_function("dense_series_365_days", |b| {
        b.iter(|| Aggregator::dense_series(black_box(&daily)));
    });

    group.finish();
}

criterion_group!(benches, bench_daily_max, bench_dense_series);
criterion_main!(benches);
