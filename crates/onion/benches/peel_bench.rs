//! Criterion benchmarks for onion peeling.
//! Focus sizes: n in {100, 1_000, 5_000}; uniform clouds and near-circle sets
//! (few deep layers vs. one wide layer).
//! Results: by default under target/criterion.

use criterion::{criterion_group, criterion_main, BatchSize, BenchmarkId, Criterion};
use onion::api::{
    draw_points_on_circle, draw_points_uniform, extract_hull, peel, ReplayToken, UniformCfg,
};

fn bench_peel(c: &mut Criterion) {
    let mut group = c.benchmark_group("peel");
    for &n in &[100usize, 1_000, 5_000] {
        let cfg = UniformCfg {
            count: n,
            extent: 10_000,
        };
        group.bench_with_input(BenchmarkId::new("uniform", n), &n, |b, _| {
            let pts = draw_points_uniform(cfg, ReplayToken::new(43, n as u64));
            b.iter(|| peel(&pts).layer_count())
        });

        group.bench_with_input(BenchmarkId::new("circle", n), &n, |b, &n| {
            let pts = draw_points_on_circle(n, 1_000_000, ReplayToken::new(44, n as u64));
            b.iter(|| peel(&pts).layer_count())
        });

        group.bench_with_input(BenchmarkId::new("single_hull", n), &n, |b, _| {
            b.iter_batched(
                || draw_points_uniform(cfg, ReplayToken::new(45, n as u64)),
                |pts| {
                    let _pass = extract_hull(pts);
                },
                BatchSize::SmallInput,
            )
        });
    }
    group.finish();
}

criterion_group!(benches, bench_peel);
criterion_main!(benches);
