//! Criterion benchmarks for whole-generation development.

use criterion::{criterion_group, criterion_main, Criterion};
use pelt_bench::{reference_profile, stress_profile};
use pelt_engine::{DevelopParams, ExecutionMode};
use std::hint::black_box;

/// Benchmark: one generation on the 64x64 reference profile, default
/// radii (RA=3, RI=6).
fn bench_develop_64x64(c: &mut Criterion) {
    let params = DevelopParams::default();

    c.bench_function("develop_64x64_sequential", |b| {
        let mut cells = reference_profile(42).unwrap();
        b.iter(|| {
            let report = cells.develop_params(&params).unwrap();
            black_box(report);
        });
    });
}

/// Benchmark: the same generation with pass 1 split over four threads.
fn bench_develop_64x64_parallel(c: &mut Criterion) {
    let params = DevelopParams::default();

    c.bench_function("develop_64x64_parallel4", |b| {
        let mut cells = reference_profile(42).unwrap();
        cells
            .set_mode(ExecutionMode::Parallel { threads: 4 })
            .unwrap();
        b.iter(|| {
            let report = cells.develop_params(&params).unwrap();
            black_box(report);
        });
    });
}

/// Benchmark: pass 1 alone on the 256x256 stress profile.
fn bench_update_discs_256x256(c: &mut Criterion) {
    let mut group = c.benchmark_group("stress");
    group.sample_size(10);
    group.bench_function("update_discs_256x256", |b| {
        let mut cells = stress_profile(7).unwrap();
        b.iter(|| {
            cells.update_discs(3, 6, 0.35).unwrap();
            black_box(cells.discs());
        });
    });
    group.finish();
}

criterion_group!(
    benches,
    bench_develop_64x64,
    bench_develop_64x64_parallel,
    bench_update_discs_256x256
);
criterion_main!(benches);
