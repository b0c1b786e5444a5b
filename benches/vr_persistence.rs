//! Vietoris-Rips and lazy witness persistence on random sphere points

use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};
use phom::{
    lw_persistent_homology_with_rng, random_sphere_points, ComplexBuilder, PersistenceEngine,
    PointCloudMetricSpace, VietorisRips,
};
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::hint::black_box;

fn sphere(n: usize) -> PointCloudMetricSpace {
    let mut rng = StdRng::seed_from_u64(7);
    PointCloudMetricSpace::euclidean(random_sphere_points(n, 2, &mut rng))
}

/// Complex construction alone
fn benchmark_vr_construction(c: &mut Criterion) {
    let mut group = c.benchmark_group("vr_construction");

    for n in [50, 100, 200] {
        let space = sphere(n);
        group.bench_with_input(BenchmarkId::from_parameter(n), &space, |b, space| {
            b.iter(|| VietorisRips::new(space, black_box(0.6), 2).construct())
        });
    }

    group.finish();
}

/// Construction followed by reduction
fn benchmark_vr_persistence(c: &mut Criterion) {
    let mut group = c.benchmark_group("vr_persistence");
    group.sample_size(20);

    for n in [50, 100] {
        let space = sphere(n);
        group.bench_with_input(BenchmarkId::from_parameter(n), &space, |b, space| {
            b.iter(|| {
                let complex = VietorisRips::new(space, black_box(0.6), 2).construct();
                PersistenceEngine::new(1).compute_intervals(&complex)
            })
        });
    }

    group.finish();
}

fn benchmark_lw_persistence(c: &mut Criterion) {
    let mut group = c.benchmark_group("lw_persistence");
    group.sample_size(10);

    let space = sphere(2000);
    group.bench_function("n=2000_l=50", |b| {
        b.iter(|| {
            let mut rng = StdRng::seed_from_u64(1);
            lw_persistent_homology_with_rng(&space, 1, black_box(0.6), 50, 100, &mut rng)
        })
    });

    group.finish();
}

criterion_group!(
    benches,
    benchmark_vr_construction,
    benchmark_vr_persistence,
    benchmark_lw_persistence
);
criterion_main!(benches);
