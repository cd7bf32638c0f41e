//! # Automix Performance Benchmarks
//!
//! Benchmarks for each pipeline stage and for the full plan.
//!
//! ## Benchmark Categories
//!
//! - **Distance Matrix**: sequential vs rayon evaluation
//! - **Spanning Tree**: Prim over a dense matrix
//! - **Path Table**: Floyd–Warshall over the tree
//! - **Full Plan**: end-to-end mix planning
//!
//! ## Running Benchmarks
//!
//! ```bash
//! # Run all benchmarks
//! cargo bench
//!
//! # Run specific benchmark group
//! cargo bench matrix
//! cargo bench pipeline
//! ```

use automix::config::{DiameterMode, MixConfig};
use automix::matrix::DistanceMatrix;
use automix::metric::HarmonicMetric;
use automix::mst;
use automix::paths::{LinkUpdate, PathTable};
use automix::pipeline;
use automix::track::{CamelotKey, Ring, Track};
use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};
use std::hint::black_box;

/// Deterministic collection spread around the wheel at club tempos
fn create_benchmark_tracks(count: usize) -> Vec<Track> {
    (0..count)
        .map(|i| {
            let ring = if i % 3 == 0 { Ring::Major } else { Ring::Minor };
            let wedge = u8::try_from(i * 5 % 12 + 1).expect("wedge fits in u8");
            let key = CamelotKey::new(wedge, ring).expect("valid wedge");
            #[allow(clippy::cast_precision_loss)]
            let bpm = 115.0 + (i * 7 % 20) as f64;
            Track::new(format!("/music/Track{i:04}.flac"), key, bpm).expect("valid track")
        })
        .collect()
}

fn bench_matrix(c: &mut Criterion) {
    let mut group = c.benchmark_group("matrix");
    let metric = HarmonicMetric::default();

    for size in [100, 500] {
        let tracks = create_benchmark_tracks(size);
        group.bench_with_input(BenchmarkId::new("sequential", size), &tracks, |b, tracks| {
            b.iter(|| DistanceMatrix::build(black_box(tracks), &metric).expect("matrix"));
        });
        group.bench_with_input(BenchmarkId::new("parallel", size), &tracks, |b, tracks| {
            b.iter(|| DistanceMatrix::build_parallel(black_box(tracks), &metric).expect("matrix"));
        });
    }
    group.finish();
}

fn bench_tree(c: &mut Criterion) {
    let mut group = c.benchmark_group("tree");
    let metric = HarmonicMetric::default();

    for size in [100, 500] {
        let matrix = DistanceMatrix::build(&create_benchmark_tracks(size), &metric).expect("matrix");
        group.bench_with_input(BenchmarkId::new("prim", size), &matrix, |b, matrix| {
            b.iter(|| mst::minimum_spanning_tree(black_box(matrix)).expect("tree"));
        });

        let tree = mst::minimum_spanning_tree(&matrix).expect("tree").unit_weighted();
        group.bench_with_input(BenchmarkId::new("floyd_warshall", size), &tree.edges, |b, edges| {
            b.iter(|| PathTable::from_edges(black_box(edges), LinkUpdate::Symmetric));
        });
    }
    group.finish();
}

fn bench_pipeline(c: &mut Criterion) {
    let mut group = c.benchmark_group("pipeline");
    let tracks = create_benchmark_tracks(200);

    for mode in [DiameterMode::Hops, DiameterMode::Weighted] {
        let config = MixConfig {
            diameter: mode,
            ..MixConfig::default()
        };
        group.bench_function(format!("plan_{mode:?}").to_lowercase(), |b| {
            b.iter(|| pipeline::plan_harmonic_mix(black_box(&tracks), &config).expect("plan"));
        });
    }
    group.finish();
}

criterion_group!(benches, bench_matrix, bench_tree, bench_pipeline);
criterion_main!(benches);
