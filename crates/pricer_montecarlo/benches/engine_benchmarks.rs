//! Criterion benchmarks for the Monte Carlo engine.
//!
//! Benchmarks cover:
//! - RNG normal draws (single and batch)
//! - Path generation with varying path and step counts
//! - Full simulate-and-price runs

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use pricer_montecarlo::mc::{
    generate_gbm_paths, simulate_and_price, GbmParams, MonteCarloConfig, PathWorkspace,
    SimulationParams,
};
use pricer_montecarlo::rng::PricerRng;

fn bench_rng_generation(c: &mut Criterion) {
    let mut group = c.benchmark_group("rng_generation");

    for n_samples in [1_000, 10_000, 100_000] {
        group.bench_with_input(
            BenchmarkId::new("normal_batch", n_samples),
            &n_samples,
            |b, &n| {
                let mut rng = PricerRng::from_seed(42);
                let mut buffer = vec![0.0; n];
                b.iter(|| {
                    rng.fill_normal(&mut buffer);
                    black_box(buffer.iter().sum::<f64>())
                });
            },
        );
    }

    group.finish();
}

fn bench_path_generation(c: &mut Criterion) {
    let mut group = c.benchmark_group("path_generation");
    let gbm = GbmParams::default();

    for (n_paths, n_steps) in [(1_000, 100), (10_000, 100), (1_000, 1_000)] {
        let id = format!("{}x{}", n_paths, n_steps);
        group.bench_function(BenchmarkId::new("gbm", id), |b| {
            let mut workspace = PathWorkspace::new(n_paths, n_steps);
            let mut rng = PricerRng::from_seed(42);
            b.iter(|| {
                generate_gbm_paths(&mut workspace, &mut rng, black_box(gbm), n_paths, n_steps);
                black_box(workspace.paths().terminal(0))
            });
        });
    }

    group.finish();
}

fn bench_simulate_and_price(c: &mut Criterion) {
    let mut group = c.benchmark_group("simulate_and_price");
    group.sample_size(20);

    let params = SimulationParams::default();

    for n_paths in [1_000, 10_000, 100_000] {
        let config = MonteCarloConfig::builder()
            .n_paths(n_paths)
            .n_steps(100)
            .seed(42)
            .build()
            .unwrap();

        group.bench_with_input(BenchmarkId::new("call_put", n_paths), &config, |b, config| {
            b.iter(|| simulate_and_price(black_box(&params), config).unwrap());
        });
    }

    group.finish();
}

criterion_group!(
    benches,
    bench_rng_generation,
    bench_path_generation,
    bench_simulate_and_price
);
criterion_main!(benches);
