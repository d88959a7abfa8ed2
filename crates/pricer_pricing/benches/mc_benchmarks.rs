//! Criterion benchmarks for Monte Carlo pricing.
//!
//! Benchmarks cover:
//! - GBM path generation (full path vs terminal price only)
//! - European option pricing, sequential vs parallel

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use pricer_core::traits::PricingModel;
use pricer_core::types::{ContractSpec, MarketInputs};
use pricer_pricing::mc::{GbmParams, MonteCarloConfig, MonteCarloPricer, PathGenerator};

fn bench_path_generation(c: &mut Criterion) {
    let mut group = c.benchmark_group("path_generation");
    let generator = PathGenerator::new(GbmParams::default(), 252).unwrap();

    group.bench_function("generate_252", |b| {
        let mut seed = 0_u64;
        b.iter(|| {
            seed += 1;
            black_box(generator.generate(seed))
        });
    });

    group.bench_function("terminal_price_252", |b| {
        let mut seed = 0_u64;
        b.iter(|| {
            seed += 1;
            black_box(generator.terminal_price(seed))
        });
    });

    group.finish();
}

fn bench_mc_pricing(c: &mut Criterion) {
    let mut group = c.benchmark_group("mc_pricing");
    group.sample_size(10);

    let market = MarketInputs::default();
    let contract = ContractSpec::call(100.0, 1.0);

    for n_scenarios in [10_000, 100_000] {
        for parallel in [false, true] {
            let mode = if parallel { "parallel" } else { "sequential" };
            let config = MonteCarloConfig::builder()
                .n_scenarios(n_scenarios)
                .n_steps(50)
                .seed(42)
                .parallel(parallel)
                .build()
                .unwrap();

            group.bench_with_input(
                BenchmarkId::new(mode, n_scenarios),
                &config,
                |b, config| {
                    b.iter(|| {
                        let pricer =
                            MonteCarloPricer::new(market, contract, config.clone()).unwrap();
                        black_box(pricer.price())
                    });
                },
            );
        }
    }

    group.finish();
}

criterion_group!(benches, bench_path_generation, bench_mc_pricing);
criterion_main!(benches);
