use std::hint::black_box;
use std::time::Duration;

use criterion::{BenchmarkId, Criterion, criterion_group, criterion_main};
use rand::Rng;
use rand::rngs::StdRng;
use seqsort::{SortAlgorithm, SortOrder, algorithm_name};

const BENCH_SIZES: [usize; 3] = [1024, 4096, 16384];

// The quadratic baselines are left out; they exist for comparison in tests,
// not for timing runs at these sizes.
const BENCH_TARGETS: [SortAlgorithm; 5] = [
    SortAlgorithm::DualPivotQuick,
    SortAlgorithm::TernaryMerge,
    SortAlgorithm::MergeInPlace,
    SortAlgorithm::WeaveMerge,
    SortAlgorithm::TernaryHeap,
];

#[derive(Clone, Copy)]
enum Distribution {
    RandomUniform,
    NearlySorted1pctSwaps,
}

impl Distribution {
    fn label(self) -> &'static str {
        match self {
            Self::RandomUniform => "random_uniform",
            Self::NearlySorted1pctSwaps => "nearly_sorted_1pct_swaps",
        }
    }
}

const DISTRIBUTIONS: [Distribution; 2] = [
    Distribution::RandomUniform,
    Distribution::NearlySorted1pctSwaps,
];

fn bench_sort(c: &mut Criterion) {
    let mut rng = bench::default_rng();

    for &dist in &DISTRIBUTIONS {
        let mut group = c.benchmark_group(format!("sort/{}", dist.label()));
        bench::apply_medium_runtime_config(&mut group);

        for &size in &BENCH_SIZES {
            let base = generate_dataset(dist, size, &mut rng);

            for &algo in &BENCH_TARGETS {
                group.bench_function(BenchmarkId::new(algorithm_name(algo), size), |bencher| {
                    bencher.iter_custom(|iters| {
                        let mut total = Duration::ZERO;
                        for _ in 0..iters {
                            let mut data = base.clone();
                            let start = std::time::Instant::now();
                            seqsort::sort(algo, &mut data[..], &SortOrder::Ascending);
                            total += start.elapsed();
                            black_box(&data);
                        }
                        total
                    });
                });
            }

            group.bench_function(BenchmarkId::new("std_unstable", size), |bencher| {
                bencher.iter_custom(|iters| {
                    let mut total = Duration::ZERO;
                    for _ in 0..iters {
                        let mut data = base.clone();
                        let start = std::time::Instant::now();
                        data.sort_unstable();
                        total += start.elapsed();
                        black_box(&data);
                    }
                    total
                });
            });

            group.bench_function(BenchmarkId::new("std_stable", size), |bencher| {
                bencher.iter_custom(|iters| {
                    let mut total = Duration::ZERO;
                    for _ in 0..iters {
                        let mut data = base.clone();
                        let start = std::time::Instant::now();
                        data.sort();
                        total += start.elapsed();
                        black_box(&data);
                    }
                    total
                });
            });
        }

        group.finish();
    }
}

fn generate_dataset(dist: Distribution, size: usize, rng: &mut StdRng) -> Vec<u64> {
    let mut data = Vec::with_capacity(size);

    match dist {
        Distribution::RandomUniform => {
            for _ in 0..size {
                data.push(rng.random::<u64>());
            }
        }
        Distribution::NearlySorted1pctSwaps => {
            for i in 0..size {
                data.push(i as u64);
            }
            let swaps = (size / 100).max(1);
            for _ in 0..swaps {
                let a = rng.random_range(0..size);
                let b = rng.random_range(0..size);
                data.swap(a, b);
            }
        }
    }

    data
}

criterion_group!(benches, bench_sort);
criterion_main!(benches);
