use std::hint::black_box;
use std::time::{Duration, Instant};

use bench::{ALL_PATTERNS, apply_runtime_for_len, default_rng, random_input, sample_points};
use criterion::{BenchmarkId, Criterion, criterion_group, criterion_main};
use sort::{SortContext, TUNED_PARAMS, TimsortParams, sort_with_ctx};

const LENGTH_SAMPLES: usize = 8;
const MIN_LENGTH: usize = 100;
const MAX_LENGTH: usize = 100_000;
const MAX_SAMPLES: usize = 6;
const FIXED_LENGTH: usize = 10_000;
const MIN_MAX_VALUE: usize = 10;
const MAX_MAX_VALUE: usize = 1_000_000;
const PATTERN_LENGTH: usize = 65_536;

#[derive(Clone, Copy)]
enum Variant {
    Galloping,
    NoGalloping,
    StdStable,
}

const VARIANTS: [Variant; 3] = [Variant::Galloping, Variant::NoGalloping, Variant::StdStable];

impl Variant {
    fn label(self) -> &'static str {
        match self {
            Self::Galloping => "timsort",
            Self::NoGalloping => "timsort_no_gallop",
            Self::StdStable => "std_stable",
        }
    }

    fn params(self) -> TimsortParams {
        match self {
            Self::NoGalloping => TUNED_PARAMS.without_galloping(),
            _ => TUNED_PARAMS,
        }
    }
}

/// Times only the sort itself; cloning the input is excluded.
fn time_variant(variant: Variant, base: &[i32], iters: u64) -> Duration {
    let mut total = Duration::ZERO;
    let mut ctx = SortContext::with_params(variant.params()).expect("valid benchmark params");
    for _ in 0..iters {
        let mut data = base.to_vec();
        let start = Instant::now();
        match variant {
            Variant::StdStable => data.sort(),
            _ => {
                black_box(sort_with_ctx(&mut data, &mut ctx).ok());
            }
        }
        total += start.elapsed();
        black_box(&data);
    }
    total
}

fn bench_by_length(c: &mut Criterion) {
    let mut group = c.benchmark_group("sort/by_length");
    let mut rng = default_rng();

    for len in sample_points(LENGTH_SAMPLES, MIN_LENGTH, MAX_LENGTH, false) {
        apply_runtime_for_len(&mut group, len);
        let base = random_input(&mut rng, len, 1, 100_000, false);
        for variant in VARIANTS {
            group.bench_function(BenchmarkId::new(variant.label(), len), |bencher| {
                bencher.iter_custom(|iters| time_variant(variant, &base, iters));
            });
        }
    }
    group.finish();
}

fn bench_by_max(c: &mut Criterion) {
    let mut group = c.benchmark_group("sort/by_max");
    let mut rng = default_rng();
    apply_runtime_for_len(&mut group, FIXED_LENGTH);

    for max in sample_points(MAX_SAMPLES, MIN_MAX_VALUE, MAX_MAX_VALUE, false) {
        let base = random_input(&mut rng, FIXED_LENGTH, MIN_MAX_VALUE as i32, max as i32, true);
        for variant in VARIANTS {
            group.bench_function(BenchmarkId::new(variant.label(), max), |bencher| {
                bencher.iter_custom(|iters| time_variant(variant, &base, iters));
            });
        }
    }
    group.finish();
}

fn bench_patterns(c: &mut Criterion) {
    let mut group = c.benchmark_group("sort/patterns");
    let mut rng = default_rng();
    apply_runtime_for_len(&mut group, PATTERN_LENGTH);

    for pattern in ALL_PATTERNS {
        let base = pattern.generate(&mut rng, PATTERN_LENGTH);
        for variant in VARIANTS {
            group.bench_function(BenchmarkId::new(variant.label(), pattern.label()), |bencher| {
                bencher.iter_custom(|iters| time_variant(variant, &base, iters));
            });
        }
    }
    group.finish();
}

criterion_group!(benches, bench_by_length, bench_by_max, bench_patterns);
criterion_main!(benches);
