use std::time::Duration;

use criterion::BenchmarkGroup;
use criterion::measurement::Measurement;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

const SMALL_RUNTIME_SAMPLE_SIZE: usize = 15;
const SMALL_RUNTIME_WARM_UP_MS: u64 = 100;
const SMALL_RUNTIME_MEASURE_MS: u64 = 200;
const MEDIUM_RUNTIME_SAMPLE_SIZE: usize = 15;
const MEDIUM_RUNTIME_WARM_UP_MS: u64 = 500;
const MEDIUM_RUNTIME_MEASURE_MS: u64 = 1000;
const LARGE_RUNTIME_SAMPLE_SIZE: usize = 10;
const LARGE_RUNTIME_WARM_UP_MS: u64 = 800;
const LARGE_RUNTIME_MEASURE_MS: u64 = 1500;
const RNG_SEED: u64 = 0x5EED_2026;

pub fn apply_small_runtime_config<M: Measurement>(group: &mut BenchmarkGroup<'_, M>) {
    group.sample_size(SMALL_RUNTIME_SAMPLE_SIZE);
    group.warm_up_time(Duration::from_millis(SMALL_RUNTIME_WARM_UP_MS));
    group.measurement_time(Duration::from_millis(SMALL_RUNTIME_MEASURE_MS));
}

pub fn apply_medium_runtime_config<M: Measurement>(group: &mut BenchmarkGroup<'_, M>) {
    group.sample_size(MEDIUM_RUNTIME_SAMPLE_SIZE);
    group.warm_up_time(Duration::from_millis(MEDIUM_RUNTIME_WARM_UP_MS));
    group.measurement_time(Duration::from_millis(MEDIUM_RUNTIME_MEASURE_MS));
}

pub fn apply_large_runtime_config<M: Measurement>(group: &mut BenchmarkGroup<'_, M>) {
    group.sample_size(LARGE_RUNTIME_SAMPLE_SIZE);
    group.warm_up_time(Duration::from_millis(LARGE_RUNTIME_WARM_UP_MS));
    group.measurement_time(Duration::from_millis(LARGE_RUNTIME_MEASURE_MS));
}

/// Picks the runtime preset for an input of `len` elements.
pub fn apply_runtime_for_len<M: Measurement>(group: &mut BenchmarkGroup<'_, M>, len: usize) {
    if len <= 10_000 {
        apply_small_runtime_config(group);
    } else if len <= 100_000 {
        apply_medium_runtime_config(group);
    } else {
        apply_large_runtime_config(group);
    }
}

pub fn default_rng() -> StdRng {
    StdRng::seed_from_u64(RNG_SEED)
}

/// `samples` benchmark points between `min` and `max`, either evenly spaced or growing
/// geometrically. Points that collapse onto the same integer are reported once.
pub fn sample_points(samples: usize, min: usize, max: usize, linear: bool) -> Vec<usize> {
    assert!(min >= 1 && min <= max, "invalid sample range {min}..={max}");

    let mut points: Vec<usize> = if linear {
        let step = ((max - min) / samples.max(1)).max(1);
        (0..samples).map(|i| min + i * step).collect()
    } else {
        let factor = ((max as f64 / min as f64).ln() / samples.max(1) as f64).exp();
        (0..samples)
            .map(|i| (min as f64 * factor.powi(i as i32)) as usize)
            .collect()
    };
    points.dedup();
    points
}

/// `len` uniform values in `min_val..=max_val`. With `ensure_max` one random slot is set to
/// `max_val`, so the full value range is always present.
pub fn random_input<R: Rng + ?Sized>(
    rng: &mut R,
    len: usize,
    min_val: i32,
    max_val: i32,
    ensure_max: bool,
) -> Vec<i32> {
    let mut data: Vec<i32> = (0..len)
        .map(|_| rng.random_range(min_val..=max_val))
        .collect();
    if ensure_max && len > 0 {
        let idx = rng.random_range(0..len);
        data[idx] = max_val;
    }
    data
}

/// Input shapes that exercise run detection and galloping differently.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Pattern {
    Random,
    Ascending,
    Descending,
    Sawtooth,
    FewUnique,
    NearlySorted1pctSwaps,
}

pub const ALL_PATTERNS: [Pattern; 6] = [
    Pattern::Random,
    Pattern::Ascending,
    Pattern::Descending,
    Pattern::Sawtooth,
    Pattern::FewUnique,
    Pattern::NearlySorted1pctSwaps,
];

impl Pattern {
    pub fn label(self) -> &'static str {
        match self {
            Self::Random => "random",
            Self::Ascending => "ascending",
            Self::Descending => "descending",
            Self::Sawtooth => "sawtooth",
            Self::FewUnique => "few_unique",
            Self::NearlySorted1pctSwaps => "nearly_sorted_1pct_swaps",
        }
    }

    pub fn generate<R: Rng + ?Sized>(self, rng: &mut R, len: usize) -> Vec<i32> {
        match self {
            Self::Random => random_input(rng, len, i32::MIN, i32::MAX, false),
            Self::Ascending => (0..len).map(|i| i as i32).collect(),
            Self::Descending => (0..len).rev().map(|i| i as i32).collect(),
            Self::Sawtooth => {
                let tooth = (len / 16).max(1);
                (0..len).map(|i| (i % tooth) as i32).collect()
            }
            Self::FewUnique => random_input(rng, len, 0, 7, false),
            Self::NearlySorted1pctSwaps => {
                let mut data: Vec<i32> = (0..len).map(|i| i as i32).collect();
                if len > 0 {
                    for _ in 0..(len / 100).max(1) {
                        let a = rng.random_range(0..len);
                        let b = rng.random_range(0..len);
                        data.swap(a, b);
                    }
                }
                data
            }
        }
    }
}
