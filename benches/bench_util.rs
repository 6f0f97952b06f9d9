#![allow(dead_code)]

use criterion::measurement::WallTime;
use criterion::{black_box, BenchmarkGroup, Criterion};
use std::time::Duration;

/// Two points in the plane, as the geometry helpers take them.
pub type Segment = ((f64, f64), (f64, f64));

/// Seeded LCG so every run times the same inputs.
pub struct Lcg(u64);

impl Lcg {
    pub fn new(seed: u64) -> Self {
        Lcg(seed)
    }

    pub fn uniform(&mut self, min: f64, max: f64) -> f64 {
        self.0 = self
            .0
            .wrapping_mul(6364136223846793005)
            .wrapping_add(1442695040888963407);
        let unit = ((self.0 >> 11) as f64) / ((1u64 << 53) as f64);
        min + (max - min) * unit
    }
}

pub fn gen_range(count: usize, min: f64, max: f64, seed: u64) -> Vec<f64> {
    let mut rng = Lcg::new(seed);
    (0..count).map(|_| rng.uniform(min, max)).collect()
}

/// `(y, x)` pairs for the two-argument arctangent.
pub fn gen_ratios(count: usize, span: f64, seed: u64) -> Vec<(f64, f64)> {
    let mut rng = Lcg::new(seed);
    (0..count)
        .map(|_| (rng.uniform(-span, span), rng.uniform(-span, span)))
        .collect()
}

/// Consecutive random points on a square of half-width `span`.
pub fn gen_segments(count: usize, span: f64, seed: u64) -> Vec<Segment> {
    let mut rng = Lcg::new(seed);
    let mut point = || (rng.uniform(-span, span), rng.uniform(-span, span));
    (0..count).map(|_| (point(), point())).collect()
}

/// Times `approx` and `reference` over `inputs` as the `approxmath` and `std`
/// members of `group`.
pub fn compare<T: Copy>(
    group: &mut BenchmarkGroup<'_, WallTime>,
    inputs: &[T],
    approx: impl Fn(T) -> f64,
    reference: impl Fn(T) -> f64,
) {
    group.bench_function("approxmath", |b| {
        b.iter(|| inputs.iter().map(|&x| approx(black_box(x))).sum::<f64>())
    });
    group.bench_function("std", |b| {
        b.iter(|| inputs.iter().map(|&x| reference(black_box(x))).sum::<f64>())
    });
}

pub fn configure_criterion() -> Criterion {
    Criterion::default()
        .sample_size(100)
        .measurement_time(Duration::from_secs(5))
        .warm_up_time(Duration::from_secs(2))
}
