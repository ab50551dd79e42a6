//! Benchmarks for the digamma square shaper.

use std::f64::consts::TAU;
use std::hint::black_box;

use criterion::{BenchmarkId, Criterion};
use kmath::waveshape;

use crate::BLOCK_SIZES;

pub fn bench_waveshape(c: &mut Criterion) {
    let mut group = c.benchmark_group("special/waveshape");

    for &size in BLOCK_SIZES {
        // One cycle of phase per block
        let input: Vec<f64> = (0..size).map(|i| TAU * i as f64 / size as f64).collect();

        let mut buffer = input.clone();
        group.bench_with_input(BenchmarkId::new("square", size), &size, |b, _| {
            b.iter(|| {
                buffer.copy_from_slice(&input);
                waveshape::square_buffer(black_box(&mut buffer), black_box(0.9));
            })
        });

        // High-precision digamma, exact shortcuts rarely hit
        let mut buffer = input.clone();
        group.bench_with_input(BenchmarkId::new("square12", size), &size, |b, _| {
            b.iter(|| {
                buffer.copy_from_slice(&input);
                waveshape::square12_buffer(black_box(&mut buffer), black_box(0.9));
            })
        });
    }

    group.finish();
}
