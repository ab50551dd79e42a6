//! Benchmarks for the digamma accuracy variants.

use std::hint::black_box;

use criterion::{BenchmarkId, Criterion};
use kmath::special::digamma::{digamma_with, Accuracy};

use crate::BLOCK_SIZES;

pub fn bench_digamma(c: &mut Criterion) {
    let mut group = c.benchmark_group("special/digamma");

    let variants = [
        ("standard", Accuracy::Standard),
        ("fast", Accuracy::Fast),
        ("ultra", Accuracy::Ultra),
        ("precision12", Accuracy::high_precision()),
    ];

    for &size in BLOCK_SIZES {
        // Spread over the shift, reflection and asymptotic regimes
        let input: Vec<f64> = (0..size)
            .map(|i| -20.0 + 60.0 * i as f64 / size as f64 + 0.137)
            .collect();
        let mut output = vec![0.0f64; size];

        for (name, accuracy) in variants {
            group.bench_with_input(BenchmarkId::new(name, size), &size, |b, _| {
                b.iter(|| {
                    for (out, &x) in output.iter_mut().zip(input.iter()) {
                        *out = digamma_with(black_box(x), accuracy);
                    }
                    black_box(&output);
                })
            });
        }
    }

    group.finish();
}
