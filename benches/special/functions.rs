//! Benchmarks for Γ, erf and ζ.

use std::hint::black_box;

use criterion::{BenchmarkId, Criterion};
use kmath::special::{erf::erf, gamma::gamma, gamma::ln_gamma, zeta::zeta};

use crate::BLOCK_SIZES;

fn bench_kernel(
    group: &mut criterion::BenchmarkGroup<'_, criterion::measurement::WallTime>,
    name: &str,
    input: &[f64],
    output: &mut [f64],
    f: fn(f64) -> f64,
) {
    group.bench_with_input(BenchmarkId::new(name, input.len()), &input.len(), |b, _| {
        b.iter(|| {
            for (out, &x) in output.iter_mut().zip(input.iter()) {
                *out = f(black_box(x));
            }
            black_box(&output);
        })
    });
}

pub fn bench_functions(c: &mut Criterion) {
    let mut group = c.benchmark_group("special/functions");

    for &size in BLOCK_SIZES {
        let input: Vec<f64> = (0..size)
            .map(|i| 0.05 + 30.0 * i as f64 / size as f64)
            .collect();
        let mut output = vec![0.0f64; size];

        // Lanczos rational + exp/ln
        bench_kernel(&mut group, "gamma", &input, &mut output, gamma);
        bench_kernel(&mut group, "ln_gamma", &input, &mut output, ln_gamma);
        // Polynomial + one exp
        bench_kernel(&mut group, "erf", &input, &mut output, erf);
        // Nine powf terms + Euler-Maclaurin tail
        bench_kernel(&mut group, "zeta", &input, &mut output, zeta);
    }

    group.finish();
}
