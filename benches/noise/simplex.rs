//! Benchmarks for simplex noise across dimensions.

use std::hint::black_box;

use criterion::{BenchmarkId, Criterion};
use kmath::noise::{self, simplex};

use crate::BLOCK_SIZES;

pub fn bench_simplex(c: &mut Criterion) {
    let mut group = c.benchmark_group("noise/simplex");

    for &size in BLOCK_SIZES {
        let mut buffer = vec![0.0f64; size];

        // 1D - two corners, no skew
        group.bench_with_input(BenchmarkId::new("1d", size), &size, |b, _| {
            b.iter(|| {
                noise::fill_noise1d(black_box(&mut buffer), black_box(-3.3), black_box(0.01));
            })
        });

        // 2D - three corners, one comparison
        group.bench_with_input(BenchmarkId::new("2d", size), &size, |b, _| {
            b.iter(|| {
                noise::fill_noise2d(
                    black_box(&mut buffer),
                    black_box(-3.3),
                    black_box(1.7),
                    black_box(0.01),
                );
            })
        });

        // 3D - four corners, nested comparisons
        group.bench_with_input(BenchmarkId::new("3d", size), &size, |b, _| {
            b.iter(|| {
                for (i, sample) in buffer.iter_mut().enumerate() {
                    *sample = simplex::signed_noise3d(black_box(i as f64 * 0.01), 1.7, 0.4);
                }
            })
        });

        // 4D - five corners, table-driven traversal
        group.bench_with_input(BenchmarkId::new("4d", size), &size, |b, _| {
            b.iter(|| {
                for (i, sample) in buffer.iter_mut().enumerate() {
                    *sample = simplex::signed_noise4d(black_box(i as f64 * 0.01), 1.7, 0.4, -2.2);
                }
            })
        });
    }

    group.finish();
}
