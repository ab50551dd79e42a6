//! Benchmarks for procedural noise.

mod simplex;

pub use simplex::bench_simplex;
