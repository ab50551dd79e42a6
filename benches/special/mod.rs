//! Benchmarks for the special-function kernels.

mod digamma;
mod functions;
mod waveshape;

pub use digamma::bench_digamma;
pub use functions::bench_functions;
pub use waveshape::bench_waveshape;
