//! Special functions over `f64`.
//!
//! Everything here is a pure function of its arguments. Poles and other
//! out-of-domain inputs are signaled by returning `+∞` (or passing `NaN`
//! through), never by panicking, so the kernels can run inside tight loops
//! without a branch on the caller's side.

/// Digamma ψ(x) at four accuracy levels, plus π·cot(πx).
pub mod digamma;
/// Real-argument harmonic numbers built on ψ.
pub mod harmonic;
/// Bernoulli and harmonic-number tables shared by the digamma kernels.
pub mod tables;

/// Error function and the standard normal CDF.
pub mod erf;
/// Normalized Fresnel sine integral.
pub mod fresnel;
/// Factorial, Γ and ln Γ.
pub mod gamma;
/// Riemann zeta over the reals.
pub mod zeta;

pub use digamma::{digamma, digamma12, digamma_fast, digamma_precise, digamma_ultra, Accuracy};
pub use gamma::{gamma, ln_gamma};
pub use harmonic::{harmonic, harmonic12};
