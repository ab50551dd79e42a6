//! Harmonic numbers extended to real arguments.
//!
//! H(x) = ψ(x + 1) + γ agrees with Σ_{k=1..n} 1/k at the positive integers
//! and interpolates smoothly between them. It inherits ψ's poles, so
//! H(−1), H(−2), ... are `+∞`.

use crate::constants::EULER_GAMMA;
use crate::special::digamma::{digamma, digamma12};
use crate::special::tables::{HARMONIC_DENOMINATORS, HARMONIC_NUMERATORS};

/// H(x) via the standard digamma.
///
/// # Example
/// ```
/// use kmath::harmonic;
/// assert!((harmonic(10.0) - 2.9289682540).abs() < 1e-9);
/// ```
#[inline]
pub fn harmonic(x: f64) -> f64 {
    digamma(x + 1.0) + EULER_GAMMA
}

/// H(x) via the high-precision digamma.
#[inline]
pub fn harmonic12(x: f64) -> f64 {
    digamma12(x + 1.0) + EULER_GAMMA
}

/// H(n) for a nonnegative integer `n`.
///
/// Up to n = 29 this is the correctly rounded quotient of the tabulated
/// rational. Beyond that the terms are summed smallest-first.
pub fn harmonic_exact(n: u32) -> f64 {
    if n == 0 {
        return 0.0;
    }
    let idx = n as usize - 1;
    if idx < HARMONIC_NUMERATORS.len() {
        return HARMONIC_NUMERATORS[idx] as f64 / HARMONIC_DENOMINATORS[idx] as f64;
    }
    (1..=n).rev().map(|k| 1.0 / k as f64).sum()
}
