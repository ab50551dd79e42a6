//! Riemann zeta function over the reals.
//!
//! For s ≥ 0 we sum the first N − 1 terms directly and close the series
//! with Euler–Maclaurin: the integral of the remainder, the half-term at N,
//! and six Bernoulli corrections. With N = 10 this is accurate to ~1e-13
//! everywhere away from the pole at s = 1.
//!
//! For s < 0 the functional equation maps onto 1 − s > 1:
//!
//! ```text
//! ζ(s) = 2^s · π^(s−1) · sin(πs/2) · Γ(1−s) · ζ(1−s)
//! ```
//!
//! The magnitude of 2^s · π^(s−1) · Γ(1−s) is assembled in log space so
//! that Γ(1−s) overflowing on its own does not take a finite ζ(s) with it.

use std::f64::consts::PI;

use crate::special::gamma::ln_gamma;

const EM_TERMS: u32 = 10;

/// B₂ₖ for k = 1..=6.
const EM_BERNOULLI: [f64; 6] = [
    1.0 / 6.0,
    -1.0 / 30.0,
    1.0 / 42.0,
    -1.0 / 30.0,
    5.0 / 66.0,
    -691.0 / 2730.0,
];

fn euler_maclaurin(s: f64) -> f64 {
    let n = EM_TERMS as f64;
    let mut sum: f64 = (1..EM_TERMS).map(|k| (k as f64).powf(-s)).sum();
    sum += n.powf(1.0 - s) / (s - 1.0) + 0.5 * n.powf(-s);

    // poch = s(s+1)...(s+2k−2), fact = (2k)!
    let mut poch = s;
    let mut fact = 2.0;
    for (i, &b) in EM_BERNOULLI.iter().enumerate() {
        let k = (i + 1) as f64;
        sum += b / fact * poch * n.powf(-s - 2.0 * k + 1.0);
        poch *= (s + 2.0 * k - 1.0) * (s + 2.0 * k);
        fact *= (2.0 * k + 1.0) * (2.0 * k + 2.0);
    }
    sum
}

/// ζ(s). `+∞` at the pole s = 1, exact zeros at the negative even integers.
///
/// # Example
/// ```
/// use kmath::special::zeta::zeta;
/// assert!((zeta(3.0) - 1.2020569031595942).abs() < 1e-12);
/// assert_eq!(zeta(-2.0), 0.0);
/// ```
pub fn zeta(s: f64) -> f64 {
    if s.is_nan() {
        return s;
    }
    if s == f64::INFINITY {
        return 1.0;
    }
    if s == f64::NEG_INFINITY {
        return f64::NAN;
    }
    if s == 1.0 {
        return f64::INFINITY;
    }
    if s == 0.0 {
        return -0.5;
    }
    if s == 2.0 {
        return PI * PI / 6.0;
    }
    if s == 4.0 {
        return PI.powi(4) / 90.0;
    }
    if s < 0.0 {
        if s.fract() == 0.0 && s % 2.0 == 0.0 {
            return 0.0;
        }
        let t = 1.0 - s;
        // Γ(t) > 0 for t > 1, so the sign lives in the sine alone
        let log_magnitude = s * std::f64::consts::LN_2 + (s - 1.0) * PI.ln() + ln_gamma(t);
        return (PI * s / 2.0).sin() * euler_maclaurin(t) * log_magnitude.exp();
    }
    euler_maclaurin(s)
}
