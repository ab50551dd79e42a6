//! Uniform sampling helpers.
//!
//! Every function takes the generator explicitly, so seeding a
//! `rand::rngs::StdRng` makes the results reproducible.

use rand::seq::SliceRandom;
use rand::Rng;

/// Decimal places beyond which rounding no longer changes an `f64`.
const MAX_PRECISION: u32 = 15;

/// Uniform float in `[min, max]`, rounded to `precision` decimal places.
///
/// Rounding that would leave the interval goes toward its interior instead.
/// When no multiple of `10^-precision` lies inside, the result is clamped
/// to the nearer bound.
pub fn random_float<R: Rng + ?Sized>(rng: &mut R, min: f64, max: f64, precision: u32) -> f64 {
    let raw = (min + rng.gen::<f64>() * (max - min)).min(max);
    let scale = 10f64.powi(precision.min(MAX_PRECISION) as i32);
    let mut rounded = (raw * scale).round() / scale;
    if rounded > max {
        rounded = (raw * scale).floor() / scale;
    }
    if rounded < min {
        rounded = (raw * scale).ceil() / scale;
    }
    rounded.max(min).min(max)
}

/// Uniform integer in `[min, max]`, inclusive. Bounds may come in either
/// order.
pub fn random_int<R: Rng + ?Sized>(rng: &mut R, min: i32, max: i32) -> i32 {
    let (lo, hi) = if min <= max { (min, max) } else { (max, min) };
    rng.gen_range(lo..=hi)
}

/// A uniformly shuffled permutation of `0..n`.
pub fn random_perm<R: Rng + ?Sized>(rng: &mut R, n: usize) -> Vec<usize> {
    let mut perm: Vec<usize> = (0..n).collect();
    perm.shuffle(rng);
    perm
}
