//! Digamma Square Shaper
//!
//! A smooth, band-limited-looking square wave built from two digamma
//! evaluations instead of a sum of harmonics.
//!
//! # How It Works
//!
//! The phase `a` is first folded through a cosine and scaled by the shape
//! parameter `b`:
//!
//!   c = b · cos(a)
//!
//! and `c` is then pushed through the transfer function
//!
//!   f(c) = ½ · ( cos(2πc) · (ψ(¾ − c) − ψ(¼ − c)) / π − 1 )
//!
//! The difference ψ(¾ − c) − ψ(¼ − c) is π·sec(2πc) plus a smooth
//! correction, so the cosine cancels the secant's poles and what remains is
//! a bounded, odd function of `c`. Because `f` is odd and `cos(a + π)` is
//! `−cos(a)`, the output is half-wave symmetric in `a` and contains only odd
//! harmonics, like a square wave.
//!
//! # Shape Values
//!
//!   b = 0    → silence (f(0) = 0)
//!   b = 0.25 → soft, nearly sinusoidal
//!   b = 0.5  → rounded square, peak 2/π
//!   b = 1.0  → sharper edges with a small overshoot-free plateau
//!
//! Over |c| ≤ 1 the output stays within about ±0.65.
//!
//! # Removable Singularity
//!
//! When `c` lands exactly on ¼ or ¾ (mod 1) one of the ψ arguments is a
//! pole and the raw formula gives ∞·0. The limit there is ½, which is what
//! the shaper returns.

use std::f64::consts::PI;

use crate::constants::{INV_PI, TAU};
use crate::special::digamma::{digamma, digamma12};

/// Value of the shaper where one ψ argument sits on a pole.
const POLE_LIMIT: f64 = 0.5;

#[inline]
fn shape(a: f64, b: f64, psi: fn(f64) -> f64) -> f64 {
    let c = b * a.cos();
    if !c.is_finite() {
        return f64::NAN;
    }

    let diff = psi(0.75 - c) - psi(0.25 - c);
    if diff.is_infinite() {
        return POLE_LIMIT;
    }

    0.5 * ((TAU * c).cos() * diff * INV_PI - 1.0)
}

/// Digamma square wave at phase `a` (radians) with shape `b`.
///
/// # Example
/// ```
/// use kmath::waveshape::square;
/// assert!(square(0.0, 0.0).abs() < 1e-12);
/// assert!((square(0.0, 0.5) - 2.0 / std::f64::consts::PI).abs() < 1e-9);
/// ```
#[inline]
pub fn square(a: f64, b: f64) -> f64 {
    shape(a, b, digamma)
}

/// [`square`] using the high-precision digamma.
#[inline]
pub fn square12(a: f64, b: f64) -> f64 {
    shape(a, b, digamma12)
}

/// Shape a buffer of phases in place.
pub fn square_buffer(buffer: &mut [f64], b: f64) {
    for sample in buffer.iter_mut() {
        *sample = square(*sample, b);
    }
}

/// Shape a buffer of phases in place with the high-precision digamma.
pub fn square12_buffer(buffer: &mut [f64], b: f64) {
    for sample in buffer.iter_mut() {
        *sample = square12(*sample, b);
    }
}

/// Fill `buffer` with one shaped cycle per `period` samples, starting at
/// phase zero.
pub fn render_square(buffer: &mut [f64], period: usize, b: f64) {
    if period == 0 {
        buffer.fill(0.0);
        return;
    }
    let step = 2.0 * PI / period as f64;
    for (i, sample) in buffer.iter_mut().enumerate() {
        *sample = square((i % period) as f64 * step, b);
    }
}
