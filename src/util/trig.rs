//! Reciprocal and hyperbolic helpers, plus fixed-point sine and cosine.
//!
//! `fsin`/`fcos` work in 14-bit fixed point: the angle is scaled so that a
//! quarter turn spans 8192 steps, folded into one quadrant with shifts, and
//! run through a small polynomial. Absolute error is under 4e-3 and peaks
//! at ±0.9994; use them where that is inaudible or invisible.

/// Cosecant, 1/sin(x).
#[inline]
pub fn csc(x: f64) -> f64 {
    1.0 / x.sin()
}

/// Hyperbolic cosecant, 1/sinh(x).
#[inline]
pub fn csch(x: f64) -> f64 {
    1.0 / x.sinh()
}

/// Hyperbolic cotangent, 1/tanh(x).
#[inline]
pub fn coth(x: f64) -> f64 {
    1.0 / x.tanh()
}

// Truncate, then wrap into 32 bits.
#[inline]
fn to_int32(v: f64) -> i32 {
    (v as i64) as i32
}

/// Fixed-point sine approximation.
///
/// # Example
/// ```
/// use kmath::util::trig::fsin;
/// assert!((fsin(std::f64::consts::FRAC_PI_2) - 1.0).abs() < 5e-3);
/// ```
#[inline]
pub fn fsin(x: f64) -> f64 {
    let scaled = x * 5214.0;
    let half = to_int32(scaled) << 17;
    let folded = (to_int32(scaled - 8192.0) << 18) >> 18;
    let q = (folded * folded) >> 12;
    let b = 19900 - ((3516 * q) >> 14);
    let b = 4096 - ((q * b) >> 16);
    let b = if half < 0 { -b } else { b };
    2.44e-4 * b as f64
}

/// Fixed-point cosine approximation.
#[inline]
pub fn fcos(x: f64) -> f64 {
    let scaled = 8192.0 - 5215.19 * x;
    let half = to_int32(scaled) << 17;
    let folded = (to_int32(scaled - 8192.0) << 18) >> 18;
    let q = (folded * folded) >> 12;
    let r = 4096 - ((q * (19900 - ((3516 * q) >> 14))) >> 16);
    let r = if half < 0 { -r } else { r };
    2.44e-4 * r as f64
}
