//! Interpolation and range mapping.

/// Below this input-range width [`map`] gives up and returns the low output.
const DEGENERATE_RANGE: f64 = 1e-15;

/// Linear interpolation: `v0` at `x = 0`, `v1` at `x = 1`.
#[inline]
pub fn lerp(x: f64, v0: f64, v1: f64) -> f64 {
    v0 + (v1 - v0) * x
}

/// Clamp `x` to `[v0, v1]`.
///
/// Unlike `f64::clamp` this never panics: with `v0 > v1` the lower bound is
/// checked first and wins.
#[inline]
pub fn clamp(x: f64, v0: f64, v1: f64) -> f64 {
    if x < v0 {
        v0
    } else if x > v1 {
        v1
    } else {
        x
    }
}

/// Position of `x` within `[v0, v1]`, clamped to `[-1, 1]`.
#[inline]
pub fn normalize(x: f64, v0: f64, v1: f64) -> f64 {
    clamp((x - v0) / (v1 - v0), -1.0, 1.0)
}

/// Re-map `x` from `[v0, v1]` onto `[vx0, vx1]`.
///
/// A zero-width input range maps everything to `vx0`. With `clamp` set the
/// result is kept between the output bounds, whichever order they are in.
///
/// # Example
/// ```
/// use kmath::util::map;
/// assert_eq!(map(5.0, 0.0, 10.0, 0.0, 100.0, false), 50.0);
/// assert_eq!(map(7.0, 5.0, 5.0, 0.0, 10.0, false), 0.0);
/// ```
pub fn map(x: f64, v0: f64, v1: f64, vx0: f64, vx1: f64, clamp: bool) -> f64 {
    if (v0 - v1).abs() < DEGENERATE_RANGE {
        return vx0;
    }
    let mapped = (x - v0) / (v1 - v0) * (vx1 - vx0) + vx0;
    if !clamp {
        return mapped;
    }
    let (lo, hi) = if vx1 < vx0 { (vx1, vx0) } else { (vx0, vx1) };
    if mapped < lo {
        lo
    } else if mapped > hi {
        hi
    } else {
        mapped
    }
}
