//! Gradient selection.
//!
//! Each function reads the low bits of a lattice hash as a choice among a
//! small fixed set of directions and returns that direction dotted with the
//! offset from the lattice corner. Nothing is normalized; the per-dimension
//! scale in `simplex` absorbs the gradient lengths.

/// 1D: sixteen gradients ±1..±8, chosen by the low four bits.
#[inline]
pub fn gradient1d(hash: i32, x: f64) -> f64 {
    let h = hash & 15;
    let grad = 1.0 + (h & 7) as f64;
    if h & 8 != 0 {
        -grad * x
    } else {
        grad * x
    }
}

/// 2D: eight directions of the form (±1, ±2) and (±2, ±1).
#[inline]
pub fn gradient2d(hash: i32, x: f64, y: f64) -> f64 {
    let h = hash & 7;
    let (u, v) = if h < 4 { (x, y) } else { (y, x) };
    let u = if h & 1 != 0 { -u } else { u };
    let v = if h & 2 != 0 { -2.0 * v } else { 2.0 * v };
    u + v
}

/// 3D: the twelve cube-edge midpoints, plus four repeats so the low four
/// bits can select directly.
#[inline]
pub fn gradient3d(hash: i32, x: f64, y: f64, z: f64) -> f64 {
    let h = hash & 15;
    let u = if h < 8 { x } else { y };
    let v = if h < 4 {
        y
    } else if h == 12 || h == 14 {
        x
    } else {
        z
    };
    let u = if h & 1 != 0 { -u } else { u };
    let v = if h & 2 != 0 { -v } else { v };
    u + v
}

/// 4D: the 32 edge midpoints of the tesseract, three nonzero components each.
#[inline]
pub fn gradient4d(hash: i32, x: f64, y: f64, z: f64, t: f64) -> f64 {
    let h = hash & 31;
    let u = if h < 24 { x } else { y };
    let v = if h < 16 { y } else { z };
    let w = if h < 8 { z } else { t };
    let u = if h & 1 != 0 { -u } else { u };
    let v = if h & 2 != 0 { -v } else { v };
    let w = if h & 4 != 0 { -w } else { w };
    u + v + w
}
