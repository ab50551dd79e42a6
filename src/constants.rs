//! Shared numeric constants.
//!
//! Everything here is an `f64` so the special-function and noise kernels can
//! reuse the same values instead of re-deriving them inline.

use std::f64::consts;

/// 2π, one full cycle in radians.
pub const TAU: f64 = consts::TAU;
/// π/2
pub const HALF_PI: f64 = consts::FRAC_PI_2;
/// 1/π
pub const INV_PI: f64 = consts::FRAC_1_PI;
/// The golden ratio, (1 + √5)/2.
pub const PHI: f64 = 1.618_033_988_749_895;
/// Euler–Mascheroni constant γ = lim (H(n) − ln n).
pub const EULER_GAMMA: f64 = 0.577_215_664_901_532_9;
/// ζ(2) = π²/6
pub const ZETA2: f64 = 1.644_934_066_848_226_4;
/// ½·ln(2π), the constant term of Stirling's series for ln Γ.
pub const LOG_SQRT_2PI: f64 = 0.918_938_533_204_672_8;
/// √(2π)
pub const SQRT_2PI: f64 = 2.506_628_274_631_000_7;
/// √2
pub const SQRT_2: f64 = consts::SQRT_2;
/// 2·ln 2
pub const TWO_LN2: f64 = 1.386_294_361_119_890_6;
/// 1/√3
pub const INV_SQRT_3: f64 = 0.577_350_269_189_625_8;
/// Distance between 1.0 and the next representable `f64`.
pub const EPSILON: f64 = f64::EPSILON;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_derived_constants_agree_with_std() {
        assert!((ZETA2 - consts::PI * consts::PI / 6.0).abs() < 1e-15);
        assert!((LOG_SQRT_2PI - 0.5 * TAU.ln()).abs() < 1e-15);
        assert!((SQRT_2PI - TAU.sqrt()).abs() < 1e-15);
        assert!((TWO_LN2 - 2.0 * consts::LN_2).abs() < 1e-15);
        assert!((INV_SQRT_3 - 1.0 / 3.0_f64.sqrt()).abs() < 1e-15);
        assert!((PHI - (1.0 + 5.0_f64.sqrt()) / 2.0).abs() < 1e-15);
    }
}
