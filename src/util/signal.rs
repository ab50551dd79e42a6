//! Elementary signal shapes.

use std::f64::consts::PI;

/// Heaviside step with the half-maximum convention: ½ at zero.
#[inline]
pub fn unit_step(x: f64) -> f64 {
    if x > 0.0 {
        1.0
    } else if x == 0.0 {
        0.5
    } else {
        0.0
    }
}

/// `+∞` at zero, zero elsewhere.
#[inline]
pub fn dirac_delta(x: f64) -> f64 {
    if x == 0.0 {
        f64::INFINITY
    } else {
        0.0
    }
}

#[inline]
pub fn kronecker_delta<T: PartialEq>(i: T, j: T) -> f64 {
    if i == j {
        1.0
    } else {
        0.0
    }
}

/// Normalized sinc, sin(πx)/(πx), with sinc(0) = 1.
#[inline]
pub fn sinc(x: f64) -> f64 {
    if x == 0.0 {
        return 1.0;
    }
    let px = PI * x;
    px.sin() / px
}

/// Rising ramp `x − floor(x)`, period 1.
#[inline]
pub fn triangle(x: f64) -> f64 {
    x - x.floor()
}

/// Cantor function ("devil's staircase") on [0, 1].
///
/// Reads the ternary expansion of `x` digit by digit: each 0 or 2 becomes a
/// binary 0 or 1, and the first 1 ends the expansion.
pub fn cantor(x: f64) -> f64 {
    if x.is_nan() {
        return x;
    }
    if x <= 0.0 {
        return 0.0;
    }
    if x >= 1.0 {
        return 1.0;
    }

    let mut x = x;
    let mut value = 0.0;
    let mut weight = 0.5;
    loop {
        x *= 3.0;
        let digit = x.floor();
        x %= 1.0;
        if digit != 0.0 {
            value += weight;
        }
        weight /= 2.0;
        if digit == 1.0 || x == 0.0 || weight + value == value {
            break;
        }
    }
    value
}

/// The spacing between 1.0 and the next `f64`, found by halving.
pub fn machine_epsilon() -> f64 {
    let mut a = 1.0f64;
    let mut last = a;
    while 1.0 + a > 1.0 {
        last = a;
        a /= 2.0;
    }
    last
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unit_step() {
        assert_eq!(unit_step(-1.0), 0.0);
        assert_eq!(unit_step(0.0), 0.5);
        assert_eq!(unit_step(1e-300), 1.0);
    }

    #[test]
    fn test_deltas() {
        assert_eq!(dirac_delta(0.0), f64::INFINITY);
        assert_eq!(dirac_delta(0.1), 0.0);
        assert_eq!(kronecker_delta(3, 3), 1.0);
        assert_eq!(kronecker_delta('a', 'b'), 0.0);
    }

    #[test]
    fn test_sinc() {
        assert_eq!(sinc(0.0), 1.0);
        for n in 1..10 {
            assert!(sinc(n as f64).abs() < 1e-15);
        }
        assert!((sinc(0.5) - 2.0 / PI).abs() < 1e-15);
    }

    #[test]
    fn test_triangle_ramp() {
        assert_eq!(triangle(2.25), 0.25);
        assert_eq!(triangle(-0.25), 0.75);
    }

    #[test]
    fn test_cantor_values() {
        assert_eq!(cantor(0.0), 0.0);
        assert_eq!(cantor(1.0), 1.0);
        assert!((cantor(0.25) - 1.0 / 3.0).abs() < 1e-12);
        assert!((cantor(1.0 / 3.0) - 0.5).abs() < 1e-12);
        assert!((cantor(0.75) - 2.0 / 3.0).abs() < 1e-12);
        // Flat across the removed middle third
        assert_eq!(cantor(0.4), cantor(0.6));
    }

    #[test]
    fn test_cantor_is_monotone() {
        let mut last = 0.0;
        for i in 0..=1000 {
            let v = cantor(i as f64 / 1000.0);
            assert!(v >= last - 1e-9, "cantor decreased at {i}");
            last = v;
        }
    }

    #[test]
    fn test_machine_epsilon() {
        assert_eq!(machine_epsilon(), f64::EPSILON);
    }
}
