//! Integer conversions, signs and bit-field helpers.

/// Truncate toward zero. Saturates outside the `i32` range; NaN gives 0.
#[inline]
pub fn int(x: f64) -> i32 {
    x as i32
}

/// Floor to `i32` via truncation, correct for negative inputs including
/// exact negative integers (`floor32(-1.0) == -1`).
///
/// # Example
/// ```
/// use kmath::util::floor32;
/// assert_eq!(floor32(2.7), 2);
/// assert_eq!(floor32(-2.3), -3);
/// assert_eq!(floor32(-2.0), -2);
/// ```
#[inline]
pub fn floor32(x: f64) -> i32 {
    let i = x as i32;
    if x < i as f64 {
        i.saturating_sub(1)
    } else {
        i
    }
}

/// −1, 0 or 1. NaN counts as 0.
#[inline]
pub fn sign(n: f64) -> i32 {
    if n > 0.0 {
        1
    } else if n < 0.0 {
        -1
    } else {
        0
    }
}

/// −1.0, 0.0 or 1.0, with NaN passed through.
#[inline]
pub fn sgn(x: f64) -> f64 {
    if x.is_nan() {
        x
    } else if x == 0.0 {
        0.0
    } else if x < 0.0 {
        -1.0
    } else {
        1.0
    }
}

/// Floored modulo: the result takes the sign of `y`.
#[inline]
pub fn modulo(x: f64, y: f64) -> f64 {
    x - (x / y).floor() * y
}

#[inline]
fn clamp_bits(bits: u32) -> u32 {
    bits.clamp(1, 31)
}

/// Value of the top bit of a `bits`-wide field, `1 << (bits − 1)`.
#[inline]
pub fn bit_divisor(bits: u32) -> u32 {
    1 << (clamp_bits(bits) - 1)
}

/// All-ones mask of `bits` width, `(1 << bits) − 1`.
#[inline]
pub fn bit_mask(bits: u32) -> u32 {
    (1 << clamp_bits(bits)) - 1
}

/// The low `bits` of `x`, scaled so the top bit of the field is 1.0.
///
/// `bits` is clamped to `1..=31`.
#[inline]
pub fn bit_shift(x: u32, bits: u32) -> f64 {
    (x & bit_mask(bits)) as f64 / bit_divisor(bits) as f64
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_int_truncates() {
        assert_eq!(int(2.9), 2);
        assert_eq!(int(-2.9), -2);
        assert_eq!(int(f64::NAN), 0);
        assert_eq!(int(1e20), i32::MAX);
    }

    #[test]
    fn test_floor32_matches_floor() {
        for i in -400..400 {
            let x = i as f64 * 0.25;
            assert_eq!(floor32(x), x.floor() as i32, "x = {x}");
        }
    }

    #[test]
    fn test_floor32_negative_integers() {
        assert_eq!(floor32(-1.0), -1);
        assert_eq!(floor32(-256.0), -256);
        assert_eq!(floor32(-0.0), 0);
    }

    #[test]
    fn test_floor32_saturates() {
        assert_eq!(floor32(-1e20), i32::MIN);
        assert_eq!(floor32(1e20), i32::MAX);
    }

    #[test]
    fn test_sign_and_sgn() {
        assert_eq!(sign(3.0), 1);
        assert_eq!(sign(-0.1), -1);
        assert_eq!(sign(0.0), 0);
        assert_eq!(sign(f64::NAN), 0);
        assert_eq!(sgn(-7.0), -1.0);
        assert_eq!(sgn(0.0), 0.0);
        assert!(sgn(f64::NAN).is_nan());
    }

    #[test]
    fn test_modulo_is_floored() {
        assert_eq!(modulo(7.0, 3.0), 1.0);
        assert_eq!(modulo(-7.0, 3.0), 2.0);
        assert_eq!(modulo(7.0, -3.0), -2.0);
    }

    #[test]
    fn test_bit_helpers() {
        assert_eq!(bit_divisor(8), 128);
        assert_eq!(bit_mask(8), 255);
        assert_eq!(bit_shift(0x1ff, 8), 255.0 / 128.0);
        assert_eq!(bit_shift(128, 8), 1.0);
        assert_eq!(bit_mask(31), i32::MAX as u32);
        // Out-of-range widths are clamped rather than overflowing
        assert_eq!(bit_mask(0), 1);
        assert_eq!(bit_mask(64), bit_mask(31));
    }
}
