#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use std::f64::consts::PI;

use crate::constants::{EULER_GAMMA, TWO_LN2, ZETA2};
use crate::special::harmonic::harmonic_exact;
use crate::special::tables::{B2, GAMMAHALFINT, GAMMAINT};

/*
The Digamma Function
====================

ψ(x) is the logarithmic derivative of the gamma function, Γ'(x)/Γ(x). It is
smooth on the positive reals, has a pole at every nonpositive integer, and
behaves like ln(x) for large x.

Vocabulary
----------

  shift       Stepping the argument upward by one using the recurrence
              ψ(a) = ψ(a + 1) − 1/a. Each step costs one division and
              moves us closer to the region where the asymptotic series
              is accurate.

  tail        The truncated Bernoulli series that corrects the leading
              ln(a) − 1/(2a) term:

                  −1/(12a²) + 1/(120a⁴) − 1/(252a⁶) + 1/(240a⁸) − ...

              The series is asymptotic, not convergent: more terms only
              help once `a` is large enough.

  reflection  ψ(x) = ψ(1 − x) − π·cot(πx). Maps a negative argument onto a
              positive one at the price of a cotangent, which is badly
              conditioned near the poles.

  pole        A nonpositive integer. We return +∞ there. The true limit is
              signed by approach direction; the unsigned sentinel is a known
              simplification that callers rely on.


Evaluation Order
----------------

    x is NaN / ±∞            → passthrough
    x ∈ {0, −1, −2, ...}     → +∞
    x ≥ 1e8                  → ln(x) − 1/(2x)
    |x| ≤ tiny, x > 0        → −γ − 1/x + ζ(2)·x      (Laurent series)
    |x| ≤ tiny, x < 0        → reflect
    x ≤ −8                   → reflect
    otherwise                → shift to target, then tail

Between −8 and 0.5 we shift upward through the negative region instead of
reflecting. The shifts pass close to poles only when x itself is close to
one, in which case the 1/a term carries the exact singular behavior; the
cotangent on the other hand loses digits everywhere near an integer.


Accuracy Variants
-----------------

                   shift target   tail terms       typical abs error
    Standard            12             4                ~1e-13
    Fast                 6             1                ~1e-5
    Ultra              1.5      none, ln(a − ½)         ~1e-3 .. 4e-2
    HighPrecision    precision         6                ~1e-15

HighPrecision additionally answers integers and half-integers exactly from
harmonic-number tables, and uses a tighter 1e-6 window for the Laurent
series.
*/

/// Beyond this, ln(x) − 1/(2x) is exact to double precision.
const STIRLING_CUTOFF: f64 = 1e8;
/// Negative arguments at or below this reflect instead of shifting.
const REFLECT_AT_OR_BELOW: f64 = -8.0;
/// Inside this distance from an integer, π·cot(πx) uses its Laurent series.
const COT_SERIES_RADIUS: f64 = 1e-5;

/// Shift target used by [`digamma12`].
pub const DEFAULT_PRECISION: u32 = 12;
/// Largest shift target honored by [`Accuracy::HighPrecision`]. Keeps every
/// evaluation bounded-time.
pub const MAX_PRECISION: u32 = 32_768;

/// Accuracy/throughput tradeoff for the digamma kernel.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Accuracy {
    /// Shift to 12, four tail terms.
    #[default]
    Standard,
    /// Shift to 6, one tail term.
    Fast,
    /// Shift to 1.5, `ln(a − ½)` with no tail.
    Ultra,
    /// Shift to `precision`, six tail terms, exact integer/half-integer values.
    HighPrecision { precision: u32 },
}

/// How the shifted argument is finished off.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tail {
    /// `ln(a) − 1/(2a)` plus this many Bernoulli terms.
    Bernoulli(usize),
    /// `ln(a − ½)` alone.
    ShiftedLog,
}

/// Resolved kernel parameters for one [`Accuracy`].
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DigammaParams {
    pub shift_target: f64,
    pub tail: Tail,
    /// Half-width of the Laurent window around zero.
    pub tiny: f64,
}

impl Accuracy {
    /// The precision variant with the default shift target of 12.
    pub const fn high_precision() -> Self {
        Accuracy::HighPrecision {
            precision: DEFAULT_PRECISION,
        }
    }

    pub fn params(self) -> DigammaParams {
        match self {
            Accuracy::Standard => DigammaParams {
                shift_target: 12.0,
                tail: Tail::Bernoulli(4),
                tiny: 1e-5,
            },
            Accuracy::Fast => DigammaParams {
                shift_target: 6.0,
                tail: Tail::Bernoulli(1),
                tiny: 1e-5,
            },
            Accuracy::Ultra => DigammaParams {
                shift_target: 1.5,
                tail: Tail::ShiftedLog,
                tiny: 1e-5,
            },
            Accuracy::HighPrecision { precision } => DigammaParams {
                shift_target: clamp_precision(precision) as f64,
                tail: Tail::Bernoulli(6),
                tiny: 1e-6,
            },
        }
    }
}

#[inline]
fn clamp_precision(precision: u32) -> u32 {
    precision.clamp(1, MAX_PRECISION)
}

/// True for 0, −1, −2, ... (including −0.0).
#[inline]
pub(crate) fn is_nonpositive_integer(x: f64) -> bool {
    x <= 0.0 && x == x.round()
}

/// π·cot(πx), stable near the integers.
///
/// Within 1e-5 of an integer the Laurent expansion
/// `1/y − π²y/3 − π⁴y³/45` (with `y = x − round(x)`) replaces `tan`, which
/// would otherwise lose most of its digits.
pub fn pi_cot(x: f64) -> f64 {
    let y = x - x.round();
    if y.abs() < COT_SERIES_RADIUS {
        let pi2 = PI * PI;
        1.0 / y - pi2 * y / 3.0 - pi2 * pi2 * y * y * y / 45.0
    } else {
        PI / (PI * y).tan()
    }
}

/// Σ (−1)^(k+1)·B2[k−1]·inv2^k for k = 1..=terms, evaluated by Horner.
#[inline]
pub(crate) fn bernoulli_tail(inv2: f64, terms: usize) -> f64 {
    let terms = terms.min(B2.len());
    let mut acc = 0.0;
    for k in (0..terms).rev() {
        let coeff = if k % 2 == 0 { -B2[k] } else { B2[k] };
        acc = coeff + inv2 * acc;
    }
    acc * inv2
}

/// Shift `a` up to the target, then apply the asymptotic form.
#[inline]
fn shift_and_expand(mut a: f64, params: &DigammaParams) -> f64 {
    let mut acc = 0.0;
    while a < params.shift_target {
        acc -= 1.0 / a;
        a += 1.0;
    }

    match params.tail {
        Tail::ShiftedLog => acc + (a - 0.5).ln(),
        Tail::Bernoulli(terms) => {
            let inv = 1.0 / a;
            acc + a.ln() - 0.5 * inv + bernoulli_tail(inv * inv, terms)
        }
    }
}

/// ψ(x) = ψ(1 − x) − π·cot(πx), with ψ(1 − x) evaluated in place.
#[inline]
fn reflect(x: f64, params: &DigammaParams) -> f64 {
    shift_and_expand(1.0 - x, params) - pi_cot(x)
}

/// Table/harmonic shortcuts of the precision variant.
fn exact_value(x: f64, precision: u32) -> Option<f64> {
    if x <= 0.0 {
        return None;
    }
    let limit = precision as f64;

    // ψ(n) = H(n − 1) − γ
    if x.fract() == 0.0 && x < limit {
        let n = x as usize;
        let h = GAMMAINT
            .get(n - 1)
            .copied()
            .unwrap_or_else(|| harmonic_exact(n as u32 - 1));
        return Some(h - EULER_GAMMA);
    }

    // ψ(n + ½) = −γ − 2ln2 + 2(H(2n) − ½H(n))
    let n = x - 0.5;
    if n.fract() == 0.0 && x < (limit + 1.0) / 2.0 + 0.5 {
        let n = n as usize;
        let h = GAMMAHALFINT.get(n).copied().unwrap_or_else(|| {
            2.0 * harmonic_exact(2 * n as u32) - harmonic_exact(n as u32)
        });
        return Some(h - EULER_GAMMA - TWO_LN2);
    }

    None
}

/// ψ(x) at the requested accuracy.
///
/// Never panics. Non-finite input passes through unchanged and every
/// nonpositive integer maps to `+∞`.
///
/// # Example
/// ```
/// use kmath::special::digamma::{digamma_with, Accuracy};
/// let psi = digamma_with(1.0, Accuracy::Standard);
/// assert!((psi + 0.5772156649).abs() < 1e-9);
/// ```
pub fn digamma_with(x: f64, accuracy: Accuracy) -> f64 {
    if !x.is_finite() {
        return x;
    }
    if is_nonpositive_integer(x) {
        return f64::INFINITY;
    }
    if x >= STIRLING_CUTOFF {
        return x.ln() - 0.5 / x;
    }
    if let Accuracy::HighPrecision { precision } = accuracy {
        if let Some(exact) = exact_value(x, clamp_precision(precision)) {
            return exact;
        }
    }

    let params = accuracy.params();

    if x.abs() <= params.tiny {
        if x > 0.0 {
            return -EULER_GAMMA - 1.0 / x + ZETA2 * x;
        }
        return reflect(x, &params);
    }

    if x <= REFLECT_AT_OR_BELOW {
        return reflect(x, &params);
    }

    shift_and_expand(x, &params)
}

/// ψ(x), ~1e-13 absolute error.
///
/// # Example
/// ```
/// use kmath::digamma;
/// assert!((digamma(0.5) + 1.9635100260).abs() < 1e-9);
/// assert_eq!(digamma(-3.0), f64::INFINITY);
/// ```
#[inline]
pub fn digamma(x: f64) -> f64 {
    digamma_with(x, Accuracy::Standard)
}

/// ψ(x), ~1e-5 absolute error.
#[inline]
pub fn digamma_fast(x: f64) -> f64 {
    digamma_with(x, Accuracy::Fast)
}

/// ψ(x) as `ln(a − ½)` after a short shift. Coarse; for throughput-bound
/// callers only.
#[inline]
pub fn digamma_ultra(x: f64) -> f64 {
    digamma_with(x, Accuracy::Ultra)
}

/// High-precision ψ(x) with the default shift target of 12.
#[inline]
pub fn digamma12(x: f64) -> f64 {
    digamma_with(x, Accuracy::high_precision())
}

/// High-precision ψ(x) with a caller-chosen shift target.
///
/// `precision` is clamped to `1..=MAX_PRECISION`.
#[inline]
pub fn digamma_precise(x: f64, precision: u32) -> f64 {
    digamma_with(x, Accuracy::HighPrecision { precision })
}
