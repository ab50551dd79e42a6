//! Fixed coefficient tables for the digamma family.
//!
//! All tables are `const` and shared by every call; nothing here is ever
//! written after compilation.

/// |B₂ₖ| / 2k for k = 1..=13, the magnitudes of the coefficients of the
/// asymptotic series
///
/// ```text
/// ψ(a) ~ ln a − 1/(2a) − Σ (−1)^(k+1) · B2[k−1] / a^(2k)
/// ```
///
/// The signs alternate starting with `−1/12`, so the series reads
/// `−1/(12a²) + 1/(120a⁴) − 1/(252a⁶) + ...`.
pub const B2: [f64; 13] = [
    1.0 / 12.0,
    1.0 / 120.0,
    1.0 / 252.0,
    1.0 / 240.0,
    1.0 / 132.0,
    691.0 / 32760.0,
    1.0 / 12.0,
    3617.0 / 8160.0,
    43867.0 / 14364.0,
    174611.0 / 6600.0,
    77683.0 / 276.0,
    236364091.0 / 65520.0,
    657931.0 / 12.0,
];

/// Numerators of H(n) = Σ_{k=1..n} 1/k in lowest terms, for n = 1..=29.
pub const HARMONIC_NUMERATORS: [u64; 29] = [
    1,
    3,
    11,
    25,
    137,
    49,
    363,
    761,
    7129,
    7381,
    83711,
    86021,
    1145993,
    1171733,
    1195757,
    2436559,
    42142223,
    14274301,
    275295799,
    55835135,
    18858053,
    19093197,
    444316699,
    1347822955,
    34052522467,
    34395742267,
    312536252003,
    315404588903,
    9227046511387,
];

/// Denominators matching [`HARMONIC_NUMERATORS`].
pub const HARMONIC_DENOMINATORS: [u64; 29] = [
    1,
    2,
    6,
    12,
    60,
    20,
    140,
    280,
    2520,
    2520,
    27720,
    27720,
    360360,
    360360,
    360360,
    720720,
    12252240,
    4084080,
    77597520,
    15519504,
    5173168,
    5173168,
    118982864,
    356948592,
    8923714800,
    8923714800,
    80313433200,
    80313433200,
    2329089562800,
];

/// `GAMMAINT[n - 1] = H(n − 1)`, so that ψ(n) = `GAMMAINT[n - 1]` − γ for
/// n = 1..=12.
pub const GAMMAINT: [f64; 12] = [
    0.0,
    1.0,
    3.0 / 2.0,
    11.0 / 6.0,
    25.0 / 12.0,
    137.0 / 60.0,
    49.0 / 20.0,
    363.0 / 140.0,
    761.0 / 280.0,
    7129.0 / 2520.0,
    7381.0 / 2520.0,
    83711.0 / 27720.0,
];

/// `GAMMAHALFINT[n] = 2·H(2n) − H(n)`, so that
/// ψ(n + ½) = `GAMMAHALFINT[n]` − γ − 2·ln 2 for n = 0..=11.
pub const GAMMAHALFINT: [f64; 12] = [
    0.0,
    2.0,
    8.0 / 3.0,
    46.0 / 15.0,
    352.0 / 105.0,
    1126.0 / 315.0,
    13016.0 / 3465.0,
    176138.0 / 45045.0,
    182144.0 / 45045.0,
    3186538.0 / 765765.0,
    62075752.0 / 14549535.0,
    63461422.0 / 14549535.0,
];

#[cfg(test)]
mod tests {
    use super::*;

    fn harmonic_sum(n: usize) -> f64 {
        (1..=n).map(|k| 1.0 / k as f64).sum()
    }

    #[test]
    fn test_harmonic_rationals_match_direct_sum() {
        for (i, (&num, &den)) in HARMONIC_NUMERATORS
            .iter()
            .zip(HARMONIC_DENOMINATORS.iter())
            .enumerate()
        {
            let n = i + 1;
            let rational = num as f64 / den as f64;
            assert!(
                (rational - harmonic_sum(n)).abs() < 1e-13,
                "H({n}) table mismatch: {rational} vs {}",
                harmonic_sum(n)
            );
        }
    }

    #[test]
    fn test_gammaint_is_shifted_harmonic() {
        for (i, &value) in GAMMAINT.iter().enumerate() {
            assert!((value - harmonic_sum(i)).abs() < 1e-14);
        }
    }

    #[test]
    fn test_gammahalfint_is_odd_reciprocal_sum() {
        for (n, &value) in GAMMAHALFINT.iter().enumerate() {
            // 2H(2n) - H(n) = Σ_{k=1..n} 2/(2k-1)
            let expected: f64 = (1..=n).map(|k| 2.0 / (2 * k - 1) as f64).sum();
            assert!(
                (value - expected).abs() < 1e-14,
                "GAMMAHALFINT[{n}] = {value}, expected {expected}"
            );
        }
    }

    #[test]
    fn test_bernoulli_ratios_leading_terms() {
        assert!((B2[0] - 0.083_333_333_333_333_33).abs() < 1e-17);
        assert!((B2[5] - 0.021_092_796_092_796_09).abs() < 1e-17);
        // Asymptotic, not convergent: the ratios grow from B2[2] onward
        assert!(B2.windows(2).skip(2).all(|w| w[1] > w[0]));
    }
}
