//! Integer-sequence lookup.
//!
//! Fetching sequences from an online encyclopedia is left to the host: this
//! module only defines the [`SequenceSource`] seam, the parser for the
//! comma-separated `data` field such services return, and an in-memory
//! source for tests and offline use.

use std::collections::HashMap;

use crate::special::tables::{HARMONIC_DENOMINATORS, HARMONIC_NUMERATORS};

/// OEIS id of the harmonic-number numerators.
pub const HARMONIC_NUMERATORS_ID: &str = "A001008";
/// OEIS id of the harmonic-number denominators.
pub const HARMONIC_DENOMINATORS_ID: &str = "A002805";

/// Something that can resolve a sequence id to its terms.
pub trait SequenceSource {
    /// `Ok(None)` when the id is unknown.
    fn sequence_by_id(&self, id: &str) -> Result<Option<Vec<i64>>, SequenceError>;
}

/// In-memory [`SequenceSource`] holding raw comma-separated data per id.
#[derive(Debug, Clone, Default)]
pub struct StaticSequences {
    entries: HashMap<String, String>,
}

impl StaticSequences {
    pub fn new() -> Self {
        Self::default()
    }

    /// Preloaded with the harmonic-number numerators and denominators.
    pub fn harmonic() -> Self {
        let join = |terms: &[u64]| {
            terms
                .iter()
                .map(|t| t.to_string())
                .collect::<Vec<_>>()
                .join(",")
        };
        Self::new()
            .with_sequence(HARMONIC_NUMERATORS_ID, join(&HARMONIC_NUMERATORS[..]))
            .with_sequence(HARMONIC_DENOMINATORS_ID, join(&HARMONIC_DENOMINATORS[..]))
    }

    /// Register (or replace) the data for `id`.
    pub fn with_sequence(mut self, id: &str, data: impl Into<String>) -> Self {
        self.entries.insert(normalize_id(id), data.into());
        self
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl SequenceSource for StaticSequences {
    fn sequence_by_id(&self, id: &str) -> Result<Option<Vec<i64>>, SequenceError> {
        match self.entries.get(&normalize_id(id)) {
            Some(data) => parse_sequence_data(data).map(Some),
            None => Ok(None),
        }
    }
}

// Ids are matched case-insensitively: "a001008" == "A001008"
fn normalize_id(id: &str) -> String {
    id.trim().to_ascii_uppercase()
}

/// Parse a comma-separated list of integers such as `"1, 3, 11, 25"`.
///
/// # Example
/// ```
/// use kmath::sequence::parse_sequence_data;
/// assert_eq!(parse_sequence_data("1,3, 11").unwrap(), vec![1, 3, 11]);
/// ```
pub fn parse_sequence_data(data: &str) -> Result<Vec<i64>, SequenceError> {
    if data.trim().is_empty() {
        return Err(SequenceError::Empty);
    }
    data.split(',')
        .enumerate()
        .map(|(index, term)| {
            let term = term.trim();
            term.parse::<i64>()
                .map_err(|_| SequenceError::InvalidTerm {
                    index,
                    term: term.to_string(),
                })
        })
        .collect()
}

/// Pairwise `denominators[i] / numerators[i]`.
///
/// Stops at the shorter of the two slices.
pub fn ratios(numerators: &[i64], denominators: &[i64]) -> Vec<f64> {
    numerators
        .iter()
        .zip(denominators.iter())
        .map(|(&n, &d)| d as f64 / n as f64)
        .collect()
}

/// Errors produced while reading sequence data.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SequenceError {
    /// A term that is not a valid signed 64-bit integer
    InvalidTerm { index: usize, term: String },
    /// The data field contained no terms
    Empty,
}

impl std::fmt::Display for SequenceError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SequenceError::InvalidTerm { index, term } => {
                write!(f, "Invalid sequence term at position {}: {:?}", index, term)
            }
            SequenceError::Empty => write!(f, "Sequence data is empty"),
        }
    }
}

impl std::error::Error for SequenceError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_sequence_data() {
        assert_eq!(
            parse_sequence_data("1, 3, 11, 25, 137").unwrap(),
            vec![1, 3, 11, 25, 137]
        );
        assert_eq!(parse_sequence_data("-4,0,4").unwrap(), vec![-4, 0, 4]);
    }

    #[test]
    fn test_parse_invalid_term() {
        let result = parse_sequence_data("1, 2, x3, 4");
        assert_eq!(
            result,
            Err(SequenceError::InvalidTerm {
                index: 2,
                term: "x3".to_string()
            })
        );
        assert!(matches!(
            parse_sequence_data("1,,2"),
            Err(SequenceError::InvalidTerm { index: 1, .. })
        ));
    }

    #[test]
    fn test_parse_empty() {
        assert_eq!(parse_sequence_data(""), Err(SequenceError::Empty));
        assert_eq!(parse_sequence_data("   "), Err(SequenceError::Empty));
    }

    #[test]
    fn test_static_lookup() {
        let source = StaticSequences::new().with_sequence("A000045", "0,1,1,2,3,5,8");
        assert_eq!(
            source.sequence_by_id("a000045").unwrap(),
            Some(vec![0, 1, 1, 2, 3, 5, 8])
        );
        assert_eq!(source.sequence_by_id("A999999").unwrap(), None);
        assert_eq!(source.len(), 1);
    }

    #[test]
    fn test_static_lookup_propagates_parse_errors() {
        let source = StaticSequences::new().with_sequence("A1", "1,two");
        assert!(matches!(
            source.sequence_by_id("A1"),
            Err(SequenceError::InvalidTerm { index: 1, .. })
        ));
    }

    #[test]
    fn test_harmonic_ratios_invert_tables() {
        let source = StaticSequences::harmonic();
        let num = source.sequence_by_id(HARMONIC_NUMERATORS_ID).unwrap().unwrap();
        let den = source.sequence_by_id(HARMONIC_DENOMINATORS_ID).unwrap().unwrap();
        let inverse = ratios(&num, &den);
        assert_eq!(inverse.len(), 29);
        // den/num = 1/H(n)
        let mut h = 0.0;
        for (n, r) in inverse.iter().enumerate() {
            h += 1.0 / (n + 1) as f64;
            assert!((r * h - 1.0).abs() < 1e-13, "n = {}", n + 1);
        }
    }

    #[test]
    fn test_ratios_truncates_to_shorter() {
        assert_eq!(ratios(&[1, 2, 4], &[3, 3]), vec![3.0, 1.5]);
    }

    #[test]
    fn test_error_display() {
        let err = SequenceError::InvalidTerm {
            index: 3,
            term: "abc".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "Invalid sequence term at position 3: \"abc\""
        );
        assert_eq!(SequenceError::Empty.to_string(), "Sequence data is empty");
    }
}
