//! Smith-Waterman local alignment
//!
//! Finds the best-scoring pair of substrings instead of aligning the inputs
//! end to end: every cell is clamped at zero and the result is the best cell
//! anywhere in the matrix.

use super::cost::{check_gap_cost, check_local_substitution, LinearGap, MatchMismatch, SubstitutionCost};
use super::{normalize_local, to_chars, Metric};
use crate::error::ConfigError;
use smallvec::SmallVec;
use std::sync::Arc;

/// Local alignment similarity with a linear gap penalty
///
/// Normalized by the best score the shorter input could reach, so a string
/// contained in the other scores 1.0.
///
/// # Complexity
/// - Time: O(m*n)
/// - Space: O(n)
#[derive(Debug, Clone)]
pub struct SmithWaterman {
    gap: LinearGap,
    substitution: Arc<dyn SubstitutionCost>,
}

impl Default for SmithWaterman {
    fn default() -> Self {
        Self {
            gap: LinearGap::unchecked(-0.5),
            substitution: Arc::new(MatchMismatch::plus_one_minus_two()),
        }
    }
}

impl SmithWaterman {
    /// Gap -0.5, match +1, mismatch -2
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_costs(
        gap: LinearGap,
        substitution: impl SubstitutionCost + 'static,
    ) -> Result<Self, ConfigError> {
        check_gap_cost(&gap)?;
        check_local_substitution(&substitution)?;
        Ok(Self {
            gap,
            substitution: Arc::new(substitution),
        })
    }

    #[must_use]
    pub fn gap(&self) -> LinearGap {
        self.gap
    }

    /// Unnormalized best local alignment score (>= 0)
    #[must_use]
    pub fn alignment_score(&self, a: &str, b: &str) -> f64 {
        local_alignment(&to_chars(a), &to_chars(b), self.gap.value, &*self.substitution)
    }
}

impl Metric for SmithWaterman {
    fn compare(&self, a: &str, b: &str) -> f64 {
        let a_chars = to_chars(a);
        let b_chars = to_chars(b);
        let score = local_alignment(&a_chars, &b_chars, self.gap.value, &*self.substitution);
        normalize_local(score, a_chars.len(), b_chars.len(), self.substitution.max_cost())
    }

    fn name(&self) -> &'static str {
        "smith_waterman"
    }
}

fn local_alignment(a: &[char], b: &[char], gap: f64, sub: &dyn SubstitutionCost) -> f64 {
    let m = b.len();
    // Boundary row and column are all zero
    let mut row: SmallVec<[f64; 64]> = smallvec::smallvec![0.0; m + 1];
    let mut best = 0.0f64;

    for i in 0..a.len() {
        let mut diagonal = 0.0;
        row[0] = 0.0;

        for j in 0..m {
            let substituted = diagonal + sub.cost(a, i, b, j);
            let deleted = row[j + 1] + gap;
            let inserted = row[j] + gap;

            diagonal = row[j + 1];
            let cell = 0.0f64.max(substituted).max(deleted).max(inserted);
            row[j + 1] = cell;
            best = best.max(cell);
        }
    }

    best
}

#[cfg(test)]
mod tests {
    use super::*;

    fn approx_eq(a: f64, b: f64) -> bool {
        (a - b).abs() < 1e-9
    }

    #[test]
    fn test_local_scores() {
        let sw = SmithWaterman::new();
        assert!(approx_eq(sw.alignment_score("abc", "abc"), 3.0));
        assert!(approx_eq(sw.alignment_score("xxabcxx", "abc"), 3.0));
        assert!(approx_eq(sw.alignment_score("abc", "xyz"), 0.0));
        // "abcd" vs "abxcd": 4 matches and one gap
        assert!(approx_eq(sw.alignment_score("abcd", "abxcd"), 3.5));
    }

    #[test]
    fn test_similarity() {
        let sw = SmithWaterman::new();
        assert_eq!(sw.compare("", ""), 1.0);
        assert_eq!(sw.compare("abc", ""), 0.0);
        assert_eq!(sw.compare("abc", "abc"), 1.0);
        // Contained substring is a perfect local match
        assert_eq!(sw.compare("Sam J Chapman", "Chapman"), 1.0);
        assert_eq!(sw.compare("abc", "xyz"), 0.0);
        assert!(approx_eq(sw.compare("abcd", "abxcd"), 3.5 / 4.0));
    }

    #[test]
    fn test_symmetry() {
        let sw = SmithWaterman::new();
        for (a, b) in [("kitten", "sitting"), ("abcd", "abxcd"), ("a", "aaaa")] {
            assert_eq!(sw.compare(a, b), sw.compare(b, a));
        }
    }

    #[test]
    fn test_rejects_costs_without_positive_match() {
        let gap = LinearGap::new(-0.5).unwrap();
        let err = SmithWaterman::with_costs(gap, MatchMismatch::new(0.0, -1.0).unwrap()).unwrap_err();
        assert!(matches!(err, ConfigError::InvalidCost(_)));

        let sw = SmithWaterman::with_costs(gap, MatchMismatch::new(0.5, -1.0).unwrap()).unwrap();
        assert_eq!(sw.compare("abc", "abc"), 1.0);
    }
}
