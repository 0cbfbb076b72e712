//! Levenshtein (edit) distance implementation
//!
//! Unit-cost insertions, deletions and substitutions, computed with a
//! single-row DP over Unicode scalar values.

use super::{to_chars, Metric};
use smallvec::SmallVec;

/// Levenshtein similarity calculator
///
/// Similarity is `1 - distance / max(len(a), len(b))`.
///
/// # Complexity
/// - Time: O(m*n) where m and n are string lengths
/// - Space: O(min(m,n)) using single-row DP optimization
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Levenshtein;

impl Levenshtein {
    #[must_use]
    pub fn new() -> Self {
        Self
    }

    /// Raw edit distance between `a` and `b`
    #[must_use]
    pub fn edit_distance(&self, a: &str, b: &str) -> usize {
        levenshtein(a, b)
    }
}

impl Metric for Levenshtein {
    fn compare(&self, a: &str, b: &str) -> f64 {
        levenshtein_similarity(a, b)
    }

    fn name(&self) -> &'static str {
        "levenshtein"
    }
}

/// Single-row DP distance for char slices.
///
/// The shorter slice runs along the row so the buffer stays small.
#[inline]
fn dp_distance(a: &[char], b: &[char]) -> usize {
    let (target, source) = if a.len() < b.len() { (a, b) } else { (b, a) };
    let n_target = target.len();

    // row[j] holds d[i][j]; d[0][j] = j
    let mut row: SmallVec<[usize; 64]> = (0..=n_target).collect();

    for (i, &sc) in source.iter().enumerate() {
        let mut diagonal = row[0];
        row[0] = i + 1;

        for (j, &tc) in target.iter().enumerate() {
            let substitution = diagonal + usize::from(sc != tc);
            let deletion = row[j + 1] + 1;
            let insertion = row[j] + 1;

            diagonal = row[j + 1];
            row[j + 1] = substitution.min(deletion).min(insertion);
        }
    }

    row[n_target]
}

/// Levenshtein distance between two strings
#[inline]
#[must_use]
pub fn levenshtein(a: &str, b: &str) -> usize {
    if a == b {
        return 0;
    }
    dp_distance(&to_chars(a), &to_chars(b))
}

/// Normalized Levenshtein similarity (0.0 to 1.0)
#[inline]
#[must_use]
pub fn levenshtein_similarity(a: &str, b: &str) -> f64 {
    if a == b {
        return 1.0;
    }
    let a_chars = to_chars(a);
    let b_chars = to_chars(b);
    let max_len = a_chars.len().max(b_chars.len());
    if max_len == 0 {
        return 1.0;
    }
    let dist = dp_distance(&a_chars, &b_chars);
    (1.0 - dist as f64 / max_len as f64).clamp(0.0, 1.0)
}
