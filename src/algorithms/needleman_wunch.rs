//! Needleman-Wunch global alignment
//!
//! Aligns both strings end to end with a configurable substitution cost and
//! a linear gap penalty. With `MatchMismatch(0, -1)` and a gap of -1 the raw
//! score is exactly the negated Levenshtein distance.

use super::cost::{check_gap_cost, check_substitution, LinearGap, MatchMismatch, SubstitutionCost};
use super::{normalize_score, to_chars, Metric};
use crate::error::ConfigError;
use smallvec::SmallVec;
use std::sync::Arc;

/// Global alignment similarity
///
/// The raw alignment score is mapped into `[0, 1]` using the lowest and
/// highest scores any alignment of the two lengths could reach under the
/// configured costs.
///
/// # Complexity
/// - Time: O(m*n)
/// - Space: O(n) (one DP row)
#[derive(Debug, Clone)]
pub struct NeedlemanWunch {
    gap: LinearGap,
    substitution: Arc<dyn SubstitutionCost>,
}

impl Default for NeedlemanWunch {
    fn default() -> Self {
        Self {
            gap: LinearGap::unchecked(-2.0),
            substitution: Arc::new(MatchMismatch::plus_one_minus_one()),
        }
    }
}

impl NeedlemanWunch {
    /// Gap -2, match +1, mismatch -1
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_costs(
        gap: LinearGap,
        substitution: impl SubstitutionCost + 'static,
    ) -> Result<Self, ConfigError> {
        check_gap_cost(&gap)?;
        check_substitution(&substitution)?;
        Ok(Self {
            gap,
            substitution: Arc::new(substitution),
        })
    }

    #[must_use]
    pub fn gap(&self) -> LinearGap {
        self.gap
    }

    /// Unnormalized alignment score (higher is better)
    #[must_use]
    pub fn alignment_score(&self, a: &str, b: &str) -> f64 {
        global_alignment(&to_chars(a), &to_chars(b), self.gap.value, &*self.substitution)
    }

    /// Attainable score range for inputs of `n` and `m` characters.
    ///
    /// An alignment with `k` substituted pairs has `n + m - 2k` gap positions,
    /// so its score is linear in `k` and extremes sit at `k = 0` or
    /// `k = min(n, m)`.
    fn score_range(&self, n: usize, m: usize) -> (f64, f64) {
        let gap = self.gap.value;
        let pairs = n.min(m) as f64;
        let total = (n + m) as f64;
        let gaps_only = total * gap;
        let rest = (total - 2.0 * pairs) * gap;

        let hi = (pairs * self.substitution.max_cost() + rest).max(gaps_only);
        let lo = (pairs * self.substitution.min_cost() + rest).min(gaps_only);
        (lo, hi)
    }
}

impl Metric for NeedlemanWunch {
    fn compare(&self, a: &str, b: &str) -> f64 {
        let a_chars = to_chars(a);
        let b_chars = to_chars(b);
        if a_chars.is_empty() && b_chars.is_empty() {
            return 1.0;
        }
        // Every alignment against nothing scores the same, so the range collapses
        if a_chars.is_empty() || b_chars.is_empty() {
            return 0.0;
        }
        let score = global_alignment(&a_chars, &b_chars, self.gap.value, &*self.substitution);
        let (lo, hi) = self.score_range(a_chars.len(), b_chars.len());
        normalize_score(score, lo, hi)
    }

    fn name(&self) -> &'static str {
        "needleman_wunch"
    }
}

/// Best global alignment score using a single DP row.
///
/// `row[j]` holds `d[i][j]`; the diagonal predecessor is carried in a local.
fn global_alignment(a: &[char], b: &[char], gap: f64, sub: &dyn SubstitutionCost) -> f64 {
    let m = b.len();
    let mut row: SmallVec<[f64; 64]> = (0..=m).map(|j| j as f64 * gap).collect();

    for i in 0..a.len() {
        let mut diagonal = row[0];
        row[0] = (i + 1) as f64 * gap;

        for j in 0..m {
            let substituted = diagonal + sub.cost(a, i, b, j);
            let deleted = row[j + 1] + gap;
            let inserted = row[j] + gap;

            diagonal = row[j + 1];
            row[j + 1] = substituted.max(deleted).max(inserted);
        }
    }

    row[m]
}
