//! Smith-Waterman-Gotoh local alignment with affine gaps
//!
//! Gotoh's formulation keeps three state tables per cell:
//! - `H`: best score of an alignment ending at `(i, j)`
//! - `E`: best score ending in a gap in `a` (horizontal move)
//! - `F`: best score ending in a gap in `b` (vertical move)
//!
//! ```text
//! E[i][j] = max(H[i][j-1] + open, E[i][j-1] + extend)
//! F[i][j] = max(H[i-1][j] + open, F[i-1][j] + extend)
//! H[i][j] = max(0, H[i-1][j-1] + sub(i, j), E[i][j], F[i][j])
//! ```
//!
//! Only the previous row of `H` and `F` is needed, so both engines keep
//! rolling rows. The windowed engine additionally stores only the diagonal
//! band `|i - j| <= w` of each row.

use super::cost::{check_gap_cost, check_local_substitution, AffineGap, ApproximateMatch, GapCost, SubstitutionCost};
use super::{normalize_local, to_chars, Metric};
use crate::error::ConfigError;
use smallvec::SmallVec;
use std::sync::Arc;

/// Row storage for the DP tables
type Row = SmallVec<[f64; 64]>;

const UNREACHABLE: f64 = f64::NEG_INFINITY;

/// Shared configuration of the two Gotoh engines
#[derive(Debug, Clone)]
struct GotohCosts {
    gap: Arc<dyn GapCost>,
    substitution: Arc<dyn SubstitutionCost>,
}

impl Default for GotohCosts {
    fn default() -> Self {
        Self {
            gap: Arc::new(AffineGap::default()),
            substitution: Arc::new(ApproximateMatch::new()),
        }
    }
}

impl GotohCosts {
    fn new(
        gap: impl GapCost + 'static,
        substitution: impl SubstitutionCost + 'static,
    ) -> Result<Self, ConfigError> {
        check_gap_cost(&gap)?;
        check_local_substitution(&substitution)?;
        Ok(Self {
            gap: Arc::new(gap),
            substitution: Arc::new(substitution),
        })
    }

    fn normalize(&self, score: f64, a: &[char], b: &[char]) -> f64 {
        normalize_local(score, a.len(), b.len(), self.substitution.max_cost())
    }
}

// ============================================================================
// Full matrix
// ============================================================================

/// Local alignment similarity with affine gap penalties
///
/// One long gap costs `open + (k-1) * extend`, which is cheaper than `k`
/// separate one-character gaps. Passing a [`super::LinearGap`] reproduces
/// [`super::SmithWaterman`].
///
/// # Complexity
/// - Time: O(m*n)
/// - Space: O(n)
#[derive(Debug, Clone, Default)]
pub struct SmithWatermanGotoh {
    costs: GotohCosts,
}

impl SmithWatermanGotoh {
    /// Affine gap (open -5, extend -1) with [`ApproximateMatch`] costs
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_costs(
        gap: impl GapCost + 'static,
        substitution: impl SubstitutionCost + 'static,
    ) -> Result<Self, ConfigError> {
        Ok(Self {
            costs: GotohCosts::new(gap, substitution)?,
        })
    }

    /// Unnormalized best local alignment score (>= 0)
    #[must_use]
    pub fn alignment_score(&self, a: &str, b: &str) -> f64 {
        affine_local_alignment(&to_chars(a), &to_chars(b), &self.costs)
    }
}

impl Metric for SmithWatermanGotoh {
    fn compare(&self, a: &str, b: &str) -> f64 {
        let a_chars = to_chars(a);
        let b_chars = to_chars(b);
        let score = affine_local_alignment(&a_chars, &b_chars, &self.costs);
        self.costs.normalize(score, &a_chars, &b_chars)
    }

    fn name(&self) -> &'static str {
        "smith_waterman_gotoh"
    }
}

fn affine_local_alignment(a: &[char], b: &[char], costs: &GotohCosts) -> f64 {
    let open = costs.gap.open_cost();
    let extend = costs.gap.extend_cost();
    let sub = &*costs.substitution;
    let m = b.len();

    let mut h_prev: Row = smallvec::smallvec![0.0; m + 1];
    let mut f_prev: Row = smallvec::smallvec![UNREACHABLE; m + 1];
    let mut h_cur: Row = smallvec::smallvec![0.0; m + 1];
    let mut f_cur: Row = smallvec::smallvec![UNREACHABLE; m + 1];
    let mut best = 0.0f64;

    for i in 0..a.len() {
        h_cur[0] = 0.0;
        let mut e = UNREACHABLE;

        for j in 1..=m {
            e = (h_cur[j - 1] + open).max(e + extend);
            let f = (h_prev[j] + open).max(f_prev[j] + extend);
            let diagonal = h_prev[j - 1] + sub.cost(a, i, b, j - 1);

            let h = 0.0f64.max(diagonal).max(e).max(f);
            h_cur[j] = h;
            f_cur[j] = f;
            best = best.max(h);
        }

        std::mem::swap(&mut h_prev, &mut h_cur);
        std::mem::swap(&mut f_prev, &mut f_cur);
    }

    best
}

// ============================================================================
// Diagonal band
// ============================================================================

/// [`SmithWatermanGotoh`] restricted to a diagonal band.
///
/// Only cells with `|i - j| <= window` are evaluated; alignments that drift
/// further from the main diagonal are never found. Work drops to
/// O(n * window) at the cost of missing far off-diagonal alignments, and the
/// score never exceeds the unrestricted one. Once `window >= max(n, m)` the
/// two agree exactly.
///
/// There is no default window: it must be chosen by the caller.
#[derive(Debug, Clone)]
pub struct SmithWatermanGotohWindowedAffine {
    window: usize,
    costs: GotohCosts,
}

impl SmithWatermanGotohWindowedAffine {
    /// Default costs with the given band half-width
    pub fn new(window: usize) -> Result<Self, ConfigError> {
        Ok(Self {
            window: check_window(window)?,
            costs: GotohCosts::default(),
        })
    }

    pub fn with_costs(
        window: usize,
        gap: impl GapCost + 'static,
        substitution: impl SubstitutionCost + 'static,
    ) -> Result<Self, ConfigError> {
        Ok(Self {
            window: check_window(window)?,
            costs: GotohCosts::new(gap, substitution)?,
        })
    }

    #[must_use]
    pub fn window(&self) -> usize {
        self.window
    }

    /// Unnormalized best local alignment score inside the band (>= 0)
    #[must_use]
    pub fn alignment_score(&self, a: &str, b: &str) -> f64 {
        banded_affine_local_alignment(&to_chars(a), &to_chars(b), &self.costs, self.window)
    }
}

impl Metric for SmithWatermanGotohWindowedAffine {
    fn compare(&self, a: &str, b: &str) -> f64 {
        let a_chars = to_chars(a);
        let b_chars = to_chars(b);
        let score = banded_affine_local_alignment(&a_chars, &b_chars, &self.costs, self.window);
        self.costs.normalize(score, &a_chars, &b_chars)
    }

    fn name(&self) -> &'static str {
        "smith_waterman_gotoh_windowed_affine"
    }
}

fn check_window(window: usize) -> Result<usize, ConfigError> {
    if window == 0 {
        Err(ConfigError::InvalidWindow(window))
    } else {
        Ok(window)
    }
}

/// Banded Gotoh recurrence.
///
/// Row `i` (1-based) stores column `j` at offset `d = j + w - i`, so the
/// diagonal neighbour shares `d`, the cell above sits at `d + 1` and the
/// cell to the left at `d - 1`. The boundary row and column are zero;
/// in-matrix cells outside the band are unreachable.
fn banded_affine_local_alignment(a: &[char], b: &[char], costs: &GotohCosts, window: usize) -> f64 {
    let n = a.len();
    let m = b.len();
    if n == 0 || m == 0 {
        return 0.0;
    }

    let open = costs.gap.open_cost();
    let extend = costs.gap.extend_cost();
    let sub = &*costs.substitution;

    // A wider band than the matrix adds nothing
    let w = window.min(n.max(m));
    let width = 2 * w + 1;

    let mut h_prev: Row = smallvec::smallvec![UNREACHABLE; width];
    let mut f_prev: Row = smallvec::smallvec![UNREACHABLE; width];
    let mut h_cur: Row = smallvec::smallvec![UNREACHABLE; width];
    let mut f_cur: Row = smallvec::smallvec![UNREACHABLE; width];
    let mut best = 0.0f64;

    for i in 1..=n {
        h_cur.fill(UNREACHABLE);
        f_cur.fill(UNREACHABLE);

        let j_lo = i.saturating_sub(w).max(1);
        let j_hi = (i + w).min(m);
        if j_lo > j_hi {
            // Band has left the matrix; later rows only drift further
            break;
        }

        // Left neighbour of the first cell: boundary column or outside the band
        let mut h_left = if j_lo == 1 { 0.0 } else { UNREACHABLE };
        let mut e = UNREACHABLE;

        for j in j_lo..=j_hi {
            let d = j + w - i;

            let (h_up, f_up) = if i == 1 {
                (0.0, UNREACHABLE)
            } else if d + 1 < width {
                (h_prev[d + 1], f_prev[d + 1])
            } else {
                (UNREACHABLE, UNREACHABLE)
            };
            let h_diag = if i == 1 || j == 1 { 0.0 } else { h_prev[d] };

            e = (h_left + open).max(e + extend);
            let f = (h_up + open).max(f_up + extend);
            let diagonal = h_diag + sub.cost(a, i - 1, b, j - 1);

            let h = 0.0f64.max(diagonal).max(e).max(f);
            h_cur[d] = h;
            f_cur[d] = f;
            h_left = h;
            best = best.max(h);
        }

        std::mem::swap(&mut h_prev, &mut h_cur);
        std::mem::swap(&mut f_prev, &mut f_cur);
    }

    best
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::algorithms::{LinearGap, MatchMismatch, SmithWaterman};

    fn approx_eq(a: f64, b: f64) -> bool {
        (a - b).abs() < 1e-9
    }

    const PAIRS: [(&str, &str); 7] = [
        ("kitten", "sitting"),
        ("Sam J Chapman", "Samuel John Chapman"),
        ("abcdefghij", "xxxxxabcdefghij"),
        ("GATTACA", "GCATGCU"),
        ("a", "b"),
        ("", "abc"),
        ("test", "test"),
    ];

    #[test]
    fn test_default_scores() {
        let swg = SmithWatermanGotoh::new();
        assert!(approx_eq(swg.alignment_score("abc", "abc"), 15.0));
        assert!(approx_eq(swg.alignment_score("dog", "tog"), 13.0));
        assert_eq!(swg.compare("", ""), 1.0);
        assert_eq!(swg.compare("abc", ""), 0.0);
        assert_eq!(swg.compare("test", "test"), 1.0);
        assert_eq!(swg.compare("Chapman", "Sam Chapman"), 1.0);
    }

    #[test]
    fn test_affine_prefers_one_long_gap() {
        let swg = SmithWatermanGotoh::with_costs(
            AffineGap::new(-2.0, -0.5).unwrap(),
            MatchMismatch::new(2.0, -2.0).unwrap(),
        )
        .unwrap();
        // 8 matches, one 3-char gap: 16 - 2 - 0.5 - 0.5
        assert!(approx_eq(swg.alignment_score("abcdefgh", "abcdxxxefgh"), 13.0));
        // same 3 inserted characters split into three gaps cost more
        assert!(swg.alignment_score("abcdefgh", "abxcdxefxgh") < 13.0);
    }

    #[test]
    fn test_linear_gap_matches_smith_waterman() {
        let sw = SmithWaterman::new();
        let swg = SmithWatermanGotoh::with_costs(
            LinearGap::new(-0.5).unwrap(),
            MatchMismatch::plus_one_minus_two(),
        )
        .unwrap();
        for (a, b) in PAIRS {
            assert!(approx_eq(sw.compare(a, b), swg.compare(a, b)), "{a} vs {b}");
        }
    }

    #[test]
    fn test_symmetry() {
        let swg = SmithWatermanGotoh::new();
        let windowed = SmithWatermanGotohWindowedAffine::new(3).unwrap();
        for (a, b) in PAIRS {
            assert_eq!(swg.compare(a, b), swg.compare(b, a));
            assert_eq!(windowed.compare(a, b), windowed.compare(b, a));
        }
    }

    #[test]
    fn test_window_validation() {
        assert_eq!(
            SmithWatermanGotohWindowedAffine::new(0).unwrap_err(),
            ConfigError::InvalidWindow(0)
        );
        assert_eq!(SmithWatermanGotohWindowedAffine::new(5).unwrap().window(), 5);
    }

    #[test]
    fn test_window_converges_to_full() {
        let full = SmithWatermanGotoh::new();
        for (a, b) in PAIRS {
            let limit = a.chars().count().max(b.chars().count()).max(1);
            let mut previous = 0.0;
            for w in 1..=limit + 2 {
                let windowed = SmithWatermanGotohWindowedAffine::new(w).unwrap();
                let score = windowed.alignment_score(a, b);
                assert!(score >= previous, "{a} vs {b}: w={w} dropped");
                assert!(score <= full.alignment_score(a, b));
                previous = score;
            }
            assert_eq!(previous, full.alignment_score(a, b), "{a} vs {b}");
        }
    }

    #[test]
    fn test_narrow_window_misses_offset_alignment() {
        let full = SmithWatermanGotoh::new();
        let narrow = SmithWatermanGotohWindowedAffine::new(1).unwrap();
        let (a, b) = ("abcdefghij", "xxxxxabcdefghij");
        assert_eq!(full.compare(a, b), 1.0);
        assert!(narrow.compare(a, b) < 1.0);
    }

    #[test]
    fn test_huge_window() {
        let windowed = SmithWatermanGotohWindowedAffine::new(usize::MAX).unwrap();
        assert_eq!(windowed.compare("abc", "abc"), 1.0);
    }

    #[test]
    fn test_rejects_costs_without_positive_match() {
        let zero_match = MatchMismatch::new(0.0, -1.0).unwrap();
        assert!(matches!(
            SmithWatermanGotoh::with_costs(AffineGap::default(), zero_match),
            Err(ConfigError::InvalidCost(_))
        ));
        assert!(matches!(
            SmithWatermanGotohWindowedAffine::with_costs(4, AffineGap::default(), zero_match),
            Err(ConfigError::InvalidCost(_))
        ));
    }
}
