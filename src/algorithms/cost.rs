//! Cost functions for alignment algorithms
//!
//! Substitution costs score an aligned character pair, gap costs penalize a
//! run of characters aligned against nothing. Both declare their bounds so
//! the alignment metrics can normalize raw scores into `[0, 1]`.
//!
//! Higher is better: matches are rewarded with positive values, mismatches
//! and gaps are penalized with negative ones.

use crate::error::{check_gap, ConfigError};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Score for aligning `a[i]` with `b[j]`.
pub trait SubstitutionCost: Send + Sync + fmt::Debug {
    /// Cost of aligning `a[i]` against `b[j]`.
    ///
    /// Indices outside either slice yield 0.0 instead of panicking, so
    /// callers may read sentinel positions at the matrix edges.
    fn cost(&self, a: &[char], i: usize, b: &[char], j: usize) -> f64;

    fn min_cost(&self) -> f64;

    fn max_cost(&self) -> f64;
}

/// Penalty for a gap of a given length.
pub trait GapCost: Send + Sync + fmt::Debug {
    /// Penalty for the first position of a gap
    fn open_cost(&self) -> f64;

    /// Penalty for each further position of the same gap
    fn extend_cost(&self) -> f64;

    /// Total penalty of a gap spanning `length` positions
    fn cost(&self, length: usize) -> f64 {
        if length == 0 {
            return 0.0;
        }
        self.open_cost() + (length - 1) as f64 * self.extend_cost()
    }

    fn min_cost(&self) -> f64 {
        self.open_cost().min(self.extend_cost())
    }

    fn max_cost(&self) -> f64 {
        self.open_cost().max(self.extend_cost())
    }
}

/// Reject cost functions whose declared bounds cannot normalize a score.
pub(crate) fn check_substitution(cost: &dyn SubstitutionCost) -> Result<(), ConfigError> {
    let (lo, hi) = (cost.min_cost(), cost.max_cost());
    if !lo.is_finite() || !hi.is_finite() || lo > hi {
        return Err(ConfigError::InvalidCost(format!(
            "bounds must be finite with min <= max, got [{}, {}]",
            lo, hi
        )));
    }
    Ok(())
}

/// Local alignments normalize by `max_cost`, which must reward a match.
pub(crate) fn check_local_substitution(cost: &dyn SubstitutionCost) -> Result<(), ConfigError> {
    check_substitution(cost)?;
    if cost.max_cost() <= 0.0 {
        return Err(ConfigError::InvalidCost(format!(
            "local alignment needs a positive max cost, got {}",
            cost.max_cost()
        )));
    }
    Ok(())
}

/// Reject gap functions that reward gaps.
pub(crate) fn check_gap_cost(gap: &dyn GapCost) -> Result<(), ConfigError> {
    check_gap("open", gap.open_cost())?;
    check_gap("extend", gap.extend_cost())?;
    Ok(())
}

/// Fetch both characters, or `None` when either index is out of range.
#[inline]
fn pair_at(a: &[char], i: usize, b: &[char], j: usize) -> Option<(char, char)> {
    Some((*a.get(i)?, *b.get(j)?))
}

// ============================================================================
// Substitution costs
// ============================================================================

/// Fixed reward for equal characters, fixed penalty otherwise.
///
/// `MatchMismatch::new(1.0, -2.0)` is the classic "+1 / -2" scheme used by
/// Smith-Waterman.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MatchMismatch {
    pub match_value: f64,
    pub mismatch_value: f64,
}

impl MatchMismatch {
    pub fn new(match_value: f64, mismatch_value: f64) -> Result<Self, ConfigError> {
        Self::from_config(Self {
            match_value,
            mismatch_value,
        })
    }

    /// Validate a deserialized configuration
    pub fn from_config(config: MatchMismatch) -> Result<Self, ConfigError> {
        if !config.match_value.is_finite() || !config.mismatch_value.is_finite() {
            return Err(ConfigError::InvalidCost(format!(
                "match/mismatch values must be finite, got {}/{}",
                config.match_value, config.mismatch_value
            )));
        }
        if config.match_value < config.mismatch_value {
            return Err(ConfigError::InvalidCost(format!(
                "match value {} is lower than mismatch value {}",
                config.match_value, config.mismatch_value
            )));
        }
        Ok(config)
    }

    /// +1 for a match, -2 for a mismatch
    #[must_use]
    pub const fn plus_one_minus_two() -> Self {
        Self {
            match_value: 1.0,
            mismatch_value: -2.0,
        }
    }

    /// +1 for a match, -1 for a mismatch
    #[must_use]
    pub const fn plus_one_minus_one() -> Self {
        Self {
            match_value: 1.0,
            mismatch_value: -1.0,
        }
    }
}

impl SubstitutionCost for MatchMismatch {
    fn cost(&self, a: &[char], i: usize, b: &[char], j: usize) -> f64 {
        match pair_at(a, i, b, j) {
            Some((x, y)) if x == y => self.match_value,
            Some(_) => self.mismatch_value,
            None => 0.0,
        }
    }

    fn min_cost(&self) -> f64 {
        self.mismatch_value
    }

    fn max_cost(&self) -> f64 {
        self.match_value
    }
}

/// Character groups treated as near-misses by [`ApproximateMatch`].
const APPROXIMATE_GROUPS: [&[char]; 7] = [
    &['d', 't'],
    &['g', 'j'],
    &['l', 'r'],
    &['m', 'n'],
    &['b', 'p', 'v'],
    &['a', 'e', 'i', 'o', 'u'],
    &[',', '.'],
];

#[inline]
fn approximate_group(c: char) -> Option<usize> {
    let c = c.to_ascii_lowercase();
    APPROXIMATE_GROUPS.iter().position(|group| group.contains(&c))
}

/// +5 for an exact match, +3 for characters that commonly stand in for each
/// other (`d`/`t`, `m`/`n`, vowels, ...), -3 otherwise.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ApproximateMatch;

impl ApproximateMatch {
    const EXACT: f64 = 5.0;
    const APPROXIMATE: f64 = 3.0;
    const MISMATCH: f64 = -3.0;

    #[must_use]
    pub fn new() -> Self {
        Self
    }
}

impl SubstitutionCost for ApproximateMatch {
    fn cost(&self, a: &[char], i: usize, b: &[char], j: usize) -> f64 {
        let Some((x, y)) = pair_at(a, i, b, j) else {
            return 0.0;
        };
        if x == y {
            return Self::EXACT;
        }
        match (approximate_group(x), approximate_group(y)) {
            (Some(gx), Some(gy)) if gx == gy => Self::APPROXIMATE,
            _ => Self::MISMATCH,
        }
    }

    fn min_cost(&self) -> f64 {
        Self::MISMATCH
    }

    fn max_cost(&self) -> f64 {
        Self::EXACT
    }
}

// ============================================================================
// Gap costs
// ============================================================================

/// Same penalty for every gap position.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LinearGap {
    pub value: f64,
}

impl LinearGap {
    pub fn new(value: f64) -> Result<Self, ConfigError> {
        Ok(Self {
            value: check_gap("value", value)?,
        })
    }

    pub(crate) const fn unchecked(value: f64) -> Self {
        Self { value }
    }
}

impl GapCost for LinearGap {
    fn open_cost(&self) -> f64 {
        self.value
    }

    fn extend_cost(&self) -> f64 {
        self.value
    }

    fn cost(&self, length: usize) -> f64 {
        length as f64 * self.value
    }
}

/// Separate penalties for opening a gap and for extending it.
///
/// One long gap is cheaper than several short ones when
/// `extend > open` (both non-positive).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct AffineGap {
    pub open: f64,
    pub extend: f64,
}

impl AffineGap {
    pub fn new(open: f64, extend: f64) -> Result<Self, ConfigError> {
        Ok(Self {
            open: check_gap("open", open)?,
            extend: check_gap("extend", extend)?,
        })
    }

    /// Validate a deserialized configuration
    pub fn from_config(config: AffineGap) -> Result<Self, ConfigError> {
        Self::new(config.open, config.extend)
    }

    pub(crate) const fn unchecked(open: f64, extend: f64) -> Self {
        Self { open, extend }
    }
}

impl Default for AffineGap {
    fn default() -> Self {
        Self::unchecked(-5.0, -1.0)
    }
}

impl GapCost for AffineGap {
    fn open_cost(&self) -> f64 {
        self.open
    }

    fn extend_cost(&self) -> f64 {
        self.extend
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn chars(s: &str) -> Vec<char> {
        s.chars().collect()
    }

    #[test]
    fn test_match_mismatch_lookups() {
        let cost = MatchMismatch::new(1.0, -2.0).unwrap();
        let (a, b) = (chars("ab"), chars("ac"));
        assert_eq!(cost.cost(&a, 0, &b, 0), 1.0);
        assert_eq!(cost.cost(&a, 1, &b, 1), -2.0);
        assert_eq!(cost.cost(&a, 2, &b, 0), 0.0);
        assert_eq!(cost.cost(&a, 0, &b, 7), 0.0);
        assert_eq!(cost.cost(&[], 0, &[], 0), 0.0);
        assert_eq!(cost.min_cost(), -2.0);
        assert_eq!(cost.max_cost(), 1.0);
        assert_eq!(cost, MatchMismatch::plus_one_minus_two());
    }

    #[test]
    fn test_match_mismatch_validation() {
        assert!(MatchMismatch::new(-1.0, 1.0).is_err());
        assert!(MatchMismatch::new(f64::NAN, 0.0).is_err());
        assert!(MatchMismatch::new(0.0, 0.0).is_ok());
    }

    #[test]
    fn test_approximate_match() {
        let cost = ApproximateMatch::new();
        let (a, b) = (chars("dam"), chars("Ton"));
        assert_eq!(cost.cost(&a, 0, &b, 0), 3.0); // d ~ t
        assert_eq!(cost.cost(&a, 1, &b, 1), 3.0); // a ~ o
        assert_eq!(cost.cost(&a, 2, &b, 2), 3.0); // m ~ n
        assert_eq!(cost.cost(&a, 2, &a, 2), 5.0);
        assert_eq!(cost.cost(&a, 0, &chars("x"), 0), -3.0);
        assert_eq!(cost.cost(&a, 3, &b, 0), 0.0);
    }

    #[test]
    fn test_gap_costs() {
        let linear = LinearGap::new(-0.5).unwrap();
        assert_eq!(linear.cost(0), 0.0);
        assert_eq!(linear.cost(4), -2.0);

        let affine = AffineGap::new(-5.0, -1.0).unwrap();
        assert_eq!(affine.cost(0), 0.0);
        assert_eq!(affine.cost(1), -5.0);
        assert_eq!(affine.cost(3), -7.0);
        assert_eq!(affine.min_cost(), -5.0);
        assert_eq!(affine.max_cost(), -1.0);
        assert_eq!(affine, AffineGap::default());

        assert!(LinearGap::new(1.0).is_err());
        assert!(AffineGap::new(-1.0, 0.5).is_err());
    }
}
