//! Core string metrics
//!
//! Every algorithm implements [`Metric`] (string pairs) or [`TokenMetric`]
//! (token sequences). Scores are always bounded, so metrics can be swapped
//! freely inside a pipeline.

pub mod cost;
pub mod gotoh;
pub mod jaro;
pub mod levenshtein;
pub mod monge_elkan;
pub mod needleman_wunch;
pub mod overlap;
pub mod smith_waterman;

pub use cost::*;
pub use gotoh::*;
pub use jaro::*;
pub use levenshtein::*;
pub use monge_elkan::*;
pub use needleman_wunch::*;
pub use overlap::*;
pub use smith_waterman::*;

use std::fmt;

/// Trait for all string metrics.
///
/// `compare` returns a value within `[min_score(), max_score()]` for every
/// pair of inputs, including empty strings. Implementations hold no mutable
/// state, so one instance may be shared across threads.
pub trait Metric: Send + Sync + fmt::Debug {
    fn compare(&self, a: &str, b: &str) -> f64;

    /// Lowest score `compare` can return
    fn min_score(&self) -> f64 {
        0.0
    }

    /// Highest score `compare` can return (identical inputs)
    fn max_score(&self) -> f64 {
        1.0
    }

    /// Convenience method for distance (max - score)
    fn distance(&self, a: &str, b: &str) -> f64 {
        self.max_score() - self.compare(a, b)
    }

    /// Name of the algorithm for debugging/logging
    fn name(&self) -> &'static str;
}

/// Trait for metrics over token sequences produced by a tokenizer.
///
/// Returns a value between 0.0 (nothing shared) and 1.0 (identical).
pub trait TokenMetric: Send + Sync + fmt::Debug {
    fn compare_tokens(&self, a: &[String], b: &[String]) -> f64;

    fn name(&self) -> &'static str;
}

/// Collect a string into chars, inline for typical lengths.
#[inline]
pub(crate) fn to_chars(s: &str) -> smallvec::SmallVec<[char; 64]> {
    s.chars().collect()
}

/// Map a raw score into `[0, 1]` given its attainable range.
///
/// A degenerate range means every alignment scores the same, which only
/// happens when there is nothing to tell the inputs apart.
#[inline]
pub(crate) fn normalize_score(score: f64, lo: f64, hi: f64) -> f64 {
    if hi - lo <= 0.0 {
        return 1.0;
    }
    ((score - lo) / (hi - lo)).clamp(0.0, 1.0)
}

/// Normalize a local alignment score by the best score a pair of
/// `len_a`/`len_b` characters can reach.
#[inline]
pub(crate) fn normalize_local(score: f64, len_a: usize, len_b: usize, max_cost: f64) -> f64 {
    if len_a == 0 && len_b == 0 {
        return 1.0;
    }
    let best = len_a.min(len_b) as f64 * max_cost;
    if best <= 0.0 {
        return 0.0;
    }
    (score / best).clamp(0.0, 1.0)
}
