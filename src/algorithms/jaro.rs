//! Jaro and Jaro-Winkler similarity implementations
//!
//! Excellent for name matching and short strings.
//! Jaro-Winkler gives extra weight to common prefixes.
//!
//! Greedy matching is order-sensitive, so both functions put the pair in a
//! canonical order first. `jaro(a, b)` and `jaro(b, a)` are bit-identical.

use super::{to_chars, Metric};
use crate::error::ConfigError;
use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

// ============================================================================
// Public API
// ============================================================================

/// Jaro similarity calculator
///
/// # Complexity
/// - Time: O(m*n) for matching characters
/// - Space: O(m+n) for match flags
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Jaro;

impl Jaro {
    #[must_use]
    pub fn new() -> Self {
        Self
    }
}

impl Metric for Jaro {
    fn compare(&self, a: &str, b: &str) -> f64 {
        jaro_similarity(a, b)
    }

    fn name(&self) -> &'static str {
        "jaro"
    }
}

/// Configuration for Jaro-Winkler similarity
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct JaroWinklerConfig {
    /// Jaro score the pair must exceed before the prefix bonus applies
    pub boost_threshold: f64,
    /// Bonus per shared prefix character (typically 0.1)
    pub prefix_scale: f64,
    /// Maximum prefix length to consider (typically 4)
    pub max_prefix_length: usize,
}

impl Default for JaroWinklerConfig {
    fn default() -> Self {
        Self {
            boost_threshold: 0.7,
            prefix_scale: 0.1,
            max_prefix_length: 4,
        }
    }
}

/// Jaro-Winkler similarity calculator
///
/// Extends Jaro similarity by giving extra weight to common prefixes.
/// Best for names and short identifiers.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct JaroWinkler {
    config: JaroWinklerConfig,
}

impl Default for JaroWinkler {
    fn default() -> Self {
        Self {
            config: JaroWinklerConfig::default(),
        }
    }
}

impl JaroWinkler {
    /// Threshold 0.7, prefix scale 0.1, prefix length 4
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create from configuration.
    ///
    /// `prefix_scale * max_prefix_length` may not exceed 1.0, otherwise the
    /// bonus could push scores above 1.0.
    pub fn from_config(config: JaroWinklerConfig) -> Result<Self, ConfigError> {
        if !(0.0..=1.0).contains(&config.boost_threshold) {
            return Err(ConfigError::InvalidParameter {
                name: "boost_threshold",
                reason: format!("must be in range [0.0, 1.0], got {}", config.boost_threshold),
            });
        }
        let max_bonus = config.prefix_scale * config.max_prefix_length as f64;
        if !config.prefix_scale.is_finite() || config.prefix_scale < 0.0 || max_bonus > 1.0 {
            return Err(ConfigError::InvalidParameter {
                name: "prefix_scale",
                reason: format!(
                    "must be >= 0 with prefix_scale * max_prefix_length <= 1.0, got {} * {}",
                    config.prefix_scale, config.max_prefix_length
                ),
            });
        }
        Ok(Self { config })
    }

    /// Get current configuration
    #[must_use]
    pub fn config(&self) -> JaroWinklerConfig {
        self.config
    }
}

impl Metric for JaroWinkler {
    fn compare(&self, a: &str, b: &str) -> f64 {
        jaro_winkler_similarity_with(a, b, &self.config)
    }

    fn name(&self) -> &'static str {
        "jaro_winkler"
    }
}

/// Calculate Jaro similarity between two strings.
/// Returns a value between 0.0 and 1.0.
#[inline]
#[must_use]
pub fn jaro_similarity(a: &str, b: &str) -> f64 {
    if a == b {
        return 1.0;
    }

    let a_chars = to_chars(a);
    let b_chars = to_chars(b);

    if a_chars.is_empty() || b_chars.is_empty() {
        return 0.0;
    }

    // Shorter (then lexicographically smaller) string drives the matching
    let (first, second) = if (a_chars.len(), &a_chars[..]) <= (b_chars.len(), &b_chars[..]) {
        (&a_chars[..], &b_chars[..])
    } else {
        (&b_chars[..], &a_chars[..])
    };

    jaro_standard(first, second)
}

/// Standard Jaro algorithm over any comparable slice type
fn jaro_standard<T: PartialEq>(a: &[T], b: &[T]) -> f64 {
    let a_len = a.len();
    let b_len = b.len();

    // Match window
    let match_distance = (a_len.max(b_len) / 2).saturating_sub(1);

    let mut a_matches: SmallVec<[bool; 64]> = smallvec::smallvec![false; a_len];
    let mut b_matches: SmallVec<[bool; 64]> = smallvec::smallvec![false; b_len];

    let mut matches = 0usize;

    // Find matches
    for i in 0..a_len {
        let start = i.saturating_sub(match_distance);
        let end = (i + match_distance + 1).min(b_len);

        for j in start..end {
            if b_matches[j] || a[i] != b[j] {
                continue;
            }
            a_matches[i] = true;
            b_matches[j] = true;
            matches += 1;
            break;
        }
    }

    if matches == 0 {
        return 0.0;
    }

    // Count matched characters that appear in a different order
    let b_matched = b.iter().zip(b_matches.iter()).filter(|(_, &m)| m).map(|(c, _)| c);
    let out_of_order = a
        .iter()
        .zip(a_matches.iter())
        .filter(|(_, &m)| m)
        .map(|(c, _)| c)
        .zip(b_matched)
        .filter(|(x, y)| x != y)
        .count();

    let m = matches as f64;
    let t = out_of_order as f64 / 2.0;

    (m / a_len as f64 + m / b_len as f64 + (m - t) / m) / 3.0
}

/// Jaro-Winkler similarity with an explicit configuration.
///
/// The prefix bonus `prefix_len * prefix_scale * (1 - jaro)` is added only
/// when the Jaro score exceeds `boost_threshold`.
#[must_use]
pub fn jaro_winkler_similarity_with(a: &str, b: &str, config: &JaroWinklerConfig) -> f64 {
    let jaro_sim = jaro_similarity(a, b);

    if jaro_sim <= config.boost_threshold {
        return jaro_sim;
    }

    let prefix_len = a
        .chars()
        .zip(b.chars())
        .take(config.max_prefix_length)
        .take_while(|(ac, bc)| ac == bc)
        .count();

    (jaro_sim + prefix_len as f64 * config.prefix_scale * (1.0 - jaro_sim)).min(1.0)
}

/// Jaro-Winkler similarity with default parameters.
#[inline]
#[must_use]
pub fn jaro_winkler_similarity(a: &str, b: &str) -> f64 {
    jaro_winkler_similarity_with(a, b, &JaroWinklerConfig::default())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn approx_eq(a: f64, b: f64) -> bool {
        (a - b).abs() < 0.001
    }

    #[test]
    fn test_jaro_basic() {
        assert!(approx_eq(jaro_similarity("", ""), 1.0));
        assert!(approx_eq(jaro_similarity("abc", ""), 0.0));
        assert!(approx_eq(jaro_similarity("abc", "abc"), 1.0));
        assert!(approx_eq(jaro_similarity("abc", "xyz"), 0.0));
    }

    #[test]
    fn test_jaro_examples() {
        assert!(approx_eq(jaro_similarity("MARTHA", "MARHTA"), 0.944));
        assert!(approx_eq(jaro_similarity("DWAYNE", "DUANE"), 0.822));
        assert!(approx_eq(jaro_similarity("DIXON", "DICKSONX"), 0.767));
        assert!(approx_eq(jaro_similarity("hello", "hallo"), 0.866));
    }

    #[test]
    fn test_jaro_winkler_examples() {
        let jw = JaroWinkler::new();
        assert!(approx_eq(jw.compare("MARTHA", "MARHTA"), 0.961));
        assert!(approx_eq(jw.compare("DWAYNE", "DUANE"), 0.84));
        assert!(approx_eq(jw.compare("DIXON", "DICKSONX"), 0.813));
    }

    #[test]
    fn test_jaro_winkler_threshold() {
        // Jaro of 0.0 never gets a bonus, regardless of any prefix
        assert_eq!(jaro_winkler_similarity("abc", "xyz"), 0.0);

        let strict = JaroWinkler::from_config(JaroWinklerConfig {
            boost_threshold: 0.95,
            ..Default::default()
        })
        .unwrap();
        assert!(approx_eq(strict.compare("MARTHA", "MARHTA"), 0.944));
    }

    #[test]
    fn test_symmetry() {
        let jw = JaroWinkler::new();
        for (a, b) in [("MARTHA", "MARHTA"), ("DIXON", "DICKSONX"), ("abcb", "bacbb"), ("ab", "ba")] {
            assert_eq!(jaro_similarity(a, b), jaro_similarity(b, a));
            assert_eq!(jw.compare(a, b), jw.compare(b, a));
        }
    }

    #[test]
    fn test_config_validation() {
        let bad_scale = JaroWinklerConfig {
            prefix_scale: 0.3,
            ..Default::default()
        };
        assert!(JaroWinkler::from_config(bad_scale).is_err());

        let bad_threshold = JaroWinklerConfig {
            boost_threshold: 1.5,
            ..Default::default()
        };
        assert!(JaroWinkler::from_config(bad_threshold).is_err());

        let config = JaroWinklerConfig {
            prefix_scale: 0.25,
            ..Default::default()
        };
        assert_eq!(JaroWinkler::from_config(config).unwrap().config(), config);
    }

    #[test]
    fn test_unicode() {
        let score = jaro_similarity("cafe", "caf\u{00e9}");
        assert!(score > 0.8 && score < 1.0);
    }
}
