//! Set-overlap metrics over token sequences
//!
//! Multiset metrics (block distance, Euclidean distance, cosine, Simon
//! White, matching coefficient) compare token frequency vectors; set metrics (Dice, Jaccard, overlap) ignore
//! duplicates.
//!
//! Every metric returns 1.0 for two empty sequences and 0.0 when exactly one
//! side is empty.
//!
//! # Complexity
//! - Time: O(m+n) for building frequency maps and comparing them
//! - Space: O(unique_tokens)

use super::TokenMetric;
use ahash::{AHashMap, AHashSet};

/// Builds a frequency map from an iterator of items.
fn build_frequency_map<'a, I>(iter: I) -> AHashMap<&'a str, usize>
where
    I: Iterator<Item = &'a String>,
{
    let mut map = AHashMap::new();
    for item in iter {
        *map.entry(item.as_str()).or_insert(0) += 1;
    }
    map
}

fn build_set(tokens: &[String]) -> AHashSet<&str> {
    tokens.iter().map(String::as_str).collect()
}

/// Shared handling of empty inputs; `None` means both sides have tokens.
#[inline]
fn empty_score(a: &[String], b: &[String]) -> Option<f64> {
    match (a.is_empty(), b.is_empty()) {
        (true, true) => Some(1.0),
        (true, false) | (false, true) => Some(0.0),
        (false, false) => None,
    }
}

/// Size of the multiset intersection: `sum(min(count_a, count_b))`
fn multiset_intersection(map_a: &AHashMap<&str, usize>, map_b: &AHashMap<&str, usize>) -> usize {
    map_a
        .iter()
        .filter_map(|(key, &count_a)| map_b.get(key).map(|&count_b| count_a.min(count_b)))
        .sum()
}

/// Block (Manhattan / L1) distance between token frequency vectors,
/// reported as `1 - L1 / (|a| + |b|)`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct BlockDistance;

impl TokenMetric for BlockDistance {
    fn compare_tokens(&self, a: &[String], b: &[String]) -> f64 {
        if let Some(score) = empty_score(a, b) {
            return score;
        }
        let map_a = build_frequency_map(a.iter());
        let map_b = build_frequency_map(b.iter());

        // |x - y| = x + y - 2 min(x, y), summed over all tokens
        let shared = multiset_intersection(&map_a, &map_b);
        let total = a.len() + b.len();
        let l1 = total - 2 * shared;

        1.0 - l1 as f64 / total as f64
    }

    fn name(&self) -> &'static str {
        "block_distance"
    }
}

/// Cosine of the angle between token frequency vectors.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CosineSimilarity;

impl TokenMetric for CosineSimilarity {
    fn compare_tokens(&self, a: &[String], b: &[String]) -> f64 {
        if let Some(score) = empty_score(a, b) {
            return score;
        }
        let map_a = build_frequency_map(a.iter());
        let map_b = build_frequency_map(b.iter());

        let mut dot_product = 0.0f64;
        let mut magnitude_a = 0.0f64;
        let mut magnitude_b = 0.0f64;

        // Magnitude of A and dot product over shared tokens
        for (key, &count_a) in &map_a {
            let count_a = count_a as f64;
            magnitude_a += count_a * count_a;

            if let Some(&count_b) = map_b.get(key) {
                dot_product += count_a * count_b as f64;
            }
        }

        for &count_b in map_b.values() {
            let count_b = count_b as f64;
            magnitude_b += count_b * count_b;
        }

        let magnitude = (magnitude_a * magnitude_b).sqrt();
        if magnitude == 0.0 {
            0.0
        } else {
            (dot_product / magnitude).clamp(0.0, 1.0)
        }
    }

    fn name(&self) -> &'static str {
        "cosine"
    }
}

/// Sørensen-Dice coefficient over distinct tokens: `2|A ∩ B| / (|A| + |B|)`
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DiceSimilarity;

impl TokenMetric for DiceSimilarity {
    fn compare_tokens(&self, a: &[String], b: &[String]) -> f64 {
        if let Some(score) = empty_score(a, b) {
            return score;
        }
        let set_a = build_set(a);
        let set_b = build_set(b);
        let intersection = set_a.intersection(&set_b).count();

        (2.0 * intersection as f64) / (set_a.len() + set_b.len()) as f64
    }

    fn name(&self) -> &'static str {
        "dice"
    }
}

/// Euclidean (L2) distance between token frequency vectors, reported as
/// `1 - L2 / sqrt(|a|^2 + |b|^2)` where `|x|^2` is the squared norm of a
/// frequency vector. Disjoint sequences are at the maximum distance.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct EuclideanDistance;

impl TokenMetric for EuclideanDistance {
    fn compare_tokens(&self, a: &[String], b: &[String]) -> f64 {
        if let Some(score) = empty_score(a, b) {
            return score;
        }
        let map_a = build_frequency_map(a.iter());
        let map_b = build_frequency_map(b.iter());

        // Integer sums keep the score exactly symmetric
        let mut distance_sq = 0usize;
        for (key, &count_a) in &map_a {
            let count_b = map_b.get(key).copied().unwrap_or(0);
            distance_sq += count_a.abs_diff(count_b).pow(2);
        }
        for (key, &count_b) in &map_b {
            if !map_a.contains_key(key) {
                distance_sq += count_b * count_b;
            }
        }

        let norm_sq: usize = map_a.values().chain(map_b.values()).map(|c| c * c).sum();

        1.0 - (distance_sq as f64).sqrt() / (norm_sq as f64).sqrt()
    }

    fn name(&self) -> &'static str {
        "euclidean_distance"
    }
}

/// Dice coefficient over token multisets: `2 |A ∩ B| / (|A| + |B|)`.
///
/// Usually fed word-level q-grams, so repeated letter pairs count.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SimonWhite;

impl TokenMetric for SimonWhite {
    fn compare_tokens(&self, a: &[String], b: &[String]) -> f64 {
        if let Some(score) = empty_score(a, b) {
            return score;
        }
        let map_a = build_frequency_map(a.iter());
        let map_b = build_frequency_map(b.iter());
        let shared = multiset_intersection(&map_a, &map_b);

        2.0 * shared as f64 / (a.len() + b.len()) as f64
    }

    fn name(&self) -> &'static str {
        "simon_white"
    }
}

/// Jaccard index over distinct tokens: `|A ∩ B| / |A ∪ B|`
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct JaccardSimilarity;

impl TokenMetric for JaccardSimilarity {
    fn compare_tokens(&self, a: &[String], b: &[String]) -> f64 {
        if let Some(score) = empty_score(a, b) {
            return score;
        }
        let set_a = build_set(a);
        let set_b = build_set(b);
        let intersection = set_a.intersection(&set_b).count();
        let union = set_a.len() + set_b.len() - intersection;

        intersection as f64 / union as f64
    }

    fn name(&self) -> &'static str {
        "jaccard"
    }
}

/// Overlap coefficient over distinct tokens: `|A ∩ B| / min(|A|, |B|)`
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct OverlapCoefficient;

impl TokenMetric for OverlapCoefficient {
    fn compare_tokens(&self, a: &[String], b: &[String]) -> f64 {
        if let Some(score) = empty_score(a, b) {
            return score;
        }
        let set_a = build_set(a);
        let set_b = build_set(b);
        let intersection = set_a.intersection(&set_b).count();

        intersection as f64 / set_a.len().min(set_b.len()) as f64
    }

    fn name(&self) -> &'static str {
        "overlap"
    }
}

/// Shared tokens (with multiplicity) over the longer sequence:
/// `|A ∩ B| / max(|A|, |B|)`
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct MatchingCoefficient;

impl TokenMetric for MatchingCoefficient {
    fn compare_tokens(&self, a: &[String], b: &[String]) -> f64 {
        if let Some(score) = empty_score(a, b) {
            return score;
        }
        let map_a = build_frequency_map(a.iter());
        let map_b = build_frequency_map(b.iter());
        let shared = multiset_intersection(&map_a, &map_b);

        shared as f64 / a.len().max(b.len()) as f64
    }

    fn name(&self) -> &'static str {
        "matching_coefficient"
    }
}
