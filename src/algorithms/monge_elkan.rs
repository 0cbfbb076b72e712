//! Monge-Elkan token similarity
//!
//! For each token of the first sequence, take the best score an inner string
//! metric gives against any token of the second sequence, then average.

use super::{Metric, SmithWatermanGotoh, TokenMetric};
use std::sync::Arc;

/// Average best-match similarity between token sequences.
///
/// Not symmetric: tokens of `a` are matched against tokens of `b`.
/// The inner metric must report scores in `[0, 1]`.
#[derive(Debug, Clone)]
pub struct MongeElkan {
    inner: Arc<dyn Metric>,
}

impl Default for MongeElkan {
    fn default() -> Self {
        Self::new(SmithWatermanGotoh::new())
    }
}

impl MongeElkan {
    #[must_use]
    pub fn new(inner: impl Metric + 'static) -> Self {
        Self {
            inner: Arc::new(inner),
        }
    }

    #[must_use]
    pub fn from_arc(inner: Arc<dyn Metric>) -> Self {
        Self { inner }
    }
}

impl TokenMetric for MongeElkan {
    fn compare_tokens(&self, a: &[String], b: &[String]) -> f64 {
        match (a.is_empty(), b.is_empty()) {
            (true, true) => return 1.0,
            (true, false) | (false, true) => return 0.0,
            (false, false) => {}
        }

        let total: f64 = a
            .iter()
            .map(|x| {
                b.iter()
                    .map(|y| self.inner.compare(x, y))
                    .fold(0.0f64, f64::max)
            })
            .sum();

        (total / a.len() as f64).clamp(0.0, 1.0)
    }

    fn name(&self) -> &'static str {
        "monge_elkan"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::algorithms::Levenshtein;

    fn tokens(s: &str) -> Vec<String> {
        s.split_whitespace().map(str::to_string).collect()
    }

    #[test]
    fn test_monge_elkan() {
        let me = MongeElkan::new(Levenshtein::new());
        assert_eq!(me.compare_tokens(&[], &[]), 1.0);
        assert_eq!(me.compare_tokens(&tokens("a"), &[]), 0.0);
        assert_eq!(me.compare_tokens(&tokens("john smith"), &tokens("smith john")), 1.0);

        // "jon" best matches "john" at 0.75, "smith" matches exactly
        let score = me.compare_tokens(&tokens("jon smith"), &tokens("john smith"));
        assert!((score - 0.875).abs() < 1e-9);
    }

    #[test]
    fn test_not_symmetric() {
        let me = MongeElkan::new(Levenshtein::new());
        let a = tokens("smith");
        let b = tokens("smith jones");
        assert_eq!(me.compare_tokens(&a, &b), 1.0);
        assert!(me.compare_tokens(&b, &a) < 1.0);
    }

    #[test]
    fn test_default_inner() {
        let me = MongeElkan::default();
        assert_eq!(me.compare_tokens(&tokens("chapman"), &tokens("sam chapman")), 1.0);
    }
}
