//! Property-based tests for metric contracts.
//!
//! Every metric must stay within its declared bounds, score identical
//! inputs at the maximum and handle empty strings. Symmetric metrics must
//! give the same score in both argument orders.

use proptest::prelude::*;
use simrust::algorithms::{SmithWatermanGotoh, SmithWatermanGotohWindowedAffine};
use simrust::{compare, compare_arrays, metrics, Metric};
use std::sync::Arc;

const EPS: f64 = 1e-9;

fn symmetric_metrics() -> Vec<Arc<dyn Metric>> {
    vec![
        metrics::block_distance(),
        metrics::cosine_similarity(),
        metrics::dice_similarity(),
        metrics::euclidean_distance(),
        metrics::jaccard_similarity(),
        metrics::matching_coefficient(),
        metrics::overlap_coefficient(),
        metrics::q_grams_distance(),
        metrics::simon_white(),
        metrics::jaro(),
        metrics::jaro_winkler(),
        metrics::levenshtein(),
        metrics::needleman_wunch(),
        metrics::smith_waterman(),
        metrics::smith_waterman_gotoh(),
        metrics::smith_waterman_gotoh_windowed_affine(3).unwrap(),
        metrics::soundex(),
    ]
}

fn all_metrics() -> Vec<Arc<dyn Metric>> {
    let mut all = symmetric_metrics();
    all.push(metrics::monge_elkan());
    all
}

/// Short ASCII words with spaces, plus arbitrary printable Unicode.
fn arb_text() -> impl Strategy<Value = String> {
    prop_oneof![
        3 => "[a-zA-Z ]{0,12}",
        1 => "\\PC{0,8}",
    ]
}

#[test]
fn empty_inputs() {
    for metric in all_metrics() {
        assert_eq!(metric.compare("", ""), metric.max_score(), "{}", metric.name());
        assert_eq!(metric.compare("abc", ""), metric.min_score(), "{}", metric.name());
        assert_eq!(metric.compare("", "abc"), metric.min_score(), "{}", metric.name());
    }
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 200,
        ..ProptestConfig::default()
    })]

    /// Scores never leave [min_score, max_score].
    #[test]
    fn scores_within_bounds(a in arb_text(), b in arb_text()) {
        for metric in all_metrics() {
            let score = metric.compare(&a, &b);
            prop_assert!(score.is_finite(), "{} gave {}", metric.name(), score);
            prop_assert!(
                score >= metric.min_score() - EPS && score <= metric.max_score() + EPS,
                "{} out of bounds: {} for {:?} / {:?}",
                metric.name(), score, a, b
            );
        }
    }

    /// Identical inputs score the maximum.
    #[test]
    fn identical_inputs_score_max(a in arb_text()) {
        for metric in all_metrics() {
            let score = metric.compare(&a, &a);
            prop_assert!(
                (score - metric.max_score()).abs() < EPS,
                "{} gave {} for {:?}",
                metric.name(), score, a
            );
        }
    }

    /// Argument order does not matter for symmetric metrics.
    #[test]
    fn symmetric_metrics_are_symmetric(a in arb_text(), b in arb_text()) {
        for metric in symmetric_metrics() {
            let ab = metric.compare(&a, &b);
            let ba = metric.compare(&b, &a);
            prop_assert!(
                (ab - ba).abs() < EPS,
                "{} asymmetric: {} vs {} for {:?} / {:?}",
                metric.name(), ab, ba, a, b
            );
        }
    }

    /// Distance is the complement of the score.
    #[test]
    fn distance_complements_score(a in arb_text(), b in arb_text()) {
        for metric in all_metrics() {
            let expected = metric.max_score() - metric.compare(&a, &b);
            prop_assert!((metric.distance(&a, &b) - expected).abs() < EPS);
        }
    }

    /// Widening the band never lowers the score, and a band covering the
    /// whole matrix matches the unbanded alignment.
    #[test]
    fn window_widening_is_monotone(a in "[a-z]{0,10}", b in "[a-z]{0,10}") {
        let mut previous = 0.0;
        for window in 1..=10 {
            let score = SmithWatermanGotohWindowedAffine::new(window).unwrap().compare(&a, &b);
            prop_assert!(score + EPS >= previous, "window {} dropped to {}", window, score);
            previous = score;
        }
        let full = SmithWatermanGotoh::new().compare(&a, &b);
        prop_assert!((previous - full).abs() < EPS);
    }

    /// Batch helpers agree with one-at-a-time comparison.
    #[test]
    fn batch_matches_single(
        fixed in arb_text(),
        candidates in proptest::collection::vec(arb_text(), 0..20),
    ) {
        let metric = metrics::jaro_winkler();
        let batch = compare(metric.as_ref(), &fixed, &candidates);
        let single: Vec<f64> = candidates.iter().map(|c| metric.compare(&fixed, c)).collect();
        prop_assert_eq!(&batch, &single);

        let fixed_column = vec![fixed.clone(); candidates.len()];
        let pairwise = compare_arrays(metric.as_ref(), &fixed_column, &candidates).unwrap();
        prop_assert_eq!(pairwise, single);
    }
}
