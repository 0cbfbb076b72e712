//! Ready-made metrics
//!
//! Named constructors wiring the usual simplifier/tokenizer defaults.
//! Token metrics split on whitespace unless noted; each has a `*_with`
//! variant taking another tokenizer. Use [`crate::builder::MetricBuilder`]
//! for any other combination.

use crate::algorithms::{
    BlockDistance, CosineSimilarity, DiceSimilarity, EuclideanDistance, JaccardSimilarity, Jaro,
    JaroWinkler, Levenshtein, MatchingCoefficient, Metric, MongeElkan, NeedlemanWunch,
    OverlapCoefficient, SimonWhite, SmithWaterman, SmithWatermanGotoh,
    SmithWatermanGotohWindowedAffine, TokenMetric,
};
use crate::composite::{CompositeMetric, TokenizedMetric};
use crate::error::ConfigError;
use crate::simplifiers::Soundex;
use crate::tokenizers::{QGram, Tokenizer, Whitespace, WordQGram};
use std::sync::Arc;

fn tokenized(tokenizer: impl Tokenizer + 'static, metric: impl TokenMetric + 'static) -> Arc<dyn Metric> {
    Arc::new(TokenizedMetric::new(tokenizer, metric))
}

/// Block distance over whitespace tokens
#[must_use]
pub fn block_distance() -> Arc<dyn Metric> {
    block_distance_with(Whitespace)
}

#[must_use]
pub fn block_distance_with(tokenizer: impl Tokenizer + 'static) -> Arc<dyn Metric> {
    tokenized(tokenizer, BlockDistance)
}

/// Cosine similarity over whitespace tokens
#[must_use]
pub fn cosine_similarity() -> Arc<dyn Metric> {
    cosine_similarity_with(Whitespace)
}

#[must_use]
pub fn cosine_similarity_with(tokenizer: impl Tokenizer + 'static) -> Arc<dyn Metric> {
    tokenized(tokenizer, CosineSimilarity)
}

/// Dice similarity over whitespace tokens
#[must_use]
pub fn dice_similarity() -> Arc<dyn Metric> {
    dice_similarity_with(Whitespace)
}

#[must_use]
pub fn dice_similarity_with(tokenizer: impl Tokenizer + 'static) -> Arc<dyn Metric> {
    tokenized(tokenizer, DiceSimilarity)
}

/// Euclidean distance over whitespace tokens
#[must_use]
pub fn euclidean_distance() -> Arc<dyn Metric> {
    euclidean_distance_with(Whitespace)
}

#[must_use]
pub fn euclidean_distance_with(tokenizer: impl Tokenizer + 'static) -> Arc<dyn Metric> {
    tokenized(tokenizer, EuclideanDistance)
}

/// Jaccard similarity over whitespace tokens
#[must_use]
pub fn jaccard_similarity() -> Arc<dyn Metric> {
    jaccard_similarity_with(Whitespace)
}

#[must_use]
pub fn jaccard_similarity_with(tokenizer: impl Tokenizer + 'static) -> Arc<dyn Metric> {
    tokenized(tokenizer, JaccardSimilarity)
}

/// Matching coefficient over whitespace tokens
#[must_use]
pub fn matching_coefficient() -> Arc<dyn Metric> {
    matching_coefficient_with(Whitespace)
}

#[must_use]
pub fn matching_coefficient_with(tokenizer: impl Tokenizer + 'static) -> Arc<dyn Metric> {
    tokenized(tokenizer, MatchingCoefficient)
}

/// Overlap coefficient over whitespace tokens
#[must_use]
pub fn overlap_coefficient() -> Arc<dyn Metric> {
    overlap_coefficient_with(Whitespace)
}

#[must_use]
pub fn overlap_coefficient_with(tokenizer: impl Tokenizer + 'static) -> Arc<dyn Metric> {
    tokenized(tokenizer, OverlapCoefficient)
}

/// Monge-Elkan with Smith-Waterman-Gotoh over whitespace tokens
#[must_use]
pub fn monge_elkan() -> Arc<dyn Metric> {
    monge_elkan_with(Whitespace)
}

#[must_use]
pub fn monge_elkan_with(tokenizer: impl Tokenizer + 'static) -> Arc<dyn Metric> {
    tokenized(tokenizer, MongeElkan::default())
}

/// Block distance over padded character 3-grams
#[must_use]
pub fn q_grams_distance() -> Arc<dyn Metric> {
    q_grams_distance_with(QGram::unchecked(3, true))
}

#[must_use]
pub fn q_grams_distance_with(tokenizer: QGram) -> Arc<dyn Metric> {
    tokenized(tokenizer, BlockDistance)
}

/// Simon White similarity over per-word character bigrams
#[must_use]
pub fn simon_white() -> Arc<dyn Metric> {
    simon_white_with(QGram::unchecked(2, false))
}

/// Simon White similarity over per-word q-grams of the given tokenizer
#[must_use]
pub fn simon_white_with(tokenizer: QGram) -> Arc<dyn Metric> {
    tokenized(WordQGram::new(tokenizer), SimonWhite)
}

#[must_use]
pub fn jaro() -> Arc<dyn Metric> {
    Arc::new(Jaro::new())
}

#[must_use]
pub fn jaro_winkler() -> Arc<dyn Metric> {
    Arc::new(JaroWinkler::new())
}

#[must_use]
pub fn levenshtein() -> Arc<dyn Metric> {
    Arc::new(Levenshtein::new())
}

#[must_use]
pub fn needleman_wunch() -> Arc<dyn Metric> {
    Arc::new(NeedlemanWunch::new())
}

#[must_use]
pub fn smith_waterman() -> Arc<dyn Metric> {
    Arc::new(SmithWaterman::new())
}

#[must_use]
pub fn smith_waterman_gotoh() -> Arc<dyn Metric> {
    Arc::new(SmithWatermanGotoh::new())
}

/// Windowed Smith-Waterman-Gotoh; the window has no default.
///
/// # Errors
/// [`ConfigError::InvalidWindow`] when `window` is 0.
pub fn smith_waterman_gotoh_windowed_affine(window: usize) -> Result<Arc<dyn Metric>, ConfigError> {
    Ok(Arc::new(SmithWatermanGotohWindowedAffine::new(window)?))
}

/// Jaro-Winkler over Soundex codes
#[must_use]
pub fn soundex() -> Arc<dyn Metric> {
    Arc::new(CompositeMetric::new(JaroWinkler::new(), Soundex::new()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_facade_names() {
        let cases: [(Arc<dyn Metric>, &str); 16] = [
            (block_distance(), "block_distance"),
            (euclidean_distance(), "euclidean_distance"),
            (simon_white(), "simon_white"),
            (cosine_similarity(), "cosine"),
            (dice_similarity(), "dice"),
            (jaccard_similarity(), "jaccard"),
            (matching_coefficient(), "matching_coefficient"),
            (overlap_coefficient(), "overlap"),
            (monge_elkan(), "monge_elkan"),
            (q_grams_distance(), "block_distance"),
            (jaro(), "jaro"),
            (jaro_winkler(), "jaro_winkler"),
            (levenshtein(), "levenshtein"),
            (needleman_wunch(), "needleman_wunch"),
            (smith_waterman(), "smith_waterman"),
            (smith_waterman_gotoh(), "smith_waterman_gotoh"),
        ];
        for (metric, name) in cases {
            assert_eq!(metric.name(), name);
            assert_eq!(metric.compare("", ""), 1.0, "{name}");
            assert_eq!(metric.compare("the same", "the same"), 1.0, "{name}");
        }
    }

    #[test]
    fn test_soundex_facade() {
        let metric = soundex();
        assert_eq!(metric.compare("Robert", "Rupert"), 1.0);
        assert!(metric.compare("Robert", "Tymczak") < 1.0);
    }

    #[test]
    fn test_q_grams_distance() {
        let metric = q_grams_distance();
        let close = metric.compare("Healed", "Sealed");
        let far = metric.compare("Healed", "Help");
        assert!(close > far);
    }

    #[test]
    fn test_windowed_facade() {
        assert!(smith_waterman_gotoh_windowed_affine(0).is_err());
        let metric = smith_waterman_gotoh_windowed_affine(10).unwrap();
        assert_eq!(metric.compare("test", "test"), 1.0);
    }

    #[test]
    fn test_simon_white_facade() {
        let metric = simon_white();
        // {Fr, ra, an, nc, ce} vs {Fr, re, en, nc, ch}: Fr and nc shared
        assert!((metric.compare("France", "French") - 0.4).abs() < 1e-9);
        assert_eq!(metric.compare("Healed", "Healed"), 1.0);
    }

    #[test]
    fn test_tokenizer_variants() {
        let bigrams = QGram::new(2).unwrap();
        let metric = jaccard_similarity_with(bigrams);
        // {ni, ig, gh, ht} vs {na, ac, ch, ht}
        assert!((metric.compare("night", "nacht") - 1.0 / 7.0).abs() < 1e-9);
        assert_eq!(jaccard_similarity().compare("night", "nacht"), 0.0);

        let padded = q_grams_distance_with(QGram::padded(2).unwrap());
        assert!(padded.compare("night", "nacht") > 0.0);
        assert_eq!(simon_white_with(QGram::padded(3).unwrap()).compare("ab", "ab"), 1.0);
        assert_eq!(euclidean_distance_with(bigrams).compare("abc", "abc"), 1.0);
        assert_eq!(monge_elkan_with(crate::tokenizers::Words).compare("hi, there", "there hi"), 1.0);
    }
}
