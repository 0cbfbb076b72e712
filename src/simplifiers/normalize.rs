//! String normalization simplifiers
//!
//! Provides various normalization modes for preprocessing strings
//! before comparison.

use super::Simplifier;
use serde::{Deserialize, Serialize};
use unicode_normalization::char::is_combining_mark;
use unicode_normalization::UnicodeNormalization;

/// Normalization mode for string preprocessing
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum NormalizationMode {
    /// Convert to lowercase only
    Lowercase,
    /// Apply Unicode NFKD normalization
    #[serde(rename = "unicode_nfkd")]
    UnicodeNFKD,
    /// Decompose and drop combining marks ("café" -> "cafe")
    RemoveDiacritics,
    /// Remove punctuation characters
    RemovePunctuation,
    /// Remove all whitespace
    RemoveWhitespace,
    /// Apply all normalizations
    Strict,
}

/// Normalize a string according to the specified mode
#[must_use]
pub fn normalize_string(s: &str, mode: NormalizationMode) -> String {
    match mode {
        NormalizationMode::Lowercase => s.to_lowercase(),
        NormalizationMode::UnicodeNFKD => s.nfkd().collect(),
        NormalizationMode::RemoveDiacritics => s.nfd().filter(|&c| !is_combining_mark(c)).collect(),
        NormalizationMode::RemovePunctuation => {
            s.chars().filter(|c| !c.is_ascii_punctuation()).collect()
        }
        NormalizationMode::RemoveWhitespace => s.chars().filter(|c| !c.is_whitespace()).collect(),
        NormalizationMode::Strict => s
            .nfkd()
            .filter(|&c| !is_combining_mark(c))
            .flat_map(char::to_lowercase)
            .filter(|c| !c.is_ascii_punctuation() && !c.is_whitespace())
            .collect(),
    }
}

/// Simplifier applying a single [`NormalizationMode`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Normalizer {
    pub mode: NormalizationMode,
}

impl Normalizer {
    #[must_use]
    pub fn new(mode: NormalizationMode) -> Self {
        Self { mode }
    }

    #[must_use]
    pub fn lowercase() -> Self {
        Self::new(NormalizationMode::Lowercase)
    }
}

impl Simplifier for Normalizer {
    fn simplify(&self, input: &str) -> String {
        normalize_string(input, self.mode)
    }

    fn name(&self) -> &'static str {
        match self.mode {
            NormalizationMode::Lowercase => "lowercase",
            NormalizationMode::UnicodeNFKD => "unicode_nfkd",
            NormalizationMode::RemoveDiacritics => "remove_diacritics",
            NormalizationMode::RemovePunctuation => "remove_punctuation",
            NormalizationMode::RemoveWhitespace => "remove_whitespace",
            NormalizationMode::Strict => "strict",
        }
    }
}
