//! Q-gram tokenizer
//!
//! Splits a string into overlapping substrings of `q` characters.
//! Padded q-grams add `q - 1` pad characters on each side so that the
//! first and last characters take part in as many q-grams as the middle
//! ones.

use super::Tokenizer;
use crate::error::ConfigError;
use serde::{Deserialize, Serialize};

/// Configuration for Q-gram tokenization
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct QGramConfig {
    /// Size of each q-gram (typically 2-3)
    pub q: usize,
    /// Whether to pad strings for edge matching
    pub padded: bool,
    /// Padding character
    pub pad_char: char,
}

impl Default for QGramConfig {
    fn default() -> Self {
        Self {
            q: 2,
            padded: false,
            pad_char: '#',
        }
    }
}

/// Q-gram tokenizer
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct QGram {
    q: usize,
    padded: bool,
    pad_char: char,
}

impl QGram {
    /// Unpadded q-grams of size `q`
    pub fn new(q: usize) -> Result<Self, ConfigError> {
        Self::from_config(QGramConfig {
            q,
            ..Default::default()
        })
    }

    /// Padded q-grams of size `q`
    pub fn padded(q: usize) -> Result<Self, ConfigError> {
        Self::from_config(QGramConfig {
            q,
            padded: true,
            ..Default::default()
        })
    }

    /// Caller guarantees `q > 0`.
    pub(crate) const fn unchecked(q: usize, padded: bool) -> Self {
        Self {
            q,
            padded,
            pad_char: '#',
        }
    }

    /// Create from configuration
    pub fn from_config(config: QGramConfig) -> Result<Self, ConfigError> {
        if config.q == 0 {
            return Err(ConfigError::InvalidQGramSize(config.q));
        }
        Ok(Self {
            q: config.q,
            padded: config.padded,
            pad_char: config.pad_char,
        })
    }

    /// Get current configuration
    #[must_use]
    pub fn config(&self) -> QGramConfig {
        QGramConfig {
            q: self.q,
            padded: self.padded,
            pad_char: self.pad_char,
        }
    }
}

impl Tokenizer for QGram {
    fn tokenize(&self, input: &str) -> Vec<String> {
        extract_qgrams(input, self.q, self.padded, self.pad_char)
    }

    fn name(&self) -> &'static str {
        if self.padded {
            "qgram_padded"
        } else {
            "qgram"
        }
    }
}

/// Q-grams taken word by word, so no q-gram spans a word boundary.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WordQGram {
    qgram: QGram,
}

impl WordQGram {
    #[must_use]
    pub fn new(qgram: QGram) -> Self {
        Self { qgram }
    }

    #[must_use]
    pub fn qgram(&self) -> QGram {
        self.qgram
    }
}

impl Tokenizer for WordQGram {
    fn tokenize(&self, input: &str) -> Vec<String> {
        input
            .split_whitespace()
            .flat_map(|word| self.qgram.tokenize(word))
            .collect()
    }

    fn name(&self) -> &'static str {
        "word_qgram"
    }
}

/// Extract q-grams from a string.
///
/// An unpadded string shorter than `q` yields no q-grams; so does the empty
/// string in either mode.
#[must_use]
pub fn extract_qgrams(s: &str, q: usize, padded: bool, pad_char: char) -> Vec<String> {
    if q == 0 || s.is_empty() {
        return Vec::new();
    }

    let chars: Vec<char> = if padded {
        let pad = std::iter::repeat(pad_char).take(q - 1);
        pad.clone().chain(s.chars()).chain(pad).collect()
    } else {
        s.chars().collect()
    };

    if chars.len() < q {
        return Vec::new();
    }

    chars.windows(q).map(|w| w.iter().collect()).collect()
}
