//! Word-level tokenizers

use super::Tokenizer;
use unicode_segmentation::UnicodeSegmentation;

/// Splits on runs of Unicode whitespace; punctuation stays attached.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Whitespace;

impl Tokenizer for Whitespace {
    fn tokenize(&self, input: &str) -> Vec<String> {
        input.split_whitespace().map(str::to_string).collect()
    }

    fn name(&self) -> &'static str {
        "whitespace"
    }
}

/// Splits on Unicode word boundaries (UAX #29), dropping punctuation and
/// whitespace.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Words;

impl Tokenizer for Words {
    fn tokenize(&self, input: &str) -> Vec<String> {
        input.unicode_words().map(str::to_string).collect()
    }

    fn name(&self) -> &'static str {
        "words"
    }
}
