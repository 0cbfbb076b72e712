//! Tokenizers
//!
//! Split a string into an ordered token sequence for the set-overlap
//! metrics. Duplicates are preserved; metrics that work on sets drop them
//! themselves. An empty string always yields no tokens.

pub mod qgram;
pub mod whitespace;

pub use qgram::*;
pub use whitespace::*;

use std::fmt;

/// Trait for deterministic string-to-token splitters.
pub trait Tokenizer: Send + Sync + fmt::Debug {
    fn tokenize(&self, input: &str) -> Vec<String>;

    /// Name of the tokenizer for debugging/logging
    fn name(&self) -> &'static str;
}

/// Emits the whole input as a single token.
///
/// Used when a token metric is assembled without an explicit tokenizer.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct WholeString;

impl Tokenizer for WholeString {
    fn tokenize(&self, input: &str) -> Vec<String> {
        if input.is_empty() {
            Vec::new()
        } else {
            vec![input.to_string()]
        }
    }

    fn name(&self) -> &'static str {
        "whole_string"
    }
}
