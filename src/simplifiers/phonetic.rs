//! Phonetic simplifiers
//!
//! Encode strings by how they sound, so spelling variations of the same
//! name collapse to the same code before comparison.

use super::Simplifier;
use crate::error::ConfigError;

/// Soundex phonetic encoder
///
/// Produces a code of `length` characters: first letter + digits, padded
/// with zeros. Non-alphabetic characters are dropped; input without any
/// ASCII letter encodes to the empty string.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Soundex {
    length: usize,
}

impl Default for Soundex {
    fn default() -> Self {
        Self { length: 4 }
    }
}

impl Soundex {
    /// Classic 4-character code
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Code of a custom length (at least 1)
    pub fn with_length(length: usize) -> Result<Self, ConfigError> {
        if length == 0 {
            return Err(ConfigError::InvalidParameter {
                name: "length",
                reason: "must be at least 1".to_string(),
            });
        }
        Ok(Self { length })
    }

    #[must_use]
    pub fn length(&self) -> usize {
        self.length
    }
}

impl Simplifier for Soundex {
    fn simplify(&self, input: &str) -> String {
        soundex_with_length(input, self.length)
    }

    fn name(&self) -> &'static str {
        "soundex"
    }
}

#[inline]
fn encode_char(c: char) -> char {
    match c {
        'B' | 'F' | 'P' | 'V' => '1',
        'C' | 'G' | 'J' | 'K' | 'Q' | 'S' | 'X' | 'Z' => '2',
        'D' | 'T' => '3',
        'L' => '4',
        'M' | 'N' => '5',
        'R' => '6',
        _ => '0', // A, E, I, O, U, H, W, Y
    }
}

/// Soundex code of the standard length 4
#[must_use]
pub fn soundex(s: &str) -> String {
    soundex_with_length(s, 4)
}

/// Soundex code with a custom length
#[must_use]
pub fn soundex_with_length(s: &str, length: usize) -> String {
    let mut letters = s
        .chars()
        .filter(char::is_ascii_alphabetic)
        .map(|c| c.to_ascii_uppercase());

    let Some(first) = letters.next() else {
        return String::new();
    };

    let mut result = String::with_capacity(length.max(1));
    result.push(first);
    let mut prev_code = encode_char(first);

    for c in letters {
        if result.len() >= length {
            break;
        }

        // H and W are transparent: they neither emit nor break a run
        if matches!(c, 'H' | 'W') {
            continue;
        }

        let code = encode_char(c);
        if code != '0' && code != prev_code {
            result.push(code);
        }
        // Vowels (code 0) break adjacency
        prev_code = code;
    }

    while result.len() < length {
        result.push('0');
    }
    result.truncate(length);

    result
}
