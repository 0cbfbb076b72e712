//! SimRust - String similarity metrics
//!
//! Composable, bounded string metrics for record linkage and fuzzy
//! matching.
//!
//! # Features
//! - Edit and alignment metrics (Levenshtein, Needleman-Wunch,
//!   Smith-Waterman, Smith-Waterman-Gotoh with optional band)
//! - Jaro and Jaro-Winkler
//! - Set-overlap metrics over tokens (cosine, Dice, Jaccard, ...)
//! - Simplifiers (normalization, Soundex) and tokenizers (whitespace,
//!   q-grams) composed through [`MetricBuilder`]
//! - Parallel batch comparison
//!
//! ```rust
//! use simrust::{metrics, Metric};
//!
//! let metric = metrics::levenshtein();
//! assert!((metric.compare("kitten", "sitting") - 4.0 / 7.0).abs() < 1e-9);
//! ```

pub mod algorithms;
pub mod batch;
pub mod builder;
pub mod composite;
pub mod error;
pub mod metrics;
pub mod simplifiers;
pub mod tokenizers;

pub use algorithms::{Metric, TokenMetric};
pub use batch::{compare, compare_arrays};
pub use builder::MetricBuilder;
pub use composite::{CompositeMetric, TokenizedMetric};
pub use error::{BatchError, ConfigError};
pub use simplifiers::Simplifier;
pub use tokenizers::Tokenizer;
