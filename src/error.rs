//! Error types
//!
//! Configuration problems are reported when a metric, cost function or
//! builder is constructed. `compare` itself never fails.

use thiserror::Error;

/// Errors raised while configuring metrics, cost functions and pipelines
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ConfigError {
    /// `MetricBuilder::build` was called without a metric
    #[error("Builder has no metric: call with_metric or with_token_metric before build")]
    MissingMetric,

    /// Windowed alignment needs a band of at least one cell on each side
    #[error("Window width must be positive, got {0}")]
    InvalidWindow(usize),

    /// Gap penalties must be finite and non-positive
    #[error("Gap cost '{name}' must be finite and <= 0, got {value}")]
    InvalidGapCost { name: &'static str, value: f64 },

    /// Substitution costs must be finite and ordered
    #[error("Invalid substitution cost: {0}")]
    InvalidCost(String),

    /// Q-gram tokenizers need q >= 1
    #[error("Q-gram size must be at least 1, got {0}")]
    InvalidQGramSize(usize),

    /// Any other out-of-range parameter
    #[error("Parameter '{name}' {reason}")]
    InvalidParameter { name: &'static str, reason: String },
}

/// Errors raised by the batch comparison helpers
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum BatchError {
    /// Element-wise comparison needs inputs of the same length
    #[error("Arrays must have the same size: left has {left}, right has {right}")]
    SizeMismatch { left: usize, right: usize },
}

/// Reject non-finite or positive gap penalties.
pub(crate) fn check_gap(name: &'static str, value: f64) -> Result<f64, ConfigError> {
    if value.is_finite() && value <= 0.0 {
        Ok(value)
    } else {
        Err(ConfigError::InvalidGapCost { name, value })
    }
}
