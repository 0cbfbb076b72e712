//! Metric composition
//!
//! - [`CompositeMetric`]: simplify both inputs, then delegate to a metric
//! - [`TokenizedMetric`]: tokenize both inputs, then delegate to a token metric
//!
//! Both are themselves [`Metric`]s, so they nest freely.

use crate::algorithms::{Metric, TokenMetric};
use crate::simplifiers::Simplifier;
use crate::tokenizers::Tokenizer;
use std::fmt;
use std::sync::Arc;

/// A metric applied to simplified inputs.
///
/// Bounds are inherited from the wrapped metric unchanged.
#[derive(Debug, Clone)]
pub struct CompositeMetric {
    metric: Arc<dyn Metric>,
    simplifier: Arc<dyn Simplifier>,
}

impl CompositeMetric {
    #[must_use]
    pub fn new(metric: impl Metric + 'static, simplifier: impl Simplifier + 'static) -> Self {
        Self::from_arcs(Arc::new(metric), Arc::new(simplifier))
    }

    #[must_use]
    pub fn from_arcs(metric: Arc<dyn Metric>, simplifier: Arc<dyn Simplifier>) -> Self {
        Self { metric, simplifier }
    }

    #[must_use]
    pub fn metric(&self) -> &Arc<dyn Metric> {
        &self.metric
    }

    #[must_use]
    pub fn simplifier(&self) -> &Arc<dyn Simplifier> {
        &self.simplifier
    }
}

impl Metric for CompositeMetric {
    fn compare(&self, a: &str, b: &str) -> f64 {
        self.metric
            .compare(&self.simplifier.simplify(a), &self.simplifier.simplify(b))
    }

    fn min_score(&self) -> f64 {
        self.metric.min_score()
    }

    fn max_score(&self) -> f64 {
        self.metric.max_score()
    }

    fn name(&self) -> &'static str {
        self.metric.name()
    }
}

impl fmt::Display for CompositeMetric {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} [{}]", self.metric.name(), self.simplifier.describe())
    }
}

/// Adapts a [`TokenMetric`] to string input through a [`Tokenizer`].
#[derive(Debug, Clone)]
pub struct TokenizedMetric {
    tokenizer: Arc<dyn Tokenizer>,
    metric: Arc<dyn TokenMetric>,
}

impl TokenizedMetric {
    #[must_use]
    pub fn new(tokenizer: impl Tokenizer + 'static, metric: impl TokenMetric + 'static) -> Self {
        Self::from_arcs(Arc::new(tokenizer), Arc::new(metric))
    }

    #[must_use]
    pub fn from_arcs(tokenizer: Arc<dyn Tokenizer>, metric: Arc<dyn TokenMetric>) -> Self {
        Self { tokenizer, metric }
    }
}

impl Metric for TokenizedMetric {
    fn compare(&self, a: &str, b: &str) -> f64 {
        self.metric
            .compare_tokens(&self.tokenizer.tokenize(a), &self.tokenizer.tokenize(b))
    }

    fn name(&self) -> &'static str {
        self.metric.name()
    }
}

impl fmt::Display for TokenizedMetric {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {{{}}}", self.metric.name(), self.tokenizer.name())
    }
}
