//! Metric builder
//!
//! Assembles simplifiers, a tokenizer and a metric into one [`Metric`].
//!
//! ```rust
//! use simrust::builder::MetricBuilder;
//! use simrust::algorithms::{CosineSimilarity, Metric};
//! use simrust::simplifiers::Normalizer;
//! use simrust::tokenizers::Whitespace;
//!
//! let metric = MetricBuilder::new()
//!     .with_simplifier(Normalizer::lowercase())
//!     .with_tokenizer(Whitespace)
//!     .with_token_metric(CosineSimilarity)
//!     .build()
//!     .unwrap();
//!
//! assert_eq!(metric.compare("Hello World", "world hello"), 1.0);
//! ```

use crate::algorithms::{Metric, TokenMetric};
use crate::composite::{CompositeMetric, TokenizedMetric};
use crate::error::ConfigError;
use crate::simplifiers::{Chain, Simplifier};
use crate::tokenizers::{Tokenizer, WholeString};
use std::sync::Arc;
use tracing::{debug, warn};

/// The metric at the end of the pipeline
#[derive(Debug, Clone)]
enum Stage {
    Strings(Arc<dyn Metric>),
    Tokens(Arc<dyn TokenMetric>),
}

/// Builder for composed metrics.
///
/// Consumed by [`MetricBuilder::build`]; the result is immutable and can be
/// shared across threads.
#[derive(Debug, Clone, Default)]
pub struct MetricBuilder {
    simplifiers: Vec<Arc<dyn Simplifier>>,
    tokenizer: Option<Arc<dyn Tokenizer>>,
    metric: Option<Stage>,
}

impl MetricBuilder {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a simplifier. Repeated calls chain simplifiers in call order.
    #[must_use]
    pub fn with_simplifier(self, simplifier: impl Simplifier + 'static) -> Self {
        self.with_simplifier_arc(Arc::new(simplifier))
    }

    #[must_use]
    pub fn with_simplifier_arc(mut self, simplifier: Arc<dyn Simplifier>) -> Self {
        self.simplifiers.push(simplifier);
        self
    }

    /// Tokenizer feeding a token metric
    #[must_use]
    pub fn with_tokenizer(self, tokenizer: impl Tokenizer + 'static) -> Self {
        self.with_tokenizer_arc(Arc::new(tokenizer))
    }

    #[must_use]
    pub fn with_tokenizer_arc(mut self, tokenizer: Arc<dyn Tokenizer>) -> Self {
        self.tokenizer = Some(tokenizer);
        self
    }

    /// Metric comparing whole (simplified) strings. Replaces any earlier metric.
    #[must_use]
    pub fn with_metric(self, metric: impl Metric + 'static) -> Self {
        self.with_metric_arc(Arc::new(metric))
    }

    #[must_use]
    pub fn with_metric_arc(mut self, metric: Arc<dyn Metric>) -> Self {
        self.metric = Some(Stage::Strings(metric));
        self
    }

    /// Metric comparing token sequences. Replaces any earlier metric.
    #[must_use]
    pub fn with_token_metric(self, metric: impl TokenMetric + 'static) -> Self {
        self.with_token_metric_arc(Arc::new(metric))
    }

    #[must_use]
    pub fn with_token_metric_arc(mut self, metric: Arc<dyn TokenMetric>) -> Self {
        self.metric = Some(Stage::Tokens(metric));
        self
    }

    /// Assemble the pipeline.
    ///
    /// # Errors
    /// [`ConfigError::MissingMetric`] when no metric was set.
    pub fn build(self) -> Result<Arc<dyn Metric>, ConfigError> {
        let stage = self.metric.ok_or(ConfigError::MissingMetric)?;

        let inner: Arc<dyn Metric> = match stage {
            Stage::Strings(metric) => {
                if let Some(tokenizer) = &self.tokenizer {
                    warn!(
                        tokenizer = tokenizer.name(),
                        metric = metric.name(),
                        "tokenizer ignored: metric compares whole strings"
                    );
                }
                metric
            }
            Stage::Tokens(metric) => {
                let tokenizer = self
                    .tokenizer
                    .unwrap_or_else(|| Arc::new(WholeString) as Arc<dyn Tokenizer>);
                Arc::new(TokenizedMetric::from_arcs(tokenizer, metric))
            }
        };

        let mut simplifiers = self.simplifiers;
        let built: Arc<dyn Metric> = match simplifiers.len() {
            0 => inner,
            1 => Arc::new(CompositeMetric::from_arcs(inner, simplifiers.remove(0))),
            _ => Arc::new(CompositeMetric::from_arcs(inner, Arc::new(Chain::new(simplifiers)))),
        };

        debug!(metric = built.name(), "built metric pipeline");
        Ok(built)
    }
}
