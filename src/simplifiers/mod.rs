//! String simplifiers
//!
//! A simplifier rewrites a string before it is compared: case folding,
//! Unicode normalization, phonetic encoding. Simplifiers must be
//! deterministic but need not be idempotent (re-encoding a Soundex code is
//! not guaranteed to give the same code).

pub mod normalize;
pub mod phonetic;

pub use normalize::*;
pub use phonetic::*;

use std::fmt;
use std::sync::Arc;

/// Trait for deterministic string rewrites applied before comparison.
pub trait Simplifier: Send + Sync + fmt::Debug {
    fn simplify(&self, input: &str) -> String;

    /// Name of the simplifier for debugging/logging
    fn name(&self) -> &'static str;

    /// Human-readable description; composite simplifiers list their steps.
    fn describe(&self) -> String {
        self.name().to_string()
    }
}

/// Applies several simplifiers in order.
#[derive(Debug, Clone, Default)]
pub struct Chain {
    steps: Vec<Arc<dyn Simplifier>>,
}

impl Chain {
    #[must_use]
    pub fn new(steps: Vec<Arc<dyn Simplifier>>) -> Self {
        Self { steps }
    }

    #[must_use]
    pub fn then(mut self, step: impl Simplifier + 'static) -> Self {
        self.steps.push(Arc::new(step));
        self
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.steps.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.steps.is_empty()
    }
}

impl Simplifier for Chain {
    fn simplify(&self, input: &str) -> String {
        self.steps
            .iter()
            .fold(input.to_string(), |acc, step| step.simplify(&acc))
    }

    fn name(&self) -> &'static str {
        "chain"
    }

    fn describe(&self) -> String {
        let steps: Vec<String> = self.steps.iter().map(|s| s.describe()).collect();
        steps.join(" -> ")
    }
}

impl fmt::Display for Chain {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.describe())
    }
}
