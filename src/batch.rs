//! Batch comparison helpers
//!
//! Map a metric over many strings. Inputs at or above
//! [`PARALLEL_THRESHOLD`] are spread over the rayon thread pool; results
//! keep input order either way.

use crate::algorithms::Metric;
use crate::error::BatchError;
use rayon::prelude::*;
use tracing::debug;

/// Minimum input size for parallel processing.
///
/// For inputs smaller than this threshold, sequential processing is faster
/// due to the overhead of thread pool coordination.
pub const PARALLEL_THRESHOLD: usize = 100;

/// Compare `fixed` against every candidate.
///
/// # Example
/// ```rust
/// use simrust::algorithms::Levenshtein;
/// use simrust::batch::compare;
///
/// let scores = compare(&Levenshtein::new(), "kitten", &["kitten", "sitting"]);
/// assert_eq!(scores[0], 1.0);
/// ```
pub fn compare<M, S>(metric: &M, fixed: &str, candidates: &[S]) -> Vec<f64>
where
    M: Metric + ?Sized,
    S: AsRef<str> + Sync,
{
    if candidates.len() >= PARALLEL_THRESHOLD {
        debug!(metric = metric.name(), count = candidates.len(), "parallel batch compare");
        candidates
            .par_iter()
            .map(|candidate| metric.compare(fixed, candidate.as_ref()))
            .collect()
    } else {
        candidates
            .iter()
            .map(|candidate| metric.compare(fixed, candidate.as_ref()))
            .collect()
    }
}

/// Compare two equal-length arrays element by element.
///
/// # Errors
/// [`BatchError::SizeMismatch`] when the arrays differ in length; nothing is
/// compared in that case.
pub fn compare_arrays<M, S, T>(metric: &M, left: &[S], right: &[T]) -> Result<Vec<f64>, BatchError>
where
    M: Metric + ?Sized,
    S: AsRef<str> + Sync,
    T: AsRef<str> + Sync,
{
    if left.len() != right.len() {
        return Err(BatchError::SizeMismatch {
            left: left.len(),
            right: right.len(),
        });
    }

    let scores = if left.len() >= PARALLEL_THRESHOLD {
        debug!(metric = metric.name(), count = left.len(), "parallel pairwise compare");
        left.par_iter()
            .zip(right.par_iter())
            .map(|(a, b)| metric.compare(a.as_ref(), b.as_ref()))
            .collect()
    } else {
        left.iter()
            .zip(right.iter())
            .map(|(a, b)| metric.compare(a.as_ref(), b.as_ref()))
            .collect()
    };

    Ok(scores)
}
