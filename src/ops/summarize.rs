//! Sequential application of statistic functions.

use crate::error::AlgebraError;

/// A statistic: a transformation from one frame collection to another
pub type StatFn<'a, F> = dyn Fn(Vec<F>) -> Result<Vec<F>, AlgebraError> + 'a;

/// Thread the collection through each statistic in argument order.
///
/// The first failing statistic aborts the fold and its error is returned
/// unchanged; later statistics are not run.
pub fn summarize<F>(frames: Vec<F>, stats: &[&StatFn<'_, F>]) -> Result<Vec<F>, AlgebraError> {
    stats.iter().try_fold(frames, |current, stat| stat(current))
}
