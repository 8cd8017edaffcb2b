//! Frame Pipeline
//!
//! Chains algebra operations over one collection with one grouping strategy.
//! The strategy is fixed when the pipeline is created, so every identity
//! decision and every merge in a pipeline run uses the same strategy.

use crate::error::AlgebraError;
use crate::ops::{self, FilterTuple, GroupingStrategy, OrderKey, StatFn};
use tracing::debug;

/// A frame collection bound to the grouping strategy it is combined under
pub struct Pipeline<'s, F, S: ?Sized> {
    strategy: &'s S,
    frames: Vec<F>,
}

impl<'s, F, S> Pipeline<'s, F, S>
where
    S: GroupingStrategy<F> + ?Sized,
{
    pub fn new(strategy: &'s S, frames: Vec<F>) -> Self {
        Self { strategy, frames }
    }

    pub fn strategy(&self) -> &'s S {
        self.strategy
    }

    pub fn frames(&self) -> &[F] {
        &self.frames
    }

    pub fn len(&self) -> usize {
        self.frames.len()
    }

    pub fn is_empty(&self) -> bool {
        self.frames.is_empty()
    }

    pub fn into_frames(self) -> Vec<F> {
        self.frames
    }

    /// Append other collections after this one.
    pub fn bind(self, others: impl IntoIterator<Item = Vec<F>>) -> Self {
        let before = self.frames.len();
        let frames = ops::bind(std::iter::once(self.frames).chain(others));
        debug!(before, after = frames.len(), "bind");
        Self { frames, ..self }
    }

    pub fn filter(self, tuples: &[FilterTuple<'_, F>]) -> Self {
        let before = self.frames.len();
        let frames = ops::filter(self.frames, tuples);
        debug!(before, after = frames.len(), predicates = tuples.len(), "filter");
        Self { frames, ..self }
    }

    pub fn group_by(self) -> Result<Self, AlgebraError> {
        let before = self.frames.len();
        let frames = ops::group_by(self.strategy, self.frames)?;
        debug!(strategy = self.strategy.name(), before, after = frames.len(), "group_by");
        Ok(Self { frames, ..self })
    }

    /// Intersect with other collections; this pipeline's frames are `first`.
    pub fn intersect(self, others: impl IntoIterator<Item = Vec<F>>) -> Result<Self, AlgebraError> {
        let before = self.frames.len();
        let frames = ops::intersect(self.strategy, self.frames, others)?;
        debug!(strategy = self.strategy.name(), before, after = frames.len(), "intersect");
        Ok(Self { frames, ..self })
    }

    /// Union with other collections; this pipeline's frames are `first`.
    pub fn union(self, others: impl IntoIterator<Item = Vec<F>>) -> Result<Self, AlgebraError> {
        let before = self.frames.len();
        let frames = ops::union(self.strategy, self.frames, others)?;
        debug!(strategy = self.strategy.name(), before, after = frames.len(), "union");
        Ok(Self { frames, ..self })
    }

    pub fn order(self, keys: &[OrderKey<'_, F>]) -> Self {
        let frames = ops::order(self.frames, keys);
        debug!(frames = frames.len(), keys = keys.len(), "order");
        Self { frames, ..self }
    }

    pub fn summarize(self, stats: &[&StatFn<'_, F>]) -> Result<Self, AlgebraError> {
        let frames = ops::summarize(self.frames, stats)?;
        debug!(frames = frames.len(), statistics = stats.len(), "summarize");
        Ok(Self { frames, ..self })
    }

    pub fn limit(mut self, max_frames: usize) -> Self {
        self.frames.truncate(max_frames);
        self
    }
}
