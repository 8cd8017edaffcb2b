//! Grouping strategies for junction frames

use crate::error::AlgebraError;
use crate::frame::Frame;
use crate::ops::strategy::{identity_mismatch, GroupingStrategy};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// How junction frames are identified and merged
///
/// - `BySample`: one frame per sample; merging accumulates the junctions
///   seen in that sample.
/// - `ByJunction`: one frame per junction; merging accumulates the samples
///   the junction was observed in.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize, clap::ValueEnum,
)]
#[serde(rename_all = "snake_case")]
pub enum Grouping {
    #[default]
    BySample,
    ByJunction,
}

impl GroupingStrategy<Frame> for Grouping {
    type Key = u64;

    fn name(&self) -> &'static str {
        match self {
            Grouping::BySample => "by_sample",
            Grouping::ByJunction => "by_junction",
        }
    }

    fn identity(&self, frame: &Frame) -> u64 {
        match self {
            Grouping::BySample => frame.sample_id,
            Grouping::ByJunction => frame.junction_id,
        }
    }

    fn merge(&self, primary: Frame, secondary: Frame) -> Result<Frame, AlgebraError> {
        let (a, b) = (self.identity(&primary), self.identity(&secondary));
        if a != b {
            return Err(identity_mismatch(self.name(), &a, &b));
        }

        Ok(match self {
            Grouping::BySample => merge_by_sample(primary, secondary),
            Grouping::ByJunction => merge_by_junction(primary, secondary),
        })
    }
}

fn merge_by_sample(primary: Frame, secondary: Frame) -> Frame {
    // Location and annotation describe the primary's junction only.
    accumulate(primary, secondary)
}

fn merge_by_junction(primary: Frame, secondary: Frame) -> Frame {
    let annotated = primary.annotated || secondary.annotated;
    let mut merged = accumulate(primary, secondary);
    merged.annotated = annotated;
    merged
}

/// Coverage adds (saturating), set fields union, `counts` appends secondary after
/// primary, and existing stats on the primary are kept.
fn accumulate(mut primary: Frame, secondary: Frame) -> Frame {
    primary.coverage = primary.coverage.saturating_add(secondary.coverage);
    primary.counts.extend(secondary.counts);
    primary.junction_ids.extend(secondary.junction_ids);
    primary.sample_ids.extend(secondary.sample_ids);
    primary.stats = merge_stats(primary.stats, secondary.stats);
    primary
}

fn merge_stats(
    primary: BTreeMap<String, f64>,
    mut secondary: BTreeMap<String, f64>,
) -> BTreeMap<String, f64> {
    secondary.extend(primary);
    secondary
}
