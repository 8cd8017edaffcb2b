//! Summary statistics over junction frames
//!
//! Every statistic annotates each frame with one value derived from its own
//! fields and stores it in [`Frame::stats`] under the statistic's key.

use crate::error::AlgebraError;
use crate::frame::Frame;
use crate::ops::StatFn;
use serde::{Deserialize, Serialize};

pub const COUNT_SUM: &str = "count_sum";
pub const COUNT_MEAN: &str = "count_mean";
pub const COUNT_MEDIAN: &str = "count_median";
pub const COUNT_MAX: &str = "count_max";
pub const SAMPLE_COUNT: &str = "sample_count";
pub const JUNCTION_COUNT: &str = "junction_count";

fn annotate(
    frames: Vec<Frame>,
    key: &str,
    compute: impl Fn(&Frame) -> Result<f64, AlgebraError>,
) -> Result<Vec<Frame>, AlgebraError> {
    frames
        .into_iter()
        .map(|mut frame| {
            let value = compute(&frame)?;
            frame.stats.insert(key.to_string(), value);
            Ok(frame)
        })
        .collect()
}

fn counts_total(frame: &Frame) -> f64 {
    frame.counts.iter().map(|c| *c as f64).sum()
}

fn empty_counts(statistic: &str, frame: &Frame) -> AlgebraError {
    AlgebraError::StatisticFailed {
        statistic: statistic.to_string(),
        reason: format!(
            "frame for junction {} / sample {} has no counts",
            frame.junction_id, frame.sample_id
        ),
    }
}

pub fn sum_counts(frames: Vec<Frame>) -> Result<Vec<Frame>, AlgebraError> {
    annotate(frames, COUNT_SUM, |f| Ok(counts_total(f)))
}

pub fn mean_counts(frames: Vec<Frame>) -> Result<Vec<Frame>, AlgebraError> {
    annotate(frames, COUNT_MEAN, |f| {
        if f.counts.is_empty() {
            return Err(empty_counts(COUNT_MEAN, f));
        }
        Ok(counts_total(f) / f.counts.len() as f64)
    })
}

pub fn median_counts(frames: Vec<Frame>) -> Result<Vec<Frame>, AlgebraError> {
    annotate(frames, COUNT_MEDIAN, |f| {
        if f.counts.is_empty() {
            return Err(empty_counts(COUNT_MEDIAN, f));
        }
        let mut sorted = f.counts.clone();
        sorted.sort_unstable();
        let mid = sorted.len() / 2;
        Ok(if sorted.len() % 2 == 0 {
            (sorted[mid - 1] as f64 + sorted[mid] as f64) / 2.0
        } else {
            sorted[mid] as f64
        })
    })
}

pub fn max_count(frames: Vec<Frame>) -> Result<Vec<Frame>, AlgebraError> {
    annotate(frames, COUNT_MAX, |f| {
        f.counts
            .iter()
            .max()
            .map(|m| *m as f64)
            .ok_or_else(|| empty_counts(COUNT_MAX, f))
    })
}

pub fn sample_count(frames: Vec<Frame>) -> Result<Vec<Frame>, AlgebraError> {
    annotate(frames, SAMPLE_COUNT, |f| Ok(f.sample_ids.len() as f64))
}

pub fn junction_count(frames: Vec<Frame>) -> Result<Vec<Frame>, AlgebraError> {
    annotate(frames, JUNCTION_COUNT, |f| Ok(f.junction_ids.len() as f64))
}

/// Named statistic, as selected in config files and on the command line
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "snake_case")]
pub enum Summary {
    Sum,
    Mean,
    Median,
    Max,
    Samples,
    Junctions,
}

impl Summary {
    pub fn key(&self) -> &'static str {
        match self {
            Summary::Sum => COUNT_SUM,
            Summary::Mean => COUNT_MEAN,
            Summary::Median => COUNT_MEDIAN,
            Summary::Max => COUNT_MAX,
            Summary::Samples => SAMPLE_COUNT,
            Summary::Junctions => JUNCTION_COUNT,
        }
    }

    pub fn stat_fn(&self) -> &'static StatFn<'static, Frame> {
        match self {
            Summary::Sum => &sum_counts,
            Summary::Mean => &mean_counts,
            Summary::Median => &median_counts,
            Summary::Max => &max_count,
            Summary::Samples => &sample_count,
            Summary::Junctions => &junction_count,
        }
    }
}
