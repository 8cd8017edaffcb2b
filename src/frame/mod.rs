//! Junction Frames
//!
//! The concrete record produced by a Snaptron junction query: one frame per
//! (junction, sample) observation. Grouping and set operations fold frames
//! together, so a frame may come to represent many junctions or many samples.

pub mod filters;
pub mod grouping;
pub mod order_keys;
pub mod stats;

pub use filters::FrameFilter;
pub use grouping::Grouping;
pub use order_keys::{SortDirection, SortKey};
pub use stats::Summary;

use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, BTreeSet};
use std::fmt;

/// Strand of a splice junction
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Strand {
    Forward,
    Reverse,
    Unknown,
}

impl Strand {
    /// Parse the single-character strand column (`+`, `-`, anything else is unknown).
    pub fn from_symbol(symbol: &str) -> Self {
        match symbol {
            "+" => Strand::Forward,
            "-" => Strand::Reverse,
            _ => Strand::Unknown,
        }
    }

    pub fn symbol(&self) -> &'static str {
        match self {
            Strand::Forward => "+",
            Strand::Reverse => "-",
            Strand::Unknown => "?",
        }
    }
}

/// Genomic location of a junction (1-based, inclusive coordinates)
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct Location {
    pub chromosome: String,
    pub start: u64,
    pub end: u64,
    pub strand: Strand,
}

impl Location {
    pub fn new(chromosome: impl Into<String>, start: u64, end: u64, strand: Strand) -> Self {
        Self {
            chromosome: chromosome.into(),
            start,
            end,
            strand,
        }
    }

    /// Intron length spanned by the junction
    pub fn length(&self) -> u64 {
        self.end.saturating_sub(self.start) + 1
    }
}

impl fmt::Display for Location {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}:{}-{}({})",
            self.chromosome,
            self.start,
            self.end,
            self.strand.symbol()
        )
    }
}

/// Junction frame
///
/// `junction_id` and `sample_id` are the observation the frame was created
/// from; after a merge they hold the primary frame's values, while
/// `junction_ids` and `sample_ids` record everything folded into it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Frame {
    pub junction_id: u64,
    pub sample_id: u64,
    pub location: Location,
    pub annotated: bool,
    /// Total read coverage across every observation folded into this frame
    pub coverage: u64,
    /// Per-observation coverage values, in merge order
    pub counts: Vec<u64>,
    pub junction_ids: BTreeSet<u64>,
    pub sample_ids: BTreeSet<u64>,
    /// Values written by summary statistics, keyed by statistic name
    #[serde(default)]
    pub stats: BTreeMap<String, f64>,
}

impl Frame {
    /// Create a frame for a single (junction, sample) observation.
    pub fn new(junction_id: u64, sample_id: u64, location: Location, coverage: u64) -> Self {
        Frame {
            junction_id,
            sample_id,
            location,
            annotated: false,
            coverage,
            counts: vec![coverage],
            junction_ids: BTreeSet::from([junction_id]),
            sample_ids: BTreeSet::from([sample_id]),
            stats: BTreeMap::new(),
        }
    }

    pub fn with_annotated(mut self, annotated: bool) -> Self {
        self.annotated = annotated;
        self
    }

    pub fn stat(&self, name: &str) -> Option<f64> {
        self.stats.get(name).copied()
    }
}
