//! Sort keys over junction frames

use crate::frame::Frame;
use crate::ops::OrderKey;
use serde::{Deserialize, Serialize};
use std::str::FromStr;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SortDirection {
    #[default]
    Ascending,
    Descending,
}

/// Frame field used as a sort key
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SortKey {
    Coverage,
    SampleCount,
    JunctionCount,
    /// Chromosome, then start, end and strand
    Location,
    JunctionId,
    SampleId,
    /// A value written by a summary statistic; frames without it sort as
    /// negative infinity.
    Stat(String),
}

impl SortKey {
    pub fn to_order_key(&self, direction: SortDirection) -> OrderKey<'static, Frame> {
        match self {
            SortKey::Coverage => integral(direction, |f: &Frame| f.coverage),
            SortKey::SampleCount => integral(direction, |f: &Frame| f.sample_ids.len() as u64),
            SortKey::JunctionCount => integral(direction, |f: &Frame| f.junction_ids.len() as u64),
            SortKey::JunctionId => integral(direction, |f: &Frame| f.junction_id),
            SortKey::SampleId => integral(direction, |f: &Frame| f.sample_id),
            SortKey::Location => match direction {
                SortDirection::Ascending => OrderKey::by(|a: &Frame, b: &Frame| a.location.cmp(&b.location)),
                SortDirection::Descending => OrderKey::by(|a: &Frame, b: &Frame| b.location.cmp(&a.location)),
            },
            SortKey::Stat(name) => {
                let name = name.clone();
                let key = move |f: &Frame| f.stat(&name).unwrap_or(f64::NEG_INFINITY);
                match direction {
                    SortDirection::Ascending => OrderKey::ascending_f64(key),
                    SortDirection::Descending => OrderKey::descending_f64(key),
                }
            }
        }
    }
}

fn integral(direction: SortDirection, key: fn(&Frame) -> u64) -> OrderKey<'static, Frame> {
    match direction {
        SortDirection::Ascending => OrderKey::ascending(key),
        SortDirection::Descending => OrderKey::descending(key),
    }
}

/// A sort key with its direction, parsed from `key[:asc|:desc]`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SortSpec {
    pub key: SortKey,
    #[serde(default)]
    pub direction: SortDirection,
}

impl SortSpec {
    pub fn to_order_key(&self) -> OrderKey<'static, Frame> {
        self.key.to_order_key(self.direction)
    }
}

impl FromStr for SortSpec {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        let (key, direction) = match s.rsplit_once(':') {
            Some((key, "asc")) => (key, SortDirection::Ascending),
            Some((key, "desc")) => (key, SortDirection::Descending),
            _ => (s, SortDirection::Ascending),
        };

        let key = match key {
            "coverage" => SortKey::Coverage,
            "samples" => SortKey::SampleCount,
            "junctions" => SortKey::JunctionCount,
            "location" => SortKey::Location,
            "junction_id" => SortKey::JunctionId,
            "sample_id" => SortKey::SampleId,
            other => match other.strip_prefix("stat=") {
                Some(name) if !name.is_empty() => SortKey::Stat(name.to_string()),
                _ => return Err(format!("Unrecognized sort key: {}", other)),
            },
        };

        Ok(SortSpec { key, direction })
    }
}
