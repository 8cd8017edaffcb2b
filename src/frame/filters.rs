//! Filter predicates over junction frames
//!
//! Each constructor returns a [`FilterTuple`] whose predicate reads the
//! tuple's comparison value, so the value kind always matches the predicate.

use crate::frame::{Frame, Strand};
use crate::ops::{FilterTuple, Value};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

fn coverage_gt(frame: &Frame, value: &Value) -> bool {
    value.as_f64().is_some_and(|v| frame.coverage as f64 > v)
}

fn coverage_lt(frame: &Frame, value: &Value) -> bool {
    value.as_f64().is_some_and(|v| (frame.coverage as f64) < v)
}

fn samples_at_least(frame: &Frame, value: &Value) -> bool {
    value.as_f64().is_some_and(|v| frame.sample_ids.len() as f64 >= v)
}

fn chromosome_eq(frame: &Frame, value: &Value) -> bool {
    value.as_str() == Some(frame.location.chromosome.as_str())
}

fn strand_eq(frame: &Frame, value: &Value) -> bool {
    value.as_str() == Some(frame.location.strand.symbol())
}

fn annotated_eq(frame: &Frame, value: &Value) -> bool {
    value.as_bool() == Some(frame.annotated)
}

fn start_at_least(frame: &Frame, value: &Value) -> bool {
    value.as_f64().is_some_and(|v| frame.location.start as f64 >= v)
}

fn end_at_most(frame: &Frame, value: &Value) -> bool {
    value.as_f64().is_some_and(|v| frame.location.end as f64 <= v)
}

pub fn coverage_above(threshold: u64) -> FilterTuple<'static, Frame> {
    FilterTuple::new(coverage_gt, Value::Int(saturating_i64(threshold)))
}

pub fn coverage_below(threshold: u64) -> FilterTuple<'static, Frame> {
    FilterTuple::new(coverage_lt, Value::Int(saturating_i64(threshold)))
}

pub fn sample_count_at_least(count: u64) -> FilterTuple<'static, Frame> {
    FilterTuple::new(samples_at_least, Value::Int(saturating_i64(count)))
}

pub fn on_chromosome(chromosome: impl Into<String>) -> FilterTuple<'static, Frame> {
    FilterTuple::new(chromosome_eq, Value::Text(chromosome.into()))
}

pub fn on_strand(strand: Strand) -> FilterTuple<'static, Frame> {
    FilterTuple::new(strand_eq, Value::Text(strand.symbol().to_string()))
}

pub fn annotated(annotated: bool) -> FilterTuple<'static, Frame> {
    FilterTuple::new(annotated_eq, Value::Bool(annotated))
}

pub fn starts_at_or_after(position: u64) -> FilterTuple<'static, Frame> {
    FilterTuple::new(start_at_least, Value::Int(saturating_i64(position)))
}

pub fn ends_at_or_before(position: u64) -> FilterTuple<'static, Frame> {
    FilterTuple::new(end_at_most, Value::Int(saturating_i64(position)))
}

fn saturating_i64(v: u64) -> i64 {
    i64::try_from(v).unwrap_or(i64::MAX)
}

/// Declarative frame filter, as written in config files and on the command line
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case", tag = "kind", content = "value")]
pub enum FrameFilter {
    CoverageAbove(u64),
    CoverageBelow(u64),
    SampleCountAtLeast(u64),
    Chromosome(String),
    Strand(Strand),
    Annotated(bool),
    StartAtLeast(u64),
    EndAtMost(u64),
}

impl FrameFilter {
    pub fn to_tuple(&self) -> FilterTuple<'static, Frame> {
        match self {
            FrameFilter::CoverageAbove(v) => coverage_above(*v),
            FrameFilter::CoverageBelow(v) => coverage_below(*v),
            FrameFilter::SampleCountAtLeast(v) => sample_count_at_least(*v),
            FrameFilter::Chromosome(c) => on_chromosome(c.clone()),
            FrameFilter::Strand(s) => on_strand(*s),
            FrameFilter::Annotated(a) => annotated(*a),
            FrameFilter::StartAtLeast(v) => starts_at_or_after(*v),
            FrameFilter::EndAtMost(v) => ends_at_or_before(*v),
        }
    }
}

impl fmt::Display for FrameFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FrameFilter::CoverageAbove(v) => write!(f, "coverage>{}", v),
            FrameFilter::CoverageBelow(v) => write!(f, "coverage<{}", v),
            FrameFilter::SampleCountAtLeast(v) => write!(f, "samples>={}", v),
            FrameFilter::Chromosome(c) => write!(f, "chromosome={}", c),
            FrameFilter::Strand(s) => write!(f, "strand={}", s.symbol()),
            FrameFilter::Annotated(a) => write!(f, "annotated={}", a),
            FrameFilter::StartAtLeast(v) => write!(f, "start>={}", v),
            FrameFilter::EndAtMost(v) => write!(f, "end<={}", v),
        }
    }
}

impl FromStr for FrameFilter {
    type Err = String;

    /// Parse `field<op>value`, e.g. `coverage>5`, `samples>=3`, `strand=-`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        let number = |v: &str| {
            v.trim()
                .parse::<u64>()
                .map_err(|e| format!("Invalid number '{}' in filter '{}': {}", v, s, e))
        };

        if let Some(v) = s.strip_prefix("coverage>") {
            return Ok(FrameFilter::CoverageAbove(number(v)?));
        }
        if let Some(v) = s.strip_prefix("coverage<") {
            return Ok(FrameFilter::CoverageBelow(number(v)?));
        }
        if let Some(v) = s.strip_prefix("samples>=") {
            return Ok(FrameFilter::SampleCountAtLeast(number(v)?));
        }
        if let Some(v) = s.strip_prefix("start>=") {
            return Ok(FrameFilter::StartAtLeast(number(v)?));
        }
        if let Some(v) = s.strip_prefix("end<=") {
            return Ok(FrameFilter::EndAtMost(number(v)?));
        }
        if let Some(v) = s.strip_prefix("chromosome=") {
            return Ok(FrameFilter::Chromosome(v.trim().to_string()));
        }
        if let Some(v) = s.strip_prefix("strand=") {
            return match v.trim() {
                "+" => Ok(FrameFilter::Strand(Strand::Forward)),
                "-" => Ok(FrameFilter::Strand(Strand::Reverse)),
                "?" => Ok(FrameFilter::Strand(Strand::Unknown)),
                other => Err(format!("Invalid strand '{}' (must be '+', '-' or '?')", other)),
            };
        }
        if let Some(v) = s.strip_prefix("annotated=") {
            return v
                .trim()
                .parse::<bool>()
                .map(FrameFilter::Annotated)
                .map_err(|_| format!("Invalid annotated flag '{}' (must be true or false)", v));
        }

        Err(format!("Unrecognized filter: {}", s))
    }
}
