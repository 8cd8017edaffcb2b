//! Junction Queries
//!
//! Builds Snaptron junction query URLs from a region plus optional range and
//! sample-metadata filters, and retrieves the matching frames through a
//! [`QueryExecutor`].

pub mod client;
pub mod parse;

pub use client::{QueryExecutor, SnaptronClient};
pub use parse::parse_junctions;

use crate::error::QueryError;
use reqwest::Url;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Genomic region to query: a gene symbol or an explicit interval
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Region {
    Gene(String),
    Interval { chromosome: String, start: u64, end: u64 },
}

impl Region {
    fn validate(&self) -> Result<(), QueryError> {
        match self {
            Region::Gene(name) if name.trim().is_empty() => Err(QueryError::InvalidParameter(
                "gene name cannot be empty".to_string(),
            )),
            Region::Interval { chromosome, .. } if chromosome.trim().is_empty() => Err(
                QueryError::InvalidParameter("chromosome cannot be empty".to_string()),
            ),
            Region::Interval { start, end, .. } if start > end => Err(QueryError::InvalidParameter(
                format!("interval start {} is after end {}", start, end),
            )),
            _ => Ok(()),
        }
    }
}

impl fmt::Display for Region {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Region::Gene(name) => write!(f, "{}", name),
            Region::Interval { chromosome, start, end } => {
                write!(f, "{}:{}-{}", chromosome, start, end)
            }
        }
    }
}

impl std::str::FromStr for Region {
    type Err = QueryError;

    /// `chr1:100-200` parses as an interval; anything without a colon is a gene.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        let region = match s.split_once(':') {
            None => Region::Gene(s.to_string()),
            Some((chromosome, range)) => {
                let (start, end) = range.split_once('-').ok_or_else(|| {
                    QueryError::InvalidParameter(format!("region '{}' is missing an end coordinate", s))
                })?;
                let coordinate = |v: &str| {
                    v.replace(',', "").parse::<u64>().map_err(|e| {
                        QueryError::InvalidParameter(format!("invalid coordinate '{}' in '{}': {}", v, s, e))
                    })
                };
                Region::Interval {
                    chromosome: chromosome.to_string(),
                    start: coordinate(start)?,
                    end: coordinate(end)?,
                }
            }
        };
        region.validate()?;
        Ok(region)
    }
}

/// Junction-level field usable in a range filter
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RangeField {
    SamplesCount,
    CoverageSum,
    CoverageAvg,
    CoverageMedian,
    Length,
    Annotated,
}

impl RangeField {
    pub fn as_str(&self) -> &'static str {
        match self {
            RangeField::SamplesCount => "samples_count",
            RangeField::CoverageSum => "coverage_sum",
            RangeField::CoverageAvg => "coverage_avg",
            RangeField::CoverageMedian => "coverage_median",
            RangeField::Length => "length",
            RangeField::Annotated => "annotated",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Comparison {
    GreaterOrEqual,
    LessOrEqual,
    Equal,
}

impl Comparison {
    /// Operator token in the server's filter syntax
    pub fn token(&self) -> &'static str {
        match self {
            Comparison::GreaterOrEqual => ">:",
            Comparison::LessOrEqual => "<:",
            Comparison::Equal => ":",
        }
    }
}

/// Server-side junction filter (`rfilter`)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RangeFilter {
    pub field: RangeField,
    pub comparison: Comparison,
    pub value: f64,
}

impl RangeFilter {
    pub fn new(field: RangeField, comparison: Comparison, value: f64) -> Self {
        Self {
            field,
            comparison,
            value,
        }
    }

    pub fn export(&self) -> String {
        format!("{}{}{}", self.field.as_str(), self.comparison.token(), self.value)
    }
}

impl std::str::FromStr for RangeFilter {
    type Err = QueryError;

    /// Parse the server syntax, e.g. `samples_count>:5`, `annotated:1`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        let invalid = || QueryError::InvalidParameter(format!("invalid range filter '{}'", s));

        let (field, comparison, value) = if let Some((f, v)) = s.split_once(">:") {
            (f, Comparison::GreaterOrEqual, v)
        } else if let Some((f, v)) = s.split_once("<:") {
            (f, Comparison::LessOrEqual, v)
        } else if let Some((f, v)) = s.split_once(':') {
            (f, Comparison::Equal, v)
        } else {
            return Err(invalid());
        };

        let field = match field.trim() {
            "samples_count" => RangeField::SamplesCount,
            "coverage_sum" => RangeField::CoverageSum,
            "coverage_avg" => RangeField::CoverageAvg,
            "coverage_median" => RangeField::CoverageMedian,
            "length" => RangeField::Length,
            "annotated" => RangeField::Annotated,
            _ => return Err(invalid()),
        };
        let value = value.trim().parse::<f64>().map_err(|_| invalid())?;

        Ok(RangeFilter::new(field, comparison, value))
    }
}

/// Server-side sample metadata filter (`sfilter`)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MetadataFilter {
    pub key: String,
    pub value: String,
}

impl MetadataFilter {
    pub fn new(key: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            value: value.into(),
        }
    }

    pub fn export(&self) -> String {
        format!("{}:{}", self.key, self.value)
    }
}

impl std::str::FromStr for MetadataFilter {
    type Err = QueryError;

    /// Parse `key:value`; the value may itself contain colons.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.split_once(':') {
            Some((key, value)) if !key.trim().is_empty() => {
                Ok(MetadataFilter::new(key.trim(), value.trim()))
            }
            _ => Err(QueryError::InvalidParameter(format!(
                "invalid metadata filter '{}' (expected key:value)",
                s
            ))),
        }
    }
}

/// A junction query: one region plus optional filters
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Query {
    pub region: Option<Region>,
    #[serde(default)]
    pub filters: Vec<RangeFilter>,
    #[serde(default)]
    pub metadata: Vec<MetadataFilter>,
}

impl Query {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn region(mut self, region: Region) -> Self {
        self.region = Some(region);
        self
    }

    pub fn filter(mut self, filter: RangeFilter) -> Self {
        self.filters.push(filter);
        self
    }

    pub fn metadata(mut self, filter: MetadataFilter) -> Self {
        self.metadata.push(filter);
        self
    }

    /// Build the request URL against a service endpoint.
    ///
    /// Parameters are appended as `regions`, then each `rfilter`, then each
    /// `sfilter`. A query without a region is rejected.
    pub fn to_url(&self, endpoint: &str) -> Result<Url, QueryError> {
        let region = self.region.as_ref().ok_or(QueryError::MissingRegion)?;
        region.validate()?;

        for metadata in &self.metadata {
            if metadata.key.trim().is_empty() {
                return Err(QueryError::InvalidParameter(
                    "metadata filter key cannot be empty".to_string(),
                ));
            }
        }

        let mut url = Url::parse(endpoint)
            .map_err(|e| QueryError::InvalidParameter(format!("invalid endpoint '{}': {}", endpoint, e)))?;

        {
            let mut pairs = url.query_pairs_mut();
            pairs.append_pair("regions", &region.to_string());
            for filter in &self.filters {
                pairs.append_pair("rfilter", &filter.export());
            }
            for metadata in &self.metadata {
                pairs.append_pair("sfilter", &metadata.export());
            }
        }

        Ok(url)
    }
}
