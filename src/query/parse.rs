//! Junction response parsing.
//!
//! The service answers with tab-separated junction rows. Each row lists the
//! samples the junction was observed in as `,sid:cov,sid:cov`; a row becomes
//! one [`Frame`] per listed sample.

use crate::error::QueryError;
use crate::frame::{Frame, Location, Strand};
use csv::{ReaderBuilder, StringRecord};

const HEADER_PREFIX: &str = "DataSource:Type";

const COL_SNAPTRON_ID: usize = 1;
const COL_CHROMOSOME: usize = 2;
const COL_START: usize = 3;
const COL_END: usize = 4;
const COL_STRAND: usize = 6;
const COL_ANNOTATED: usize = 7;
const COL_SAMPLES: usize = 12;

/// Parse a junction response body into per-sample frames, in row order.
pub fn parse_junctions(body: &str) -> Result<Vec<Frame>, QueryError> {
    let mut reader = ReaderBuilder::new()
        .delimiter(b'\t')
        .has_headers(false)
        .flexible(true)
        .quoting(false)
        .from_reader(body.as_bytes());

    let mut frames = Vec::new();
    for (index, record) in reader.records().enumerate() {
        let line = index + 1;
        let record = record.map_err(|e| QueryError::Parse {
            line,
            reason: e.to_string(),
        })?;

        if record.get(0).is_some_and(|c| c.starts_with(HEADER_PREFIX)) {
            continue;
        }
        if record.iter().all(|c| c.trim().is_empty()) {
            continue;
        }

        parse_row(&record, line, &mut frames)?;
    }

    Ok(frames)
}

fn parse_row(record: &StringRecord, line: usize, frames: &mut Vec<Frame>) -> Result<(), QueryError> {
    if record.len() <= COL_SAMPLES {
        return Err(QueryError::Parse {
            line,
            reason: format!("expected at least {} columns, found {}", COL_SAMPLES + 1, record.len()),
        });
    }

    let field = |col: usize| record.get(col).unwrap_or("").trim();
    let number = |col: usize, name: &str| {
        field(col).parse::<u64>().map_err(|e| QueryError::Parse {
            line,
            reason: format!("invalid {} '{}': {}", name, field(col), e),
        })
    };

    let junction_id = number(COL_SNAPTRON_ID, "snaptron_id")?;
    let location = Location::new(
        field(COL_CHROMOSOME),
        number(COL_START, "start")?,
        number(COL_END, "end")?,
        Strand::from_symbol(field(COL_STRAND)),
    );
    let annotated = field(COL_ANNOTATED) == "1";

    for entry in field(COL_SAMPLES).split(',').filter(|e| !e.is_empty()) {
        let (sample, coverage) = entry.split_once(':').ok_or_else(|| QueryError::Parse {
            line,
            reason: format!("sample entry '{}' is not sample:coverage", entry),
        })?;
        let parse = |v: &str, name: &str| {
            v.parse::<u64>().map_err(|e| QueryError::Parse {
                line,
                reason: format!("invalid {} '{}': {}", name, v, e),
            })
        };

        frames.push(
            Frame::new(
                junction_id,
                parse(sample, "sample id")?,
                location.clone(),
                parse(coverage, "coverage")?,
            )
            .with_annotated(annotated),
        );
    }

    Ok(())
}
