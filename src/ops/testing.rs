//! Minimal frame type and strategies shared by the ops unit tests.

use crate::error::AlgebraError;
use crate::ops::strategy::{identity_mismatch, GroupingStrategy};

#[derive(Debug, Clone, PartialEq)]
pub(crate) struct Record {
    pub id: u64,
    pub count: u64,
    /// Counts of every record folded in, in merge order
    pub trail: Vec<u64>,
}

pub(crate) fn rec(id: u64, count: u64) -> Record {
    Record {
        id,
        count,
        trail: vec![count],
    }
}

/// Sorted identities of a result
pub(crate) fn ids(records: &[Record]) -> Vec<u64> {
    let mut ids: Vec<u64> = records.iter().map(|r| r.id).collect();
    ids.sort_unstable();
    ids
}

/// Groups by `id`, summing `count`
pub(crate) struct SumById;

impl GroupingStrategy<Record> for SumById {
    type Key = u64;

    fn name(&self) -> &'static str {
        "sum_by_id"
    }

    fn identity(&self, frame: &Record) -> u64 {
        frame.id
    }

    fn merge(&self, mut primary: Record, secondary: Record) -> Result<Record, AlgebraError> {
        if primary.id != secondary.id {
            return Err(identity_mismatch(self.name(), &primary.id, &secondary.id));
        }
        primary.count += secondary.count;
        primary.trail.extend(secondary.trail);
        Ok(primary)
    }
}

/// Groups by `id`, keeping the primary's `count`
pub(crate) struct Keep;

impl GroupingStrategy<Record> for Keep {
    type Key = u64;

    fn name(&self) -> &'static str {
        "keep"
    }

    fn identity(&self, frame: &Record) -> u64 {
        frame.id
    }

    fn merge(&self, mut primary: Record, secondary: Record) -> Result<Record, AlgebraError> {
        if primary.id != secondary.id {
            return Err(identity_mismatch(self.name(), &primary.id, &secondary.id));
        }
        primary.trail.extend(secondary.trail);
        Ok(primary)
    }
}
