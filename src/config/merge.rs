//! Merge rules for layered configuration sources.

pub(crate) mod merge_policy;
