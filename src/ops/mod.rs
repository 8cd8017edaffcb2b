//! Frame Algebra
//!
//! Relational operations over fully materialized frame collections: bind,
//! filter, group_by, intersect, union, order, summarize. Every operation takes
//! ownership of its input collection and returns the resulting collection.
//! Identity-aware operations take the grouping strategy as an explicit
//! argument; there is no ambient strategy.

pub mod convert;
pub mod filter;
pub mod order;
pub mod set;
pub mod strategy;
pub mod summarize;

#[cfg(test)]
pub(crate) mod testing;

pub use convert::{to_mapping, to_sequence, IdentityMap};
pub use filter::{filter, FilterTuple, Predicate, Value};
pub use order::{order, OrderKey};
pub use set::{bind, group_by, intersect, union};
pub use strategy::GroupingStrategy;
pub use summarize::{summarize, StatFn};
