//! Snapframe: Relational Algebra over Junction Frames
//!
//! Retrieves splice-junction records from a Snaptron service as frames and
//! combines the results of several queries with bind, filter, group_by,
//! intersect, union, order and summarize.

pub mod cli;
pub mod config;
pub mod error;
pub mod frame;
pub mod logging;
pub mod ops;
pub mod pipeline;
pub mod query;

pub use error::{AlgebraError, ApiError, QueryError};
pub use frame::{Frame, Grouping};
pub use ops::GroupingStrategy;
pub use pipeline::Pipeline;
