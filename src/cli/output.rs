//! CLI output: error mapping from domain errors to stable CLI surface.

use crate::error::{ApiError, QueryError};

/// Map domain/service errors to a string for CLI output.
pub fn map_error(e: &ApiError) -> String {
    match e {
        ApiError::Query(QueryError::MissingRegion) => {
            "A region is required. Pass --region <gene|chrom:start-end>.".to_string()
        }
        ApiError::Query(QueryError::Status { status, .. }) => {
            format!("The junction service answered with HTTP {}. {}", status, e)
        }
        _ => e.to_string(),
    }
}
