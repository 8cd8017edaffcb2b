//! Error types for the snapframe algebra, query layer, and CLI.

use thiserror::Error;

/// Errors raised by the frame algebra.
///
/// Both variants are fatal to the operation call that raised them; no partial
/// collection is ever returned alongside one.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum AlgebraError {
    #[error("Cannot merge frames with different identities under {strategy}: {primary} vs {secondary}")]
    IdentityMismatch {
        strategy: &'static str,
        primary: String,
        secondary: String,
    },

    #[error("Statistic '{statistic}' failed: {reason}")]
    StatisticFailed { statistic: String, reason: String },
}

/// Errors raised while building or executing a junction query
#[derive(Debug, Error)]
pub enum QueryError {
    #[error("Query has no region; a region (gene or interval) is required")]
    MissingRegion,

    #[error("Invalid query parameter: {0}")]
    InvalidParameter(String),

    #[error("Query request failed: {0}")]
    RequestFailed(String),

    #[error("Query returned status {status}: {body}")]
    Status { status: u16, body: String },

    #[error("Malformed response at line {line}: {reason}")]
    Parse { line: usize, reason: String },
}

/// Top-level error for the library facade and CLI
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("Algebra error: {0}")]
    Algebra(#[from] AlgebraError),

    #[error("Query error: {0}")]
    Query(#[from] QueryError),

    #[error("Configuration error: {0}")]
    ConfigError(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl From<config::ConfigError> for ApiError {
    fn from(err: config::ConfigError) -> Self {
        ApiError::ConfigError(err.to_string())
    }
}
