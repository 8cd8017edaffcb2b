//! Configuration System
//!
//! Layered configuration for query retrieval, default pipeline settings and
//! logging. Sources, lowest to highest precedence: built-in defaults, the
//! global config file, workspace config files, `SNAPFRAME__*` environment
//! variables.

use crate::frame::{FrameFilter, Grouping, Summary};
use crate::frame::order_keys::SortSpec;
use crate::logging::LoggingConfig;
use serde::{Deserialize, Serialize};

mod facade;
mod merge;
mod sources;

pub use facade::ConfigLoader;

/// Root configuration structure
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SnapConfig {
    /// Junction service settings
    #[serde(default)]
    pub query: QueryConfig,

    /// Defaults applied by the CLI pipeline
    #[serde(default)]
    pub pipeline: PipelineConfig,

    /// Logging configuration
    #[serde(default)]
    pub logging: LoggingConfig,
}

/// Junction service settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct QueryConfig {
    /// Service root, without the compilation path
    #[serde(default = "default_endpoint")]
    pub endpoint: String,

    /// Data compilation to query (srav2, gtex, tcga, ...)
    #[serde(default = "default_compilation")]
    pub compilation: String,

    #[serde(default = "default_connect_timeout_secs")]
    pub connect_timeout_secs: u64,

    #[serde(default = "default_request_timeout_secs")]
    pub request_timeout_secs: u64,
}

fn default_endpoint() -> String {
    "http://snaptron.cs.jhu.edu".to_string()
}

fn default_compilation() -> String {
    "srav2".to_string()
}

fn default_connect_timeout_secs() -> u64 {
    10
}

fn default_request_timeout_secs() -> u64 {
    120
}

impl Default for QueryConfig {
    fn default() -> Self {
        Self {
            endpoint: default_endpoint(),
            compilation: default_compilation(),
            connect_timeout_secs: default_connect_timeout_secs(),
            request_timeout_secs: default_request_timeout_secs(),
        }
    }
}

impl QueryConfig {
    /// Junction query URL for the configured compilation
    pub fn junction_endpoint(&self) -> String {
        format!(
            "{}/{}/snaptron",
            self.endpoint.trim_end_matches('/'),
            self.compilation
        )
    }

    pub fn validate(&self) -> Result<(), String> {
        if self.endpoint.trim().is_empty() {
            return Err("Endpoint cannot be empty".to_string());
        }
        reqwest::Url::parse(&self.endpoint)
            .map_err(|e| format!("Invalid endpoint '{}': {}", self.endpoint, e))?;
        if self.compilation.trim().is_empty() {
            return Err("Compilation cannot be empty".to_string());
        }
        if self.connect_timeout_secs == 0 || self.request_timeout_secs == 0 {
            return Err("Timeouts must be greater than zero".to_string());
        }
        Ok(())
    }
}

/// Pipeline defaults used when the command line does not override them
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PipelineConfig {
    #[serde(default)]
    pub grouping: Grouping,

    #[serde(default)]
    pub filters: Vec<FrameFilter>,

    #[serde(default)]
    pub sort: Vec<SortSpec>,

    #[serde(default)]
    pub summaries: Vec<Summary>,

    /// Maximum number of frames to print
    #[serde(default)]
    pub limit: Option<usize>,
}

impl PipelineConfig {
    pub fn validate(&self) -> Result<(), String> {
        if self.limit == Some(0) {
            return Err("Limit must be greater than zero when set".to_string());
        }
        Ok(())
    }
}

/// Configuration validation errors
#[derive(Debug, Clone)]
pub enum ValidationError {
    Query(String),
    Pipeline(String),
}

impl std::fmt::Display for ValidationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ValidationError::Query(msg) => write!(f, "Query: {}", msg),
            ValidationError::Pipeline(msg) => write!(f, "Pipeline: {}", msg),
        }
    }
}

impl std::error::Error for ValidationError {}

impl SnapConfig {
    /// Validate the entire configuration
    pub fn validate(&self) -> Result<(), Vec<ValidationError>> {
        let mut errors = Vec::new();

        if let Err(e) = self.query.validate() {
            errors.push(ValidationError::Query(e));
        }
        if let Err(e) = self.pipeline.validate() {
            errors.push(ValidationError::Pipeline(e));
        }

        if errors.is_empty() {
            Ok(())
        } else {
            Err(errors)
        }
    }
}
