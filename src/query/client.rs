//! Query execution against the junction service.

use crate::config::QueryConfig;
use crate::error::QueryError;
use crate::frame::Frame;
use crate::query::parse::parse_junctions;
use crate::query::Query;
use async_trait::async_trait;
use reqwest::Client;
use std::time::Duration;
use tracing::{debug, info};

/// Executes a query and returns its raw frames in response order.
///
/// Failures are returned unchanged; executors do not retry or cache.
#[async_trait]
pub trait QueryExecutor: Send + Sync {
    async fn execute(&self, query: &Query) -> Result<Vec<Frame>, QueryError>;
}

fn map_http_error(error: reqwest::Error) -> QueryError {
    if let Some(status) = error.status() {
        QueryError::Status {
            status: status.as_u16(),
            body: error.to_string(),
        }
    } else if error.is_timeout() {
        QueryError::RequestFailed(format!("Request timeout: {}", error))
    } else if error.is_connect() {
        QueryError::RequestFailed(format!("Connection error: {}", error))
    } else {
        QueryError::RequestFailed(format!("HTTP error: {}", error))
    }
}

/// HTTP executor for a Snaptron compilation endpoint
pub struct SnaptronClient {
    client: Client,
    endpoint: String,
}

impl SnaptronClient {
    pub fn new(config: &QueryConfig) -> Result<Self, QueryError> {
        let client = Client::builder()
            .connect_timeout(Duration::from_secs(config.connect_timeout_secs))
            .timeout(Duration::from_secs(config.request_timeout_secs))
            .build()
            .map_err(|e| QueryError::RequestFailed(format!("Failed to create HTTP client: {}", e)))?;

        Ok(Self {
            client,
            endpoint: config.junction_endpoint(),
        })
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }
}

#[async_trait]
impl QueryExecutor for SnaptronClient {
    async fn execute(&self, query: &Query) -> Result<Vec<Frame>, QueryError> {
        let url = query.to_url(&self.endpoint)?;
        debug!(url = %url, "Executing junction query");

        let response = self.client.get(url).send().await.map_err(map_http_error)?;

        let status = response.status();
        if !status.is_success() {
            let body = response
                .text()
                .await
                .unwrap_or_else(|_| "Unknown error".to_string());
            return Err(QueryError::Status {
                status: status.as_u16(),
                body,
            });
        }

        let body = response.text().await.map_err(map_http_error)?;
        let frames = parse_junctions(&body)?;
        info!(frames = frames.len(), "Junction query returned");
        Ok(frames)
    }
}
