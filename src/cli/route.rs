//! CLI route: single route table and run context. Dispatches to the query
//! layer, the frame pipeline, and presentation.

use crate::cli::help::command_name;
use crate::cli::parse::{Combine, Commands, OutputFormat, PipelineArgs, RequestArgs};
use crate::cli::presentation::{format_frames_json, format_frames_text};
use crate::config::{ConfigLoader, PipelineConfig, SnapConfig};
use crate::error::{ApiError, QueryError};
use crate::frame::order_keys::SortSpec;
use crate::frame::{Frame, FrameFilter, Grouping, SortDirection, SortKey, Summary};
use crate::ops::{FilterTuple, OrderKey, StatFn};
use crate::pipeline::Pipeline;
use crate::query::{Query, QueryExecutor, SnaptronClient};
use std::path::PathBuf;
use std::time::Instant;
use tracing::{debug, info};

/// Runtime context for CLI execution: workspace and effective configuration.
pub struct RunContext {
    workspace_root: PathBuf,
    config: SnapConfig,
}

impl RunContext {
    /// Create run context from workspace root and optional config path. Uses ConfigLoader only.
    pub fn new(workspace_root: PathBuf, config_path: Option<PathBuf>) -> Result<Self, ApiError> {
        let config = if let Some(ref cfg_path) = config_path {
            ConfigLoader::load_from_file(cfg_path)?
        } else {
            ConfigLoader::load(&workspace_root)?
        };

        config.validate().map_err(|errors| {
            let error_msgs: Vec<String> = errors.iter().map(|e| e.to_string()).collect();
            ApiError::ConfigError(format!(
                "Configuration validation failed:\n{}",
                error_msgs.join("\n")
            ))
        })?;

        Ok(Self {
            workspace_root,
            config,
        })
    }

    pub fn config(&self) -> &SnapConfig {
        &self.config
    }

    /// Execute a CLI command via the single route table.
    pub fn execute(&self, command: &Commands) -> Result<String, ApiError> {
        let started = Instant::now();
        let name = command_name(command);
        debug!(command = name, workspace = %self.workspace_root.display(), "Executing command");

        let result = match command {
            Commands::Url { request } => build_queries(request).and_then(|queries| {
                let endpoint = self.config.query.junction_endpoint();
                let urls = queries
                    .iter()
                    .map(|q| q.to_url(&endpoint).map(|u| u.to_string()))
                    .collect::<Result<Vec<_>, QueryError>>()?;
                Ok(urls.join("\n"))
            }),
            Commands::Query { request, pipeline } => self.handle_query(request, pipeline),
            Commands::Config => serde_json::to_string_pretty(&self.config).map_err(|e| {
                ApiError::ConfigError(format!("Failed to serialize configuration: {}", e))
            }),
        };

        info!(
            command = name,
            ok = result.is_ok(),
            duration_ms = started.elapsed().as_millis() as u64,
            "Command finished"
        );
        result
    }

    fn handle_query(&self, request: &RequestArgs, args: &PipelineArgs) -> Result<String, ApiError> {
        let queries = build_queries(request)?;
        let plan = QueryPlan::resolve(args, &self.config.pipeline);
        let client = SnaptronClient::new(&self.config.query)?;

        let runtime = tokio::runtime::Runtime::new()
            .map_err(|e| ApiError::ConfigError(format!("Failed to create async runtime: {}", e)))?;
        let results = runtime.block_on(fetch_all(&client, &queries))?;

        let frames = plan.run(results)?;
        match args.format {
            OutputFormat::Json => format_frames_json(&frames),
            OutputFormat::Text => Ok(format_frames_text(&frames, plan.grouping)),
        }
    }
}

/// One query per region, each carrying the shared server-side filters.
pub fn build_queries(request: &RequestArgs) -> Result<Vec<Query>, ApiError> {
    request
        .regions
        .iter()
        .map(|region| {
            let mut query = Query::new().region(region.parse()?);
            query.filters = request.range_filters.clone();
            query.metadata = request.metadata_filters.clone();
            Ok(query)
        })
        .collect()
}

/// Execute queries in order; the first failure is returned unchanged.
pub async fn fetch_all(
    executor: &dyn QueryExecutor,
    queries: &[Query],
) -> Result<Vec<Vec<Frame>>, QueryError> {
    let mut results = Vec::with_capacity(queries.len());
    for query in queries {
        results.push(executor.execute(query).await?);
    }
    Ok(results)
}

fn or_default<T: Clone>(cli: &[T], config: &[T]) -> Vec<T> {
    if cli.is_empty() {
        config.to_vec()
    } else {
        cli.to_vec()
    }
}

/// Pipeline settings after merging command-line arguments over config defaults
#[derive(Debug, Clone)]
pub struct QueryPlan {
    pub grouping: Grouping,
    pub combine: Combine,
    pub filters: Vec<FrameFilter>,
    pub sort: Vec<SortSpec>,
    pub summaries: Vec<Summary>,
    pub limit: Option<usize>,
}

impl QueryPlan {
    /// Command-line values win; empty lists fall back to the configured ones.
    pub fn resolve(args: &PipelineArgs, defaults: &PipelineConfig) -> Self {
        Self {
            grouping: args.group_by.unwrap_or(defaults.grouping),
            combine: args.combine,
            filters: or_default(&args.filters, &defaults.filters),
            sort: or_default(&args.sort, &defaults.sort),
            summaries: or_default(&args.summaries, &defaults.summaries),
            limit: args.limit.or(defaults.limit),
        }
    }

    /// Sort key used when none is configured, so output and `limit` are stable
    fn identity_key(&self) -> SortKey {
        match self.grouping {
            Grouping::BySample => SortKey::SampleId,
            Grouping::ByJunction => SortKey::JunctionId,
        }
    }

    /// Combine per-region results, then filter, order, summarize and limit.
    pub fn run(&self, mut results: Vec<Vec<Frame>>) -> Result<Vec<Frame>, ApiError> {
        let first = if results.is_empty() {
            Vec::new()
        } else {
            results.remove(0)
        };

        let pipeline = Pipeline::new(&self.grouping, first);
        let pipeline = match self.combine {
            Combine::Union => pipeline.union(results)?,
            Combine::Intersect => pipeline.intersect(results)?,
            Combine::Bind => pipeline.bind(results).group_by()?,
        };

        let tuples: Vec<FilterTuple<'static, Frame>> =
            self.filters.iter().map(FrameFilter::to_tuple).collect();
        let keys: Vec<OrderKey<'static, Frame>> = if self.sort.is_empty() {
            vec![self.identity_key().to_order_key(SortDirection::Ascending)]
        } else {
            self.sort.iter().map(SortSpec::to_order_key).collect()
        };
        let stats: Vec<&StatFn<'static, Frame>> = self.summaries.iter().map(Summary::stat_fn).collect();

        let pipeline = pipeline.filter(&tuples).order(&keys).summarize(&stats)?;
        let pipeline = match self.limit {
            Some(limit) => pipeline.limit(limit),
            None => pipeline,
        };

        Ok(pipeline.into_frames())
    }
}
