//! CLI parse: clap types for snapframe. No behavior; definitions only.

use crate::frame::order_keys::SortSpec;
use crate::frame::{FrameFilter, Grouping, Summary};
use crate::query::{MetadataFilter, RangeFilter};
use clap::{Args, Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

/// Snapframe CLI - query splice junctions and combine the results
#[derive(Parser)]
#[command(name = "snapframe")]
#[command(about = "Query splice junctions and combine results with relational operations")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Workspace root directory (where config/ is looked up)
    #[arg(long, default_value = ".")]
    pub workspace: PathBuf,

    /// Configuration file path (overrides default config loading)
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Enable verbose logging
    #[arg(long, default_value = "false")]
    pub verbose: bool,

    /// Disable logging entirely
    #[arg(long, default_value = "false")]
    pub quiet: bool,

    /// Log level (trace, debug, info, warn, error, off)
    #[arg(long)]
    pub log_level: Option<String>,

    /// Log format (json, text)
    #[arg(long)]
    pub log_format: Option<String>,

    /// Log output (stdout, stderr, file)
    #[arg(long)]
    pub log_output: Option<String>,

    /// Log file path (if output is "file")
    #[arg(long)]
    pub log_file: Option<PathBuf>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Print the request URL for each region without contacting the service
    Url {
        #[command(flatten)]
        request: RequestArgs,
    },
    /// Run queries and combine their frames
    Query {
        #[command(flatten)]
        request: RequestArgs,

        #[command(flatten)]
        pipeline: PipelineArgs,
    },
    /// Print the effective configuration
    Config,
}

/// What to retrieve: one query per region, sharing the server-side filters
#[derive(Args, Debug, Clone)]
pub struct RequestArgs {
    /// Region to query: gene symbol or chrom:start-end (repeatable)
    #[arg(long = "region", required = true)]
    pub regions: Vec<String>,

    /// Server-side junction filter, e.g. samples_count>:5 (repeatable)
    #[arg(long = "rfilter")]
    pub range_filters: Vec<RangeFilter>,

    /// Server-side sample metadata filter, e.g. description:cortex (repeatable)
    #[arg(long = "sfilter")]
    pub metadata_filters: Vec<MetadataFilter>,
}

/// How the retrieved frames are combined and shaped
#[derive(Args, Debug, Clone)]
pub struct PipelineArgs {
    /// Grouping strategy (defaults to the configured one)
    #[arg(long, value_enum)]
    pub group_by: Option<Grouping>,

    /// How results of several regions are combined
    #[arg(long, value_enum, default_value = "union")]
    pub combine: Combine,

    /// Local frame filter, e.g. coverage>5, samples>=2, strand=+ (repeatable)
    #[arg(long = "filter")]
    pub filters: Vec<FrameFilter>,

    /// Sort key, e.g. coverage:desc, location, stat=count_mean:desc (repeatable)
    #[arg(long = "sort")]
    pub sort: Vec<SortSpec>,

    /// Summary statistic to compute (repeatable)
    #[arg(long = "summary", value_enum)]
    pub summaries: Vec<Summary>,

    /// Maximum number of frames to print
    #[arg(long)]
    pub limit: Option<usize>,

    /// Output format
    #[arg(long, value_enum, default_value = "text")]
    pub format: OutputFormat,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Combine {
    /// Every identity seen in any region
    Union,
    /// Only identities seen in every region
    Intersect,
    /// Concatenate, then group
    Bind,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    Text,
    Json,
}
