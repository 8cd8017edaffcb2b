//! CLI domain: parse, route, help, output, and presentation only.
//! Single route table dispatches to the query layer and the frame pipeline.

mod help;
mod output;
mod parse;
mod presentation;
mod route;

pub use help::command_name;
pub use output::map_error;
pub use parse::{Cli, Combine, Commands, OutputFormat, PipelineArgs, RequestArgs};
pub use presentation::{format_frames_json, format_frames_text};
pub use route::{build_queries, fetch_all, QueryPlan, RunContext};
