//! CLI help: stable command names for logs.

use crate::cli::parse::Commands;

/// Stable name of a command, used as the `command` field of log events.
pub fn command_name(command: &Commands) -> &'static str {
    match command {
        Commands::Url { .. } => "url",
        Commands::Query { .. } => "query",
        Commands::Config => "config",
    }
}
