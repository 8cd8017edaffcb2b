//! Merge rules: defaults, override order, conflict handling.

use config::Config;
use config::ConfigBuilder;
use config::ConfigError;

/// Create a Config builder with merge policy defaults applied.
///
/// Later sources override these per key, so a file that only sets
/// `query.compilation` keeps the default endpoint and timeouts.
pub fn builder_with_defaults() -> Result<ConfigBuilder<config::builder::DefaultState>, ConfigError>
{
    Config::builder()
        .set_default("query.endpoint", "http://snaptron.cs.jhu.edu")?
        .set_default("query.compilation", "srav2")?
        .set_default("query.connect_timeout_secs", 10)?
        .set_default("query.request_timeout_secs", 120)?
        .set_default("pipeline.grouping", "by_sample")
}
