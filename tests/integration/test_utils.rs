//! Shared test utilities for integration tests
//!
//! Provides environment isolation for config loading and a fixture builder
//! for junction response bodies.

use std::sync::Mutex;
use tempfile::TempDir;

/// Global mutex to serialize environment variable access across all tests
static ENV_MUTEX: Mutex<()> = Mutex::new(());

const ISOLATED_VARS: [&str; 3] = ["HOME", "XDG_CONFIG_HOME", "SNAPFRAME_ENV"];

/// Environment variable state to restore after test
struct EnvState(Vec<(&'static str, Option<String>)>);

impl EnvState {
    fn capture() -> Self {
        Self(
            ISOLATED_VARS
                .iter()
                .map(|var| (*var, std::env::var(var).ok()))
                .collect(),
        )
    }

    fn restore(self) {
        for (var, value) in self.0 {
            match value {
                Some(v) => std::env::set_var(var, v),
                None => std::env::remove_var(var),
            }
        }
    }
}

/// Run `f` with HOME pointed into `test_dir` and no XDG or SNAPFRAME_ENV overrides.
///
/// The global config file, if a test needs one, lives at
/// `{test_dir}/home/.config/snapframe/config.toml`.
pub fn with_isolated_env<F, R>(test_dir: &TempDir, f: F) -> R
where
    F: FnOnce() -> R,
{
    let _guard = ENV_MUTEX.lock().unwrap_or_else(|e| e.into_inner());
    let env_state = EnvState::capture();

    let test_home = test_dir.path().join("home");
    std::fs::create_dir_all(&test_home).unwrap();
    std::env::set_var("HOME", test_home.to_str().unwrap());
    std::env::remove_var("XDG_CONFIG_HOME");
    std::env::remove_var("SNAPFRAME_ENV");

    let result = f();

    env_state.restore();
    result
}

pub const HEADER: &str = "DataSource:Type\tsnaptron_id\tchromosome\tstart\tend\tlength\tstrand\tannotated\tleft_motif\tright_motif\tleft_annotated\tright_annotated\tsamples\tsamples_count\tcoverage_sum\tcoverage_avg\tcoverage_median\tsource_dataset_id";

/// One junction row; `samples` is `(sample_id, coverage)` pairs.
pub fn junction_row(id: u64, chromosome: &str, start: u64, end: u64, samples: &[(u64, u64)]) -> String {
    let encoded: String = samples
        .iter()
        .map(|(sid, cov)| format!(",{}:{}", sid, cov))
        .collect();
    let coverage_sum: u64 = samples.iter().map(|(_, cov)| cov).sum();
    format!(
        "I\t{}\t{}\t{}\t{}\t{}\t+\t0\tGT\tAG\t0\t0\t{}\t{}\t{}\t0\t0\t0",
        id,
        chromosome,
        start,
        end,
        end - start + 1,
        encoded,
        samples.len(),
        coverage_sum
    )
}

/// A full response body: header followed by the given rows.
pub fn response_body(rows: &[String]) -> String {
    let mut body = String::from(HEADER);
    for row in rows {
        body.push('\n');
        body.push_str(row);
    }
    body.push('\n');
    body
}
