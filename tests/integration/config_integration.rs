//! Integration tests for layered configuration loading

use snapframe::config::ConfigLoader;
use snapframe::frame::{FrameFilter, Grouping, Summary};
use tempfile::TempDir;

use crate::integration::test_utils::with_isolated_env;

fn workspace_with(temp: &TempDir, files: &[(&str, &str)]) -> std::path::PathBuf {
    let workspace = temp.path().join("workspace");
    std::fs::create_dir_all(workspace.join("config")).unwrap();
    for (name, body) in files {
        std::fs::write(workspace.join("config").join(name), body).unwrap();
    }
    workspace
}

#[test]
fn test_defaults_without_any_file() {
    let temp = TempDir::new().unwrap();
    let workspace = workspace_with(&temp, &[]);

    let config = with_isolated_env(&temp, || ConfigLoader::load(&workspace).unwrap());
    assert_eq!(config.query.endpoint, "http://snaptron.cs.jhu.edu");
    assert_eq!(config.pipeline.grouping, Grouping::BySample);
    assert!(config.pipeline.filters.is_empty());
    assert!(config.validate().is_ok());
}

#[test]
fn test_environment_specific_file_overrides_base_file() {
    let temp = TempDir::new().unwrap();
    let workspace = workspace_with(
        &temp,
        &[
            (
                "config.toml",
                "[query]\ncompilation = \"srav2\"\nrequest_timeout_secs = 60\n",
            ),
            ("staging.toml", "[query]\ncompilation = \"encode\"\n"),
        ],
    );

    let config = with_isolated_env(&temp, || {
        std::env::set_var("SNAPFRAME_ENV", "staging");
        ConfigLoader::load(&workspace).unwrap()
    });
    assert_eq!(config.query.compilation, "encode");
    assert_eq!(config.query.request_timeout_secs, 60);
}

#[test]
fn test_environment_variables_override_files() {
    let temp = TempDir::new().unwrap();
    let workspace = workspace_with(&temp, &[("config.toml", "[query]\ncompilation = \"gtex\"\n")]);

    let config = with_isolated_env(&temp, || {
        std::env::set_var("SNAPFRAME__QUERY__COMPILATION", "tcga");
        let loaded = ConfigLoader::load(&workspace);
        std::env::remove_var("SNAPFRAME__QUERY__COMPILATION");
        loaded.unwrap()
    });
    assert_eq!(config.query.compilation, "tcga");
}

#[test]
fn test_pipeline_defaults_from_file() {
    let temp = TempDir::new().unwrap();
    let workspace = workspace_with(
        &temp,
        &[(
            "config.toml",
            r#"
[pipeline]
grouping = "by_junction"
summaries = ["median", "samples"]

[[pipeline.filters]]
kind = "coverage_above"
value = 10

[[pipeline.filters]]
kind = "chromosome"
value = "chr21"

[[pipeline.sort]]
key = "coverage"
direction = "descending"
"#,
        )],
    );

    let config = with_isolated_env(&temp, || ConfigLoader::load(&workspace).unwrap());
    assert_eq!(config.pipeline.grouping, Grouping::ByJunction);
    assert_eq!(config.pipeline.summaries, vec![Summary::Median, Summary::Samples]);
    assert_eq!(
        config.pipeline.filters,
        vec![
            FrameFilter::CoverageAbove(10),
            FrameFilter::Chromosome("chr21".to_string())
        ]
    );
    assert_eq!(config.pipeline.sort.len(), 1);
}

#[test]
fn test_missing_explicit_file_is_an_error() {
    let temp = TempDir::new().unwrap();
    assert!(ConfigLoader::load_from_file(&temp.path().join("absent.toml")).is_err());
}
