//! CLI routing tests that do not contact the junction service

use clap::Parser;
use snapframe::cli::{map_error, Cli, RunContext};
use snapframe::{ApiError, QueryError};
use tempfile::TempDir;

use crate::integration::test_utils::with_isolated_env;

fn write_config(dir: &TempDir, body: &str) -> std::path::PathBuf {
    let path = dir.path().join("snapframe.toml");
    std::fs::write(&path, body).unwrap();
    path
}

#[test]
fn test_url_command_prints_one_url_per_region() {
    let temp = TempDir::new().unwrap();
    let config = write_config(
        &temp,
        "[query]\nendpoint = \"http://localhost:8090\"\ncompilation = \"gtex\"\n",
    );

    let cli = Cli::try_parse_from([
        "snapframe",
        "url",
        "--region",
        "CD99",
        "--region",
        "chrX:1-2,000",
        "--rfilter",
        "samples_count>:5",
    ])
    .unwrap();

    let context = RunContext::new(temp.path().to_path_buf(), Some(config)).unwrap();
    let output = context.execute(&cli.command).unwrap();
    let lines: Vec<&str> = output.lines().collect();

    assert_eq!(lines.len(), 2);
    assert!(lines[0].starts_with("http://localhost:8090/gtex/snaptron?regions=CD99"));
    assert!(lines[0].contains("rfilter=samples_count%3E%3A5"));
    assert!(lines[1].contains("regions=chrX%3A1-2000"));
}

#[test]
fn test_url_command_rejects_inverted_interval() {
    let temp = TempDir::new().unwrap();
    let config = write_config(&temp, "");
    let cli = Cli::try_parse_from(["snapframe", "url", "--region", "chr1:500-100"]).unwrap();

    let context = RunContext::new(temp.path().to_path_buf(), Some(config)).unwrap();
    let err = context.execute(&cli.command).unwrap_err();
    assert!(matches!(err, ApiError::Query(QueryError::InvalidParameter(_))));
}

#[test]
fn test_config_command_shows_workspace_overrides() {
    let temp = TempDir::new().unwrap();
    let workspace = temp.path().join("ws");
    std::fs::create_dir_all(workspace.join("config")).unwrap();
    std::fs::write(
        workspace.join("config").join("config.toml"),
        "[pipeline]\ngrouping = \"by_junction\"\nlimit = 3\n",
    )
    .unwrap();

    let output = with_isolated_env(&temp, || {
        let context = RunContext::new(workspace.clone(), None).unwrap();
        let cli = Cli::try_parse_from(["snapframe", "config"]).unwrap();
        context.execute(&cli.command).unwrap()
    });

    let json: serde_json::Value = serde_json::from_str(&output).unwrap();
    assert_eq!(json["pipeline"]["grouping"], "by_junction");
    assert_eq!(json["pipeline"]["limit"], 3);
    assert_eq!(json["query"]["compilation"], "srav2");
}

#[test]
fn test_invalid_config_is_rejected_at_startup() {
    let temp = TempDir::new().unwrap();
    let config = write_config(&temp, "[pipeline]\nlimit = 0\n");

    let err = RunContext::new(temp.path().to_path_buf(), Some(config))
        .err()
        .unwrap();
    assert!(map_error(&err).contains("Configuration validation failed"));
}

#[test]
fn test_query_requires_region_argument() {
    assert!(Cli::try_parse_from(["snapframe", "query"]).is_err());
}

#[test]
fn test_missing_region_message() {
    let message = map_error(&ApiError::Query(QueryError::MissingRegion));
    assert!(message.contains("--region"));
}
