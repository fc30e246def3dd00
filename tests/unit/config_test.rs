//! Tests for approvals.toml loading

use std::path::{Path, PathBuf};

use approvals::{ApprovalError, ApprovalsConfig, ComparisonStrategy};
use serial_test::serial;

use crate::common::ArtifactDir;

#[test]
fn test_defaults() {
    let config = ApprovalsConfig::default();
    assert_eq!(config.comparer, ComparisonStrategy::NormalizedText);
    assert_eq!(config.extension, "txt");
    assert_eq!(config.subdirectory, None);
}

#[test]
fn test_parse_all_keys() {
    let config = ApprovalsConfig::parse(
        "comparer = \"exact\"\nextension = \"json\"\nsubdirectory = \"approved\"\n",
        Path::new("approvals.toml"),
    )
    .unwrap();
    assert_eq!(config.comparer, ComparisonStrategy::Exact);
    assert_eq!(config.extension, "json");
    assert_eq!(config.subdirectory, Some(PathBuf::from("approved")));
}

#[test]
fn test_parse_empty_uses_defaults() {
    let config = ApprovalsConfig::parse("", Path::new("approvals.toml")).unwrap();
    assert_eq!(config, ApprovalsConfig::default());
}

#[test]
fn test_parse_unknown_comparer_fails() {
    let err = ApprovalsConfig::parse("comparer = \"fuzzy\"", Path::new("x/approvals.toml"))
        .unwrap_err();
    assert!(matches!(
        err,
        ApprovalError::Config { ref path, .. } if path.ends_with("approvals.toml")
    ));
}

#[test]
fn test_load_from_missing_file() {
    let dir = ArtifactDir::new();
    assert_eq!(ApprovalsConfig::load_from(dir.path()).unwrap(), ApprovalsConfig::default());
}

#[test]
fn test_save_then_load() {
    let dir = ArtifactDir::new();
    let config = ApprovalsConfig {
        comparer: ComparisonStrategy::Exact,
        extension: "md".to_string(),
        subdirectory: Some(PathBuf::from("snapshots")),
    };

    let path = config.save_to(dir.path()).unwrap();
    assert_eq!(path, dir.file("approvals.toml"));
    assert_eq!(ApprovalsConfig::load_from(dir.path()).unwrap(), config);
}

#[test]
fn test_namer_honors_subdirectory() {
    let config = ApprovalsConfig {
        subdirectory: Some(PathBuf::from("snapshots")),
        ..ApprovalsConfig::default()
    };
    let ctx = crate::common::context("tests/a_test.rs", "t", &[]);
    assert_eq!(config.namer().directory(&ctx), PathBuf::from("tests/snapshots"));
}

#[test]
#[serial(cwd)]
fn test_load_reads_current_directory() {
    let dir = ArtifactDir::new();
    dir.write("approvals.toml", "extension = \"log\"\n");

    let original = std::env::current_dir().unwrap();
    std::env::set_current_dir(dir.path()).unwrap();
    let config = ApprovalsConfig::load();
    std::env::set_current_dir(original).unwrap();

    assert_eq!(config.extension, "log");
}

#[test]
#[serial(cwd)]
fn test_load_falls_back_on_invalid_file() {
    let dir = ArtifactDir::new();
    dir.write("approvals.toml", "comparer = [not toml");

    let original = std::env::current_dir().unwrap();
    std::env::set_current_dir(dir.path()).unwrap();
    let config = ApprovalsConfig::load();
    std::env::set_current_dir(original).unwrap();

    assert_eq!(config, ApprovalsConfig::default());
}
