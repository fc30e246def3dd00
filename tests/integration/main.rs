//! Integration tests for the approvals CLI
//!
//! These tests run the binary against artifact trees in temporary
//! directories, covering the review cycle: pending → accept → pending.

mod workflow_test;

use assert_cmd::cargo;
use predicates::prelude::*;
use std::fs;
use std::path::Path;
use tempfile::TempDir;

/// Helper function to create an approvals command
fn approvals() -> assert_cmd::Command {
    assert_cmd::Command::new(cargo::cargo_bin!("approvals"))
}

/// Helper to write a file, creating parent directories
fn write(root: &Path, name: &str, content: &str) {
    let path = root.join(name);
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).unwrap();
    }
    fs::write(path, content).unwrap();
}

// =============================================================================
// COMPARE
// =============================================================================

#[test]
fn test_compare_matching_files() {
    let temp = TempDir::new().unwrap();
    write(temp.path(), "t.case.received.txt", "hello\r\n");
    write(temp.path(), "t.case.approved.txt", "hello\n");

    approvals()
        .args(["compare", "t.case.received.txt", "t.case.approved.txt"])
        .current_dir(temp.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("PASS"))
        .stdout(predicate::str::contains("normalized-text"));
}

#[test]
fn test_compare_exact_strategy_rejects_crlf() {
    let temp = TempDir::new().unwrap();
    write(temp.path(), "t.case.received.txt", "hello\r\n");
    write(temp.path(), "t.case.approved.txt", "hello\n");

    approvals()
        .args(["compare", "t.case.received.txt", "t.case.approved.txt", "--strategy", "exact"])
        .current_dir(temp.path())
        .assert()
        .code(1)
        .stdout(predicate::str::contains("FAIL"));
}

#[test]
fn test_compare_uses_configured_strategy() {
    let temp = TempDir::new().unwrap();
    write(temp.path(), "approvals.toml", "comparer = \"exact\"\n");
    write(temp.path(), "t.case.received.txt", "abcd");
    write(temp.path(), "t.case.approved.txt", "abc");

    approvals()
        .args(["compare", "t.case.received.txt", "t.case.approved.txt"])
        .current_dir(temp.path())
        .assert()
        .code(1)
        .stdout(predicate::str::contains("strategy: exact"));
}

#[test]
fn test_compare_missing_baseline() {
    let temp = TempDir::new().unwrap();
    write(temp.path(), "t.case.received.txt", "new");

    approvals()
        .args(["compare", "t.case.received.txt", "t.case.approved.txt"])
        .current_dir(temp.path())
        .assert()
        .code(1)
        .stdout(predicate::str::contains("NEW"));
}

#[test]
fn test_compare_json_output() {
    let temp = TempDir::new().unwrap();
    write(temp.path(), "t.case.received.txt", "hello\nfoo\n");
    write(temp.path(), "t.case.approved.txt", "hello\nworld\n");

    let output = approvals()
        .args(["--json", "compare", "t.case.received.txt", "t.case.approved.txt"])
        .current_dir(temp.path())
        .output()
        .unwrap();

    assert_eq!(output.status.code(), Some(1));
    let json: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(json["strategy"], "normalized-text");
    assert_eq!(json["result"]["kind"], "content_mismatch");
    assert_eq!(json["result"]["equivalent"], false);
}

#[test]
fn test_compare_unknown_strategy_is_an_error() {
    let temp = TempDir::new().unwrap();

    approvals()
        .args(["compare", "a", "b", "--strategy", "fuzzy"])
        .current_dir(temp.path())
        .assert()
        .code(2)
        .stderr(predicate::str::contains("unknown comparison strategy"));
}

// =============================================================================
// PENDING
// =============================================================================

#[test]
fn test_pending_empty_tree() {
    let temp = TempDir::new().unwrap();
    write(temp.path(), "src/lib.rs", "");

    approvals()
        .arg("pending")
        .current_dir(temp.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("No received artifacts"));
}

#[test]
fn test_pending_lists_each_outcome() {
    let temp = TempDir::new().unwrap();
    write(temp.path(), "tests/a.same.received.txt", "x");
    write(temp.path(), "tests/a.same.approved.txt", "x");
    write(temp.path(), "tests/a.changed.received.txt", "new");
    write(temp.path(), "tests/a.changed.approved.txt", "old");
    write(temp.path(), "tests/deep/b.fresh.received.txt", "first");

    approvals()
        .arg("pending")
        .current_dir(temp.path())
        .assert()
        .code(1)
        .stdout(predicate::str::contains("Found 3 received artifact(s)"))
        .stdout(predicate::str::contains("1 matched, 1 mismatched, 1 new, 0 error(s)"));
}

#[test]
fn test_pending_skips_target_dir() {
    let temp = TempDir::new().unwrap();
    write(temp.path(), "target/debug/a.t.received.txt", "build output");

    approvals()
        .arg("pending")
        .current_dir(temp.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("No received artifacts"));
}

#[test]
fn test_pending_filter() {
    let temp = TempDir::new().unwrap();
    write(temp.path(), "report.t.received.txt", "x");
    write(temp.path(), "report.t.approved.txt", "x");
    write(temp.path(), "other.t.received.txt", "new");

    approvals()
        .args(["pending", "--filter", "report.*"])
        .current_dir(temp.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("Found 1 received artifact(s)"));
}

#[test]
fn test_pending_json_output() {
    let temp = TempDir::new().unwrap();
    write(temp.path(), "a.t.received.txt", "x");

    let output = approvals()
        .args(["pending", "--json"])
        .current_dir(temp.path())
        .output()
        .unwrap();

    let json: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(json["total"], 1);
    assert_eq!(json["results"][0]["kind"], "no_baseline");
}

// =============================================================================
// ACCEPT
// =============================================================================

#[test]
fn test_accept_promotes_received() {
    let temp = TempDir::new().unwrap();
    write(temp.path(), "a.t.received.txt", "approved now");

    approvals()
        .args(["accept", "a.t.received.txt"])
        .current_dir(temp.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("Accepted: a.t.approved.txt"));

    assert_eq!(fs::read_to_string(temp.path().join("a.t.approved.txt")).unwrap(), "approved now");
    assert!(!temp.path().join("a.t.received.txt").exists());
}

#[test]
fn test_accept_rejects_other_files() {
    let temp = TempDir::new().unwrap();
    write(temp.path(), "notes.txt", "keep me");

    approvals()
        .args(["accept", "notes.txt"])
        .current_dir(temp.path())
        .assert()
        .code(1)
        .stdout(predicate::str::contains("not a received artifact"));

    assert!(temp.path().join("notes.txt").exists());
}

#[test]
fn test_accept_requires_a_path() {
    approvals().arg("accept").assert().failure();
}

// =============================================================================
// INIT / VERSION
// =============================================================================

#[test]
fn test_init_writes_config_once() {
    let temp = TempDir::new().unwrap();

    approvals()
        .arg("init")
        .current_dir(temp.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("Created approvals.toml"));

    let content = fs::read_to_string(temp.path().join("approvals.toml")).unwrap();
    assert!(content.contains("comparer = \"normalized-text\""));

    approvals()
        .arg("init")
        .current_dir(temp.path())
        .assert()
        .code(1)
        .stdout(predicate::str::contains("Already initialized"));

    approvals().args(["init", "--force"]).current_dir(temp.path()).assert().success();
}

#[test]
fn test_version() {
    approvals()
        .arg("version")
        .assert()
        .success()
        .stdout(predicate::str::contains(env!("CARGO_PKG_VERSION")));
}

#[test]
fn test_no_subcommand_prints_hint() {
    approvals().assert().success().stdout(predicate::str::contains("--help"));
}
