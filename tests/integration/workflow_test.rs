//! End-to-end review workflow: library writes, CLI reviews and accepts

use approvals::scope;
use approvals::{Approvals, ResultKind};
use predicates::prelude::*;
use tempfile::TempDir;

use super::approvals as cli;

#[test]
fn test_review_cycle() {
    let temp = TempDir::new().unwrap();
    let source = temp.path().join("tests/report_test.rs");
    let verifier = Approvals::default();

    // First run: no baseline yet.
    {
        let test = scope::start_test(&source, "renders").unwrap();
        let _section = test.section("summary").unwrap();
        let result = verifier.verify("Total: 3\n").unwrap();
        assert_eq!(result.kind, ResultKind::NoBaseline);
    }

    cli()
        .arg("pending")
        .current_dir(temp.path())
        .assert()
        .code(1)
        .stdout(predicate::str::contains("report_test.renders.summary.received.txt"));

    cli()
        .args(["accept", "tests/report_test.renders.summary.received.txt"])
        .current_dir(temp.path())
        .assert()
        .success();

    // Second run: same output now matches.
    {
        let test = scope::start_test(&source, "renders").unwrap();
        let _section = test.section("summary").unwrap();
        let result = verifier.verify("Total: 3\r\n").unwrap();
        assert_eq!(result.kind, ResultKind::Match);
    }

    cli()
        .arg("pending")
        .current_dir(temp.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("1 matched"));
}
