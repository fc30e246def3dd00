//! Tests for the exact and normalized-text comparers

use approvals::core::ports::ContentComparer;
use approvals::{ApprovalError, ComparisonStrategy, ExactByteComparer, NormalizedTextComparer};
use test_case::test_case;

use crate::common::ArtifactDir;

fn compare(comparer: &impl ContentComparer, received: &[u8], approved: &[u8]) -> bool {
    let dir = ArtifactDir::new();
    let r = dir.write("t.case.received.txt", received);
    let a = dir.write("t.case.approved.txt", approved);
    comparer.contents_equivalent(&r, &a).unwrap()
}

// =============================================================================
// Normalized text
// =============================================================================

#[test_case(b"line1\r\nline2\r\n", b"line1\nline2\n", true ; "crlf matches lf")]
#[test_case(b"line1\nline2\n", b"line1\r\nline2\r\n", true ; "lf matches crlf")]
#[test_case(b"hello\n", b"hello\n", true ; "identical")]
#[test_case(b"hello\n", b"hellO\n", false ; "single byte differs")]
#[test_case(b"a\rX", b"aX", true ; "lone carriage return is skipped")]
#[test_case(b"\r\rz", b"\rz", false ; "second carriage return is compared")]
#[test_case(b"", b"", true ; "both empty")]
fn test_normalized(received: &[u8], approved: &[u8], expected: bool) {
    assert_eq!(compare(&NormalizedTextComparer, received, approved), expected);
}

#[test]
fn test_normalized_stops_at_shorter_stream() {
    assert!(compare(&NormalizedTextComparer, b"abc", b"abcd"));
    assert!(compare(&NormalizedTextComparer, b"abcd", b"abc"));
    assert!(compare(&NormalizedTextComparer, b"", b"anything"));
}

#[test]
fn test_normalized_trailing_carriage_return_ends_stream() {
    // "\r" at the end of a stream consumes the end marker.
    assert!(compare(&NormalizedTextComparer, b"abc\r", b"abcd"));
}

#[test]
fn test_normalized_missing_file_is_an_error() {
    let dir = ArtifactDir::new();
    let a = dir.write("t.case.approved.txt", "x");
    let err = NormalizedTextComparer
        .contents_equivalent(&dir.file("t.case.received.txt"), &a)
        .unwrap_err();
    assert!(matches!(err, ApprovalError::Io { .. }));
}

// =============================================================================
// Exact bytes
// =============================================================================

#[test_case(b"same", b"same", true ; "identical")]
#[test_case(b"line\r\n", b"line\n", false ; "crlf differs")]
#[test_case(b"abc", b"abcd", false ; "length differs")]
#[test_case(b"", b"", true ; "both empty")]
fn test_exact(received: &[u8], approved: &[u8], expected: bool) {
    assert_eq!(compare(&ExactByteComparer, received, approved), expected);
}

#[test]
fn test_exact_missing_file_is_an_error() {
    let dir = ArtifactDir::new();
    let r = dir.write("t.case.received.txt", "x");
    let result = ExactByteComparer.contents_equivalent(&r, &dir.file("missing.approved.txt"));
    assert!(matches!(result, Err(ApprovalError::Io { .. })));
}

// =============================================================================
// Strategy selection
// =============================================================================

#[test_case("exact", ComparisonStrategy::Exact ; "exact")]
#[test_case("bytes", ComparisonStrategy::Exact ; "bytes alias")]
#[test_case("normalized-text", ComparisonStrategy::NormalizedText ; "normalized text")]
#[test_case("Normalized", ComparisonStrategy::NormalizedText ; "case insensitive")]
#[test_case("text", ComparisonStrategy::NormalizedText ; "text alias")]
fn test_strategy_from_str(input: &str, expected: ComparisonStrategy) {
    assert_eq!(input.parse::<ComparisonStrategy>().unwrap(), expected);
}

#[test]
fn test_strategy_rejects_unknown_name() {
    let err = "fuzzy".parse::<ComparisonStrategy>().unwrap_err();
    assert!(matches!(err, ApprovalError::UnknownStrategy(name) if name == "fuzzy"));
}

#[test]
fn test_strategy_dispatches() {
    assert!(compare(&ComparisonStrategy::NormalizedText, b"x\r\n", b"x\n"));
    assert!(!compare(&ComparisonStrategy::Exact, b"x\r\n", b"x\n"));
    assert_eq!(ComparisonStrategy::default(), ComparisonStrategy::NormalizedText);
}
