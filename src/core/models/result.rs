//! Comparison outcome reported back to the test runner

use std::fmt;
use std::path::PathBuf;

use serde::Serialize;

/// What a comparison concluded
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ResultKind {
    /// Received matches the approved artifact
    Match,
    /// Both artifacts exist but differ
    ContentMismatch,
    /// No approved artifact exists yet
    NoBaseline,
    /// An artifact could not be read or written
    IoError,
}

impl ResultKind {
    /// Stable identifier used in human and JSON output
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Match => "match",
            Self::ContentMismatch => "content_mismatch",
            Self::NoBaseline => "no_baseline",
            Self::IoError => "io_error",
        }
    }
}

impl fmt::Display for ResultKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Outcome of approving one received artifact
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ComparisonResult {
    /// Whether the received output is accepted
    pub equivalent: bool,

    /// Classification of the outcome
    pub kind: ResultKind,

    /// Human-readable detail for failures
    #[serde(skip_serializing_if = "Option::is_none")]
    pub diagnostic: Option<String>,

    /// Received artifact the result refers to
    pub received: PathBuf,

    /// Approved artifact the result refers to
    pub approved: PathBuf,
}

impl ComparisonResult {
    /// Received output matches the baseline
    #[must_use]
    pub const fn matched(received: PathBuf, approved: PathBuf) -> Self {
        Self {
            equivalent: true,
            kind: ResultKind::Match,
            diagnostic: None,
            received,
            approved,
        }
    }

    /// Received output differs from the baseline
    #[must_use]
    pub fn mismatch(received: PathBuf, approved: PathBuf) -> Self {
        let diagnostic = format!(
            "received {} does not match approved {}",
            received.display(),
            approved.display()
        );
        Self {
            equivalent: false,
            kind: ResultKind::ContentMismatch,
            diagnostic: Some(diagnostic),
            received,
            approved,
        }
    }

    /// No approved artifact exists yet
    #[must_use]
    pub fn no_baseline(received: PathBuf, approved: PathBuf) -> Self {
        let diagnostic = format!(
            "no approved file at {}; review {} and accept it to create the baseline",
            approved.display(),
            received.display()
        );
        Self {
            equivalent: false,
            kind: ResultKind::NoBaseline,
            diagnostic: Some(diagnostic),
            received,
            approved,
        }
    }

    /// An artifact could not be read or written
    #[must_use]
    pub fn io_error(received: PathBuf, approved: PathBuf, cause: impl fmt::Display) -> Self {
        Self {
            equivalent: false,
            kind: ResultKind::IoError,
            diagnostic: Some(cause.to_string()),
            received,
            approved,
        }
    }

    /// Whether the test should pass
    #[must_use]
    pub const fn passed(&self) -> bool {
        self.equivalent
    }
}

impl fmt::Display for ComparisonResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.diagnostic {
            Some(diagnostic) => write!(f, "{}: {diagnostic}", self.kind),
            None => write!(f, "{}: {}", self.kind, self.approved.display()),
        }
    }
}
