//! Output formatting for human and JSON modes
//!
//! This module provides structured output that can be rendered either as
//! human-readable text or machine-parseable JSON.

use std::path::PathBuf;

use colored::Colorize;
use serde::Serialize;

use crate::core::models::{ComparisonResult, ResultKind};

/// Output mode for the CLI
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputMode {
    /// Human-readable output (default)
    #[default]
    Human,
    /// JSON output (machine-readable)
    Json,
}

/// Status tag shown in front of a result
fn status_tag(kind: ResultKind) -> String {
    match kind {
        ResultKind::Match => "PASS".green().to_string(),
        ResultKind::ContentMismatch => "FAIL".red().to_string(),
        ResultKind::NoBaseline => "NEW".yellow().to_string(),
        ResultKind::IoError => "ERROR".red().bold().to_string(),
    }
}

/// Result of comparing one pair of artifacts
#[derive(Debug, Serialize)]
pub struct CompareReport {
    /// Strategy used for the comparison
    pub strategy: String,
    /// The comparison outcome
    pub result: ComparisonResult,
}

impl CompareReport {
    /// Render the result based on output mode
    pub fn render(&self, mode: OutputMode) {
        match mode {
            OutputMode::Human => self.render_human(),
            OutputMode::Json => self.render_json(),
        }
    }

    fn render_human(&self) {
        println!("[{}] {}", status_tag(self.result.kind), self.result.received.display());
        println!("        approved: {}", self.result.approved.display());
        println!("        strategy: {}", self.strategy);
        if let Some(diagnostic) = &self.result.diagnostic {
            println!("        {diagnostic}");
        }
    }

    fn render_json(&self) {
        println!("{}", serde_json::to_string_pretty(self).unwrap_or_default());
    }
}

/// Result of scanning a directory for received artifacts
#[derive(Debug, Serialize)]
pub struct PendingReport {
    /// Directory that was scanned
    pub root: PathBuf,
    /// Number of received artifacts found
    pub total: usize,
    /// One result per received artifact, sorted by path
    pub results: Vec<ComparisonResult>,
}

impl PendingReport {
    /// Whether every received artifact matches its baseline
    #[must_use]
    pub fn all_passed(&self) -> bool {
        self.results.iter().all(ComparisonResult::passed)
    }

    /// Number of artifacts with the given outcome
    #[must_use]
    pub fn count(&self, kind: ResultKind) -> usize {
        self.results.iter().filter(|r| r.kind == kind).count()
    }

    /// Render the result based on output mode
    pub fn render(&self, mode: OutputMode) {
        match mode {
            OutputMode::Human => self.render_human(),
            OutputMode::Json => self.render_json(),
        }
    }

    fn render_human(&self) {
        if self.results.is_empty() {
            println!("No received artifacts under {}.", self.root.display());
            return;
        }

        println!("Found {} received artifact(s) under {}\n", self.total, self.root.display());
        for result in &self.results {
            println!("  [{}] {}", status_tag(result.kind), result.received.display());
            if let Some(diagnostic) = &result.diagnostic {
                println!("          {diagnostic}");
            }
        }

        println!(
            "\n{} matched, {} mismatched, {} new, {} error(s)",
            self.count(ResultKind::Match),
            self.count(ResultKind::ContentMismatch),
            self.count(ResultKind::NoBaseline),
            self.count(ResultKind::IoError)
        );
        if !self.all_passed() {
            println!("To accept: approvals accept <received-file>...");
        }
    }

    fn render_json(&self) {
        println!("{}", serde_json::to_string_pretty(self).unwrap_or_default());
    }
}

/// Result of accepting received artifacts
#[derive(Debug, Serialize)]
pub struct AcceptReport {
    /// Approved artifacts that were written
    pub accepted: Vec<PathBuf>,
    /// Paths that could not be accepted, with the reason
    pub failed: Vec<AcceptFailure>,
}

/// A received artifact that could not be accepted
#[derive(Debug, Serialize)]
pub struct AcceptFailure {
    /// The path given on the command line
    pub path: PathBuf,
    /// Why it failed
    pub reason: String,
}

impl AcceptReport {
    /// Render the result based on output mode
    pub fn render(&self, mode: OutputMode) {
        match mode {
            OutputMode::Human => {
                for path in &self.accepted {
                    println!("Accepted: {}", path.display());
                }
                for failure in &self.failed {
                    println!("Failed to accept {}: {}", failure.path.display(), failure.reason);
                }
            },
            OutputMode::Json => {
                println!("{}", serde_json::to_string_pretty(self).unwrap_or_default());
            },
        }
    }
}

/// Generic operation result for simple commands
#[derive(Debug, Serialize)]
pub struct OperationResult {
    /// Whether the operation succeeded
    pub success: bool,
    /// Human-readable message
    pub message: String,
}

impl OperationResult {
    /// Render the result based on output mode
    pub fn render(&self, mode: OutputMode) {
        match mode {
            OutputMode::Human => println!("{}", self.message),
            OutputMode::Json => {
                println!("{}", serde_json::to_string_pretty(self).unwrap_or_default());
            },
        }
    }
}
