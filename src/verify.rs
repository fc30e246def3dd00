//! Verification entry points for test code
//!
//! [`Approvals`] ties the configured namer, comparer and extension to the
//! test running on the current thread.
//!
//! # Examples
//!
//! ```no_run
//! use approvals::Approvals;
//!
//! #[test]
//! fn renders_invoice() {
//!     let _test = approvals::approval_test!().unwrap();
//!     Approvals::load().assert_approved("Total: 42\n");
//! }
//! ```

use std::fmt::Write as _;

use crate::adapters::compare::ComparisonStrategy;
use crate::adapters::file::FileArtifactStore;
use crate::config::ApprovalsConfig;
use crate::core::models::{ComparisonResult, TestContext};
use crate::core::services::{ApprovalEngine, Namer};
use crate::error::Result;
use crate::scope;

/// Verifies test output against approved artifacts
#[derive(Debug, Clone)]
pub struct Approvals {
    engine: ApprovalEngine<FileArtifactStore>,
    strategy: ComparisonStrategy,
    extension: String,
}

impl Default for Approvals {
    fn default() -> Self {
        Self::new(&ApprovalsConfig::default())
    }
}

impl Approvals {
    /// Build from an explicit configuration
    #[must_use]
    pub fn new(config: &ApprovalsConfig) -> Self {
        Self {
            engine: ApprovalEngine::new(config.namer(), FileArtifactStore::new()),
            strategy: config.comparer,
            extension: config.extension.clone(),
        }
    }

    /// Build from `approvals.toml` in the project root
    #[must_use]
    pub fn load() -> Self {
        Self::new(&ApprovalsConfig::load())
    }

    /// Use a different comparison strategy
    #[must_use]
    pub fn with_strategy(mut self, strategy: ComparisonStrategy) -> Self {
        self.strategy = strategy;
        self
    }

    /// The active comparison strategy
    #[must_use]
    pub const fn strategy(&self) -> ComparisonStrategy {
        self.strategy
    }

    /// The namer deriving artifact paths
    #[must_use]
    pub const fn namer(&self) -> &Namer {
        self.engine.namer()
    }

    /// Verify `content` for the test running on this thread
    ///
    /// # Errors
    ///
    /// Returns [`ApprovalError::NoActiveTest`](crate::error::ApprovalError::NoActiveTest)
    /// outside a test. Mismatches are reported in the returned result.
    pub fn verify(&self, content: impl AsRef<[u8]>) -> Result<ComparisonResult> {
        self.verify_with_extension(content, &self.extension)
    }

    /// Verify `content`, writing artifacts with `extension`
    pub fn verify_with_extension(
        &self,
        content: impl AsRef<[u8]>,
        extension: &str,
    ) -> Result<ComparisonResult> {
        let context = scope::current_context()?;
        Ok(self.verify_in(&context, content, extension))
    }

    /// Verify `content` for an explicit context, bypassing the thread's tracker
    pub fn verify_in(
        &self,
        context: &TestContext,
        content: impl AsRef<[u8]>,
        extension: &str,
    ) -> ComparisonResult {
        self.engine.approve(content.as_ref(), context, &self.strategy, extension)
    }

    /// Verify a header followed by one formatted line per item
    pub fn verify_all<T>(
        &self,
        header: &str,
        items: impl IntoIterator<Item = T>,
        formatter: impl Fn(&T) -> String,
    ) -> Result<ComparisonResult> {
        self.verify(format_all(header, items, formatter))
    }

    /// Verify `content` and panic unless it matches the approved artifact
    ///
    /// # Panics
    ///
    /// Panics outside a test, on a mismatch, on a missing baseline and on
    /// I/O failures; the message carries the result kind and diagnostic.
    #[track_caller]
    pub fn assert_approved(&self, content: impl AsRef<[u8]>) {
        let result = match self.verify(content) {
            Ok(result) => result,
            Err(err) => panic!("approval failed: {err}"),
        };
        assert!(result.passed(), "approval failed: {result}");
    }
}

/// Render items the way [`Approvals::verify_all`] does
///
/// A non-empty header is followed by two blank lines; each item becomes
/// `[index] = formatted`.
pub fn format_all<T>(
    header: &str,
    items: impl IntoIterator<Item = T>,
    formatter: impl Fn(&T) -> String,
) -> String {
    let mut out = String::new();
    if !header.is_empty() {
        out.push_str(header);
        out.push_str("\n\n\n");
    }
    for (index, item) in items.into_iter().enumerate() {
        let _ = writeln!(out, "[{index}] = {}", formatter(&item));
    }
    out
}
