//! Approval engine - writes received output and judges it against the baseline

use std::path::Path;

use crate::core::models::{ComparisonResult, TestContext};
use crate::core::ports::{ArtifactStore, ContentComparer};

use super::namer::Namer;

/// Orchestrates one approval: write, name, compare
#[derive(Debug, Clone, Default)]
pub struct ApprovalEngine<S> {
    namer: Namer,
    store: S,
}

impl<S: ArtifactStore> ApprovalEngine<S> {
    /// Create an engine from a namer and an artifact store
    pub const fn new(namer: Namer, store: S) -> Self {
        Self { namer, store }
    }

    /// The namer used to derive artifact paths
    pub const fn namer(&self) -> &Namer {
        &self.namer
    }

    /// Approve `content` produced by the test described by `context`
    ///
    /// The received artifact is written on every call, whether or not the
    /// comparison passes. A missing baseline is reported as
    /// [`ResultKind::NoBaseline`](crate::core::models::ResultKind::NoBaseline)
    /// rather than as a mismatch.
    pub fn approve(
        &self,
        content: &[u8],
        context: &TestContext,
        strategy: &impl ContentComparer,
        extension: &str,
    ) -> ComparisonResult {
        let paths = self.namer.derive_paths(context, extension);

        if let Err(err) = self.store.write_received(&paths.received, content) {
            log::warn!("could not write received artifact for {context}: {err}");
            return ComparisonResult::io_error(paths.received, paths.approved, err);
        }
        log::debug!("wrote {} byte(s) to {}", content.len(), paths.received.display());

        self.compare_artifacts(&paths.received, &paths.approved, strategy)
    }

    /// Compare two existing artifacts
    pub fn compare_artifacts(
        &self,
        received: &Path,
        approved: &Path,
        strategy: &impl ContentComparer,
    ) -> ComparisonResult {
        let (received_path, approved_path) = (received.to_path_buf(), approved.to_path_buf());

        match self.store.exists(approved) {
            Ok(true) => {},
            Ok(false) => {
                log::debug!("no baseline at {}", approved.display());
                return ComparisonResult::no_baseline(received_path, approved_path);
            },
            Err(err) => {
                log::warn!("could not look up baseline {}: {err}", approved.display());
                return ComparisonResult::io_error(received_path, approved_path, err);
            },
        }

        match strategy.contents_equivalent(received, approved) {
            Ok(true) => ComparisonResult::matched(received_path, approved_path),
            Ok(false) => ComparisonResult::mismatch(received_path, approved_path),
            Err(err) => ComparisonResult::io_error(received_path, approved_path, err),
        }
    }
}
