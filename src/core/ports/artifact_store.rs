//! Artifact store port
//!
//! Defines where received output is written and how baselines are located.

use std::path::Path;

use crate::error::Result;

/// Storage for approval artifacts
///
/// The engine writes received output through this trait so tests can
/// substitute failing or in-memory stores.
pub trait ArtifactStore {
    /// Write the received artifact, replacing any previous content
    fn write_received(&self, path: &Path, content: &[u8]) -> Result<()>;

    /// Whether an artifact exists at `path`
    ///
    /// A missing file is `Ok(false)`; any other failure to look it up is an
    /// error.
    fn exists(&self, path: &Path) -> Result<bool>;
}
