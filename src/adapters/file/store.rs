//! Filesystem artifact store

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use crate::core::ports::ArtifactStore;
use crate::core::services::approved_counterpart;
use crate::error::{ApprovalError, Result};

/// Stores artifacts as plain files
#[derive(Debug, Clone, Copy, Default)]
pub struct FileArtifactStore;

impl FileArtifactStore {
    /// Create a filesystem store
    #[must_use]
    pub const fn new() -> Self {
        Self
    }

    /// Promote a received artifact to its approved counterpart
    ///
    /// Any previous baseline is replaced. Returns the approved path.
    ///
    /// # Errors
    ///
    /// Fails with [`ApprovalError::NotReceived`] if `received` does not
    /// name a received artifact, or with an I/O error if the rename fails.
    pub fn accept(&self, received: &Path) -> Result<PathBuf> {
        let approved = approved_counterpart(received)
            .ok_or_else(|| ApprovalError::NotReceived(received.to_path_buf()))?;
        fs::rename(received, &approved).map_err(|e| ApprovalError::io(received, e))?;
        log::info!("accepted {} as {}", received.display(), approved.display());
        Ok(approved)
    }
}

impl ArtifactStore for FileArtifactStore {
    fn write_received(&self, path: &Path, content: &[u8]) -> Result<()> {
        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent).map_err(|e| ApprovalError::io(parent, e))?;
        }
        fs::write(path, content).map_err(|e| ApprovalError::io(path, e))
    }

    fn exists(&self, path: &Path) -> Result<bool> {
        match fs::metadata(path) {
            Ok(metadata) => Ok(metadata.is_file()),
            Err(err) if err.kind() == io::ErrorKind::NotFound => Ok(false),
            Err(err) => Err(ApprovalError::io(path, err)),
        }
    }
}
