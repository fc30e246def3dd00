//! Content comparison port
//!
//! Defines how a received artifact is judged against its approved baseline.

use std::path::Path;

use crate::error::Result;

/// Decides whether two artifacts on disk are equivalent
///
/// Implementations read both files; they never modify them.
pub trait ContentComparer {
    /// Compare the received artifact against the approved one
    ///
    /// # Errors
    ///
    /// Returns [`ApprovalError::Io`](crate::error::ApprovalError::Io) if either
    /// path cannot be opened for reading.
    fn contents_equivalent(&self, received: &Path, approved: &Path) -> Result<bool>;
}

impl<C: ContentComparer + ?Sized> ContentComparer for &C {
    fn contents_equivalent(&self, received: &Path, approved: &Path) -> Result<bool> {
        (**self).contents_equivalent(received, approved)
    }
}
