//! File-based artifact storage
//!
//! Implements `ArtifactStore` on the local filesystem.

mod store;

pub use store::FileArtifactStore;
