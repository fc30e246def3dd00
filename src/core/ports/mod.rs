//! Port traits (interfaces) for external dependencies
//!
//! These traits define the boundaries between the core approval logic
//! and the outside world (the host test runner, the filesystem).
//!
//! Implementations live in the `adapters` module, except for
//! [`LifecycleListener`], which the tracker implements directly.

mod artifact_store;
mod comparer;
mod lifecycle;

pub use artifact_store::ArtifactStore;
pub use comparer::ContentComparer;
pub use lifecycle::LifecycleListener;
