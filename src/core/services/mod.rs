//! Approval services
//!
//! - [`tracker`] - Follow the runner's lifecycle callbacks
//! - [`namer`] - Derive artifact paths from a test context
//! - [`engine`] - Write received output and compare it with the baseline
//!
//! The tracker and namer are pure; the engine reaches the filesystem only
//! through the port traits.

pub mod engine;
pub mod namer;
pub mod tracker;

pub use engine::ApprovalEngine;
pub use namer::{ArtifactPaths, Namer, approved_counterpart, is_received_artifact};
pub use tracker::TestContextTracker;
