//! Domain models for approvals
//!
//! Pure data structures with no I/O dependencies.
//!
//! - [`TestContext`] - Which test is running and which sections are open
//! - [`ComparisonResult`] - Outcome of comparing a received artifact
//! - [`ArtifactRole`] - Approved baseline or received output

mod context;
mod result;
mod role;

pub use context::{SectionStack, TestContext, TestIdentity};
pub use result::{ComparisonResult, ResultKind};
pub use role::ArtifactRole;
