//! approvals - approval (golden master) testing
//!
//! A test produces output; the output is written next to the test as a
//! *received* artifact and compared against the reviewed *approved* artifact
//! with the same name. Matching output passes. Differing or new output fails
//! and stays on disk for review and promotion.
//!
//! ```no_run
//! use approvals::Approvals;
//!
//! #[test]
//! fn renders_invoice() {
//!     let test = approvals::approval_test!().unwrap();
//!     let approvals = Approvals::load();
//!
//!     let _section = test.section("with discount").unwrap();
//!     approvals.assert_approved("Total: 37.80\n");
//! }
//! ```

// Deny all clippy warnings in this crate
#![deny(
    clippy::all,
    clippy::pedantic,
    clippy::nursery,
    missing_docs,
    missing_debug_implementations,
    missing_copy_implementations,
    trivial_casts,
    trivial_numeric_casts,
    unsafe_code,
    unused_import_braces,
    unused_qualifications
)]
// Allow some pedantic lints that are too noisy or not applicable
#![allow(
    clippy::module_name_repetitions,
    clippy::missing_errors_doc,
    clippy::cargo_common_metadata
)]

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

pub mod adapters;
pub mod config;
pub mod core;
pub mod error;
pub mod output;
pub mod paths;
pub mod scope;
pub mod verify;

pub use adapters::compare::{ComparisonStrategy, ExactByteComparer, NormalizedTextComparer};
pub use config::ApprovalsConfig;
pub use crate::core::models::{ComparisonResult, ResultKind, TestContext, TestIdentity};
pub use error::{ApprovalError, Result};
pub use verify::Approvals;
