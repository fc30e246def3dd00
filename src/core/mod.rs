//! Core approval logic
//!
//! This module contains the approval state machine and algorithms with no
//! direct I/O. All external interactions are abstracted through port traits.
//!
//! ## Architecture
//!
//! - `models/` - Domain types (TestContext, ComparisonResult, ArtifactRole)
//! - `services/` - Tracker, namer and engine
//! - `ports/` - Trait definitions for the runner, comparers and storage

pub mod models;
pub mod ports;
pub mod services;
