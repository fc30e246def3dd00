//! Error types for approvals
//!
//! Mismatches and missing baselines are not errors: they are ordinary
//! outcomes carried by [`ComparisonResult`](crate::core::models::ComparisonResult).
//! The variants here are integration bugs (lifecycle misuse) and I/O or
//! configuration failures.

use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Errors raised by the approvals library
#[derive(Debug, Error)]
pub enum ApprovalError {
    /// Lifecycle callbacks were invoked out of order
    #[error("protocol violation: {0}")]
    ProtocolViolation(String),

    /// The test context was queried while no test was running
    #[error("no active test: approvals must be verified from inside a running test")]
    NoActiveTest,

    /// An artifact could not be read or written
    #[error("io error on {}: {source}", .path.display())]
    Io {
        /// The artifact path involved
        path: PathBuf,
        /// Underlying cause
        #[source]
        source: io::Error,
    },

    /// The configuration file could not be parsed
    #[error("invalid config {}: {source}", .path.display())]
    Config {
        /// The configuration file path
        path: PathBuf,
        /// Underlying cause
        #[source]
        source: toml::de::Error,
    },

    /// A path expected to be a received artifact is not one
    #[error("not a received artifact: {}", .0.display())]
    NotReceived(PathBuf),

    /// A comparison strategy name was not recognized
    #[error("unknown comparison strategy: {0}. Use 'exact' or 'normalized-text'")]
    UnknownStrategy(String),
}

impl ApprovalError {
    /// Wrap an I/O error with the path it happened on
    pub fn io(path: impl Into<PathBuf>, source: io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }

    pub(crate) fn protocol(message: impl Into<String>) -> Self {
        Self::ProtocolViolation(message.into())
    }
}

/// Result alias used throughout the library
pub type Result<T> = std::result::Result<T, ApprovalError>;
