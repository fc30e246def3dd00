//! Configurable comparison strategy
//!
//! The closed set of comparers a project can select in `approvals.toml`.

use std::path::Path;

use serde::{Deserialize, Serialize};

use super::{ExactByteComparer, NormalizedTextComparer};
use crate::core::ports::ContentComparer;
use crate::error::{ApprovalError, Result};

/// Which comparer to use
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ComparisonStrategy {
    /// Byte-for-byte equality
    Exact,
    /// Text comparison ignoring carriage returns (default)
    #[default]
    NormalizedText,
}

impl ComparisonStrategy {
    /// Configuration name of the strategy
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Exact => "exact",
            Self::NormalizedText => "normalized-text",
        }
    }
}

impl ContentComparer for ComparisonStrategy {
    fn contents_equivalent(&self, received: &Path, approved: &Path) -> Result<bool> {
        match self {
            Self::Exact => ExactByteComparer.contents_equivalent(received, approved),
            Self::NormalizedText => NormalizedTextComparer.contents_equivalent(received, approved),
        }
    }
}

impl std::fmt::Display for ComparisonStrategy {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for ComparisonStrategy {
    type Err = ApprovalError;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_lowercase().as_str() {
            "exact" | "bytes" => Ok(Self::Exact),
            "normalized-text" | "normalized" | "text" => Ok(Self::NormalizedText),
            _ => Err(ApprovalError::UnknownStrategy(s.to_string())),
        }
    }
}
