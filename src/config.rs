//! Project configuration
//!
//! Read from `approvals.toml` at the project root. Every key is optional:
//!
//! ```toml
//! comparer = "normalized-text"   # or "exact"
//! extension = "txt"
//! subdirectory = "approved"
//! ```

use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::adapters::compare::ComparisonStrategy;
use crate::core::services::Namer;
use crate::error::{ApprovalError, Result};
use crate::paths;

/// Project-level approvals configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ApprovalsConfig {
    /// Comparison strategy for `verify`
    #[serde(default)]
    pub comparer: ComparisonStrategy,

    /// Artifact extension without leading dot
    #[serde(default = "default_extension")]
    pub extension: String,

    /// Directory, relative to each test source file, holding artifacts
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub subdirectory: Option<PathBuf>,
}

fn default_extension() -> String {
    paths::DEFAULT_EXTENSION.to_string()
}

impl Default for ApprovalsConfig {
    fn default() -> Self {
        Self {
            comparer: ComparisonStrategy::default(),
            extension: default_extension(),
            subdirectory: None,
        }
    }
}

impl ApprovalsConfig {
    /// Parse a config from TOML text
    ///
    /// `origin` is only used for error messages.
    pub fn parse(content: &str, origin: &Path) -> Result<Self> {
        toml::from_str(content).map_err(|source| ApprovalError::Config {
            path: origin.to_path_buf(),
            source,
        })
    }

    /// Load `approvals.toml` from `dir`, or defaults if it does not exist
    pub fn load_from(dir: &Path) -> Result<Self> {
        let path = paths::config_file(dir);
        if !path.exists() {
            log::debug!("no {} in {}, using defaults", paths::CONFIG_FILE, dir.display());
            return Ok(Self::default());
        }
        let content = fs::read_to_string(&path).map_err(|e| ApprovalError::io(&path, e))?;
        Self::parse(&content, &path)
    }

    /// Load config from the project root, falling back to defaults on error
    #[must_use]
    pub fn load() -> Self {
        Self::load_from(&paths::project_root()).unwrap_or_else(|err| {
            log::warn!("ignoring config: {err}");
            Self::default()
        })
    }

    /// Save config to `dir/approvals.toml`, returning the written path
    pub fn save_to(&self, dir: &Path) -> anyhow::Result<PathBuf> {
        fs::create_dir_all(dir)?;
        let path = paths::config_file(dir);
        let content = toml::to_string_pretty(self)?;
        fs::write(&path, content)?;
        Ok(path)
    }

    /// Namer honoring the configured subdirectory
    #[must_use]
    pub fn namer(&self) -> Namer {
        self.subdirectory
            .as_ref()
            .map_or_else(Namer::new, |sub| Namer::with_subdirectory(sub.clone()))
    }
}
