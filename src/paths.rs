//! Well-known file names and locations
//!
//! ## Layout
//!
//! ```text
//! project/
//! ├── approvals.toml                              # optional project config
//! └── tests/
//!     ├── report_test.rs
//!     ├── report_test.renders.approved.txt        # committed baseline
//!     └── report_test.renders.received.txt        # latest output (ignored)
//! ```
//!
//! With `subdirectory = "approved"` in the config, artifacts move to
//! `tests/approved/`.

use std::path::{Path, PathBuf};

/// Project configuration filename
pub const CONFIG_FILE: &str = "approvals.toml";

/// Extension used when the config does not name one
pub const DEFAULT_EXTENSION: &str = "txt";

/// Get the project root directory (the current directory).
///
/// `cargo test` runs each test binary from the package root, which is also
/// what `file!()` paths are relative to.
#[must_use]
pub fn project_root() -> PathBuf {
    std::env::current_dir().unwrap_or_else(|_| PathBuf::from("."))
}

/// Get path to `approvals.toml` inside `dir`.
#[must_use]
pub fn config_file(dir: &Path) -> PathBuf {
    dir.join(CONFIG_FILE)
}
