//! Write a default approvals.toml

use std::path::Path;

use approvals::config::ApprovalsConfig;
use approvals::output::{OperationResult, OutputMode};
use approvals::paths;

/// Create `approvals.toml` in the current directory
pub fn init(force: bool, mode: OutputMode) -> anyhow::Result<bool> {
    let root = paths::project_root();
    let config_path = paths::config_file(&root);

    if config_path.exists() && !force {
        OperationResult {
            success: false,
            message: format!(
                "Already initialized ({} exists). Use --force to overwrite.",
                paths::CONFIG_FILE
            ),
        }
        .render(mode);
        return Ok(false);
    }

    let written = ApprovalsConfig::default().save_to(&root)?;
    log::debug!("wrote {}", written.display());

    OperationResult {
        success: true,
        message: format!("Created {}", display_name(&written)),
    }
    .render(mode);
    Ok(true)
}

fn display_name(path: &Path) -> String {
    path.file_name()
        .map_or_else(|| path.display().to_string(), |n| n.to_string_lossy().into_owned())
}
