//! List received artifacts awaiting review

use std::path::{Path, PathBuf};

use approvals::adapters::file::FileArtifactStore;
use approvals::config::ApprovalsConfig;
use approvals::core::services::{ApprovalEngine, approved_counterpart};
use approvals::output::{OutputMode, PendingReport};
use walkdir::WalkDir;

use super::compare::resolve_strategy;

/// Scan `root` for received artifacts and compare each with its baseline
pub fn pending(
    root: &Path,
    filter: Option<&str>,
    strategy: Option<&str>,
    mode: OutputMode,
) -> anyhow::Result<bool> {
    let config = ApprovalsConfig::load();
    let strategy = resolve_strategy(strategy, &config)?;
    let pattern = filter.map(glob::Pattern::new).transpose()?;

    let engine = ApprovalEngine::new(config.namer(), FileArtifactStore::new());
    let mut results = Vec::new();

    for (received, approved) in find_received(root)? {
        if let Some(pattern) = &pattern {
            let name = received.file_name().map(|n| n.to_string_lossy()).unwrap_or_default();
            if !pattern.matches(&name) {
                continue;
            }
        }
        results.push(engine.compare_artifacts(&received, &approved, &strategy));
    }

    let report = PendingReport {
        root: root.to_path_buf(),
        total: results.len(),
        results,
    };
    report.render(mode);
    Ok(report.all_passed())
}

/// Received artifacts under `root` paired with their approved paths, sorted
fn find_received(root: &Path) -> anyhow::Result<Vec<(PathBuf, PathBuf)>> {
    let mut found = Vec::new();
    let walker = WalkDir::new(root)
        .into_iter()
        .filter_entry(|e| e.depth() == 0 || !is_skipped_dir(e.path()));
    for entry in walker {
        let entry = entry?;
        if !entry.file_type().is_file() {
            continue;
        }
        if let Some(approved) = approved_counterpart(entry.path()) {
            found.push((entry.path().to_path_buf(), approved));
        }
    }
    found.sort();
    Ok(found)
}

/// Build output and VCS metadata never hold artifacts
fn is_skipped_dir(path: &Path) -> bool {
    path.file_name()
        .and_then(|n| n.to_str())
        .is_some_and(|name| matches!(name, "target" | ".git"))
}
