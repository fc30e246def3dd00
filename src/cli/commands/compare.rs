//! Compare two artifacts directly

use std::path::Path;

use approvals::adapters::compare::ComparisonStrategy;
use approvals::adapters::file::FileArtifactStore;
use approvals::config::ApprovalsConfig;
use approvals::core::services::ApprovalEngine;
use approvals::output::{CompareReport, OutputMode};

/// Compare `received` against `approved`, returning whether they match
pub fn compare(
    received: &Path,
    approved: &Path,
    strategy: Option<&str>,
    mode: OutputMode,
) -> anyhow::Result<bool> {
    let config = ApprovalsConfig::load();
    let strategy = resolve_strategy(strategy, &config)?;

    let engine = ApprovalEngine::new(config.namer(), FileArtifactStore::new());
    let result = engine.compare_artifacts(received, approved, &strategy);
    let passed = result.passed();

    CompareReport {
        strategy: strategy.to_string(),
        result,
    }
    .render(mode);

    Ok(passed)
}

/// Strategy named on the command line, or the configured one
pub fn resolve_strategy(
    name: Option<&str>,
    config: &ApprovalsConfig,
) -> anyhow::Result<ComparisonStrategy> {
    match name {
        Some(name) => Ok(name.parse()?),
        None => Ok(config.comparer),
    }
}
