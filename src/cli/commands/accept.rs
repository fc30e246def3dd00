//! Promote received artifacts to approved baselines

use std::path::PathBuf;

use approvals::adapters::file::FileArtifactStore;
use approvals::output::{AcceptFailure, AcceptReport, OutputMode};

/// Accept each received artifact, returning whether all succeeded
pub fn accept(received: &[PathBuf], mode: OutputMode) -> bool {
    let store = FileArtifactStore::new();
    let mut report = AcceptReport {
        accepted: Vec::new(),
        failed: Vec::new(),
    };

    for path in received {
        match store.accept(path) {
            Ok(approved) => report.accepted.push(approved),
            Err(err) => report.failed.push(AcceptFailure {
                path: path.clone(),
                reason: err.to_string(),
            }),
        }
    }

    report.render(mode);
    report.failed.is_empty()
}
