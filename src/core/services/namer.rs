//! Namer - derives artifact paths from a test context
//!
//! File names follow the layout
//!
//! ```text
//! <source stem>.<test name>[.<section>]*.<role>[.<extension>]
//! ```
//!
//! and live next to the test's source file (or in a fixed subdirectory of
//! that directory). Each segment is escaped so that it never contains `.`:
//! ASCII letters, digits, `_` and `-` are kept, every other byte becomes
//! `%XX` (uppercase hex). A segment spelled exactly `approved` or `received`
//! has its first byte escaped, so the role words only ever appear in the role
//! position. Because `%` always starts an escape, distinct contexts always
//! produce distinct names.

use std::fmt::Write as _;
use std::path::{Path, PathBuf};

use crate::core::models::{ArtifactRole, TestContext};

/// Segment separator inside artifact file names
const SEPARATOR: char = '.';

/// Introduces a `%XX` byte escape
const ESCAPE: char = '%';

/// Paths of both artifacts belonging to one test context
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ArtifactPaths {
    /// Reviewed baseline
    pub approved: PathBuf,
    /// Output of the current run
    pub received: PathBuf,
}

/// Maps test contexts to artifact paths
///
/// A pure function of its input: the same context and extension always
/// yield the same paths.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Namer {
    subdirectory: Option<PathBuf>,
}

impl Namer {
    /// Namer placing artifacts beside the test source file
    #[must_use]
    pub const fn new() -> Self {
        Self { subdirectory: None }
    }

    /// Namer placing artifacts in `subdirectory` of the test source directory
    #[must_use]
    pub fn with_subdirectory(subdirectory: impl Into<PathBuf>) -> Self {
        Self {
            subdirectory: Some(subdirectory.into()),
        }
    }

    /// Escaped `<stem>.<test>[.<section>]*` prefix shared by both artifacts
    #[must_use]
    pub fn qualified_name(&self, context: &TestContext) -> String {
        let identity = &context.identity;
        let mut name = sanitize_segment(&identity.source_stem());
        name.push(SEPARATOR);
        name.push_str(&sanitize_segment(&identity.test_name));
        for section in context.sections.iter() {
            name.push(SEPARATOR);
            name.push_str(&sanitize_segment(section));
        }
        name
    }

    /// File name of one artifact (no directory)
    #[must_use]
    pub fn file_name(&self, context: &TestContext, role: ArtifactRole, extension: &str) -> String {
        let mut name = self.qualified_name(context);
        name.push(SEPARATOR);
        name.push_str(role.as_str());

        let extension = extension.trim_start_matches(SEPARATOR);
        if !extension.is_empty() {
            name.push(SEPARATOR);
            name.push_str(&sanitize_segment(extension));
        }
        name
    }

    /// Directory both artifacts are placed in
    #[must_use]
    pub fn directory(&self, context: &TestContext) -> PathBuf {
        let dir = context.identity.source_dir();
        match &self.subdirectory {
            Some(sub) => dir.join(sub),
            None => dir.to_path_buf(),
        }
    }

    /// Full path of one artifact
    #[must_use]
    pub fn derive_path(
        &self,
        context: &TestContext,
        role: ArtifactRole,
        extension: &str,
    ) -> PathBuf {
        self.directory(context).join(self.file_name(context, role, extension))
    }

    /// Path of the approved baseline for `context`
    #[must_use]
    pub fn derive_approved_path(&self, context: &TestContext, extension: &str) -> PathBuf {
        self.derive_path(context, ArtifactRole::Approved, extension)
    }

    /// Path of the received output for `context`
    #[must_use]
    pub fn derive_received_path(&self, context: &TestContext, extension: &str) -> PathBuf {
        self.derive_path(context, ArtifactRole::Received, extension)
    }

    /// Both artifact paths at once
    #[must_use]
    pub fn derive_paths(&self, context: &TestContext, extension: &str) -> ArtifactPaths {
        ArtifactPaths {
            approved: self.derive_approved_path(context, extension),
            received: self.derive_received_path(context, extension),
        }
    }
}

/// Escape one name segment so it is filesystem safe and free of separators
#[must_use]
pub fn sanitize_segment(raw: &str) -> String {
    let is_role_word =
        raw == ArtifactRole::Approved.as_str() || raw == ArtifactRole::Received.as_str();
    let mut out = String::with_capacity(raw.len());
    for (index, byte) in raw.bytes().enumerate() {
        let keep = byte.is_ascii_alphanumeric() || byte == b'_' || byte == b'-';
        if keep && !(is_role_word && index == 0) {
            out.push(char::from(byte));
        } else {
            let _ = write!(out, "{ESCAPE}{byte:02X}");
        }
    }
    out
}

/// Locate the role segment of an artifact file name
///
/// The second-to-last segment wins over the last one, so
/// `x.t.approved.received` is an approved artifact with extension `received`.
fn role_position(parts: &[&str]) -> Option<(usize, ArtifactRole)> {
    let parse = |segment: &str| match segment {
        "approved" => Some(ArtifactRole::Approved),
        "received" => Some(ArtifactRole::Received),
        _ => None,
    };

    let len = parts.len();
    if len < 3 {
        return None;
    }
    if len >= 4 {
        if let Some(role) = parse(parts[len - 2]) {
            return Some((len - 2, role));
        }
    }
    parse(parts[len - 1]).map(|role| (len - 1, role))
}

/// Role of an artifact, judged from its file name
#[must_use]
pub fn artifact_role(path: &Path) -> Option<ArtifactRole> {
    let name = path.file_name()?.to_str()?;
    let parts: Vec<&str> = name.split(SEPARATOR).collect();
    role_position(&parts).map(|(_, role)| role)
}

/// Whether `path` names a received artifact
#[must_use]
pub fn is_received_artifact(path: &Path) -> bool {
    artifact_role(path) == Some(ArtifactRole::Received)
}

/// Approved path belonging to a received artifact
///
/// Returns `None` if `path` is not a received artifact.
#[must_use]
pub fn approved_counterpart(path: &Path) -> Option<PathBuf> {
    let name = path.file_name()?.to_str()?;
    let mut parts: Vec<&str> = name.split(SEPARATOR).collect();
    let (index, role) = role_position(&parts)?;
    if role != ArtifactRole::Received {
        return None;
    }
    parts[index] = ArtifactRole::Approved.as_str();
    Some(path.with_file_name(parts.join(".")))
}
