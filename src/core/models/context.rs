//! Test identity and context
//!
//! A [`TestContext`] is the full addressable identity of a test instant:
//! the source file, the test name, and the stack of open sections.

use std::fmt;
use std::path::{Path, PathBuf};

/// Identifies the currently executing test case
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct TestIdentity {
    /// Source file the test lives in (as reported by the runner, e.g. `file!()`)
    pub source_file: PathBuf,

    /// Name of the test case
    pub test_name: String,
}

impl TestIdentity {
    /// Create a new test identity
    pub fn new(source_file: impl Into<PathBuf>, test_name: impl Into<String>) -> Self {
        Self {
            source_file: source_file.into(),
            test_name: test_name.into(),
        }
    }

    /// Source file stem, e.g. `parser_test` for `tests/parser_test.rs`
    #[must_use]
    pub fn source_stem(&self) -> String {
        self.source_file
            .file_stem()
            .map_or_else(String::new, |s| s.to_string_lossy().into_owned())
    }

    /// Directory containing the source file
    #[must_use]
    pub fn source_dir(&self) -> &Path {
        self.source_file.parent().unwrap_or_else(|| Path::new(""))
    }
}

impl fmt::Display for TestIdentity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}::{}", self.source_file.display(), self.test_name)
    }
}

/// Ordered stack of open section names, innermost last
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct SectionStack(Vec<String>);

impl SectionStack {
    /// Create an empty stack
    #[must_use]
    pub const fn new() -> Self {
        Self(Vec::new())
    }

    /// Enter a section
    pub fn push(&mut self, name: impl Into<String>) {
        self.0.push(name.into());
    }

    /// Leave the innermost section
    pub fn pop(&mut self) -> Option<String> {
        self.0.pop()
    }

    /// Drop every open section, returning how many were open
    pub fn unwind(&mut self) -> usize {
        let open = self.0.len();
        self.0.clear();
        open
    }

    /// Number of open sections
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Whether no section is open
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Section names, outermost first
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.0.iter().map(String::as_str)
    }
}

impl<S: Into<String>> FromIterator<S> for SectionStack {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        Self(iter.into_iter().map(Into::into).collect())
    }
}

/// Snapshot of the running test: identity plus open sections
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct TestContext {
    /// Which test is running
    pub identity: TestIdentity,

    /// Sections open at the time of the snapshot
    pub sections: SectionStack,
}

impl TestContext {
    /// Context for a test with no open sections
    #[must_use]
    pub fn new(identity: TestIdentity) -> Self {
        Self {
            identity,
            sections: SectionStack::new(),
        }
    }

    /// Context with the given sections open, outermost first
    #[must_use]
    pub fn with_sections<S: Into<String>>(
        identity: TestIdentity,
        sections: impl IntoIterator<Item = S>,
    ) -> Self {
        Self {
            identity,
            sections: sections.into_iter().collect(),
        }
    }
}

impl fmt::Display for TestContext {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.identity)?;
        for section in self.sections.iter() {
            write!(f, " > {section}")?;
        }
        Ok(())
    }
}
