//! Artifact roles
//!
//! Every test context owns two artifacts that differ only in their role
//! segment: the reviewed baseline and the output of the latest run.

/// Role segment of an artifact file name
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ArtifactRole {
    /// Accepted reference output
    Approved,
    /// Output produced by the current run
    Received,
}

impl ArtifactRole {
    /// Segment written into file names
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Approved => "approved",
            Self::Received => "received",
        }
    }

    /// The other role
    #[must_use]
    pub const fn counterpart(self) -> Self {
        match self {
            Self::Approved => Self::Received,
            Self::Received => Self::Approved,
        }
    }
}

impl std::fmt::Display for ArtifactRole {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
