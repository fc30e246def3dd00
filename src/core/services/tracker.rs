//! Test context tracker - follows the host runner's lifecycle callbacks
//!
//! A two-state machine:
//!
//! ```text
//!         on_test_start
//!   Idle ──────────────▶ TestActive ◀─┐ on_section_start / on_section_end
//!    ▲                        │  └────┘
//!    └────────────────────────┘
//!           on_test_end
//! ```
//!
//! One tracker describes one execution unit. Sharing a tracker between
//! concurrently running tests corrupts both tests' qualified names; use one
//! tracker per thread (see [`crate::scope`]) or pass an explicit tracker.

use std::path::Path;

use crate::core::models::{TestContext, TestIdentity};
use crate::core::ports::LifecycleListener;
use crate::error::{ApprovalError, Result};

#[derive(Debug, Clone, Default, PartialEq, Eq)]
enum TrackerState {
    #[default]
    Idle,
    TestActive(TestContext),
}

/// Tracks the running test and its open sections
#[derive(Debug, Clone, Default)]
pub struct TestContextTracker {
    state: TrackerState,
}

impl TestContextTracker {
    /// Create an idle tracker
    #[must_use]
    pub const fn new() -> Self {
        Self {
            state: TrackerState::Idle,
        }
    }

    /// Begin a test with an empty section stack
    ///
    /// # Errors
    ///
    /// Returns [`ApprovalError::ProtocolViolation`] if a test is already
    /// active; the active test is left untouched.
    pub fn on_test_start(&mut self, identity: TestIdentity) -> Result<()> {
        if let TrackerState::TestActive(current) = &self.state {
            return Err(ApprovalError::protocol(format!(
                "test {identity} started while {} is still running",
                current.identity
            )));
        }
        log::debug!("test started: {identity}");
        self.state = TrackerState::TestActive(TestContext::new(identity));
        Ok(())
    }

    /// End the running test, discarding any sections left open
    ///
    /// # Errors
    ///
    /// Returns [`ApprovalError::ProtocolViolation`] if no test is active.
    pub fn on_test_end(&mut self) -> Result<()> {
        match std::mem::take(&mut self.state) {
            TrackerState::TestActive(mut context) => {
                let open = context.sections.unwind();
                if open > 0 {
                    log::debug!("test ended: {} ({open} open section(s) unwound)", context.identity);
                } else {
                    log::debug!("test ended: {}", context.identity);
                }
                Ok(())
            },
            TrackerState::Idle => {
                Err(ApprovalError::protocol("test ended while no test was running"))
            },
        }
    }

    /// Enter a section of the running test
    ///
    /// # Errors
    ///
    /// Returns [`ApprovalError::ProtocolViolation`] if no test is active.
    pub fn on_section_start(&mut self, name: impl Into<String>) -> Result<()> {
        let name = name.into();
        match &mut self.state {
            TrackerState::TestActive(context) => {
                log::debug!("section started: {name}");
                context.sections.push(name);
                Ok(())
            },
            TrackerState::Idle => Err(ApprovalError::protocol(format!(
                "section '{name}' started while no test was running"
            ))),
        }
    }

    /// Leave the innermost section, returning its name
    ///
    /// # Errors
    ///
    /// Returns [`ApprovalError::ProtocolViolation`] if no test is active or
    /// no section is open.
    pub fn on_section_end(&mut self) -> Result<String> {
        match &mut self.state {
            TrackerState::TestActive(context) => {
                let name = context.sections.pop().ok_or_else(|| {
                    ApprovalError::protocol(format!(
                        "section ended in {} with no open section",
                        context.identity
                    ))
                })?;
                log::debug!("section ended: {name}");
                Ok(name)
            },
            TrackerState::Idle => {
                Err(ApprovalError::protocol("section ended while no test was running"))
            },
        }
    }

    /// Snapshot of the running test
    ///
    /// # Errors
    ///
    /// Returns [`ApprovalError::NoActiveTest`] outside a test.
    pub fn current_context(&self) -> Result<TestContext> {
        match &self.state {
            TrackerState::TestActive(context) => Ok(context.clone()),
            TrackerState::Idle => Err(ApprovalError::NoActiveTest),
        }
    }

    /// Whether a test is running
    #[must_use]
    pub const fn is_active(&self) -> bool {
        matches!(self.state, TrackerState::TestActive(_))
    }

    /// Number of open sections (zero when idle)
    #[must_use]
    pub fn depth(&self) -> usize {
        match &self.state {
            TrackerState::TestActive(context) => context.sections.len(),
            TrackerState::Idle => 0,
        }
    }
}

impl LifecycleListener for TestContextTracker {
    fn test_starting(&mut self, file_name: &Path, test_name: &str) -> Result<()> {
        self.on_test_start(TestIdentity::new(file_name, test_name))
    }

    fn test_ended(&mut self) -> Result<()> {
        self.on_test_end()
    }

    fn section_starting(&mut self, name: &str) -> Result<()> {
        self.on_section_start(name)
    }

    fn section_ended(&mut self) -> Result<()> {
        self.on_section_end().map(drop)
    }
}
