//! Lifecycle callback port
//!
//! The narrow interface a host test runner drives. Calls must be well nested:
//! every `test_starting` is followed by exactly one `test_ended`, and section
//! calls happen only in between. `test_ended` may arrive while sections are
//! still open; they are unwound.

use std::path::Path;

use crate::error::Result;

/// Callbacks invoked by the host test runner
pub trait LifecycleListener {
    /// A test case is about to run
    fn test_starting(&mut self, file_name: &Path, test_name: &str) -> Result<()>;

    /// The running test case finished (open sections are discarded)
    fn test_ended(&mut self) -> Result<()>;

    /// A named section inside the running test was entered
    fn section_starting(&mut self, name: &str) -> Result<()>;

    /// The innermost open section was left
    fn section_ended(&mut self) -> Result<()>;
}
