//! Per-thread test scopes
//!
//! The Rust test harness runs every test on its own thread, so each thread
//! owns an independent [`TestContextTracker`]. Tests never see each other's
//! section stacks, even when they run in parallel.
//!
//! Scopes are RAII guards: dropping a [`TestScope`] ends the test (unwinding
//! any sections still open), dropping a [`SectionScope`] leaves the section.
//! Both are `!Send`, so a scope cannot end on a different thread than the
//! one it started on.
//!
//! ```no_run
//! use approvals::scope;
//!
//! let test = scope::start_test(file!(), "renders_report").unwrap();
//! let section = test.section("empty input").unwrap();
//! // ... verify output here ...
//! drop(section);
//! drop(test);
//! ```

use std::cell::RefCell;
use std::marker::PhantomData;
use std::path::Path;

use crate::core::models::{TestContext, TestIdentity};
use crate::core::ports::LifecycleListener;
use crate::core::services::TestContextTracker;
use crate::error::Result;

thread_local! {
    static TRACKER: RefCell<TestContextTracker> =
        const { RefCell::new(TestContextTracker::new()) };
}

/// Run `f` with this thread's tracker
///
/// # Panics
///
/// Panics if called re-entrantly from inside `f`.
pub fn with_tracker<R>(f: impl FnOnce(&mut TestContextTracker) -> R) -> R {
    TRACKER.with_borrow_mut(f)
}

/// Snapshot of the test running on this thread
///
/// # Errors
///
/// Returns [`ApprovalError::NoActiveTest`](crate::error::ApprovalError::NoActiveTest)
/// if no test was started on this thread.
pub fn current_context() -> Result<TestContext> {
    TRACKER.with_borrow(TestContextTracker::current_context)
}

/// Start a test on this thread
///
/// # Errors
///
/// Fails with a protocol violation if a test is already running here.
pub fn start_test(source_file: impl AsRef<Path>, test_name: &str) -> Result<TestScope> {
    let identity = TestIdentity::new(source_file.as_ref(), test_name);
    with_tracker(|tracker| tracker.on_test_start(identity))?;
    Ok(TestScope {
        _thread_bound: PhantomData,
    })
}

fn enter_section(name: &str) -> Result<()> {
    with_tracker(|tracker| tracker.on_section_start(name))
}

/// A running test; the test ends when this is dropped
#[derive(Debug)]
#[must_use = "the test ends as soon as the scope is dropped"]
pub struct TestScope {
    _thread_bound: PhantomData<*const ()>,
}

impl TestScope {
    /// Enter a section of this test
    ///
    /// # Errors
    ///
    /// Fails with a protocol violation if the test was already ended through
    /// the tracker directly.
    pub fn section(&self, name: &str) -> Result<SectionScope<'_>> {
        enter_section(name)?;
        Ok(SectionScope {
            _parent: PhantomData,
        })
    }

    /// Snapshot of this test's context
    pub fn context(&self) -> Result<TestContext> {
        current_context()
    }
}

impl Drop for TestScope {
    fn drop(&mut self) {
        if let Err(err) = with_tracker(TestContextTracker::on_test_end) {
            log::warn!("ending test scope: {err}");
        }
    }
}

/// An open section; it is left when this is dropped
///
/// Borrowing the parent scope keeps sections strictly nested.
#[derive(Debug)]
#[must_use = "the section ends as soon as the scope is dropped"]
pub struct SectionScope<'a> {
    _parent: PhantomData<&'a TestScope>,
}

impl SectionScope<'_> {
    /// Enter a section nested inside this one
    pub fn section(&self, name: &str) -> Result<SectionScope<'_>> {
        enter_section(name)?;
        Ok(SectionScope {
            _parent: PhantomData,
        })
    }
}

impl Drop for SectionScope<'_> {
    fn drop(&mut self) {
        if let Err(err) = with_tracker(TestContextTracker::on_section_end) {
            log::warn!("ending section scope: {err}");
        }
    }
}

/// Lifecycle listener forwarding to the current thread's tracker
///
/// Hand this to a host runner that reports lifecycle events from the thread
/// executing the test.
#[derive(Debug, Clone, Copy, Default)]
pub struct ThreadLocalListener;

impl LifecycleListener for ThreadLocalListener {
    fn test_starting(&mut self, file_name: &Path, test_name: &str) -> Result<()> {
        with_tracker(|tracker| tracker.test_starting(file_name, test_name))
    }

    fn test_ended(&mut self) -> Result<()> {
        with_tracker(|tracker| tracker.test_ended())
    }

    fn section_starting(&mut self, name: &str) -> Result<()> {
        with_tracker(|tracker| tracker.section_starting(name))
    }

    fn section_ended(&mut self) -> Result<()> {
        with_tracker(|tracker| tracker.section_ended())
    }
}

/// Start a [`TestScope`] for the enclosing test function
///
/// Uses `file!()` for the source file and the enclosing function's name as
/// the test name, unless a name is given explicitly.
///
/// ```no_run
/// #[test]
/// fn renders_report() {
///     let _test = approvals::approval_test!().unwrap();
///     // test name is "renders_report"
/// }
///
/// #[test]
/// fn parameterized() {
///     let _test = approvals::approval_test!("parameterized case 1").unwrap();
/// }
/// ```
#[macro_export]
macro_rules! approval_test {
    () => {
        $crate::scope::start_test(::std::file!(), $crate::__function_name!())
    };
    ($name:expr) => {
        $crate::scope::start_test(::std::file!(), $name)
    };
}

#[doc(hidden)]
#[macro_export]
macro_rules! __function_name {
    () => {{
        fn here() {}
        let full = ::std::any::type_name_of_val(&here);
        let full = full.strip_suffix("::here").unwrap_or(full);
        full.rsplit("::").next().unwrap_or(full)
    }};
}
