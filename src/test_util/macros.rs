#![allow(dead_code)]
use core::fmt;
use core::sync::atomic::{AtomicUsize, Ordering};

#[derive(Copy, Clone, Debug)]
pub struct FailedAssertion {
    pub cond: &'static str,
    pub file: &'static str,
    pub line: u32,
}

impl FailedAssertion {
    pub const fn new(cond: &'static str, file: &'static str, line: u32) -> Self {
        Self { cond, file, line }
    }
}

impl fmt::Display for FailedAssertion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "kassert failed: `{}` at {}:{}", self.cond, self.file, self.line)
    }
}

/// Failed assertions across all tests in this binary.
pub static TEST_FAILED: AtomicUsize = AtomicUsize::new(0);

/// Backend of `kassert!`: counts the failure and fails the running test.
#[track_caller]
pub fn record_failed_assertion(assertion: FailedAssertion) -> ! {
    TEST_FAILED.fetch_add(1, Ordering::SeqCst);
    panic!("{}", assertion);
}

/// Fails the current test if `$cond` is false.
#[macro_export]
macro_rules! kassert {
    ($cond:expr) => {{
        if !$cond {
            let fa =
                $crate::test_util::macros::FailedAssertion::new(stringify!($cond), file!(), line!());
            $crate::test_util::macros::record_failed_assertion(fa);
        }
    }};
}

/// Defines a test case on the host harness.
///
/// `test_case!(test_name, { code });`
#[macro_export]
macro_rules! test_case {
    (
        $func_name:ident,
        $body:block
    ) => {
        #[doc = concat!("Test case: ", stringify!($func_name))]
        #[test]
        fn $func_name() {
            $body
        }
    };
}
