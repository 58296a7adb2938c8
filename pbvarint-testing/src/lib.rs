//! Internal testing utilities for the pbvarint crates.

use std::fmt::Debug;
use std::panic::{RefUnwindSafe, UnwindSafe};

/// Utility for creating table-driven tests.
///
/// Each case is run even if an earlier one fails. Once all cases have run,
/// the test panics if any of them failed, listing the failing cases.
///
/// ## Example
///
/// ```
/// use pbvarint_testing::TestCases;
///
/// // Add #[test] attribute
/// fn test_continuation_bit() {
///   #[derive(Debug)]
///   struct Case {
///     byte: u8,
///     last: bool,
///   }
///
///   let cases = [
///     Case { byte: 0x7f, last: true },
///     Case { byte: 0x80, last: false },
///   ];
///
///   cases.test_each(|&Case { byte, last }| {
///     assert_eq!(byte & 0x80 == 0, last);
///   });
/// }
/// # test_continuation_bit();
/// ```
///
/// ## Unwind safety
///
/// Test cases and values captured by the test function must be
/// [unwind safe](https://doc.rust-lang.org/std/panic/fn.catch_unwind.html).
/// If a case holds a value which is not, create the value inside the test
/// function or wrap it with [`AssertUnwindSafe`](std::panic::AssertUnwindSafe).
pub trait TestCases {
    /// The data for a single test case.
    type Case;

    /// Call `test` with a reference to each case in `self`, catching panics.
    fn test_each(self, test: impl Fn(&Self::Case) + RefUnwindSafe)
    where
        Self::Case: Debug + RefUnwindSafe;

    /// Variant of [`test_each`](TestCases::test_each) which passes a clone
    /// of each case to `test`.
    ///
    /// Useful when the test needs an owned case and cloning it is cheap.
    fn test_each_clone(self, test: impl Fn(Self::Case) + RefUnwindSafe)
    where
        Self::Case: Debug + Clone + UnwindSafe;

    /// Variant of [`test_each`](TestCases::test_each) which passes each case
    /// to `test` by value.
    ///
    /// Each case is formatted before the test function is called, so that it
    /// can be reported if the test fails.
    fn test_each_value(self, test: impl Fn(Self::Case) + RefUnwindSafe)
    where
        Self::Case: Debug + UnwindSafe;
}

/// Panic if there were any failures, listing the failed cases.
fn report_failures<T: Debug>(failures: &[T]) {
    assert!(
        failures.is_empty(),
        "{} test cases failed: {:?}",
        failures.len(),
        failures
    );
}

impl<I: IntoIterator> TestCases for I {
    type Case = I::Item;

    fn test_each(self, test: impl Fn(&I::Item) + RefUnwindSafe)
    where
        Self::Case: Debug + RefUnwindSafe,
    {
        let failures: Vec<_> = self
            .into_iter()
            .filter(|case| std::panic::catch_unwind(|| test(case)).is_err())
            .collect();
        report_failures(&failures);
    }

    fn test_each_clone(self, test: impl Fn(I::Item) + RefUnwindSafe)
    where
        Self::Case: Debug + Clone + UnwindSafe,
    {
        let mut failures = Vec::new();
        for case in self {
            let value = case.clone();
            let test = &test;
            if std::panic::catch_unwind(move || test(value)).is_err() {
                failures.push(case);
            }
        }
        report_failures(&failures);
    }

    fn test_each_value(self, test: impl Fn(I::Item) + RefUnwindSafe)
    where
        Self::Case: Debug + UnwindSafe,
    {
        let mut failures = Vec::new();
        for case in self {
            let desc = format!("{:?}", case);
            let test = &test;
            if std::panic::catch_unwind(move || test(case)).is_err() {
                failures.push(desc);
            }
        }
        report_failures(&failures);
    }
}
