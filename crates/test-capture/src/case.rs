// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Test case definition.

use libmy_capture::TestId;
use std::borrow::Cow;
use std::time::Duration;

/// Time a test body may run before it counts as failed.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(1);

/// Upper bound on `repeat` accepted from suite files.
pub const MAX_REPEAT: usize = 1_000_000;

/// Upper bound on `input.len() * repeat` accepted from suite files.
pub const MAX_OUTPUT_BYTES: usize = 16 * 1024 * 1024;

/// A single stdout-capture test
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TestCase {
    pub id: TestId,
    /// Text handed to `my_putstr`
    pub input: String,
    /// Exact stdout the run must produce; `None` means `input` once per call
    pub expected: Option<String>,
    pub timeout: Duration,
    /// Number of consecutive `my_putstr` calls
    pub repeat: usize,
}

impl TestCase {
    /// Case expecting `input` back verbatim from one call, with the default timeout.
    pub fn new(suite: impl Into<String>, name: impl Into<String>, input: impl Into<String>) -> Self {
        Self {
            id: TestId::new(suite, name),
            input: input.into(),
            expected: None,
            timeout: DEFAULT_TIMEOUT,
            repeat: 1,
        }
    }

    /// `my_putstr::it_works`: `"hello!\n"` in, `"hello!\n"` out.
    pub fn it_works() -> Self {
        Self::new("my_putstr", "it_works", "hello!\n")
    }

    pub fn with_expected(mut self, expected: impl Into<String>) -> Self {
        self.expected = Some(expected.into());
        self
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    pub fn with_repeat(mut self, repeat: usize) -> Self {
        self.repeat = repeat;
        self
    }

    /// The stdout this case must produce.
    pub fn expected(&self) -> Cow<'_, str> {
        match &self.expected {
            Some(expected) => Cow::Borrowed(expected),
            None => Cow::Owned(self.input.repeat(self.repeat)),
        }
    }

    /// Bytes the function under test writes for this case, `None` on overflow.
    pub fn output_len(&self) -> Option<usize> {
        self.input.len().checked_mul(self.repeat)
    }
}

#[cfg(test)]
#[path = "case_tests.rs"]
mod tests;
