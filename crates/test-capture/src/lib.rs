// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Test capture and comparison utilities for libmy.
//!
//! Registers test cases by `suite::name`, redirects the output of
//! `my_putstr` (in-process or in a child process) into a capture, enforces a
//! per-test timeout and reports a pass/fail verdict for each case.

pub mod case;
pub mod config;
pub mod error;
pub mod registry;
pub mod report;
pub mod runner;

pub use case::{TestCase, DEFAULT_TIMEOUT, MAX_OUTPUT_BYTES, MAX_REPEAT};
pub use config::{HarnessConfig, TestSpec};
pub use error::{ConfigError, HarnessError};
pub use libmy_capture::{CaptureLog, CapturedOutcome, CapturedRun, TestId};
pub use registry::Registry;
pub use report::{Report, Summary};
pub use runner::{RunMode, Runner};

/// Exit codes for the `test-capture` binary
pub mod exit_codes {
    /// Every selected test passed
    pub const SUCCESS: i32 = 0;
    /// At least one test failed, timed out or errored
    pub const FAILED: i32 = 1;
    /// The harness itself could not run (bad config, unwritable log)
    pub const ERROR: i32 = 2;
}
