// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Recorded test run data types.

use crate::compare::Comparison;
use crate::duration_serde;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::time::{Duration, SystemTime};

/// Test identity, displayed as `suite::name`
#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct TestId {
    pub suite: String,
    pub name: String,
}

impl TestId {
    pub fn new(suite: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            suite: suite.into(),
            name: name.into(),
        }
    }
}

impl fmt::Display for TestId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}::{}", self.suite, self.name)
    }
}

/// One recorded test execution
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct CapturedRun {
    /// Sequence number
    pub seq: u64,

    /// Wall-clock timestamp
    pub timestamp: SystemTime,

    /// Elapsed time since capture started
    #[serde(with = "duration_serde")]
    pub elapsed: Duration,

    /// How long the test body took
    #[serde(with = "duration_serde")]
    pub duration: Duration,

    pub test: TestId,

    /// Captured stdout, lossy UTF-8
    pub stdout: String,

    pub outcome: CapturedOutcome,
}

/// Verdict for a single run
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum CapturedOutcome {
    Pass,
    Fail { expected: String, actual: String },
    Timeout { limit_ms: u64 },
    Error { message: String },
}

impl CapturedOutcome {
    pub fn is_pass(&self) -> bool {
        matches!(self, CapturedOutcome::Pass)
    }

    /// Short uppercase label for reports.
    pub fn label(&self) -> &'static str {
        match self {
            CapturedOutcome::Pass => "PASS",
            CapturedOutcome::Fail { .. } => "FAIL",
            CapturedOutcome::Timeout { .. } => "TIMEOUT",
            CapturedOutcome::Error { .. } => "ERROR",
        }
    }
}

impl From<Comparison> for CapturedOutcome {
    fn from(cmp: Comparison) -> Self {
        match cmp {
            Comparison::Match => CapturedOutcome::Pass,
            Comparison::Mismatch { expected, actual } => CapturedOutcome::Fail { expected, actual },
        }
    }
}

#[cfg(test)]
#[path = "record_tests.rs"]
mod tests;
