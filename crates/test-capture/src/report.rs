// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Pass/fail reporting in text and JSON.

use crate::exit_codes;
use libmy_capture::{CapturedOutcome, CapturedRun};
use serde::{Deserialize, Serialize};
use similar::{ChangeTag, TextDiff};
use std::io::{self, Write};

/// Verdict counts for a report
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Summary {
    pub total: usize,
    pub passed: usize,
    pub failed: usize,
    pub timed_out: usize,
    pub errored: usize,
}

impl Summary {
    /// Everything that did not pass.
    pub fn not_passed(&self) -> usize {
        self.failed + self.timed_out + self.errored
    }
}

#[derive(Serialize)]
struct JsonReport<'a> {
    summary: Summary,
    runs: &'a [CapturedRun],
}

/// Results of one harness invocation
#[derive(Clone, Debug, Default)]
pub struct Report {
    runs: Vec<CapturedRun>,
}

impl Report {
    pub fn new(runs: Vec<CapturedRun>) -> Self {
        Self { runs }
    }

    pub fn runs(&self) -> &[CapturedRun] {
        &self.runs
    }

    pub fn summary(&self) -> Summary {
        let mut summary = Summary {
            total: self.runs.len(),
            ..Summary::default()
        };
        for run in &self.runs {
            match run.outcome {
                CapturedOutcome::Pass => summary.passed += 1,
                CapturedOutcome::Fail { .. } => summary.failed += 1,
                CapturedOutcome::Timeout { .. } => summary.timed_out += 1,
                CapturedOutcome::Error { .. } => summary.errored += 1,
            }
        }
        summary
    }

    /// True when nothing failed. An empty report counts as passing.
    pub fn all_passed(&self) -> bool {
        self.runs.iter().all(|r| r.outcome.is_pass())
    }

    pub fn exit_code(&self) -> i32 {
        if self.all_passed() {
            exit_codes::SUCCESS
        } else {
            exit_codes::FAILED
        }
    }

    /// One line per run, a diff under each mismatch, then a summary line.
    pub fn write_text<W: Write>(&self, writer: &mut W) -> io::Result<()> {
        for run in &self.runs {
            match &run.outcome {
                CapturedOutcome::Pass => writeln!(writer, "[PASS] {}", run.test)?,
                CapturedOutcome::Fail { expected, actual } => {
                    writeln!(writer, "[FAIL] {}: stdout differs", run.test)?;
                    write_diff(writer, expected, actual)?;
                }
                CapturedOutcome::Timeout { limit_ms } => writeln!(
                    writer,
                    "[TIMEOUT] {}: did not finish within {} ms",
                    run.test, limit_ms
                )?,
                CapturedOutcome::Error { message } => {
                    writeln!(writer, "[ERROR] {}: {}", run.test, message)?
                }
            }
        }

        let s = self.summary();
        writeln!(
            writer,
            "\n{} tests: {} passed, {} failed, {} timed out, {} errored",
            s.total, s.passed, s.failed, s.timed_out, s.errored
        )
    }

    pub fn write_json<W: Write>(&self, writer: &mut W) -> io::Result<()> {
        let report = JsonReport {
            summary: self.summary(),
            runs: &self.runs,
        };
        serde_json::to_writer_pretty(&mut *writer, &report)?;
        writeln!(writer)
    }
}

/// Line diff of expected vs actual. Lines are shown quoted so trailing
/// whitespace and missing newlines are visible.
fn write_diff<W: Write>(writer: &mut W, expected: &str, actual: &str) -> io::Result<()> {
    writeln!(writer, "    --- expected")?;
    writeln!(writer, "    +++ actual")?;
    let diff = TextDiff::from_lines(expected, actual);
    for change in diff.iter_all_changes() {
        let sign = match change.tag() {
            ChangeTag::Delete => '-',
            ChangeTag::Insert => '+',
            ChangeTag::Equal => ' ',
        };
        writeln!(writer, "    {}{:?}", sign, change.value())?;
    }
    Ok(())
}

#[cfg(test)]
#[path = "report_tests.rs"]
mod tests;
