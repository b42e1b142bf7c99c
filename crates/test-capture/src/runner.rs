// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Test execution with output redirection and timeouts.

use crate::case::TestCase;
use crate::error::HarnessError;
use crate::report::Report;
use libmy::{my_putstr_to, PutstrError};
use libmy_capture::{compare_str, CaptureBuffer, CaptureLog, CapturedOutcome, CapturedRun};
use std::fmt;
use std::io::Write;
use std::path::{Path, PathBuf};
use std::process::Stdio;
use std::time::Instant;
use tokio::process::Command;
use tokio::time::timeout;

/// Where the function under test runs and how its stdout is captured
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum RunMode {
    /// Call `my_putstr_to` with a capture buffer standing in for stdout.
    InProcess,
    /// Spawn `program args... --repeat N -- INPUT` and read its real stdout.
    Subprocess { program: PathBuf, args: Vec<String> },
}

impl fmt::Display for RunMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RunMode::InProcess => write!(f, "in-process"),
            RunMode::Subprocess { program, .. } => write!(f, "via {}", program.display()),
        }
    }
}

/// What a test body produced before comparison.
enum Body {
    Captured(Vec<u8>),
    TimedOut(Vec<u8>),
    Failed(String),
}

/// Runs test cases one at a time, recording each into a [`CaptureLog`]
pub struct Runner {
    mode: RunMode,
    log: CaptureLog,
}

impl Runner {
    pub fn new(mode: RunMode) -> Self {
        Self::with_log(mode, CaptureLog::new())
    }

    pub fn with_log(mode: RunMode, log: CaptureLog) -> Self {
        Self { mode, log }
    }

    pub fn mode(&self) -> &RunMode {
        &self.mode
    }

    pub fn log(&self) -> &CaptureLog {
        &self.log
    }

    /// Run one case and record its verdict.
    ///
    /// Test failures are part of the returned run. `Err` means the run could
    /// not be written to the capture log file.
    pub async fn run_case(&self, case: &TestCase) -> Result<CapturedRun, HarnessError> {
        let started = Instant::now();
        let body = match &self.mode {
            RunMode::InProcess => run_in_process(case).await,
            RunMode::Subprocess { program, args } => run_subprocess(program, args, case).await,
        };
        let duration = started.elapsed();

        let (stdout, outcome) = match body {
            Body::Captured(bytes) => {
                let outcome = CapturedOutcome::from(compare_str(&bytes, &case.expected()));
                (lossy(bytes), outcome)
            }
            Body::TimedOut(partial) => {
                let limit_ms = u64::try_from(case.timeout.as_millis()).unwrap_or(u64::MAX);
                (lossy(partial), CapturedOutcome::Timeout { limit_ms })
            }
            Body::Failed(message) => (String::new(), CapturedOutcome::Error { message }),
        };

        self.log
            .record(case.id.clone(), stdout, duration, outcome)
            .map_err(|source| HarnessError::LogWrite {
                path: self.log.path().unwrap_or_default(),
                source,
            })
    }

    /// Run cases sequentially in the given order, stopping at the first
    /// capture log failure.
    pub async fn run_all(&self, cases: &[TestCase]) -> Result<Report, HarnessError> {
        let mut runs = Vec::with_capacity(cases.len());
        for case in cases {
            runs.push(self.run_case(case).await?);
        }
        Ok(Report::new(runs))
    }
}

fn lossy(bytes: Vec<u8>) -> String {
    String::from_utf8_lossy(&bytes).into_owned()
}

async fn run_in_process(case: &TestCase) -> Body {
    let buffer = CaptureBuffer::new();
    let mut writer = buffer.writer();
    let input = case.input.clone();
    let repeat = case.repeat;

    let task = tokio::task::spawn_blocking(move || -> Result<(), PutstrError> {
        for _ in 0..repeat {
            my_putstr_to(&mut writer, &input)?;
        }
        writer.flush()?;
        Ok(())
    });

    // A timed-out blocking task keeps running detached; its late writes land
    // in a buffer nobody reads anymore.
    match timeout(case.timeout, task).await {
        Err(_) => Body::TimedOut(buffer.take()),
        Ok(Err(join)) => Body::Failed(format!("test body panicked: {}", join)),
        Ok(Ok(Err(e))) => Body::Failed(e.to_string()),
        Ok(Ok(Ok(()))) => Body::Captured(buffer.take()),
    }
}

async fn run_subprocess(program: &Path, args: &[String], case: &TestCase) -> Body {
    let child = Command::new(program)
        .args(args)
        .arg("--repeat")
        .arg(case.repeat.to_string())
        .arg("--")
        .arg(&case.input)
        .stdin(Stdio::null())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .kill_on_drop(true)
        .spawn();

    let child = match child {
        Ok(child) => child,
        Err(e) => return Body::Failed(format!("failed to spawn {}: {}", program.display(), e)),
    };

    // Dropping the wait future on timeout drops the child, which kills it.
    match timeout(case.timeout, child.wait_with_output()).await {
        Err(_) => Body::TimedOut(Vec::new()),
        Ok(Err(e)) => Body::Failed(format!("failed to collect output: {}", e)),
        Ok(Ok(output)) if !output.status.success() => {
            let stderr = String::from_utf8_lossy(&output.stderr);
            let stderr = stderr.trim();
            if stderr.is_empty() {
                Body::Failed(format!("{} exited with {}", program.display(), output.status))
            } else {
                Body::Failed(format!(
                    "{} exited with {}: {}",
                    program.display(),
                    output.status,
                    stderr
                ))
            }
        }
        Ok(Ok(output)) => Body::Captured(output.stdout),
    }
}

#[cfg(test)]
#[path = "runner_tests.rs"]
mod tests;
