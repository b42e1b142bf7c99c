// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Capture log implementation.

use crate::record::{CapturedOutcome, CapturedRun, TestId};
use parking_lot::Mutex;
use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::{Path, PathBuf};
use std::sync::Arc;
use std::time::{Duration, Instant, SystemTime};

/// JSONL mirror of the log.
struct Sink {
    path: PathBuf,
    writer: BufWriter<File>,
}

/// Append-only log of test runs, shared between clones
#[derive(Clone)]
pub struct CaptureLog {
    start: Instant,
    runs: Arc<Mutex<Vec<CapturedRun>>>,
    sink: Option<Arc<Mutex<Sink>>>,
}

impl CaptureLog {
    /// Create a new in-memory capture log
    pub fn new() -> Self {
        Self {
            start: Instant::now(),
            runs: Arc::new(Mutex::new(Vec::new())),
            sink: None,
        }
    }

    /// Create a capture log that also writes every run to `path`, one JSON
    /// object per line
    pub fn with_file(path: &Path) -> io::Result<Self> {
        let file = File::create(path)?;
        Ok(Self {
            sink: Some(Arc::new(Mutex::new(Sink {
                path: path.to_path_buf(),
                writer: BufWriter::new(file),
            }))),
            ..Self::new()
        })
    }

    /// Path of the JSONL mirror, if any.
    pub fn path(&self) -> Option<PathBuf> {
        self.sink.as_ref().map(|sink| sink.lock().path.clone())
    }

    /// Record a run and return the stored entry.
    ///
    /// The run is kept in memory even when writing the JSONL line fails; the
    /// error is returned so the caller can stop.
    pub fn record(
        &self,
        test: TestId,
        stdout: String,
        duration: Duration,
        outcome: CapturedOutcome,
    ) -> io::Result<CapturedRun> {
        let mut runs = self.runs.lock();
        let run = CapturedRun {
            seq: runs.len() as u64,
            timestamp: SystemTime::now(),
            elapsed: self.start.elapsed(),
            duration,
            test,
            stdout,
            outcome,
        };
        runs.push(run.clone());

        // Written under the runs lock so file order matches seq order.
        if let Some(ref sink) = self.sink {
            let mut sink = sink.lock();
            serde_json::to_writer(&mut sink.writer, &run)?;
            sink.writer.write_all(b"\n")?;
            sink.writer.flush()?;
        }
        Ok(run)
    }

    /// Get all recorded runs
    pub fn runs(&self) -> Vec<CapturedRun> {
        self.runs.lock().clone()
    }

    /// Count runs matching a predicate
    pub fn count<F: Fn(&CapturedRun) -> bool>(&self, pred: F) -> usize {
        self.runs.lock().iter().filter(|r| pred(r)).count()
    }

    /// Find runs whose `suite::name` contains `pattern`
    pub fn find_by_name(&self, pattern: &str) -> Vec<CapturedRun> {
        self.filtered(|r| r.test.to_string().contains(pattern))
    }

    pub fn find_passes(&self) -> Vec<CapturedRun> {
        self.filtered(|r| r.outcome.is_pass())
    }

    /// Find runs that did not pass (mismatch, timeout or error)
    pub fn find_failures(&self) -> Vec<CapturedRun> {
        self.filtered(|r| !r.outcome.is_pass())
    }

    fn filtered(&self, pred: impl Fn(&CapturedRun) -> bool) -> Vec<CapturedRun> {
        self.runs.lock().iter().filter(|r| pred(r)).cloned().collect()
    }

    pub fn len(&self) -> usize {
        self.runs.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.runs.lock().is_empty()
    }
}

impl Default for CaptureLog {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
#[path = "log_tests.rs"]
mod tests;
