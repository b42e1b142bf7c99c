// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
use super::*;
use proptest::prelude::*;
use std::thread;

fn id(name: &str) -> TestId {
    TestId::new("my_putstr", name)
}

fn pass(log: &CaptureLog, name: &str) -> CapturedRun {
    log.record(
        id(name),
        "hello!\n".to_string(),
        Duration::ZERO,
        CapturedOutcome::Pass,
    )
    .unwrap()
}

fn fail(log: &CaptureLog, name: &str) -> CapturedRun {
    log.record(
        id(name),
        "hello!".to_string(),
        Duration::ZERO,
        CapturedOutcome::Fail {
            expected: "hello!\n".to_string(),
            actual: "hello!".to_string(),
        },
    )
    .unwrap()
}

#[test]
fn test_record_and_retrieve() {
    let log = CaptureLog::new();

    let run = pass(&log, "it_works");

    assert_eq!(run.seq, 0);
    assert_eq!(log.len(), 1);
    let runs = log.runs();
    assert_eq!(runs[0].test.to_string(), "my_putstr::it_works");
    assert_eq!(runs[0].stdout, "hello!\n");
}

#[test]
fn test_count() {
    let log = CaptureLog::new();
    pass(&log, "a");
    fail(&log, "b");
    pass(&log, "c");

    assert_eq!(log.count(|r| r.outcome.is_pass()), 2);
    assert_eq!(log.count(|r| r.test.name == "b"), 1);
}

#[test]
fn test_find_by_name() {
    let log = CaptureLog::new();
    pass(&log, "it_works");
    pass(&log, "empty");
    log.record(
        TestId::new("other", "it_works"),
        String::new(),
        Duration::ZERO,
        CapturedOutcome::Pass,
    )
    .unwrap();

    assert_eq!(log.find_by_name("it_works").len(), 2);
    assert_eq!(log.find_by_name("my_putstr::").len(), 2);
    assert_eq!(log.find_by_name("other::it_works").len(), 1);
    assert!(log.find_by_name("missing").is_empty());
}

#[test]
fn test_failures_include_timeout_and_error() {
    let log = CaptureLog::new();
    pass(&log, "ok");
    fail(&log, "mismatch");
    log.record(
        id("slow"),
        String::new(),
        Duration::from_secs(1),
        CapturedOutcome::Timeout { limit_ms: 1000 },
    )
    .unwrap();
    log.record(
        id("broken"),
        String::new(),
        Duration::ZERO,
        CapturedOutcome::Error {
            message: "spawn failed".to_string(),
        },
    )
    .unwrap();

    assert_eq!(log.find_passes().len(), 1);
    let failures: Vec<_> = log.find_failures().into_iter().map(|r| r.test.name).collect();
    assert_eq!(failures, vec!["mismatch", "slow", "broken"]);
}

#[test]
fn test_clone_shares_runs() {
    let log = CaptureLog::new();
    let other = log.clone();
    pass(&other, "shared");
    assert_eq!(log.len(), 1);
}

#[test]
fn test_with_file_writes_jsonl() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("runs.jsonl");

    let log = CaptureLog::with_file(&path).unwrap();
    pass(&log, "it_works");
    fail(&log, "missing_newline");

    let content = std::fs::read_to_string(&path).unwrap();
    let lines: Vec<&str> = content.lines().collect();
    assert_eq!(lines.len(), 2);

    let first: CapturedRun = serde_json::from_str(lines[0]).unwrap();
    assert_eq!(first.test.name, "it_works");
    assert_eq!(first.outcome, CapturedOutcome::Pass);

    let second: serde_json::Value = serde_json::from_str(lines[1]).unwrap();
    assert_eq!(second["outcome"]["type"], "fail");
    assert_eq!(second["seq"], 1);
}

#[test]
fn test_in_memory_log_has_no_path() {
    assert_eq!(CaptureLog::new().path(), None);
}

#[test]
fn test_with_file_reports_path() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("runs.jsonl");
    let log = CaptureLog::with_file(&path).unwrap();
    assert_eq!(log.path(), Some(path));
}

#[cfg(target_os = "linux")]
#[test]
fn test_write_failure_is_returned() {
    let log = CaptureLog::with_file(Path::new("/dev/full")).unwrap();

    let err = log
        .record(
            id("it_works"),
            "hello!\n".to_string(),
            Duration::ZERO,
            CapturedOutcome::Pass,
        )
        .unwrap_err();

    assert_eq!(err.raw_os_error(), Some(28)); // ENOSPC
    // Still kept in memory for the report.
    assert_eq!(log.len(), 1);
}

#[test]
fn test_concurrent_records_get_unique_seq() {
    let log = CaptureLog::new();
    let handles: Vec<_> = (0..8)
        .map(|t| {
            let log = log.clone();
            thread::spawn(move || {
                for i in 0..10 {
                    pass(&log, &format!("t{}_{}", t, i));
                }
            })
        })
        .collect();
    for h in handles {
        h.join().unwrap();
    }

    let runs = log.runs();
    assert_eq!(runs.len(), 80);
    for (i, run) in runs.iter().enumerate() {
        assert_eq!(run.seq, i as u64);
    }
}

proptest! {
    #[test]
    fn len_equals_record_count(count in 0usize..100) {
        let log = CaptureLog::new();
        for _ in 0..count {
            pass(&log, "p");
        }
        prop_assert_eq!(log.len(), count);
    }

    #[test]
    fn passes_and_failures_partition(passes in 0usize..20, failures in 0usize..20) {
        let log = CaptureLog::new();
        for _ in 0..passes {
            pass(&log, "p");
        }
        for _ in 0..failures {
            fail(&log, "f");
        }

        prop_assert_eq!(log.find_passes().len(), passes);
        prop_assert_eq!(log.find_failures().len(), failures);
        prop_assert_eq!(log.len(), passes + failures);
    }
}
