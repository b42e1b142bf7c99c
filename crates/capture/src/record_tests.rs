// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
use super::*;
use crate::compare::compare_str;

#[test]
fn test_id_display() {
    let id = TestId::new("my_putstr", "it_works");
    assert_eq!(id.to_string(), "my_putstr::it_works");
}

#[test]
fn test_outcome_from_comparison() {
    assert_eq!(
        CapturedOutcome::from(compare_str(b"hello!\n", "hello!\n")),
        CapturedOutcome::Pass
    );
    assert_eq!(
        CapturedOutcome::from(compare_str(b"hello!", "hello!\n")),
        CapturedOutcome::Fail {
            expected: "hello!\n".to_string(),
            actual: "hello!".to_string(),
        }
    );
}

#[test]
fn test_outcome_labels() {
    assert_eq!(CapturedOutcome::Pass.label(), "PASS");
    assert_eq!(CapturedOutcome::Timeout { limit_ms: 1000 }.label(), "TIMEOUT");
    assert_eq!(
        CapturedOutcome::Error {
            message: "boom".to_string()
        }
        .label(),
        "ERROR"
    );
    assert!(!CapturedOutcome::Timeout { limit_ms: 1 }.is_pass());
}

#[test]
fn test_outcome_tagged_json() {
    let json = serde_json::to_value(CapturedOutcome::Timeout { limit_ms: 1000 }).unwrap();
    assert_eq!(json, serde_json::json!({ "type": "timeout", "limit_ms": 1000 }));

    let json = serde_json::to_value(CapturedOutcome::Pass).unwrap();
    assert_eq!(json, serde_json::json!({ "type": "pass" }));
}

#[test]
fn test_run_serialization() {
    let run = CapturedRun {
        seq: 3,
        timestamp: SystemTime::UNIX_EPOCH,
        elapsed: Duration::from_millis(1500),
        duration: Duration::from_micros(42),
        test: TestId::new("my_putstr", "it_works"),
        stdout: "hello!\n".to_string(),
        outcome: CapturedOutcome::Pass,
    };

    let json = serde_json::to_string(&run).unwrap();
    let parsed: CapturedRun = serde_json::from_str(&json).unwrap();

    assert_eq!(parsed.seq, 3);
    assert_eq!(parsed.elapsed, Duration::from_millis(1500));
    assert_eq!(parsed.duration, Duration::from_micros(42));
    assert_eq!(parsed.test, run.test);
    assert_eq!(parsed.stdout, "hello!\n");
    assert_eq!(parsed.outcome, CapturedOutcome::Pass);
}
