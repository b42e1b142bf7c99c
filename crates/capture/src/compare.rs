// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Exact comparison of captured output against an expected literal.

/// Result of comparing captured output with the expected string.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Comparison {
    Match,
    Mismatch { expected: String, actual: String },
}

impl Comparison {
    pub fn is_match(&self) -> bool {
        matches!(self, Comparison::Match)
    }
}

/// Compare `captured` bytes with `expected`, byte for byte.
///
/// Nothing is trimmed or normalized: a missing trailing newline or extra
/// whitespace is a mismatch. On mismatch `actual` is the lossy UTF-8 text of
/// the capture.
pub fn compare_str(captured: &[u8], expected: &str) -> Comparison {
    if captured == expected.as_bytes() {
        Comparison::Match
    } else {
        Comparison::Mismatch {
            expected: expected.to_string(),
            actual: String::from_utf8_lossy(captured).into_owned(),
        }
    }
}

#[cfg(test)]
#[path = "compare_tests.rs"]
mod tests;
