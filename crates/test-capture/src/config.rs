// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! TOML suite files.
//!
//! ```toml
//! timeout_ms = 1000
//!
//! [[tests]]
//! suite = "my_putstr"
//! name = "it_works"
//! input = "hello!\n"
//! expected = "hello!\n"
//! ```

use crate::case::{TestCase, DEFAULT_TIMEOUT, MAX_OUTPUT_BYTES, MAX_REPEAT};
use crate::error::ConfigError;
use crate::registry::Registry;
use libmy_capture::TestId;
use serde::{Deserialize, Serialize};
use std::path::Path;
use std::time::Duration;

/// Top-level suite file
#[derive(Clone, Debug, Default, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct HarnessConfig {
    /// Default timeout for tests that don't set their own
    #[serde(default)]
    pub timeout_ms: Option<u64>,

    #[serde(default)]
    pub tests: Vec<TestSpec>,
}

/// One `[[tests]]` entry
#[derive(Clone, Debug, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct TestSpec {
    pub suite: String,
    pub name: String,

    #[serde(default)]
    pub input: String,

    /// Defaults to `input` repeated `repeat` times
    #[serde(default)]
    pub expected: Option<String>,

    #[serde(default)]
    pub timeout_ms: Option<u64>,

    #[serde(default)]
    pub repeat: Option<usize>,
}

impl HarnessConfig {
    /// Load and parse a suite file.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        toml::from_str(&content).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })
    }

    /// Validate every entry and register it, in file order.
    pub fn into_registry(self) -> Result<Registry, ConfigError> {
        let default_timeout = self.timeout_ms;
        let mut registry = Registry::new();
        for spec in self.tests {
            registry.register(spec.into_case(default_timeout)?)?;
        }
        Ok(registry)
    }
}

impl TestSpec {
    fn into_case(self, default_timeout_ms: Option<u64>) -> Result<TestCase, ConfigError> {
        let id = TestId::new(&self.suite, &self.name);
        if self.suite.is_empty() || self.name.is_empty() {
            return Err(ConfigError::EmptyId { test: id });
        }

        let timeout = match self.timeout_ms.or(default_timeout_ms) {
            Some(0) => return Err(ConfigError::ZeroTimeout { test: id }),
            Some(ms) => Duration::from_millis(ms),
            None => DEFAULT_TIMEOUT,
        };

        let repeat = self.repeat.unwrap_or(1);
        if repeat == 0 {
            return Err(ConfigError::ZeroRepeat { test: id });
        }
        if repeat > MAX_REPEAT {
            return Err(ConfigError::RepeatTooLarge {
                test: id,
                repeat,
                limit: MAX_REPEAT,
            });
        }

        let case = TestCase {
            id,
            input: self.input,
            expected: self.expected,
            timeout,
            repeat,
        };
        match case.output_len() {
            Some(len) if len <= MAX_OUTPUT_BYTES => Ok(case),
            _ => Err(ConfigError::OutputTooLarge {
                test: case.id,
                limit: MAX_OUTPUT_BYTES,
            }),
        }
    }
}

#[cfg(test)]
#[path = "config_tests.rs"]
mod tests;
