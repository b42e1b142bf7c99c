// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Harness error types.

use libmy_capture::TestId;
use std::path::PathBuf;

/// Problems with a suite file.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("failed to read {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid suite file {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    #[error("{test}: timeout_ms must be greater than zero")]
    ZeroTimeout { test: TestId },

    #[error("{test}: repeat must be at least 1")]
    ZeroRepeat { test: TestId },

    #[error("{test}: repeat {repeat} exceeds the limit of {limit}")]
    RepeatTooLarge {
        test: TestId,
        repeat: usize,
        limit: usize,
    },

    #[error("{test}: input repeated would exceed {limit} bytes of output")]
    OutputTooLarge { test: TestId, limit: usize },

    #[error("{test}: suite and name must not be empty")]
    EmptyId { test: TestId },

    #[error("duplicate test {0}")]
    Duplicate(TestId),
}

/// Failures that stop the harness before or outside a test body.
#[derive(Debug, thiserror::Error)]
pub enum HarnessError {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error("failed to open capture log {path}: {source}")]
    Log {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to write capture log {path}: {source}")]
    LogWrite {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to write report: {0}")]
    Report(#[from] std::io::Error),
}
