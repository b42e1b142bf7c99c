// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Output capture and run recording for test assertions.
//!
//! This crate provides an in-memory sink that code under test can write to
//! in place of stdout, an exact string comparison, and a log of every test
//! run with its captured output and verdict.

mod buffer;
mod compare;
mod duration_serde;
mod log;
mod record;

pub use buffer::{CaptureBuffer, CaptureWriter};
pub use compare::{compare_str, Comparison};
pub use log::CaptureLog;
pub use record::{CapturedOutcome, CapturedRun, TestId};
