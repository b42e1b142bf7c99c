// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Small output utilities.
//!
//! The centerpiece is [`my_putstr`], which writes a string verbatim to
//! standard output. [`my_putstr_to`] does the same against any writer and is
//! what test harnesses use to redirect output in-process.

pub mod diagnostic;
mod putstr;

pub use putstr::{my_putstr, my_putstr_to, PutstrError};

/// Exit codes used by the `my_putstr` binary
pub mod exit_codes {
    /// Text written successfully
    pub const SUCCESS: i32 = 0;
    /// Writing to stdout failed
    pub const ERROR: i32 = 1;
}
