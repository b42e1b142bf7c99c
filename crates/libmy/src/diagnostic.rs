// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Stderr diagnostics.
//!
//! Stdout carries the text under test, so every message from the tools goes
//! to stderr. Errors and warnings are colored when stderr is a terminal.

use std::fmt::Display;
use std::io::{self, IsTerminal, Write};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Level {
    Error,
    Warning,
}

impl Level {
    fn prefix(self) -> &'static str {
        match self {
            Level::Error => "Error",
            Level::Warning => "Warning",
        }
    }

    /// SGR color code
    fn color(self) -> u8 {
        match self {
            Level::Error => 31,
            Level::Warning => 33,
        }
    }
}

/// Print an error message to stderr.
pub fn print_error(msg: impl Display) {
    emit(Level::Error, msg);
}

/// Print a warning message to stderr.
pub fn print_warning(msg: impl Display) {
    emit(Level::Warning, msg);
}

/// Print an uncolored progress line, `tool: msg`.
pub fn print_info(tool: &str, msg: impl Display) {
    let _ = writeln!(io::stderr().lock(), "{}: {}", tool, msg);
}

fn emit(level: Level, msg: impl Display) {
    let stderr = io::stderr();
    let color = stderr.is_terminal();
    let _ = write_diagnostic(&mut stderr.lock(), level, msg, color);
}

fn write_diagnostic<W: Write>(
    writer: &mut W,
    level: Level,
    msg: impl Display,
    color: bool,
) -> io::Result<()> {
    if color {
        writeln!(writer, "\x1b[{}m{}: {}\x1b[0m", level.color(), level.prefix(), msg)
    } else {
        writeln!(writer, "{}: {}", level.prefix(), msg)
    }
}

#[cfg(test)]
#[path = "diagnostic_tests.rs"]
mod tests;
