// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Verbatim string output.

use std::io::{self, Write};

/// Errors raised while writing a string.
#[derive(Debug, thiserror::Error)]
pub enum PutstrError {
    /// The reading end of the stream went away (e.g. `| head`).
    #[error("output stream closed")]
    Closed(#[source] io::Error),

    /// Any other write or flush failure.
    #[error("failed to write output: {0}")]
    Write(#[source] io::Error),
}

impl From<io::Error> for PutstrError {
    fn from(err: io::Error) -> Self {
        if err.kind() == io::ErrorKind::BrokenPipe {
            PutstrError::Closed(err)
        } else {
            PutstrError::Write(err)
        }
    }
}

/// Write `text` to standard output exactly as given.
///
/// Stdout is flushed before returning, so every byte of `text` is visible to
/// whoever reads the stream once this call completes. An empty `text` writes
/// nothing.
pub fn my_putstr(text: &str) -> Result<(), PutstrError> {
    let stdout = io::stdout();
    let mut lock = stdout.lock();
    my_putstr_to(&mut lock, text)?;
    lock.flush()?;
    Ok(())
}

/// Write `text` to `writer` exactly as given.
///
/// Does not flush; buffering is left to the writer.
pub fn my_putstr_to<W: Write + ?Sized>(writer: &mut W, text: &str) -> Result<(), PutstrError> {
    if text.is_empty() {
        return Ok(());
    }
    writer.write_all(text.as_bytes())?;
    Ok(())
}

#[cfg(test)]
#[path = "putstr_tests.rs"]
mod tests;
