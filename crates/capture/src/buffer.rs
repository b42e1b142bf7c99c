// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Shared in-memory output sink.

use parking_lot::Mutex;
use std::io;
use std::sync::Arc;

/// Byte buffer standing in for a redirected output stream.
///
/// Clones share the same storage, so a writer can be handed to the code under
/// test while the harness keeps a handle to read the result.
#[derive(Clone, Debug, Default)]
pub struct CaptureBuffer {
    bytes: Arc<Mutex<Vec<u8>>>,
}

impl CaptureBuffer {
    pub fn new() -> Self {
        Self::default()
    }

    /// A `Write` handle appending to this buffer.
    pub fn writer(&self) -> CaptureWriter {
        CaptureWriter {
            bytes: Arc::clone(&self.bytes),
        }
    }

    /// Copy of everything captured so far.
    pub fn contents(&self) -> Vec<u8> {
        self.bytes.lock().clone()
    }

    /// Captured bytes as text, replacing invalid UTF-8.
    pub fn as_string(&self) -> String {
        String::from_utf8_lossy(&self.bytes.lock()).into_owned()
    }

    /// Drain the buffer, returning what it held.
    pub fn take(&self) -> Vec<u8> {
        std::mem::take(&mut *self.bytes.lock())
    }

    pub fn clear(&self) {
        self.bytes.lock().clear();
    }

    pub fn len(&self) -> usize {
        self.bytes.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.bytes.lock().is_empty()
    }
}

/// Writer half of a [`CaptureBuffer`].
#[derive(Clone, Debug)]
pub struct CaptureWriter {
    bytes: Arc<Mutex<Vec<u8>>>,
}

impl io::Write for CaptureWriter {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.bytes.lock().extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

#[cfg(test)]
#[path = "buffer_tests.rs"]
mod tests;
