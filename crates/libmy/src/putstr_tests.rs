// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
use super::*;
use proptest::prelude::*;
use rstest::rstest;

/// Writer that fails every write with the given error kind.
struct FailingWriter(io::ErrorKind);

impl Write for FailingWriter {
    fn write(&mut self, _buf: &[u8]) -> io::Result<usize> {
        Err(io::Error::new(self.0, "write refused"))
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

fn put(text: &str) -> Vec<u8> {
    let mut buf = Vec::new();
    my_putstr_to(&mut buf, text).unwrap();
    buf
}

#[test]
fn test_it_works() {
    assert_eq!(put("hello!\n"), b"hello!\n");
}

#[rstest]
#[case("")]
#[case("\n")]
#[case("no newline")]
#[case("two\nlines\n")]
#[case("  padded  ")]
#[case("ünïcödé ✓\n")]
fn test_writes_verbatim(#[case] text: &str) {
    assert_eq!(put(text), text.as_bytes());
}

#[test]
fn test_empty_writes_nothing_even_to_failing_writer() {
    let mut writer = FailingWriter(io::ErrorKind::Other);
    assert!(my_putstr_to(&mut writer, "").is_ok());
}

#[test]
fn test_twice_concatenates() {
    let mut buf = Vec::new();
    my_putstr_to(&mut buf, "hello!\n").unwrap();
    my_putstr_to(&mut buf, "hello!\n").unwrap();
    assert_eq!(buf, b"hello!\nhello!\n");
}

#[test]
fn test_works_through_dyn_writer() {
    let mut buf: Vec<u8> = Vec::new();
    let writer: &mut dyn Write = &mut buf;
    my_putstr_to(writer, "dyn\n").unwrap();
    assert_eq!(buf, b"dyn\n");
}

#[test]
fn test_broken_pipe_maps_to_closed() {
    let mut writer = FailingWriter(io::ErrorKind::BrokenPipe);
    let err = my_putstr_to(&mut writer, "hello!\n").unwrap_err();
    assert!(matches!(err, PutstrError::Closed(_)));
    assert_eq!(err.to_string(), "output stream closed");
}

#[test]
fn test_other_errors_map_to_write() {
    let mut writer = FailingWriter(io::ErrorKind::PermissionDenied);
    let err = my_putstr_to(&mut writer, "hello!\n").unwrap_err();
    assert!(matches!(err, PutstrError::Write(_)));
    assert!(err.to_string().contains("write refused"));
}

#[test]
fn test_my_putstr_empty_on_stdout_succeeds() {
    my_putstr("").unwrap();
}

proptest! {
    #[test]
    fn output_equals_input(text in any::<String>()) {
        prop_assert_eq!(put(&text), text.as_bytes().to_vec());
    }

    #[test]
    fn repeated_calls_concatenate(text in ".{0,32}", times in 0usize..5) {
        let mut buf = Vec::new();
        for _ in 0..times {
            my_putstr_to(&mut buf, &text).unwrap();
        }
        prop_assert_eq!(buf, text.repeat(times).into_bytes());
    }
}
