#![allow(clippy::unwrap_used, reason = "Tests use unwrap for brevity")]

use super::*;
use crate::{ErrorCode, Location};
use mini_ir::Position;
use pretty_assertions::assert_eq;

fn render(diags: &[Diagnostic]) -> String {
    let mut output = Vec::new();
    let mut emitter = JsonEmitter::new(&mut output);
    emitter.begin().unwrap();
    for diag in diags {
        emitter.emit(diag).unwrap();
    }
    emitter.end().unwrap();
    emitter.flush().unwrap();
    String::from_utf8(output).unwrap()
}

#[test]
fn single_diagnostic() {
    let diag = Diagnostic::error(ErrorCode::E1001)
        .with_message("expecting factor")
        .with_location(Location::new("\n", Position::new(1, 6)))
        .with_note("found NEWLINE");

    assert_eq!(
        render(&[diag]),
        "[\n  {\n    \"code\": \"E1001\",\n    \"message\": \"expecting factor\",\n    \
         \"lexeme\": \"\\n\",\n    \"line\": 1,\n    \"column\": 6,\n    \
         \"notes\": [\"found NEWLINE\"]\n  }\n]\n"
    );
}

#[test]
fn missing_location_is_null() {
    let diag = Diagnostic::error(ErrorCode::E9001).with_message("cannot read \"x\"");
    let text = render(&[diag]);
    assert!(text.contains("\"lexeme\": null,"));
    assert!(text.contains("\"line\": null,"));
    assert!(text.contains("\"message\": \"cannot read \\\"x\\\"\""));
    assert!(text.contains("\"notes\": []"));
}

#[test]
fn multiple_are_comma_separated() {
    let text = render(&[
        Diagnostic::error(ErrorCode::E0001),
        Diagnostic::error(ErrorCode::E1003),
    ]);
    assert!(text.contains("  },\n  {"));
    assert!(text.contains("E0001"));
    assert!(text.contains("E1003"));
}

#[test]
fn empty_array() {
    assert_eq!(render(&[]), "[\n]\n");
}

/// Rejects every write.
struct ClosedPipe;

impl std::io::Write for ClosedPipe {
    fn write(&mut self, _buf: &[u8]) -> std::io::Result<usize> {
        Err(std::io::Error::from(std::io::ErrorKind::BrokenPipe))
    }

    fn flush(&mut self) -> std::io::Result<()> {
        Ok(())
    }
}

#[test]
fn write_failure_is_returned() {
    let mut emitter = JsonEmitter::new(ClosedPipe);
    assert_eq!(
        emitter.begin().unwrap_err().kind(),
        std::io::ErrorKind::BrokenPipe
    );
    let err = emitter.emit(&Diagnostic::error(ErrorCode::E1001)).unwrap_err();
    assert_eq!(err.kind(), std::io::ErrorKind::BrokenPipe);
}
