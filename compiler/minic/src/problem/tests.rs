use super::*;
use mini_diagnostic::ErrorCode;
use mini_ir::{Position, Token, TokenKind};
use mini_parse::Expected;
use pretty_assertions::assert_eq;

fn render(problem: &Problem, format: ErrorFormat) -> String {
    let mut out = Vec::new();
    emit(
        &problem.into_diagnostic(),
        format,
        ColorMode::Never,
        false,
        &mut out,
    )
    .unwrap();
    String::from_utf8(out).unwrap()
}

#[test]
fn lex_error_rendering() {
    let problem = Problem::from(LexError::invalid_character('@', Position::new(1, 3)));
    let diag = problem.into_diagnostic();
    assert_eq!(diag.code, ErrorCode::E0001);
    assert_eq!(
        render(&problem, ErrorFormat::Human),
        "\nError on '@' line 1 column 3\n\
         error[E0001]: invalid token\n  = note: '@' does not start any token\n"
    );
}

#[test]
fn parse_error_rendering() {
    let problem = Problem::from(ParseError::UnexpectedToken {
        expected: Expected::Factor,
        found: Token::new(TokenKind::Newline, "\n", Position::new(1, 6)),
    });
    assert_eq!(
        render(&problem, ErrorFormat::Human),
        "\nError on '\\n' line 1 column 6\n\
         error[E1001]: expecting factor\n  = note: found NEWLINE\n"
    );
}

#[test]
fn recognize_error_code() {
    let problem = Problem::from(RecognizeError::TrailingInput {
        found: 'b',
        offset: 3,
    });
    assert_eq!(problem.into_diagnostic().code, ErrorCode::E1003);
}

#[test]
fn driver_error_json() {
    let problem = Problem::from(DriverError::NotFound {
        path: "a.mini".to_string(),
    });
    let text = render(&problem, ErrorFormat::Json);
    assert!(text.starts_with("[\n"));
    assert!(text.contains("\"code\": \"E9001\""));
    assert!(text.contains("\"message\": \"cannot find file 'a.mini'\""));
    assert!(text.contains("\"lexeme\": null"));
}

/// Accepts the first write, then reports a closed pipe.
struct ClosedAfterNewline {
    written: usize,
}

impl std::io::Write for ClosedAfterNewline {
    fn write(&mut self, buf: &[u8]) -> std::io::Result<usize> {
        if self.written > 0 {
            return Err(std::io::ErrorKind::BrokenPipe.into());
        }
        self.written += buf.len();
        Ok(buf.len())
    }

    fn flush(&mut self) -> std::io::Result<()> {
        Ok(())
    }
}

#[test]
fn emit_returns_write_failure() {
    let diag = Problem::from(LexError::invalid_character('@', Position::new(1, 3))).into_diagnostic();
    for format in [ErrorFormat::Human, ErrorFormat::Json] {
        let mut out = ClosedAfterNewline { written: 0 };
        let err = emit(&diag, format, ColorMode::Never, false, &mut out).unwrap_err();
        assert_eq!(err.kind(), std::io::ErrorKind::BrokenPipe, "{format:?}");
    }
}
