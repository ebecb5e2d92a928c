use super::*;
use mini_ir::{Position, TokenKind};
use pretty_assertions::assert_eq;

#[test]
fn header_then_blank_line() {
    let mut out = Vec::new();
    write_header(&mut out).unwrap();
    assert_eq!(
        String::from_utf8(out).unwrap(),
        "Line   Col  Category       Lexeme\n\n"
    );
}

#[test]
fn row_columns() {
    let token = Token::new(TokenKind::Name, "x", Position::new(1, 1));
    assert_eq!(
        format_row(&token),
        "1      1    NAME           x         "
    );
}

#[test]
fn newline_lexeme_is_escaped() {
    let token = Token::new(TokenKind::Newline, "\n", Position::new(12, 10));
    assert_eq!(
        format_row(&token),
        "12     10   NEWLINE        \\n        "
    );
}

#[test]
fn long_values_are_not_truncated() {
    let token = Token::new(TokenKind::Name, "a_very_long_name", Position::new(1234567, 12345));
    let mut out = Vec::new();
    write_row(&mut out, &token).unwrap();
    assert_eq!(
        String::from_utf8(out).unwrap(),
        "123456712345NAME           a_very_long_name\n"
    );
}
