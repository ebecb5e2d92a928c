use mini_ir::{Position, Token, TokenKind, TokenList};
use pretty_assertions::assert_eq;

use super::lex;
use crate::{parse, Expected, ParseError};

fn unexpected(err: ParseError) -> (Expected, TokenKind, Position) {
    match err {
        ParseError::UnexpectedToken { expected, found } => (expected, found.kind, found.position()),
        other => panic!("expected UnexpectedToken, got {other:?}"),
    }
}

#[test]
fn accepts_assignment() {
    assert_eq!(parse(&lex("x = 1 + 2\n")), Ok(()));
}

#[test]
fn accepts_print() {
    assert_eq!(parse(&lex("print(1+2)\n")), Ok(()));
}

#[test]
fn accepts_multiple_statements() {
    let source = "a = 3\nb = a * (a + 1)\n\nprint(a + b * 2)\n";
    assert_eq!(parse(&lex(source)), Ok(()));
}

#[test]
fn accepts_empty_program() {
    assert_eq!(parse(&lex("\n")), Ok(()));
    assert_eq!(parse(&lex("  \n\n\t\n")), Ok(()));
}

#[test]
fn accepts_unary_chains() {
    for source in ["x = --5\n", "x = +-+5\n", "print(-(-y))\n", "x = -1 * +2\n"] {
        assert_eq!(parse(&lex(source)), Ok(()), "{source:?}");
    }
}

#[test]
fn print_without_paren() {
    let err = parse(&lex("print 1)\n")).unwrap_err();
    assert_eq!(
        unexpected(err),
        (
            Expected::Token(TokenKind::LeftParen),
            TokenKind::UnsignedInt,
            Position::new(1, 7)
        )
    );
}

#[test]
fn missing_factor() {
    let err = parse(&lex("x = +\n")).unwrap_err();
    assert_eq!(
        unexpected(err),
        (Expected::Factor, TokenKind::Newline, Position::new(1, 6))
    );
}

#[test]
fn binary_minus_is_rejected() {
    let err = parse(&lex("x = 1 - 2\n")).unwrap_err();
    assert_eq!(
        unexpected(err),
        (
            Expected::Token(TokenKind::Newline),
            TokenKind::Minus,
            Position::new(1, 7)
        )
    );
}

#[test]
fn unclosed_paren() {
    let err = parse(&lex("print((1)\n")).unwrap_err();
    assert_eq!(
        unexpected(err),
        (
            Expected::Token(TokenKind::RightParen),
            TokenKind::Newline,
            Position::new(1, 10)
        )
    );
}

#[test]
fn statement_must_start_with_name_or_print() {
    let err = parse(&lex("x = 1\n5\n")).unwrap_err();
    assert_eq!(
        unexpected(err),
        (
            Expected::Token(TokenKind::EndOfFile),
            TokenKind::UnsignedInt,
            Position::new(2, 1)
        )
    );
}

#[test]
fn lone_newline_is_rejected() {
    let tokens = TokenList::from_vec(vec![
        Token::new(TokenKind::Newline, "\n", Position::new(1, 1)),
        Token::eof(Position::new(2, 1)),
    ]);
    let err = parse(&tokens).unwrap_err();
    assert_eq!(
        unexpected(err),
        (
            Expected::Token(TokenKind::EndOfFile),
            TokenKind::Newline,
            Position::new(1, 1)
        )
    );
}

#[test]
fn missing_sentinel_is_end_of_sequence() {
    let tokens = TokenList::from_vec(vec![
        Token::new(TokenKind::Name, "x", Position::new(1, 1)),
        Token::new(TokenKind::Assign, "=", Position::new(1, 3)),
        Token::new(TokenKind::UnsignedInt, "1", Position::new(1, 5)),
    ]);
    assert_eq!(
        parse(&tokens),
        Err(ParseError::UnexpectedEndOfSequence {
            last: Some(tokens.as_slice()[2].clone())
        })
    );
}

#[test]
fn empty_list_is_end_of_sequence() {
    assert_eq!(
        parse(&TokenList::from_vec(Vec::new())),
        Err(ParseError::UnexpectedEndOfSequence { last: None })
    );
}

#[test]
fn simple_stmt_names_statement() {
    let tokens = lex("5\n");
    let mut parser = crate::Parser::new(&tokens, crate::ParserConfig::default()).unwrap();
    let err = parser.simple_stmt().unwrap_err();
    assert_eq!(
        unexpected(err),
        (Expected::Statement, TokenKind::UnsignedInt, Position::new(1, 1))
    );
}
