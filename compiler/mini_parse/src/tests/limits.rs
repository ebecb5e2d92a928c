use mini_ir::{Position, TokenKind};
use pretty_assertions::assert_eq;

use super::lex;
use crate::{parse, parse_with_config, ParseError, ParserConfig};

fn nested_parens(n: usize) -> String {
    format!("x = {}1{}\n", "(".repeat(n), ")".repeat(n))
}

#[test]
fn default_limit() {
    assert_eq!(ParserConfig::default().max_depth, 1024);
}

#[test]
fn limit_counts_active_nonterminals() {
    // program, stmt, simplestmt, expr, term, factor
    let config = ParserConfig::default().with_max_depth(6);
    assert_eq!(parse_with_config(&lex("x = 1\n"), config), Ok(()));

    match parse_with_config(&lex("x = -1\n"), config) {
        Err(ParseError::NestingTooDeep { limit, token }) => {
            assert_eq!(limit, 6);
            assert_eq!(token.kind, TokenKind::UnsignedInt);
            assert_eq!(token.position(), Position::new(1, 6));
        }
        other => panic!("expected NestingTooDeep, got {other:?}"),
    }
}

#[test]
fn depth_is_released_between_statements() {
    let config = ParserConfig::default().with_max_depth(6);
    let source = "x = 1\ny = 2\nz = 3\n";
    assert_eq!(parse_with_config(&lex(source), config), Ok(()));
}

#[test]
fn default_limit_trips_on_deep_parens() {
    let err = parse(&lex(&nested_parens(2000))).unwrap_err();
    assert!(matches!(err, ParseError::NestingTooDeep { limit: 1024, .. }));
}

#[test]
fn deep_nesting_within_raised_limit() {
    let config = ParserConfig::default().with_max_depth(100_000);
    assert_eq!(parse_with_config(&lex(&nested_parens(10_000)), config), Ok(()));

    let source = format!("x = {}1\n", "-".repeat(20_000));
    assert_eq!(parse_with_config(&lex(&source), config), Ok(()));
}
