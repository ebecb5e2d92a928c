//! Fixed lookup tables: reserved words and one-character tokens.

use mini_ir::TokenKind;

/// Look up a reserved keyword by text.
///
/// Returns `None` for ordinary names.
#[inline]
pub(crate) fn lookup(text: &str) -> Option<TokenKind> {
    match text {
        "print" => Some(TokenKind::Print),
        _ => None,
    }
}

/// Category of a token spelled by exactly one character.
#[inline]
pub(crate) fn single_char(c: char) -> Option<TokenKind> {
    match c {
        '=' => Some(TokenKind::Assign),
        '(' => Some(TokenKind::LeftParen),
        ')' => Some(TokenKind::RightParen),
        '+' => Some(TokenKind::Plus),
        '-' => Some(TokenKind::Minus),
        '*' => Some(TokenKind::Times),
        '\n' => Some(TokenKind::Newline),
        _ => None,
    }
}
