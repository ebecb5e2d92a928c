//! Token types produced by the scanner.

mod kind;
mod list;

pub use kind::TokenKind;
pub use list::TokenList;

use std::fmt;

use crate::Position;

/// A classified run of source characters.
///
/// `line`/`column` locate the first character of the lexeme. The
/// end-of-file sentinel has an empty lexeme.
#[derive(Clone, Eq, PartialEq, Hash)]
pub struct Token {
    pub line: u32,
    pub column: u32,
    pub kind: TokenKind,
    pub lexeme: String,
}

impl Token {
    #[inline]
    pub fn new(kind: TokenKind, lexeme: impl Into<String>, position: Position) -> Self {
        Token {
            line: position.line,
            column: position.column,
            kind,
            lexeme: lexeme.into(),
        }
    }

    /// Create an end-of-file sentinel at `position`.
    pub fn eof(position: Position) -> Self {
        Token::new(TokenKind::EndOfFile, "", position)
    }

    /// Where the token starts.
    #[inline]
    pub fn position(&self) -> Position {
        Position::new(self.line, self.column)
    }
}

impl fmt::Debug for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {:?} @ {:?}", self.kind, self.lexeme, self.position())
    }
}
