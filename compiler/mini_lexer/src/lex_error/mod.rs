//! Lexer error types.
//!
//! A lexer error carries the half-built token it was working on (category
//! `ERROR`, lexeme = the offending character), so reporting can show the
//! same line/column/lexeme triple as for parse errors.

use mini_ir::{Position, Token, TokenKind};
use thiserror::Error;

/// What kind of lexer error occurred.
#[derive(Clone, Debug, Eq, PartialEq, Hash, Error)]
pub enum LexErrorKind {
    /// A character that starts no token.
    #[error("invalid character {found:?}")]
    InvalidCharacter { found: char },
}

/// A fatal lexical error.
#[derive(Clone, Debug, Eq, PartialEq, Hash, Error)]
#[error("{kind} at {}", token.position())]
pub struct LexError {
    pub kind: LexErrorKind,
    /// The rejected token: category `ERROR`, lexeme is the offending character.
    pub token: Token,
}

impl LexError {
    #[cold]
    pub fn invalid_character(found: char, position: Position) -> Self {
        LexError {
            kind: LexErrorKind::InvalidCharacter { found },
            token: Token::new(TokenKind::Error, found.to_string(), position),
        }
    }

    /// Where the offending character sits.
    pub fn position(&self) -> Position {
        self.token.position()
    }
}
