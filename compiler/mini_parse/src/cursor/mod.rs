//! Token cursor for navigating the token stream.

use mini_ir::{Token, TokenKind, TokenList};
use tracing::trace;

use crate::{Expected, ParseError};

/// Forward-only position in a token list.
///
/// Invariant: `pos < tokens.len()`, so [`Cursor::current`] never fails.
/// Moving past the last token is an error rather than a clamp, since a
/// hand-built list need not end with an end-of-file token.
pub struct Cursor<'a> {
    tokens: &'a [Token],
    pos: usize,
}

impl<'a> Cursor<'a> {
    pub fn new(tokens: &'a TokenList) -> Result<Self, ParseError> {
        if tokens.is_empty() {
            return Err(ParseError::UnexpectedEndOfSequence { last: None });
        }
        Ok(Cursor {
            tokens: tokens.as_slice(),
            pos: 0,
        })
    }

    #[inline]
    pub fn current(&self) -> &'a Token {
        &self.tokens[self.pos]
    }

    #[inline]
    pub fn current_kind(&self) -> TokenKind {
        self.current().kind
    }

    #[inline]
    pub fn check(&self, kind: TokenKind) -> bool {
        self.current_kind() == kind
    }

    /// Move to the next token.
    pub fn advance(&mut self) -> Result<(), ParseError> {
        let next = self.pos + 1;
        if next >= self.tokens.len() {
            return Err(ParseError::UnexpectedEndOfSequence {
                last: Some(self.current().clone()),
            });
        }
        trace!(from = ?self.current(), "advance");
        self.pos = next;
        Ok(())
    }

    /// Advance past the current token if it has category `kind`.
    pub fn consume(&mut self, kind: TokenKind) -> Result<(), ParseError> {
        if self.check(kind) {
            trace!(?kind, "consume");
            self.advance()
        } else {
            Err(self.unexpected(Expected::Token(kind)))
        }
    }

    /// Build an `UnexpectedToken` error at the current token.
    pub fn unexpected(&self, expected: Expected) -> ParseError {
        ParseError::UnexpectedToken {
            expected,
            found: self.current().clone(),
        }
    }
}
