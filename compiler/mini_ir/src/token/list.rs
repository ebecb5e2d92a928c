//! Ordered token sequence.

use super::{Token, TokenKind};

/// Scanner output: tokens in source order. Immutable once built.
///
/// A list produced by the scanner always ends with exactly one
/// [`TokenKind::EndOfFile`] token. Hand-built lists carry no such
/// guarantee, so consumers must not index past `len()`.
#[derive(Clone, Default, Eq, PartialEq, Hash, Debug)]
pub struct TokenList {
    tokens: Vec<Token>,
}

impl TokenList {
    /// Create from a Vec of tokens.
    #[inline]
    pub fn from_vec(tokens: Vec<Token>) -> Self {
        TokenList { tokens }
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.tokens.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }

    #[inline]
    pub fn last(&self) -> Option<&Token> {
        self.tokens.last()
    }

    #[inline]
    pub fn as_slice(&self) -> &[Token] {
        &self.tokens
    }

    /// True when the list ends with exactly one end-of-file token and
    /// contains no other.
    pub fn is_terminated(&self) -> bool {
        let eof_count = self
            .tokens
            .iter()
            .filter(|t| t.kind == TokenKind::EndOfFile)
            .count();
        eof_count == 1 && self.last().is_some_and(|t| t.kind == TokenKind::EndOfFile)
    }
}
