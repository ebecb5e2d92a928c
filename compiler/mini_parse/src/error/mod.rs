//! Parse error types.

use std::fmt;

use mini_diagnostic::{Diagnostic, ErrorCode};
use mini_ir::{Token, TokenKind};

/// What the parser was looking for when it failed.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum Expected {
    /// A token of exactly this category.
    Token(TokenKind),
    /// The start of a statement (`NAME` or `PRINT`).
    Statement,
    /// The start of a factor.
    Factor,
}

impl fmt::Display for Expected {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Expected::Token(TokenKind::EndOfFile) => f.write_str("end of file"),
            Expected::Token(kind) => write!(f, "{kind}"),
            Expected::Statement => f.write_str("statement"),
            Expected::Factor => f.write_str("factor"),
        }
    }
}

/// A syntax error. Parsing stops at the first one.
#[derive(Clone, Eq, PartialEq, Debug, thiserror::Error)]
pub enum ParseError {
    #[error("expecting {expected}")]
    UnexpectedToken { expected: Expected, found: Token },

    /// The grammar needed another token after `last`.
    #[error("unexpected end of file")]
    UnexpectedEndOfSequence { last: Option<Token> },

    #[error("nesting exceeds the limit of {limit} levels")]
    NestingTooDeep { limit: usize, token: Token },
}

impl ParseError {
    pub fn code(&self) -> ErrorCode {
        match self {
            ParseError::UnexpectedToken { .. } => ErrorCode::E1001,
            ParseError::UnexpectedEndOfSequence { .. } => ErrorCode::E1002,
            ParseError::NestingTooDeep { .. } => ErrorCode::E1004,
        }
    }

    /// The token the error is reported at.
    pub fn token(&self) -> Option<&Token> {
        match self {
            ParseError::UnexpectedToken { found, .. } => Some(found),
            ParseError::UnexpectedEndOfSequence { last } => last.as_ref(),
            ParseError::NestingTooDeep { token, .. } => Some(token),
        }
    }

    pub fn to_diagnostic(&self) -> Diagnostic {
        let mut diag = Diagnostic::error(self.code()).with_message(self.to_string());
        if let Some(token) = self.token() {
            diag = diag.at_token(token);
        }
        match self {
            ParseError::UnexpectedToken { found, .. } => {
                diag.with_note(format!("found {}", found.kind))
            }
            ParseError::UnexpectedEndOfSequence { .. } => {
                diag.with_note("the token list ended without an end-of-file token")
            }
            ParseError::NestingTooDeep { .. } => diag,
        }
    }
}
