//! Token categories.

use std::fmt;

/// The closed set of token categories.
///
/// Declaration order is the display order used by diagnostics and the
/// trace table; nothing in the grammar depends on it.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug, PartialOrd, Ord)]
#[repr(u8)]
pub enum TokenKind {
    EndOfFile,
    Print,
    UnsignedInt,
    Name,
    Assign,
    LeftParen,
    RightParen,
    Plus,
    Minus,
    Times,
    Newline,
    Error,
}

impl TokenKind {
    /// Upper-case name shown in the trace table and in diagnostics.
    pub fn display_name(self) -> &'static str {
        match self {
            TokenKind::EndOfFile => "EOF",
            TokenKind::Print => "PRINT",
            TokenKind::UnsignedInt => "UNSIGNEDINT",
            TokenKind::Name => "NAME",
            TokenKind::Assign => "ASSIGNOP",
            TokenKind::LeftParen => "LEFTPAREN",
            TokenKind::RightParen => "RIGHTPAREN",
            TokenKind::Plus => "PLUS",
            TokenKind::Minus => "MINUS",
            TokenKind::Times => "TIMES",
            TokenKind::Newline => "NEWLINE",
            TokenKind::Error => "ERROR",
        }
    }

    /// True for categories that can begin a statement.
    #[inline]
    pub fn starts_statement(self) -> bool {
        matches!(self, TokenKind::Name | TokenKind::Print)
    }
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.display_name())
    }
}
