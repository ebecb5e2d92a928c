//! Statement-level productions.
//!
//! One method per nonterminal. Each runs through `Parser::nonterminal`,
//! which enforces the depth limit.

mod expr;

use mini_ir::TokenKind;

use crate::{Expected, ParseError, Parser};

impl Parser<'_> {
    /// `program -> stmt* EOF`
    pub(crate) fn program(&mut self) -> Result<(), ParseError> {
        self.nonterminal(|p| {
            while p.cursor.current_kind().starts_statement() {
                p.stmt()?;
            }
            // The sentinel is checked, never consumed.
            if p.cursor.check(TokenKind::EndOfFile) {
                Ok(())
            } else {
                Err(p.cursor.unexpected(Expected::Token(TokenKind::EndOfFile)))
            }
        })
    }

    /// `stmt -> simplestmt NEWLINE`
    pub(crate) fn stmt(&mut self) -> Result<(), ParseError> {
        self.nonterminal(|p| {
            p.simple_stmt()?;
            p.cursor.consume(TokenKind::Newline)
        })
    }

    /// `simplestmt -> NAME '=' expr | PRINT '(' expr ')'`
    pub(crate) fn simple_stmt(&mut self) -> Result<(), ParseError> {
        self.nonterminal(|p| match p.cursor.current_kind() {
            TokenKind::Name => {
                p.cursor.advance()?;
                p.cursor.consume(TokenKind::Assign)?;
                p.expr()
            }
            TokenKind::Print => {
                p.cursor.advance()?;
                p.cursor.consume(TokenKind::LeftParen)?;
                p.expr()?;
                p.cursor.consume(TokenKind::RightParen)
            }
            _ => Err(p.cursor.unexpected(Expected::Statement)),
        })
    }
}
