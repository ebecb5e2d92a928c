//! Expression productions.
//!
//! `*` binds tighter than `+` because `term` nests inside `expr`. Both
//! chains are left-associative loops. There is no binary `-`.

use mini_ir::TokenKind;

use crate::{Expected, ParseError, Parser};

impl Parser<'_> {
    /// `expr -> term ('+' term)*`
    pub(crate) fn expr(&mut self) -> Result<(), ParseError> {
        self.nonterminal(|p| {
            p.term()?;
            while p.cursor.check(TokenKind::Plus) {
                p.cursor.advance()?;
                p.term()?;
            }
            Ok(())
        })
    }

    /// `term -> factor ('*' factor)*`
    pub(crate) fn term(&mut self) -> Result<(), ParseError> {
        self.nonterminal(|p| {
            p.factor()?;
            while p.cursor.check(TokenKind::Times) {
                p.cursor.advance()?;
                p.factor()?;
            }
            Ok(())
        })
    }

    /// `factor -> '+' factor | '-' factor | UNSIGNEDINT | NAME | '(' expr ')'`
    pub(crate) fn factor(&mut self) -> Result<(), ParseError> {
        self.nonterminal(|p| match p.cursor.current_kind() {
            // Unary sign, any number of times.
            TokenKind::Plus | TokenKind::Minus => {
                p.cursor.advance()?;
                p.factor()
            }
            TokenKind::UnsignedInt | TokenKind::Name => p.cursor.advance(),
            TokenKind::LeftParen => {
                p.cursor.advance()?;
                p.expr()?;
                p.cursor.consume(TokenKind::RightParen)
            }
            _ => Err(p.cursor.unexpected(Expected::Factor)),
        })
    }
}
