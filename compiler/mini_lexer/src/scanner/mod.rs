//! Hand-written scanner producing one [`Token`] at a time.
//!
//! The scanner keeps exactly one pending character. Each call to
//! [`Scanner::next_token`] skips horizontal whitespace, records the start
//! position, then dispatches on the pending character's class:
//!
//! | class | category |
//! |---|---|
//! | ASCII digit | `UNSIGNEDINT` (longest run of digits) |
//! | letter or `_` | keyword or `NAME` (longest run of alphanumerics/`_`) |
//! | `= ( ) + - * \n` | fixed one-character table |
//! | end of source | `EOF` (empty lexeme) |
//! | anything else | [`LexError`] |

use mini_ir::{Position, Token, TokenKind};
use mini_lexer_core::{Cursor, SourceBuffer};
use tracing::trace;

use crate::keywords;
use crate::LexError;

/// Scanner over a [`SourceBuffer`].
///
/// Also an [`Iterator`] yielding tokens up to and including the end-of-file
/// sentinel, or up to the first error.
pub struct Scanner<'a> {
    cursor: Cursor<'a>,
    /// Character under examination; `None` once the source is exhausted.
    current: Option<char>,
    /// Iterator state: set after yielding EOF or an error.
    done: bool,
}

impl<'a> Scanner<'a> {
    pub fn new(buffer: &'a SourceBuffer) -> Self {
        Scanner {
            cursor: buffer.cursor(),
            // Priming with a space forces the first real read in the
            // whitespace skip.
            current: Some(' '),
            done: false,
        }
    }

    /// Produce the next token.
    ///
    /// After end of source every call returns another end-of-file token at
    /// the same position.
    pub fn next_token(&mut self) -> Result<Token, LexError> {
        self.skip_whitespace();

        let start = Position::new(self.cursor.line(), self.cursor.column());
        let token = match self.current {
            Some(c) if c.is_ascii_digit() => self.unsigned_int(c, start),
            Some(c) if is_name_start(c) => self.name(c, start),
            other => self.single(other, start)?,
        };

        trace!(kind = %token.kind, lexeme = ?token.lexeme, line = token.line, column = token.column, "token");
        Ok(token)
    }

    /// Skip whitespace other than newline.
    fn skip_whitespace(&mut self) {
        while let Some(c) = self.current {
            if c == '\n' || !c.is_whitespace() {
                break;
            }
            self.bump();
        }
    }

    #[inline]
    fn bump(&mut self) {
        self.current = self.cursor.next_char();
    }

    /// Append the pending character to `lexeme` and read the next one while
    /// `accept` holds for it.
    fn eat_while(&mut self, first: char, accept: impl Fn(char) -> bool) -> String {
        let mut lexeme = String::from(first);
        self.bump();
        while let Some(c) = self.current {
            if !accept(c) {
                break;
            }
            lexeme.push(c);
            self.bump();
        }
        lexeme
    }

    fn unsigned_int(&mut self, first: char, start: Position) -> Token {
        let lexeme = self.eat_while(first, |c| c.is_ascii_digit());
        Token::new(TokenKind::UnsignedInt, lexeme, start)
    }

    fn name(&mut self, first: char, start: Position) -> Token {
        let lexeme = self.eat_while(first, is_name_continue);
        let kind = keywords::lookup(&lexeme).unwrap_or(TokenKind::Name);
        Token::new(kind, lexeme, start)
    }

    fn single(&mut self, c: Option<char>, start: Position) -> Result<Token, LexError> {
        // End of source: the cursor stays put, so every later call yields
        // the same sentinel.
        let Some(c) = c else {
            return Ok(Token::eof(start));
        };
        match keywords::single_char(c) {
            Some(kind) => {
                self.bump();
                Ok(Token::new(kind, c.to_string(), start))
            }
            None => Err(LexError::invalid_character(c, start)),
        }
    }
}

impl Iterator for Scanner<'_> {
    type Item = Result<Token, LexError>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.done {
            return None;
        }
        let result = self.next_token();
        self.done = match &result {
            Ok(token) => token.kind == TokenKind::EndOfFile,
            Err(_) => true,
        };
        Some(result)
    }
}

#[inline]
fn is_name_start(c: char) -> bool {
    c.is_alphabetic() || c == '_'
}

#[inline]
fn is_name_continue(c: char) -> bool {
    c.is_alphanumeric() || c == '_'
}
