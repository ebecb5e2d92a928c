//! Recursive descent parser for the mini language.
//!
//! A predictive parser with one token of lookahead. It accepts or rejects a
//! [`TokenList`] and builds no tree; the first mismatch aborts with a
//! [`ParseError`].
//!
//! ```text
//! program    -> stmt* EOF
//! stmt       -> simplestmt NEWLINE
//! simplestmt -> NAME '=' expr | PRINT '(' expr ')'
//! expr       -> term ('+' term)*
//! term       -> factor ('*' factor)*
//! factor     -> '+' factor | '-' factor | UNSIGNEDINT | NAME | '(' expr ')'
//! ```
//!
//! [`char_grammar`] holds two small recognizers that work on raw characters
//! instead of tokens.

pub mod char_grammar;
mod cursor;
mod error;
mod grammar;

pub use cursor::Cursor;
pub use error::{Expected, ParseError};

use mini_ir::TokenList;
use mini_stack::ensure_sufficient_stack;
use tracing::debug;

/// Parser limits.
#[derive(Copy, Clone, Eq, PartialEq, Debug)]
pub struct ParserConfig {
    /// Maximum number of nonterminals active at once.
    pub max_depth: usize,
}

impl ParserConfig {
    pub const DEFAULT_MAX_DEPTH: usize = 1024;

    #[must_use]
    pub fn with_max_depth(mut self, max_depth: usize) -> Self {
        self.max_depth = max_depth;
        self
    }
}

impl Default for ParserConfig {
    fn default() -> Self {
        ParserConfig {
            max_depth: Self::DEFAULT_MAX_DEPTH,
        }
    }
}

/// Parser state.
pub struct Parser<'a> {
    cursor: Cursor<'a>,
    config: ParserConfig,
    depth: usize,
}

impl<'a> Parser<'a> {
    /// Create a parser positioned at the first token.
    ///
    /// Fails with [`ParseError::UnexpectedEndOfSequence`] when `tokens` is
    /// empty.
    pub fn new(tokens: &'a TokenList, config: ParserConfig) -> Result<Self, ParseError> {
        Ok(Parser {
            cursor: Cursor::new(tokens)?,
            config,
            depth: 0,
        })
    }

    /// Parse a whole program.
    pub fn parse_program(mut self) -> Result<(), ParseError> {
        self.program()
    }

    /// Run one nonterminal, enforcing the depth limit and stack headroom.
    fn nonterminal<T>(
        &mut self,
        f: impl FnOnce(&mut Self) -> Result<T, ParseError>,
    ) -> Result<T, ParseError> {
        if self.depth >= self.config.max_depth {
            return Err(ParseError::NestingTooDeep {
                limit: self.config.max_depth,
                token: self.cursor.current().clone(),
            });
        }
        self.depth += 1;
        let result = ensure_sufficient_stack(|| f(self));
        self.depth -= 1;
        result
    }
}

/// Parse `tokens` with the default configuration.
pub fn parse(tokens: &TokenList) -> Result<(), ParseError> {
    parse_with_config(tokens, ParserConfig::default())
}

/// Parse `tokens`, accepting only a complete program.
pub fn parse_with_config(tokens: &TokenList, config: ParserConfig) -> Result<(), ParseError> {
    let result = Parser::new(tokens, config).and_then(Parser::parse_program);
    match &result {
        Ok(()) => debug!(tokens = tokens.len(), "parse accepted"),
        Err(err) => debug!(%err, "parse rejected"),
    }
    result
}

#[cfg(test)]
#[allow(clippy::unwrap_used, reason = "Tests use unwrap for brevity")]
mod tests;
