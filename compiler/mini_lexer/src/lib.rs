//! Scanner for the mini language.
//!
//! Turns source text into a [`TokenList`] in one eager pass. The list always
//! ends with a single end-of-file token; the first character that starts no
//! token aborts the scan with a [`LexError`].
//!
//! ```text
//! "x = 1 + 2\n"  ──►  NAME ASSIGNOP UNSIGNEDINT PLUS UNSIGNEDINT NEWLINE EOF
//! ```

mod keywords;
pub mod lex_error;
mod scanner;

pub use lex_error::{LexError, LexErrorKind};
pub use scanner::Scanner;

use mini_ir::{Token, TokenList};
use mini_lexer_core::SourceBuffer;
use tracing::debug;

/// Scan `source` into a token list.
pub fn lex(source: &str) -> Result<TokenList, LexError> {
    lex_with(source, |_| {})
}

/// Scan `source`, handing each token to `on_token` as soon as it is built.
///
/// Tokens produced before a lexical error are still reported to the
/// observer; the failing character is not.
pub fn lex_with(source: &str, mut on_token: impl FnMut(&Token)) -> Result<TokenList, LexError> {
    let buffer = SourceBuffer::new(source);
    let mut tokens = Vec::with_capacity(buffer.len() / 2 + 1);

    for token in Scanner::new(&buffer) {
        let token = token?;
        on_token(&token);
        tokens.push(token);
    }

    let tokens = TokenList::from_vec(tokens);
    debug_assert!(tokens.is_terminated());
    debug!(count = tokens.len(), "scan complete");
    Ok(tokens)
}
