//! Lex error rendering.

use mini_diagnostic::{Diagnostic, ErrorCode};
use mini_lexer::{LexError, LexErrorKind};

/// Render a `LexError` at the offending character.
#[cold]
pub fn render_lex_error(err: &LexError) -> Diagnostic {
    match &err.kind {
        LexErrorKind::InvalidCharacter { found } => Diagnostic::error(ErrorCode::E0001)
            .with_message("invalid token")
            .at_token(&err.token)
            .with_note(format!("{found:?} does not start any token")),
    }
}
