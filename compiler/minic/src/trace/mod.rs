//! The token trace table.
//!
//! ```text
//! Line   Col  Category       Lexeme
//!
//! 1      1    NAME           x
//! 1      3    ASSIGNOP       =
//! ```

use std::io::{self, Write};

use mini_diagnostic::escape_lexeme;
use mini_ir::Token;

pub const HEADER: &str = "Line   Col  Category       Lexeme";

/// Write the header followed by a blank line.
pub fn write_header(out: &mut impl Write) -> io::Result<()> {
    writeln!(out, "{HEADER}")?;
    writeln!(out)
}

/// One left-aligned row: line (7), column (5), category (15), lexeme (10).
pub fn format_row(token: &Token) -> String {
    format!(
        "{:<7}{:<5}{:<15}{:<10}",
        token.line,
        token.column,
        token.kind.display_name(),
        escape_lexeme(&token.lexeme)
    )
}

pub fn write_row(out: &mut impl Write, token: &Token) -> io::Result<()> {
    writeln!(out, "{}", format_row(token))
}

#[cfg(test)]
#[allow(clippy::unwrap_used, reason = "Tests use unwrap for brevity")]
mod tests;
