//! Printable rendering of lexemes.

use std::fmt::Write;

/// Render `lexeme` with control characters escaped.
///
/// Newline, carriage return, tab and NUL use their two-character escapes
/// (`\n`, `\r`, `\t`, `\0`); other control characters use `\u{..}`.
pub fn escape_lexeme(lexeme: &str) -> String {
    let mut out = String::with_capacity(lexeme.len());
    for c in lexeme.chars() {
        match c {
            '\n' => out.push_str("\\n"),
            '\r' => out.push_str("\\r"),
            '\t' => out.push_str("\\t"),
            '\0' => out.push_str("\\0"),
            c if c.is_control() => {
                let _ = write!(out, "\\u{{{:x}}}", u32::from(c));
            }
            c => out.push(c),
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn plain_text_unchanged() {
        assert_eq!(escape_lexeme("print"), "print");
        assert_eq!(escape_lexeme(""), "");
        assert_eq!(escape_lexeme("é"), "é");
    }

    #[test]
    fn newline_is_two_characters() {
        let escaped = escape_lexeme("\n");
        assert_eq!(escaped, "\\n");
        assert_eq!(escaped.chars().count(), 2);
    }

    #[test]
    fn other_controls() {
        assert_eq!(escape_lexeme("\t\r\0"), "\\t\\r\\0");
        assert_eq!(escape_lexeme("\u{7}"), "\\u{7}");
        assert_eq!(escape_lexeme("\u{1b}"), "\\u{1b}");
    }
}
