//! Owned source text, indexed by character.

use std::borrow::Cow;

use crate::Cursor;

/// Source text split into characters.
///
/// Indices and columns handed out by [`Cursor`] count Unicode scalar values,
/// so a multi-byte character occupies a single column.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct SourceBuffer {
    chars: Vec<char>,
}

impl SourceBuffer {
    pub fn new(source: &str) -> Self {
        SourceBuffer {
            chars: source.chars().collect(),
        }
    }

    /// Create a [`Cursor`] positioned before the first character.
    pub fn cursor(&self) -> Cursor<'_> {
        Cursor::new(&self.chars)
    }

    /// Number of characters in the source.
    pub fn len(&self) -> usize {
        self.chars.len()
    }

    pub fn is_empty(&self) -> bool {
        self.chars.is_empty()
    }
}

/// Append a `'\n'` unless the source already ends with one.
///
/// Guarantees the last statement of a file is followed by a newline token.
/// The empty source becomes `"\n"`.
pub fn ensure_trailing_newline(source: &str) -> Cow<'_, str> {
    if source.ends_with('\n') {
        Cow::Borrowed(source)
    } else {
        let mut owned = String::with_capacity(source.len() + 1);
        owned.push_str(source);
        owned.push('\n');
        Cow::Owned(owned)
    }
}
