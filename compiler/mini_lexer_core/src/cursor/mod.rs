//! Character cursor with line/column tracking and blank-line collapse.
//!
//! # Reading Policy
//!
//! - The line counter advances on the read *after* a raw `'\n'`, which also
//!   resets the column to 0 and marks the new line as blank. The cursor
//!   starts as if a newline had just been read, so the first character sits
//!   on line 1, column 1.
//! - Any non-whitespace character clears the blank-line flag.
//! - A `'\n'` that ends a line holding only whitespace is returned as `' '`.
//! - At end of source the column is pinned to 1 and `None` is returned on
//!   every subsequent read.

/// Cursor over a character slice.
///
/// Created via [`SourceBuffer::cursor()`](crate::SourceBuffer::cursor).
#[derive(Clone, Debug)]
pub struct Cursor<'a> {
    chars: &'a [char],
    /// Index of the next character to read.
    index: usize,
    line: u32,
    column: u32,
    /// Raw character returned by the previous read (`None` once at EOF).
    prev: Option<char>,
    /// No non-whitespace character seen since the last newline.
    blank_line: bool,
}

impl<'a> Cursor<'a> {
    pub(crate) fn new(chars: &'a [char]) -> Self {
        Cursor {
            chars,
            index: 0,
            line: 0,
            column: 0,
            prev: Some('\n'),
            blank_line: true,
        }
    }

    /// Read the next character.
    ///
    /// Returns `None` at end of source, idempotently.
    pub fn next_char(&mut self) -> Option<char> {
        if self.prev == Some('\n') {
            self.line += 1;
            self.column = 0;
            self.blank_line = true;
        }

        let Some(&c) = self.chars.get(self.index) else {
            self.column = 1;
            self.prev = None;
            return None;
        };

        self.index += 1;
        self.column += 1;
        if !c.is_whitespace() {
            self.blank_line = false;
        }
        self.prev = Some(c);

        if c == '\n' && self.blank_line {
            Some(' ')
        } else {
            Some(c)
        }
    }

    /// Line of the most recently read character (1-based once reading starts).
    #[inline]
    pub fn line(&self) -> u32 {
        self.line
    }

    /// Column of the most recently read character, or 1 at end of source.
    #[inline]
    pub fn column(&self) -> u32 {
        self.column
    }
}
