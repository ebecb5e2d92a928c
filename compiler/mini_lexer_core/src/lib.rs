//! Low-level source handling for the mini scanner.
//!
//! [`SourceBuffer`] owns the source text as a character array.
//! [`Cursor`] reads it one character at a time, keeps 1-based line/column
//! bookkeeping, and applies the blank-line collapse: the newline ending a
//! line that holds only whitespace is handed out as a plain space, so blank
//! lines never become significant newline tokens.
//!
//! Token classification lives in `mini_lexer`; this crate knows nothing
//! about token categories.

mod cursor;
mod source_buffer;

pub use cursor::Cursor;
pub use source_buffer::{ensure_trailing_newline, SourceBuffer};
