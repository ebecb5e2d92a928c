//! Error codes for all front-end diagnostics.
//!
//! The first digit names the phase: `E0xxx` lexer, `E1xxx` parser,
//! `E9xxx` driver.

use std::fmt;

#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum ErrorCode {
    // Lexer Errors (E0xxx)
    /// Character that starts no token
    E0001,

    // Parser Errors (E1xxx)
    /// Unexpected token
    E1001,
    /// Token sequence ended before the grammar did
    E1002,
    /// Input left over after the start symbol
    E1003,
    /// Expression nesting exceeds the parser's depth limit
    E1004,

    // Driver Errors (E9xxx)
    /// Source file could not be read
    E9001,
}

impl ErrorCode {
    /// Every code, in numeric order.
    pub const ALL: [ErrorCode; 6] = [
        ErrorCode::E0001,
        ErrorCode::E1001,
        ErrorCode::E1002,
        ErrorCode::E1003,
        ErrorCode::E1004,
        ErrorCode::E9001,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            ErrorCode::E0001 => "E0001",
            ErrorCode::E1001 => "E1001",
            ErrorCode::E1002 => "E1002",
            ErrorCode::E1003 => "E1003",
            ErrorCode::E1004 => "E1004",
            ErrorCode::E9001 => "E9001",
        }
    }

    /// One-line summary, as listed in the error index.
    pub fn description(&self) -> &'static str {
        match self {
            ErrorCode::E0001 => "invalid character",
            ErrorCode::E1001 => "unexpected token",
            ErrorCode::E1002 => "unexpected end of token sequence",
            ErrorCode::E1003 => "trailing input",
            ErrorCode::E1004 => "nesting too deep",
            ErrorCode::E9001 => "unreadable source",
        }
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Parse an error code string like `"E1001"`. Case-insensitive.
impl std::str::FromStr for ErrorCode {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let upper = s.to_uppercase();
        Self::ALL
            .iter()
            .find(|code| code.as_str() == upper)
            .copied()
            .ok_or(())
    }
}
