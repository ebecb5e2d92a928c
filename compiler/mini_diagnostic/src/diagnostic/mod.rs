//! Core diagnostic type.

use std::fmt;

use mini_ir::{Position, Token};

use crate::{escape_lexeme, ErrorCode};

/// The token a diagnostic points at.
#[derive(Clone, Eq, PartialEq, Hash, Debug)]
pub struct Location {
    /// Raw lexeme; emitters escape it.
    pub lexeme: String,
    pub position: Position,
}

impl Location {
    pub fn new(lexeme: impl Into<String>, position: Position) -> Self {
        Location {
            lexeme: lexeme.into(),
            position,
        }
    }

    pub fn of_token(token: &Token) -> Self {
        Location::new(token.lexeme.clone(), token.position())
    }
}

/// A reportable error.
///
/// Every problem is fatal, so there is no severity field: a diagnostic is
/// always an error.
#[derive(Clone, Eq, PartialEq, Hash, Debug)]
#[must_use = "diagnostics should be reported or returned, not silently dropped"]
pub struct Diagnostic {
    pub code: ErrorCode,
    pub message: String,
    /// Offending token, when the error has one.
    pub location: Option<Location>,
    /// Additional context lines.
    pub notes: Vec<String>,
}

impl Diagnostic {
    #[cold]
    pub fn error(code: ErrorCode) -> Self {
        Diagnostic {
            code,
            message: String::new(),
            location: None,
            notes: Vec::new(),
        }
    }

    pub fn with_message(mut self, message: impl Into<String>) -> Self {
        self.message = message.into();
        self
    }

    pub fn with_location(mut self, location: Location) -> Self {
        self.location = Some(location);
        self
    }

    /// Point the diagnostic at `token`.
    pub fn at_token(self, token: &Token) -> Self {
        self.with_location(Location::of_token(token))
    }

    pub fn with_note(mut self, note: impl Into<String>) -> Self {
        self.notes.push(note.into());
        self
    }

    /// `Error on '<lexeme>' line L column C`, when a location is known.
    pub fn location_line(&self) -> Option<String> {
        self.location.as_ref().map(|loc| {
            format!(
                "Error on '{}' {}",
                escape_lexeme(&loc.lexeme),
                loc.position
            )
        })
    }
}

/// Plain two-line rendering: location line, then `error[CODE]: message`.
impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if let Some(line) = self.location_line() {
            writeln!(f, "{line}")?;
        }
        write!(f, "error[{}]: {}", self.code, self.message)
    }
}
