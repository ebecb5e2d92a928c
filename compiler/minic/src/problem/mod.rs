//! Problems and their rendering.
//!
//! Every failure the driver can hit becomes a [`Problem`]. Rendering turns
//! it into a single [`Diagnostic`], which [`emit`] writes in the format the
//! user chose.

pub mod lex;

pub use lex::render_lex_error;

use std::io::{self, Write};

use mini_diagnostic::emitter::{ColorMode, DiagnosticEmitter, JsonEmitter, TerminalEmitter};
use mini_diagnostic::Diagnostic;
use mini_lexer::LexError;
use mini_parse::char_grammar::RecognizeError;
use mini_parse::ParseError;

use crate::input::DriverError;
use crate::options::ErrorFormat;

/// Any failure, by phase.
#[derive(Debug)]
pub enum Problem {
    Driver(DriverError),
    Lex(LexError),
    Parse(ParseError),
    Recognize(RecognizeError),
}

impl Problem {
    #[cold]
    pub fn into_diagnostic(&self) -> Diagnostic {
        match self {
            Problem::Driver(err) => err.to_diagnostic(),
            Problem::Lex(err) => render_lex_error(err),
            Problem::Parse(err) => err.to_diagnostic(),
            Problem::Recognize(err) => err.to_diagnostic(),
        }
    }
}

impl From<DriverError> for Problem {
    fn from(err: DriverError) -> Self {
        Problem::Driver(err)
    }
}

impl From<LexError> for Problem {
    fn from(err: LexError) -> Self {
        Problem::Lex(err)
    }
}

impl From<ParseError> for Problem {
    fn from(err: ParseError) -> Self {
        Problem::Parse(err)
    }
}

impl From<RecognizeError> for Problem {
    fn from(err: RecognizeError) -> Self {
        Problem::Recognize(err)
    }
}

/// Write `diagnostic` to `out`.
///
/// Human output is preceded by a blank line, separating it from the trace.
pub fn emit(
    diagnostic: &Diagnostic,
    format: ErrorFormat,
    color: ColorMode,
    is_tty: bool,
    out: &mut impl Write,
) -> io::Result<()> {
    match format {
        ErrorFormat::Human => {
            writeln!(out)?;
            let mut emitter = TerminalEmitter::with_color_mode(out, color, is_tty);
            emitter.emit(diagnostic)?;
            emitter.flush()
        }
        ErrorFormat::Json => {
            let mut emitter = JsonEmitter::new(out);
            emitter.begin()?;
            emitter.emit(diagnostic)?;
            emitter.end()?;
            emitter.flush()
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used, reason = "Tests use unwrap for brevity")]
mod tests;
