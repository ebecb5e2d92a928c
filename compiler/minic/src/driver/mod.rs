//! The scan-then-parse pipeline.
//!
//! Every function here returns the process exit code, or the write error
//! that stopped it from producing its output.

use std::io::{self, Write};

use mini_lexer_core::ensure_trailing_newline;
use mini_parse::char_grammar::{self, Grammar};
use tracing::debug;

use crate::input::read_file;
use crate::options::CliOptions;
use crate::problem::{self, Problem};
use crate::{trace, EXIT_FAILURE, EXIT_SUCCESS};

/// Run one command.
pub fn execute<O: Write, E: Write>(
    opts: &CliOptions,
    out: &mut O,
    err: &mut E,
    is_tty: bool,
) -> io::Result<i32> {
    if let Some(grammar) = opts.grammar {
        return recognize_input(grammar, opts, out, is_tty);
    }

    let source = match read_file(&opts.input) {
        Ok(source) => source,
        Err(e) => {
            debug!(path = %opts.input, "unreadable source");
            report(&Problem::from(e), opts, err, is_tty)?;
            return Ok(EXIT_FAILURE);
        }
    };
    check_source(&source, opts, out, is_tty)
}

/// Scan and parse `source`, printing the trace and any diagnostic to `out`.
pub fn check_source<O: Write>(
    source: &str,
    opts: &CliOptions,
    out: &mut O,
    is_tty: bool,
) -> io::Result<i32> {
    let source = ensure_trailing_newline(source);

    if opts.trace {
        trace::write_header(out)?;
    }
    let show_trace = opts.trace;
    // The first failed row stops further trace output.
    let mut traced = Ok(());
    let lexed = mini_lexer::lex_with(&source, |token| {
        if show_trace && traced.is_ok() {
            traced = trace::write_row(out, token);
        }
    });
    traced?;

    let tokens = match lexed {
        Ok(tokens) => tokens,
        Err(e) => {
            debug!(position = %e.position(), "lexical error");
            report(&Problem::from(e), opts, out, is_tty)?;
            return Ok(EXIT_FAILURE);
        }
    };

    match mini_parse::parse_with_config(&tokens, opts.parser_config()) {
        Ok(()) => Ok(EXIT_SUCCESS),
        Err(e) => {
            report(&Problem::from(e), opts, out, is_tty)?;
            Ok(EXIT_FAILURE)
        }
    }
}

/// Run a character grammar on the input string itself.
fn recognize_input<O: Write>(
    grammar: Grammar,
    opts: &CliOptions,
    out: &mut O,
    is_tty: bool,
) -> io::Result<i32> {
    match char_grammar::recognize(grammar, &opts.input) {
        Ok(()) => Ok(EXIT_SUCCESS),
        Err(e) => {
            report(&Problem::from(e), opts, out, is_tty)?;
            Ok(EXIT_FAILURE)
        }
    }
}

fn report(problem: &Problem, opts: &CliOptions, out: &mut impl Write, is_tty: bool) -> io::Result<()> {
    problem::emit(
        &problem.into_diagnostic(),
        opts.error_format,
        opts.color,
        is_tty,
        out,
    )
}
