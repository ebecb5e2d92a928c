//! Driver for the mini language front end.
//!
//! `mini [options] <file>` scans a source file, prints the token trace, and
//! parses it. The exit code is 0 when the whole file parses and 1 for every
//! kind of failure: bad usage, unreadable file, lexical or syntax error.
//!
//! All output goes through the writers handed to [`run`], so the library
//! can be driven from tests as well as from `main`.

pub mod driver;
pub mod input;
pub mod options;
pub mod problem;
pub mod trace;
mod tracing_setup;

pub use tracing_setup::init_tracing;

use std::io::{self, Write};

use mini_diagnostic::ErrorCode;
use options::{Command, UsageError, USAGE};

/// Process exit code for success.
pub const EXIT_SUCCESS: i32 = 0;
/// Process exit code for every failure.
pub const EXIT_FAILURE: i32 = 1;

/// Run the driver on `args` (without the program name).
///
/// Normal output (usage, token trace, diagnostics) goes to `out`; file
/// errors go to `err`. `is_tty` says whether `out` is a terminal, for
/// `--color=auto`. A failed write to either stream is reported on `err`
/// and ends the run with [`EXIT_FAILURE`].
pub fn run<O: Write, E: Write>(args: &[String], out: &mut O, err: &mut E, is_tty: bool) -> i32 {
    init_tracing();

    let result = match options::parse_args(args) {
        Ok(Command::Help) => write!(out, "{USAGE}").map(|()| EXIT_SUCCESS),
        Ok(Command::Explain(code)) => explain(code, out).map(|()| EXIT_SUCCESS),
        Ok(Command::Run(opts)) => driver::execute(&opts, out, err, is_tty),
        Err(usage) => report_usage(&usage, out).map(|()| EXIT_FAILURE),
    };
    result.unwrap_or_else(|e| {
        tracing::debug!(error = %e, "output failed");
        // Nothing is left to report a failure on stderr itself.
        let _ = writeln!(err, "error: cannot write output: {e}");
        EXIT_FAILURE
    })
}

/// Print the one-line description of `code`.
fn explain(code: ErrorCode, out: &mut impl Write) -> io::Result<()> {
    writeln!(out, "{code}: {}", code.description())
}

fn report_usage(usage: &UsageError, out: &mut impl Write) -> io::Result<()> {
    tracing::debug!(%usage, "bad command line");
    writeln!(out, "error: {usage}")?;
    write!(out, "{USAGE}")
}
