//! JSON Emitter
//!
//! Machine-readable diagnostic output: a JSON array with one object per
//! diagnostic.

use std::io::{self, Write};

use crate::Diagnostic;

use super::{escape_json, DiagnosticEmitter};

/// JSON emitter for machine-readable output.
pub struct JsonEmitter<W: Write> {
    writer: W,
    first: bool,
}

impl<W: Write> JsonEmitter<W> {
    pub fn new(writer: W) -> Self {
        JsonEmitter {
            writer,
            first: true,
        }
    }

    /// Begin the JSON array output.
    pub fn begin(&mut self) -> io::Result<()> {
        writeln!(self.writer, "[")
    }

    /// End the JSON array output.
    pub fn end(&mut self) -> io::Result<()> {
        if self.first {
            writeln!(self.writer, "]")
        } else {
            writeln!(self.writer, "\n]")
        }
    }
}

impl<W: Write> DiagnosticEmitter for JsonEmitter<W> {
    fn emit(&mut self, diagnostic: &Diagnostic) -> io::Result<()> {
        if !self.first {
            writeln!(self.writer, ",")?;
        }
        self.first = false;

        // Built by hand; no serde dependency for a handful of fields.
        writeln!(self.writer, "  {{")?;
        writeln!(self.writer, "    \"code\": \"{}\",", diagnostic.code)?;
        writeln!(
            self.writer,
            "    \"message\": \"{}\",",
            escape_json(&diagnostic.message)
        )?;
        match &diagnostic.location {
            Some(loc) => {
                writeln!(
                    self.writer,
                    "    \"lexeme\": \"{}\",",
                    escape_json(&loc.lexeme)
                )?;
                writeln!(self.writer, "    \"line\": {},", loc.position.line)?;
                writeln!(self.writer, "    \"column\": {},", loc.position.column)?;
            }
            None => {
                writeln!(self.writer, "    \"lexeme\": null,")?;
                writeln!(self.writer, "    \"line\": null,")?;
                writeln!(self.writer, "    \"column\": null,")?;
            }
        }
        let notes: Vec<String> = diagnostic
            .notes
            .iter()
            .map(|n| format!("\"{}\"", escape_json(n)))
            .collect();
        writeln!(self.writer, "    \"notes\": [{}]", notes.join(", "))?;
        write!(self.writer, "  }}")
    }

    fn flush(&mut self) -> io::Result<()> {
        self.writer.flush()
    }
}

#[cfg(test)]
mod tests;
