//! Diagnostic system for first-error reporting.
//!
//! Every lexical or syntax error ends up as one [`Diagnostic`]:
//! - an [`ErrorCode`] for searchability
//! - a message (what went wrong)
//! - the offending token's lexeme, line and column (where it went wrong)
//!
//! Emitters in [`emitter`] render diagnostics for people or for tools.

mod diagnostic;
pub mod emitter;
mod error_code;
mod escape;

pub use diagnostic::{Diagnostic, Location};
pub use error_code::ErrorCode;
pub use escape::escape_lexeme;
