//! Recognizers over single characters.
//!
//! Each character of the input is one token and the end of input is an
//! absent character. The recognizers share the token parser's shape
//! (predictive, one symbol of lookahead, first error aborts) at a scale
//! small enough to follow by hand:
//!
//! ```text
//! ab-cd:  S -> A C      A -> 'a' 'b'      C -> 'c' C | 'd'
//! anb-c:  S -> A | 'c'   A -> 'a' { 'a' } 'c' 'b'
//! ```
//!
//! `anb-c` is the loop form of `S -> 'a' S 'b' | 'c'`. The loop does not
//! count, so a run of `a`s is closed by a single `cb`: `aacb` is accepted
//! and `aacbb` has trailing input.

use std::fmt;
use std::str::FromStr;

use mini_diagnostic::{Diagnostic, ErrorCode, Location};
use mini_ir::Position;
use mini_stack::ensure_sufficient_stack;
use tracing::{debug, trace};

/// The available character grammars.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum Grammar {
    /// `ab` followed by any number of `c`, then `d`.
    AbCd,
    /// A lone `c`, or one or more `a` followed by `cb`.
    AnbC,
}

impl Grammar {
    pub const ALL: [Grammar; 2] = [Grammar::AbCd, Grammar::AnbC];

    /// Name accepted on the command line.
    pub fn name(self) -> &'static str {
        match self {
            Grammar::AbCd => "ab-cd",
            Grammar::AnbC => "anb-c",
        }
    }
}

impl fmt::Display for Grammar {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Grammar {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|g| g.name() == s)
            .ok_or_else(|| format!("unknown grammar '{s}' (expected ab-cd or anb-c)"))
    }
}

/// Why a string was rejected. Offsets are 0-based character indices.
#[derive(Clone, Eq, PartialEq, Debug, thiserror::Error)]
pub enum RecognizeError {
    /// `found` is `None` at end of input.
    #[error("expecting {expected}")]
    Expected {
        expected: &'static str,
        found: Option<char>,
        offset: usize,
    },

    /// The start symbol was recognized but `found` follows it.
    #[error("garbage following <S>-string")]
    TrailingInput { found: char, offset: usize },
}

impl RecognizeError {
    pub fn code(&self) -> ErrorCode {
        match self {
            RecognizeError::Expected { .. } => ErrorCode::E1001,
            RecognizeError::TrailingInput { .. } => ErrorCode::E1003,
        }
    }

    pub fn offset(&self) -> usize {
        match self {
            RecognizeError::Expected { offset, .. } | RecognizeError::TrailingInput { offset, .. } => {
                *offset
            }
        }
    }

    pub fn to_diagnostic(&self) -> Diagnostic {
        let lexeme = match self {
            RecognizeError::Expected { found, .. } => found.map(String::from).unwrap_or_default(),
            RecognizeError::TrailingInput { found, .. } => found.to_string(),
        };
        // Input is a single line.
        let column = u32::try_from(self.offset() + 1).unwrap_or(u32::MAX);
        let diag = Diagnostic::error(self.code())
            .with_message(self.to_string())
            .with_location(Location::new(lexeme, Position::new(1, column)));
        match self {
            RecognizeError::Expected { found: None, .. } => diag.with_note("found end of input"),
            RecognizeError::Expected { found: Some(c), .. } => {
                diag.with_note(format!("found {c:?}"))
            }
            RecognizeError::TrailingInput { .. } => diag,
        }
    }
}

/// Recognize `input` with `grammar`.
pub fn recognize(grammar: Grammar, input: &str) -> Result<(), RecognizeError> {
    let mut r = Recognizer {
        chars: input.chars().collect(),
        offset: 0,
    };
    let result = match grammar {
        Grammar::AbCd => r.ab_cd(),
        Grammar::AnbC => r.anb_c(),
    }
    .and_then(|()| r.finish());

    match &result {
        Ok(()) => debug!(%grammar, "input accepted"),
        Err(err) => debug!(%grammar, %err, "input rejected"),
    }
    result
}

struct Recognizer {
    chars: Vec<char>,
    offset: usize,
}

impl Recognizer {
    fn current(&self) -> Option<char> {
        self.chars.get(self.offset).copied()
    }

    /// End of input is sticky.
    fn advance(&mut self) {
        if self.offset < self.chars.len() {
            trace!(offset = self.offset, ch = ?self.current(), "advance");
            self.offset += 1;
        }
    }

    fn expected(&self, expected: &'static str) -> RecognizeError {
        RecognizeError::Expected {
            expected,
            found: self.current(),
            offset: self.offset,
        }
    }

    fn consume(&mut self, ch: char, label: &'static str) -> Result<(), RecognizeError> {
        if self.current() == Some(ch) {
            self.advance();
            Ok(())
        } else {
            Err(self.expected(label))
        }
    }

    fn finish(&self) -> Result<(), RecognizeError> {
        match self.current() {
            None => Ok(()),
            Some(found) => Err(RecognizeError::TrailingInput {
                found,
                offset: self.offset,
            }),
        }
    }

    /// `S -> A C`, `A -> 'a' 'b'`
    fn ab_cd(&mut self) -> Result<(), RecognizeError> {
        self.consume('a', "a")?;
        self.consume('b', "b")?;
        self.c_tail()
    }

    /// `C -> 'c' C | 'd'`
    fn c_tail(&mut self) -> Result<(), RecognizeError> {
        ensure_sufficient_stack(|| match self.current() {
            Some('c') => {
                self.advance();
                self.c_tail()
            }
            Some('d') => {
                self.advance();
                Ok(())
            }
            _ => Err(self.expected("c or d")),
        })
    }

    /// `S -> A | 'c'`
    fn anb_c(&mut self) -> Result<(), RecognizeError> {
        match self.current() {
            Some('a') => self.a_run(),
            Some('c') => {
                self.advance();
                Ok(())
            }
            _ => Err(self.expected("a or c")),
        }
    }

    /// `A -> 'a' { 'a' } 'c' 'b'`
    fn a_run(&mut self) -> Result<(), RecognizeError> {
        while self.current() == Some('a') {
            self.advance();
        }
        self.consume('c', "c")?;
        self.consume('b', "b")
    }
}
