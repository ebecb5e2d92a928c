//! Command-line option parsing.
//!
//! Hand-rolled: the command line is one positional argument plus a few
//! `--flag` / `--key=value` options.

use std::str::FromStr;

use mini_diagnostic::emitter::ColorMode;
use mini_diagnostic::ErrorCode;
use mini_parse::char_grammar::Grammar;
use mini_parse::ParserConfig;

pub const USAGE: &str = "\
Usage: mini [options] <file>

Scan and parse a mini source file. Exits 0 if the file parses.

Options:
  --trace                 Print the token trace table (default)
  --no-trace              Do not print the token trace table
  --color=<when>          Color diagnostics: auto, always, never (default: auto)
  --error-format=<fmt>    Diagnostic format: human, json (default: human)
  --max-depth=<n>         Parser nesting limit (default: 1024)
  --grammar=<name>        Recognize <file> as a string with a character
                          grammar instead: ab-cd, anb-c
  --explain=<code>        Describe an error code (e.g. E1001) and exit
  -h, --help              Print this help
";

/// Diagnostic output format.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub enum ErrorFormat {
    #[default]
    Human,
    Json,
}

impl FromStr for ErrorFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "human" => Ok(ErrorFormat::Human),
            "json" => Ok(ErrorFormat::Json),
            other => Err(format!(
                "invalid error format '{other}' (expected human or json)"
            )),
        }
    }
}

/// Options for one run.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CliOptions {
    /// Source path, or the input string when `grammar` is set.
    pub input: String,
    pub trace: bool,
    pub color: ColorMode,
    pub error_format: ErrorFormat,
    pub max_depth: usize,
    pub grammar: Option<Grammar>,
}

impl CliOptions {
    pub fn new(input: impl Into<String>) -> Self {
        CliOptions {
            input: input.into(),
            trace: true,
            color: ColorMode::default(),
            error_format: ErrorFormat::default(),
            max_depth: ParserConfig::DEFAULT_MAX_DEPTH,
            grammar: None,
        }
    }

    pub fn parser_config(&self) -> ParserConfig {
        ParserConfig::default().with_max_depth(self.max_depth)
    }
}

/// What the command line asks for.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Command {
    Help,
    Explain(ErrorCode),
    Run(CliOptions),
}

#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum UsageError {
    #[error("unknown option '{0}'")]
    UnknownOption(String),

    #[error("{0}")]
    InvalidValue(String),

    #[error("missing input file")]
    MissingInput,

    #[error("expected one input, found {0}")]
    TooManyInputs(usize),
}

/// Parse `args`, which exclude the program name.
///
/// `--help` and `--explain` win over everything else on the line.
pub fn parse_args(args: &[String]) -> Result<Command, UsageError> {
    let mut positional = Vec::new();
    let mut opts = CliOptions::new(String::new());

    for arg in args {
        match arg.as_str() {
            "-h" | "--help" => return Ok(Command::Help),
            "--trace" => opts.trace = true,
            "--no-trace" => opts.trace = false,
            s if s.starts_with("--explain=") => {
                return parse_error_code(&s["--explain=".len()..]).map(Command::Explain);
            }
            s if s.starts_with("--color=") => {
                opts.color = value(s, "--color=")?;
            }
            s if s.starts_with("--error-format=") => {
                opts.error_format = value(s, "--error-format=")?;
            }
            s if s.starts_with("--max-depth=") => {
                opts.max_depth = parse_max_depth(&s["--max-depth=".len()..])?;
            }
            s if s.starts_with("--grammar=") => {
                opts.grammar = Some(value(s, "--grammar=")?);
            }
            s if s.starts_with('-') && s.len() > 1 => {
                return Err(UsageError::UnknownOption(s.to_string()));
            }
            s => positional.push(s),
        }
    }

    opts.input = match positional.as_slice() {
        [] => return Err(UsageError::MissingInput),
        [one] => (*one).to_string(),
        many => return Err(UsageError::TooManyInputs(many.len())),
    };
    Ok(Command::Run(opts))
}

fn value<T: FromStr<Err = String>>(arg: &str, prefix: &str) -> Result<T, UsageError> {
    arg[prefix.len()..].parse().map_err(UsageError::InvalidValue)
}

fn parse_error_code(s: &str) -> Result<ErrorCode, UsageError> {
    s.parse().map_err(|()| {
        UsageError::InvalidValue(format!(
            "unknown error code '{s}' (codes look like E0001 or E1001)"
        ))
    })
}

fn parse_max_depth(s: &str) -> Result<usize, UsageError> {
    match s.parse::<usize>() {
        Ok(n) if n >= 1 => Ok(n),
        _ => Err(UsageError::InvalidValue(format!(
            "invalid max depth '{s}' (expected a positive integer)"
        ))),
    }
}
