//! `mini` command-line entry point.

use std::io::{self, IsTerminal};

fn main() {
    let args: Vec<String> = std::env::args().skip(1).collect();
    let is_tty = io::stdout().is_terminal();
    let code = minic::run(&args, &mut io::stdout().lock(), &mut io::stderr(), is_tty);
    std::process::exit(code);
}
