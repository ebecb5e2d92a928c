//! Parser tests.
//!
//! - `parser`: grammar acceptance and rejection over scanned source
//! - `limits`: depth limit and deep recursion

mod limits;
mod parser;

use mini_ir::TokenList;

/// Scan `source`, which must be lexically valid.
fn lex(source: &str) -> TokenList {
    mini_lexer::lex(source).unwrap()
}
