//! Parser for Ideographic Description Sequences.
//!
//! `parse_ids` lexes and parses one IDS expression such as `⿰木子` or
//! `⿱{yao}心[G]` into an `Ids` tree.

pub mod parser;

pub use parser::{parse_tokens, ParseError, ParseErrorKind};

// Re-export lexer and tree types
pub use chai_ids_ast::{Ids, IdsComponent, IdsCompound, Operator, Shape};
pub use chai_ids_lexer::{tokenize, LexError, Token, VARIANT_MARKER};

use thiserror::Error;

/// Failure to turn IDS text into a tree.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum IdsError {
    #[error("lexical error: {0}")]
    Lex(#[from] LexError),

    #[error("syntax error: {0}")]
    Parse(#[from] ParseError),
}

/// Lex and parse one IDS expression.
///
/// The whole input must form exactly one expression.
pub fn parse_ids(source: &str) -> Result<Ids, IdsError> {
    let tokens = tokenize(source)?;
    Ok(parse_tokens(&tokens)?)
}
