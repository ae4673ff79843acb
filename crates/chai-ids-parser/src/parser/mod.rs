//! Hand-written recursive descent parser for IDS expressions.
//!
//! ## Architecture
//!
//! - `stream`: TokenStream wrapper with lookahead
//! - `error`: ParseError and its kinds
//! - `expr`: expression, operand and tag parsers
//!
//! One token of lookahead decides every step; the operator alone decides how
//! many operands are read, so arity is never checked after the fact.

mod error;
mod expr;
mod stream;

pub use error::{ParseError, ParseErrorKind};
use stream::TokenStream;

use chai_ids_ast::Ids;
use chai_ids_lexer::Token;
use std::ops::Range;

/// Parse a token slice into exactly one IDS expression.
///
/// # Parameters
/// - `tokens`: Slice of (token, byte_span) pairs, as produced by `tokenize`
///
/// # Returns
/// - `Ok(Ids)` if the tokens form one complete expression
/// - `Err(ParseError)` on a syntax error or trailing input
pub fn parse_tokens(tokens: &[(Token, Range<usize>)]) -> Result<Ids, ParseError> {
    let mut stream = TokenStream::new(tokens);
    let ids = expr::parse_expression(&mut stream)?;

    if !stream.at_end() {
        let span = stream.current_span();
        if let Some(token) = stream.peek() {
            return Err(ParseError::trailing_input(token, span));
        }
    }

    Ok(ids)
}
