//! Expression parsers.
//!
//! Grammar:
//!
//! ```text
//! expression := leaf tags?
//!             | operator operand{arity} tags?
//! operand    := operator operand{arity} tags?
//!             | leaf
//! leaf       := CHAR | BRACE
//! ```
//!
//! Operand leaves never take tags; a tag group after one is a syntax error.

use super::{ParseError, TokenStream};
use chai_ids_ast::{Ids, IdsComponent, IdsCompound, Operator};
use chai_ids_lexer::Token;

/// Parse one complete expression, leaving any following tokens in the stream.
pub fn parse_expression(stream: &mut TokenStream) -> Result<Ids, ParseError> {
    match stream.peek() {
        Some(Token::Char(_)) | Some(Token::Brace(_)) => {
            let content = parse_leaf(stream)?;
            let tags = parse_tags(stream);
            Ok(Ids::Component(IdsComponent { content, tags }))
        }
        _ => parse_compound(stream).map(Ids::Compound),
    }
}

/// Parse an operator, exactly `arity` operands, and optional trailing tags.
fn parse_compound(stream: &mut TokenStream) -> Result<IdsCompound, ParseError> {
    let span = stream.current_span();
    let operator = match stream.advance() {
        Some(Token::Operator(c)) => match Operator::from_char(*c) {
            Some(operator) => operator,
            None => unreachable!("the lexer emits only U+2FF0..=U+2FFF as operators"),
        },
        other => {
            return Err(ParseError::unexpected_token(
                other,
                "at start of expression",
                span,
            ))
        }
    };

    let arity = operator.arity();
    let mut operands = Vec::with_capacity(arity);
    while operands.len() < arity {
        operands.push(parse_operand(stream)?);
    }
    let tags = parse_tags(stream);

    Ok(IdsCompound {
        operator,
        operands,
        tags,
    })
}

/// Parse one operand: a nested compound or a bare leaf.
fn parse_operand(stream: &mut TokenStream) -> Result<Ids, ParseError> {
    match stream.peek() {
        Some(Token::Operator(_)) => parse_compound(stream).map(Ids::Compound),
        Some(Token::Char(_)) | Some(Token::Brace(_)) => Ok(Ids::leaf(parse_leaf(stream)?)),
        other => Err(ParseError::unexpected_token(
            other,
            "in operand list",
            stream.current_span(),
        )),
    }
}

/// Consume a character or alias and return its content.
fn parse_leaf(stream: &mut TokenStream) -> Result<String, ParseError> {
    let span = stream.current_span();
    match stream.advance() {
        Some(Token::Char(c)) => Ok(c.to_string()),
        Some(Token::Brace(alias)) => Ok(alias.clone()),
        other => Err(ParseError::unexpected_token(other, "where a component was expected", span)),
    }
}

/// Consume an optional tag group.
fn parse_tags(stream: &mut TokenStream) -> Vec<char> {
    if let Some(Token::Tags(tags)) = stream.peek() {
        stream.advance();
        tags.clone()
    } else {
        Vec::new()
    }
}
