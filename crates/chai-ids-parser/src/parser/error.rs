//! Parse error types.

use chai_ids_lexer::Token;
use std::fmt;
use std::ops::Range;

/// Parse error with source location and context.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseError {
    /// Kind of parse error
    pub kind: ParseErrorKind,
    /// Byte span where the error occurred
    pub span: Range<usize>,
    /// Human-readable error message
    pub message: String,
}

/// Category of parse error.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ParseErrorKind {
    /// A token appeared where an operator, character or alias was required.
    ///
    /// Example: `⿰木[G]子`, where a tag group sits in operand position.
    UnexpectedToken,

    /// Input ended before the expression was complete.
    ///
    /// Example: `⿰木`, which supplies one operand to a binary operator.
    UnexpectedEof,

    /// A complete expression was followed by more tokens.
    ///
    /// Example: `⿰木子水`.
    TrailingInput,

}

impl ParseError {
    /// Create an "unexpected token" error, or an EOF error when `found` is `None`.
    pub fn unexpected_token(found: Option<&Token>, context: &str, span: Range<usize>) -> Self {
        let (kind, message) = match found {
            Some(token) => (
                ParseErrorKind::UnexpectedToken,
                format!("unexpected {} {}", describe(token), context),
            ),
            None => (
                ParseErrorKind::UnexpectedEof,
                format!("unexpected end of input {}", context),
            ),
        };
        Self {
            kind,
            span,
            message,
        }
    }

    /// Create a "trailing input" error.
    pub fn trailing_input(found: &Token, span: Range<usize>) -> Self {
        Self {
            kind: ParseErrorKind::TrailingInput,
            span,
            message: format!("unexpected trailing input {}", describe(found)),
        }
    }
}

fn describe(token: &Token) -> String {
    match token {
        Token::Operator(_) => format!("operator '{}'", token),
        Token::Brace(_) => format!("alias '{}'", token),
        Token::Tags(_) => format!("tags '{}'", token),
        Token::Char(_) => format!("character '{}'", token),
    }
}

impl fmt::Display for ParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} at {:?}", self.message, self.span)
    }
}

impl std::error::Error for ParseError {}
