// Allow unwrap in tests
#![cfg_attr(test, allow(clippy::unwrap_used))]

//! Lexical analysis for Ideographic Description Sequences.
//!
//! This crate tokenizes a single IDS expression using logos.
//!
//! # Design
//!
//! - `Token`: the four token kinds of an IDS expression (operators, brace
//!   aliases, tag groups, plain characters)
//! - End of input is not a token: the parser treats an exhausted stream as EOF
//! - `tokenize` pairs every token with its byte span and turns logos' opaque
//!   error into a `LexError` that says which delimiter was left open
//!
//! # Examples
//!
//! ```
//! # use chai_ids_lexer::*;
//! let tokens: Vec<Token> = tokenize("⿰木{yao}[ab]")
//!     .unwrap()
//!     .into_iter()
//!     .map(|(token, _)| token)
//!     .collect();
//! assert_eq!(tokens.len(), 4);
//! ```

use logos::Logos;
use std::fmt;
use std::ops::Range;
use thiserror::Error;

/// Marker appended to a one-character brace alias.
///
/// `{木}` means "a variant form of 木", which must not be confused with the
/// plain character `木`, so the alias becomes `木变`.
pub const VARIANT_MARKER: char = '变';

/// IDS token.
///
/// Operators are the Ideographic Description Characters U+2FF0..=U+2FFF.
/// Any other character that does not open a brace or bracket group is a
/// `Char`, including stray `}` and `]`.
#[derive(Logos, Debug, Clone, PartialEq, Eq)]
pub enum Token {
    /// Ideographic Description Character such as `⿰`
    #[regex("[⿰-⿿]", |lex| lex.slice().chars().next())]
    Operator(char),

    /// `{...}` alias for a component without its own codepoint
    #[regex(r"\{[^}]*\}", brace_alias)]
    Brace(String),

    /// `[...]` tag group, one tag per character
    #[regex(r"\[[^\]]*\]", |lex| {
        let slice = lex.slice();
        slice[1..slice.len() - 1].chars().collect::<Vec<char>>()
    })]
    Tags(Vec<char>),

    /// Any other single character
    #[regex(r"[^{\[⿰-⿿]", |lex| lex.slice().chars().next())]
    Char(char),
}

/// Strip the braces and mark one-character aliases as variants.
///
/// Returns `None` for `{}` so logos reports an error.
fn brace_alias(lex: &mut logos::Lexer<Token>) -> Option<String> {
    let slice = lex.slice();
    let body = &slice[1..slice.len() - 1];
    let mut chars = body.chars();
    match (chars.next(), chars.next()) {
        (None, _) => None,
        (Some(only), None) => Some(format!("{only}{VARIANT_MARKER}")),
        _ => Some(body.to_string()),
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Token::Operator(op) => write!(f, "{}", op),
            Token::Brace(alias) => write!(f, "{{{}}}", alias),
            Token::Tags(tags) => {
                write!(f, "[")?;
                for tag in tags {
                    write!(f, "{}", tag)?;
                }
                write!(f, "]")
            }
            Token::Char(c) => write!(f, "{}", c),
        }
    }
}

/// Lexical error with the byte offset where the offending group starts.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LexError {
    #[error("unterminated '{{' at byte {offset}")]
    UnterminatedBrace { offset: usize },

    #[error("unterminated '[' at byte {offset}")]
    UnterminatedBracket { offset: usize },

    #[error("empty alias '{{}}' at byte {offset}")]
    EmptyAlias { offset: usize },

    #[error("unexpected character {found:?} at byte {offset}")]
    UnexpectedCharacter { found: char, offset: usize },
}

impl LexError {
    /// Byte offset of the error in the source.
    pub fn offset(&self) -> usize {
        match self {
            LexError::UnterminatedBrace { offset }
            | LexError::UnterminatedBracket { offset }
            | LexError::EmptyAlias { offset }
            | LexError::UnexpectedCharacter { offset, .. } => *offset,
        }
    }

    /// Classify a logos error from the slice it stopped on.
    fn from_slice(slice: &str, offset: usize) -> Self {
        match slice.chars().next() {
            Some('{') if slice == "{}" => LexError::EmptyAlias { offset },
            Some('{') => LexError::UnterminatedBrace { offset },
            Some('[') => LexError::UnterminatedBracket { offset },
            Some(found) => LexError::UnexpectedCharacter { found, offset },
            None => LexError::UnexpectedCharacter {
                found: char::REPLACEMENT_CHARACTER,
                offset,
            },
        }
    }
}

/// Tokenize an IDS expression, pairing each token with its byte span.
///
/// Stops at the first lexical error.
pub fn tokenize(source: &str) -> Result<Vec<(Token, Range<usize>)>, LexError> {
    let mut lexer = Token::lexer(source);
    let mut tokens = Vec::new();
    while let Some(result) = lexer.next() {
        let span = lexer.span();
        match result {
            Ok(token) => tokens.push((token, span)),
            Err(()) => return Err(LexError::from_slice(lexer.slice(), span.start)),
        }
    }
    Ok(tokens)
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Test helper: tokenize and drop spans.
    fn lex(source: &str) -> Vec<Token> {
        tokenize(source)
            .expect("Lexing failed")
            .into_iter()
            .map(|(token, _)| token)
            .collect()
    }

    #[test]
    fn test_operators() {
        let tokens = lex("⿰⿱⿲⿳⿻⿿");
        assert_eq!(
            tokens,
            vec![
                Token::Operator('⿰'),
                Token::Operator('⿱'),
                Token::Operator('⿲'),
                Token::Operator('⿳'),
                Token::Operator('⿻'),
                Token::Operator('⿿'),
            ]
        );
    }

    #[test]
    fn test_simple_compound() {
        let tokens = lex("⿰木子");
        assert_eq!(
            tokens,
            vec![Token::Operator('⿰'), Token::Char('木'), Token::Char('子')]
        );
    }

    #[test]
    fn test_brace_alias() {
        let tokens = lex("{yao}");
        assert_eq!(tokens, vec![Token::Brace("yao".to_string())]);
    }

    #[test]
    fn test_single_char_brace_gets_variant_marker() {
        let tokens = lex("{木}");
        assert_eq!(tokens, vec![Token::Brace("木变".to_string())]);
    }

    #[test]
    fn test_two_char_brace_is_kept_verbatim() {
        let tokens = lex("{木变}");
        assert_eq!(tokens, vec![Token::Brace("木变".to_string())]);
    }

    #[test]
    fn test_tags_are_exploded() {
        let tokens = lex("木[GTJ]");
        assert_eq!(
            tokens,
            vec![Token::Char('木'), Token::Tags(vec!['G', 'T', 'J'])]
        );
    }

    #[test]
    fn test_empty_tags() {
        assert_eq!(lex("[]"), vec![Token::Tags(vec![])]);
    }

    #[test]
    fn test_stray_closing_delimiters_are_chars() {
        assert_eq!(lex("}]"), vec![Token::Char('}'), Token::Char(']')]);
    }

    #[test]
    fn test_spans_are_byte_offsets() {
        let tokens = tokenize("⿰木{ab}").unwrap();
        let spans: Vec<_> = tokens.into_iter().map(|(_, span)| span).collect();
        assert_eq!(spans, vec![0..3, 3..6, 6..10]);
    }

    #[test]
    fn test_unterminated_brace() {
        let err = tokenize("⿰木{yao").unwrap_err();
        assert_eq!(err, LexError::UnterminatedBrace { offset: 6 });
    }

    #[test]
    fn test_unterminated_bracket() {
        let err = tokenize("木[GT").unwrap_err();
        assert_eq!(err, LexError::UnterminatedBracket { offset: 3 });
    }

    #[test]
    fn test_empty_alias() {
        let err = tokenize("⿱{}心").unwrap_err();
        assert_eq!(err, LexError::EmptyAlias { offset: 3 });
        assert_eq!(err.offset(), 3);
    }

    #[test]
    fn test_display_matches_source() {
        let rendered: String = lex("⿰{ab}子[G]").iter().map(|t| t.to_string()).collect();
        assert_eq!(rendered, "⿰{ab}子[G]");
    }
}
