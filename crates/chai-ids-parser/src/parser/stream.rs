//! Token stream wrapper for the recursive descent parser.

use chai_ids_lexer::Token;
use std::ops::Range;

/// Token stream with one token of lookahead and byte span tracking.
///
/// End of input is the stream running out; there is no EOF token.
pub struct TokenStream<'src> {
    tokens: &'src [(Token, Range<usize>)],
    pos: usize,
    end: usize,
}

impl<'src> TokenStream<'src> {
    /// Create a new token stream from tokens with their byte spans.
    pub fn new(tokens: &'src [(Token, Range<usize>)]) -> Self {
        let end = tokens.last().map(|(_, span)| span.end).unwrap_or(0);
        Self {
            tokens,
            pos: 0,
            end,
        }
    }

    /// Peek at the current token without consuming it.
    pub fn peek(&self) -> Option<&'src Token> {
        self.tokens.get(self.pos).map(|(tok, _)| tok)
    }

    /// Advance to the next token and return the current one.
    pub fn advance(&mut self) -> Option<&'src Token> {
        let token = self.tokens.get(self.pos).map(|(tok, _)| tok);
        if token.is_some() {
            self.pos += 1;
        }
        token
    }

    /// Check if we've reached the end of the token stream.
    pub fn at_end(&self) -> bool {
        self.pos >= self.tokens.len()
    }

    /// Byte span of the current token, or an empty span at the end of input.
    pub fn current_span(&self) -> Range<usize> {
        match self.tokens.get(self.pos) {
            Some((_, span)) => span.clone(),
            None => self.end..self.end,
        }
    }
}
