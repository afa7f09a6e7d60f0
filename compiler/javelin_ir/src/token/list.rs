//! Token list produced by the lexer.

use super::{Token, TokenKind};

/// Lexed tokens of one source, always terminated by a single `Eof`.
#[derive(Clone, Default, PartialEq, Eq, Debug)]
pub struct TokenList {
    tokens: Vec<Token>,
}

impl TokenList {
    pub fn new() -> Self {
        TokenList { tokens: Vec::new() }
    }

    pub fn with_capacity(capacity: usize) -> Self {
        TokenList {
            tokens: Vec::with_capacity(capacity),
        }
    }

    #[inline]
    pub fn push(&mut self, token: Token) {
        self.tokens.push(token);
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.tokens.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }

    #[inline]
    pub fn get(&self, index: usize) -> Option<&Token> {
        self.tokens.get(index)
    }

    #[inline]
    pub fn as_slice(&self) -> &[Token] {
        &self.tokens
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Token> {
        self.tokens.iter()
    }

    /// Index of the first token starting at or after `offset`.
    ///
    /// Returns `len()` when every token starts before `offset`.
    pub fn index_at_or_after(&self, offset: u32) -> usize {
        self.tokens.partition_point(|t| t.span.start < offset)
    }

    /// Offset one past the last source byte (the position of `Eof`).
    pub fn end_offset(&self) -> u32 {
        self.tokens
            .iter()
            .rev()
            .find(|t| t.kind == TokenKind::Eof)
            .or_else(|| self.tokens.last())
            .map_or(0, |t| t.span.end)
    }
}

impl<'a> IntoIterator for &'a TokenList {
    type Item = &'a Token;
    type IntoIter = std::slice::Iter<'a, Token>;

    fn into_iter(self) -> Self::IntoIter {
        self.tokens.iter()
    }
}
