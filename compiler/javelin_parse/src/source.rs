//! Token sources the driver pulls from.

use javelin_ir::{Token, TokenKind, TokenList};

/// Supplies tokens on demand.
///
/// The driver asks for a token only when it shifts; recovery rewinds the
/// source to a byte offset and re-reads from there.
pub trait TokenSource {
    /// Next token, or `Eof` at the end of the active range. Keeps
    /// returning `Eof` once the range is exhausted.
    fn next_token(&mut self) -> Token;

    /// Restrict reading to tokens starting in `start..end` and rewind to
    /// the first of them.
    fn reset_to(&mut self, start: u32, end: u32);

    /// End offset of the most recently returned token.
    fn current_position(&self) -> u32;

    /// Start offset of the most recently returned token.
    fn start_position(&self) -> u32;

    /// End of the active range.
    fn limit(&self) -> u32;

    /// Offset from which reading would resume.
    fn mark(&self) -> u32 {
        self.current_position()
    }
}

/// Cursor over an already lexed `TokenList`.
#[derive(Clone, Debug)]
pub struct TokenCursor<'a> {
    tokens: &'a TokenList,
    index: usize,
    limit: u32,
    start: u32,
    end: u32,
}

impl<'a> TokenCursor<'a> {
    pub fn new(tokens: &'a TokenList) -> Self {
        TokenCursor {
            tokens,
            index: 0,
            limit: tokens.end_offset(),
            start: 0,
            end: 0,
        }
    }

    /// Cursor over the tokens starting in `start..end`.
    pub fn with_range(tokens: &'a TokenList, start: u32, end: u32) -> Self {
        let mut cursor = TokenCursor::new(tokens);
        cursor.reset_to(start, end);
        cursor
    }
}

impl TokenSource for TokenCursor<'_> {
    fn next_token(&mut self) -> Token {
        let token = match self.tokens.get(self.index) {
            Some(token) if token.kind != TokenKind::Eof && token.span.start < self.limit => {
                self.index += 1;
                *token
            }
            _ => Token::eof(self.limit),
        };
        self.start = token.span.start;
        self.end = token.span.end;
        token
    }

    fn reset_to(&mut self, start: u32, end: u32) {
        self.index = self.tokens.index_at_or_after(start);
        self.limit = end;
        self.start = start;
        self.end = start;
    }

    fn current_position(&self) -> u32 {
        self.end
    }

    fn start_position(&self) -> u32 {
        self.start
    }

    fn limit(&self) -> u32 {
        self.limit
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use javelin_ir::Span;
    use pretty_assertions::assert_eq;

    fn list(spans: &[(TokenKind, u32, u32)]) -> TokenList {
        let mut tokens = TokenList::new();
        for &(kind, start, end) in spans {
            tokens.push(Token::new(kind, Span::new(start, end)));
        }
        tokens
    }

    #[test]
    fn cursor_stops_at_range_end() {
        let tokens = list(&[
            (TokenKind::LBrace, 0, 1),
            (TokenKind::Identifier, 2, 3),
            (TokenKind::RBrace, 4, 5),
            (TokenKind::Eof, 5, 5),
        ]);
        let mut cursor = TokenCursor::with_range(&tokens, 1, 4);
        assert_eq!(cursor.next_token().kind, TokenKind::Identifier);
        assert_eq!(cursor.current_position(), 3);
        let eof = cursor.next_token();
        assert_eq!(eof, Token::eof(4));
        assert_eq!(cursor.next_token(), Token::eof(4));
    }

    #[test]
    fn reset_rewinds() {
        let tokens = list(&[
            (TokenKind::Identifier, 0, 1),
            (TokenKind::Semicolon, 1, 2),
            (TokenKind::Eof, 2, 2),
        ]);
        let mut cursor = TokenCursor::new(&tokens);
        cursor.next_token();
        cursor.next_token();
        assert_eq!(cursor.next_token().kind, TokenKind::Eof);
        cursor.reset_to(1, cursor.limit());
        assert_eq!(cursor.mark(), 1);
        assert_eq!(cursor.next_token().kind, TokenKind::Semicolon);
        assert_eq!(cursor.start_position(), 1);
    }
}
