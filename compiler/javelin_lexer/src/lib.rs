//! Java lexer using logos with string interning.
//!
//! Produces a `TokenList` terminated by a single `Eof`. Comments and
//! whitespace are dropped. Lexical problems never stop the scan: each one
//! becomes a `TokenKind::Error` token carrying its `LexErrorKind`, and the
//! parser decides what to report.

mod keywords;
mod raw_token;

use logos::Logos;

use javelin_ir::{LexErrorKind, Span, StringInterner, Token, TokenKind, TokenList};

use raw_token::RawToken;

/// Failure raised from inside the logos automaton.
#[derive(Copy, Clone, Debug, Default, Eq, PartialEq, Hash, thiserror::Error)]
pub enum LexError {
    #[default]
    #[error("invalid character")]
    InvalidCharacter,
    #[error("malformed number literal")]
    MalformedNumber,
}

impl From<LexError> for LexErrorKind {
    fn from(error: LexError) -> Self {
        match error {
            LexError::InvalidCharacter => LexErrorKind::InvalidCharacter,
            LexError::MalformedNumber => LexErrorKind::MalformedNumber,
        }
    }
}

/// Byte offset as `u32`, saturating for sources past 4 GiB.
#[inline]
fn offset(pos: usize) -> u32 {
    u32::try_from(pos).unwrap_or(u32::MAX)
}

/// Lex source code into a `TokenList`.
pub fn lex(source: &str, interner: &StringInterner) -> TokenList {
    let mut result = TokenList::with_capacity(source.len() / 4);
    let mut logos = RawToken::lexer(source);

    while let Some(token_result) = logos.next() {
        let range = logos.span();
        let span = Span::new(offset(range.start), offset(range.end));
        let slice = logos.slice();

        match token_result {
            Ok(RawToken::LineComment | RawToken::BlockComment) => {}
            Ok(raw) => result.push(convert_token(raw, slice, span, interner)),
            Err(error) => result.push(Token::error(error.into(), span)),
        }
    }

    result.push(Token::eof(offset(source.len())));
    result
}

/// Convert a raw token to a `Token`, resolving keywords and interning payloads.
fn convert_token(raw: RawToken, slice: &str, span: Span, interner: &StringInterner) -> Token {
    let kind = match raw {
        RawToken::Ident => match keywords::lookup(slice) {
            Some(keyword) => return Token::new(keyword, span),
            None => TokenKind::Identifier,
        },
        RawToken::Int => TokenKind::IntegerLiteral,
        RawToken::Long => TokenKind::LongLiteral,
        RawToken::Floating => {
            if slice.ends_with(['f', 'F']) {
                TokenKind::FloatLiteral
            } else {
                TokenKind::DoubleLiteral
            }
        }
        RawToken::String => TokenKind::StringLiteral,
        RawToken::Char => TokenKind::CharLiteral,

        RawToken::UnterminatedComment => {
            return Token::error(LexErrorKind::UnterminatedComment, span)
        }
        RawToken::UnterminatedString => {
            return Token::error(LexErrorKind::UnterminatedString, span)
        }
        RawToken::UnterminatedChar => return Token::error(LexErrorKind::UnterminatedChar, span),

        RawToken::LParen => return Token::new(TokenKind::LParen, span),
        RawToken::RParen => return Token::new(TokenKind::RParen, span),
        RawToken::LBrace => return Token::new(TokenKind::LBrace, span),
        RawToken::RBrace => return Token::new(TokenKind::RBrace, span),
        RawToken::LBracket => return Token::new(TokenKind::LBracket, span),
        RawToken::RBracket => return Token::new(TokenKind::RBracket, span),
        RawToken::Semicolon => return Token::new(TokenKind::Semicolon, span),
        RawToken::Comma => return Token::new(TokenKind::Comma, span),
        RawToken::Dot => return Token::new(TokenKind::Dot, span),
        RawToken::Ellipsis => return Token::new(TokenKind::Ellipsis, span),
        RawToken::At => return Token::new(TokenKind::At, span),
        other => return Token::new(operator_kind(other), span),
    };
    Token::with_value(kind, span, interner.intern(slice))
}

fn operator_kind(raw: RawToken) -> TokenKind {
    match raw {
        RawToken::Assign => TokenKind::Assign,
        RawToken::Greater => TokenKind::Greater,
        RawToken::Less => TokenKind::Less,
        RawToken::Not => TokenKind::Not,
        RawToken::Twiddle => TokenKind::Twiddle,
        RawToken::Question => TokenKind::Question,
        RawToken::Colon => TokenKind::Colon,
        RawToken::EqualEqual => TokenKind::EqualEqual,
        RawToken::LessEqual => TokenKind::LessEqual,
        RawToken::GreaterEqual => TokenKind::GreaterEqual,
        RawToken::NotEqual => TokenKind::NotEqual,
        RawToken::AndAnd => TokenKind::AndAnd,
        RawToken::OrOr => TokenKind::OrOr,
        RawToken::PlusPlus => TokenKind::PlusPlus,
        RawToken::MinusMinus => TokenKind::MinusMinus,
        RawToken::Plus => TokenKind::Plus,
        RawToken::Minus => TokenKind::Minus,
        RawToken::Multiply => TokenKind::Multiply,
        RawToken::Divide => TokenKind::Divide,
        RawToken::And => TokenKind::And,
        RawToken::Or => TokenKind::Or,
        RawToken::Xor => TokenKind::Xor,
        RawToken::Remainder => TokenKind::Remainder,
        RawToken::LeftShift => TokenKind::LeftShift,
        RawToken::RightShift => TokenKind::RightShift,
        RawToken::UnsignedRightShift => TokenKind::UnsignedRightShift,
        RawToken::PlusEqual => TokenKind::PlusEqual,
        RawToken::MinusEqual => TokenKind::MinusEqual,
        RawToken::MultiplyEqual => TokenKind::MultiplyEqual,
        RawToken::DivideEqual => TokenKind::DivideEqual,
        RawToken::AndEqual => TokenKind::AndEqual,
        RawToken::OrEqual => TokenKind::OrEqual,
        RawToken::XorEqual => TokenKind::XorEqual,
        RawToken::RemainderEqual => TokenKind::RemainderEqual,
        RawToken::LeftShiftEqual => TokenKind::LeftShiftEqual,
        RawToken::RightShiftEqual => TokenKind::RightShiftEqual,
        RawToken::UnsignedRightShiftEqual => TokenKind::UnsignedRightShiftEqual,
        _ => TokenKind::Error,
    }
}

#[cfg(test)]
mod tests;
