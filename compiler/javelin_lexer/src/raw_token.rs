//! Raw token recognition.
//!
//! The `RawToken` enum is the logos-derived tokenizer output before keyword
//! resolution and interning. Keywords come out as `Ident` and are resolved
//! by [`crate::keywords::lookup`].

use logos::{Lexer, Logos};

use crate::LexError;

/// Raw token from logos (before interning).
#[derive(Logos, Debug, Clone, Copy, PartialEq, Eq)]
#[logos(error = LexError)]
#[logos(skip r"[ \t\r\n\x0C]+")]
pub(crate) enum RawToken {
    #[regex(r"//[^\n]*")]
    LineComment,
    #[regex(r"/\*([^*]|\*+[^*/])*\*+/")]
    BlockComment,
    #[regex(r"/\*([^*]|\*+[^*/])*\**")]
    UnterminatedComment,

    #[regex(r"[a-zA-Z_$][a-zA-Z0-9_$]*")]
    Ident,

    // Numbers. Callbacks reject misplaced underscores and empty hex digits.
    #[regex(r"[0-9][0-9_]*", check_number)]
    #[regex(r"0[xX][0-9a-fA-F_]*", check_number)]
    Int,
    #[regex(r"[0-9][0-9_]*[lL]", check_number)]
    #[regex(r"0[xX][0-9a-fA-F_]*[lL]", check_number)]
    Long,
    #[regex(r"[0-9][0-9_]*\.[0-9_]*([eE][+-]?[0-9_]+)?[fFdD]?", check_number)]
    #[regex(r"\.[0-9][0-9_]*([eE][+-]?[0-9_]+)?[fFdD]?", check_number)]
    #[regex(r"[0-9][0-9_]*[eE][+-]?[0-9_]+[fFdD]?", check_number)]
    #[regex(r"[0-9][0-9_]*[fFdD]", check_number)]
    Floating,

    // String literal (no unescaped newlines allowed)
    #[regex(r#""([^"\\\n\r]|\\.)*""#)]
    String,
    #[regex(r#""([^"\\\n\r]|\\.)*"#)]
    UnterminatedString,

    #[regex(r"'([^'\\\n\r]|\\[^\n\r])+'")]
    Char,
    #[regex(r"'([^'\\\n\r]|\\[^\n\r])*")]
    UnterminatedChar,

    // Separators
    #[token("(")]
    LParen,
    #[token(")")]
    RParen,
    #[token("{")]
    LBrace,
    #[token("}")]
    RBrace,
    #[token("[")]
    LBracket,
    #[token("]")]
    RBracket,
    #[token(";")]
    Semicolon,
    #[token(",")]
    Comma,
    #[token(".")]
    Dot,
    #[token("...")]
    Ellipsis,
    #[token("@")]
    At,

    // Operators
    #[token("=")]
    Assign,
    #[token(">")]
    Greater,
    #[token("<")]
    Less,
    #[token("!")]
    Not,
    #[token("~")]
    Twiddle,
    #[token("?")]
    Question,
    #[token(":")]
    Colon,
    #[token("==")]
    EqualEqual,
    #[token("<=")]
    LessEqual,
    #[token(">=")]
    GreaterEqual,
    #[token("!=")]
    NotEqual,
    #[token("&&")]
    AndAnd,
    #[token("||")]
    OrOr,
    #[token("++")]
    PlusPlus,
    #[token("--")]
    MinusMinus,
    #[token("+")]
    Plus,
    #[token("-")]
    Minus,
    #[token("*")]
    Multiply,
    #[token("/")]
    Divide,
    #[token("&")]
    And,
    #[token("|")]
    Or,
    #[token("^")]
    Xor,
    #[token("%")]
    Remainder,
    #[token("<<")]
    LeftShift,
    #[token(">>")]
    RightShift,
    #[token(">>>")]
    UnsignedRightShift,
    #[token("+=")]
    PlusEqual,
    #[token("-=")]
    MinusEqual,
    #[token("*=")]
    MultiplyEqual,
    #[token("/=")]
    DivideEqual,
    #[token("&=")]
    AndEqual,
    #[token("|=")]
    OrEqual,
    #[token("^=")]
    XorEqual,
    #[token("%=")]
    RemainderEqual,
    #[token("<<=")]
    LeftShiftEqual,
    #[token(">>=")]
    RightShiftEqual,
    #[token(">>>=")]
    UnsignedRightShiftEqual,
}

fn check_number(lex: &mut Lexer<'_, RawToken>) -> Result<(), LexError> {
    if well_formed_number(lex.slice()) {
        Ok(())
    } else {
        Err(LexError::MalformedNumber)
    }
}

/// Underscores may only sit between digits; hex literals need at least one digit.
pub(crate) fn well_formed_number(text: &str) -> bool {
    let (hex, body) = match text.get(..2) {
        Some("0x" | "0X") => (true, &text[2..]),
        _ => (false, text),
    };
    let body = body.strip_suffix(['l', 'L']).unwrap_or(body);
    let body = if hex {
        body
    } else {
        body.strip_suffix(['f', 'F', 'd', 'D']).unwrap_or(body)
    };
    if hex && body.is_empty() {
        return false;
    }
    let bytes = body.as_bytes();
    bytes.iter().enumerate().all(|(i, &b)| {
        if b != b'_' {
            return true;
        }
        let before = i.checked_sub(1).and_then(|j| bytes.get(j));
        let after = bytes.get(i + 1);
        matches!(before, Some(c) if c.is_ascii_hexdigit() || *c == b'_')
            && matches!(after, Some(c) if c.is_ascii_hexdigit() || *c == b'_')
    })
}
