//! Java tokens as handed from the lexer to the parser.
//!
//! `TokenKind` is a fieldless `u8` enum so that it doubles as the terminal
//! index in the grammar tables. Payload text (identifier spelling, literal
//! source) lives in the interned `Token::value`.

mod list;

pub use list::TokenList;

use std::fmt;

use crate::{Name, Span};

macro_rules! token_kinds {
    ($($variant:ident => $display:literal,)*) => {
        /// Terminal symbols of the Java grammar.
        #[derive(Copy, Clone, Eq, PartialEq, Hash, Debug, PartialOrd, Ord)]
        #[repr(u8)]
        pub enum TokenKind {
            $($variant,)*
        }

        impl TokenKind {
            /// Every kind, in discriminant order.
            pub const ALL: &'static [TokenKind] = &[$(TokenKind::$variant,)*];

            /// Number of kinds.
            pub const COUNT: usize = Self::ALL.len();

            /// Human-readable spelling used in symbol-name tables.
            pub const fn display(self) -> &'static str {
                match self {
                    $(TokenKind::$variant => $display,)*
                }
            }
        }
    };
}

token_kinds! {
    Identifier => "Identifier",
    IntegerLiteral => "IntegerLiteral",
    LongLiteral => "LongLiteral",
    FloatLiteral => "FloatingPointLiteral",
    DoubleLiteral => "DoubleLiteral",
    CharLiteral => "CharacterLiteral",
    StringLiteral => "StringLiteral",
    True => "true",
    False => "false",
    Null => "null",

    Abstract => "abstract",
    Assert => "assert",
    Boolean => "boolean",
    Break => "break",
    Byte => "byte",
    Case => "case",
    Catch => "catch",
    Char => "char",
    Class => "class",
    Const => "const",
    Continue => "continue",
    Default => "default",
    Do => "do",
    Double => "double",
    Else => "else",
    Enum => "enum",
    Extends => "extends",
    Final => "final",
    Finally => "finally",
    Float => "float",
    For => "for",
    Goto => "goto",
    If => "if",
    Implements => "implements",
    Import => "import",
    Instanceof => "instanceof",
    Int => "int",
    Interface => "interface",
    Long => "long",
    Native => "native",
    New => "new",
    Package => "package",
    Private => "private",
    Protected => "protected",
    Public => "public",
    Return => "return",
    Short => "short",
    Static => "static",
    Strictfp => "strictfp",
    Super => "super",
    Switch => "switch",
    Synchronized => "synchronized",
    This => "this",
    Throw => "throw",
    Throws => "throws",
    Transient => "transient",
    Try => "try",
    Void => "void",
    Volatile => "volatile",
    While => "while",

    LParen => "(",
    RParen => ")",
    LBrace => "{",
    RBrace => "}",
    LBracket => "[",
    RBracket => "]",
    Semicolon => ";",
    Comma => ",",
    Dot => ".",
    Ellipsis => "...",
    At => "@",

    Assign => "=",
    Greater => ">",
    Less => "<",
    Not => "!",
    Twiddle => "~",
    Question => "?",
    Colon => ":",
    EqualEqual => "==",
    LessEqual => "<=",
    GreaterEqual => ">=",
    NotEqual => "!=",
    AndAnd => "&&",
    OrOr => "||",
    PlusPlus => "++",
    MinusMinus => "--",
    Plus => "+",
    Minus => "-",
    Multiply => "*",
    Divide => "/",
    And => "&",
    Or => "|",
    Xor => "^",
    Remainder => "%",
    LeftShift => "<<",
    RightShift => ">>",
    UnsignedRightShift => ">>>",
    PlusEqual => "+=",
    MinusEqual => "-=",
    MultiplyEqual => "*=",
    DivideEqual => "/=",
    AndEqual => "&=",
    OrEqual => "|=",
    XorEqual => "^=",
    RemainderEqual => "%=",
    LeftShiftEqual => "<<=",
    RightShiftEqual => ">>=",
    UnsignedRightShiftEqual => ">>>=",

    Error => "<error>",
    Eof => "EOF",
}

impl TokenKind {
    /// Terminal index of this kind.
    #[inline]
    pub const fn index(self) -> usize {
        self as usize
    }

    /// Kind for a terminal index, if it names a real token.
    #[inline]
    pub fn from_index(index: usize) -> Option<TokenKind> {
        Self::ALL.get(index).copied()
    }

    /// Tokens whose spelling varies and is kept in `Token::value`.
    pub const fn has_payload(self) -> bool {
        matches!(
            self,
            TokenKind::Identifier
                | TokenKind::IntegerLiteral
                | TokenKind::LongLiteral
                | TokenKind::FloatLiteral
                | TokenKind::DoubleLiteral
                | TokenKind::CharLiteral
                | TokenKind::StringLiteral
        )
    }
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.display())
    }
}

/// Why the lexer produced an `Error` token.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum LexErrorKind {
    InvalidCharacter,
    UnterminatedString,
    UnterminatedChar,
    UnterminatedComment,
    MalformedNumber,
}

/// A lexed token.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub struct Token {
    pub kind: TokenKind,
    /// Set only on `TokenKind::Error`.
    pub error: Option<LexErrorKind>,
    pub span: Span,
    /// Interned source text for payload-carrying kinds, `Name::EMPTY` otherwise.
    pub value: Name,
}

impl Token {
    #[inline]
    pub const fn new(kind: TokenKind, span: Span) -> Self {
        Token {
            kind,
            error: None,
            span,
            value: Name::EMPTY,
        }
    }

    #[inline]
    pub const fn with_value(kind: TokenKind, span: Span, value: Name) -> Self {
        Token {
            kind,
            error: None,
            span,
            value,
        }
    }

    #[inline]
    pub const fn error(kind: LexErrorKind, span: Span) -> Self {
        Token {
            kind: TokenKind::Error,
            error: Some(kind),
            span,
            value: Name::EMPTY,
        }
    }

    /// Zero-width end-of-input token at `offset`.
    #[inline]
    pub const fn eof(offset: u32) -> Self {
        Token::new(TokenKind::Eof, Span::point(offset))
    }
}

#[cfg(test)]
mod tests;
