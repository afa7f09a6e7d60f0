//! Javelin IR - shared data structures for the Java front end.
//!
//! - Spans for source locations
//! - Names for interned identifiers and literal spellings
//! - Tokens and `TokenList` for lexer output
//! - The arena AST (`ast`) built by the parser
//!
//! # Design
//!
//! - **Intern everything**: identifier and literal text becomes `Name(u32)`
//! - **Flatten everything**: nodes refer to each other through `ExprId`,
//!   `StmtId`, `TypeId` and `DeclId` indices into one `AstArena`

/// Compile-time assertion that a type has a specific size.
#[macro_export]
macro_rules! static_assert_size {
    ($ty:ty, $size:expr) => {
        const _: [(); $size] = [(); ::std::mem::size_of::<$ty>()];
    };
}

pub mod ast;
mod interner;
mod name;
mod span;
mod token;

pub use interner::{InternError, StringInterner};
pub use name::Name;
pub use span::{Span, SpanError};
pub use token::{LexErrorKind, Token, TokenKind, TokenList};
