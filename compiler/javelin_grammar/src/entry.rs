//! Grammar entry points.
//!
//! Each entry is reached through a pseudo-terminal that the lexer never
//! produces. The parser pushes it as the first token, so one automaton
//! serves every start symbol. Marker terminals are numbered right after
//! the real token kinds.

use javelin_ir::TokenKind;

#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
#[repr(u8)]
pub enum Entry {
    CompilationUnit,
    Expression,
    MethodBody,
    BlockStatements,
    ClassBodyDeclarations,
    PackageDeclaration,
    MemberValue,
    RecoveryHeaders,
    RecoveryStatements,
}

impl Entry {
    pub const ALL: [Entry; 9] = [
        Entry::CompilationUnit,
        Entry::Expression,
        Entry::MethodBody,
        Entry::BlockStatements,
        Entry::ClassBodyDeclarations,
        Entry::PackageDeclaration,
        Entry::MemberValue,
        Entry::RecoveryHeaders,
        Entry::RecoveryStatements,
    ];

    /// Name of the marker terminal in the grammar.
    pub const fn marker(self) -> &'static str {
        match self {
            Entry::CompilationUnit => "<unit>",
            Entry::Expression => "<expr>",
            Entry::MethodBody => "<body>",
            Entry::BlockStatements => "<stmts>",
            Entry::ClassBodyDeclarations => "<members>",
            Entry::PackageDeclaration => "<package>",
            Entry::MemberValue => "<value>",
            Entry::RecoveryHeaders => "<headers>",
            Entry::RecoveryStatements => "<recovery>",
        }
    }

    /// Terminal index of the marker.
    pub const fn terminal(self) -> usize {
        TokenKind::COUNT + self as usize
    }
}

/// Number of terminals: every token kind plus one marker per entry.
pub const NUM_TERMINALS: usize = TokenKind::COUNT + Entry::ALL.len();
