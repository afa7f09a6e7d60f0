//! Parse goals.
//!
//! A goal picks which start symbol the shared automaton runs toward. The
//! driver seeds the token stream with the goal's marker terminal, so no
//! extra tables are needed per entry point.

use javelin_grammar::Entry;

#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum GoalKind {
    CompilationUnit,
    Expression,
    MethodBody,
    BlockStatements,
    ClassBodyDeclarations,
    PackageDeclaration,
    MemberValue,
}

impl GoalKind {
    pub const ALL: [GoalKind; 7] = [
        GoalKind::CompilationUnit,
        GoalKind::Expression,
        GoalKind::MethodBody,
        GoalKind::BlockStatements,
        GoalKind::ClassBodyDeclarations,
        GoalKind::PackageDeclaration,
        GoalKind::MemberValue,
    ];

    pub(crate) const fn entry(self) -> Entry {
        match self {
            GoalKind::CompilationUnit => Entry::CompilationUnit,
            GoalKind::Expression => Entry::Expression,
            GoalKind::MethodBody => Entry::MethodBody,
            GoalKind::BlockStatements => Entry::BlockStatements,
            GoalKind::ClassBodyDeclarations => Entry::ClassBodyDeclarations,
            GoalKind::PackageDeclaration => Entry::PackageDeclaration,
            GoalKind::MemberValue => Entry::MemberValue,
        }
    }

    /// Goals whose errors are repaired by restarting on recovery goals.
    /// The rest stop at their first syntax error.
    pub(crate) const fn recovers(self) -> bool {
        matches!(
            self,
            GoalKind::CompilationUnit
                | GoalKind::MethodBody
                | GoalKind::BlockStatements
                | GoalKind::ClassBodyDeclarations
        )
    }
}
