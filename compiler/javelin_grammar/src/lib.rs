//! Javelin grammar: the Java grammar and its LALR(1) table generator.
//!
//! The parser crate runs [`generate`] from its build script and embeds the
//! resulting resources, so the tables always match the rules in
//! [`rules::RULES`]. The runtime side only needs the small shared types:
//! [`Act`], [`Entry`], [`SourceLevel`], [`RecoveryTemplate`] and
//! [`ActionEncoding`].

mod act;
mod encoding;
mod entry;
pub mod grammar;
pub mod lalr;
mod level;
pub mod rules;
mod template;
mod writer;

pub use act::Act;
pub use encoding::ActionEncoding;
pub use entry::{Entry, NUM_TERMINALS};
pub use grammar::{Grammar, GrammarError};
pub use lalr::{Action, Conflict};
pub use level::SourceLevel;
pub use template::RecoveryTemplate;
pub use writer::{ParseTables, RESOURCE_NAMES};

/// Build the Java parse tables.
pub fn generate() -> Result<ParseTables, GrammarError> {
    let grammar = Grammar::java()?;
    let automaton = lalr::build(&grammar)?;
    ParseTables::new(&grammar, &automaton)
}

#[cfg(test)]
mod tests;
