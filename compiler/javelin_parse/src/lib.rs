//! Table-driven LALR(1) parser for Java.
//!
//! The automaton is generated by `javelin_grammar` at build time and
//! embedded as big-endian resources. A [`Parser`] session walks those
//! tables over a [`TokenSource`], building AST nodes into an
//! [`AstArena`](javelin_ir::ast::AstArena) through one semantic action
//! per grammar rule.
//!
//! Syntax errors never abort a parse. They are reported to a
//! [`ProblemReporter`](javelin_diagnostic::ProblemReporter) and repaired:
//! first by discarding a single token where that lets the automaton go
//! on, then by restarting on header and statement recovery goals and
//! stitching the elements they yield into a best-effort tree.
//!
//! ```text
//! GrammarTables::load()  ──►  Parser::new(&tables, config)
//!                                  │
//!                 TokenCursor ──►  run(goal) ──► ParseOutcome
//! ```

mod config;
mod dispatch;
mod driver;
mod error;
mod goal;
mod recovery;
mod source;
pub mod stacks;
mod tables;

pub use config::ParserConfig;
pub use driver::{ParseOutcome, Parsed, Parser};
pub use error::ParseAbort;
pub use goal::GoalKind;
pub use javelin_grammar::SourceLevel;
pub use source::{TokenCursor, TokenSource};
pub use tables::{GrammarTables, TableError};

#[cfg(test)]
mod tests;
