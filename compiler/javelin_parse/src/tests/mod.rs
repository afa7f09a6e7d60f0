//! Parser tests.
//!
//! - `scenarios`: whole-unit and fragment parses, clean and broken
//! - `recovery`: diagnostics and the shape of recovered trees
//! - `properties`: determinism and termination over generated input

#![allow(clippy::unwrap_used)]

mod properties;
mod recovery;
mod scenarios;

use std::sync::OnceLock;

use javelin_diagnostic::{ErrorCode, Problem};
use javelin_ir::ast::AstArena;
use javelin_ir::{StringInterner, TokenList};

use crate::{GoalKind, GrammarTables, ParseOutcome, Parser, ParserConfig, TokenCursor};

/// Tables are decoded once and shared by every test, as a driver would.
fn tables() -> &'static GrammarTables {
    static TABLES: OnceLock<GrammarTables> = OnceLock::new();
    TABLES.get_or_init(|| GrammarTables::load().unwrap())
}

struct Parse {
    interner: StringInterner,
    tokens: TokenList,
    arena: AstArena,
    problems: Vec<Problem>,
    outcome: ParseOutcome,
    restart_points: Vec<u32>,
}

impl Parse {
    fn codes(&self) -> Vec<ErrorCode> {
        self.problems.iter().map(|p| p.code).collect()
    }

    fn text(&self, name: javelin_ir::Name) -> &'static str {
        self.interner.lookup(name)
    }
}

fn parse_with(source: &str, goal: GoalKind, config: ParserConfig) -> Parse {
    let interner = StringInterner::new();
    let tokens = javelin_lexer::lex(source, &interner);
    let mut arena = AstArena::new();
    let mut problems = Vec::new();
    let mut parser = Parser::new(tables(), config);
    let mut cursor = TokenCursor::new(&tokens);
    let outcome = parser
        .run(goal, &mut cursor, &mut arena, &mut problems)
        .unwrap();
    let restart_points = parser.restart_points().to_vec();
    Parse {
        interner,
        tokens,
        arena,
        problems,
        outcome,
        restart_points,
    }
}

fn parse(source: &str, goal: GoalKind) -> Parse {
    parse_with(source, goal, ParserConfig::default())
}
