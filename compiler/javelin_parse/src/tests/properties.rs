//! Generated-input properties.
//!
//! Broken inputs are short token soups drawn from Java's structural
//! vocabulary; valid ones are assembled from a few member and statement
//! shapes.

use proptest::prelude::*;

use javelin_ir::ast::AstArena;
use javelin_ir::StringInterner;

use super::{parse, parse_with, tables};
use crate::{GoalKind, Parsed, Parser, ParserConfig, TokenCursor};

fn fragment() -> impl Strategy<Value = &'static str> {
    prop::sample::select(vec![
        "class", "interface", "enum", "A", "x", "f", "int", "void", "static", "public", "{",
        "}", "(", ")", ";", ",", "=", "+", "1", "return", "if", "else", "while", "new",
        "import", "package", ".", "[", "]", "<", ">", "@", "try", "catch",
    ])
}

fn soup() -> impl Strategy<Value = String> {
    prop::collection::vec(fragment(), 0..40).prop_map(|parts| parts.join(" "))
}

/// Inputs that start like a real unit before turning to soup.
fn broken_unit() -> impl Strategy<Value = String> {
    soup().prop_map(|tail| format!("package p; class A {{ int x; void f() {{ {tail}"))
}

fn statement() -> impl Strategy<Value = String> {
    prop_oneof![
        "x[a-z0-9]{0,2}".prop_map(|v| format!("int {v} = 1;")),
        "x[a-z0-9]{0,2}".prop_map(|v| format!("{v}({v}, 2);")),
        "x[a-z0-9]{0,2}".prop_map(|v| format!("if ({v} > 1) {{ return; }} else {v}++;")),
        "x[a-z0-9]{0,2}".prop_map(|v| format!("while ({v}) {{ {v} = {v} + 1; }}")),
        Just("{ }".to_owned()),
        Just(";".to_owned()),
    ]
}

fn member() -> impl Strategy<Value = String> {
    prop_oneof![
        "x[a-z0-9]{0,2}".prop_map(|v| format!("int {v};")),
        "x[a-z0-9]{0,2}".prop_map(|v| format!("static String[] {v} = {{ \"a\" }};")),
        prop::collection::vec(statement(), 0..4)
            .prop_map(|body| format!("void m(int p) {{ {} }}", body.join(" "))),
        Just("static { }".to_owned()),
    ]
}

/// Well-formed units built from a handful of member shapes.
fn valid_unit() -> impl Strategy<Value = String> {
    prop::collection::vec(member(), 0..6)
        .prop_map(|members| format!("package p; import a.b.*; class A {{ {} }}", members.join(" ")))
}

/// Every combination of diet, statement recovery and restart bound.
fn config() -> impl Strategy<Value = ParserConfig> {
    (any::<bool>(), any::<bool>(), prop::option::of(0u32..3)).prop_map(
        |(diet, statements, max)| {
            ParserConfig::default()
                .with_diet(diet)
                .with_statement_recovery(statements)
                .with_max_recovery_restarts(max)
        },
    )
}

fn member_count(parsed: &Parsed, arena: &AstArena) -> usize {
    match parsed {
        Parsed::Unit(unit) => unit
            .types
            .iter()
            .filter_map(|&ty| arena.decl(ty).as_type())
            .map(|ty| ty.members.len())
            .sum(),
        _ => 0,
    }
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    #[test]
    fn unit_goal_terminates(source in soup()) {
        let p = parse(&source, GoalKind::CompilationUnit);
        prop_assert!(p.outcome.checkpoint <= u32::try_from(source.len()).unwrap_or(u32::MAX));
    }

    #[test]
    fn valid_units_reduce_the_same_way(source in valid_unit()) {
        let interner = StringInterner::new();
        let tokens = javelin_lexer::lex(&source, &interner);
        let mut parser = Parser::new(tables(), ParserConfig::default());
        let mut runs = Vec::new();
        for _ in 0..2 {
            let mut arena = AstArena::new();
            let mut problems = Vec::new();
            let mut cursor = TokenCursor::new(&tokens);
            let outcome = parser
                .run(GoalKind::CompilationUnit, &mut cursor, &mut arena, &mut problems)
                .unwrap();
            prop_assert!(problems.is_empty(), "{:?} in {}", problems, source);
            prop_assert!(!outcome.has_errors);
            prop_assert!(parser.stacks().is_consistent());
            runs.push(parser.reductions().to_vec());
        }
        prop_assert_eq!(&runs[0], &runs[1]);
    }

    #[test]
    fn parsing_is_deterministic(source in broken_unit()) {
        let first = parse(&source, GoalKind::CompilationUnit);
        let second = parse(&source, GoalKind::CompilationUnit);
        prop_assert_eq!(&first.outcome, &second.outcome);
        prop_assert_eq!(&first.problems, &second.problems);
        prop_assert_eq!(&first.arena, &second.arena);
    }

    #[test]
    fn restart_points_never_move_back(source in broken_unit()) {
        let p = parse(&source, GoalKind::CompilationUnit);
        prop_assert!(p.restart_points.windows(2).all(|w| w[0] <= w[1]));
        if !p.restart_points.is_empty() {
            prop_assert!(p.outcome.has_errors);
        }
    }

    #[test]
    fn fragment_goals_terminate(source in soup()) {
        for goal in GoalKind::ALL {
            let p = parse(&source, goal);
            if !p.problems.is_empty() {
                prop_assert!(p.outcome.has_errors);
            }
        }
    }

    #[test]
    fn recovery_stays_within_the_configured_bounds(
        source in broken_unit(),
        config in config(),
    ) {
        let p = parse_with(&source, GoalKind::CompilationUnit, config);
        prop_assert_eq!(p.outcome.restarts as usize, p.restart_points.len());
        if let Some(max) = config.max_recovery_restarts {
            prop_assert!(p.outcome.restarts <= max);
        }
        prop_assert!(p.restart_points.windows(2).all(|w| w[0] <= w[1]));
        prop_assert!(p.outcome.checkpoint <= u32::try_from(source.len()).unwrap_or(u32::MAX));

        let again = parse_with(&source, GoalKind::CompilationUnit, config);
        prop_assert_eq!(&p.outcome, &again.outcome);
        prop_assert_eq!(&p.problems, &again.problems);
    }

    #[test]
    fn valid_units_parse_cleanly_under_any_config(source in valid_unit(), config in config()) {
        let p = parse_with(&source, GoalKind::CompilationUnit, config);
        prop_assert!(p.problems.is_empty(), "{:?} in {}", p.problems, source);
        prop_assert!(!p.outcome.has_errors);
        prop_assert_eq!(p.outcome.restarts, 0);

        let full = parse(&source, GoalKind::CompilationUnit);
        prop_assert_eq!(
            member_count(&p.outcome.parsed, &p.arena),
            member_count(&full.outcome.parsed, &full.arena)
        );
    }

    #[test]
    fn fragment_goals_terminate_under_any_config(source in soup(), config in config()) {
        for goal in GoalKind::ALL {
            let p = parse_with(&source, goal, config);
            if let Some(max) = config.max_recovery_restarts {
                prop_assert!(p.outcome.restarts <= max);
            }
            if !p.problems.is_empty() {
                prop_assert!(p.outcome.has_errors);
            }
        }
    }
}
