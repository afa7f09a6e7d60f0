use javelin_diagnostic::ErrorCode;
use javelin_ir::ast::{Body, CompilationUnit, DeclId, StmtKind};
use pretty_assertions::assert_eq;

use super::{parse, parse_with, Parse};
use crate::{GoalKind, Parsed, ParserConfig};

fn recovered_unit(p: &Parse) -> &CompilationUnit {
    let Parsed::Unit(unit) = &p.outcome.parsed else {
        panic!("expected a unit, found {:?}", p.outcome.parsed);
    };
    assert!(unit.has_errors);
    unit
}

fn members(p: &Parse, class: DeclId) -> &[DeclId] {
    &p.arena.decl(class).as_type().unwrap().members
}

#[test]
fn missing_semicolon_still_yields_the_field() {
    let source = "class A { int x }";
    let p = parse(source, GoalKind::CompilationUnit);
    assert_eq!(p.codes(), vec![ErrorCode::SYNTAX_ERROR]);
    assert!(p.outcome.has_errors);
    assert!(p.outcome.checkpoint >= 17, "checkpoint {}", p.outcome.checkpoint);

    let unit = recovered_unit(&p);
    assert_eq!(unit.types.len(), 1);
    let class = p.arena.decl(unit.types[0]);
    assert!(class.has_errors);
    let fields = members(&p, unit.types[0]);
    assert_eq!(fields.len(), 1);
    let field = p.arena.decl(fields[0]).as_field().unwrap();
    assert_eq!(p.text(field.declarators[0].name), "x");
}

#[test]
fn unmatched_brace_keeps_absorbing_statements() {
    let p = parse(
        "class A { void f() { a(); { b(); c();",
        GoalKind::CompilationUnit,
    );
    assert_eq!(p.codes(), vec![ErrorCode::UNEXPECTED_EOF]);
    assert_eq!(p.outcome.restarts, 0);

    let unit = recovered_unit(&p);
    let methods = members(&p, unit.types[0]);
    assert_eq!(methods.len(), 1);
    let Some(Body::Parsed { stmts, .. }) = p.arena.decl(methods[0]).body() else {
        panic!("expected a parsed body");
    };
    assert_eq!(stmts.len(), 2);
    let StmtKind::Block(inner) = &p.arena.stmt(stmts[1]).kind else {
        panic!("expected the open block last");
    };
    assert_eq!(inner.len(), 2);
}

#[test]
fn deeply_unclosed_blocks_fold_without_overflow() {
    const DEPTH: usize = 20_000;
    let source = format!("class A {{ void f() {{ {}", "{ a(); ".repeat(DEPTH));
    let p = parse(&source, GoalKind::CompilationUnit);
    assert_eq!(p.codes(), vec![ErrorCode::UNEXPECTED_EOF]);

    let unit = recovered_unit(&p);
    let method = members(&p, unit.types[0])[0];
    let Some(Body::Parsed { stmts, .. }) = p.arena.decl(method).body() else {
        panic!("expected a parsed body");
    };
    let mut depth = 0;
    let mut level = stmts.clone();
    while let Some(&last) = level.last() {
        let StmtKind::Block(inner) = &p.arena.stmt(last).kind else {
            break;
        };
        depth += 1;
        level = inner.clone();
    }
    assert_eq!(depth, DEPTH);
}

#[test]
fn unclosed_class_keeps_complete_members() {
    let p = parse(
        "class A { void f() { a(); } int y;",
        GoalKind::CompilationUnit,
    );
    assert_eq!(p.codes(), vec![ErrorCode::UNEXPECTED_EOF]);
    let unit = recovered_unit(&p);
    let decls = members(&p, unit.types[0]);
    assert_eq!(decls.len(), 2);
    assert_eq!(p.arena.decl(decls[0]).body().unwrap().statements().len(), 1);
    assert!(p.arena.decl(decls[1]).as_field().is_some());
}

#[test]
fn duplicated_keyword_is_discarded() {
    let p = parse("class class A { }", GoalKind::CompilationUnit);
    assert_eq!(p.codes(), vec![ErrorCode::TOKEN_DISCARDED]);
    assert_eq!(p.problems[0].span, javelin_ir::Span::new(0, 5));
    assert!(p.outcome.has_errors);
    assert_eq!(p.outcome.restarts, 0);
    let Parsed::Unit(unit) = &p.outcome.parsed else {
        panic!("expected a unit");
    };
    assert_eq!(unit.types.len(), 1);
}

#[test]
fn bodies_are_skipped_without_statement_recovery() {
    let p = parse_with(
        "class A { void f() { a( } void g() {} }",
        GoalKind::CompilationUnit,
        ParserConfig::default().with_statement_recovery(false),
    );
    assert_eq!(p.codes(), vec![ErrorCode::SYNTAX_ERROR]);
    assert_eq!(p.outcome.restarts, 1);

    let unit = recovered_unit(&p);
    let methods = members(&p, unit.types[0]);
    assert_eq!(methods.len(), 2);
    for &method in methods {
        assert!(
            matches!(p.arena.decl(method).body(), Some(Body::Skipped { .. })),
            "{:?}",
            p.arena.decl(method)
        );
    }
}

#[test]
fn restart_limit_stops_recovery() {
    let p = parse_with(
        "class A { int x }",
        GoalKind::CompilationUnit,
        ParserConfig::default().with_max_recovery_restarts(Some(0)),
    );
    assert_eq!(
        p.codes(),
        vec![ErrorCode::SYNTAX_ERROR, ErrorCode::RECOVERY_HALTED]
    );
    assert_eq!(p.outcome.restarts, 0);
    assert_eq!(recovered_unit(&p).types.len(), 1);
}

#[test]
fn fragment_goals_stop_at_the_first_error() {
    let p = parse("1 +", GoalKind::Expression);
    assert_eq!(p.codes(), vec![ErrorCode::UNEXPECTED_EOF]);
    assert_eq!(p.outcome.parsed, Parsed::Expression(None));
    assert!(p.outcome.has_errors);
}

#[test]
fn lexical_errors_are_reported_once() {
    let p = parse("class A { int x = 1 # 2; }", GoalKind::CompilationUnit);
    assert_eq!(p.problems[0].code, ErrorCode::J0001);
    let lexical = p.problems.iter().filter(|problem| problem.code.is_lexical()).count();
    assert_eq!(lexical, 1);
    assert!(p.outcome.has_errors);
}

#[test]
fn restarts_move_forward() {
    let p = parse(
        "class A { int x void f( { return } int ; class B { y z } }",
        GoalKind::CompilationUnit,
    );
    assert!(p.outcome.has_errors);
    let points = &p.restart_points;
    assert!(points.windows(2).all(|w| w[0] <= w[1]), "{points:?}");
    assert!(points.iter().all(|&at| at <= p.outcome.checkpoint));
}
