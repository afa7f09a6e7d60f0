use javelin_diagnostic::ErrorCode;
use javelin_ir::ast::{
    BinaryOp, Body, DeclKind, ExprKind, LiteralKind, PrimitiveType, StmtKind, TypeDeclKind,
    TypeRefKind,
};
use pretty_assertions::assert_eq;

use super::{parse, parse_with, tables, Parse};
use crate::{GoalKind, Parsed, Parser, ParserConfig, SourceLevel, TokenCursor};

fn unit(parsed: &Parsed) -> &javelin_ir::ast::CompilationUnit {
    match parsed {
        Parsed::Unit(unit) => unit,
        other => panic!("expected a unit, found {other:?}"),
    }
}

#[test]
fn field_declaration_parses_cleanly() {
    let p = parse("class A { int x; }", GoalKind::CompilationUnit);
    assert!(p.problems.is_empty(), "{:?}", p.problems);
    assert!(!p.outcome.has_errors);
    assert_eq!(p.outcome.restarts, 0);

    let unit = unit(&p.outcome.parsed);
    assert_eq!(unit.types.len(), 1);
    let class = p.arena.decl(unit.types[0]);
    let ty = class.as_type().unwrap();
    assert_eq!(ty.kind, TypeDeclKind::Class);
    assert_eq!(p.text(ty.name), "A");
    assert_eq!(ty.members.len(), 1);

    let field = p.arena.decl(ty.members[0]).as_field().unwrap();
    assert_eq!(field.declarators.len(), 1);
    assert_eq!(p.text(field.declarators[0].name), "x");
    assert_eq!(
        p.arena.type_ref(field.ty).kind,
        TypeRefKind::Primitive(PrimitiveType::Int)
    );
}

#[test]
fn parenthesized_sum_times_literal() {
    let p = parse("(1 + 2) * 3", GoalKind::Expression);
    assert!(p.problems.is_empty(), "{:?}", p.problems);
    let Parsed::Expression(Some(root)) = p.outcome.parsed else {
        panic!("expected an expression, found {:?}", p.outcome.parsed);
    };

    let ExprKind::Binary {
        op: BinaryOp::Mul,
        left,
        right,
    } = p.arena.expr(root).kind
    else {
        panic!("expected a product");
    };
    let ExprKind::Paren(inner) = p.arena.expr(left).kind else {
        panic!("expected a parenthesized operand");
    };
    assert!(matches!(
        p.arena.expr(inner).kind,
        ExprKind::Binary {
            op: BinaryOp::Add,
            ..
        }
    ));
    let ExprKind::Literal(three) = &p.arena.expr(right).kind else {
        panic!("expected a literal");
    };
    assert_eq!(three.kind, LiteralKind::Integer);
    assert_eq!(p.text(three.value), "3");
}

#[test]
fn independent_sessions_build_identical_trees() {
    let source = "package p; import java.util.List; \
                  class A<T> extends B implements C { \
                    private int[] xs = { 1, 2 }; \
                    A() { super(); } \
                    T get(int i) { \
                      for (int j = 0; j < i; j++) { if (j > 2) break; } \
                      return null; \
                    } \
                  }";
    let first = parse(source, GoalKind::CompilationUnit);
    let second = parse(source, GoalKind::CompilationUnit);
    assert!(first.problems.is_empty(), "{:?}", first.problems);
    assert_eq!(first.outcome, second.outcome);
    assert_eq!(first.arena, second.arena);
}

#[test]
fn one_session_is_reusable() {
    let interner = javelin_ir::StringInterner::new();
    let tokens = javelin_lexer::lex("class A { void f() { g(); } }", &interner);
    let mut parser = Parser::new(tables(), ParserConfig::default());

    let mut runs = Vec::new();
    for _ in 0..2 {
        let mut arena = javelin_ir::ast::AstArena::new();
        let mut problems = Vec::new();
        let mut cursor = TokenCursor::new(&tokens);
        let unit = parser
            .parse_unit(&mut cursor, &mut arena, &mut problems)
            .unwrap();
        assert!(problems.is_empty());
        runs.push((unit, arena));
    }
    assert_eq!(runs[0], runs[1]);
    assert!(parser.stacks().is_consistent());
}

#[test]
fn fragment_goals() {
    let p = parse("package a.b.c;", GoalKind::PackageDeclaration);
    let Parsed::Package(Some(package)) = &p.outcome.parsed else {
        panic!("expected a package, found {:?}", p.outcome.parsed);
    };
    let segments: Vec<_> = package.name.segments.iter().map(|&n| p.text(n)).collect();
    assert_eq!(segments, ["a", "b", "c"]);

    let p = parse("int x; void f() {} static {}", GoalKind::ClassBodyDeclarations);
    let Parsed::Members(members) = &p.outcome.parsed else {
        panic!("expected members, found {:?}", p.outcome.parsed);
    };
    assert_eq!(members.len(), 3);
    assert!(matches!(p.arena.decl(members[2]).kind, DeclKind::Initializer(_)));

    let p = parse("int y = 1; y++;", GoalKind::BlockStatements);
    let Parsed::Statements(stmts) = &p.outcome.parsed else {
        panic!("expected statements, found {:?}", p.outcome.parsed);
    };
    assert_eq!(stmts.len(), 2);
    assert!(matches!(p.arena.stmt(stmts[0]).kind, StmtKind::LocalVar(_)));

    let p = parse("{ 1, 2 }", GoalKind::MemberValue);
    let Parsed::Expression(Some(value)) = p.outcome.parsed else {
        panic!("expected a member value, found {:?}", p.outcome.parsed);
    };
    assert!(matches!(&p.arena.expr(value).kind, ExprKind::ArrayInit(items) if items.len() == 2));
}

#[test]
fn diet_parse_skips_bodies_until_asked() {
    let config = ParserConfig::default().with_diet(true);
    let mut p = parse_with(
        "class A { void f() { int y = 1; { y++; } } }",
        GoalKind::CompilationUnit,
        config,
    );
    assert!(p.problems.is_empty(), "{:?}", p.problems);
    let class = unit(&p.outcome.parsed).types[0];
    let method = p.arena.decl(class).as_type().unwrap().members[0];
    assert!(matches!(
        p.arena.decl(method).body(),
        Some(Body::Skipped { .. })
    ));

    let mut parser = Parser::new(tables(), config);
    let mut cursor = TokenCursor::new(&p.tokens);
    let parsed = parser
        .parse_method_body_into(method, &mut cursor, &mut p.arena, &mut p.problems)
        .unwrap();
    assert!(parsed);
    assert!(p.problems.is_empty(), "{:?}", p.problems);
    let body = p.arena.decl(method).body().unwrap();
    assert_eq!(body.statements().len(), 2);
    assert!(matches!(
        p.arena.stmt(body.statements()[1]).kind,
        StmtKind::Block(_)
    ));

    // A parsed body is not parsed twice.
    let again = parser
        .parse_method_body_into(method, &mut cursor, &mut p.arena, &mut p.problems)
        .unwrap();
    assert!(!again);
}

#[test]
fn newer_constructs_are_flagged_below_their_level() {
    let source = "import static java.lang.Math.max; class A {}";
    let old = parse_with(
        source,
        GoalKind::CompilationUnit,
        ParserConfig::default().with_source_level(SourceLevel::JDK1_4),
    );
    assert_eq!(old.codes(), vec![ErrorCode::SOURCE_LEVEL]);
    assert_eq!(unit(&old.outcome.parsed).imports.len(), 1);

    let current = parse(source, GoalKind::CompilationUnit);
    assert!(current.problems.is_empty(), "{:?}", current.problems);
}

#[test]
fn cast_of_non_name_is_reported() {
    let p = parse("(a + b) c", GoalKind::Expression);
    assert_eq!(p.codes(), vec![ErrorCode::INVALID_CAST]);
    assert!(p.outcome.has_errors);
    let Parsed::Expression(Some(expr)) = p.outcome.parsed else {
        panic!("expected an expression, found {:?}", p.outcome.parsed);
    };
    assert_eq!(p.arena.expr(expr).kind, ExprKind::Error);
}

/// The value assigned by the expression statement `stmt`.
fn assigned(p: &Parse, stmt: javelin_ir::ast::StmtId) -> javelin_ir::ast::ExprId {
    let StmtKind::Expr(expr) = p.arena.stmt(stmt).kind else {
        panic!("expected an expression statement");
    };
    let ExprKind::Assign { value, .. } = p.arena.expr(expr).kind else {
        panic!("expected an assignment");
    };
    value
}

#[test]
fn generic_cast_beside_a_comparison() {
    let p = parse(
        "class A { void f() { v = (List<String>[]) o; w = (a < b); } }",
        GoalKind::CompilationUnit,
    );
    assert!(p.problems.is_empty(), "{:?}", p.problems);
    let class = unit(&p.outcome.parsed).types[0];
    let method = p.arena.decl(class).as_type().unwrap().members[0];
    let stmts = p.arena.decl(method).body().unwrap().statements().to_vec();
    assert_eq!(stmts.len(), 2);

    let ExprKind::Cast { ty, .. } = p.arena.expr(assigned(&p, stmts[0])).kind else {
        panic!("expected a cast");
    };
    let TypeRefKind::Array { element, dims } = p.arena.type_ref(ty).kind else {
        panic!("expected an array type");
    };
    assert_eq!(dims, 1);
    let TypeRefKind::Named { name, args } = &p.arena.type_ref(element).kind else {
        panic!("expected a class type");
    };
    assert_eq!(p.text(name.segments[0]), "List");
    assert_eq!(args.len(), 1);

    let ExprKind::Paren(inner) = p.arena.expr(assigned(&p, stmts[1])).kind else {
        panic!("expected a parenthesized comparison");
    };
    let ExprKind::Binary {
        op: BinaryOp::Lt,
        left,
        ..
    } = p.arena.expr(inner).kind
    else {
        panic!("expected `<`");
    };
    assert!(matches!(p.arena.expr(left).kind, ExprKind::Name(_)));
}

#[test]
fn generic_cast_needs_generics() {
    let p = parse_with(
        "(java.util.List<T>) o",
        GoalKind::Expression,
        ParserConfig::default().with_source_level(SourceLevel::JDK1_4),
    );
    assert!(p.codes().contains(&ErrorCode::SOURCE_LEVEL), "{:?}", p.problems);
    let Parsed::Expression(Some(expr)) = p.outcome.parsed else {
        panic!("expected an expression, found {:?}", p.outcome.parsed);
    };
    assert!(matches!(p.arena.expr(expr).kind, ExprKind::Cast { .. }));
}

#[test]
fn enum_constants_with_class_bodies() {
    let source = "enum E { X { void m() { a(); } }, Y(1) { }, Z; void n() { b(); } }";
    for diet in [false, true] {
        let p = parse_with(
            source,
            GoalKind::CompilationUnit,
            ParserConfig::default().with_diet(diet),
        );
        assert!(p.problems.is_empty(), "{:?}", p.problems);
        let ty = p.arena.decl(unit(&p.outcome.parsed).types[0]).as_type().unwrap();
        assert_eq!(ty.kind, TypeDeclKind::Enum);
        assert_eq!(ty.members.len(), 1);
        let [x, y, z] = ty.enum_constants.as_slice() else {
            panic!("expected three constants, found {:?}", ty.enum_constants);
        };

        let body = x.body.as_deref().unwrap();
        assert_eq!(body.len(), 1);
        let m = p.arena.decl(body[0]);
        assert_eq!(p.text(m.as_method().unwrap().name), "m");
        assert!(matches!(m.body(), Some(Body::Parsed { stmts, .. }) if stmts.len() == 1));

        assert_eq!(y.args.len(), 1);
        assert_eq!(y.body.as_deref(), Some(&[][..]));
        assert_eq!(z.body, None);

        let n = p.arena.decl(ty.members[0]).body().unwrap();
        assert_eq!(matches!(n, Body::Skipped { .. }), diet);
    }
}

#[test]
fn diet_keeps_anonymous_class_bodies() {
    let p = parse_with(
        "class A { Runnable r = new Runnable() { public void run() { x(); } }; \
                   void g() { y(); } }",
        GoalKind::CompilationUnit,
        ParserConfig::default().with_diet(true),
    );
    assert!(p.problems.is_empty(), "{:?}", p.problems);
    let ty = p.arena.decl(unit(&p.outcome.parsed).types[0]).as_type().unwrap();
    let field = p.arena.decl(ty.members[0]).as_field().unwrap();
    let init = field.declarators[0].init.unwrap();
    let ExprKind::New { body: Some(members), .. } = &p.arena.expr(init).kind else {
        panic!("expected an anonymous class");
    };
    let run = p.arena.decl(members[0]);
    assert_eq!(p.text(run.as_method().unwrap().name), "run");
    assert!(matches!(run.body(), Some(Body::Parsed { stmts, .. }) if stmts.len() == 1));

    // Skipping resumes once the anonymous body closes.
    assert!(matches!(
        p.arena.decl(ty.members[1]).body(),
        Some(Body::Skipped { .. })
    ));
}
