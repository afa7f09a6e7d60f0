use pretty_assertions::assert_eq;

use super::printer::{print_expr, print_unit};
use super::*;
use crate::{Span, StringInterner};

fn lit(arena: &mut AstArena, interner: &StringInterner, text: &str) -> ExprId {
    arena.alloc_expr(
        ExprKind::Literal(Literal {
            kind: LiteralKind::Integer,
            value: interner.intern(text),
        }),
        Span::DUMMY,
    )
}

#[test]
fn ids_index_in_allocation_order() {
    let interner = StringInterner::new();
    let mut arena = AstArena::new();
    let a = lit(&mut arena, &interner, "1");
    let b = lit(&mut arena, &interner, "2");
    assert_eq!(a.index(), 0);
    assert_eq!(b.index(), 1);
    assert_eq!(arena.expr_count(), 2);
    assert_eq!(format!("{a:?}"), "ExprId(0)");
}

#[test]
fn prints_parenthesized_binary() {
    let interner = StringInterner::new();
    let mut arena = AstArena::new();
    let one = lit(&mut arena, &interner, "1");
    let two = lit(&mut arena, &interner, "2");
    let three = lit(&mut arena, &interner, "3");
    let sum = arena.alloc_expr(
        ExprKind::Binary {
            op: BinaryOp::Add,
            left: one,
            right: two,
        },
        Span::DUMMY,
    );
    let paren = arena.alloc_expr(ExprKind::Paren(sum), Span::DUMMY);
    let product = arena.alloc_expr(
        ExprKind::Binary {
            op: BinaryOp::Mul,
            left: paren,
            right: three,
        },
        Span::DUMMY,
    );
    assert_eq!(print_expr(&arena, &interner, product), "(1 + 2) * 3");
}

#[test]
fn prints_class_with_field_and_skipped_method() {
    let interner = StringInterner::new();
    let mut arena = AstArena::new();
    let int = arena.alloc_type(TypeRefKind::Primitive(PrimitiveType::Int), Span::DUMMY);
    let void = arena.alloc_type(TypeRefKind::Void, Span::DUMMY);
    let field = arena.alloc_decl(
        DeclKind::Field(FieldDecl {
            ty: int,
            declarators: vec![VarDeclarator {
                name: interner.intern("x"),
                name_span: Span::DUMMY,
                dims: 0,
                init: None,
            }],
        }),
        Modifiers::default(),
        Span::DUMMY,
    );
    let method = arena.alloc_decl(
        DeclKind::Method(MethodDecl {
            name: interner.intern("run"),
            name_span: Span::DUMMY,
            return_type: Some(void),
            params: Vec::new(),
            throws: Vec::new(),
            body: Body::Skipped {
                range: Span::new(1, 2),
            },
        }),
        Modifiers {
            flags: ModifierFlags::PUBLIC | ModifierFlags::STATIC,
            ..Modifiers::default()
        },
        Span::DUMMY,
    );
    let class = arena.alloc_decl(
        DeclKind::Type(TypeDecl {
            kind: TypeDeclKind::Class,
            name: interner.intern("A"),
            name_span: Span::DUMMY,
            type_params: Vec::new(),
            extends: Vec::new(),
            implements: Vec::new(),
            enum_constants: Vec::new(),
            members: vec![field, method],
            body_start: Some(9),
        }),
        Modifiers::default(),
        Span::DUMMY,
    );
    let unit = CompilationUnit {
        types: vec![class],
        ..CompilationUnit::default()
    };
    assert_eq!(
        print_unit(&arena, &interner, &unit),
        "class A {\n  int x;\n  public static void run() {\n  }\n}\n"
    );
}

#[test]
fn qualified_name_split_last() {
    let interner = StringInterner::new();
    let mut name = QualifiedName::simple(interner.intern("java"), Span::DUMMY);
    name.segments.push(interner.intern("util"));
    name.segments.push(interner.intern("List"));
    let (qualifier, last) = name.split_last();
    assert_eq!(interner.lookup(last), "List");
    assert_eq!(qualifier.map(|q| q.segments.len()), Some(2));
    assert!(!name.is_simple());
}

#[test]
fn deep_nesting_prints_without_overflow() {
    const DEPTH: usize = 100_000;
    let interner = StringInterner::new();
    let mut arena = AstArena::new();
    let mut expr = lit(&mut arena, &interner, "0");
    for _ in 0..DEPTH {
        expr = arena.alloc_expr(ExprKind::Paren(expr), Span::DUMMY);
    }
    let printed = print_expr(&arena, &interner, expr);
    assert_eq!(printed.len(), 2 * DEPTH + 1);
    assert!(printed.starts_with("((") && printed.ends_with("0))"));
}
