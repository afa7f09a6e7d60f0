#![allow(clippy::unwrap_used)]

use javelin_grammar::Entry;
use javelin_ir::ast::{
    AstArena, Body, DeclId, DeclKind, MethodDecl, Modifiers, StmtKind, TypeDecl, TypeDeclKind,
};
use javelin_ir::{Name, Span};
use pretty_assertions::assert_eq;

use super::fold::Folder;
use super::tree::{NodeId, NodeKind, RecoveryTree};
use super::Recovery;

fn unit_recovery() -> Recovery {
    let mut recovery = Recovery::default();
    recovery.reset(0);
    recovery.tree = Some(RecoveryTree::new(
        NodeKind::Unit { package: None },
        Span::point(0),
        0,
    ));
    recovery
}

fn class(arena: &mut AstArena, span: Span) -> DeclId {
    let ty = TypeDecl {
        kind: TypeDeclKind::Class,
        name: Name::EMPTY,
        name_span: span,
        type_params: Vec::new(),
        extends: Vec::new(),
        implements: Vec::new(),
        enum_constants: Vec::new(),
        members: Vec::new(),
        body_start: None,
    };
    arena.alloc_decl(DeclKind::Type(ty), Modifiers::default(), span)
}

fn constructor(arena: &mut AstArena, span: Span) -> DeclId {
    let method = MethodDecl {
        name: Name::EMPTY,
        name_span: span,
        return_type: None,
        params: Vec::new(),
        throws: Vec::new(),
        body: Body::Absent,
    };
    arena.alloc_decl(DeclKind::Method(method), Modifiers::default(), span)
}

fn tree(recovery: &Recovery) -> &RecoveryTree {
    recovery.tree.as_ref().unwrap()
}

#[test]
fn braces_switch_between_header_and_statement_goals() {
    let mut arena = AstArena::new();
    let mut recovery = unit_recovery();
    let ty = class(&mut arena, Span::new(0, 7));
    recovery.attach(NodeKind::Type(Some(ty)), Span::new(0, 7), true);
    let type_node = recovery.current;
    recovery.open_brace(Span::new(8, 9), &mut arena);
    assert_eq!(recovery.entry(), Entry::RecoveryHeaders);

    let method = constructor(&mut arena, Span::new(10, 15));
    recovery.attach(NodeKind::Method(method), Span::new(10, 15), true);
    assert_eq!(recovery.entry(), Entry::RecoveryHeaders);
    recovery.open_brace(Span::new(16, 17), &mut arena);
    assert_eq!(recovery.entry(), Entry::RecoveryStatements);

    let closed = recovery.close_brace(Span::new(20, 21));
    assert!(closed.is_some());
    assert_eq!(recovery.current, type_node);
    assert_eq!(recovery.entry(), Entry::RecoveryHeaders);

    recovery.close_brace(Span::new(22, 23));
    assert_eq!(recovery.current, NodeId::ROOT);
    assert_eq!(recovery.checkpoint, 23);
}

#[test]
fn bare_brace_in_type_body_opens_initializer() {
    let mut arena = AstArena::new();
    let mut recovery = unit_recovery();
    let ty = class(&mut arena, Span::new(0, 7));
    recovery.attach(NodeKind::Type(Some(ty)), Span::new(0, 7), true);
    recovery.open_brace(Span::new(8, 9), &mut arena);
    recovery.open_brace(Span::new(10, 11), &mut arena);

    let node = tree(&recovery).node(recovery.current);
    let NodeKind::Initializer(decl) = node.kind else {
        panic!("expected an initializer, found {:?}", node.kind);
    };
    assert!(matches!(arena.decl(decl).kind, DeclKind::Initializer(_)));
    assert_eq!(recovery.entry(), Entry::RecoveryStatements);
}

#[test]
fn brace_inside_body_opens_block() {
    let mut arena = AstArena::new();
    let mut recovery = unit_recovery();
    let ty = class(&mut arena, Span::new(0, 7));
    recovery.attach(NodeKind::Type(Some(ty)), Span::new(0, 7), true);
    recovery.open_brace(Span::new(8, 9), &mut arena);
    let method = constructor(&mut arena, Span::new(10, 15));
    recovery.attach(NodeKind::Method(method), Span::new(10, 15), true);
    recovery.open_brace(Span::new(16, 17), &mut arena);
    recovery.open_brace(Span::new(18, 19), &mut arena);

    assert_eq!(tree(&recovery).node(recovery.current).kind, NodeKind::Block);
    recovery.close_brace(Span::new(20, 21));
    assert_eq!(
        tree(&recovery).node(recovery.current).kind,
        NodeKind::Method(method)
    );
}

#[test]
fn header_without_body_does_not_own_closing_brace() {
    let mut arena = AstArena::new();
    let mut recovery = unit_recovery();
    let ty = class(&mut arena, Span::new(0, 7));
    recovery.attach(NodeKind::Type(Some(ty)), Span::new(0, 7), true);
    recovery.open_brace(Span::new(8, 9), &mut arena);
    let method = constructor(&mut arena, Span::new(10, 15));
    recovery.attach(NodeKind::Method(method), Span::new(10, 15), true);

    let closed = recovery.close_brace(Span::new(16, 17));
    assert_eq!(tree(&recovery).node(closed.unwrap()).kind, NodeKind::Type(Some(ty)));
    assert_eq!(recovery.current, NodeId::ROOT);
}

#[test]
fn stray_member_rejoins_last_type() {
    let mut arena = AstArena::new();
    let mut recovery = unit_recovery();
    let ty = class(&mut arena, Span::new(0, 7));
    recovery.attach(NodeKind::Type(Some(ty)), Span::new(0, 7), true);
    let type_node = recovery.current;
    recovery.open_brace(Span::new(8, 9), &mut arena);
    recovery.close_brace(Span::new(10, 11));
    assert_eq!(recovery.current, NodeId::ROOT);

    let method = constructor(&mut arena, Span::new(12, 20));
    recovery.attach(NodeKind::Method(method), Span::new(12, 20), false);
    assert_eq!(recovery.current, type_node);
    assert_eq!(tree(&recovery).node(type_node).children.len(), 1);
}

#[test]
fn closing_brace_at_root_only_moves_checkpoint() {
    let mut recovery = unit_recovery();
    assert_eq!(recovery.close_brace(Span::new(4, 5)), None);
    assert_eq!(recovery.current, NodeId::ROOT);
    assert_eq!(recovery.checkpoint, 5);
}

#[test]
fn checkpoint_never_moves_back() {
    let mut recovery = unit_recovery();
    recovery.advance(10);
    recovery.advance(5);
    assert_eq!(recovery.checkpoint, 10);
}

#[test]
fn skipped_body_records_inner_range() {
    let mut arena = AstArena::new();
    let mut recovery = unit_recovery();
    let ty = class(&mut arena, Span::new(0, 7));
    recovery.attach(NodeKind::Type(Some(ty)), Span::new(0, 7), true);
    recovery.open_brace(Span::new(8, 9), &mut arena);
    let method = constructor(&mut arena, Span::new(10, 15));
    recovery.attach(NodeKind::Method(method), Span::new(10, 15), true);
    recovery.open_brace(Span::new(20, 21), &mut arena);

    let closed = recovery.close_brace(Span::new(40, 41)).unwrap();
    recovery.mark_skipped(closed, Span::new(40, 41), &mut arena);
    assert_eq!(
        arena.decl(method).body(),
        Some(&Body::Skipped {
            range: Span::new(21, 40)
        })
    );
}

#[test]
fn fold_writes_members_and_bodies() {
    let mut arena = AstArena::new();
    let mut recovery = unit_recovery();
    let ty = class(&mut arena, Span::new(0, 7));
    recovery.attach(NodeKind::Type(Some(ty)), Span::new(0, 7), true);
    recovery.open_brace(Span::new(8, 9), &mut arena);
    let method = constructor(&mut arena, Span::new(10, 15));
    recovery.attach(NodeKind::Method(method), Span::new(10, 15), true);
    recovery.open_brace(Span::new(20, 21), &mut arena);
    let stmt = arena.alloc_stmt(StmtKind::Empty, Span::new(22, 30));
    recovery.attach(NodeKind::Statement(stmt), Span::new(22, 30), false);

    let mut recovered = recovery.tree.take().unwrap();
    recovered.settle();
    let unit = Folder::new(&recovered, &mut arena).unit(Span::new(0, 40));

    assert_eq!(unit.types, vec![ty]);
    assert!(unit.has_errors);
    let class = arena.decl(ty);
    assert!(class.has_errors);
    assert_eq!(class.as_type().unwrap().members, vec![method]);
    assert_eq!(class.as_type().unwrap().body_start, Some(9));
    assert_eq!(
        arena.decl(method).body(),
        Some(&Body::Parsed {
            stmts: vec![stmt],
            span: Span::new(20, 30)
        })
    );
}
