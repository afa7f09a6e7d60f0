//! Writing a recovered tree back into the arena.

use javelin_ir::ast::{AstArena, Body, CompilationUnit, DeclId, ImportDecl, StmtId, StmtKind};
use javelin_ir::Span;
use javelin_stack::ensure_sufficient_stack;

use super::tree::{NodeId, NodeKind, RecoveryTree};

pub(super) struct Folder<'a> {
    tree: &'a RecoveryTree,
    arena: &'a mut AstArena,
}

impl<'a> Folder<'a> {
    pub fn new(tree: &'a RecoveryTree, arena: &'a mut AstArena) -> Self {
        Folder { tree, arena }
    }

    pub fn unit(&mut self, span: Span) -> CompilationUnit {
        let tree = self.tree;
        let root = tree.node(NodeId::ROOT);
        let mut imports: Vec<ImportDecl> = Vec::new();
        let mut types = Vec::new();
        for &child in &root.children {
            match &tree.node(child).kind {
                NodeKind::Import(import) => imports.push(import.clone()),
                NodeKind::Type(Some(decl)) => {
                    self.type_decl(child, *decl);
                    types.push(*decl);
                }
                _ => {}
            }
        }
        let package = match &root.kind {
            NodeKind::Unit { package } => package.clone(),
            _ => None,
        };
        CompilationUnit {
            package,
            imports,
            types,
            span,
            has_errors: true,
        }
    }

    pub fn members(&mut self, id: NodeId) -> Vec<DeclId> {
        ensure_sufficient_stack(|| self.members_inner(id))
    }

    /// Every fold cycle passes through `members` or `statements`, one
    /// frame pair per unclosed brace.
    fn members_inner(&mut self, id: NodeId) -> Vec<DeclId> {
        let tree = self.tree;
        let mut members = Vec::new();
        for &child in &tree.node(id).children {
            match tree.node(child).kind {
                NodeKind::Type(Some(decl)) => {
                    self.type_decl(child, decl);
                    members.push(decl);
                }
                NodeKind::Field(decl) => members.push(decl),
                NodeKind::Method(decl) | NodeKind::Initializer(decl) => {
                    self.body(child, decl);
                    members.push(decl);
                }
                _ => {}
            }
        }
        members
    }

    pub fn statements(&mut self, id: NodeId) -> Vec<StmtId> {
        ensure_sufficient_stack(|| self.statements_inner(id))
    }

    fn statements_inner(&mut self, id: NodeId) -> Vec<StmtId> {
        let tree = self.tree;
        let mut stmts = Vec::new();
        for &child in &tree.node(id).children {
            let node = tree.node(child);
            match node.kind {
                NodeKind::Statement(stmt) => stmts.push(stmt),
                NodeKind::Block => {
                    let inner = self.statements(child);
                    stmts.push(self.arena.alloc_stmt(StmtKind::Block(inner), node.span));
                }
                NodeKind::Type(Some(decl)) => {
                    self.type_decl(child, decl);
                    let span = self.arena.decl(decl).span;
                    stmts.push(self.arena.alloc_stmt(StmtKind::LocalClass(decl), span));
                }
                _ => {}
            }
        }
        stmts
    }

    /// Complete elements keep what their own reduction built.
    fn type_decl(&mut self, id: NodeId, decl: DeclId) {
        let tree = self.tree;
        let node = tree.node(id);
        if !node.open {
            return;
        }
        let members = self.members(id);
        let target = self.arena.decl_mut(decl);
        target.span = target.span.extend_to(node.span.end);
        target.has_errors = true;
        if let Some(ty) = target.as_type_mut() {
            ty.members = members;
            ty.body_start = node.brace.map(|brace| brace.end);
        }
    }

    fn body(&mut self, id: NodeId, decl: DeclId) {
        let tree = self.tree;
        let node = tree.node(id);
        if !node.open {
            return;
        }
        let stmts = self.statements(id);
        let target = self.arena.decl_mut(decl);
        target.span = target.span.extend_to(node.span.end);
        target.has_errors = true;
        let Some(brace) = node.brace else {
            return;
        };
        if let Some(body) = target.body_mut() {
            if !matches!(body, Body::Skipped { .. }) {
                *body = Body::Parsed {
                    stmts,
                    span: Span::new(brace.start, node.span.end),
                };
            }
        }
    }
}
