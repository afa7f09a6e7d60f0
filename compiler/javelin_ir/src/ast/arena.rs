//! Storage for every node built during a parse.

use crate::Span;

use super::{
    Decl, DeclId, DeclKind, Expr, ExprId, ExprKind, Modifiers, Stmt, StmtId, StmtKind, TypeId,
    TypeRef, TypeRefKind,
};

/// Flat node storage addressed by typed indices.
///
/// One arena serves a whole compilation unit, including later sub-range
/// parses of skipped bodies, so ids handed out earlier stay valid.
#[derive(Clone, Default, Debug, PartialEq, Eq)]
pub struct AstArena {
    exprs: Vec<Expr>,
    stmts: Vec<Stmt>,
    types: Vec<TypeRef>,
    decls: Vec<Decl>,
}

fn next_index(len: usize) -> u32 {
    u32::try_from(len).unwrap_or(u32::MAX)
}

impl AstArena {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn alloc_expr(&mut self, kind: ExprKind, span: Span) -> ExprId {
        let id = ExprId::new(next_index(self.exprs.len()));
        self.exprs.push(Expr { kind, span });
        id
    }

    pub fn alloc_stmt(&mut self, kind: StmtKind, span: Span) -> StmtId {
        let id = StmtId::new(next_index(self.stmts.len()));
        self.stmts.push(Stmt { kind, span });
        id
    }

    pub fn alloc_type(&mut self, kind: TypeRefKind, span: Span) -> TypeId {
        let id = TypeId::new(next_index(self.types.len()));
        self.types.push(TypeRef { kind, span });
        id
    }

    pub fn alloc_decl(&mut self, kind: DeclKind, modifiers: Modifiers, span: Span) -> DeclId {
        let id = DeclId::new(next_index(self.decls.len()));
        self.decls.push(Decl {
            kind,
            modifiers,
            span,
            has_errors: false,
        });
        id
    }

    #[inline]
    pub fn expr(&self, id: ExprId) -> &Expr {
        &self.exprs[id.index()]
    }

    #[inline]
    pub fn expr_mut(&mut self, id: ExprId) -> &mut Expr {
        &mut self.exprs[id.index()]
    }

    #[inline]
    pub fn stmt(&self, id: StmtId) -> &Stmt {
        &self.stmts[id.index()]
    }

    #[inline]
    pub fn stmt_mut(&mut self, id: StmtId) -> &mut Stmt {
        &mut self.stmts[id.index()]
    }

    #[inline]
    pub fn type_ref(&self, id: TypeId) -> &TypeRef {
        &self.types[id.index()]
    }

    #[inline]
    pub fn type_mut(&mut self, id: TypeId) -> &mut TypeRef {
        &mut self.types[id.index()]
    }

    #[inline]
    pub fn decl(&self, id: DeclId) -> &Decl {
        &self.decls[id.index()]
    }

    #[inline]
    pub fn decl_mut(&mut self, id: DeclId) -> &mut Decl {
        &mut self.decls[id.index()]
    }

    pub fn expr_count(&self) -> usize {
        self.exprs.len()
    }

    pub fn stmt_count(&self) -> usize {
        self.stmts.len()
    }

    pub fn decl_count(&self) -> usize {
        self.decls.len()
    }

    /// Drop everything, keeping allocated capacity.
    pub fn clear(&mut self) {
        self.exprs.clear();
        self.stmts.clear();
        self.types.clear();
        self.decls.clear();
    }
}
