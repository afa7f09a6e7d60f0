//! Statements.

use crate::{Name, Span};

use super::{DeclId, ExprId, Modifiers, Param, StmtId, TypeId, VarDeclarator};

#[derive(Clone, Eq, PartialEq, Hash, Debug)]
pub struct LocalVarDecl {
    pub modifiers: Modifiers,
    pub ty: TypeId,
    pub declarators: Vec<VarDeclarator>,
}

#[derive(Clone, Eq, PartialEq, Hash, Debug)]
pub struct CatchClause {
    pub param: Param,
    pub body: StmtId,
    pub span: Span,
}

#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum SwitchLabel {
    Case(ExprId),
    Default,
}

#[derive(Clone, Eq, PartialEq, Hash, Debug)]
pub struct SwitchGroup {
    pub labels: Vec<SwitchLabel>,
    pub stmts: Vec<StmtId>,
    pub span: Span,
}

#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum ConstructorCallKind {
    This,
    Super,
}

#[derive(Clone, Eq, PartialEq, Hash, Debug)]
pub enum StmtKind {
    Block(Vec<StmtId>),
    LocalVar(LocalVarDecl),
    LocalClass(DeclId),
    Empty,
    Expr(ExprId),
    If {
        cond: ExprId,
        then_stmt: StmtId,
        else_stmt: Option<StmtId>,
    },
    While {
        cond: ExprId,
        body: StmtId,
    },
    DoWhile {
        body: StmtId,
        cond: ExprId,
    },
    For {
        init: Vec<StmtId>,
        cond: Option<ExprId>,
        update: Vec<ExprId>,
        body: StmtId,
    },
    ForEach {
        var: Param,
        iterable: ExprId,
        body: StmtId,
    },
    Labeled {
        label: Name,
        body: StmtId,
    },
    Break(Option<Name>),
    Continue(Option<Name>),
    Return(Option<ExprId>),
    Throw(ExprId),
    Synchronized {
        lock: ExprId,
        body: StmtId,
    },
    Try {
        body: StmtId,
        catches: Vec<CatchClause>,
        finally: Option<StmtId>,
    },
    Switch {
        selector: ExprId,
        groups: Vec<SwitchGroup>,
    },
    Assert {
        cond: ExprId,
        message: Option<ExprId>,
    },
    ConstructorCall {
        kind: ConstructorCallKind,
        args: Vec<ExprId>,
    },
}

#[derive(Clone, Eq, PartialEq, Hash, Debug)]
pub struct Stmt {
    pub kind: StmtKind,
    pub span: Span,
}
