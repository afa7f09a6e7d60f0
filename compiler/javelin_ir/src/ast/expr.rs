//! Expressions.

use crate::{Name, Span};

use super::{DeclId, ExprId, QualifiedName, TypeId};

#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum LiteralKind {
    Integer,
    Long,
    Float,
    Double,
    Char,
    String,
    True,
    False,
    Null,
}

/// A literal; `value` is the interned source spelling.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub struct Literal {
    pub kind: LiteralKind,
    pub value: Name,
}

#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum BinaryOp {
    Mul,
    Div,
    Rem,
    Add,
    Sub,
    Shl,
    Shr,
    UShr,
    Lt,
    Gt,
    Le,
    Ge,
    Eq,
    Ne,
    BitAnd,
    BitXor,
    BitOr,
    And,
    Or,
}

impl BinaryOp {
    pub const fn symbol(self) -> &'static str {
        match self {
            BinaryOp::Mul => "*",
            BinaryOp::Div => "/",
            BinaryOp::Rem => "%",
            BinaryOp::Add => "+",
            BinaryOp::Sub => "-",
            BinaryOp::Shl => "<<",
            BinaryOp::Shr => ">>",
            BinaryOp::UShr => ">>>",
            BinaryOp::Lt => "<",
            BinaryOp::Gt => ">",
            BinaryOp::Le => "<=",
            BinaryOp::Ge => ">=",
            BinaryOp::Eq => "==",
            BinaryOp::Ne => "!=",
            BinaryOp::BitAnd => "&",
            BinaryOp::BitXor => "^",
            BinaryOp::BitOr => "|",
            BinaryOp::And => "&&",
            BinaryOp::Or => "||",
        }
    }
}

#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum UnaryOp {
    Plus,
    Minus,
    BitNot,
    Not,
    PreInc,
    PreDec,
    PostInc,
    PostDec,
}

impl UnaryOp {
    pub const fn symbol(self) -> &'static str {
        match self {
            UnaryOp::Plus => "+",
            UnaryOp::Minus => "-",
            UnaryOp::BitNot => "~",
            UnaryOp::Not => "!",
            UnaryOp::PreInc | UnaryOp::PostInc => "++",
            UnaryOp::PreDec | UnaryOp::PostDec => "--",
        }
    }

    pub const fn is_postfix(self) -> bool {
        matches!(self, UnaryOp::PostInc | UnaryOp::PostDec)
    }
}

#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum AssignOp {
    Assign,
    Add,
    Sub,
    Mul,
    Div,
    Rem,
    BitAnd,
    BitOr,
    BitXor,
    Shl,
    Shr,
    UShr,
}

impl AssignOp {
    pub const fn symbol(self) -> &'static str {
        match self {
            AssignOp::Assign => "=",
            AssignOp::Add => "+=",
            AssignOp::Sub => "-=",
            AssignOp::Mul => "*=",
            AssignOp::Div => "/=",
            AssignOp::Rem => "%=",
            AssignOp::BitAnd => "&=",
            AssignOp::BitOr => "|=",
            AssignOp::BitXor => "^=",
            AssignOp::Shl => "<<=",
            AssignOp::Shr => ">>=",
            AssignOp::UShr => ">>>=",
        }
    }
}

/// What a field access or method call is applied to.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum Receiver {
    Implicit,
    Expr(ExprId),
    Super,
}

#[derive(Clone, Eq, PartialEq, Hash, Debug)]
pub struct MemberValuePair {
    pub name: Name,
    pub value: ExprId,
    pub span: Span,
}

#[derive(Clone, Eq, PartialEq, Hash, Debug)]
pub enum AnnotationArgs {
    Marker,
    Single(ExprId),
    Pairs(Vec<MemberValuePair>),
}

#[derive(Clone, Eq, PartialEq, Hash, Debug)]
pub struct Annotation {
    pub name: QualifiedName,
    pub args: AnnotationArgs,
}

#[derive(Clone, Eq, PartialEq, Hash, Debug)]
pub enum ExprKind {
    Literal(Literal),
    Name(QualifiedName),
    This,
    Paren(ExprId),
    Binary {
        op: BinaryOp,
        left: ExprId,
        right: ExprId,
    },
    Unary {
        op: UnaryOp,
        operand: ExprId,
    },
    Assign {
        op: AssignOp,
        target: ExprId,
        value: ExprId,
    },
    Conditional {
        cond: ExprId,
        then_expr: ExprId,
        else_expr: ExprId,
    },
    InstanceOf {
        expr: ExprId,
        ty: TypeId,
    },
    Cast {
        ty: TypeId,
        expr: ExprId,
    },
    FieldAccess {
        receiver: Receiver,
        name: Name,
    },
    MethodCall {
        receiver: Receiver,
        name: Name,
        args: Vec<ExprId>,
    },
    New {
        ty: TypeId,
        args: Vec<ExprId>,
        body: Option<Vec<DeclId>>,
    },
    NewArray {
        element: TypeId,
        dims: Vec<ExprId>,
        extra_dims: u32,
        init: Option<ExprId>,
    },
    ArrayInit(Vec<ExprId>),
    ArrayAccess {
        array: ExprId,
        index: ExprId,
    },
    ClassLiteral(TypeId),
    Annotation(Annotation),
    /// Placeholder for an expression that could not be built.
    Error,
}

#[derive(Clone, Eq, PartialEq, Hash, Debug)]
pub struct Expr {
    pub kind: ExprKind,
    pub span: Span,
}
