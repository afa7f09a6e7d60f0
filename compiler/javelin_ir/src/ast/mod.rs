//! Arena-based AST for Java compilation units.
//!
//! Nodes are plain data. Children are referenced through typed indices
//! (`ExprId`, `StmtId`, `TypeId`, `DeclId`) into one `AstArena`, so the
//! parser can build fragments bottom-up and the recovery engine can patch
//! declarations in place after the fact.

mod arena;
mod decl;
mod expr;
pub mod printer;
mod stmt;
mod types;

pub use arena::AstArena;
pub use decl::{
    Body, CompilationUnit, Decl, DeclKind, EnumConstant, FieldDecl, ImportDecl, InitializerDecl,
    MethodDecl, ModifierFlags, Modifiers, PackageDecl, Param, TypeDecl, TypeDeclKind, TypeParam,
    VarDeclarator,
};
pub use expr::{
    Annotation, AnnotationArgs, AssignOp, BinaryOp, Expr, ExprKind, Literal, LiteralKind,
    MemberValuePair, Receiver, UnaryOp,
};
pub use stmt::{
    CatchClause, ConstructorCallKind, LocalVarDecl, Stmt, StmtKind, SwitchGroup, SwitchLabel,
};
pub use types::{PrimitiveType, QualifiedName, TypeRef, TypeRefKind, WildcardBound};

use std::fmt;

macro_rules! define_id {
    ($(#[$meta:meta])* $name:ident) => {
        $(#[$meta])*
        #[derive(Copy, Clone, Eq, PartialEq, Hash, PartialOrd, Ord)]
        #[repr(transparent)]
        pub struct $name(u32);

        impl $name {
            #[inline]
            pub const fn new(index: u32) -> Self {
                $name(index)
            }

            #[inline]
            pub const fn index(self) -> usize {
                self.0 as usize
            }

            #[inline]
            pub const fn raw(self) -> u32 {
                self.0
            }
        }

        impl fmt::Debug for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}({})", stringify!($name), self.0)
            }
        }
    };
}

define_id!(
    /// Index of an expression in the arena.
    ExprId
);
define_id!(
    /// Index of a statement in the arena.
    StmtId
);
define_id!(
    /// Index of a type reference in the arena.
    TypeId
);
define_id!(
    /// Index of a declaration (type, field, method, initializer) in the arena.
    DeclId
);

#[cfg(test)]
mod tests;
