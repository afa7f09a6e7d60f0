//! Declarations and the compilation unit.

use bitflags::bitflags;

use crate::{Name, Span};

use super::{DeclId, ExprId, QualifiedName, StmtId, TypeId};

bitflags! {
    /// Keyword modifiers.
    #[derive(Copy, Clone, Eq, PartialEq, Hash, Debug, Default)]
    pub struct ModifierFlags: u16 {
        const PUBLIC = 1 << 0;
        const PRIVATE = 1 << 1;
        const PROTECTED = 1 << 2;
        const STATIC = 1 << 3;
        const FINAL = 1 << 4;
        const SYNCHRONIZED = 1 << 5;
        const VOLATILE = 1 << 6;
        const TRANSIENT = 1 << 7;
        const NATIVE = 1 << 8;
        const ABSTRACT = 1 << 9;
        const STRICTFP = 1 << 10;
    }
}

impl ModifierFlags {
    /// Keywords in canonical order, for printing.
    pub const KEYWORDS: &'static [(ModifierFlags, &'static str)] = &[
        (ModifierFlags::PUBLIC, "public"),
        (ModifierFlags::PROTECTED, "protected"),
        (ModifierFlags::PRIVATE, "private"),
        (ModifierFlags::ABSTRACT, "abstract"),
        (ModifierFlags::STATIC, "static"),
        (ModifierFlags::FINAL, "final"),
        (ModifierFlags::TRANSIENT, "transient"),
        (ModifierFlags::VOLATILE, "volatile"),
        (ModifierFlags::SYNCHRONIZED, "synchronized"),
        (ModifierFlags::NATIVE, "native"),
        (ModifierFlags::STRICTFP, "strictfp"),
    ];
}

/// Keyword modifiers plus annotations (as `ExprKind::Annotation` expressions).
#[derive(Clone, Eq, PartialEq, Hash, Debug, Default)]
pub struct Modifiers {
    pub flags: ModifierFlags,
    pub annotations: Vec<ExprId>,
    /// Start of the first modifier, when any was written.
    pub start: Option<u32>,
}

impl Modifiers {
    pub fn is_empty(&self) -> bool {
        self.flags.is_empty() && self.annotations.is_empty()
    }
}

#[derive(Clone, Eq, PartialEq, Hash, Debug)]
pub struct VarDeclarator {
    pub name: Name,
    pub name_span: Span,
    pub dims: u32,
    pub init: Option<ExprId>,
}

#[derive(Clone, Eq, PartialEq, Hash, Debug)]
pub struct Param {
    pub modifiers: Modifiers,
    pub ty: TypeId,
    pub name: Name,
    pub name_span: Span,
    pub dims: u32,
    pub varargs: bool,
    pub span: Span,
}

#[derive(Clone, Eq, PartialEq, Hash, Debug)]
pub struct TypeParam {
    pub name: Name,
    pub bound: Option<TypeId>,
    pub span: Span,
}

/// A method, constructor or initializer body.
#[derive(Clone, Eq, PartialEq, Hash, Debug, Default)]
pub enum Body {
    /// No body: abstract or native methods, or a header salvaged by recovery.
    #[default]
    Absent,
    /// Body skipped by diet parsing; `range` excludes the braces.
    Skipped { range: Span },
    Parsed { stmts: Vec<StmtId>, span: Span },
}

impl Body {
    pub fn statements(&self) -> &[StmtId] {
        match self {
            Body::Parsed { stmts, .. } => stmts,
            Body::Absent | Body::Skipped { .. } => &[],
        }
    }
}

#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum TypeDeclKind {
    Class,
    Interface,
    Enum,
}

#[derive(Clone, Eq, PartialEq, Hash, Debug)]
pub struct EnumConstant {
    pub name: Name,
    pub args: Vec<ExprId>,
    /// Members of a constant-specific class body.
    pub body: Option<Vec<DeclId>>,
    pub span: Span,
}

#[derive(Clone, Eq, PartialEq, Hash, Debug)]
pub struct TypeDecl {
    pub kind: TypeDeclKind,
    pub name: Name,
    pub name_span: Span,
    pub type_params: Vec<TypeParam>,
    /// Superclass for classes, superinterfaces for interfaces.
    pub extends: Vec<TypeId>,
    pub implements: Vec<TypeId>,
    pub enum_constants: Vec<EnumConstant>,
    pub members: Vec<DeclId>,
    /// Position just after the opening brace, once seen.
    pub body_start: Option<u32>,
}

#[derive(Clone, Eq, PartialEq, Hash, Debug)]
pub struct FieldDecl {
    pub ty: TypeId,
    pub declarators: Vec<VarDeclarator>,
}

#[derive(Clone, Eq, PartialEq, Hash, Debug)]
pub struct MethodDecl {
    pub name: Name,
    pub name_span: Span,
    /// `None` for constructors.
    pub return_type: Option<TypeId>,
    pub params: Vec<Param>,
    pub throws: Vec<TypeId>,
    pub body: Body,
}

impl MethodDecl {
    pub fn is_constructor(&self) -> bool {
        self.return_type.is_none()
    }
}

#[derive(Clone, Eq, PartialEq, Hash, Debug)]
pub struct InitializerDecl {
    pub is_static: bool,
    pub body: Body,
}

#[derive(Clone, Eq, PartialEq, Hash, Debug)]
pub enum DeclKind {
    Type(TypeDecl),
    Field(FieldDecl),
    Method(MethodDecl),
    Initializer(InitializerDecl),
}

#[derive(Clone, Eq, PartialEq, Hash, Debug)]
pub struct Decl {
    pub kind: DeclKind,
    pub modifiers: Modifiers,
    pub span: Span,
    /// Set when the declaration was salvaged or completed by recovery.
    pub has_errors: bool,
}

impl Decl {
    pub fn as_type(&self) -> Option<&TypeDecl> {
        match &self.kind {
            DeclKind::Type(t) => Some(t),
            _ => None,
        }
    }

    pub fn as_type_mut(&mut self) -> Option<&mut TypeDecl> {
        match &mut self.kind {
            DeclKind::Type(t) => Some(t),
            _ => None,
        }
    }

    pub fn as_method(&self) -> Option<&MethodDecl> {
        match &self.kind {
            DeclKind::Method(m) => Some(m),
            _ => None,
        }
    }

    pub fn as_method_mut(&mut self) -> Option<&mut MethodDecl> {
        match &mut self.kind {
            DeclKind::Method(m) => Some(m),
            _ => None,
        }
    }

    pub fn as_field(&self) -> Option<&FieldDecl> {
        match &self.kind {
            DeclKind::Field(f) => Some(f),
            _ => None,
        }
    }

    /// The body slot of a method, constructor or initializer.
    pub fn body_mut(&mut self) -> Option<&mut Body> {
        match &mut self.kind {
            DeclKind::Method(m) => Some(&mut m.body),
            DeclKind::Initializer(i) => Some(&mut i.body),
            DeclKind::Type(_) | DeclKind::Field(_) => None,
        }
    }

    pub fn body(&self) -> Option<&Body> {
        match &self.kind {
            DeclKind::Method(m) => Some(&m.body),
            DeclKind::Initializer(i) => Some(&i.body),
            DeclKind::Type(_) | DeclKind::Field(_) => None,
        }
    }
}

#[derive(Clone, Eq, PartialEq, Hash, Debug)]
pub struct PackageDecl {
    pub name: QualifiedName,
    pub span: Span,
}

#[derive(Clone, Eq, PartialEq, Hash, Debug)]
pub struct ImportDecl {
    pub name: QualifiedName,
    pub is_static: bool,
    pub on_demand: bool,
    pub span: Span,
}

#[derive(Clone, Eq, PartialEq, Hash, Debug, Default)]
pub struct CompilationUnit {
    pub package: Option<PackageDecl>,
    pub imports: Vec<ImportDecl>,
    pub types: Vec<DeclId>,
    pub span: Span,
    pub has_errors: bool,
}
