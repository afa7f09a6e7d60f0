//! Type references.

use smallvec::SmallVec;

use crate::{Name, Span};

use super::TypeId;

/// A dotted name such as `java.util.List`.
#[derive(Clone, Eq, PartialEq, Hash, Debug)]
pub struct QualifiedName {
    pub segments: SmallVec<[Name; 4]>,
    pub span: Span,
}

impl QualifiedName {
    pub fn simple(name: Name, span: Span) -> Self {
        let mut segments = SmallVec::new();
        segments.push(name);
        QualifiedName { segments, span }
    }

    /// Last segment, or `Name::EMPTY` for an empty name.
    pub fn last(&self) -> Name {
        self.segments.last().copied().unwrap_or(Name::EMPTY)
    }

    pub fn is_simple(&self) -> bool {
        self.segments.len() == 1
    }

    /// Split off the last segment, returning the qualifier (if any) and the last name.
    pub fn split_last(&self) -> (Option<QualifiedName>, Name) {
        match self.segments.split_last() {
            Some((last, rest)) if !rest.is_empty() => (
                Some(QualifiedName {
                    segments: rest.iter().copied().collect(),
                    span: self.span,
                }),
                *last,
            ),
            Some((last, _)) => (None, *last),
            None => (None, Name::EMPTY),
        }
    }
}

#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum PrimitiveType {
    Boolean,
    Byte,
    Short,
    Char,
    Int,
    Long,
    Float,
    Double,
}

impl PrimitiveType {
    pub const fn keyword(self) -> &'static str {
        match self {
            PrimitiveType::Boolean => "boolean",
            PrimitiveType::Byte => "byte",
            PrimitiveType::Short => "short",
            PrimitiveType::Char => "char",
            PrimitiveType::Int => "int",
            PrimitiveType::Long => "long",
            PrimitiveType::Float => "float",
            PrimitiveType::Double => "double",
        }
    }
}

#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum WildcardBound {
    Extends(TypeId),
    Super(TypeId),
}

#[derive(Clone, Eq, PartialEq, Hash, Debug)]
pub enum TypeRefKind {
    Primitive(PrimitiveType),
    Void,
    /// Class or interface type with optional type arguments.
    Named { name: QualifiedName, args: Vec<TypeId> },
    Array { element: TypeId, dims: u32 },
    Wildcard { bound: Option<WildcardBound> },
}

#[derive(Clone, Eq, PartialEq, Hash, Debug)]
pub struct TypeRef {
    pub kind: TypeRefKind,
    pub span: Span,
}
