//! Type references.

use javelin_ir::ast::{AstArena, PrimitiveType, QualifiedName, TypeId, TypeRefKind, WildcardBound};
use javelin_ir::{Span, TokenKind};

use super::Reduction;
use crate::driver::Cx;
use crate::stacks::StackError;
use crate::{ParseAbort, Parser};

/// Wrap `element` in `dims` array dimensions. Zero dims returns it as is.
pub(crate) fn array_of(arena: &mut AstArena, element: TypeId, dims: u32, span: Span) -> TypeId {
    if dims == 0 {
        return element;
    }
    arena.alloc_type(TypeRefKind::Array { element, dims }, span)
}

pub(crate) fn named_type(arena: &mut AstArena, name: QualifiedName) -> TypeId {
    let span = name.span;
    arena.alloc_type(
        TypeRefKind::Named {
            name,
            args: Vec::new(),
        },
        span,
    )
}

impl Parser<'_> {
    pub(super) fn primitive_type(
        &mut self,
        r: &Reduction<'_>,
        cx: &mut Cx<'_>,
    ) -> Result<(), ParseAbort> {
        let primitive = match r.first()?.kind {
            TokenKind::Boolean => PrimitiveType::Boolean,
            TokenKind::Byte => PrimitiveType::Byte,
            TokenKind::Short => PrimitiveType::Short,
            TokenKind::Char => PrimitiveType::Char,
            TokenKind::Int => PrimitiveType::Int,
            TokenKind::Long => PrimitiveType::Long,
            TokenKind::Float => PrimitiveType::Float,
            TokenKind::Double => PrimitiveType::Double,
            _ => return Err(ParseAbort::BadToken { rule: r.rule }),
        };
        let ty = cx.arena.alloc_type(TypeRefKind::Primitive(primitive), r.span);
        self.stacks.types.push(ty);
        Ok(())
    }

    pub(super) fn void_type(
        &mut self,
        r: &Reduction<'_>,
        cx: &mut Cx<'_>,
    ) -> Result<(), ParseAbort> {
        let ty = cx.arena.alloc_type(TypeRefKind::Void, r.span);
        self.stacks.types.push(ty);
        Ok(())
    }

    pub(super) fn name_to_type(&mut self, cx: &mut Cx<'_>) -> Result<(), ParseAbort> {
        let name = self.pop_name()?;
        let ty = named_type(cx.arena, name);
        self.stacks.types.push(ty);
        Ok(())
    }

    /// Attach the type-argument group to the class type beneath it.
    pub(super) fn generic_type(
        &mut self,
        r: &Reduction<'_>,
        cx: &mut Cx<'_>,
    ) -> Result<(), ParseAbort> {
        let args = self.pop_types()?;
        let ty = self
            .stacks
            .types
            .top()
            .copied()
            .ok_or(StackError::Underflow { stack: "type" })?;
        let target = cx.arena.type_mut(ty);
        target.span = target.span.merge(r.span);
        match &mut target.kind {
            TypeRefKind::Named { args: slot, .. } => {
                *slot = args;
                Ok(())
            }
            _ => Err(ParseAbort::UnexpectedItem {
                rule: r.rule,
                expected: "class type",
            }),
        }
    }

    pub(super) fn array_type(
        &mut self,
        r: &Reduction<'_>,
        cx: &mut Cx<'_>,
    ) -> Result<(), ParseAbort> {
        let dims = self.pop_dims()?;
        let element = self.pop_type()?;
        let ty = array_of(cx.arena, element, dims, r.span);
        self.stacks.types.push(ty);
        Ok(())
    }

    pub(super) fn array_type_name(
        &mut self,
        r: &Reduction<'_>,
        cx: &mut Cx<'_>,
    ) -> Result<(), ParseAbort> {
        let dims = self.pop_dims()?;
        let name = self.pop_name()?;
        let element = named_type(cx.arena, name);
        let ty = array_of(cx.arena, element, dims, r.span);
        self.stacks.types.push(ty);
        Ok(())
    }

    pub(super) fn wildcard(
        &mut self,
        r: &Reduction<'_>,
        cx: &mut Cx<'_>,
    ) -> Result<(), ParseAbort> {
        let question = r.first()?;
        let ty = cx
            .arena
            .alloc_type(TypeRefKind::Wildcard { bound: None }, question.span);
        self.stacks.types.push(ty);
        Ok(())
    }

    /// `extends T` or `super T` after a `?` that is still on the token stack.
    pub(super) fn wildcard_bound(
        &mut self,
        r: &Reduction<'_>,
        cx: &mut Cx<'_>,
    ) -> Result<(), ParseAbort> {
        let bound_ty = self.pop_type()?;
        let bound = match r.first()?.kind {
            TokenKind::Extends => WildcardBound::Extends(bound_ty),
            TokenKind::Super => WildcardBound::Super(bound_ty),
            _ => return Err(ParseAbort::BadToken { rule: r.rule }),
        };
        let start = match self.stacks.tokens.last() {
            Some(question) if question.kind == TokenKind::Question => question.span.start,
            _ => r.span.start,
        };
        let span = Span::new(start, cx.arena.type_ref(bound_ty).span.end);
        let ty = cx
            .arena
            .alloc_type(TypeRefKind::Wildcard { bound: Some(bound) }, span);
        self.stacks.types.push(ty);
        Ok(())
    }
}
