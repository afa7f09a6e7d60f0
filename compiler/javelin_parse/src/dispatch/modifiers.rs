//! Modifiers and annotations.
//!
//! A `Modifiers` nonterminal leaves `[flags, start]` on the integer stack
//! and one group on the annotation stack. Annotations themselves are
//! expressions so they can also appear as member values.

use javelin_ir::ast::{Annotation, AnnotationArgs, ExprKind, MemberValuePair, ModifierFlags};
use javelin_ir::TokenKind;

use super::Reduction;
use crate::driver::Cx;
use crate::stacks::AstItem;
use crate::{ParseAbort, Parser};

fn modifier_flag(kind: TokenKind) -> Option<ModifierFlags> {
    Some(match kind {
        TokenKind::Public => ModifierFlags::PUBLIC,
        TokenKind::Protected => ModifierFlags::PROTECTED,
        TokenKind::Private => ModifierFlags::PRIVATE,
        TokenKind::Static => ModifierFlags::STATIC,
        TokenKind::Abstract => ModifierFlags::ABSTRACT,
        TokenKind::Final => ModifierFlags::FINAL,
        TokenKind::Native => ModifierFlags::NATIVE,
        TokenKind::Synchronized => ModifierFlags::SYNCHRONIZED,
        TokenKind::Transient => ModifierFlags::TRANSIENT,
        TokenKind::Volatile => ModifierFlags::VOLATILE,
        TokenKind::Strictfp => ModifierFlags::STRICTFP,
        _ => return None,
    })
}

impl Parser<'_> {
    pub(super) fn modifier_keyword(&mut self, r: &Reduction<'_>) -> Result<(), ParseAbort> {
        let token = r.first()?;
        let flag = modifier_flag(token.kind).ok_or(ParseAbort::BadToken { rule: r.rule })?;
        self.stacks
            .ints
            .extend([u32::from(flag.bits()), token.span.start]);
        self.stacks.annotations.push_empty();
        Ok(())
    }

    pub(super) fn modifier_annotation(&mut self, r: &Reduction<'_>) -> Result<(), ParseAbort> {
        let annotation = self.pop_expr()?;
        self.stacks.ints.extend([0, r.span.start]);
        self.stacks.annotations.push(annotation);
        Ok(())
    }

    /// Fold the newest modifier into the run beneath it. The run keeps its
    /// own start.
    pub(super) fn modifiers_concat(&mut self) -> Result<(), ParseAbort> {
        self.stacks.pop_int()?;
        let flags = self.stacks.pop_int()?;
        let start = self.stacks.pop_int()?;
        let below = self.stacks.pop_int()?;
        self.stacks.ints.extend([below | flags, start]);
        Ok(self.stacks.annotations.concat()?)
    }

    fn push_annotation(
        &mut self,
        r: &Reduction<'_>,
        cx: &mut Cx<'_>,
        args: AnnotationArgs,
    ) -> Result<(), ParseAbort> {
        let name = self.pop_name()?;
        let annotation = Annotation { name, args };
        let expr = cx.arena.alloc_expr(ExprKind::Annotation(annotation), r.span);
        self.stacks.exprs.push(expr);
        Ok(())
    }

    pub(super) fn marker_annotation(
        &mut self,
        r: &Reduction<'_>,
        cx: &mut Cx<'_>,
    ) -> Result<(), ParseAbort> {
        self.push_annotation(r, cx, AnnotationArgs::Marker)
    }

    pub(super) fn single_member_annotation(
        &mut self,
        r: &Reduction<'_>,
        cx: &mut Cx<'_>,
    ) -> Result<(), ParseAbort> {
        let value = self.pop_expr()?;
        self.push_annotation(r, cx, AnnotationArgs::Single(value))
    }

    pub(super) fn normal_annotation(
        &mut self,
        r: &Reduction<'_>,
        cx: &mut Cx<'_>,
    ) -> Result<(), ParseAbort> {
        let pairs = self.pop_items(r.rule, "member-value pair", AstItem::into_pair)?;
        self.push_annotation(r, cx, AnnotationArgs::Pairs(pairs))
    }

    pub(super) fn member_value_pair(&mut self, r: &Reduction<'_>) -> Result<(), ParseAbort> {
        let name = r.ident()?.value;
        let value = self.pop_expr()?;
        self.stacks.ast.push(AstItem::Pair(MemberValuePair {
            name,
            value,
            span: r.span,
        }));
        Ok(())
    }
}
