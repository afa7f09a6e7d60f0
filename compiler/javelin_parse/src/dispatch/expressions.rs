//! Expressions, from primaries up through assignment.

use javelin_diagnostic::{ErrorCode, Problem};
use javelin_ir::ast::{AssignOp, BinaryOp, ExprKind, Receiver, TypeRefKind, UnaryOp};
use javelin_ir::{Span, TokenKind};

use super::types::{array_of, named_type};
use super::Reduction;
use crate::driver::Cx;
use crate::stacks::AstItem;
use crate::{ParseAbort, Parser};

/// Assignment operators by the index `AssignOperator` leaves on the
/// integer stack.
const ASSIGN_OPS: [(TokenKind, AssignOp); 12] = [
    (TokenKind::Assign, AssignOp::Assign),
    (TokenKind::PlusEqual, AssignOp::Add),
    (TokenKind::MinusEqual, AssignOp::Sub),
    (TokenKind::MultiplyEqual, AssignOp::Mul),
    (TokenKind::DivideEqual, AssignOp::Div),
    (TokenKind::RemainderEqual, AssignOp::Rem),
    (TokenKind::AndEqual, AssignOp::BitAnd),
    (TokenKind::OrEqual, AssignOp::BitOr),
    (TokenKind::XorEqual, AssignOp::BitXor),
    (TokenKind::LeftShiftEqual, AssignOp::Shl),
    (TokenKind::RightShiftEqual, AssignOp::Shr),
    (TokenKind::UnsignedRightShiftEqual, AssignOp::UShr),
];

fn binary_op(kind: TokenKind) -> Option<BinaryOp> {
    Some(match kind {
        TokenKind::Multiply => BinaryOp::Mul,
        TokenKind::Divide => BinaryOp::Div,
        TokenKind::Remainder => BinaryOp::Rem,
        TokenKind::Plus => BinaryOp::Add,
        TokenKind::Minus => BinaryOp::Sub,
        TokenKind::LeftShift => BinaryOp::Shl,
        TokenKind::RightShift => BinaryOp::Shr,
        TokenKind::UnsignedRightShift => BinaryOp::UShr,
        TokenKind::Less => BinaryOp::Lt,
        TokenKind::Greater => BinaryOp::Gt,
        TokenKind::LessEqual => BinaryOp::Le,
        TokenKind::GreaterEqual => BinaryOp::Ge,
        TokenKind::EqualEqual => BinaryOp::Eq,
        TokenKind::NotEqual => BinaryOp::Ne,
        TokenKind::And => BinaryOp::BitAnd,
        TokenKind::Xor => BinaryOp::BitXor,
        TokenKind::Or => BinaryOp::BitOr,
        TokenKind::AndAnd => BinaryOp::And,
        TokenKind::OrOr => BinaryOp::Or,
        _ => return None,
    })
}

fn prefix_op(kind: TokenKind) -> Option<UnaryOp> {
    Some(match kind {
        TokenKind::Plus => UnaryOp::Plus,
        TokenKind::Minus => UnaryOp::Minus,
        TokenKind::PlusPlus => UnaryOp::PreInc,
        TokenKind::MinusMinus => UnaryOp::PreDec,
        TokenKind::Twiddle => UnaryOp::BitNot,
        TokenKind::Not => UnaryOp::Not,
        _ => return None,
    })
}

impl Parser<'_> {
    fn push_expr(&mut self, cx: &mut Cx<'_>, kind: ExprKind, span: Span) {
        let expr = cx.arena.alloc_expr(kind, span);
        self.stacks.exprs.push(expr);
    }

    pub(super) fn name_to_expr(&mut self, cx: &mut Cx<'_>) -> Result<(), ParseAbort> {
        let name = self.pop_name()?;
        let span = name.span;
        self.push_expr(cx, ExprKind::Name(name), span);
        Ok(())
    }

    pub(super) fn this(&mut self, r: &Reduction<'_>, cx: &mut Cx<'_>) -> Result<(), ParseAbort> {
        self.push_expr(cx, ExprKind::This, r.span);
        Ok(())
    }

    pub(super) fn paren(&mut self, r: &Reduction<'_>, cx: &mut Cx<'_>) -> Result<(), ParseAbort> {
        let inner = self.pop_expr()?;
        self.push_expr(cx, ExprKind::Paren(inner), r.span);
        Ok(())
    }

    pub(super) fn field_access(
        &mut self,
        r: &Reduction<'_>,
        cx: &mut Cx<'_>,
    ) -> Result<(), ParseAbort> {
        let name = r.ident()?.value;
        let receiver = Receiver::Expr(self.pop_expr()?);
        self.push_expr(cx, ExprKind::FieldAccess { receiver, name }, r.span);
        Ok(())
    }

    pub(super) fn super_field_access(
        &mut self,
        r: &Reduction<'_>,
        cx: &mut Cx<'_>,
    ) -> Result<(), ParseAbort> {
        let name = r.ident()?.value;
        let receiver = Receiver::Super;
        self.push_expr(cx, ExprKind::FieldAccess { receiver, name }, r.span);
        Ok(())
    }

    /// `a.b.c(args)`: everything before the last segment is the receiver.
    pub(super) fn method_call_name(
        &mut self,
        r: &Reduction<'_>,
        cx: &mut Cx<'_>,
    ) -> Result<(), ParseAbort> {
        let args = self.pop_exprs()?;
        let path = self.pop_name()?;
        let (qualifier, name) = path.split_last();
        let receiver = match qualifier {
            Some(qualifier) => {
                let span = qualifier.span;
                Receiver::Expr(cx.arena.alloc_expr(ExprKind::Name(qualifier), span))
            }
            None => Receiver::Implicit,
        };
        self.push_expr(cx, ExprKind::MethodCall { receiver, name, args }, r.span);
        Ok(())
    }

    pub(super) fn method_call_primary(
        &mut self,
        r: &Reduction<'_>,
        cx: &mut Cx<'_>,
    ) -> Result<(), ParseAbort> {
        let name = r.ident()?.value;
        let args = self.pop_exprs()?;
        let receiver = Receiver::Expr(self.pop_expr()?);
        self.push_expr(cx, ExprKind::MethodCall { receiver, name, args }, r.span);
        Ok(())
    }

    pub(super) fn method_call_super(
        &mut self,
        r: &Reduction<'_>,
        cx: &mut Cx<'_>,
    ) -> Result<(), ParseAbort> {
        let name = r.ident()?.value;
        let args = self.pop_exprs()?;
        let receiver = Receiver::Super;
        self.push_expr(cx, ExprKind::MethodCall { receiver, name, args }, r.span);
        Ok(())
    }

    pub(super) fn array_access_name(
        &mut self,
        r: &Reduction<'_>,
        cx: &mut Cx<'_>,
    ) -> Result<(), ParseAbort> {
        let index = self.pop_expr()?;
        let name = self.pop_name()?;
        let span = name.span;
        let array = cx.arena.alloc_expr(ExprKind::Name(name), span);
        self.push_expr(cx, ExprKind::ArrayAccess { array, index }, r.span);
        Ok(())
    }

    pub(super) fn array_access(
        &mut self,
        r: &Reduction<'_>,
        cx: &mut Cx<'_>,
    ) -> Result<(), ParseAbort> {
        let index = self.pop_expr()?;
        let array = self.pop_expr()?;
        self.push_expr(cx, ExprKind::ArrayAccess { array, index }, r.span);
        Ok(())
    }

    pub(super) fn postfix(&mut self, r: &Reduction<'_>, cx: &mut Cx<'_>) -> Result<(), ParseAbort> {
        let op = match r.first()?.kind {
            TokenKind::PlusPlus => UnaryOp::PostInc,
            TokenKind::MinusMinus => UnaryOp::PostDec,
            _ => return Err(ParseAbort::BadToken { rule: r.rule }),
        };
        let operand = self.pop_expr()?;
        self.push_expr(cx, ExprKind::Unary { op, operand }, r.span);
        Ok(())
    }

    pub(super) fn prefix(&mut self, r: &Reduction<'_>, cx: &mut Cx<'_>) -> Result<(), ParseAbort> {
        let op = prefix_op(r.first()?.kind).ok_or(ParseAbort::BadToken { rule: r.rule })?;
        let operand = self.pop_expr()?;
        self.push_expr(cx, ExprKind::Unary { op, operand }, r.span);
        Ok(())
    }

    pub(super) fn binary(&mut self, r: &Reduction<'_>, cx: &mut Cx<'_>) -> Result<(), ParseAbort> {
        let op = binary_op(r.first()?.kind).ok_or(ParseAbort::BadToken { rule: r.rule })?;
        let right = self.pop_expr()?;
        let left = self.pop_expr()?;
        self.push_expr(cx, ExprKind::Binary { op, left, right }, r.span);
        Ok(())
    }

    /// `a < b` reduced before `a` became an expression.
    pub(super) fn binary_name(
        &mut self,
        r: &Reduction<'_>,
        cx: &mut Cx<'_>,
    ) -> Result<(), ParseAbort> {
        let op = binary_op(r.first()?.kind).ok_or(ParseAbort::BadToken { rule: r.rule })?;
        let right = self.pop_expr()?;
        let name = self.pop_name()?;
        let span = name.span;
        let left = cx.arena.alloc_expr(ExprKind::Name(name), span);
        self.push_expr(cx, ExprKind::Binary { op, left, right }, r.span);
        Ok(())
    }

    pub(super) fn instance_of(
        &mut self,
        r: &Reduction<'_>,
        cx: &mut Cx<'_>,
    ) -> Result<(), ParseAbort> {
        let ty = self.pop_type()?;
        let expr = self.pop_expr()?;
        self.push_expr(cx, ExprKind::InstanceOf { expr, ty }, r.span);
        Ok(())
    }

    pub(super) fn conditional(
        &mut self,
        r: &Reduction<'_>,
        cx: &mut Cx<'_>,
    ) -> Result<(), ParseAbort> {
        let else_expr = self.pop_expr()?;
        let then_expr = self.pop_expr()?;
        let cond = self.pop_expr()?;
        self.push_expr(
            cx,
            ExprKind::Conditional {
                cond,
                then_expr,
                else_expr,
            },
            r.span,
        );
        Ok(())
    }

    pub(super) fn assign_operator(&mut self, r: &Reduction<'_>) -> Result<(), ParseAbort> {
        let kind = r.first()?.kind;
        let index = ASSIGN_OPS
            .iter()
            .position(|(token, _)| *token == kind)
            .ok_or(ParseAbort::BadToken { rule: r.rule })?;
        self.stacks.ints.push(index as u32);
        Ok(())
    }

    pub(super) fn assign(&mut self, r: &Reduction<'_>, cx: &mut Cx<'_>) -> Result<(), ParseAbort> {
        let value = self.pop_expr()?;
        let index = self.pop_dims()? as usize;
        let (_, op) = ASSIGN_OPS
            .get(index)
            .copied()
            .ok_or(ParseAbort::Footprint { rule: r.rule })?;
        let target = self.pop_expr()?;
        self.push_expr(cx, ExprKind::Assign { op, target, value }, r.span);
        Ok(())
    }

    pub(super) fn cast_primitive(
        &mut self,
        r: &Reduction<'_>,
        cx: &mut Cx<'_>,
    ) -> Result<(), ParseAbort> {
        let expr = self.pop_expr()?;
        let dims = self.pop_dims()?;
        let element = self.pop_type()?;
        let span = cx.arena.type_ref(element).span;
        let ty = array_of(cx.arena, element, dims, span);
        self.push_expr(cx, ExprKind::Cast { ty, expr }, r.span);
        Ok(())
    }

    /// `( Expression ) operand` is a cast only when the parenthesized part
    /// is a plain name.
    pub(super) fn cast_name(
        &mut self,
        r: &Reduction<'_>,
        cx: &mut Cx<'_>,
    ) -> Result<(), ParseAbort> {
        let expr = self.pop_expr()?;
        let target = self.pop_expr()?;
        let target = cx.arena.expr(target).clone();
        let kind = match target.kind {
            ExprKind::Name(name) => {
                let ty = named_type(cx.arena, name);
                ExprKind::Cast { ty, expr }
            }
            _ => {
                cx.reporter
                    .report(Problem::error(ErrorCode::INVALID_CAST, target.span));
                self.has_errors = true;
                ExprKind::Error
            }
        };
        self.push_expr(cx, kind, r.span);
        Ok(())
    }

    pub(super) fn cast_name_dims(
        &mut self,
        r: &Reduction<'_>,
        cx: &mut Cx<'_>,
    ) -> Result<(), ParseAbort> {
        let expr = self.pop_expr()?;
        let dims = self.pop_dims()?;
        let name = self.pop_name()?;
        let span = name.span;
        let element = named_type(cx.arena, name);
        let ty = array_of(cx.arena, element, dims, span);
        self.push_expr(cx, ExprKind::Cast { ty, expr }, r.span);
        Ok(())
    }

    /// `( Name < args > [] ) operand`.
    pub(super) fn cast_generic(
        &mut self,
        r: &Reduction<'_>,
        cx: &mut Cx<'_>,
    ) -> Result<(), ParseAbort> {
        let expr = self.pop_expr()?;
        let dims = self.pop_dims()?;
        let args = self.pop_types()?;
        let name = self.pop_name()?;
        let span = args
            .last()
            .map_or(name.span, |&last| name.span.merge(cx.arena.type_ref(last).span));
        let element = cx.arena.alloc_type(TypeRefKind::Named { name, args }, span);
        let ty = array_of(cx.arena, element, dims, span);
        self.push_expr(cx, ExprKind::Cast { ty, expr }, r.span);
        Ok(())
    }

    pub(super) fn class_literal_name(
        &mut self,
        r: &Reduction<'_>,
        cx: &mut Cx<'_>,
        with_dims: bool,
    ) -> Result<(), ParseAbort> {
        let dims = if with_dims { self.pop_dims()? } else { 0 };
        let name = self.pop_name()?;
        let span = name.span;
        let element = named_type(cx.arena, name);
        let ty = array_of(cx.arena, element, dims, span);
        self.push_expr(cx, ExprKind::ClassLiteral(ty), r.span);
        Ok(())
    }

    pub(super) fn class_literal_type(
        &mut self,
        r: &Reduction<'_>,
        cx: &mut Cx<'_>,
        with_dims: bool,
    ) -> Result<(), ParseAbort> {
        let dims = if with_dims { self.pop_dims()? } else { 0 };
        let element = self.pop_type()?;
        let span = cx.arena.type_ref(element).span;
        let ty = array_of(cx.arena, element, dims, span);
        self.push_expr(cx, ExprKind::ClassLiteral(ty), r.span);
        Ok(())
    }

    pub(super) fn new_object(
        &mut self,
        r: &Reduction<'_>,
        cx: &mut Cx<'_>,
        anonymous: bool,
    ) -> Result<(), ParseAbort> {
        let body = if anonymous {
            self.anonymous_depth = self.anonymous_depth.saturating_sub(1);
            Some(self.pop_items(r.rule, "member declaration", AstItem::into_decl)?)
        } else {
            None
        };
        let args = self.pop_exprs()?;
        let ty = self.pop_type()?;
        self.push_expr(cx, ExprKind::New { ty, args, body }, r.span);
        Ok(())
    }

    pub(super) fn new_array_dims(
        &mut self,
        r: &Reduction<'_>,
        cx: &mut Cx<'_>,
    ) -> Result<(), ParseAbort> {
        let extra_dims = self.pop_dims()?;
        let dims = self.pop_exprs()?;
        let element = self.pop_type()?;
        self.push_expr(
            cx,
            ExprKind::NewArray {
                element,
                dims,
                extra_dims,
                init: None,
            },
            r.span,
        );
        Ok(())
    }

    pub(super) fn new_array_init(
        &mut self,
        r: &Reduction<'_>,
        cx: &mut Cx<'_>,
    ) -> Result<(), ParseAbort> {
        let init = self.pop_expr()?;
        let extra_dims = self.pop_dims()?;
        let element = self.pop_type()?;
        self.push_expr(
            cx,
            ExprKind::NewArray {
                element,
                dims: Vec::new(),
                extra_dims,
                init: Some(init),
            },
            r.span,
        );
        Ok(())
    }

    pub(super) fn array_initializer(
        &mut self,
        r: &Reduction<'_>,
        cx: &mut Cx<'_>,
    ) -> Result<(), ParseAbort> {
        let elements = self.pop_exprs()?;
        self.push_expr(cx, ExprKind::ArrayInit(elements), r.span);
        Ok(())
    }
}
