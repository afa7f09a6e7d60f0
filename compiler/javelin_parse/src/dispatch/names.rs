//! Names and literals.

use javelin_ir::ast::{ExprKind, Literal, LiteralKind};
use javelin_ir::TokenKind;

use super::Reduction;
use crate::driver::Cx;
use crate::{ParseAbort, Parser};

impl Parser<'_> {
    pub(super) fn name_first(&mut self, r: &Reduction<'_>) -> Result<(), ParseAbort> {
        let ident = r.ident()?;
        self.stacks.names.push((ident.value, ident.span));
        Ok(())
    }

    pub(super) fn name_append(&mut self, r: &Reduction<'_>) -> Result<(), ParseAbort> {
        let ident = r.ident()?;
        Ok(self.stacks.names.append((ident.value, ident.span))?)
    }

    pub(super) fn literal(&mut self, r: &Reduction<'_>, cx: &mut Cx<'_>) -> Result<(), ParseAbort> {
        let token = r.first()?;
        let kind = match token.kind {
            TokenKind::IntegerLiteral => LiteralKind::Integer,
            TokenKind::LongLiteral => LiteralKind::Long,
            TokenKind::FloatLiteral => LiteralKind::Float,
            TokenKind::DoubleLiteral => LiteralKind::Double,
            TokenKind::CharLiteral => LiteralKind::Char,
            TokenKind::StringLiteral => LiteralKind::String,
            TokenKind::True => LiteralKind::True,
            TokenKind::False => LiteralKind::False,
            TokenKind::Null => LiteralKind::Null,
            _ => return Err(ParseAbort::BadToken { rule: r.rule }),
        };
        let literal = Literal {
            kind,
            value: token.value,
        };
        let expr = cx.arena.alloc_expr(ExprKind::Literal(literal), r.span);
        self.stacks.exprs.push(expr);
        Ok(())
    }
}
