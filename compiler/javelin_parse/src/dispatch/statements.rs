//! Statements.

use javelin_ir::ast::{
    CatchClause, ConstructorCallKind, LocalVarDecl, Modifiers, Param, StmtId, StmtKind,
    SwitchGroup, SwitchLabel,
};
use javelin_ir::{Span, TokenKind};

use super::Reduction;
use crate::driver::Cx;
use crate::stacks::AstItem;
use crate::{ParseAbort, Parser};

impl Parser<'_> {
    fn push_stmt(&mut self, cx: &mut Cx<'_>, kind: StmtKind, span: Span) {
        let stmt = cx.arena.alloc_stmt(kind, span);
        self.stacks.ast.push(AstItem::Stmt(stmt));
    }

    fn pop_stmt(&mut self, r: &Reduction<'_>) -> Result<StmtId, ParseAbort> {
        self.pop_item(r.rule, "statement", AstItem::into_stmt)
    }

    fn pop_stmts(&mut self, r: &Reduction<'_>) -> Result<Vec<StmtId>, ParseAbort> {
        self.pop_items(r.rule, "statement", AstItem::into_stmt)
    }

    pub(super) fn block(&mut self, r: &Reduction<'_>, cx: &mut Cx<'_>) -> Result<(), ParseAbort> {
        let stmts = self.pop_stmts(r)?;
        self.push_stmt(cx, StmtKind::Block(stmts), r.span);
        Ok(())
    }

    pub(super) fn local_variable(
        &mut self,
        r: &Reduction<'_>,
        cx: &mut Cx<'_>,
        with_modifiers: bool,
    ) -> Result<(), ParseAbort> {
        let declarators = self.pop_items(r.rule, "variable declarator", AstItem::into_declarator)?;
        let ty = self.pop_type()?;
        let modifiers = if with_modifiers {
            self.pop_modifiers()?
        } else {
            Modifiers::default()
        };
        let local = LocalVarDecl {
            modifiers,
            ty,
            declarators,
        };
        self.push_stmt(cx, StmtKind::LocalVar(local), r.span);
        Ok(())
    }

    /// Widen the statement on top to cover its `;`.
    pub(super) fn statement_end(
        &mut self,
        r: &Reduction<'_>,
        cx: &mut Cx<'_>,
    ) -> Result<(), ParseAbort> {
        match self.stacks.ast.top() {
            Some(AstItem::Stmt(stmt)) => {
                cx.arena.stmt_mut(*stmt).span = r.span;
                Ok(())
            }
            _ => Err(r.unexpected("statement")),
        }
    }

    pub(super) fn empty_statement(
        &mut self,
        r: &Reduction<'_>,
        cx: &mut Cx<'_>,
    ) -> Result<(), ParseAbort> {
        self.push_stmt(cx, StmtKind::Empty, r.span);
        Ok(())
    }

    pub(super) fn expression_statement(
        &mut self,
        r: &Reduction<'_>,
        cx: &mut Cx<'_>,
    ) -> Result<(), ParseAbort> {
        let expr = self.pop_expr()?;
        self.push_stmt(cx, StmtKind::Expr(expr), r.span);
        Ok(())
    }

    pub(super) fn labeled(&mut self, r: &Reduction<'_>, cx: &mut Cx<'_>) -> Result<(), ParseAbort> {
        let label = r.ident()?.value;
        let body = self.pop_stmt(r)?;
        self.push_stmt(cx, StmtKind::Labeled { label, body }, r.span);
        Ok(())
    }

    pub(super) fn if_statement(
        &mut self,
        r: &Reduction<'_>,
        cx: &mut Cx<'_>,
        with_else: bool,
    ) -> Result<(), ParseAbort> {
        let else_stmt = if with_else { Some(self.pop_stmt(r)?) } else { None };
        let then_stmt = self.pop_stmt(r)?;
        let cond = self.pop_expr()?;
        self.push_stmt(
            cx,
            StmtKind::If {
                cond,
                then_stmt,
                else_stmt,
            },
            r.span,
        );
        Ok(())
    }

    pub(super) fn while_statement(
        &mut self,
        r: &Reduction<'_>,
        cx: &mut Cx<'_>,
    ) -> Result<(), ParseAbort> {
        let body = self.pop_stmt(r)?;
        let cond = self.pop_expr()?;
        self.push_stmt(cx, StmtKind::While { cond, body }, r.span);
        Ok(())
    }

    pub(super) fn do_while(
        &mut self,
        r: &Reduction<'_>,
        cx: &mut Cx<'_>,
    ) -> Result<(), ParseAbort> {
        let cond = self.pop_expr()?;
        let body = self.pop_stmt(r)?;
        self.push_stmt(cx, StmtKind::DoWhile { body, cond }, r.span);
        Ok(())
    }

    pub(super) fn for_statement(
        &mut self,
        r: &Reduction<'_>,
        cx: &mut Cx<'_>,
    ) -> Result<(), ParseAbort> {
        let body = self.pop_stmt(r)?;
        let update = self.pop_exprs()?;
        let cond = self.pop_opt_expr()?;
        let init = self.pop_stmts(r)?;
        self.push_stmt(
            cx,
            StmtKind::For {
                init,
                cond,
                update,
                body,
            },
            r.span,
        );
        Ok(())
    }

    /// `for (i = 0, j = 1; ...)`: each initializer expression becomes an
    /// expression statement so both init forms share one list.
    pub(super) fn for_init_expressions(&mut self, cx: &mut Cx<'_>) -> Result<(), ParseAbort> {
        let exprs = self.pop_exprs()?;
        let stmts: Vec<AstItem> = exprs
            .into_iter()
            .map(|expr| {
                let span = cx.arena.expr(expr).span;
                AstItem::Stmt(cx.arena.alloc_stmt(StmtKind::Expr(expr), span))
            })
            .collect();
        self.stacks.ast.push_group(stmts);
        Ok(())
    }

    pub(super) fn for_each(
        &mut self,
        r: &Reduction<'_>,
        cx: &mut Cx<'_>,
        with_modifiers: bool,
    ) -> Result<(), ParseAbort> {
        let ident = r.ident()?;
        let body = self.pop_stmt(r)?;
        let iterable = self.pop_expr()?;
        let ty = self.pop_type()?;
        let modifiers = if with_modifiers {
            self.pop_modifiers()?
        } else {
            Modifiers::default()
        };
        let start = modifiers
            .start
            .unwrap_or_else(|| cx.arena.type_ref(ty).span.start);
        let var = Param {
            modifiers,
            ty,
            name: ident.value,
            name_span: ident.span,
            dims: 0,
            varargs: false,
            span: Span::new(start, ident.span.end),
        };
        self.push_stmt(cx, StmtKind::ForEach { var, iterable, body }, r.span);
        Ok(())
    }

    pub(super) fn jump(
        &mut self,
        r: &Reduction<'_>,
        cx: &mut Cx<'_>,
        is_break: bool,
    ) -> Result<(), ParseAbort> {
        let label = r.find(TokenKind::Identifier).map(|token| token.value);
        let kind = if is_break {
            StmtKind::Break(label)
        } else {
            StmtKind::Continue(label)
        };
        self.push_stmt(cx, kind, r.span);
        Ok(())
    }

    pub(super) fn return_statement(
        &mut self,
        r: &Reduction<'_>,
        cx: &mut Cx<'_>,
    ) -> Result<(), ParseAbort> {
        let value = self.pop_opt_expr()?;
        self.push_stmt(cx, StmtKind::Return(value), r.span);
        Ok(())
    }

    pub(super) fn throw(&mut self, r: &Reduction<'_>, cx: &mut Cx<'_>) -> Result<(), ParseAbort> {
        let expr = self.pop_expr()?;
        self.push_stmt(cx, StmtKind::Throw(expr), r.span);
        Ok(())
    }

    pub(super) fn synchronized(
        &mut self,
        r: &Reduction<'_>,
        cx: &mut Cx<'_>,
    ) -> Result<(), ParseAbort> {
        let body = self.pop_stmt(r)?;
        let lock = self.pop_expr()?;
        self.push_stmt(cx, StmtKind::Synchronized { lock, body }, r.span);
        Ok(())
    }

    pub(super) fn try_statement(
        &mut self,
        r: &Reduction<'_>,
        cx: &mut Cx<'_>,
        with_finally: bool,
    ) -> Result<(), ParseAbort> {
        let finally = if with_finally { Some(self.pop_stmt(r)?) } else { None };
        let catches = self.pop_items(r.rule, "catch clause", AstItem::into_catch)?;
        let body = self.pop_stmt(r)?;
        self.push_stmt(
            cx,
            StmtKind::Try {
                body,
                catches,
                finally,
            },
            r.span,
        );
        Ok(())
    }

    pub(super) fn catch_clause(&mut self, r: &Reduction<'_>) -> Result<(), ParseAbort> {
        let body = self.pop_stmt(r)?;
        let param = self.pop_item(r.rule, "formal parameter", AstItem::into_param)?;
        self.stacks.ast.push(AstItem::Catch(CatchClause {
            param,
            body,
            span: r.span,
        }));
        Ok(())
    }

    pub(super) fn switch(&mut self, r: &Reduction<'_>, cx: &mut Cx<'_>) -> Result<(), ParseAbort> {
        let groups = self.pop_items(r.rule, "switch group", AstItem::into_switch_group)?;
        let selector = self.pop_expr()?;
        self.push_stmt(cx, StmtKind::Switch { selector, groups }, r.span);
        Ok(())
    }

    pub(super) fn switch_group(
        &mut self,
        r: &Reduction<'_>,
        cx: &mut Cx<'_>,
    ) -> Result<(), ParseAbort> {
        let stmts = self.pop_stmts(r)?;
        let labels = self.pop_items(r.rule, "switch label", AstItem::into_label)?;
        let end = stmts
            .last()
            .map_or(r.span.end, |last| cx.arena.stmt(*last).span.end);
        self.stacks.ast.push(AstItem::SwitchGroup(SwitchGroup {
            labels,
            stmts,
            span: Span::new(r.span.start, end),
        }));
        Ok(())
    }

    pub(super) fn case_label(&mut self) -> Result<(), ParseAbort> {
        let value = self.pop_expr()?;
        self.stacks.ast.push(AstItem::Label(SwitchLabel::Case(value)));
        Ok(())
    }

    /// `switch (x) { case 1: }`: trailing labels form a group of their own.
    fn trailing_labels(&mut self, r: &Reduction<'_>) -> Result<SwitchGroup, ParseAbort> {
        let labels = self.pop_items(r.rule, "switch label", AstItem::into_label)?;
        let end = r
            .find(TokenKind::RBrace)
            .map_or(r.span.end, |brace| brace.span.start);
        Ok(SwitchGroup {
            labels,
            stmts: Vec::new(),
            span: Span::new(r.span.start, end),
        })
    }

    pub(super) fn switch_labels_only(&mut self, r: &Reduction<'_>) -> Result<(), ParseAbort> {
        let group = self.trailing_labels(r)?;
        self.stacks.ast.push(AstItem::SwitchGroup(group));
        Ok(())
    }

    pub(super) fn switch_groups_then_labels(
        &mut self,
        r: &Reduction<'_>,
    ) -> Result<(), ParseAbort> {
        let group = self.trailing_labels(r)?;
        Ok(self.stacks.ast.append(AstItem::SwitchGroup(group))?)
    }

    pub(super) fn assert(&mut self, r: &Reduction<'_>, cx: &mut Cx<'_>) -> Result<(), ParseAbort> {
        let message = if r.has(TokenKind::Colon) {
            Some(self.pop_expr()?)
        } else {
            None
        };
        let cond = self.pop_expr()?;
        self.push_stmt(cx, StmtKind::Assert { cond, message }, r.span);
        Ok(())
    }

    pub(super) fn constructor_call(
        &mut self,
        r: &Reduction<'_>,
        cx: &mut Cx<'_>,
    ) -> Result<(), ParseAbort> {
        let kind = match r.first()?.kind {
            TokenKind::This => ConstructorCallKind::This,
            TokenKind::Super => ConstructorCallKind::Super,
            _ => return Err(ParseAbort::BadToken { rule: r.rule }),
        };
        let args = self.pop_exprs()?;
        self.push_stmt(cx, StmtKind::ConstructorCall { kind, args }, r.span);
        Ok(())
    }

    pub(super) fn local_class(
        &mut self,
        r: &Reduction<'_>,
        cx: &mut Cx<'_>,
    ) -> Result<(), ParseAbort> {
        let decl = self.pop_item(r.rule, "type declaration", AstItem::into_decl)?;
        let span = cx.arena.decl(decl).span;
        self.push_stmt(cx, StmtKind::LocalClass(decl), span);
        Ok(())
    }
}
