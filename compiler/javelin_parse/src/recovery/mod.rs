//! Syntax error recovery.
//!
//! The first unresolvable error of a parse switches the session into
//! recovery. Whatever the stacks hold is folded into a [`RecoveryTree`]
//! and the automaton restarts at the recovery checkpoint on one of two
//! private goals: one that reads declaration headers and one that reads
//! statements. Each construct those goals reduce is reattached to the
//! tree, and braces move the current element in and out of bodies. When
//! the input runs out the tree is folded back into the AST.
//!
//! Every restart either starts past the checkpoint of the one before or
//! runs a different goal, and the checkpoint never moves back, so
//! recovery ends after a bounded number of restarts.

mod fold;
mod tree;

use javelin_diagnostic::{ErrorCode, Problem};
use javelin_grammar::{Action, Entry, RecoveryTemplate};
use javelin_ir::ast::{AstArena, Body, DeclKind, InitializerDecl, Modifiers, PackageDecl};
use javelin_ir::{Span, TokenKind};
use tracing::{debug, trace, warn};

use self::fold::Folder;
use self::tree::{NodeId, NodeKind, RecoveryTree};
use crate::dispatch::Reduction;
use crate::driver::{Cx, Lookahead, Parsed};
use crate::stacks::AstItem;
use crate::{GoalKind, ParseAbort, Parser, TokenSource};

/// How the driver continues after a syntax error.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub(crate) enum Verdict {
    /// One spurious token was dropped; retry the lookahead.
    Resume,
    /// Start over on the entry at the given offset.
    Restart(Entry, u32),
    Halt,
}

/// A stack item recovery knows where to put.
enum Recovered {
    Package(PackageDecl),
    /// `open` marks a header whose body is still being read.
    Node { kind: NodeKind, span: Span, open: bool },
}

impl Recovered {
    fn classify(item: AstItem, arena: &AstArena) -> Option<Recovered> {
        let open = matches!(item, AstItem::Header(_));
        let (kind, span) = match item {
            AstItem::Decl(decl) | AstItem::Header(decl) => {
                let target = arena.decl(decl);
                let kind = match target.kind {
                    DeclKind::Type(_) => NodeKind::Type(Some(decl)),
                    DeclKind::Field(_) => NodeKind::Field(decl),
                    DeclKind::Method(_) => NodeKind::Method(decl),
                    DeclKind::Initializer(_) => NodeKind::Initializer(decl),
                };
                (kind, target.span)
            }
            AstItem::Stmt(stmt) => (NodeKind::Statement(stmt), arena.stmt(stmt).span),
            AstItem::Import(import) => {
                let span = import.span;
                (NodeKind::Import(import), span)
            }
            AstItem::Package(package) => return Some(Recovered::Package(package)),
            _ => return None,
        };
        Some(Recovered::Node { kind, span, open })
    }

    fn start(&self) -> u32 {
        match self {
            Recovered::Package(package) => package.span.start,
            Recovered::Node { span, .. } => span.start,
        }
    }
}

#[derive(Clone, Debug, Default)]
pub(crate) struct Recovery {
    tree: Option<RecoveryTree>,
    current: NodeId,
    /// Source offset up to which input is accounted for.
    pub checkpoint: u32,
    /// The next structural error gets reported.
    pub report_armed: bool,
    pub restarts: u32,
    pub restart_requested: bool,
    pub skip_requested: bool,
    last_restart: Option<(u32, Entry)>,
    restart_points: Vec<u32>,
}

impl Recovery {
    pub fn reset(&mut self, origin: u32) {
        self.tree = None;
        self.current = NodeId::ROOT;
        self.checkpoint = origin;
        self.report_armed = true;
        self.restarts = 0;
        self.restart_requested = false;
        self.skip_requested = false;
        self.last_restart = None;
        self.restart_points.clear();
    }

    pub fn is_active(&self) -> bool {
        self.tree.is_some()
    }

    fn advance(&mut self, to: u32) {
        if to > self.checkpoint {
            trace!(from = self.checkpoint, to, "checkpoint");
            self.checkpoint = to;
        }
    }

    fn at_root(&self) -> bool {
        self.current == NodeId::ROOT
    }

    /// The current element is an open body that holds statements.
    fn wants_statements(&self) -> bool {
        self.tree.as_ref().is_some_and(|tree| {
            let node = tree.node(self.current);
            node.kind.has_statements() && node.balance > 0
        })
    }

    fn entry(&self) -> Entry {
        if self.wants_statements() {
            Entry::RecoveryStatements
        } else {
            Entry::RecoveryHeaders
        }
    }

    fn place(&mut self, recovered: Recovered) {
        match recovered {
            Recovered::Package(package) => self.set_package(package),
            Recovered::Node { kind, span, open } => self.attach(kind, span, open),
        }
    }

    /// Put a node under the innermost element that can hold it, closing
    /// the elements that cannot on the way out.
    fn attach(&mut self, kind: NodeKind, span: Span, open: bool) {
        let Some(tree) = self.tree.as_mut() else {
            return;
        };
        let mut at = self.current;
        while !tree.node(at).kind.holds(&kind) {
            match tree.node(at).parent {
                Some(parent) => at = parent,
                // A stray member after the last type goes back into it.
                None => match tree.last_open_type(at) {
                    Some(ty) if kind.is_member() => at = ty,
                    _ => {
                        trace!(?kind, "dropped");
                        self.current = at;
                        self.advance(span.end);
                        return;
                    }
                },
            }
        }
        let id = tree.add(at, kind, span, open);
        self.current = if open { id } else { at };
        self.advance(span.end);
    }

    fn set_package(&mut self, package: PackageDecl) {
        let end = package.span.end;
        if let Some(tree) = self.tree.as_mut() {
            if let NodeKind::Unit { package: slot } = &mut tree.node_mut(NodeId::ROOT).kind {
                *slot = Some(package);
            }
        }
        self.advance(end);
    }

    fn open_brace(&mut self, brace: Span, arena: &mut AstArena) {
        self.advance(brace.end);
        let Some(tree) = self.tree.as_mut() else {
            return;
        };
        let current = self.current;
        let node = tree.node(current);
        let reopens = node.balance == 0
            && matches!(
                node.kind,
                NodeKind::Type(_) | NodeKind::Method(_) | NodeKind::Initializer(_)
            );
        let in_type = matches!(node.kind, NodeKind::Type(_));
        let in_body = node.kind.has_statements();
        let opened = if reopens {
            current
        } else if in_type {
            // A bare `{` in a class body starts an instance initializer.
            let initializer = InitializerDecl {
                is_static: false,
                body: Body::Absent,
            };
            let decl = arena.alloc_decl(
                DeclKind::Initializer(initializer),
                Modifiers::default(),
                brace,
            );
            tree.add(current, NodeKind::Initializer(decl), brace, true)
        } else if in_body {
            tree.add(current, NodeKind::Block, brace, true)
        } else {
            return;
        };
        let node = tree.node_mut(opened);
        node.balance += 1;
        if node.brace.is_none() {
            node.brace = Some(brace);
        }
        tree.extend(opened, brace.end);
        self.current = opened;
    }

    /// Returns the element the brace closed, if any.
    fn close_brace(&mut self, brace: Span) -> Option<NodeId> {
        self.advance(brace.end);
        let tree = self.tree.as_mut()?;
        let mut at = self.current;
        // A header whose body never opened does not own the brace.
        while tree.node(at).balance == 0 {
            at = tree.node(at).parent?;
        }
        let parent = tree.node(at).parent?;
        tree.extend(at, brace.end);
        let node = tree.node_mut(at);
        node.balance -= 1;
        if node.balance == 0 {
            self.current = parent;
            Some(at)
        } else {
            self.current = at;
            None
        }
    }

    /// Record the body of a closed method or initializer as skipped.
    fn mark_skipped(&self, id: NodeId, close: Span, arena: &mut AstArena) {
        let Some(node) = self.tree.as_ref().map(|tree| tree.node(id)) else {
            return;
        };
        let (NodeKind::Method(decl) | NodeKind::Initializer(decl), Some(brace)) =
            (&node.kind, node.brace)
        else {
            return;
        };
        if let Some(body) = arena.decl_mut(*decl).body_mut() {
            *body = Body::Skipped {
                range: Span::new(brace.end, close.start),
            };
        }
    }
}

impl Parser<'_> {
    /// Offsets the last run restarted at while recovering, in order.
    pub fn restart_points(&self) -> &[u32] {
        &self.recovery.restart_points
    }

    pub(crate) fn on_error(
        &mut self,
        la: Lookahead,
        source: &mut dyn TokenSource,
        cx: &mut Cx<'_>,
    ) -> Result<Verdict, ParseAbort> {
        self.has_errors = true;
        if self.try_resume(la, cx) {
            return Ok(Verdict::Resume);
        }
        self.report_syntax_error(la, cx);
        if !self.goal.recovers() {
            debug!(goal = ?self.goal, at = la.token.span.start, "goal does not recover");
            return Ok(Verdict::Halt);
        }
        if !self.recovery.is_active() {
            self.build_initial_recovery_state(cx);
        }
        self.skip_open_bodies(source, cx);

        let entry = self.recovery_entry();
        let Some(at) = self.restart_point(entry, source) else {
            warn!(checkpoint = self.recovery.checkpoint, "recovery ran out of input");
            return Ok(Verdict::Halt);
        };
        Ok(self.restart_verdict(entry, at, cx))
    }

    /// Drop the token just shifted when the state beneath it can take the
    /// lookahead instead. Never while recovering, and once per token.
    fn try_resume(&mut self, la: Lookahead, cx: &mut Cx<'_>) -> bool {
        if self.recovery.is_active()
            || matches!(la.token.kind, TokenKind::Eof | TokenKind::Error)
            || self.resumed_at == Some(la.token.span.start)
        {
            return false;
        }
        let depth = self.stacks.states.len();
        if depth < 3 || !self.stacks.states[depth - 1].terminal {
            return false;
        }
        let below = self.stacks.states[depth - 2].state;
        if matches!(self.tables.action(below, la.terminal), Action::Error) {
            return false;
        }
        let Some(discarded) = self.stacks.tokens.pop() else {
            return false;
        };
        self.stacks.states.pop();
        self.resumed_at = Some(la.token.span.start);
        debug!(token = %discarded.kind, at = discarded.span.start, "resume");
        cx.reporter
            .report(Problem::error(ErrorCode::TOKEN_DISCARDED, discarded.span));
        true
    }

    fn report_syntax_error(&mut self, la: Lookahead, cx: &mut Cx<'_>) {
        if !self.recovery.report_armed {
            return;
        }
        self.recovery.report_armed = false;
        let code = match la.token.kind {
            TokenKind::Eof => ErrorCode::UNEXPECTED_EOF,
            // The lexer's problem already covers it.
            TokenKind::Error => return,
            _ => ErrorCode::SYNTAX_ERROR,
        };
        cx.reporter.report(Problem::error(code, la.token.span));
    }

    /// Seed the recovery tree from the stacks: declarations, headers,
    /// statements and unmatched `{` tokens, in source order.
    fn build_initial_recovery_state(&mut self, cx: &mut Cx<'_>) {
        let (root, balance) = match self.goal {
            GoalKind::CompilationUnit => (NodeKind::Unit { package: None }, 0),
            GoalKind::ClassBodyDeclarations => (NodeKind::Type(None), 1),
            _ => (NodeKind::Block, 1),
        };
        self.recovery.tree = Some(RecoveryTree::new(root, Span::point(self.origin), balance));
        self.recovery.current = NodeId::ROOT;

        let mut placed: Vec<(u32, Option<Recovered>)> = self
            .stacks
            .ast
            .items()
            .iter()
            .filter_map(|item| Recovered::classify(item.clone(), cx.arena))
            .map(|recovered| (recovered.start(), Some(recovered)))
            .collect();
        let braces = self.stacks.tokens.iter().filter(|token| token.kind == TokenKind::LBrace);
        placed.extend(braces.map(|token| (token.span.start, None)));
        placed.sort_by_key(|(start, _)| *start);

        for (start, recovered) in placed {
            match recovered {
                Some(recovered) => self.recovery.place(recovered),
                None => self
                    .recovery
                    .open_brace(Span::new(start, start + 1), cx.arena),
            }
        }
        debug!(
            checkpoint = self.recovery.checkpoint,
            current = ?self.recovery.current,
            "recovery state built"
        );
    }

    fn skips_bodies(&self) -> bool {
        !self.config.statement_recovery || self.diet_active
    }

    pub(crate) fn recovery_entry(&self) -> Entry {
        self.recovery.entry()
    }

    /// After an element was reattached: ask for a body skip or for a
    /// restart on the other recovery goal when the current element needs
    /// it.
    pub(crate) fn sync_recovery_goal(&mut self) {
        if !self.recovery.is_active() {
            return;
        }
        if self.recovery.wants_statements() && self.skips_bodies() && !self.recovery.at_root() {
            self.recovery.skip_requested = true;
        } else if self.recovery_entry() != self.entry {
            trace!(from = ?self.entry, to = ?self.recovery_entry(), "recovery goal changes");
            self.recovery.restart_requested = true;
        }
    }

    /// Jump over the rest of every open body below the current element,
    /// leaving the current element at the enclosing type.
    pub(crate) fn skip_open_bodies(&mut self, source: &mut dyn TokenSource, cx: &mut Cx<'_>) {
        self.recovery.skip_requested = false;
        if !self.skips_bodies() || !self.recovery.wants_statements() || self.recovery.at_root() {
            return;
        }
        source.reset_to(self.recovery.checkpoint, self.limit);
        let mut nested = 0u32;
        while self.recovery.wants_statements() && !self.recovery.at_root() {
            let token = source.next_token();
            match token.kind {
                TokenKind::LBrace => nested += 1,
                TokenKind::RBrace if nested > 0 => nested -= 1,
                TokenKind::RBrace => {
                    if let Some(closed) = self.recovery.close_brace(token.span) {
                        self.recovery.mark_skipped(closed, token.span, cx.arena);
                    }
                }
                TokenKind::Eof => {
                    self.recovery.advance(token.span.start);
                    return;
                }
                _ => {}
            }
        }
        debug!(checkpoint = self.recovery.checkpoint, "skipped open bodies");
    }

    /// Where the next restart begins: the checkpoint itself, unless the
    /// last restart already began there on the same goal.
    fn restart_point(&mut self, entry: Entry, source: &mut dyn TokenSource) -> Option<u32> {
        let at = self.recovery.checkpoint;
        if self.recovery.last_restart == Some((at, entry)) {
            return self.move_checkpoint(entry, source);
        }
        source.reset_to(at, self.limit);
        (source.next_token().kind != TokenKind::Eof).then_some(at)
    }

    /// Advance the checkpoint past at least one token, then on to the
    /// next token that can begin an item of `entry`. `None` at the end of
    /// input.
    fn move_checkpoint(&mut self, entry: Entry, source: &mut dyn TokenSource) -> Option<u32> {
        let origin = self.recovery.checkpoint;
        source.reset_to(origin, self.limit);
        if source.next_token().kind == TokenKind::Eof {
            return None;
        }
        let wanted = if entry == Entry::RecoveryStatements {
            RecoveryTemplate::STATEMENT
        } else {
            RecoveryTemplate::HEADER
        };
        loop {
            let token = source.next_token();
            if token.kind == TokenKind::Eof {
                self.recovery.advance(token.span.start);
                return None;
            }
            let template = self.tables.template(token.kind.index());
            if token.span.start > origin && template.contains(wanted) {
                self.recovery.advance(token.span.start);
                debug!(from = origin, to = token.span.start, "checkpoint moved");
                return Some(token.span.start);
            }
        }
    }

    pub(crate) fn restart_verdict(&mut self, entry: Entry, at: u32, cx: &mut Cx<'_>) -> Verdict {
        if let Some(max) = self.config.max_recovery_restarts {
            if self.recovery.restarts >= max {
                warn!(max, "recovery restart limit reached");
                cx.reporter
                    .report(Problem::error(ErrorCode::RECOVERY_HALTED, Span::point(at)));
                return Verdict::Halt;
            }
        }
        if self.recovery.last_restart == Some((at, entry)) {
            warn!(at, ?entry, "recovery made no progress");
            return Verdict::Halt;
        }
        self.recovery.restarts += 1;
        self.recovery.last_restart = Some((at, entry));
        self.recovery.restart_points.push(at);
        debug!(?entry, at, restarts = self.recovery.restarts, "restart");
        Verdict::Restart(entry, at)
    }

    /// Fold the recovered tree into the goal's result.
    pub(crate) fn update_parse_tree(&mut self, cx: &mut Cx<'_>) -> Parsed {
        let Some(mut tree) = self.recovery.tree.take() else {
            return self.empty_result();
        };
        tree.settle();
        debug!(nodes = tree.len(), "fold recovered tree");
        let mut folder = Folder::new(&tree, cx.arena);
        match tree.node(NodeId::ROOT).kind {
            NodeKind::Unit { .. } => Parsed::Unit(folder.unit(Span::new(self.origin, self.limit))),
            NodeKind::Type(_) => Parsed::Members(folder.members(NodeId::ROOT)),
            _ => Parsed::Statements(folder.statements(NodeId::ROOT)),
        }
    }

    pub(crate) fn recover_item(
        &mut self,
        r: &Reduction<'_>,
        cx: &mut Cx<'_>,
    ) -> Result<(), ParseAbort> {
        let item = self.stacks.ast.pop()?;
        let Some(mut recovered) = Recovered::classify(item, cx.arena) else {
            return Err(ParseAbort::UnexpectedItem {
                rule: r.rule,
                expected: "recoverable item",
            });
        };
        if let Recovered::Node { span, .. } = &mut recovered {
            *span = span.merge(r.span);
        }
        self.recovery.place(recovered);
        self.recovery.report_armed = true;
        self.sync_recovery_goal();
        Ok(())
    }

    pub(crate) fn recover_header(
        &mut self,
        r: &Reduction<'_>,
        cx: &mut Cx<'_>,
    ) -> Result<(), ParseAbort> {
        let decl = self.pop_item(r.rule, "declaration header", AstItem::into_header)?;
        let target = cx.arena.decl_mut(decl);
        target.span = target.span.merge(r.span);
        if let Some(recovered) = Recovered::classify(AstItem::Header(decl), cx.arena) {
            self.recovery.place(recovered);
        }
        self.recovery.report_armed = true;
        self.sync_recovery_goal();
        Ok(())
    }

    pub(crate) fn recover_brace(
        &mut self,
        r: &Reduction<'_>,
        cx: &mut Cx<'_>,
        open: bool,
    ) -> Result<(), ParseAbort> {
        let brace = r.first()?.span;
        if open {
            self.recovery.open_brace(brace, cx.arena);
        } else {
            self.recovery.close_brace(brace);
        }
        self.sync_recovery_goal();
        Ok(())
    }
}

#[cfg(test)]
mod tests;
