//! The shift/reduce loop.
//!
//! One `Parser` is a reusable session: it owns the stacks and recovery
//! state and borrows the shared tables. Each call to [`Parser::run`]
//! parses one goal over the range its `TokenSource` is set to.

use javelin_diagnostic::{ErrorCode, Problem, ProblemReporter};
use javelin_grammar::{Action, Entry};
use javelin_ir::ast::{
    AstArena, Body, CompilationUnit, DeclId, DeclKind, ExprId, PackageDecl, StmtId,
};
use javelin_ir::{LexErrorKind, Span, Token, TokenKind};
use smallvec::SmallVec;
use tracing::{debug, trace};

use crate::dispatch::Reduction;
use crate::recovery::{Recovery, Verdict};
use crate::stacks::{AstItem, ParserStacks, StackError, StackMark, StateEntry};
use crate::{GoalKind, GrammarTables, ParseAbort, ParserConfig, TokenSource};

/// State recorded for a terminal whose shift is fused with a reduction.
/// The entry is popped by that reduction before anyone reads it.
const FUSED: u16 = u16::MAX;

/// Mutable outputs threaded through a parse.
pub(crate) struct Cx<'a> {
    pub arena: &'a mut AstArena,
    pub reporter: &'a mut dyn ProblemReporter,
}

#[derive(Copy, Clone, Debug)]
pub(crate) struct Lookahead {
    pub terminal: usize,
    pub token: Token,
}

impl Lookahead {
    fn token(token: Token) -> Self {
        Lookahead {
            terminal: token.kind.index(),
            token,
        }
    }

    /// The pseudo-token selecting `entry`. Its token is a placeholder that
    /// the goal rule pops without inspecting.
    fn marker(entry: Entry, at: u32) -> Self {
        Lookahead {
            terminal: entry.terminal(),
            token: Token::new(TokenKind::Error, Span::point(at)),
        }
    }
}

enum Step {
    Accept,
    Halt,
    Restart { entry: Entry, at: u32 },
}

/// What a parse produced, shaped by its goal.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Parsed {
    Unit(CompilationUnit),
    /// Expression and member-value goals.
    Expression(Option<ExprId>),
    /// Method-body and block-statement goals.
    Statements(Vec<StmtId>),
    Members(Vec<DeclId>),
    Package(Option<PackageDecl>),
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ParseOutcome {
    pub parsed: Parsed,
    /// A syntax or lexical error was found; the result is best effort.
    pub has_errors: bool,
    /// Final recovery checkpoint, a byte offset.
    pub checkpoint: u32,
    /// How often recovery restarted the automaton.
    pub restarts: u32,
}

/// A parser session.
pub struct Parser<'t> {
    pub(crate) tables: &'t GrammarTables,
    pub(crate) config: ParserConfig,
    pub(crate) stacks: ParserStacks,
    pub(crate) recovery: Recovery,
    pub(crate) goal: GoalKind,
    /// Entry the automaton currently runs; differs from `goal` while
    /// recovering.
    pub(crate) entry: Entry,
    pub(crate) origin: u32,
    pub(crate) limit: u32,
    pub(crate) diet_active: bool,
    pub(crate) pending_body: Option<DeclId>,
    /// Open anonymous class and enum constant bodies.
    pub(crate) anonymous_depth: u32,
    pub(crate) has_errors: bool,
    pub(crate) resumed_at: Option<u32>,
    lexed_to: u32,
    level_reported: Vec<Span>,
    reductions: Vec<u16>,
}

impl<'t> Parser<'t> {
    pub fn new(tables: &'t GrammarTables, config: ParserConfig) -> Self {
        Parser {
            tables,
            config,
            stacks: ParserStacks::default(),
            recovery: Recovery::default(),
            goal: GoalKind::CompilationUnit,
            entry: Entry::CompilationUnit,
            origin: 0,
            limit: 0,
            diet_active: false,
            pending_body: None,
            anonymous_depth: 0,
            has_errors: false,
            resumed_at: None,
            lexed_to: 0,
            level_reported: Vec::new(),
            reductions: Vec::new(),
        }
    }

    pub fn config(&self) -> &ParserConfig {
        &self.config
    }

    pub fn tables(&self) -> &'t GrammarTables {
        self.tables
    }

    /// Reset all per-parse state. Called at the start of every run.
    pub fn initialize(&mut self) {
        self.stacks.clear();
        self.recovery.reset(0);
        self.pending_body = None;
        self.anonymous_depth = 0;
        self.has_errors = false;
        self.resumed_at = None;
        self.lexed_to = 0;
        self.level_reported.clear();
        self.reductions.clear();
    }

    /// Rules reduced by the last run, in order.
    pub fn reductions(&self) -> &[u16] {
        &self.reductions
    }

    /// Recovery checkpoint reached by the last run.
    pub fn last_checkpoint(&self) -> u32 {
        self.recovery.checkpoint
    }

    pub fn stacks(&self) -> &ParserStacks {
        &self.stacks
    }

    /// Parse `goal` over the source's current range.
    pub fn run<S: TokenSource, R: ProblemReporter>(
        &mut self,
        goal: GoalKind,
        source: &mut S,
        arena: &mut AstArena,
        reporter: &mut R,
    ) -> Result<ParseOutcome, ParseAbort> {
        let mut cx = Cx { arena, reporter };
        self.drive(goal, source, &mut cx)
    }

    pub fn parse_unit<S: TokenSource, R: ProblemReporter>(
        &mut self,
        source: &mut S,
        arena: &mut AstArena,
        reporter: &mut R,
    ) -> Result<CompilationUnit, ParseAbort> {
        match self.run(GoalKind::CompilationUnit, source, arena, reporter)?.parsed {
            Parsed::Unit(unit) => Ok(unit),
            _ => Err(ParseAbort::MissingResult),
        }
    }

    pub fn parse_expression<S: TokenSource, R: ProblemReporter>(
        &mut self,
        source: &mut S,
        arena: &mut AstArena,
        reporter: &mut R,
    ) -> Result<Option<ExprId>, ParseAbort> {
        match self.run(GoalKind::Expression, source, arena, reporter)?.parsed {
            Parsed::Expression(expr) => Ok(expr),
            _ => Err(ParseAbort::MissingResult),
        }
    }

    /// Parse an annotation member value: a conditional expression, an
    /// annotation, or an array initializer of member values.
    pub fn parse_member_value<S: TokenSource, R: ProblemReporter>(
        &mut self,
        source: &mut S,
        arena: &mut AstArena,
        reporter: &mut R,
    ) -> Result<Option<ExprId>, ParseAbort> {
        match self.run(GoalKind::MemberValue, source, arena, reporter)?.parsed {
            Parsed::Expression(expr) => Ok(expr),
            _ => Err(ParseAbort::MissingResult),
        }
    }

    pub fn parse_package_declaration<S: TokenSource, R: ProblemReporter>(
        &mut self,
        source: &mut S,
        arena: &mut AstArena,
        reporter: &mut R,
    ) -> Result<Option<PackageDecl>, ParseAbort> {
        match self.run(GoalKind::PackageDeclaration, source, arena, reporter)?.parsed {
            Parsed::Package(package) => Ok(package),
            _ => Err(ParseAbort::MissingResult),
        }
    }

    pub fn parse_class_body_declarations<S: TokenSource, R: ProblemReporter>(
        &mut self,
        source: &mut S,
        arena: &mut AstArena,
        reporter: &mut R,
    ) -> Result<Vec<DeclId>, ParseAbort> {
        match self.run(GoalKind::ClassBodyDeclarations, source, arena, reporter)?.parsed {
            Parsed::Members(members) => Ok(members),
            _ => Err(ParseAbort::MissingResult),
        }
    }

    pub fn parse_block_statements<S: TokenSource, R: ProblemReporter>(
        &mut self,
        source: &mut S,
        arena: &mut AstArena,
        reporter: &mut R,
    ) -> Result<Vec<StmtId>, ParseAbort> {
        match self.run(GoalKind::BlockStatements, source, arena, reporter)?.parsed {
            Parsed::Statements(stmts) => Ok(stmts),
            _ => Err(ParseAbort::MissingResult),
        }
    }

    /// Parse the skipped body of a method or constructor and store the
    /// statements in it. Returns `false` when there was no skipped body.
    pub fn parse_method_body_into<S: TokenSource, R: ProblemReporter>(
        &mut self,
        decl: DeclId,
        source: &mut S,
        arena: &mut AstArena,
        reporter: &mut R,
    ) -> Result<bool, ParseAbort> {
        if arena.decl(decl).as_method().is_none() {
            return Ok(false);
        }
        self.parse_body_into(decl, source, arena, reporter)
    }

    /// Like [`Parser::parse_method_body_into`], for initializer blocks.
    pub fn parse_initializer_into<S: TokenSource, R: ProblemReporter>(
        &mut self,
        decl: DeclId,
        source: &mut S,
        arena: &mut AstArena,
        reporter: &mut R,
    ) -> Result<bool, ParseAbort> {
        if !matches!(arena.decl(decl).kind, DeclKind::Initializer(_)) {
            return Ok(false);
        }
        self.parse_body_into(decl, source, arena, reporter)
    }

    fn parse_body_into<S: TokenSource, R: ProblemReporter>(
        &mut self,
        decl: DeclId,
        source: &mut S,
        arena: &mut AstArena,
        reporter: &mut R,
    ) -> Result<bool, ParseAbort> {
        let Some(Body::Skipped { range }) = arena.decl(decl).body().cloned() else {
            return Ok(false);
        };
        source.reset_to(range.start, range.end);
        let outcome = self.run(GoalKind::MethodBody, source, arena, reporter)?;
        let Parsed::Statements(stmts) = outcome.parsed else {
            return Err(ParseAbort::MissingResult);
        };
        let target = arena.decl_mut(decl);
        if let Some(body) = target.body_mut() {
            *body = Body::Parsed {
                stmts,
                span: Span::new(range.start.saturating_sub(1), range.end + 1),
            };
        }
        target.has_errors |= outcome.has_errors;
        Ok(true)
    }

    fn drive(
        &mut self,
        goal: GoalKind,
        source: &mut dyn TokenSource,
        cx: &mut Cx<'_>,
    ) -> Result<ParseOutcome, ParseAbort> {
        self.initialize();
        self.goal = goal;
        self.origin = source.mark();
        self.limit = source.limit();
        self.lexed_to = self.origin;
        self.diet_active = self.config.diet && goal == GoalKind::CompilationUnit;
        self.recovery.reset(self.origin);
        debug!(?goal, origin = self.origin, limit = self.limit, "parse");

        let mut entry = goal.entry();
        let mut at = self.origin;
        loop {
            match self.attempt(entry, at, source, cx)? {
                Step::Accept => return self.accept(cx),
                Step::Halt => return Ok(self.halt(cx)),
                Step::Restart { entry: next, at: origin } => {
                    entry = next;
                    at = origin;
                    source.reset_to(origin, self.limit);
                }
            }
        }
    }

    /// Run the automaton from `entry` until it accepts, halts or asks for
    /// a restart.
    fn attempt(
        &mut self,
        entry: Entry,
        at: u32,
        source: &mut dyn TokenSource,
        cx: &mut Cx<'_>,
    ) -> Result<Step, ParseAbort> {
        self.stacks.clear();
        self.pending_body = None;
        self.anonymous_depth = 0;
        self.entry = entry;
        self.stacks.states.push(StateEntry {
            state: 0,
            span: Span::point(at),
            terminal: false,
            mark: StackMark::default(),
        });

        let mut la = Lookahead::marker(entry, at);
        loop {
            let state = self.top_state();
            match self.tables.action(state, la.terminal) {
                Action::Shift(next) => {
                    trace!(state, next, token = %la.token.kind, "shift");
                    self.shift(la.token, next);
                    la = self.advance(la.token, source, cx);
                }
                Action::ShiftReduce(rule) => {
                    trace!(state, rule, token = %la.token.kind, "shift-reduce");
                    self.shift(la.token, FUSED);
                    self.reduce(rule, la.token.span.end, cx)?;
                    la = self.advance(la.token, source, cx);
                }
                Action::Reduce(rule) => self.reduce(rule, la.token.span.start, cx)?,
                Action::Accept => return Ok(Step::Accept),
                Action::Error => match self.on_error(la, source, cx)? {
                    Verdict::Resume => continue,
                    Verdict::Restart(entry, at) => return Ok(Step::Restart { entry, at }),
                    Verdict::Halt => return Ok(Step::Halt),
                },
            }

            if self.recovery.skip_requested {
                self.skip_open_bodies(source, cx);
                self.sync_recovery_goal();
                la = self.next(source, cx);
            }
            if self.recovery.restart_requested {
                self.recovery.restart_requested = false;
                let at = self.recovery.checkpoint;
                let entry = self.recovery_entry();
                return Ok(match self.restart_verdict(entry, at, cx) {
                    Verdict::Restart(entry, at) => Step::Restart { entry, at },
                    Verdict::Resume | Verdict::Halt => Step::Halt,
                });
            }
        }
    }

    /// Bodies are skipped only on the unit goal's own pass, never while
    /// recovery reparses headers. Members of anonymous class and enum
    /// constant bodies are always parsed in full.
    pub(crate) fn diet_now(&self) -> bool {
        self.diet_active && self.entry == Entry::CompilationUnit && self.anonymous_depth == 0
    }

    #[inline]
    pub(crate) fn top_state(&self) -> u16 {
        self.stacks.states.last().map_or(0, |entry| entry.state)
    }

    fn shift(&mut self, token: Token, state: u16) {
        let mark = self.stacks.mark();
        self.stacks.tokens.push(token);
        self.stacks.states.push(StateEntry {
            state,
            span: token.span,
            terminal: true,
            mark,
        });
    }

    /// Fetch the token after `shifted`. A `{` opening a body that diet
    /// parsing skips is answered with its matching `}`.
    fn advance(
        &mut self,
        shifted: Token,
        source: &mut dyn TokenSource,
        cx: &mut Cx<'_>,
    ) -> Lookahead {
        if let Some(decl) = self.pending_body.take() {
            if shifted.kind == TokenKind::LBrace {
                return self.skip_body(decl, shifted, source, cx);
            }
        }
        self.next(source, cx)
    }

    fn skip_body(
        &mut self,
        decl: DeclId,
        open: Token,
        source: &mut dyn TokenSource,
        cx: &mut Cx<'_>,
    ) -> Lookahead {
        let mut depth = 1u32;
        loop {
            let token = source.next_token();
            match token.kind {
                TokenKind::LBrace => depth += 1,
                TokenKind::RBrace => {
                    depth -= 1;
                    if depth == 0 {
                        let range = Span::new(open.span.end, token.span.start);
                        if let Some(body) = cx.arena.decl_mut(decl).body_mut() {
                            *body = Body::Skipped { range };
                        }
                        trace!(%range, "skipped body");
                        return Lookahead::token(token);
                    }
                }
                TokenKind::Eof => return Lookahead::token(token),
                _ => {}
            }
        }
    }

    /// Read the next token, reporting lexical errors the first time they
    /// are seen.
    pub(crate) fn next(&mut self, source: &mut dyn TokenSource, cx: &mut Cx<'_>) -> Lookahead {
        let token = source.next_token();
        if token.kind == TokenKind::Error && token.span.start >= self.lexed_to {
            cx.reporter
                .report(Problem::error(lexical_code(token.error), token.span));
            self.has_errors = true;
            self.lexed_to = token.span.end.max(token.span.start + 1);
        }
        Lookahead::token(token)
    }

    fn reduce(&mut self, rule: u16, lookahead: u32, cx: &mut Cx<'_>) -> Result<(), ParseAbort> {
        let len = self.tables.rule_len(rule);
        let depth = self.stacks.states.len();
        if depth <= len {
            return Err(ParseAbort::StateUnderflow { rule });
        }
        let first = depth - len;
        let (span, mark) = if len == 0 {
            (Span::point(lookahead), self.stacks.mark())
        } else {
            let head = self.stacks.states[first];
            let last = self.stacks.states[depth - 1];
            (Span::new(head.span.start, last.span.end), head.mark)
        };
        self.stacks.states.truncate(first);

        let below = self.top_state();
        let lhs = self.tables.lhs(rule);
        let target = self.tables.goto(below, lhs).ok_or(ParseAbort::MissingGoto {
            state: below,
            nonterminal: lhs,
        })?;

        let count = self.tables.rhs_terminals(rule);
        let split = self
            .stacks
            .tokens
            .len()
            .checked_sub(count)
            .ok_or(StackError::Underflow { stack: "token" })?;
        let tokens: SmallVec<[Token; 8]> = self.stacks.tokens.drain(split..).collect();

        if self.tables.level(rule) > self.config.source_level
            && !self.level_reported.contains(&span)
        {
            self.level_reported.push(span);
            cx.reporter
                .report(Problem::error(ErrorCode::SOURCE_LEVEL, span));
        }

        let act = self.tables.act(rule);
        trace!(rule, ?act, %span, "reduce");
        self.reductions.push(rule);
        self.dispatch(act, &Reduction::new(rule, span, &tokens), cx)?;
        if cfg!(debug_assertions) {
            self.check_footprint(rule, mark)?;
        }

        self.stacks.states.push(StateEntry {
            state: target,
            span,
            terminal: false,
            mark,
        });
        Ok(())
    }

    /// A reduction may leave at most one group per stack and must consume
    /// every terminal it spans.
    fn check_footprint(&self, rule: u16, mark: StackMark) -> Result<(), ParseAbort> {
        let now = self.stacks.mark();
        let grouped = [
            (now.ast, mark.ast),
            (now.exprs, mark.exprs),
            (now.types, mark.types),
            (now.names, mark.names),
            (now.annotations, mark.annotations),
        ];
        let balanced = grouped.iter().all(|&(after, before)| after <= before + 1)
            && now.ints <= mark.ints + 2
            && now.tokens == mark.tokens
            && self.stacks.is_consistent();
        if balanced {
            Ok(())
        } else {
            Err(ParseAbort::Footprint { rule })
        }
    }

    fn accept(&mut self, cx: &mut Cx<'_>) -> Result<ParseOutcome, ParseAbort> {
        debug!(goal = ?self.goal, entry = ?self.entry, "accept");
        let parsed = if self.recovery.is_active() {
            self.update_parse_tree(cx)
        } else {
            self.take_result()?
        };
        Ok(self.outcome(parsed))
    }

    fn halt(&mut self, cx: &mut Cx<'_>) -> ParseOutcome {
        debug!(
            goal = ?self.goal,
            checkpoint = self.recovery.checkpoint,
            "halt"
        );
        let parsed = if self.recovery.is_active() {
            self.update_parse_tree(cx)
        } else {
            self.empty_result()
        };
        self.outcome(parsed)
    }

    fn outcome(&self, parsed: Parsed) -> ParseOutcome {
        ParseOutcome {
            parsed,
            has_errors: self.has_errors,
            checkpoint: self.recovery.checkpoint,
            restarts: self.recovery.restarts,
        }
    }

    /// Pull the goal's result off the stacks after a clean accept.
    fn take_result(&mut self) -> Result<Parsed, ParseAbort> {
        Ok(match self.goal {
            GoalKind::CompilationUnit => {
                let mut unit = self
                    .stacks
                    .ast
                    .pop()?
                    .into_unit()
                    .ok_or(ParseAbort::MissingResult)?;
                unit.has_errors = self.has_errors;
                Parsed::Unit(unit)
            }
            GoalKind::Expression | GoalKind::MemberValue => {
                Parsed::Expression(Some(self.stacks.exprs.pop()?))
            }
            GoalKind::MethodBody | GoalKind::BlockStatements => Parsed::Statements(
                self.stacks
                    .ast
                    .pop_group()?
                    .into_iter()
                    .map(|item| item.into_stmt().ok_or(ParseAbort::MissingResult))
                    .collect::<Result<_, _>>()?,
            ),
            GoalKind::ClassBodyDeclarations => Parsed::Members(
                self.stacks
                    .ast
                    .pop_group()?
                    .into_iter()
                    .map(|item| item.into_decl().ok_or(ParseAbort::MissingResult))
                    .collect::<Result<_, _>>()?,
            ),
            GoalKind::PackageDeclaration => Parsed::Package(Some(
                self.stacks
                    .ast
                    .pop()?
                    .into_package()
                    .ok_or(ParseAbort::MissingResult)?,
            )),
        })
    }

    pub(crate) fn empty_result(&self) -> Parsed {
        match self.goal {
            GoalKind::CompilationUnit => Parsed::Unit(CompilationUnit {
                span: Span::new(self.origin, self.limit),
                has_errors: self.has_errors,
                ..CompilationUnit::default()
            }),
            GoalKind::Expression | GoalKind::MemberValue => Parsed::Expression(None),
            GoalKind::MethodBody | GoalKind::BlockStatements => Parsed::Statements(Vec::new()),
            GoalKind::ClassBodyDeclarations => Parsed::Members(Vec::new()),
            GoalKind::PackageDeclaration => Parsed::Package(None),
        }
    }

    /// Pop an AST item of one particular variant.
    pub(crate) fn pop_item<T>(
        &mut self,
        rule: u16,
        expected: &'static str,
        select: fn(AstItem) -> Option<T>,
    ) -> Result<T, ParseAbort> {
        select(self.stacks.ast.pop()?).ok_or(ParseAbort::UnexpectedItem { rule, expected })
    }

    /// Pop an AST group whose items all have one variant.
    pub(crate) fn pop_items<T>(
        &mut self,
        rule: u16,
        expected: &'static str,
        select: fn(AstItem) -> Option<T>,
    ) -> Result<Vec<T>, ParseAbort> {
        self.stacks
            .ast
            .pop_group()?
            .into_iter()
            .map(|item| select(item).ok_or(ParseAbort::UnexpectedItem { rule, expected }))
            .collect()
    }
}

fn lexical_code(kind: Option<LexErrorKind>) -> ErrorCode {
    match kind {
        Some(LexErrorKind::UnterminatedString) => ErrorCode::J0002,
        Some(LexErrorKind::UnterminatedChar) => ErrorCode::J0003,
        Some(LexErrorKind::UnterminatedComment) => ErrorCode::J0004,
        Some(LexErrorKind::MalformedNumber) => ErrorCode::J0005,
        Some(LexErrorKind::InvalidCharacter) | None => ErrorCode::J0001,
    }
}
