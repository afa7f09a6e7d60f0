//! Parser stacks.
//!
//! Fragment stacks hold what reductions build: AST items, expressions,
//! types, name segments, annotations, plain integers and the terminals
//! not yet consumed by a rule. Grouped stacks pair a flat item vector with
//! a length vector, so a list nonterminal is one group however many items
//! it holds. Every nonterminal leaves at most one group on each stack.

use javelin_ir::ast::{
    CatchClause, CompilationUnit, DeclId, EnumConstant, ExprId, ImportDecl, MemberValuePair,
    PackageDecl, Param, StmtId, SwitchGroup, SwitchLabel, TypeId, TypeParam, VarDeclarator,
};
use javelin_ir::{Name, Span, Token};
use thiserror::Error;

#[derive(Copy, Clone, Debug, Error, PartialEq, Eq)]
pub enum StackError {
    #[error("{stack} stack underflow")]
    Underflow { stack: &'static str },
    #[error("{stack} stack: expected a single item, found a group of {len}")]
    NotSingle { stack: &'static str, len: usize },
}

/// A stack of item groups.
#[derive(Clone, Debug)]
pub struct GroupedStack<T> {
    name: &'static str,
    items: Vec<T>,
    lengths: Vec<usize>,
    /// Running sum of `lengths`.
    grouped: usize,
}

impl<T> GroupedStack<T> {
    pub fn new(name: &'static str) -> Self {
        GroupedStack {
            name,
            items: Vec::new(),
            lengths: Vec::new(),
            grouped: 0,
        }
    }

    fn underflow(&self) -> StackError {
        StackError::Underflow { stack: self.name }
    }

    /// Push `item` as a group of its own.
    #[inline]
    pub fn push(&mut self, item: T) {
        self.items.push(item);
        self.lengths.push(1);
        self.grouped += 1;
    }

    #[inline]
    pub fn push_empty(&mut self) {
        self.lengths.push(0);
    }

    pub fn push_group(&mut self, items: impl IntoIterator<Item = T>) {
        let before = self.items.len();
        self.items.extend(items);
        let len = self.items.len() - before;
        self.lengths.push(len);
        self.grouped += len;
    }

    /// Add `item` to the topmost group.
    pub fn append(&mut self, item: T) -> Result<(), StackError> {
        let top = self.lengths.last_mut().ok_or(StackError::Underflow { stack: self.name })?;
        *top += 1;
        self.grouped += 1;
        self.items.push(item);
        Ok(())
    }

    /// Merge the two topmost groups.
    pub fn concat(&mut self) -> Result<(), StackError> {
        let top = self.lengths.pop().ok_or_else(|| self.underflow())?;
        match self.lengths.last_mut() {
            Some(below) => {
                *below += top;
                Ok(())
            }
            None => {
                self.lengths.push(top);
                Err(self.underflow())
            }
        }
    }

    pub fn pop_group(&mut self) -> Result<Vec<T>, StackError> {
        let len = self.lengths.pop().ok_or_else(|| self.underflow())?;
        let Some(at) = self.items.len().checked_sub(len) else {
            self.lengths.push(len);
            return Err(self.underflow());
        };
        self.grouped -= len;
        Ok(self.items.split_off(at))
    }

    /// Pop a group that must hold exactly one item.
    pub fn pop(&mut self) -> Result<T, StackError> {
        match self.lengths.last() {
            None => Err(self.underflow()),
            Some(&1) => {
                let item = self.items.pop().ok_or_else(|| self.underflow())?;
                self.lengths.pop();
                self.grouped -= 1;
                Ok(item)
            }
            Some(&len) => Err(StackError::NotSingle {
                stack: self.name,
                len,
            }),
        }
    }

    #[inline]
    pub fn top(&self) -> Option<&T> {
        self.items.last()
    }

    #[inline]
    pub fn top_mut(&mut self) -> Option<&mut T> {
        self.items.last_mut()
    }

    /// Every item, bottom first.
    pub fn items(&self) -> &[T] {
        &self.items
    }

    #[inline]
    pub fn groups(&self) -> usize {
        self.lengths.len()
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// The item count equals the sum of the group lengths.
    pub fn is_consistent(&self) -> bool {
        self.grouped == self.items.len()
    }

    pub fn clear(&mut self) {
        self.items.clear();
        self.lengths.clear();
        self.grouped = 0;
    }
}

/// One entry on the AST stack.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum AstItem {
    /// A finished declaration.
    Decl(DeclId),
    /// A type, method, constructor or initializer whose body is still open.
    Header(DeclId),
    Stmt(StmtId),
    Import(ImportDecl),
    Package(PackageDecl),
    Param(Param),
    Declarator(VarDeclarator),
    Catch(CatchClause),
    SwitchGroup(SwitchGroup),
    Label(SwitchLabel),
    EnumConstant(EnumConstant),
    TypeParam(TypeParam),
    Pair(MemberValuePair),
    Unit(CompilationUnit),
}

macro_rules! item_accessors {
    ($($fn_name:ident => $variant:ident($ty:ty),)*) => {
        impl AstItem {
            $(
                pub fn $fn_name(self) -> Option<$ty> {
                    match self {
                        AstItem::$variant(value) => Some(value),
                        _ => None,
                    }
                }
            )*
        }
    };
}

item_accessors! {
    into_decl => Decl(DeclId),
    into_header => Header(DeclId),
    into_stmt => Stmt(StmtId),
    into_import => Import(ImportDecl),
    into_package => Package(PackageDecl),
    into_param => Param(Param),
    into_declarator => Declarator(VarDeclarator),
    into_catch => Catch(CatchClause),
    into_switch_group => SwitchGroup(SwitchGroup),
    into_label => Label(SwitchLabel),
    into_enum_constant => EnumConstant(EnumConstant),
    into_type_param => TypeParam(TypeParam),
    into_pair => Pair(MemberValuePair),
    into_unit => Unit(CompilationUnit),
}

/// Stack depths captured when a state entry is pushed.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct StackMark {
    pub ast: usize,
    pub exprs: usize,
    pub types: usize,
    pub names: usize,
    pub annotations: usize,
    pub ints: usize,
    pub tokens: usize,
}

/// One automaton state together with the source extent of the symbol
/// that entered it.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct StateEntry {
    pub state: u16,
    pub span: Span,
    /// Entered by shifting a terminal rather than by a goto.
    pub terminal: bool,
    pub mark: StackMark,
}

#[derive(Clone, Debug)]
pub struct ParserStacks {
    pub states: Vec<StateEntry>,
    pub ast: GroupedStack<AstItem>,
    pub exprs: GroupedStack<ExprId>,
    pub types: GroupedStack<TypeId>,
    pub names: GroupedStack<(Name, Span)>,
    pub annotations: GroupedStack<ExprId>,
    pub ints: Vec<u32>,
    pub tokens: Vec<Token>,
}

impl Default for ParserStacks {
    fn default() -> Self {
        ParserStacks {
            states: Vec::with_capacity(64),
            ast: GroupedStack::new("ast"),
            exprs: GroupedStack::new("expression"),
            types: GroupedStack::new("type"),
            names: GroupedStack::new("identifier"),
            annotations: GroupedStack::new("annotation"),
            ints: Vec::new(),
            tokens: Vec::with_capacity(64),
        }
    }
}

impl ParserStacks {
    pub fn mark(&self) -> StackMark {
        StackMark {
            ast: self.ast.groups(),
            exprs: self.exprs.groups(),
            types: self.types.groups(),
            names: self.names.groups(),
            annotations: self.annotations.groups(),
            ints: self.ints.len(),
            tokens: self.tokens.len(),
        }
    }

    pub fn pop_int(&mut self) -> Result<u32, StackError> {
        self.ints.pop().ok_or(StackError::Underflow { stack: "integer" })
    }

    /// Every grouped stack satisfies its length invariant.
    pub fn is_consistent(&self) -> bool {
        self.ast.is_consistent()
            && self.exprs.is_consistent()
            && self.types.is_consistent()
            && self.names.is_consistent()
            && self.annotations.is_consistent()
    }

    pub fn is_empty(&self) -> bool {
        self.ast.groups() == 0
            && self.exprs.groups() == 0
            && self.types.groups() == 0
            && self.names.groups() == 0
            && self.annotations.groups() == 0
            && self.ints.is_empty()
    }

    /// Reset every stack, keeping capacity.
    pub fn clear(&mut self) {
        self.states.clear();
        self.ast.clear();
        self.exprs.clear();
        self.types.clear();
        self.names.clear();
        self.annotations.clear();
        self.ints.clear();
        self.tokens.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn groups_track_lengths() {
        let mut stack = GroupedStack::new("test");
        stack.push(1);
        stack.push(2);
        stack.concat().ok();
        stack.push_empty();
        stack.concat().ok();
        stack.append(3).ok();
        assert_eq!(stack.groups(), 1);
        assert!(stack.is_consistent());
        assert_eq!(stack.pop_group(), Ok(vec![1, 2, 3]));
        assert!(stack.is_empty());
    }

    #[test]
    fn pop_requires_single_item() {
        let mut stack = GroupedStack::new("test");
        stack.push_group([1, 2]);
        assert_eq!(
            stack.pop(),
            Err(StackError::NotSingle {
                stack: "test",
                len: 2
            })
        );
        stack.push(7);
        assert_eq!(stack.pop(), Ok(7));
    }

    #[test]
    fn underflow_is_reported() {
        let mut stack: GroupedStack<u8> = GroupedStack::new("test");
        assert_eq!(stack.pop(), Err(StackError::Underflow { stack: "test" }));
        assert_eq!(stack.concat(), Err(StackError::Underflow { stack: "test" }));
        stack.push_empty();
        assert_eq!(stack.concat(), Err(StackError::Underflow { stack: "test" }));
        assert_eq!(stack.groups(), 1);
    }

    #[test]
    fn running_total_follows_every_operation() {
        let mut stack = GroupedStack::new("test");
        stack.push_group([1, 2, 3]);
        stack.push(4);
        stack.append(5).ok();
        stack.push_empty();
        assert!(stack.is_consistent());
        assert_eq!(stack.pop_group(), Ok(vec![]));
        assert_eq!(stack.pop_group(), Ok(vec![4, 5]));
        stack.push(6);
        assert_eq!(stack.pop(), Ok(6));
        assert!(stack.is_consistent());
        assert_eq!(stack.len(), 3);
        stack.clear();
        assert!(stack.is_consistent());
        assert_eq!(stack.pop_group(), Err(StackError::Underflow { stack: "test" }));
    }

    #[test]
    fn marks_count_groups() {
        let mut stacks = ParserStacks::default();
        stacks.exprs.push_empty();
        stacks.ints.push(4);
        let mark = stacks.mark();
        assert_eq!(mark.exprs, 1);
        assert_eq!(mark.ints, 1);
        stacks.clear();
        assert!(stacks.is_empty());
    }
}
