//! LALR(1) automaton construction.
//!
//! LR(0) item sets are built first, then lookaheads are attached with the
//! propagation method: every kernel item is closed once under a dummy
//! lookahead to discover which lookaheads it generates spontaneously and
//! which it passes on, and the passed-on sets are pushed along those edges
//! until nothing changes.
//!
//! Shift/reduce conflicts resolve to the shift and reduce/reduce conflicts
//! to the earlier rule. Both are recorded so the build can report them.

mod bitset;
mod first;

pub use bitset::BitSet;
pub use first::FirstSets;

use std::collections::BTreeMap;
use std::fmt;

use rustc_hash::FxHashMap;

use crate::grammar::{Grammar, GrammarError, Symbol};

#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug, PartialOrd, Ord)]
struct Item {
    rule: u16,
    dot: u16,
}

impl Item {
    const START: Item = Item { rule: 0, dot: 0 };

    fn next_symbol(self, grammar: &Grammar) -> Option<Symbol> {
        grammar.productions[usize::from(self.rule)]
            .rhs
            .get(usize::from(self.dot))
            .copied()
    }

    fn is_complete(self, grammar: &Grammar) -> bool {
        usize::from(self.dot) == grammar.productions[usize::from(self.rule)].rhs.len()
    }

    fn advance(self) -> Item {
        Item {
            rule: self.rule,
            dot: self.dot + 1,
        }
    }
}

struct State {
    kernel: Vec<Item>,
    transitions: BTreeMap<Symbol, usize>,
}

/// One parse-table cell before encoding.
#[derive(Copy, Clone, Eq, PartialEq, Debug)]
pub enum Action {
    Error,
    Shift(u16),
    Reduce(u16),
    /// Shift, then immediately reduce by the rule; the target state would
    /// have had nothing else to do.
    ShiftReduce(u16),
    Accept,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ConflictKind {
    ShiftReduce { rule: String },
    ReduceReduce { kept: String, dropped: String },
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Conflict {
    pub state: usize,
    pub terminal: String,
    pub kind: ConflictKind,
}

impl fmt::Display for Conflict {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.kind {
            ConflictKind::ShiftReduce { rule } => write!(
                f,
                "state {}: shift/reduce on `{}`, shifting over `{}`",
                self.state, self.terminal, rule
            ),
            ConflictKind::ReduceReduce { kept, dropped } => write!(
                f,
                "state {}: reduce/reduce on `{}`, keeping `{}` over `{}`",
                self.state, self.terminal, kept, dropped
            ),
        }
    }
}

/// The finished automaton: dense action and goto tables.
pub struct Automaton {
    pub states: usize,
    terminals: usize,
    nonterminals: usize,
    action: Vec<Action>,
    goto: Vec<u16>,
    pub conflicts: Vec<Conflict>,
    pub first: FirstSets,
}

impl Automaton {
    #[inline]
    pub fn action(&self, state: usize, terminal: usize) -> Action {
        self.action[state * self.terminals + terminal]
    }

    /// Goto target, if any. State 0 is never a goto target.
    #[inline]
    pub fn goto(&self, state: usize, nonterminal: usize) -> Option<u16> {
        match self.goto[state * self.nonterminals + nonterminal] {
            0 => None,
            target => Some(target),
        }
    }
}

/// Build the LALR(1) automaton for `grammar`.
pub fn build(grammar: &Grammar) -> Result<Automaton, GrammarError> {
    let terminals = grammar.terminals.len();
    let nonterminals = grammar.nonterminals.len();
    // One extra bit marks "propagated from the kernel item".
    let bits = terminals + 1;
    let first = FirstSets::compute(grammar, bits);

    let states = lr0_states(grammar);
    if states.len() >= usize::from(u16::MAX) {
        return Err(GrammarError::TooLarge("states"));
    }
    let lookaheads = kernel_lookaheads(grammar, &first, &states, bits);

    let mut action = vec![Action::Error; states.len() * terminals];
    let mut goto = vec![0u16; states.len() * nonterminals];
    let mut conflicts = Vec::new();

    for (s, state) in states.iter().enumerate() {
        for (&symbol, &target) in &state.transitions {
            match symbol {
                Symbol::Terminal(t) => {
                    let fused = fused_rule(grammar, &states[target]);
                    action[s * terminals + usize::from(t)] = match fused {
                        Some(rule) => Action::ShiftReduce(rule),
                        None => Action::Shift(target as u16),
                    };
                }
                Symbol::Nonterminal(n) => {
                    goto[s * nonterminals + usize::from(n)] = target as u16;
                }
            }
        }

        let seeds = state
            .kernel
            .iter()
            .copied()
            .zip(lookaheads[s].iter().cloned())
            .collect();
        for (item, set) in closure_lr1(grammar, &first, seeds) {
            if !item.is_complete(grammar) {
                continue;
            }
            for terminal in set.iter() {
                let cell = &mut action[s * terminals + terminal];
                if item.rule == 0 {
                    *cell = Action::Accept;
                    continue;
                }
                match *cell {
                    Action::Error => *cell = Action::Reduce(item.rule),
                    Action::Shift(_) | Action::ShiftReduce(_) | Action::Accept => {
                        conflicts.push(Conflict {
                            state: s,
                            terminal: grammar.terminals[terminal].clone(),
                            kind: ConflictKind::ShiftReduce {
                                rule: grammar.render(item.rule),
                            },
                        });
                    }
                    Action::Reduce(other) if other != item.rule => {
                        let (kept, dropped) = (other.min(item.rule), other.max(item.rule));
                        *cell = Action::Reduce(kept);
                        conflicts.push(Conflict {
                            state: s,
                            terminal: grammar.terminals[terminal].clone(),
                            kind: ConflictKind::ReduceReduce {
                                kept: grammar.render(kept),
                                dropped: grammar.render(dropped),
                            },
                        });
                    }
                    Action::Reduce(_) => {}
                }
            }
        }
    }

    Ok(Automaton {
        states: states.len(),
        terminals,
        nonterminals,
        action,
        goto,
        conflicts,
        first,
    })
}

/// A state reached by shifting a terminal can be folded into the shift when
/// its only item is a finished rule.
fn fused_rule(grammar: &Grammar, state: &State) -> Option<u16> {
    match state.kernel.as_slice() {
        [item] if item.rule != 0 && item.is_complete(grammar) => Some(item.rule),
        _ => None,
    }
}

fn closure0(grammar: &Grammar, kernel: &[Item]) -> Vec<Item> {
    let mut items = kernel.to_vec();
    let mut expanded = vec![false; grammar.nonterminals.len()];
    let mut i = 0;
    while i < items.len() {
        if let Some(Symbol::Nonterminal(n)) = items[i].next_symbol(grammar) {
            let n = usize::from(n);
            if !expanded[n] {
                expanded[n] = true;
                items.extend(
                    grammar
                        .productions_of(n as u16)
                        .iter()
                        .map(|&rule| Item { rule, dot: 0 }),
                );
            }
        }
        i += 1;
    }
    items
}

fn lr0_states(grammar: &Grammar) -> Vec<State> {
    let mut states = vec![State {
        kernel: vec![Item::START],
        transitions: BTreeMap::new(),
    }];
    let mut index: FxHashMap<Vec<Item>, usize> = FxHashMap::default();
    index.insert(vec![Item::START], 0);

    let mut next = 0;
    while next < states.len() {
        let mut moves: BTreeMap<Symbol, Vec<Item>> = BTreeMap::new();
        for item in closure0(grammar, &states[next].kernel) {
            if let Some(symbol) = item.next_symbol(grammar) {
                moves.entry(symbol).or_default().push(item.advance());
            }
        }
        for (symbol, mut kernel) in moves {
            kernel.sort_unstable();
            kernel.dedup();
            let target = if let Some(&existing) = index.get(&kernel) {
                existing
            } else {
                let fresh = states.len();
                index.insert(kernel.clone(), fresh);
                states.push(State {
                    kernel,
                    transitions: BTreeMap::new(),
                });
                fresh
            };
            states[next].transitions.insert(symbol, target);
        }
        next += 1;
    }
    states
}

/// LR(1) closure of seed items carrying lookahead sets.
fn closure_lr1(
    grammar: &Grammar,
    first: &FirstSets,
    seeds: Vec<(Item, BitSet)>,
) -> Vec<(Item, BitSet)> {
    let mut index: FxHashMap<Item, usize> = FxHashMap::default();
    let mut items: Vec<(Item, BitSet)> = Vec::with_capacity(seeds.len());
    for (item, set) in seeds {
        if let Some(&at) = index.get(&item) {
            items[at].1.union_with(&set);
        } else {
            index.insert(item, items.len());
            items.push((item, set));
        }
    }
    let mut work: Vec<usize> = (0..items.len()).collect();

    while let Some(at) = work.pop() {
        let item = items[at].0;
        let Some(Symbol::Nonterminal(n)) = item.next_symbol(grammar) else {
            continue;
        };
        let (rest, rest_nullable) = first.suffix(item.rule, usize::from(item.dot) + 1);
        let mut follow = rest.clone();
        if rest_nullable {
            let inherited = items[at].1.clone();
            follow.union_with(&inherited);
        }
        for &rule in grammar.productions_of(n) {
            let child = Item { rule, dot: 0 };
            if let Some(&existing) = index.get(&child) {
                if items[existing].1.union_with(&follow) {
                    work.push(existing);
                }
            } else {
                index.insert(child, items.len());
                work.push(items.len());
                items.push((child, follow.clone()));
            }
        }
    }
    items
}

fn kernel_lookaheads(
    grammar: &Grammar,
    first: &FirstSets,
    states: &[State],
    bits: usize,
) -> Vec<Vec<BitSet>> {
    let propagate = bits - 1;
    let mut lookaheads: Vec<Vec<BitSet>> = states
        .iter()
        .map(|state| vec![BitSet::new(bits); state.kernel.len()])
        .collect();
    lookaheads[0][0].insert(usize::from(grammar.eof));

    let mut edges: Vec<(usize, usize, usize, usize)> = Vec::new();
    for (s, state) in states.iter().enumerate() {
        for (k, &kernel_item) in state.kernel.iter().enumerate() {
            let mut dummy = BitSet::new(bits);
            dummy.insert(propagate);
            for (item, set) in closure_lr1(grammar, first, vec![(kernel_item, dummy)]) {
                let Some(symbol) = item.next_symbol(grammar) else {
                    continue;
                };
                let Some(&target) = state.transitions.get(&symbol) else {
                    continue;
                };
                let Ok(slot) = states[target].kernel.binary_search(&item.advance()) else {
                    continue;
                };
                for bit in set.iter() {
                    if bit == propagate {
                        edges.push((s, k, target, slot));
                    } else {
                        lookaheads[target][slot].insert(bit);
                    }
                }
            }
        }
    }

    let mut changed = true;
    while changed {
        changed = false;
        for &(s, k, t, slot) in &edges {
            if (s, k) == (t, slot) {
                continue;
            }
            let from = lookaheads[s][k].clone();
            changed |= lookaheads[t][slot].union_with(&from);
        }
    }
    lookaheads
}

#[cfg(test)]
mod tests;
