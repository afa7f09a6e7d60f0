//! FIRST sets and nullability, computed to a fixpoint.

use super::BitSet;
use crate::grammar::{Grammar, Symbol};

pub struct FirstSets {
    nullable: Vec<bool>,
    first: Vec<BitSet>,
    /// `suffixes[rule][pos]` is FIRST and nullability of `rhs[pos..]`.
    suffixes: Vec<Vec<(BitSet, bool)>>,
}

impl FirstSets {
    /// `bits` must cover every terminal index the sets will be combined with.
    pub fn compute(grammar: &Grammar, bits: usize) -> Self {
        let count = grammar.nonterminals.len();
        let mut nullable = vec![false; count];
        let mut first = vec![BitSet::new(bits); count];

        let mut changed = true;
        while changed {
            changed = false;
            for production in &grammar.productions {
                let lhs = usize::from(production.lhs);
                let mut all_nullable = true;
                for symbol in &production.rhs {
                    match *symbol {
                        Symbol::Terminal(t) => {
                            changed |= first[lhs].insert(usize::from(t));
                            all_nullable = false;
                        }
                        Symbol::Nonterminal(n) => {
                            let n = usize::from(n);
                            if n != lhs {
                                let theirs = first[n].clone();
                                changed |= first[lhs].union_with(&theirs);
                            }
                            if !nullable[n] {
                                all_nullable = false;
                            }
                        }
                    }
                    if !all_nullable {
                        break;
                    }
                }
                if all_nullable && !nullable[lhs] {
                    nullable[lhs] = true;
                    changed = true;
                }
            }
        }

        let suffixes = grammar
            .productions
            .iter()
            .map(|production| {
                let len = production.rhs.len();
                let mut row = vec![(BitSet::new(bits), true); len + 1];
                for pos in (0..len).rev() {
                    let (next_set, next_nullable) = row[pos + 1].clone();
                    row[pos] = match production.rhs[pos] {
                        Symbol::Terminal(t) => {
                            let mut set = BitSet::new(bits);
                            set.insert(usize::from(t));
                            (set, false)
                        }
                        Symbol::Nonterminal(n) => {
                            let n = usize::from(n);
                            let mut set = first[n].clone();
                            if nullable[n] {
                                set.union_with(&next_set);
                                (set, next_nullable)
                            } else {
                                (set, false)
                            }
                        }
                    };
                }
                row
            })
            .collect();

        FirstSets {
            nullable,
            first,
            suffixes,
        }
    }

    pub fn first(&self, nonterminal: u16) -> &BitSet {
        &self.first[usize::from(nonterminal)]
    }

    pub fn is_nullable(&self, nonterminal: u16) -> bool {
        self.nullable[usize::from(nonterminal)]
    }

    /// FIRST and nullability of the right-hand side of `rule` from `pos` on.
    pub(super) fn suffix(&self, rule: u16, pos: usize) -> (&BitSet, bool) {
        let (set, nullable) = &self.suffixes[usize::from(rule)][pos];
        (set, *nullable)
    }
}
