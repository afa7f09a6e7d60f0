//! Symbol resolution: turns the textual rule table into numbered
//! productions over terminal and nonterminal indices.

use std::fmt::Write as _;

use javelin_ir::TokenKind;
use rustc_hash::{FxHashMap, FxHashSet};
use thiserror::Error;

use crate::entry::{Entry, NUM_TERMINALS};
use crate::rules::{RuleDef, GOAL, RULES};
use crate::{Act, SourceLevel};

/// Name of the augmented start symbol, nonterminal 0.
pub const ACCEPT: &str = "$accept";

#[derive(Debug, Error, PartialEq, Eq)]
pub enum GrammarError {
    #[error("symbol `{symbol}` used in a rule for `{lhs}` is neither a terminal nor defined")]
    UndefinedSymbol { symbol: String, lhs: String },
    #[error("terminal `{0}` appears on the left of a rule")]
    TerminalOnLeft(String),
    #[error("rule `{0}` is listed twice")]
    DuplicateRule(String),
    #[error("start symbol `{0}` has no rules")]
    MissingStart(String),
    #[error("grammar too large for 16-bit tables: {0}")]
    TooLarge(&'static str),
}

#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug, PartialOrd, Ord)]
pub enum Symbol {
    Terminal(u16),
    Nonterminal(u16),
}

#[derive(Clone, Debug)]
pub struct Production {
    pub lhs: u16,
    pub rhs: Vec<Symbol>,
    pub act: Act,
    pub level: SourceLevel,
}

impl Production {
    pub fn terminal_count(&self) -> usize {
        self.rhs
            .iter()
            .filter(|s| matches!(s, Symbol::Terminal(_)))
            .count()
    }
}

/// A resolved grammar. Production 0 is `$accept ::= <start>`.
#[derive(Clone, Debug)]
pub struct Grammar {
    pub terminals: Vec<String>,
    pub nonterminals: Vec<String>,
    pub productions: Vec<Production>,
    pub eof: u16,
    by_lhs: Vec<Vec<u16>>,
}

impl Grammar {
    /// The Java grammar over token kinds plus entry markers.
    pub fn java() -> Result<Grammar, GrammarError> {
        let mut terminals: Vec<String> = TokenKind::ALL
            .iter()
            .map(|kind| kind.display().to_owned())
            .collect();
        terminals.extend(Entry::ALL.iter().map(|entry| entry.marker().to_owned()));
        debug_assert_eq!(terminals.len(), NUM_TERMINALS);
        Grammar::new(terminals, TokenKind::Eof.index(), RULES, GOAL)
    }

    pub fn new(
        terminals: Vec<String>,
        eof: usize,
        rules: &[RuleDef],
        start: &str,
    ) -> Result<Grammar, GrammarError> {
        if terminals.len() >= usize::from(u16::MAX) {
            return Err(GrammarError::TooLarge("terminals"));
        }
        if rules.len() >= usize::from(u16::MAX) {
            return Err(GrammarError::TooLarge("rules"));
        }

        let terminal_index: FxHashMap<&str, u16> = terminals
            .iter()
            .enumerate()
            .map(|(i, name)| (name.as_str(), i as u16))
            .collect();

        let mut nonterminals = vec![ACCEPT.to_owned()];
        let mut nonterminal_index: FxHashMap<&str, u16> = FxHashMap::default();
        for def in rules {
            if terminal_index.contains_key(def.lhs) {
                return Err(GrammarError::TerminalOnLeft(def.lhs.to_owned()));
            }
            if !nonterminal_index.contains_key(def.lhs) {
                let index = u16::try_from(nonterminals.len())
                    .map_err(|_| GrammarError::TooLarge("nonterminals"))?;
                nonterminal_index.insert(def.lhs, index);
                nonterminals.push(def.lhs.to_owned());
            }
        }

        let start_index = *nonterminal_index
            .get(start)
            .ok_or_else(|| GrammarError::MissingStart(start.to_owned()))?;

        let mut productions = Vec::with_capacity(rules.len() + 1);
        productions.push(Production {
            lhs: 0,
            rhs: vec![Symbol::Nonterminal(start_index)],
            act: Act::Nothing,
            level: SourceLevel::JDK1_1,
        });

        let mut seen: FxHashSet<(&str, &str)> = FxHashSet::default();
        for def in rules {
            if !seen.insert((def.lhs, def.rhs)) {
                return Err(GrammarError::DuplicateRule(format!(
                    "{} ::= {}",
                    def.lhs, def.rhs
                )));
            }
            let rhs = def
                .rhs
                .split_whitespace()
                .map(|name| {
                    if let Some(&t) = terminal_index.get(name) {
                        Ok(Symbol::Terminal(t))
                    } else if let Some(&n) = nonterminal_index.get(name) {
                        Ok(Symbol::Nonterminal(n))
                    } else {
                        Err(GrammarError::UndefinedSymbol {
                            symbol: name.to_owned(),
                            lhs: def.lhs.to_owned(),
                        })
                    }
                })
                .collect::<Result<Vec<_>, _>>()?;
            if rhs.len() > usize::from(u8::MAX) {
                return Err(GrammarError::TooLarge("rule length"));
            }
            productions.push(Production {
                lhs: nonterminal_index[def.lhs],
                rhs,
                act: def.act,
                level: def.level,
            });
        }

        let mut by_lhs = vec![Vec::new(); nonterminals.len()];
        for (index, production) in productions.iter().enumerate() {
            by_lhs[usize::from(production.lhs)].push(index as u16);
        }

        Ok(Grammar {
            terminals,
            nonterminals,
            productions,
            eof: eof as u16,
            by_lhs,
        })
    }

    /// Productions whose left side is `nonterminal`.
    #[inline]
    pub fn productions_of(&self, nonterminal: u16) -> &[u16] {
        &self.by_lhs[usize::from(nonterminal)]
    }

    pub fn nonterminal(&self, name: &str) -> Option<u16> {
        self.nonterminals
            .iter()
            .position(|n| n == name)
            .map(|i| i as u16)
    }

    pub fn terminal(&self, name: &str) -> Option<u16> {
        self.terminals
            .iter()
            .position(|n| n == name)
            .map(|i| i as u16)
    }

    pub fn symbol_name(&self, symbol: Symbol) -> &str {
        match symbol {
            Symbol::Terminal(t) => &self.terminals[usize::from(t)],
            Symbol::Nonterminal(n) => &self.nonterminals[usize::from(n)],
        }
    }

    /// `Lhs ::= a b c` rendering of a production.
    pub fn render(&self, rule: u16) -> String {
        let production = &self.productions[usize::from(rule)];
        let mut out = format!("{} ::=", self.nonterminals[usize::from(production.lhs)]);
        for symbol in &production.rhs {
            let _ = write!(out, " {}", self.symbol_name(*symbol));
        }
        out
    }
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]

    use super::*;
    use crate::rules::RuleDef;

    fn def(lhs: &'static str, rhs: &'static str) -> RuleDef {
        RuleDef {
            lhs,
            rhs,
            act: Act::Nothing,
            level: SourceLevel::JDK1_1,
        }
    }

    fn terminals() -> Vec<String> {
        ["a", "b", "EOF"].iter().map(|s| (*s).to_owned()).collect()
    }

    #[test]
    fn resolves_symbols_and_augments() {
        let rules = [def("S", "a T"), def("T", "b"), def("T", "")];
        let grammar = Grammar::new(terminals(), 2, &rules, "S").unwrap();
        assert_eq!(grammar.nonterminals, vec!["$accept", "S", "T"]);
        assert_eq!(grammar.productions.len(), 4);
        assert_eq!(grammar.render(0), "$accept ::= S");
        assert_eq!(grammar.render(1), "S ::= a T");
        assert_eq!(grammar.productions_of(2), &[2, 3]);
    }

    #[test]
    fn rejects_undefined_symbols() {
        let rules = [def("S", "a Missing")];
        let err = Grammar::new(terminals(), 2, &rules, "S").unwrap_err();
        assert_eq!(
            err,
            GrammarError::UndefinedSymbol {
                symbol: "Missing".to_owned(),
                lhs: "S".to_owned()
            }
        );
    }

    #[test]
    fn rejects_duplicates_and_terminal_lhs() {
        let dup = [def("S", "a"), def("S", "a")];
        assert!(matches!(
            Grammar::new(terminals(), 2, &dup, "S"),
            Err(GrammarError::DuplicateRule(_))
        ));
        let lhs = [def("a", "b")];
        assert!(matches!(
            Grammar::new(terminals(), 2, &lhs, "a"),
            Err(GrammarError::TerminalOnLeft(_))
        ));
    }

    #[test]
    fn java_grammar_resolves() {
        let grammar = Grammar::java().unwrap();
        assert_eq!(grammar.terminals.len(), NUM_TERMINALS);
        assert!(grammar.nonterminal("CompilationUnit").is_some());
        assert!(grammar.nonterminal("RecoveryHeader").is_some());
        assert_eq!(
            grammar.terminal("<unit>"),
            Some(Entry::CompilationUnit.terminal() as u16)
        );
    }
}
