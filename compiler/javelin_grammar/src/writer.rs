//! Flattening the automaton into the big-endian table resources.
//!
//! | resource       | element | content                                   |
//! |----------------|---------|-------------------------------------------|
//! | `parser1.rsc`  | `u16`   | action table, `states × terminals`        |
//! | `parser2.rsc`  | `u16`   | goto table, `states × nonterminals`       |
//! | `parser3.rsc`  | `u8`    | rule right-hand-side length               |
//! | `parser4.rsc`  | `u16`   | rule left-hand-side nonterminal           |
//! | `parser5.rsc`  | `u16`   | rule action tag                           |
//! | `parser6.rsc`  | `u16`   | terminals on the rule's right-hand side   |
//! | `parser7.rsc`  | `u64`   | lowest source level of the rule           |
//! | `parser8.rsc`  | `u16`   | recovery template bits per terminal       |
//! | `parser9.rsc`  | `u16`   | terminals, nonterminals, states, rules    |
//! | `names.rsc`    | `u8`    | symbol names, newline separated           |

use std::fs;
use std::io;
use std::path::Path;

use crate::encoding::ActionEncoding;
use crate::grammar::{Grammar, GrammarError};
use crate::lalr::{Automaton, Conflict};
use crate::RecoveryTemplate;

pub const RESOURCE_NAMES: [&str; 10] = [
    "parser1.rsc",
    "parser2.rsc",
    "parser3.rsc",
    "parser4.rsc",
    "parser5.rsc",
    "parser6.rsc",
    "parser7.rsc",
    "parser8.rsc",
    "parser9.rsc",
    "names.rsc",
];

/// Everything the runtime parser needs, in table form.
pub struct ParseTables {
    pub terminals: usize,
    pub nonterminals: usize,
    pub states: usize,
    /// Rule count including the augmented rule 0.
    pub rules: usize,
    pub action: Vec<u16>,
    pub goto: Vec<u16>,
    pub rule_len: Vec<u8>,
    pub lhs: Vec<u16>,
    pub act: Vec<u16>,
    pub rhs_terminals: Vec<u16>,
    pub level: Vec<u64>,
    pub templates: Vec<u16>,
    pub names: Vec<String>,
    pub conflicts: Vec<Conflict>,
}

impl ParseTables {
    pub fn new(grammar: &Grammar, automaton: &Automaton) -> Result<Self, GrammarError> {
        let terminals = grammar.terminals.len();
        let nonterminals = grammar.nonterminals.len();
        let states = automaton.states;
        let rules = grammar.productions.len();
        let encoding =
            ActionEncoding::new(rules, states).ok_or(GrammarError::TooLarge("action codes"))?;

        let mut action = Vec::with_capacity(states * terminals);
        let mut goto = Vec::with_capacity(states * nonterminals);
        for state in 0..states {
            action.extend((0..terminals).map(|t| encoding.encode(automaton.action(state, t))));
            goto.extend((0..nonterminals).map(|n| automaton.goto(state, n).unwrap_or(0)));
        }

        let header = grammar.nonterminal("RecoveryHeader");
        let statement = grammar.nonterminal("RecoveryStatement");
        let templates = (0..terminals)
            .map(|t| {
                let mut template = RecoveryTemplate::empty();
                if header.is_some_and(|n| automaton.first.first(n).contains(t)) {
                    template |= RecoveryTemplate::HEADER;
                }
                if statement.is_some_and(|n| automaton.first.first(n).contains(t)) {
                    template |= RecoveryTemplate::STATEMENT;
                }
                template.bits()
            })
            .collect();

        let productions = &grammar.productions;
        Ok(ParseTables {
            terminals,
            nonterminals,
            states,
            rules,
            action,
            goto,
            rule_len: productions.iter().map(|p| p.rhs.len() as u8).collect(),
            lhs: productions.iter().map(|p| p.lhs).collect(),
            act: productions.iter().map(|p| p.act.tag()).collect(),
            rhs_terminals: productions
                .iter()
                .map(|p| p.terminal_count() as u16)
                .collect(),
            level: productions.iter().map(|p| p.level.0).collect(),
            templates,
            names: grammar
                .terminals
                .iter()
                .chain(&grammar.nonterminals)
                .cloned()
                .collect(),
            conflicts: automaton.conflicts.clone(),
        })
    }

    pub fn encoding(&self) -> Option<ActionEncoding> {
        ActionEncoding::new(self.rules, self.states)
    }

    /// Serialized resources, in [`RESOURCE_NAMES`] order.
    pub fn resources(&self) -> Vec<(&'static str, Vec<u8>)> {
        let header = [self.terminals, self.nonterminals, self.states, self.rules]
            .map(|n| n as u16);
        let mut names = self.names.join("\n").into_bytes();
        names.push(b'\n');
        let blobs = [
            be_u16(&self.action),
            be_u16(&self.goto),
            self.rule_len.clone(),
            be_u16(&self.lhs),
            be_u16(&self.act),
            be_u16(&self.rhs_terminals),
            self.level.iter().flat_map(|v| v.to_be_bytes()).collect(),
            be_u16(&self.templates),
            be_u16(&header),
            names,
        ];
        RESOURCE_NAMES.into_iter().zip(blobs).collect()
    }

    pub fn write_to(&self, dir: &Path) -> io::Result<()> {
        fs::create_dir_all(dir)?;
        for (name, bytes) in self.resources() {
            fs::write(dir.join(name), bytes)?;
        }
        Ok(())
    }
}

fn be_u16(values: &[u16]) -> Vec<u8> {
    values.iter().flat_map(|v| v.to_be_bytes()).collect()
}
