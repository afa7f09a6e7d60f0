//! Immutable grammar tables, decoded from the big-endian resources the
//! build script generates.
//!
//! One `GrammarTables` value is loaded at startup and shared by reference
//! with every parser session; nothing in it changes afterwards.

use javelin_grammar::{Act, Action, ActionEncoding, RecoveryTemplate, SourceLevel, NUM_TERMINALS};
use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum TableError {
    #[error("resource `{resource}` is {len} bytes, not a multiple of {width}")]
    BadLength {
        resource: &'static str,
        len: usize,
        width: usize,
    },
    #[error("resource `{resource}` holds {found} entries, the header implies {expected}")]
    DimensionMismatch {
        resource: &'static str,
        expected: usize,
        found: usize,
    },
    #[error("tables were built for {found} terminals, this parser knows {expected}")]
    TerminalCount { expected: usize, found: usize },
    #[error("rule {rule} carries unknown action tag {tag}")]
    UnknownAct { rule: usize, tag: u16 },
    #[error("symbol names are not valid UTF-8")]
    BadNames,
    #[error("action codes do not fit the table encoding")]
    Encoding,
}

const RESOURCES: [&[u8]; 10] = [
    include_bytes!(concat!(env!("OUT_DIR"), "/parser1.rsc")),
    include_bytes!(concat!(env!("OUT_DIR"), "/parser2.rsc")),
    include_bytes!(concat!(env!("OUT_DIR"), "/parser3.rsc")),
    include_bytes!(concat!(env!("OUT_DIR"), "/parser4.rsc")),
    include_bytes!(concat!(env!("OUT_DIR"), "/parser5.rsc")),
    include_bytes!(concat!(env!("OUT_DIR"), "/parser6.rsc")),
    include_bytes!(concat!(env!("OUT_DIR"), "/parser7.rsc")),
    include_bytes!(concat!(env!("OUT_DIR"), "/parser8.rsc")),
    include_bytes!(concat!(env!("OUT_DIR"), "/parser9.rsc")),
    include_bytes!(concat!(env!("OUT_DIR"), "/names.rsc")),
];

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct GrammarTables {
    terminals: usize,
    nonterminals: usize,
    states: usize,
    rules: usize,
    encoding: ActionEncoding,
    action: Vec<u16>,
    goto: Vec<u16>,
    rule_len: Vec<u8>,
    lhs: Vec<u16>,
    act: Vec<Act>,
    rhs_terminals: Vec<u16>,
    level: Vec<SourceLevel>,
    templates: Vec<RecoveryTemplate>,
    names: Vec<String>,
}

fn words_u16(resource: &'static str, bytes: &[u8]) -> Result<Vec<u16>, TableError> {
    if bytes.len() % 2 != 0 {
        return Err(TableError::BadLength {
            resource,
            len: bytes.len(),
            width: 2,
        });
    }
    Ok(bytes
        .chunks_exact(2)
        .map(|c| u16::from_be_bytes([c[0], c[1]]))
        .collect())
}

fn words_u64(resource: &'static str, bytes: &[u8]) -> Result<Vec<u64>, TableError> {
    if bytes.len() % 8 != 0 {
        return Err(TableError::BadLength {
            resource,
            len: bytes.len(),
            width: 8,
        });
    }
    Ok(bytes
        .chunks_exact(8)
        .map(|c| u64::from_be_bytes([c[0], c[1], c[2], c[3], c[4], c[5], c[6], c[7]]))
        .collect())
}

fn expect_len<T>(resource: &'static str, values: &[T], expected: usize) -> Result<(), TableError> {
    if values.len() == expected {
        Ok(())
    } else {
        Err(TableError::DimensionMismatch {
            resource,
            expected,
            found: values.len(),
        })
    }
}

impl GrammarTables {
    /// Decode the tables embedded at build time.
    pub fn load() -> Result<Self, TableError> {
        Self::from_resources(RESOURCES)
    }

    /// Decode tables from raw resources in `parser1` .. `parser9`, `names`
    /// order.
    pub fn from_resources(resources: [&[u8]; 10]) -> Result<Self, TableError> {
        let [action, goto, rule_len, lhs, act, rhs_terminals, level, templates, header, names] =
            resources;

        let header = words_u16("parser9.rsc", header)?;
        expect_len("parser9.rsc", &header, 4)?;
        let [terminals, nonterminals, states, rules] =
            [header[0], header[1], header[2], header[3]].map(usize::from);
        if terminals != NUM_TERMINALS {
            return Err(TableError::TerminalCount {
                expected: NUM_TERMINALS,
                found: terminals,
            });
        }

        let action = words_u16("parser1.rsc", action)?;
        expect_len("parser1.rsc", &action, states * terminals)?;
        let goto = words_u16("parser2.rsc", goto)?;
        expect_len("parser2.rsc", &goto, states * nonterminals)?;
        let rule_len = rule_len.to_vec();
        expect_len("parser3.rsc", &rule_len, rules)?;
        let lhs = words_u16("parser4.rsc", lhs)?;
        expect_len("parser4.rsc", &lhs, rules)?;
        let act = words_u16("parser5.rsc", act)?
            .into_iter()
            .enumerate()
            .map(|(rule, tag)| Act::from_tag(tag).ok_or(TableError::UnknownAct { rule, tag }))
            .collect::<Result<Vec<_>, _>>()?;
        expect_len("parser5.rsc", &act, rules)?;
        let rhs_terminals = words_u16("parser6.rsc", rhs_terminals)?;
        expect_len("parser6.rsc", &rhs_terminals, rules)?;
        let level: Vec<SourceLevel> = words_u64("parser7.rsc", level)?
            .into_iter()
            .map(SourceLevel)
            .collect();
        expect_len("parser7.rsc", &level, rules)?;
        let templates: Vec<RecoveryTemplate> = words_u16("parser8.rsc", templates)?
            .into_iter()
            .map(RecoveryTemplate::from_bits_truncate)
            .collect();
        expect_len("parser8.rsc", &templates, terminals)?;

        let names: Vec<String> = std::str::from_utf8(names)
            .map_err(|_| TableError::BadNames)?
            .lines()
            .map(str::to_owned)
            .collect();
        expect_len("names.rsc", &names, terminals + nonterminals)?;

        let encoding = ActionEncoding::new(rules, states).ok_or(TableError::Encoding)?;

        Ok(GrammarTables {
            terminals,
            nonterminals,
            states,
            rules,
            encoding,
            action,
            goto,
            rule_len,
            lhs,
            act,
            rhs_terminals,
            level,
            templates,
            names,
        })
    }

    #[inline]
    pub fn action(&self, state: u16, terminal: usize) -> Action {
        self.encoding
            .decode(self.action[usize::from(state) * self.terminals + terminal])
    }

    /// State reached from `state` after reducing to `nonterminal`.
    #[inline]
    pub fn goto(&self, state: u16, nonterminal: u16) -> Option<u16> {
        match self.goto[usize::from(state) * self.nonterminals + usize::from(nonterminal)] {
            0 => None,
            target => Some(target),
        }
    }

    #[inline]
    pub fn rule_len(&self, rule: u16) -> usize {
        usize::from(self.rule_len[usize::from(rule)])
    }

    #[inline]
    pub fn lhs(&self, rule: u16) -> u16 {
        self.lhs[usize::from(rule)]
    }

    #[inline]
    pub fn act(&self, rule: u16) -> Act {
        self.act[usize::from(rule)]
    }

    #[inline]
    pub fn rhs_terminals(&self, rule: u16) -> usize {
        usize::from(self.rhs_terminals[usize::from(rule)])
    }

    #[inline]
    pub fn level(&self, rule: u16) -> SourceLevel {
        self.level[usize::from(rule)]
    }

    #[inline]
    pub fn template(&self, terminal: usize) -> RecoveryTemplate {
        self.templates[terminal]
    }

    /// Terminals first, then nonterminals.
    pub fn symbol_name(&self, symbol: usize) -> Option<&str> {
        self.names.get(symbol).map(String::as_str)
    }

    pub fn nonterminal_name(&self, nonterminal: u16) -> Option<&str> {
        self.symbol_name(self.terminals + usize::from(nonterminal))
    }

    pub fn state_count(&self) -> usize {
        self.states
    }

    /// Rule count, including the augmented start rule.
    pub fn rule_count(&self) -> usize {
        self.rules
    }

    pub fn terminal_count(&self) -> usize {
        self.terminals
    }

    pub fn nonterminal_count(&self) -> usize {
        self.nonterminals
    }
}

#[cfg(test)]
mod tests;
