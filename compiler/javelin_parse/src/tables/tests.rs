#![allow(clippy::unwrap_used)]

use javelin_grammar::{Action, Entry, RecoveryTemplate, NUM_TERMINALS};
use pretty_assertions::assert_eq;

use super::{GrammarTables, TableError, RESOURCES};

fn terminal(tables: &GrammarTables, name: &str) -> usize {
    (0..tables.terminal_count())
        .find(|&t| tables.symbol_name(t) == Some(name))
        .unwrap()
}

#[test]
fn embedded_tables_load() {
    let tables = GrammarTables::load().unwrap();
    assert_eq!(tables.terminal_count(), NUM_TERMINALS);
    assert!(tables.state_count() > 1);
    assert!(tables.rule_count() > Entry::ALL.len());
    assert!(tables.nonterminal_count() > 0);
}

#[test]
fn decoding_is_deterministic() {
    assert_eq!(GrammarTables::load().unwrap(), GrammarTables::load().unwrap());
}

#[test]
fn every_entry_marker_shifts_from_the_start_state() {
    let tables = GrammarTables::load().unwrap();
    for entry in Entry::ALL {
        assert!(
            matches!(tables.action(0, entry.terminal()), Action::Shift(_)),
            "{entry:?} has no shift from state 0"
        );
    }
}

#[test]
fn recovery_templates_follow_keywords() {
    let tables = GrammarTables::load().unwrap();
    assert_eq!(
        tables.template(terminal(&tables, "import")),
        RecoveryTemplate::HEADER
    );
    assert_eq!(
        tables.template(terminal(&tables, "return")),
        RecoveryTemplate::STATEMENT
    );
    assert!(tables.template(terminal(&tables, ")")).is_empty());
}

#[test]
fn odd_length_resource_is_rejected() {
    let mut resources = RESOURCES;
    let truncated = &RESOURCES[0][..RESOURCES[0].len() - 1];
    resources[0] = truncated;
    assert_eq!(
        GrammarTables::from_resources(resources),
        Err(TableError::BadLength {
            resource: "parser1.rsc",
            len: truncated.len(),
            width: 2,
        })
    );
}

#[test]
fn short_rule_table_is_rejected() {
    let tables = GrammarTables::load().unwrap();
    let mut resources = RESOURCES;
    resources[3] = &RESOURCES[3][..RESOURCES[3].len() - 2];
    assert_eq!(
        GrammarTables::from_resources(resources),
        Err(TableError::DimensionMismatch {
            resource: "parser4.rsc",
            expected: tables.rule_count(),
            found: tables.rule_count() - 1,
        })
    );
}

#[test]
fn foreign_terminal_count_is_rejected() {
    let mut header = RESOURCES[8].to_vec();
    let found = u16::from_be_bytes([header[0], header[1]]) + 1;
    header[..2].copy_from_slice(&found.to_be_bytes());
    let mut resources = RESOURCES;
    resources[8] = &header;
    assert_eq!(
        GrammarTables::from_resources(resources),
        Err(TableError::TerminalCount {
            expected: NUM_TERMINALS,
            found: usize::from(found),
        })
    );
}

#[test]
fn invalid_names_are_rejected() {
    let mut resources = RESOURCES;
    resources[9] = &[0xff, 0xfe];
    assert_eq!(
        GrammarTables::from_resources(resources),
        Err(TableError::BadNames)
    );
}
