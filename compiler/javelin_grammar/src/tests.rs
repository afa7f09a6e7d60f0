#![allow(clippy::unwrap_used)]

use std::sync::OnceLock;

use pretty_assertions::assert_eq;

use crate::rules::RULES;
use crate::{
    generate, Act, Action, Entry, ParseTables, RecoveryTemplate, SourceLevel, RESOURCE_NAMES,
};

fn tables() -> &'static ParseTables {
    static TABLES: OnceLock<ParseTables> = OnceLock::new();
    TABLES.get_or_init(|| generate().unwrap())
}

fn terminal(tables: &ParseTables, name: &str) -> usize {
    tables.names[..tables.terminals]
        .iter()
        .position(|n| n == name)
        .unwrap()
}

#[test]
fn java_tables_generate() {
    let tables = tables();
    assert_eq!(tables.rules, RULES.len() + 1);
    assert_eq!(tables.action.len(), tables.states * tables.terminals);
    assert_eq!(tables.goto.len(), tables.states * tables.nonterminals);
    assert!(tables.states > 100);
}

#[test]
fn every_entry_marker_shifts_from_the_start_state() {
    let tables = tables();
    let encoding = tables.encoding().unwrap();
    for entry in Entry::ALL {
        let code = tables.action[entry.terminal()];
        assert!(
            matches!(encoding.decode(code), Action::Shift(_)),
            "{entry:?} does not shift"
        );
    }
}

#[test]
fn rule_metadata_follows_the_rule_table() {
    let tables = tables();
    assert_eq!(tables.act[0], Act::Nothing.tag());
    for (index, def) in RULES.iter().enumerate() {
        assert_eq!(tables.act[index + 1], def.act.tag());
        assert_eq!(tables.level[index + 1], def.level.0);
        let len = def.rhs.split_whitespace().count();
        assert_eq!(usize::from(tables.rule_len[index + 1]), len);
    }
    let asserts = RULES
        .iter()
        .filter(|def| def.act == Act::Assert)
        .map(|def| def.level);
    for level in asserts {
        assert_eq!(level, SourceLevel::JDK1_4);
    }
}

#[test]
fn recovery_templates_mark_restart_points() {
    let tables = tables();
    let template = |name: &str| {
        RecoveryTemplate::from_bits_truncate(tables.templates[terminal(tables, name)])
    };
    assert_eq!(
        template("{"),
        RecoveryTemplate::HEADER | RecoveryTemplate::STATEMENT
    );
    assert_eq!(
        template("class"),
        RecoveryTemplate::HEADER | RecoveryTemplate::STATEMENT
    );
    assert_eq!(template("import"), RecoveryTemplate::HEADER);
    assert_eq!(template("return"), RecoveryTemplate::STATEMENT);
    assert_eq!(template(")"), RecoveryTemplate::empty());
}

#[test]
fn resources_use_declared_widths() {
    let tables = tables();
    let resources = tables.resources();
    let names: Vec<&str> = resources.iter().map(|(name, _)| *name).collect();
    assert_eq!(names, RESOURCE_NAMES.to_vec());

    let size = |name: &str| {
        resources
            .iter()
            .find(|(n, _)| *n == name)
            .map(|(_, bytes)| bytes.len())
            .unwrap()
    };
    assert_eq!(size("parser1.rsc"), tables.action.len() * 2);
    assert_eq!(size("parser2.rsc"), tables.goto.len() * 2);
    assert_eq!(size("parser3.rsc"), tables.rules);
    assert_eq!(size("parser4.rsc"), tables.rules * 2);
    assert_eq!(size("parser7.rsc"), tables.rules * 8);
    assert_eq!(size("parser8.rsc"), tables.terminals * 2);
    assert_eq!(size("parser9.rsc"), 8);

    let header = &resources[8].1;
    assert_eq!(
        u16::from_be_bytes([header[4], header[5]]) as usize,
        tables.states
    );
    let names = String::from_utf8(resources[9].1.clone()).unwrap();
    assert_eq!(names.lines().count(), tables.terminals + tables.nonterminals);
    assert_eq!(names.lines().next(), Some("Identifier"));
}
