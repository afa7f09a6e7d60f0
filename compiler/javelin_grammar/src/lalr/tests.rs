#![allow(clippy::unwrap_used)]

use pretty_assertions::assert_eq;

use super::{build, Action, Automaton, ConflictKind};
use crate::grammar::Grammar;
use crate::rules::{rule, RuleDef};
use crate::Act;

fn terminals(names: &[&str]) -> Vec<String> {
    names.iter().map(|s| (*s).to_owned()).collect()
}

fn expression_grammar() -> Grammar {
    let rules = [
        rule("E", "E + T", Act::Nothing),
        rule("E", "T", Act::Nothing),
        rule("T", "T * F", Act::Nothing),
        rule("T", "F", Act::Nothing),
        rule("F", "( E )", Act::Nothing),
        rule("F", "id", Act::Nothing),
    ];
    Grammar::new(terminals(&["id", "+", "*", "(", ")", "EOF"]), 5, &rules, "E").unwrap()
}

/// Drive the automaton over `input`, returning the rules reduced in order or
/// the position of the offending token.
fn run(grammar: &Grammar, automaton: &Automaton, input: &[&str]) -> Result<Vec<u16>, usize> {
    let tokens: Vec<usize> = input
        .iter()
        .map(|name| usize::from(grammar.terminal(name).unwrap()))
        .chain(std::iter::once(usize::from(grammar.eof)))
        .collect();
    let mut stack = vec![0usize];
    let mut reductions = Vec::new();
    let mut pos = 0;

    let reduce = |stack: &mut Vec<usize>, reductions: &mut Vec<u16>, rule: u16| {
        let production = &grammar.productions[usize::from(rule)];
        stack.truncate(stack.len() - production.rhs.len());
        let top = *stack.last().unwrap();
        let target = automaton.goto(top, usize::from(production.lhs)).unwrap();
        stack.push(usize::from(target));
        reductions.push(rule);
    };

    loop {
        let state = *stack.last().unwrap();
        match automaton.action(state, tokens[pos]) {
            Action::Shift(target) => {
                stack.push(usize::from(target));
                pos += 1;
            }
            Action::ShiftReduce(rule) => {
                stack.push(usize::MAX);
                pos += 1;
                reduce(&mut stack, &mut reductions, rule);
            }
            Action::Reduce(rule) => reduce(&mut stack, &mut reductions, rule),
            Action::Accept => return Ok(reductions),
            Action::Error => return Err(pos),
        }
    }
}

#[test]
fn expression_grammar_is_conflict_free() {
    let grammar = expression_grammar();
    let automaton = build(&grammar).unwrap();
    assert!(automaton.conflicts.is_empty(), "{:?}", automaton.conflicts);
    // Textbook SLR/LALR automaton for this grammar has 12 states.
    assert_eq!(automaton.states, 12);
}

#[test]
fn parses_with_precedence() {
    let grammar = expression_grammar();
    let automaton = build(&grammar).unwrap();
    // id + id * id: the multiplication reduces before the addition.
    let reductions = run(&grammar, &automaton, &["id", "+", "id", "*", "id"]).unwrap();
    assert_eq!(reductions, vec![6, 4, 2, 6, 4, 6, 3, 1]);
}

#[test]
fn reports_error_position() {
    let grammar = expression_grammar();
    let automaton = build(&grammar).unwrap();
    assert_eq!(run(&grammar, &automaton, &["id", "+", "+", "id"]), Err(2));
    assert_eq!(run(&grammar, &automaton, &["(", "id"]), Err(2));
}

#[test]
fn single_item_states_fuse_into_shift() {
    let grammar = expression_grammar();
    let automaton = build(&grammar).unwrap();
    let id = usize::from(grammar.terminal("id").unwrap());
    assert_eq!(automaton.action(0, id), Action::ShiftReduce(6));
}

#[test]
fn nullable_rules_reduce_on_lookahead() {
    let rules = [
        rule("S", "A b", Act::Nothing),
        rule("A", "", Act::Nothing),
        rule("A", "a", Act::Nothing),
    ];
    let grammar = Grammar::new(terminals(&["a", "b", "EOF"]), 2, &rules, "S").unwrap();
    let automaton = build(&grammar).unwrap();
    assert!(automaton.conflicts.is_empty());
    assert_eq!(run(&grammar, &automaton, &["b"]), Ok(vec![2, 1]));
    assert_eq!(run(&grammar, &automaton, &["a", "b"]), Ok(vec![3, 1]));
    assert_eq!(run(&grammar, &automaton, &["a"]), Err(1));
}

#[test]
fn dangling_else_shifts() {
    let rules: [RuleDef; 3] = [
        rule("S", "if S else S", Act::Nothing),
        rule("S", "if S", Act::Nothing),
        rule("S", "x", Act::Nothing),
    ];
    let grammar = Grammar::new(terminals(&["if", "else", "x", "EOF"]), 3, &rules, "S").unwrap();
    let automaton = build(&grammar).unwrap();
    assert_eq!(automaton.conflicts.len(), 1);
    assert!(matches!(
        automaton.conflicts[0].kind,
        ConflictKind::ShiftReduce { .. }
    ));
    // The else binds to the inner if: rule 1 reduces the inner `if x else x`.
    let reductions = run(&grammar, &automaton, &["if", "if", "x", "else", "x"]).unwrap();
    assert_eq!(reductions, vec![3, 3, 1, 2]);
}

#[test]
fn reduce_reduce_keeps_earlier_rule() {
    let rules = [
        rule("S", "A", Act::Nothing),
        rule("S", "B", Act::Nothing),
        rule("A", "x", Act::Nothing),
        rule("B", "x", Act::Nothing),
    ];
    let grammar = Grammar::new(terminals(&["x", "EOF"]), 1, &rules, "S").unwrap();
    let automaton = build(&grammar).unwrap();
    assert_eq!(automaton.conflicts.len(), 1);
    assert!(matches!(
        &automaton.conflicts[0].kind,
        ConflictKind::ReduceReduce { kept, .. } if kept == "A ::= x"
    ));
    assert_eq!(run(&grammar, &automaton, &["x"]), Ok(vec![3, 1]));
}
