//! Fatal parse errors.
//!
//! Syntax errors never surface here; they are reported as problems and
//! repaired. `ParseAbort` means the parser's own invariants broke and the
//! current entry point cannot continue.

use thiserror::Error;

use crate::stacks::StackError;

#[derive(Copy, Clone, Debug, Error, PartialEq, Eq)]
pub enum ParseAbort {
    #[error(transparent)]
    Stack(#[from] StackError),
    #[error("rule {rule} expected {expected} on the ast stack")]
    UnexpectedItem { rule: u16, expected: &'static str },
    #[error("rule {rule} is missing an expected terminal")]
    BadToken { rule: u16 },
    #[error("rule {rule} left an unbalanced footprint on the stacks")]
    Footprint { rule: u16 },
    #[error("no goto from state {state} on nonterminal {nonterminal}")]
    MissingGoto { state: u16, nonterminal: u16 },
    #[error("state stack emptied while reducing rule {rule}")]
    StateUnderflow { rule: u16 },
    #[error("accepted without a result for the goal")]
    MissingResult,
}
