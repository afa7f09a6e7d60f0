//! Packing of parse actions into one `u16` per table cell.
//!
//! With `R` rules (not counting the augmented rule 0) and `S` states:
//!
//! | value                | meaning                       |
//! |----------------------|-------------------------------|
//! | `0`                  | error                         |
//! | `1 ..= R`            | reduce by rule                |
//! | `R + 1 + s`          | shift to state `s`            |
//! | `R + 1 + S`          | error                         |
//! | `R + 2 + S`          | accept                        |
//! | `R + 2 + S + r`      | shift, then reduce by rule `r`|

use crate::lalr::Action;

#[derive(Copy, Clone, Eq, PartialEq, Debug)]
pub struct ActionEncoding {
    rules: u16,
    states: u16,
}

impl ActionEncoding {
    /// `rules` counts the augmented rule. Fails when the largest code would
    /// not fit in 16 bits.
    pub fn new(rules: usize, states: usize) -> Option<Self> {
        let reducible = rules.checked_sub(1)?;
        let largest = 2 * reducible + states + 2;
        if largest > usize::from(u16::MAX) {
            return None;
        }
        Some(ActionEncoding {
            rules: reducible as u16,
            states: states as u16,
        })
    }

    #[inline]
    pub const fn error(self) -> u16 {
        self.rules + 1 + self.states
    }

    #[inline]
    pub const fn accept(self) -> u16 {
        self.error() + 1
    }

    pub fn encode(self, action: Action) -> u16 {
        match action {
            Action::Error => 0,
            Action::Reduce(rule) => rule,
            Action::Shift(state) => self.rules + 1 + state,
            Action::Accept => self.accept(),
            Action::ShiftReduce(rule) => self.accept() + rule,
        }
    }

    #[inline]
    pub fn decode(self, code: u16) -> Action {
        if code == 0 {
            Action::Error
        } else if code <= self.rules {
            Action::Reduce(code)
        } else if code < self.error() {
            Action::Shift(code - self.rules - 1)
        } else if code == self.error() {
            Action::Error
        } else if code == self.accept() {
            Action::Accept
        } else {
            Action::ShiftReduce(code - self.accept())
        }
    }
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]

    use super::ActionEncoding;
    use crate::lalr::Action;

    #[test]
    fn codes_partition_the_range() {
        let enc = ActionEncoding::new(11, 20).unwrap();
        assert_eq!(enc.encode(Action::Reduce(1)), 1);
        assert_eq!(enc.encode(Action::Reduce(10)), 10);
        assert_eq!(enc.encode(Action::Shift(0)), 11);
        assert_eq!(enc.error(), 31);
        assert_eq!(enc.accept(), 32);
        assert_eq!(enc.encode(Action::ShiftReduce(3)), 35);
        for action in [
            Action::Reduce(7),
            Action::Shift(19),
            Action::ShiftReduce(10),
            Action::Accept,
        ] {
            assert_eq!(enc.decode(enc.encode(action)), action);
        }
        assert_eq!(enc.decode(0), Action::Error);
        assert_eq!(enc.decode(enc.error()), Action::Error);
    }

    #[test]
    fn rejects_oversized_tables() {
        assert!(ActionEncoding::new(40_000, 10).is_none());
        assert!(ActionEncoding::new(0, 10).is_none());
    }
}
