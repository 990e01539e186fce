// Copyright 2018 Steven Bosnick
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE-2.0 or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms

//! Defines the `Dfa` engine that decides membership for a deterministic
//! finite automaton.

use std::fmt::Debug;
use std::io::Read;

use definition::Definition;
use error::Result;
use input::decode_utf8;
use symbol::Symbol;

/// The acceptance engine for a deterministic finite automaton.
///
/// The `Dfa` follows exactly one path through the transitions of its
/// `Definition`. If more than one transition leaves the current state on the
/// current symbol, the one declared first is taken.
#[derive(Clone, Debug)]
pub struct Dfa<S: Ord, A: Ord> {
    definition: Definition<S, A>,
}

impl<S, A> Dfa<S, A>
where
    S: Ord + Clone + Debug,
    A: Symbol,
{
    /// Create a new `Dfa` that owns `definition`.
    pub fn new(definition: Definition<S, A>) -> Dfa<S, A> {
        Dfa { definition }
    }

    /// Gets a reference to the `Definition` of the `Dfa`.
    pub fn definition(&self) -> &Definition<S, A> {
        &self.definition
    }

    /// Decide whether the `Dfa` accepts `input`.
    ///
    /// The empty input is accepted if and only if the start state is
    /// accepting. A symbol with no transition from the current state rejects
    /// the input outright.
    pub fn accepts<I>(&self, input: I) -> bool
    where
        I: IntoIterator<Item = A>,
    {
        let mut current = self.definition.start();

        for symbol in input {
            match self.step(current, &symbol) {
                Some(next) => current = next,
                None => {
                    debug!("rejected: no transition from {:?} on {:?}", current, symbol);
                    return false;
                }
            }
        }

        let accepted = self.definition.is_accepting(current);
        debug!("input ended in {:?}, accepted: {}", current, accepted);
        accepted
    }

    fn step<'a>(&'a self, state: &'a S, symbol: &A) -> Option<&'a S> {
        self.definition
            .transitions_from(state)
            .find(|t| t.symbol() == symbol)
            .map(|t| t.destination())
    }
}

impl<S> Dfa<S, char>
where
    S: Ord + Clone + Debug,
{
    /// Decide whether the `Dfa` accepts the utf8 encoded `char`s read from `reader`.
    ///
    /// # Errors
    /// Returns `Error::InvalidInput` if `reader` fails or does not produce
    /// valid utf8. The whole input is decoded before the `Dfa` takes its first
    /// step.
    pub fn accepts_utf8<R: Read>(&self, reader: R) -> Result<bool> {
        let input = decode_utf8(reader)?;
        Ok(self.accepts(input))
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use error::Error;

    fn cycle_dfa() -> Dfa<u32, char> {
        let definition = Definition::deterministic(
            vec![1, 2, 3],
            vec!['a', 'b'],
            vec![(1, 'a', 2), (2, 'b', 3), (3, 'a', 1)],
            1,
            vec![3],
        ).expect("Unexpected invalid definition.");

        Dfa::new(definition)
    }

    #[test]
    fn cycle_dfa_accepts_ab() {
        let sut = cycle_dfa();

        assert!(sut.accepts("ab".chars()));
    }

    #[test]
    fn cycle_dfa_rejects_ba_and_a() {
        let sut = cycle_dfa();

        assert!(!sut.accepts("ba".chars()));
        assert!(!sut.accepts("a".chars()));
    }

    #[test]
    fn cycle_dfa_accepts_repeated_cycle() {
        let sut = cycle_dfa();

        assert!(sut.accepts("abaab".chars()));
        assert!(!sut.accepts("abab".chars()));
    }

    #[test]
    fn empty_input_rejected_when_start_not_accepting() {
        let sut = cycle_dfa();

        assert!(!sut.accepts("".chars()));
    }

    #[test]
    fn empty_input_accepted_when_start_accepting() {
        let definition = Definition::deterministic(vec![1], vec!['a'], vec![(1, 'a', 1)], 1, vec![1])
            .expect("Unexpected invalid definition.");
        let sut = Dfa::new(definition);

        assert!(sut.accepts("".chars()));
    }

    #[test]
    fn symbol_outside_alphabet_is_rejected() {
        let sut = cycle_dfa();

        assert!(!sut.accepts("abz".chars()));
    }

    #[test]
    fn first_declared_transition_wins() {
        let definition = Definition::deterministic(
            vec![1, 2, 3],
            vec!['a'],
            vec![(1, 'a', 2), (1, 'a', 3)],
            1,
            vec![3],
        ).expect("Unexpected invalid definition.");
        let sut = Dfa::new(definition);

        assert!(!sut.accepts("a".chars()));
    }

    #[test]
    fn accepts_utf8_reads_input() {
        let sut = cycle_dfa();

        let result = sut.accepts_utf8("ab".as_bytes());

        assert_matches!(result, Ok(true));
    }

    #[test]
    fn accepts_utf8_with_invalid_bytes_is_error() {
        let sut = cycle_dfa();
        let bytes: &[u8] = &[0x61, 0xff];

        let result = sut.accepts_utf8(bytes);

        assert_matches!(result, Err(Error::InvalidInput(_)));
    }
}
