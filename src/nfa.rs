// Copyright 2018 Steven Bosnick
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE-2.0 or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms

//! Defines the `Nfa` engine that decides membership for a nondeterministic
//! finite automaton with epsilon transitions.
//!
//! The engine searches the configurations of the automaton. A configuration
//! is a position in the input paired with a current state. From a
//! configuration the automaton may take an epsilon move (same position, new
//! state) or a consuming move (next position, new state). The input is
//! accepted if some configuration at the end of the input has an accepting
//! state.
//!
//! The search is a depth-first search that tries epsilon moves before
//! consuming moves and each kind of move in declaration order. It stops at
//! the first accepting configuration. Each configuration is explored at most
//! once, which bounds the search by the number of states times the length
//! of the input and makes epsilon cycles harmless. An epsilon transition
//! from a state to itself is never a move.

use std::collections::BTreeSet;
use std::fmt::Debug;
use std::io::Read;

use definition::Definition;
use error::Result;
use input::decode_utf8;
use symbol::Symbol;

/// The choice of moves that the `Nfa` explores from each configuration.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Strategy {
    /// Explore at most two moves from each configuration: the first declared
    /// epsilon transition to a different state and the first declared
    /// transition on the next input symbol.
    ///
    /// This under-approximates the language of an automaton that has more
    /// than one transition on the same (state, symbol) pair or more than one
    /// epsilon transition leaving a state.
    FirstMatch,

    /// Explore every epsilon transition to a different state and every
    /// transition on the next input symbol. This decides the full language
    /// of the automaton.
    Exhaustive,
}

impl Default for Strategy {
    fn default() -> Self {
        Strategy::FirstMatch
    }
}

/// The acceptance engine for a nondeterministic finite automaton with
/// epsilon transitions.
#[derive(Clone, Debug)]
pub struct Nfa<S: Ord, A: Ord> {
    definition: Definition<S, A>,
    strategy: Strategy,
}

struct Moves<'a, S: 'a> {
    epsilon: Vec<&'a S>,
    consuming: Vec<&'a S>,
}

impl<S, A> Nfa<S, A>
where
    S: Ord + Clone + Debug,
    A: Symbol,
{
    /// Create a new `Nfa` that owns `definition` and searches with
    /// `Strategy::FirstMatch`.
    pub fn new(definition: Definition<S, A>) -> Nfa<S, A> {
        Self::with_strategy(definition, Strategy::default())
    }

    /// Create a new `Nfa` that owns `definition` and searches with `strategy`.
    pub fn with_strategy(definition: Definition<S, A>, strategy: Strategy) -> Nfa<S, A> {
        Nfa {
            definition,
            strategy,
        }
    }

    /// Gets a reference to the `Definition` of the `Nfa`.
    pub fn definition(&self) -> &Definition<S, A> {
        &self.definition
    }

    /// Gets the search `Strategy` of the `Nfa`.
    pub fn strategy(&self) -> Strategy {
        self.strategy
    }

    /// Decide whether the `Nfa` accepts `input`.
    ///
    /// Once the input is exhausted a configuration accepts if its state is
    /// accepting; no epsilon moves are taken after the last symbol. Epsilon
    /// transitions never consume input, so an input symbol equal to the
    /// epsilon marker has no consuming move and rejects that path.
    pub fn accepts<I>(&self, input: I) -> bool
    where
        I: IntoIterator<Item = A>,
    {
        let input: Vec<A> = input.into_iter().collect();
        let mut explored = BTreeSet::new();
        let mut stack = vec![(0, self.definition.start())];

        while let Some((position, state)) = stack.pop() {
            if !explored.insert((position, state)) {
                continue;
            }
            trace!("exploring {:?} at position {}", state, position);

            let symbol = match input.get(position) {
                Some(symbol) => symbol,
                None if self.definition.is_accepting(state) => {
                    debug!("input ended in accepting state {:?}", state);
                    return true;
                }
                None => continue,
            };

            let moves = self.moves(state, symbol);

            // Pushed in reverse so that the stack pops them in search order.
            stack.extend(moves.consuming.into_iter().rev().map(|s| (position + 1, s)));
            stack.extend(moves.epsilon.into_iter().rev().map(|s| (position, s)));
        }

        debug!(
            "rejected after exploring {} configurations",
            explored.len()
        );
        false
    }

    fn moves<'a>(&'a self, state: &'a S, symbol: &A) -> Moves<'a, S> {
        let limit = match self.strategy {
            Strategy::FirstMatch => 1,
            Strategy::Exhaustive => usize::max_value(),
        };

        let mut moves = Moves {
            epsilon: Vec::new(),
            consuming: Vec::new(),
        };

        for transition in self.definition.transitions_from(state) {
            let destination = transition.destination();

            if transition.symbol().is_epsilon() && destination != state
                && moves.epsilon.len() < limit
            {
                moves.epsilon.push(destination);
            }

            if !transition.symbol().is_epsilon() && transition.symbol() == symbol
                && moves.consuming.len() < limit
            {
                moves.consuming.push(destination);
            }
        }

        moves
    }
}

impl<S> Nfa<S, char>
where
    S: Ord + Clone + Debug,
{
    /// Decide whether the `Nfa` accepts the utf8 encoded `char`s read from `reader`.
    ///
    /// # Errors
    /// Returns `Error::InvalidInput` if `reader` fails or does not produce
    /// valid utf8. The whole input is decoded before the search begins.
    pub fn accepts_utf8<R: Read>(&self, reader: R) -> Result<bool> {
        let input = decode_utf8(reader)?;
        Ok(self.accepts(input))
    }
}
