// Copyright 2018 Steven Bosnick
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE-2.0 or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms

use std::{fmt, result};

/// The place in an automaton definition that referred to a state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Role {
    /// The source state of a transition.
    TransitionSource,
    /// The destination state of a transition.
    TransitionDestination,
    /// The start state.
    Start,
    /// One of the accepting states.
    Accepting,
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let name = match *self {
            Role::TransitionSource => "transition source",
            Role::TransitionDestination => "transition destination",
            Role::Start => "start state",
            Role::Accepting => "accepting state",
        };
        write!(f, "{}", name)
    }
}

/// The error type for constructing and querying automata.
///
/// Offending values are carried in their `Debug` rendering.
#[derive(Debug, Fail, PartialEq, Eq)]
pub enum Error {
    /// A transition, the start state, or an accepting state refers to a state
    /// that is not in the declared set of states.
    #[fail(display = "The {} {} is not a declared state.", role, state)]
    UndeclaredState {
        /// Where the undeclared state was referenced.
        role: Role,
        /// The undeclared state.
        state: String,
    },

    /// The list of transitions is not a list of (source, symbol, destination)
    /// triples.
    #[fail(display = "The transition list is malformed at: {}.", _0)]
    MalformedTransitionList(String),

    /// The alphabet of a nondeterministic automaton contains the reserved
    /// epsilon symbol.
    #[fail(display = "The alphabet contains the reserved epsilon symbol {}.", _0)]
    ReservedSymbolInAlphabet(String),

    /// A state of a nondeterministic automaton is the source of some transition
    /// but of no epsilon transition.
    #[fail(display = "The state {} has transitions but no epsilon transition.", _0)]
    IncompleteEpsilonCoverage(String),

    /// The input to an acceptance query is not a sequence of symbols.
    #[fail(display = "The input is not a sequence of symbols: {}.", _0)]
    InvalidInput(String),
}

/// A specialized Result type for automata operations.
pub type Result<T> = result::Result<T, Error>;

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn undeclared_state_display_names_role_and_state() {
        let sut = Error::UndeclaredState {
            role: Role::TransitionDestination,
            state: "\"4\"".to_string(),
        };

        assert_eq!(
            sut.to_string(),
            "The transition destination \"4\" is not a declared state."
        );
    }

    #[test]
    fn reserved_symbol_display_names_symbol() {
        let sut = Error::ReservedSymbolInAlphabet("'e'".to_string());

        assert_eq!(
            sut.to_string(),
            "The alphabet contains the reserved epsilon symbol 'e'."
        );
    }
}
