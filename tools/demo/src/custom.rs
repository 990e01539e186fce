// Copyright 2018 Steven Bosnick
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE-2.0 or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms

use std::collections::BTreeSet;

use automata::{parse_transitions, Definition, Symbol};
use quicli::prelude::*;

/// Build a definition from a transition list, a start state and the
/// accepting states given on the command line.
///
/// The declared states are every state that is mentioned. The alphabet is
/// every transition symbol, less the epsilon marker when building a
/// nondeterministic automaton.
pub fn definition(
    transitions: &str,
    start: &str,
    accept: &[String],
    nfa: bool,
) -> Result<Definition<String, char>> {
    let transitions = parse_transitions(transitions)?;

    let mut states: BTreeSet<String> = accept.iter().cloned().collect();
    states.insert(start.to_string());
    for t in &transitions {
        states.insert(t.source().clone());
        states.insert(t.destination().clone());
    }

    let alphabet: BTreeSet<char> = transitions
        .iter()
        .map(|t| *t.symbol())
        .filter(|c| !(nfa && c.is_epsilon()))
        .collect();

    debug!(
        "custom automaton has {} states and alphabet {:?}",
        states.len(),
        alphabet
    );

    let definition = if nfa {
        Definition::nondeterministic(
            states,
            alphabet,
            transitions,
            start.to_string(),
            accept.iter().cloned(),
        )?
    } else {
        Definition::deterministic(
            states,
            alphabet,
            transitions,
            start.to_string(),
            accept.iter().cloned(),
        )?
    };

    Ok(definition)
}
