// Copyright 2018 Steven Bosnick
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE-2.0 or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms

use automata::{Definition, Dfa, Nfa, Result, Strategy};

pub const DFA_INPUTS: &[&str] = &["ab", "ba", "a"];
pub const NFA_INPUTS: &[&str] = &["abab"];

// Accepts (aba)*ab.
pub fn cycle_dfa() -> Result<Dfa<&'static str, char>> {
    let definition = Definition::deterministic(
        vec!["1", "2", "3"],
        vec!['a', 'b'],
        vec![("1", 'a', "2"), ("2", 'b', "3"), ("3", 'a', "1")],
        "1",
        vec!["3"],
    )?;

    Ok(Dfa::new(definition))
}

pub fn epsilon_nfa(strategy: Strategy) -> Result<Nfa<&'static str, char>> {
    let definition = Definition::nondeterministic(
        vec!["1", "2", "3"],
        vec!['a', 'b'],
        vec![
            ("1", 'a', "2"),
            ("2", 'b', "3"),
            ("3", 'a', "3"),
            ("1", 'e', "1"),
            ("2", 'e', "2"),
            ("3", 'e', "1"),
        ],
        "1",
        vec!["3"],
    )?;

    Ok(Nfa::with_strategy(definition, strategy))
}
