// Copyright 2018 Steven Bosnick
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE-2.0 or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms

//! A library for deciding whether a finite automaton accepts a sequence of
//! input symbols.
//!
//! An automaton is described by a `Definition`: a set of states, an
//! alphabet, an ordered list of transitions, a start state and a set of
//! accepting states. A `Definition` is validated when it is constructed, so
//! the engines never see a transition, start state or accepting state that
//! refers to an undeclared state.
//!
//! There are two engines. A `Dfa` follows a single path through its
//! transitions. An `Nfa` may also take epsilon transitions (transitions
//! labeled with the reserved `Symbol::epsilon()` marker) without consuming
//! input, and accepts if some path that it explores consumes the whole input
//! and ends in an accepting state.
//!
//! ```
//! use automata::{Definition, Dfa};
//!
//! let definition = Definition::deterministic(
//!     vec![1, 2, 3],
//!     vec!['a', 'b'],
//!     vec![(1, 'a', 2), (2, 'b', 3), (3, 'a', 1)],
//!     1,
//!     vec![3],
//! ).unwrap();
//! let dfa = Dfa::new(definition);
//!
//! assert!(dfa.accepts("ab".chars()));
//! assert!(!dfa.accepts("ba".chars()));
//! ```

#![deny(missing_docs)]

extern crate encode_unicode;
#[macro_use]
extern crate failure;
#[macro_use]
extern crate log;

#[cfg(test)]
#[macro_use]
extern crate assert_matches;

mod error;
mod input;
pub mod definition;
pub mod dfa;
pub mod nfa;
pub mod symbol;

pub use definition::{parse_transitions, Definition, Transition};
pub use dfa::Dfa;
pub use error::{Error, Result, Role};
pub use input::{decode_utf8, ReadSymbols, Utf8Symbols};
pub use nfa::{Nfa, Strategy};
pub use symbol::Symbol;
