// Copyright 2018 Steven Bosnick
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE-2.0 or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms

//! Trait to define the input symbols of an automaton.

use std::fmt::Debug;

/// Required functionality for all symbol types that label transitions.
///
/// Each symbol type reserves one of its values as the epsilon marker. A
/// transition labeled with the marker is a silent (epsilon) transition in a
/// nondeterministic automaton, so the marker may not appear in the alphabet
/// of such an automaton. Deterministic automata give the marker no special
/// meaning.
pub trait Symbol: Ord + Clone + Debug {
    /// The reserved epsilon marker.
    fn epsilon() -> Self;

    /// Is this symbol the epsilon marker?
    fn is_epsilon(&self) -> bool {
        *self == Self::epsilon()
    }
}

impl Symbol for char {
    fn epsilon() -> Self {
        'e'
    }
}

impl Symbol for u8 {
    fn epsilon() -> Self {
        b'e'
    }
}

impl Symbol for &'static str {
    fn epsilon() -> Self {
        "e"
    }
}

impl Symbol for String {
    fn epsilon() -> Self {
        "e".to_string()
    }
}
