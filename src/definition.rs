// Copyright 2018 Steven Bosnick
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE-2.0 or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms

//! Defines the validated `Definition` of an automaton that both the
//! deterministic and the nondeterministic engines are built from.

use std::collections::BTreeSet;
use std::fmt::{self, Debug, Display};

use error::{Error, Result, Role};
use symbol::Symbol;

/// A labeled edge from a source state to a destination state.
#[derive(Clone, PartialEq, Eq, Debug, Hash)]
pub struct Transition<S, A> {
    source: S,
    symbol: A,
    destination: S,
}

impl<S, A> Transition<S, A> {
    /// Create a new `Transition` for a given source, symbol and destination.
    pub fn new(source: S, symbol: A, destination: S) -> Transition<S, A> {
        Transition {
            source,
            symbol,
            destination,
        }
    }

    /// Gets a reference to the source state.
    pub fn source(&self) -> &S {
        &self.source
    }

    /// Gets a reference to the symbol that labels the transition.
    pub fn symbol(&self) -> &A {
        &self.symbol
    }

    /// Gets a reference to the destination state.
    pub fn destination(&self) -> &S {
        &self.destination
    }
}

impl<S, A> From<(S, A, S)> for Transition<S, A> {
    /// Converts from a (source, symbol, destination) triple.
    fn from((source, symbol, destination): (S, A, S)) -> Self {
        Transition::new(source, symbol, destination)
    }
}

impl<S: Debug, A: Debug> Display for Transition<S, A> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(
            f,
            "({:?}, {:?}, {:?})",
            self.source, self.symbol, self.destination
        )
    }
}

/// The validated description of a finite automaton.
///
/// A `Definition` can only be obtained from `Definition::deterministic` or
/// `Definition::nondeterministic`, both of which check that every state
/// referenced by the transitions, the start state, and the accepting states
/// was declared. A `Definition` is never modified after construction.
///
/// The transitions keep their declaration order. Both engines resolve a
/// choice between several matching transitions in favour of the one
/// declared first.
#[derive(Clone, PartialEq, Eq, Debug)]
pub struct Definition<S: Ord, A: Ord> {
    states: BTreeSet<S>,
    alphabet: BTreeSet<A>,
    transitions: Vec<Transition<S, A>>,
    start: S,
    accepting: BTreeSet<S>,
}

impl<S, A> Definition<S, A>
where
    S: Ord + Clone + Debug,
    A: Symbol,
{
    /// Create a `Definition` for a deterministic automaton.
    ///
    /// # Errors
    /// Returns `Error::UndeclaredState` for the first transition, start state,
    /// or accepting state (checked in that order) that refers to a state
    /// missing from `states`.
    pub fn deterministic<IS, IA, IT, T, IF>(
        states: IS,
        alphabet: IA,
        transitions: IT,
        start: S,
        accepting: IF,
    ) -> Result<Definition<S, A>>
    where
        IS: IntoIterator<Item = S>,
        IA: IntoIterator<Item = A>,
        IT: IntoIterator<Item = T>,
        T: Into<Transition<S, A>>,
        IF: IntoIterator<Item = S>,
    {
        let definition = Self::from_parts(states, alphabet, transitions, start, accepting)?;
        definition.log_constructed("deterministic");

        Ok(definition)
    }

    /// Create a `Definition` for a nondeterministic automaton with epsilon
    /// transitions.
    ///
    /// Transitions labeled with `A::epsilon()` are epsilon transitions.
    ///
    /// # Errors
    /// In addition to the errors of `Definition::deterministic` this returns
    /// `Error::ReservedSymbolInAlphabet` if the alphabet contains the epsilon
    /// marker and `Error::IncompleteEpsilonCoverage` for the first transition
    /// source that has no epsilon transition of its own.
    pub fn nondeterministic<IS, IA, IT, T, IF>(
        states: IS,
        alphabet: IA,
        transitions: IT,
        start: S,
        accepting: IF,
    ) -> Result<Definition<S, A>>
    where
        IS: IntoIterator<Item = S>,
        IA: IntoIterator<Item = A>,
        IT: IntoIterator<Item = T>,
        T: Into<Transition<S, A>>,
        IF: IntoIterator<Item = S>,
    {
        let definition = Self::from_parts(states, alphabet, transitions, start, accepting)?;

        definition.check_alphabet()?;
        definition.check_epsilon_coverage()?;
        definition.log_constructed("nondeterministic");

        Ok(definition)
    }

    fn from_parts<IS, IA, IT, T, IF>(
        states: IS,
        alphabet: IA,
        transitions: IT,
        start: S,
        accepting: IF,
    ) -> Result<Definition<S, A>>
    where
        IS: IntoIterator<Item = S>,
        IA: IntoIterator<Item = A>,
        IT: IntoIterator<Item = T>,
        T: Into<Transition<S, A>>,
        IF: IntoIterator<Item = S>,
    {
        let definition = Definition {
            states: states.into_iter().collect(),
            alphabet: alphabet.into_iter().collect(),
            transitions: transitions.into_iter().map(Into::into).collect(),
            start,
            accepting: accepting.into_iter().collect(),
        };

        definition.check_references()?;
        Ok(definition)
    }

    fn log_constructed(&self, kind: &str) {
        debug!(
            "constructed {} automaton with {} states and {} transitions",
            kind,
            self.states.len(),
            self.transitions.len()
        );
    }

    fn check_references(&self) -> Result<()> {
        for transition in &self.transitions {
            self.check_declared(&transition.source, Role::TransitionSource)?;
            self.check_declared(&transition.destination, Role::TransitionDestination)?;
        }

        self.check_declared(&self.start, Role::Start)?;

        for state in &self.accepting {
            self.check_declared(state, Role::Accepting)?;
        }

        Ok(())
    }

    fn check_declared(&self, state: &S, role: Role) -> Result<()> {
        if self.states.contains(state) {
            Ok(())
        } else {
            Err(Error::UndeclaredState {
                role,
                state: format!("{:?}", state),
            })
        }
    }

    fn check_alphabet(&self) -> Result<()> {
        let epsilon = A::epsilon();

        if self.alphabet.contains(&epsilon) {
            return Err(Error::ReservedSymbolInAlphabet(format!("{:?}", epsilon)));
        }

        Ok(())
    }

    fn check_epsilon_coverage(&self) -> Result<()> {
        let covered: BTreeSet<&S> = self.transitions
            .iter()
            .filter(|t| t.symbol.is_epsilon())
            .map(|t| &t.source)
            .collect();

        match self.transitions
            .iter()
            .find(|t| !covered.contains(&t.source))
        {
            Some(t) => Err(Error::IncompleteEpsilonCoverage(format!("{:?}", t.source))),
            None => Ok(()),
        }
    }

    /// Gets the declared states.
    pub fn states(&self) -> &BTreeSet<S> {
        &self.states
    }

    /// Gets the declared alphabet.
    pub fn alphabet(&self) -> &BTreeSet<A> {
        &self.alphabet
    }

    /// Gets the transitions in declaration order.
    pub fn transitions(&self) -> &[Transition<S, A>] {
        &self.transitions
    }

    /// Iterate, in declaration order, over the transitions whose source is `state`.
    pub fn transitions_from<'a>(
        &'a self,
        state: &'a S,
    ) -> impl Iterator<Item = &'a Transition<S, A>> + 'a {
        self.transitions.iter().filter(move |t| t.source == *state)
    }

    /// Gets the start state.
    pub fn start(&self) -> &S {
        &self.start
    }

    /// Gets the accepting states.
    pub fn accepting(&self) -> &BTreeSet<S> {
        &self.accepting
    }

    /// Is `state` one of the accepting states?
    pub fn is_accepting(&self, state: &S) -> bool {
        self.accepting.contains(state)
    }

    /// Render the five fields of the definition, one per line, in the order
    /// states, alphabet, transitions, start, accepting.
    ///
    /// The output is meant for display and debugging only.
    pub fn render(&self) -> String {
        self.to_string()
    }
}

impl<S, A> Display for Definition<S, A>
where
    S: Ord + Debug,
    A: Ord + Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        writeln!(f, "states: {}", DebugSet(&self.states))?;
        writeln!(f, "alphabet: {}", DebugSet(&self.alphabet))?;

        write!(f, "transitions: [")?;
        for (index, transition) in self.transitions.iter().enumerate() {
            if index > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{}", transition)?;
        }
        writeln!(f, "]")?;

        writeln!(f, "start: {:?}", self.start)?;
        writeln!(f, "accepting: {}", DebugSet(&self.accepting))
    }
}

struct DebugSet<'a, T: 'a>(&'a BTreeSet<T>);

impl<'a, T: Debug> Display for DebugSet<'a, T> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{{")?;
        for (index, item) in self.0.iter().enumerate() {
            if index > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{:?}", item)?;
        }
        write!(f, "}}")
    }
}

/// Parse a whitespace separated list of `source:symbol:destination` triples.
///
/// The symbol must be a single `char`; the source and destination may be
/// any non-empty text without a `:`. This supports building small automata
/// from command line arguments.
///
/// # Errors
/// Returns `Error::MalformedTransitionList` naming the first item that is
/// not such a triple.
pub fn parse_transitions(text: &str) -> Result<Vec<Transition<String, char>>> {
    text.split_whitespace().map(parse_transition).collect()
}

fn parse_transition(item: &str) -> Result<Transition<String, char>> {
    let malformed = || Error::MalformedTransitionList(item.to_string());

    let parts: Vec<&str> = item.split(':').collect();
    if parts.len() != 3 || parts[0].is_empty() || parts[2].is_empty() {
        return Err(malformed());
    }

    let mut chars = parts[1].chars();
    let symbol = match (chars.next(), chars.next()) {
        (Some(c), None) => c,
        _ => return Err(malformed()),
    };

    Ok(Transition::new(
        parts[0].to_string(),
        symbol,
        parts[2].to_string(),
    ))
}

#[cfg(test)]
mod test {
    use super::*;

    fn sample_transitions() -> Vec<(u32, char, u32)> {
        vec![(1, 'a', 2), (2, 'b', 3), (3, 'a', 1)]
    }

    #[test]
    fn deterministic_with_valid_fields_is_ok() {
        let result = Definition::deterministic(
            vec![1, 2, 3],
            vec!['a', 'b'],
            sample_transitions(),
            1,
            vec![3],
        );

        assert_matches!(result, Ok(_));
    }

    #[test]
    fn transition_to_undeclared_state_is_error() {
        let result = Definition::deterministic(
            vec![1, 2],
            vec!['a'],
            vec![(1, 'a', 4)],
            1,
            vec![2],
        );

        assert_matches!(
            result,
            Err(Error::UndeclaredState { role: Role::TransitionDestination, ref state }) if state == "4"
        );
    }

    #[test]
    fn transition_from_undeclared_state_is_error() {
        let result = Definition::deterministic(
            vec![1, 2],
            vec!['a'],
            vec![(1, 'a', 2), (7, 'a', 1)],
            1,
            vec![2],
        );

        assert_matches!(
            result,
            Err(Error::UndeclaredState { role: Role::TransitionSource, ref state }) if state == "7"
        );
    }

    #[test]
    fn undeclared_start_state_is_error() {
        let result = Definition::deterministic(
            vec![1, 2, 3],
            vec!['a', 'b'],
            sample_transitions(),
            0,
            vec![3],
        );

        assert_matches!(
            result,
            Err(Error::UndeclaredState { role: Role::Start, .. })
        );
    }

    #[test]
    fn undeclared_accepting_state_is_error() {
        let result = Definition::deterministic(
            vec![1, 2, 3],
            vec!['a', 'b'],
            sample_transitions(),
            1,
            vec![3, 9],
        );

        assert_matches!(
            result,
            Err(Error::UndeclaredState { role: Role::Accepting, ref state }) if state == "9"
        );
    }

    #[test]
    fn deterministic_allows_epsilon_in_alphabet() {
        let result = Definition::deterministic(
            vec![1, 2],
            vec!['e'],
            vec![(1, 'e', 2)],
            1,
            vec![2],
        );

        assert_matches!(result, Ok(_));
    }

    #[test]
    fn nondeterministic_with_epsilon_in_alphabet_is_error() {
        let result = Definition::nondeterministic(
            vec![1, 2],
            vec!['a', 'e'],
            vec![(1, 'a', 2), (1, 'e', 1)],
            1,
            vec![2],
        );

        assert_matches!(result, Err(Error::ReservedSymbolInAlphabet(_)));
    }

    #[test]
    fn nondeterministic_source_without_epsilon_is_error() {
        let result = Definition::nondeterministic(
            vec![1, 2, 3],
            vec!['a', 'b'],
            vec![(1, 'a', 2), (2, 'b', 3), (1, 'e', 1)],
            1,
            vec![3],
        );

        assert_matches!(
            result,
            Err(Error::IncompleteEpsilonCoverage(ref state)) if state == "2"
        );
    }

    #[test]
    fn nondeterministic_state_without_outgoing_transitions_needs_no_epsilon() {
        let result = Definition::nondeterministic(
            vec![1, 2],
            vec!['a'],
            vec![(1, 'a', 2), (1, 'e', 1)],
            1,
            vec![2],
        );

        assert_matches!(result, Ok(_));
    }

    #[test]
    fn undeclared_state_reported_before_reserved_symbol() {
        let result = Definition::nondeterministic(
            vec![1],
            vec!['e'],
            vec![(1, 'e', 2)],
            1,
            vec![1],
        );

        assert_matches!(result, Err(Error::UndeclaredState { .. }));
    }

    #[test]
    fn accessors_give_constructed_fields() {
        let sut = Definition::deterministic(
            vec![3, 1, 2, 1],
            vec!['b', 'a'],
            sample_transitions(),
            1,
            vec![3],
        ).expect("Unexpected invalid definition.");

        assert_eq!(sut.states().iter().cloned().collect::<Vec<_>>(), vec![1, 2, 3]);
        assert_eq!(sut.alphabet().iter().cloned().collect::<Vec<_>>(), vec!['a', 'b']);
        assert_eq!(
            sut.transitions().to_vec(),
            sample_transitions()
                .into_iter()
                .map(Into::into)
                .collect::<Vec<Transition<u32, char>>>()
        );
        assert_eq!(*sut.start(), 1);
        assert_eq!(sut.accepting().iter().cloned().collect::<Vec<_>>(), vec![3]);
        assert!(sut.is_accepting(&3));
        assert!(!sut.is_accepting(&1));
    }

    #[test]
    fn transitions_from_keeps_declaration_order() {
        let sut = Definition::deterministic(
            vec![1, 2, 3],
            vec!['a', 'b'],
            vec![(1, 'b', 3), (2, 'a', 1), (1, 'a', 2)],
            1,
            vec![3],
        ).expect("Unexpected invalid definition.");

        let result: Vec<_> = sut.transitions_from(&1)
            .map(|t| (*t.symbol(), *t.destination()))
            .collect();

        assert_eq!(result, vec![('b', 3), ('a', 2)]);
    }

    #[test]
    fn render_lists_fields_in_fixed_order() {
        let sut = Definition::deterministic(
            vec!["3", "1", "2"],
            vec!['b', 'a'],
            vec![("1", 'a', "2"), ("2", 'b', "3"), ("3", 'a', "1")],
            "1",
            vec!["3"],
        ).expect("Unexpected invalid definition.");

        assert_eq!(
            sut.render(),
            "states: {\"1\", \"2\", \"3\"}\n\
             alphabet: {'a', 'b'}\n\
             transitions: [(\"1\", 'a', \"2\"), (\"2\", 'b', \"3\"), (\"3\", 'a', \"1\")]\n\
             start: \"1\"\n\
             accepting: {\"3\"}\n"
        );
    }

    #[test]
    fn parse_transitions_gives_expected_triples() {
        let result = parse_transitions(" 1:a:2\n2:b:3  q3:e:q1 ");

        assert_eq!(
            result.expect("Unexpected malformed transition list."),
            vec![
                Transition::new("1".to_string(), 'a', "2".to_string()),
                Transition::new("2".to_string(), 'b', "3".to_string()),
                Transition::new("q3".to_string(), 'e', "q1".to_string()),
            ]
        );
    }

    #[test]
    fn parse_empty_transitions_is_empty() {
        let result = parse_transitions("");

        assert_matches!(result, Ok(ref v) if v.is_empty());
    }

    #[test]
    fn parse_transition_with_missing_part_is_error() {
        let result = parse_transitions("1:a:2 2:b");

        assert_matches!(result, Err(Error::MalformedTransitionList(ref item)) if item == "2:b");
    }

    #[test]
    fn parse_transition_with_long_symbol_is_error() {
        let result = parse_transitions("1:ab:2");

        assert_matches!(result, Err(Error::MalformedTransitionList(_)));
    }

    #[test]
    fn parse_transition_with_empty_state_is_error() {
        let result = parse_transitions(":a:2");

        assert_matches!(result, Err(Error::MalformedTransitionList(_)));
    }
}
