// Copyright 2018 Steven Bosnick
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE-2.0 or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms

#[macro_use]
extern crate quicli;

extern crate automata;
extern crate itertools;

mod custom;
mod samples;

use automata::{Dfa, Nfa, Strategy};
use itertools::Itertools;
use quicli::prelude::*;

/// Show which strings the sample automata (or an automaton given on the
/// command line) accept.
#[derive(Debug, StructOpt)]
struct Cli {
    /// Strings to test, the fixed sample strings are used if none are given.
    inputs: Vec<String>,

    /// Transitions of a custom automaton as `source:symbol:destination` triples.
    #[structopt(long = "transitions", short = "t")]
    transitions: Option<String>,

    /// Start state of the custom automaton.
    #[structopt(long = "start", short = "s")]
    start: Option<String>,

    /// Accepting state of the custom automaton, may be given many times.
    #[structopt(long = "accept", short = "a")]
    accept: Vec<String>,

    /// Treat the custom automaton as nondeterministic with `e` transitions.
    #[structopt(long = "nfa")]
    nfa: bool,

    /// Explore every nondeterministic choice instead of the first match only.
    #[structopt(long = "exhaustive")]
    exhaustive: bool,

    /// Pass many times for more log output.
    #[structopt(long = "verbose", short = "v", parse(from_occurrences))]
    verbosity: u8,
}

impl Cli {
    fn strategy(&self) -> Strategy {
        if self.exhaustive {
            Strategy::Exhaustive
        } else {
            Strategy::FirstMatch
        }
    }

    fn check_flags(&self) -> Result<()> {
        if self.exhaustive && self.transitions.is_some() && !self.nfa {
            bail!("--exhaustive only applies to a custom automaton built with --nfa");
        }

        Ok(())
    }

    fn inputs_or<'a>(&'a self, samples: &[&'a str]) -> Vec<&'a str> {
        if self.inputs.is_empty() {
            samples.to_vec()
        } else {
            self.inputs.iter().map(|s| s.as_str()).collect()
        }
    }
}

main!(|args: Cli, log_level: verbosity| {
    args.check_flags()?;
    debug!("search strategy: {:?}", args.strategy());

    if let Some(transitions) = args.transitions.as_ref() {
        let start = match args.start.as_ref() {
            Some(start) => start,
            None => bail!("a custom automaton needs a --start state"),
        };
        let definition = custom::definition(transitions, start, &args.accept, args.nfa)?;
        let inputs = args.inputs_or(&[]);

        if args.nfa {
            let nfa = Nfa::with_strategy(definition, args.strategy());
            print!("{}", nfa.definition().render());
            report(&inputs, |input| nfa.accepts(input.chars()));
        } else {
            let dfa = Dfa::new(definition);
            print!("{}", dfa.definition().render());
            report(&inputs, |input| dfa.accepts(input.chars()));
        }
    } else {
        let dfa = samples::cycle_dfa()?;
        print!("{}", dfa.definition().render());
        report(&args.inputs_or(samples::DFA_INPUTS), |input| dfa.accepts(input.chars()));

        println!();

        let nfa = samples::epsilon_nfa(args.strategy())?;
        print!("{}", nfa.definition().render());
        report(&args.inputs_or(samples::NFA_INPUTS), |input| nfa.accepts(input.chars()));
    }
});

fn report<F>(inputs: &[&str], accepts: F)
where
    F: Fn(&str) -> bool,
{
    info!("testing strings: {}", inputs.iter().join(", "));

    for input in inputs {
        println!("Test String: {}", input);
        println!("{}", accepts(*input));
    }
}
