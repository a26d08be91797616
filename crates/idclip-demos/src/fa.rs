// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Deterministic finite-automaton simulation.
//!
//! An automaton file gives one state per line: the state name followed by
//! input/next-state pairs, all separated by semicolons, as in
//! `even;0;even;1;odd`. A simulation file gives one run per line: the
//! start state followed by the inputs to feed it.

use crate::split;
use idclip::{hashers, Entry, HashMap, HeapQueue, LinkedQueue};
use std::{
    fmt::Write as _,
    io::{self, BufRead},
};

/// States to their input -> next-state transitions.
pub type Automaton = HashMap<String, HashMap<String, String>>;

/// One simulation step: the input consumed and the state it led to, with
/// `None` when the input had no transition.
pub type Step = (String, Option<String>);

/// Reads an automaton description, one state per line. A repeated state
/// name replaces the earlier line's transitions.
pub fn read_automaton<R: BufRead>(reader: R) -> io::Result<Automaton> {
    let mut automaton = Automaton::hashed_by(hashers::str_hash);
    for line in reader.lines() {
        let words = split(&line?, ";");
        let Some((state, pairs)) = words.split_first() else {
            continue;
        };
        let mut transitions = HashMap::hashed_by(hashers::str_hash);
        for pair in pairs.chunks_exact(2) {
            transitions.put(pair[0].clone(), pair[1].clone());
        }
        automaton.put(state.clone(), transitions);
    }
    Ok(automaton)
}

fn state_order(
    a: &Entry<String, HashMap<String, String>>,
    b: &Entry<String, HashMap<String, String>>,
) -> bool {
    a.key < b.key
}

/// Renders the automaton, states alphabetically, transitions sorted by
/// input symbol.
pub fn describe(automaton: &Automaton) -> String {
    let mut report = String::from("The Finite Automaton Description\n");
    let mut by_state =
        HeapQueue::from_elements_by(automaton.iter().cloned(), state_order);
    while let Ok(entry) = by_state.dequeue() {
        let mut pairs: Vec<String> =
            entry.value.iter().map(ToString::to_string).collect();
        pairs.sort_unstable();
        let _ = writeln!(
            report,
            "  {} transitions: map[{}]",
            entry.key,
            pairs.join(",")
        );
    }
    report
}

/// Runs the automaton from `start` over `inputs`, recording each step. The
/// first recorded step carries the start state itself; an input with no
/// transition records a `None` state and ends the run.
pub fn process(
    automaton: &Automaton,
    start: &str,
    inputs: &LinkedQueue<String>,
) -> LinkedQueue<Step> {
    let mut steps = LinkedQueue::new();
    steps.enqueue((String::new(), Some(start.to_owned())));
    let mut state = start.to_owned();
    for input in inputs.iter() {
        let next = automaton
            .get(&state)
            .and_then(|transitions| transitions.get(input));
        match next {
            Some(next) => {
                steps.enqueue((input.clone(), Some(next.clone())));
                state = next.clone();
            }
            None => {
                steps.enqueue((input.clone(), None));
                break;
            }
        }
    }
    steps
}

/// Renders one processed run: start state, each step, stop state.
pub fn interpret(mut steps: LinkedQueue<Step>) -> String {
    let mut report = String::new();
    let mut stop = String::from("None");
    if let Ok((_, Some(start))) = steps.dequeue() {
        let _ = writeln!(report, "Start state = {start}");
        stop = start;
    }
    while let Ok((input, state)) = steps.dequeue() {
        match state {
            Some(state) => {
                let _ = writeln!(report, "  Input = {input}; new state = {state}");
                stop = state;
            }
            None => {
                let _ = writeln!(
                    report,
                    "  Input = {input}; illegal input: simulation terminated"
                );
                stop = String::from("None");
            }
        }
    }
    let _ = writeln!(report, "Stop state = {stop}");
    report
}

/// Runs every simulation description in `reader` and stitches the reports
/// together.
pub fn simulate_all<R: BufRead>(
    automaton: &Automaton,
    reader: R,
) -> io::Result<String> {
    let mut report = String::new();
    for line in reader.lines() {
        let line = line?;
        let mut words = LinkedQueue::from_elements(split(&line, ";"));
        let Ok(start) = words.dequeue() else {
            continue;
        };
        let _ = writeln!(
            report,
            "\nStarting up a new simulation with description: {line}"
        );
        report.push_str(&interpret(process(automaton, &start, &words)));
    }
    Ok(report)
}
