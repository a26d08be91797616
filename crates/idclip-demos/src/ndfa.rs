// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Nondeterministic finite-automaton simulation.
//!
//! Same file shape as [`fa`](crate::fa), except an input may appear
//! several times on a line, each occurrence adding one more possible next
//! state, and a line may be a bare state name with no transitions at all.

use crate::{sorted_set_display, split};
use idclip::{hashers, Entry, HashMap, HeapQueue, LinkedQueue, LinkedSet};
use std::{
    fmt::Write as _,
    io::{self, BufRead},
};

/// States to their input -> possible-next-states transitions.
pub type Automaton = HashMap<String, HashMap<String, LinkedSet<String>>>;

/// Reads an automaton description, one state per line. A repeated state
/// name adds to the earlier line's transitions.
pub fn read_automaton<R: BufRead>(reader: R) -> io::Result<Automaton> {
    let mut automaton = Automaton::hashed_by(hashers::str_hash);
    for line in reader.lines() {
        let words = split(&line?, ";");
        let Some((state, pairs)) = words.split_first() else {
            continue;
        };
        if !automaton.contains_key(state) {
            automaton.put(state.clone(), HashMap::hashed_by(hashers::str_hash));
        }
        if let Some(transitions) = automaton.get_mut(state) {
            for pair in pairs.chunks_exact(2) {
                transitions.get_or_default(pair[0].clone()).insert(pair[1].clone());
            }
        }
    }
    Ok(automaton)
}

fn state_order(
    a: &Entry<String, HashMap<String, LinkedSet<String>>>,
    b: &Entry<String, HashMap<String, LinkedSet<String>>>,
) -> bool {
    a.key < b.key
}

/// Renders the automaton, states alphabetically, transitions sorted by
/// input symbol, possible states sorted inside each set.
pub fn describe(automaton: &Automaton) -> String {
    let mut report =
        String::from("The Non-Deterministic Finite Automaton Description\n");
    let mut by_state =
        HeapQueue::from_elements_by(automaton.iter().cloned(), state_order);
    while let Ok(entry) = by_state.dequeue() {
        let mut pairs: Vec<String> = entry
            .value
            .iter()
            .map(|transition| {
                format!("{}->{}", transition.key, sorted_set_display(&transition.value))
            })
            .collect();
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

/// Runs the automaton from `start` over `inputs`, recording the set of
/// possible states after each input. An input with no transition from any
/// possible state leaves an empty set, which then propagates.
pub fn process(
    automaton: &Automaton,
    start: &str,
    inputs: &LinkedQueue<String>,
) -> LinkedQueue<(String, LinkedSet<String>)> {
    let mut steps = LinkedQueue::new();
    let mut current = LinkedSet::new();
    current.insert(start.to_owned());
    steps.enqueue((String::new(), current.clone()));
    for input in inputs.iter() {
        let mut possible = LinkedSet::new();
        for state in current.iter() {
            if let Some(next) = automaton
                .get(state)
                .and_then(|transitions| transitions.get(input))
            {
                possible.insert_all(next.iter().cloned());
            }
        }
        steps.enqueue((input.clone(), possible.clone()));
        current = possible;
    }
    steps
}

/// Renders one processed run: start state, each step's possible states,
/// the possible stop states.
pub fn interpret(mut steps: LinkedQueue<(String, LinkedSet<String>)>) -> String {
    let mut report = String::new();
    let mut stop = LinkedSet::new();
    if let Ok((_, start)) = steps.dequeue() {
        let _ = writeln!(report, "Start state = {}", sorted_set_display(&start));
        stop = start;
    }
    while let Ok((input, states)) = steps.dequeue() {
        let _ = writeln!(
            report,
            "  Input = {input}; new possible states = {}",
            sorted_set_display(&states)
        );
        stop = states;
    }
    let _ = writeln!(report, "Stop state(s) = {}", sorted_set_display(&stop));
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
