// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Instant-runoff election over ranked ballots.
//!
//! Each round counts one vote per voter, for their highest-ranked
//! candidate still standing, then eliminates everyone polling at the
//! round's minimum. The same tally prints twice per round under two
//! priority functions, alphabetical and votes-first.

use crate::{sorted_set_display, split};
use idclip::{hashers, Entry, HashMap, HeapQueue, LinkedQueue, LinkedSet};
use std::{
    fmt::Write as _,
    io::{self, BufRead},
};

/// Voters to their ranked candidate queues, first choice first.
pub type Preferences = HashMap<String, LinkedQueue<String>>;

/// Candidates to their vote counts for one ballot round.
pub type Tally = HashMap<String, i64>;

/// Reads ballots, one `voter;first;second;...` line each. A repeated voter
/// name appends to that voter's ranking.
pub fn read_preferences<R: BufRead>(reader: R) -> io::Result<Preferences> {
    let mut preferences = Preferences::hashed_by(hashers::str_hash);
    for line in reader.lines() {
        let words = split(&line?, ";");
        let Some((voter, ranked)) = words.split_first() else {
            continue;
        };
        let ballot = preferences.get_or_default(voter.clone());
        for candidate in ranked {
            ballot.enqueue(candidate.clone());
        }
    }
    Ok(preferences)
}

fn voter_order(
    a: &Entry<String, LinkedQueue<String>>,
    b: &Entry<String, LinkedQueue<String>>,
) -> bool {
    a.key < b.key
}

/// Renders the ballots, voters alphabetically, rankings in ballot order.
pub fn describe(preferences: &Preferences) -> String {
    let mut report = String::from("\nVoter name -> queue[Preferences]\n");
    let mut by_voter =
        HeapQueue::from_elements_by(preferences.iter().cloned(), voter_order);
    while let Ok(entry) = by_voter.dequeue() {
        let _ = writeln!(report, "  {} -> {}", entry.key, entry.value);
    }
    report
}

/// Every candidate named on any ballot.
pub fn all_candidates(preferences: &Preferences) -> LinkedSet<String> {
    let mut candidates = LinkedSet::new();
    for entry in preferences.iter() {
        candidates.insert_all(entry.value.iter().cloned());
    }
    candidates
}

/// Counts one vote per voter: their highest-ranked candidate still in
/// `candidates`. Every remaining candidate appears in the tally, if only
/// with zero votes.
pub fn evaluate_ballot(
    preferences: &Preferences,
    candidates: &LinkedSet<String>,
) -> Tally {
    let mut tally = Tally::hashed_by(hashers::str_hash);
    for candidate in candidates.iter() {
        tally.put(candidate.clone(), 0);
    }
    for entry in preferences.iter() {
        for candidate in entry.value.iter() {
            if candidates.contains(candidate) {
                *tally.get_or_default(candidate.clone()) += 1;
                break;
            }
        }
    }
    tally
}

/// Candidates polling strictly above the round's minimum. Empty when every
/// candidate ties.
pub fn remaining_candidates(tally: &Tally) -> LinkedSet<String> {
    let mut survivors = LinkedSet::new();
    if let Some(minimum) = tally.iter().map(|entry| entry.value).min() {
        for entry in tally.iter() {
            if entry.value > minimum {
                survivors.insert(entry.key.clone());
            }
        }
    }
    survivors
}

fn alphabetical(a: &Entry<String, i64>, b: &Entry<String, i64>) -> bool {
    a.key < b.key
}

fn by_votes(a: &Entry<String, i64>, b: &Entry<String, i64>) -> bool {
    if a.value == b.value {
        a.key < b.key
    } else {
        a.value > b.value
    }
}

fn render_tally(
    message: &str,
    tally: &Tally,
    order: fn(&Entry<String, i64>, &Entry<String, i64>) -> bool,
) -> String {
    let mut report = format!("\n{message}\n");
    let mut ranked = HeapQueue::from_elements_by(tally.iter().cloned(), order);
    while let Ok(entry) = ranked.dequeue() {
        let _ = writeln!(report, "  {} -> {}", entry.key, entry.value);
    }
    report
}

/// Runs the election to completion, rendering each round's tally under
/// both orderings and then the outcome.
pub fn run_election(preferences: &Preferences) -> String {
    let mut report = String::new();
    let mut candidates = all_candidates(preferences);
    let mut tally = evaluate_ballot(preferences, &candidates);
    let mut ballot_number = 1;
    while candidates.len() >= 2 {
        let roster = sorted_set_display(&candidates);
        report.push_str(&render_tally(
            &format!(
                "Vote count on ballot #{ballot_number}: candidates \
                 (alphabetically ordered) with remaining candidates = {roster}"
            ),
            &tally,
            alphabetical,
        ));
        report.push_str(&render_tally(
            &format!(
                "Vote count on ballot #{ballot_number}: candidates \
                 (numerically ordered) with remaining candidates = {roster}"
            ),
            &tally,
            by_votes,
        ));
        candidates = remaining_candidates(&tally);
        tally = evaluate_ballot(preferences, &candidates);
        ballot_number += 1;
    }
    match candidates.iter().next() {
        Some(winner) => {
            let _ = writeln!(report, "\nWinner is {winner}");
        }
        None => {
            let _ = writeln!(
                report,
                "\nNot any unique winner: election is a tie among all the \
                 candidates remaining on the last ballot"
            );
        }
    }
    report
}
