// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Random text generation from an order-statistic corpus: every window of
//! consecutive words in the source text maps to the set of words seen
//! following it somewhere.

use crate::{sorted_set_display, split};
use idclip::{hashers, Entry, HashMap, HeapQueue, LinkedQueue, LinkedSet};
use rand::{rngs::StdRng, Rng, SeedableRng};
use std::{
    fmt::Write as _,
    io::{self, BufRead},
};

/// Word windows to the words seen following them.
pub type Corpus = HashMap<LinkedQueue<String>, LinkedSet<String>>;

/// Reads running text and indexes every `order`-word window. Windows slide
/// across line breaks.
pub fn read_corpus<R: BufRead>(order: usize, reader: R) -> io::Result<Corpus> {
    let mut corpus = Corpus::hashed_by(hashers::fold_hash);
    let mut window = LinkedQueue::new();
    for line in reader.lines() {
        for word in split(&line?, " ") {
            if window.len() < order {
                window.enqueue(word);
                continue;
            }
            corpus.get_or_default(window.clone()).insert(word.clone());
            let _ = window.dequeue();
            window.enqueue(word);
        }
    }
    Ok(corpus)
}

fn window_order(
    a: &Entry<LinkedQueue<String>, LinkedSet<String>>,
    b: &Entry<LinkedQueue<String>, LinkedSet<String>>,
) -> bool {
    for (ours, theirs) in a.key.iter().zip(b.key.iter()) {
        if ours != theirs {
            return ours < theirs;
        }
    }
    false
}

/// Renders the corpus, windows in word order, follow sets sorted, with the
/// largest and smallest follow-set sizes at the end.
pub fn describe(corpus: &Corpus) -> String {
    let mut report = format!("\nCorpus had {} Entries\n", corpus.len());
    let mut smallest = usize::MAX;
    let mut largest = 0;
    let mut by_window =
        HeapQueue::from_elements_by(corpus.iter().cloned(), window_order);
    while let Ok(entry) = by_window.dequeue() {
        let _ = writeln!(
            report,
            "  {} -> {}",
            entry.key,
            sorted_set_display(&entry.value)
        );
        smallest = smallest.min(entry.value.len());
        largest = largest.max(entry.value.len());
    }
    let _ = writeln!(report, "Corpus had {} Entries", corpus.len());
    if !corpus.is_empty() {
        let _ = writeln!(report, "max/min = {largest}/{smallest}");
    }
    report
}

/// The first window in word order, the start used when none is given.
pub fn default_start(corpus: &Corpus) -> Option<LinkedQueue<String>> {
    let mut by_window =
        HeapQueue::from_elements_by(corpus.iter().cloned(), window_order);
    by_window.dequeue().ok().map(|entry| entry.key)
}

fn random_in_set(words: &LinkedSet<String>, rng: &mut impl Rng) -> Option<String> {
    if words.is_empty() {
        return None;
    }
    words.iter().nth(rng.gen_range(0..words.len())).cloned()
}

/// Extends `start` with `count` randomly chosen follow words. When the
/// current window has no recorded followers the text ends early with a
/// `None` marker.
pub fn produce_text(
    corpus: &Corpus,
    start: &LinkedQueue<String>,
    count: usize,
    rng: &mut impl Rng,
) -> LinkedQueue<String> {
    let mut generated = start.clone();
    let mut window = start.clone();
    for _ in 0..count {
        let Some(word) = corpus
            .get(&window)
            .and_then(|follows| random_in_set(follows, rng))
        else {
            generated.enqueue("None".to_owned());
            break;
        };
        let _ = window.dequeue();
        window.enqueue(word.clone());
        generated.enqueue(word);
    }
    generated
}

/// Renders the corpus and one generated text from `start`.
pub fn report(
    corpus: &Corpus,
    start: &LinkedQueue<String>,
    count: usize,
    seed: u64,
) -> String {
    let mut rng = StdRng::seed_from_u64(seed);
    let text = produce_text(corpus, start, count, &mut rng);
    format!("{}\nRandom text = {text}\n", describe(corpus))
}
