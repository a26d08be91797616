// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! An example demonstrating injected strategy functions and detached
//! cursors over the same data.

use idclip::{hashers, Entry, HashMap, HeapQueue};

/// Alphabetical by word.
fn by_word(a: &Entry<String, i64>, b: &Entry<String, i64>) -> bool {
    a.key < b.key
}

/// Most frequent first, ties broken alphabetically.
fn by_count(a: &Entry<String, i64>, b: &Entry<String, i64>) -> bool {
    if a.value == b.value {
        a.key < b.key
    } else {
        a.value > b.value
    }
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let text = "the quick brown fox jumped over the lazy dog while the cat \
                watched the fox";

    // Count word occurrences. The hash function is constructor data, not a
    // trait bound on the key type.
    let mut counts: HashMap<String, i64> =
        HashMap::hashed_by(hashers::str_hash);
    for word in text.split_whitespace() {
        *counts.get_or_default(word.to_owned()) += 1;
    }

    // Walk the map with a detached cursor, erasing words seen only once.
    // The cursor coasts over each gap it creates.
    let mut cur = counts.cursor();
    while !cur.is_exhausted() {
        if cur.get(&counts)?.value == 1 {
            cur.remove(&mut counts)?;
        }
        cur.step(&counts)?;
    }

    // Drain the survivors through two heaps that disagree about priority.
    let mut alphabetical =
        HeapQueue::from_elements_by(counts.iter().cloned(), by_word);
    while let Ok(entry) = alphabetical.dequeue() {
        println!("{entry}");
    }

    println!("---");

    let mut frequent =
        HeapQueue::from_elements_by(counts.iter().cloned(), by_count);
    while let Ok(entry) = frequent.dequeue() {
        println!("{entry}");
    }

    Ok(())
}
