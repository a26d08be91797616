// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

use idclip::{hashers, HashSet};
use idclip_test_utils::{
    eq_props::{assert_eq_props, assert_ne_props},
    funcs,
    naive_map::NaiveSet,
    permutations::element_permutation_strategy,
    unwind::catch_panic,
};
use proptest::prelude::*;
use test_strategy::{proptest, Arbitrary};

#[test]
fn test_insert_and_contains() {
    let mut set = HashSet::hashed_by(hashers::str_hash);
    assert!(set.insert("red".to_owned()));
    assert!(set.insert("green".to_owned()));
    assert!(!set.insert("red".to_owned()));

    assert_eq!(set.len(), 2);
    assert!(set.contains(&"red".to_owned()));
    assert!(!set.contains(&"blue".to_owned()));
    assert!(set.contains_all(["red".to_owned(), "green".to_owned()]));
    assert!(!set.contains_all(["red".to_owned(), "blue".to_owned()]));

    set.validate().expect("set should be valid");
}

#[test]
fn test_rejected_insert_still_stales_cursors() {
    let mut set = HashSet::hashed_by(funcs::identity_hash);
    set.insert(1);

    // The duplicate is rejected, but the attempt still counts as a
    // structural mutation, exactly like an overwriting map put.
    let cur = set.cursor();
    assert!(!set.insert(1));
    assert_eq!(set.len(), 1);
    assert!(cur.get(&set).unwrap_err().is_stale());
}

#[test]
fn test_erase_hit_and_miss() {
    let mut set = HashSet::hashed_by(funcs::identity_hash);
    set.insert(5);
    set.insert(6);

    assert!(set.erase(&5));
    assert!(!set.erase(&5));
    assert_eq!(set.len(), 1);

    // Only the hit is a structural change.
    let cur = set.cursor();
    assert!(!set.erase(&99));
    assert!(cur.get(&set).is_ok());
    assert!(set.erase(&6));
    assert!(cur.get(&set).unwrap_err().is_stale());

    set.validate().expect("set should be valid");
}

#[test]
fn test_insert_all_and_erase_all() {
    let mut set = HashSet::hashed_by(funcs::identity_hash);
    assert_eq!(set.insert_all([1, 2, 3, 2, 1]), 3);
    assert_eq!(set.len(), 3);

    // erase_all reports how many of its arguments were members.
    assert_eq!(set.erase_all([2, 3, 4]), 2);
    assert_eq!(set.len(), 1);
    assert!(set.contains(&1));

    set.validate().expect("set should be valid");
}

#[test]
fn test_retain_all_keeps_intersection() {
    let mut set = HashSet::hashed_by(funcs::identity_hash);
    set.insert_all(0..10);

    // Keep the evens; 100 is not a member and changes nothing.
    let erased = set.retain_all([0, 2, 4, 6, 8, 100]);
    assert_eq!(erased, 5);
    assert_eq!(set.len(), 5);
    for element in [0, 2, 4, 6, 8] {
        assert!(set.contains(&element));
    }
    for element in [1, 3, 5, 7, 9] {
        assert!(!set.contains(&element));
    }

    set.validate().expect("set should be valid");
}

#[test]
fn test_retain_all_of_nothing_clears() {
    let mut set = HashSet::hashed_by(funcs::identity_hash);
    set.insert_all(0..4);

    let erased = set.retain_all(core::iter::empty::<i64>());
    assert_eq!(erased, 4);
    assert!(set.is_empty());
    set.validate().expect("set should be valid");
}

#[test]
fn test_growth_staircase() {
    // Default config: one initial bin, load threshold 1.0.
    let mut set = HashSet::hashed_by(funcs::identity_hash);
    assert_eq!(set.bins(), 1);

    let expected = [1, 2, 4, 4, 8, 8, 8, 8];
    for (i, want_bins) in expected.iter().enumerate() {
        set.insert(i as i64);
        assert_eq!(set.bins(), *want_bins, "after {} inserts", i + 1);
        set.validate().expect("set should be valid");
    }

    // Every element survives every relink.
    for element in 0..8 {
        assert!(set.contains(&element));
    }
}

#[test]
fn test_subset_family() {
    let mut small = HashSet::hashed_by(funcs::identity_hash);
    small.insert_all([1, 2]);
    let mut big = HashSet::hashed_by(funcs::identity_hash);
    big.insert_all([1, 2, 3]);

    assert!(small.is_subset(&big));
    assert!(small.is_proper_subset(&big));
    assert!(big.is_superset(&small));
    assert!(big.is_proper_superset(&small));

    // A set is its own subset but not a proper one.
    assert!(big.is_subset(&big));
    assert!(!big.is_proper_subset(&big));

    let mut disjoint = HashSet::hashed_by(funcs::identity_hash);
    disjoint.insert_all([8, 9]);
    assert!(!disjoint.is_subset(&big));
    assert!(!big.is_subset(&disjoint));

    // The empty set is a proper subset of anything non-empty.
    let empty: HashSet<i64> = HashSet::hashed_by(funcs::identity_hash);
    assert!(empty.is_subset(&big));
    assert!(empty.is_proper_subset(&big));
    assert!(!empty.is_proper_subset(&empty));
}

#[test]
fn test_subset_across_hashers() {
    // The comparison is pure content; the two layouts share nothing.
    let mut spread = HashSet::hashed_by(funcs::identity_hash);
    spread.insert_all(0..6);
    let mut chained = HashSet::hashed_by(funcs::one_bin_hash);
    chained.insert_all(0..4);

    assert!(chained.is_proper_subset(&spread));
    assert!(spread.is_proper_superset(&chained));
}

#[test]
fn test_one_bin_chain_order() {
    // All elements in one chain; insertion prepends, so iteration runs
    // newest to oldest.
    let mut set = HashSet::hashed_by(funcs::one_bin_hash);
    set.insert_all([1, 2, 3]);

    assert_eq!(set.bins(), 1);
    assert_eq!(format!("{set}"), "set[3,2,1]");
    set.validate().expect("set should be valid");
}

#[test]
fn test_display_empty() {
    let set: HashSet<i64> = HashSet::hashed_by(funcs::identity_hash);
    assert_eq!(format!("{set}"), "set[]");
}

#[test]
fn test_debug_shows_internals() {
    let mut set = HashSet::hashed_by(funcs::one_bin_hash);
    set.insert_all([1, 2]);

    let dump = format!("{set:?}");
    assert!(dump.starts_with("HashSet{"), "unexpected debug: {dump}");
    assert!(dump.contains("mod_count"), "unexpected debug: {dump}");
}

#[test]
fn test_clear_touches_even_when_empty() {
    let mut set: HashSet<i64> = HashSet::hashed_by(funcs::identity_hash);

    let cur = set.cursor();
    set.clear();
    assert!(cur.get(&set).unwrap_err().is_stale());
    assert!(set.is_empty());
}

#[test]
fn test_cursor_full_walk() {
    let mut set = HashSet::hashed_by(funcs::identity_hash);
    set.insert_all(0..6);

    let mut seen = Vec::new();
    let mut cur = set.cursor();
    while !cur.is_exhausted() {
        seen.push(*cur.get(&set).unwrap());
        cur.step(&set).unwrap();
    }
    seen.sort();
    assert_eq!(seen, (0..6).collect::<Vec<_>>());

    // Exhausted cursors stay exhausted; stepping is a no-op.
    assert!(cur.get(&set).unwrap_err().is_exhausted());
    cur.step(&set).unwrap();
    assert!(cur.is_exhausted());
}

#[test]
fn test_cursor_filters_in_place() {
    let mut set = HashSet::hashed_by(funcs::identity_hash);
    set.insert_all(0..10);

    let mut cur = set.cursor();
    while !cur.is_exhausted() {
        if cur.get(&set).unwrap() % 2 != 0 {
            cur.remove(&mut set).unwrap();
        }
        cur.step(&set).unwrap();
    }

    let mut rest: Vec<i64> = set.iter().copied().collect();
    rest.sort();
    assert_eq!(rest, vec![0, 2, 4, 6, 8]);
    set.validate().expect("set should be valid");
}

#[test]
fn test_cursor_remove_coasts_over_gap() {
    // One chain, inserted 1..=4, so traversal order is 4,3,2,1.
    let mut set = HashSet::hashed_by(funcs::one_bin_hash);
    set.insert_all(1..=4);

    let mut cur = set.cursor();
    cur.step(&set).unwrap(); // on 3
    assert_eq!(cur.remove(&mut set).unwrap(), 3);

    // Mid-gap: the cursor is disarmed, not invalid.
    assert!(cur.get(&set).unwrap_err().is_consumed());
    assert!(cur.remove(&mut set).unwrap_err().is_consumed());

    // The re-arming step does not move; nothing is skipped.
    cur.step(&set).unwrap();
    assert_eq!(cur.get(&set).unwrap(), &2);

    let mut rest = Vec::new();
    while !cur.is_exhausted() {
        rest.push(*cur.get(&set).unwrap());
        cur.step(&set).unwrap();
    }
    assert_eq!(rest, vec![2, 1]);
    set.validate().expect("set should be valid");
}

#[test]
fn test_cursor_stale_and_foreign() {
    let mut set = HashSet::hashed_by(funcs::identity_hash);
    set.insert(1);
    let mut other = HashSet::hashed_by(funcs::identity_hash);
    other.insert(1);

    let mut cur = set.cursor();
    assert!(cur.get(&other).unwrap_err().is_foreign());
    assert!(cur.remove(&mut other).unwrap_err().is_foreign());

    // A clone is a different container with equal content.
    let copy = set.clone();
    assert_eq!(set, copy);
    assert!(cur.get(&copy).unwrap_err().is_foreign());

    set.insert(2);
    assert!(cur.step(&set).unwrap_err().is_stale());
    assert!(cur.get(&set).unwrap_err().is_stale());
}

#[test]
fn test_cursor_same_position() {
    let mut set = HashSet::hashed_by(funcs::identity_hash);
    set.insert_all(0..4);

    let mut a = set.cursor();
    let b = set.cursor();
    assert!(a.same_position(&b, &set).unwrap());

    a.step(&set).unwrap();
    assert!(!a.same_position(&b, &set).unwrap());

    let end_a = set.cursor_at_end();
    let end_b = set.cursor_at_end();
    assert!(end_a.same_position(&end_b, &set).unwrap());
    assert!(!end_a.same_position(&b, &set).unwrap());
}

#[test]
fn test_equality_across_hashers() {
    let mut by_value = HashSet::hashed_by(funcs::identity_hash);
    let mut one_bin = HashSet::hashed_by(funcs::one_bin_hash);
    by_value.insert_all(0..10);
    one_bin.insert_all(0..10);

    // Same content, radically different layout.
    assert_eq_props(&by_value, &one_bin);

    one_bin.insert(99);
    assert_ne_props(&by_value, &one_bin);
}

#[test]
fn test_clone_with_hasher() {
    let mut set = HashSet::hashed_by(funcs::one_bin_hash);
    set.insert_all(0..8);

    // Same function: plain copy.
    let same = set.clone_with_hasher(funcs::one_bin_hash).unwrap();
    assert_eq!(set, same);
    assert_eq!(same.bins(), set.bins());

    // Different function: every element rehashed into a new layout.
    let spread = set.clone_with_hasher(funcs::identity_hash).unwrap();
    assert_eq!(set, spread);
    spread.validate().expect("rebuilt set should be valid");

    // The copy is a new container as far as cursors are concerned.
    let cur = set.cursor();
    assert!(cur.get(&spread).unwrap_err().is_foreign());
}

#[test]
fn test_from_elements_and_from_iter() {
    // No marker, no constructor argument: nowhere to get a hash function.
    let err = HashSet::<i64>::from_elements([1, 2, 3]).unwrap_err();
    assert_eq!(
        err.kind(),
        idclip::errors::StrategyErrorKind::NeitherSpecified
    );

    // FromIterator has no error channel, so the same failure panics.
    let result = catch_panic(|| {
        let set: HashSet<i64> = [1, 2].into_iter().collect();
        set
    });
    assert!(result.is_none(), "collect without a hash source must panic");
}

#[test]
fn test_extend_and_into_iter() {
    let mut set = HashSet::hashed_by(funcs::identity_hash);
    set.extend(0..5);
    set.extend(3..8);
    assert_eq!(set.len(), 8);

    let mut elements: Vec<i64> = set.into_iter().collect();
    elements.sort();
    assert_eq!(elements, (0..8).collect::<Vec<_>>());
}

#[derive(Debug, Arbitrary)]
enum Operation {
    // Keep inserts common enough that the table actually grows.
    #[weight(4)]
    Insert(#[strategy(0i64..48)] i64),
    Contains(#[strategy(0i64..48)] i64),
    #[weight(2)]
    Erase(#[strategy(0i64..48)] i64),
}

fn run_operations(hash: fn(&i64) -> i64, ops: Vec<Operation>) {
    let mut set = HashSet::hashed_by(hash);
    let mut naive = NaiveSet::new();

    for op in ops {
        match op {
            Operation::Insert(element) => {
                assert_eq!(set.insert(element), naive.insert(element));
            }
            Operation::Contains(element) => {
                assert_eq!(set.contains(&element), naive.contains(&element));
            }
            Operation::Erase(element) => {
                assert_eq!(set.erase(&element), naive.remove(&element));
            }
        }
        assert_eq!(set.len(), naive.len());
        set.validate().expect("set should be valid");
    }

    let mut elements: Vec<i64> = set.iter().copied().collect();
    elements.sort();
    assert_eq!(elements, naive.sorted());
}

#[proptest(cases = 32)]
fn proptest_ops(
    #[strategy(prop::collection::vec(any::<Operation>(), 0..512))] ops: Vec<
        Operation,
    >,
) {
    run_operations(funcs::identity_hash, ops);
}

#[proptest(cases = 16)]
fn proptest_ops_one_bin(
    #[strategy(prop::collection::vec(any::<Operation>(), 0..256))] ops: Vec<
        Operation,
    >,
) {
    // Same contract with every element forced into a single chain.
    run_operations(funcs::one_bin_hash, ops);
}

#[proptest(cases = 32)]
fn proptest_permutation_eq(
    #[strategy(element_permutation_strategy(0..64usize))] elements: (
        Vec<i64>,
        Vec<i64>,
    ),
) {
    let (forward, shuffled) = elements;
    let mut set1 = HashSet::hashed_by(hashers::int_hash);
    let mut set2 = HashSet::hashed_by(hashers::int_hash);

    for element in forward {
        set1.insert(element);
    }
    for element in shuffled {
        set2.insert(element);
    }

    assert_eq_props(set1, set2);
}
