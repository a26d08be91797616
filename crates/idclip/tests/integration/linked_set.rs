// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

use idclip::LinkedSet;
use idclip_test_utils::naive_map::NaiveSet;
use proptest::prelude::*;
use test_strategy::{proptest, Arbitrary};

#[test]
fn test_iteration_preserves_insertion_order() {
    let mut set = LinkedSet::new();
    assert!(set.insert("c"));
    assert!(set.insert("a"));
    assert!(set.insert("b"));

    assert_eq!(set.iter().copied().collect::<Vec<_>>(), vec!["c", "a", "b"]);
    assert_eq!(format!("{set}"), "set[c,a,b]");
    set.validate().expect("set should be valid");
}

#[test]
fn test_rejected_insert_keeps_position() {
    let mut set = LinkedSet::from_elements([1, 2, 3]);

    // Re-inserting neither moves the element nor grows the set, but the
    // attempt still counts as a structural mutation.
    let cur = set.cursor();
    assert!(!set.insert(1));
    assert_eq!(set.iter().copied().collect::<Vec<_>>(), vec![1, 2, 3]);
    assert!(cur.get(&set).unwrap_err().is_stale());
}

#[test]
fn test_from_elements_dedups() {
    let set = LinkedSet::from_elements([1, 2, 1, 3, 2]);
    assert_eq!(set.len(), 3);
    assert_eq!(set.iter().copied().collect::<Vec<_>>(), vec![1, 2, 3]);
}

#[test]
fn test_erase_hit_and_miss() {
    let mut set = LinkedSet::from_elements([1, 2, 3]);

    assert!(set.erase(&2));
    assert!(!set.erase(&2));
    assert_eq!(set.iter().copied().collect::<Vec<_>>(), vec![1, 3]);

    // Only the hit is a structural change.
    let cur = set.cursor();
    assert!(!set.erase(&99));
    assert!(cur.get(&set).is_ok());
    assert!(set.erase(&1));
    assert!(cur.get(&set).unwrap_err().is_stale());

    set.validate().expect("set should be valid");
}

#[test]
fn test_insert_all_and_erase_all() {
    let mut set = LinkedSet::new();
    assert_eq!(set.insert_all([1, 2, 3, 2, 1]), 3);
    assert!(set.contains_all([1, 2, 3]));
    assert!(!set.contains_all([1, 4]));

    assert_eq!(set.erase_all([2, 3, 4]), 2);
    assert_eq!(set.iter().copied().collect::<Vec<_>>(), vec![1]);
}

#[test]
fn test_retain_all_keeps_survivor_order() {
    let mut set = LinkedSet::from_elements(0..10);

    let erased = set.retain_all([8, 0, 4, 100]);
    assert_eq!(erased, 7);
    // Survivors keep their original insertion order, not the argument's.
    assert_eq!(set.iter().copied().collect::<Vec<_>>(), vec![0, 4, 8]);
    set.validate().expect("set should be valid");
}

#[test]
fn test_subset_family() {
    let small = LinkedSet::from_elements([1, 2]);
    let big = LinkedSet::from_elements([3, 2, 1]);

    assert!(small.is_subset(&big));
    assert!(small.is_proper_subset(&big));
    assert!(big.is_superset(&small));
    assert!(big.is_proper_superset(&small));
    assert!(big.is_subset(&big));
    assert!(!big.is_proper_subset(&big));

    let disjoint = LinkedSet::from_elements([8, 9]);
    assert!(!disjoint.is_subset(&big));
}

#[test]
fn test_clear_touches_even_when_empty() {
    let mut set: LinkedSet<i64> = LinkedSet::new();
    let cur = set.cursor();
    set.clear();
    assert!(cur.get(&set).unwrap_err().is_stale());
    assert!(set.is_empty());
}

#[test]
fn test_cursor_full_walk() {
    let set = LinkedSet::from_elements(0..6);

    let mut seen = Vec::new();
    let mut cur = set.cursor();
    while !cur.is_exhausted() {
        seen.push(*cur.get(&set).unwrap());
        cur.step(&set).unwrap();
    }
    assert_eq!(seen, (0..6).collect::<Vec<_>>());

    // Exhausted cursors stay exhausted; stepping is a no-op.
    assert!(cur.get(&set).unwrap_err().is_exhausted());
    cur.step(&set).unwrap();
    assert!(cur.is_exhausted());
}

#[test]
fn test_cursor_remove_coasts_over_gap() {
    let mut set = LinkedSet::from_elements([1, 2, 3, 4]);

    let mut cur = set.cursor();
    cur.step(&set).unwrap(); // on 2
    assert_eq!(cur.remove(&mut set).unwrap(), 2);

    // Mid-gap: the cursor is disarmed, not invalid.
    assert!(cur.get(&set).unwrap_err().is_consumed());
    assert!(cur.remove(&mut set).unwrap_err().is_consumed());

    // The re-arming step does not move; nothing is skipped.
    cur.step(&set).unwrap();
    assert_eq!(cur.get(&set).unwrap(), &3);

    let mut rest = Vec::new();
    while !cur.is_exhausted() {
        rest.push(*cur.get(&set).unwrap());
        cur.step(&set).unwrap();
    }
    assert_eq!(rest, vec![3, 4]);

    set.validate().expect("set should be valid");
    assert_eq!(set.iter().copied().collect::<Vec<_>>(), vec![1, 3, 4]);
}

#[test]
fn test_cursor_stale_and_foreign() {
    let mut set = LinkedSet::from_elements([1, 2]);
    let mut other = LinkedSet::from_elements([1, 2]);

    let mut cur = set.cursor();
    assert!(cur.get(&other).unwrap_err().is_foreign());
    assert!(cur.remove(&mut other).unwrap_err().is_foreign());

    // A clone is a different container with equal content.
    let copy = set.clone();
    assert_eq!(set, copy);
    assert!(cur.get(&copy).unwrap_err().is_foreign());

    set.insert(3);
    assert!(cur.step(&set).unwrap_err().is_stale());
}

#[test]
fn test_cursor_same_position() {
    let set = LinkedSet::from_elements(0..4);

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
fn test_equality_ignores_insertion_order() {
    let a = LinkedSet::from_elements([1, 2, 3]);
    let b = LinkedSet::from_elements([3, 1, 2]);
    assert_eq!(a, b);

    let c = LinkedSet::from_elements([1, 2]);
    assert_ne!(a, c);
}

#[test]
fn test_into_iter_is_insertion_order() {
    let set = LinkedSet::from_elements([5, 1, 3]);
    assert_eq!(set.into_iter().collect::<Vec<_>>(), vec![5, 1, 3]);
}

#[derive(Debug, Arbitrary)]
enum Operation {
    #[weight(4)]
    Insert(#[strategy(0i64..48)] i64),
    Contains(#[strategy(0i64..48)] i64),
    #[weight(2)]
    Erase(#[strategy(0i64..48)] i64),
}

#[proptest(cases = 32)]
fn proptest_ops(
    #[strategy(prop::collection::vec(any::<Operation>(), 0..512))] ops: Vec<
        Operation,
    >,
) {
    let mut set = LinkedSet::new();
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

    // The naive oracle's backing vector happens to evolve exactly like the
    // chain, so the full sequences must agree, order included.
    let sequence: Vec<i64> = set.iter().copied().collect();
    let expected: Vec<i64> = naive.iter().copied().collect();
    assert_eq!(sequence, expected);
}
