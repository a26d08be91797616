// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

use idclip::HeapQueue;
use idclip_test_utils::{
    eq_props::{assert_eq_props, assert_ne_props},
    funcs,
    unwind::catch_panic,
};
use proptest::prelude::*;
use test_strategy::{proptest, Arbitrary};

fn drain<S>(mut queue: HeapQueue<i64, S>) -> Vec<i64> {
    let mut out = Vec::new();
    while let Ok(element) = queue.dequeue() {
        out.push(element);
    }
    out
}

#[test]
fn test_enqueue_dequeue_priority_order() {
    let mut pq = HeapQueue::prioritized_by(funcs::max_first);
    pq.enqueue_all([6, 5, 3, 1, 9, 2, 4, 1]);
    assert_eq!(pq.len(), 8);
    assert_eq!(pq.peek(), Ok(&9));
    pq.validate().expect("queue should be valid");

    assert_eq!(drain(pq), vec![9, 6, 5, 4, 3, 2, 1, 1]);
}

#[test]
fn test_empty_errors() {
    let mut pq: HeapQueue<i64> = HeapQueue::prioritized_by(funcs::max_first);

    let err = pq.dequeue().unwrap_err();
    assert_eq!(err.container(), "HeapQueue");
    assert_eq!(err.operation(), "dequeue");

    let err = pq.peek().unwrap_err();
    assert_eq!(err.operation(), "peek");
}

#[test]
fn test_from_elements_by_heapifies() {
    // One heapify pass over the array, not n percolating enqueues; the
    // observable contract is the same.
    let pq =
        HeapQueue::from_elements_by([6, 5, 3, 1, 9, 2, 4, 1], funcs::max_first);
    pq.validate().expect("queue should be valid");
    assert_eq!(drain(pq), vec![9, 6, 5, 4, 3, 2, 1, 1]);

    let pq =
        HeapQueue::from_elements_by([6, 5, 3, 1, 9, 2, 4, 1], funcs::min_first);
    pq.validate().expect("queue should be valid");
    assert_eq!(drain(pq), vec![1, 1, 2, 3, 4, 5, 6, 9]);
}

#[test]
fn test_peek_is_not_a_mutation() {
    let mut pq = HeapQueue::prioritized_by(funcs::max_first);
    pq.enqueue_all([1, 2, 3]);

    let cur = pq.cursor();
    assert_eq!(pq.peek(), Ok(&3));
    assert!(cur.get(&pq).is_ok());

    pq.enqueue(4);
    assert!(cur.get(&pq).unwrap_err().is_stale());
}

#[test]
fn test_dequeue_touches() {
    let mut pq = HeapQueue::prioritized_by(funcs::max_first);
    pq.enqueue_all([1, 2]);

    let cur = pq.cursor();
    pq.dequeue().unwrap();
    assert!(cur.get(&pq).unwrap_err().is_stale());

    // A failing dequeue is not a structural change.
    let mut empty: HeapQueue<i64> = HeapQueue::prioritized_by(funcs::max_first);
    let cur = empty.cursor();
    let _ = empty.dequeue();
    assert!(cur.get(&empty).unwrap_err().is_exhausted());
}

#[test]
fn test_clear_touches_even_when_empty() {
    let mut pq: HeapQueue<i64> = HeapQueue::prioritized_by(funcs::max_first);
    let cur = pq.cursor();
    pq.clear();
    assert!(cur.get(&pq).unwrap_err().is_stale());
    assert!(pq.is_empty());
}

#[test]
fn test_display_low_to_high() {
    let mut pq = HeapQueue::prioritized_by(funcs::max_first);
    pq.enqueue_all([3, 1, 2]);
    assert_eq!(format!("{pq}"), "priority_queue[1,2,3]:3");

    // Under the flipped relation 1 outranks everything.
    let mut pq = HeapQueue::prioritized_by(funcs::min_first);
    pq.enqueue_all([3, 1, 2]);
    assert_eq!(format!("{pq}"), "priority_queue[3,2,1]:1");

    let empty: HeapQueue<i64> = HeapQueue::prioritized_by(funcs::max_first);
    assert_eq!(format!("{empty}"), "priority_queue[]");
}

#[test]
fn test_debug_shows_internals() {
    let mut pq = HeapQueue::prioritized_by(funcs::max_first);
    pq.enqueue_all([1, 2]);

    let dump = format!("{pq:?}");
    assert!(dump.starts_with("HeapQueue{elements="), "unexpected debug: {dump}");
    assert!(dump.contains("mod_count"), "unexpected debug: {dump}");
}

#[test]
fn test_cursor_walks_priority_order() {
    let mut pq = HeapQueue::prioritized_by(funcs::max_first);
    pq.enqueue_all([6, 5, 9]);

    let mut seen = Vec::new();
    let mut cur = pq.cursor();
    while !cur.is_exhausted() {
        seen.push(*cur.get(&pq).unwrap());
        cur.step(&pq).unwrap();
    }
    assert_eq!(seen, vec![9, 6, 5]);

    // The walk drained the snapshot, not the queue.
    assert_eq!(pq.len(), 3);

    // Exhausted cursors stay exhausted; stepping is a no-op.
    assert!(cur.get(&pq).unwrap_err().is_exhausted());
    cur.step(&pq).unwrap();
    assert!(cur.is_exhausted());
}

#[test]
fn test_cursor_begin_on_empty_is_exhausted() {
    let pq: HeapQueue<i64> = HeapQueue::prioritized_by(funcs::max_first);
    let cur = pq.cursor();
    assert!(cur.is_exhausted());
    assert!(cur.get(&pq).unwrap_err().is_exhausted());
}

#[test]
fn test_cursor_remove_coasts_over_gap() {
    let mut pq = HeapQueue::prioritized_by(funcs::max_first);
    pq.enqueue_all([9, 6, 5, 4]);

    let mut cur = pq.cursor();
    cur.step(&pq).unwrap(); // on 6
    assert_eq!(cur.remove(&mut pq).unwrap(), 6);
    assert_eq!(pq.len(), 3);

    // Mid-gap: the cursor is disarmed, not invalid.
    assert!(cur.get(&pq).unwrap_err().is_consumed());
    assert!(cur.remove(&mut pq).unwrap_err().is_consumed());

    // The re-arming step does not move; nothing is skipped.
    cur.step(&pq).unwrap();
    assert_eq!(cur.get(&pq).unwrap(), &5);

    let mut rest = Vec::new();
    while !cur.is_exhausted() {
        rest.push(*cur.get(&pq).unwrap());
        cur.step(&pq).unwrap();
    }
    assert_eq!(rest, vec![5, 4]);

    pq.validate().expect("queue should be valid");
    assert_eq!(drain(pq), vec![9, 5, 4]);
}

#[test]
fn test_cursor_remove_takes_one_duplicate() {
    let mut pq = HeapQueue::prioritized_by(funcs::max_first);
    pq.enqueue_all([5, 5, 3]);

    let mut cur = pq.cursor();
    assert_eq!(cur.remove(&mut pq).unwrap(), 5);
    assert_eq!(pq.len(), 2);

    pq.validate().expect("queue should be valid");
    assert_eq!(drain(pq), vec![5, 3]);
}

#[test]
fn test_cursor_stale_and_foreign() {
    let mut pq = HeapQueue::prioritized_by(funcs::max_first);
    pq.enqueue_all([1, 2]);
    let mut other = HeapQueue::prioritized_by(funcs::max_first);
    other.enqueue_all([1, 2]);

    let mut cur = pq.cursor();
    assert!(cur.get(&other).unwrap_err().is_foreign());
    assert!(cur.step(&other).unwrap_err().is_foreign());
    assert!(cur.remove(&mut other).unwrap_err().is_foreign());

    // A clone is a different container with equal content.
    let copy = pq.clone();
    assert_eq!(pq, copy);
    assert!(cur.get(&copy).unwrap_err().is_foreign());

    pq.enqueue(3);
    assert!(cur.step(&pq).unwrap_err().is_stale());
    assert!(cur.get(&pq).unwrap_err().is_stale());
}

#[test]
fn test_cursor_same_position() {
    let mut pq = HeapQueue::prioritized_by(funcs::max_first);
    pq.enqueue_all([1, 2, 3, 4]);

    let mut a = pq.cursor();
    let b = pq.cursor();
    assert!(a.same_position(&b, &pq).unwrap());

    a.step(&pq).unwrap();
    assert!(!a.same_position(&b, &pq).unwrap());

    let end_a = pq.cursor_at_end();
    let end_b = pq.cursor_at_end();
    assert!(end_a.same_position(&end_b, &pq).unwrap());
    assert!(!end_a.same_position(&b, &pq).unwrap());
}

#[test]
fn test_equality_needs_same_relation_and_sequence() {
    let mut a = HeapQueue::prioritized_by(funcs::max_first);
    let mut b = HeapQueue::prioritized_by(funcs::max_first);
    a.enqueue_all([1, 2, 3]);
    b.enqueue_all([3, 1, 2]);

    // Same relation, same drain sequence, different layouts.
    assert_eq_props(&a, &b);

    // Same multiset under a different relation is not equal: the queues
    // would hand elements out in different orders.
    let mut flipped = HeapQueue::prioritized_by(funcs::min_first);
    flipped.enqueue_all([1, 2, 3]);
    assert_ne_props(&a, &flipped);

    b.enqueue(4);
    assert_ne_props(&a, &b);
}

#[test]
fn test_clone_with_priority() {
    let mut pq = HeapQueue::prioritized_by(funcs::max_first);
    pq.enqueue_all([4, 1, 3]);

    // Same function: plain copy.
    let same = pq.clone_with_priority(funcs::max_first).unwrap();
    assert_eq!(pq, same);

    // Different function: the copied elements are re-heapified.
    let flipped = pq.clone_with_priority(funcs::min_first).unwrap();
    flipped.validate().expect("rebuilt queue should be valid");
    assert_eq!(drain(flipped), vec![1, 3, 4]);

    // The copy is a new container as far as cursors are concerned.
    let cur = pq.cursor();
    let same = pq.clone_with_priority(funcs::max_first).unwrap();
    assert!(cur.get(&same).unwrap_err().is_foreign());
}

#[test]
fn test_from_elements_and_from_iter() {
    // No marker, no constructor argument: nowhere to get a priority
    // function.
    let err = HeapQueue::<i64>::from_elements([1, 2]).unwrap_err();
    assert_eq!(
        err.kind(),
        idclip::errors::StrategyErrorKind::NeitherSpecified
    );

    // FromIterator has no error channel, so the same failure panics.
    let result = catch_panic(|| {
        let pq: HeapQueue<i64> = [1, 2].into_iter().collect();
        pq
    });
    assert!(result.is_none(), "collect without a priority source must panic");
}

#[test]
fn test_into_iter_drains_in_priority_order() {
    let mut pq = HeapQueue::prioritized_by(funcs::max_first);
    pq.enqueue_all([6, 5, 3, 1, 9, 2, 4, 1]);

    let iter = pq.into_iter();
    assert_eq!(iter.len(), 8);
    assert_eq!(iter.collect::<Vec<_>>(), vec![9, 6, 5, 4, 3, 2, 1, 1]);
}

#[derive(Debug, Arbitrary)]
enum Operation {
    #[weight(4)]
    Enqueue(#[strategy(0i64..48)] i64),
    #[weight(2)]
    Dequeue,
    Peek,
}

#[proptest(cases = 32)]
fn proptest_ops(
    #[strategy(prop::collection::vec(any::<Operation>(), 0..512))] ops: Vec<
        Operation,
    >,
) {
    let mut pq = HeapQueue::prioritized_by(funcs::max_first);
    let mut naive: Vec<i64> = Vec::new();

    for op in ops {
        match op {
            Operation::Enqueue(element) => {
                pq.enqueue(element);
                naive.push(element);
            }
            Operation::Dequeue => {
                let expected = match naive.iter().enumerate().max_by_key(
                    |(_, element)| **element,
                ) {
                    Some((index, _)) => Some(naive.swap_remove(index)),
                    None => None,
                };
                assert_eq!(pq.dequeue().ok(), expected);
            }
            Operation::Peek => {
                assert_eq!(pq.peek().ok(), naive.iter().max());
            }
        }
        assert_eq!(pq.len(), naive.len());
        pq.validate().expect("queue should be valid");
    }

    naive.sort_by(|a, b| b.cmp(a));
    assert_eq!(drain(pq), naive);
}
