// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

use idclip::{
    errors::StrategyErrorKind, BstMap, HashFn, HashMap, HashSet, HashSource,
    HeapQueue, HigherPriority, LessThan, LinkedPriorityQueue, OrderSource,
    PrioritySource, TableConfig,
};
use idclip_test_utils::funcs;

/// Marker baking `funcs::identity_hash` into the container type.
struct ByIdentity;

impl HashSource<i64> for ByIdentity {
    const HASH_FN: Option<HashFn<i64>> = Some(HashFn(funcs::identity_hash));
}

/// Marker baking `funcs::int_less` into the container type.
struct Ascending;

impl OrderSource<i64> for Ascending {
    const LESS_THAN: Option<LessThan<i64>> = Some(LessThan(funcs::int_less));
}

/// Marker baking `funcs::max_first` into the container type.
struct MaxFirst;

impl PrioritySource<i64> for MaxFirst {
    const HIGHER_PRIORITY: Option<HigherPriority<i64>> =
        Some(HigherPriority(funcs::max_first));
}

// Behaves exactly like `funcs::identity_hash` but is a distinct item, so
// the two compare unequal by address.
fn identity_again(key: &i64) -> i64 {
    *key
}

#[test]
fn test_marker_alone_selects_the_function() {
    let mut map: HashMap<i64, &str, ByIdentity> =
        HashMap::new().expect("marker supplies the hash function");
    map.put(3, "three");
    assert_eq!(map.get(&3), Some(&"three"));
    assert_eq!(map.hash_fn(), HashFn(funcs::identity_hash));

    let mut set: HashSet<i64, ByIdentity> =
        HashSet::new().expect("marker supplies the hash function");
    assert!(set.insert(9));
    assert_eq!(set.hash_fn(), HashFn(funcs::identity_hash));

    let mut bst: BstMap<i64, i64, Ascending> =
        BstMap::new().expect("marker supplies the ordering function");
    bst.put(2, 20);
    bst.put(1, 10);
    assert_eq!(bst.order_fn(), LessThan(funcs::int_less));
    assert_eq!(bst.iter().next().map(|entry| entry.key), Some(1));

    let mut heap: HeapQueue<i64, MaxFirst> =
        HeapQueue::new().expect("marker supplies the priority function");
    heap.enqueue_all([4, 8]);
    assert_eq!(heap.dequeue().expect("queue is non-empty"), 8);
    assert_eq!(heap.priority_fn(), HigherPriority(funcs::max_first));

    let mut chain: LinkedPriorityQueue<i64, MaxFirst> =
        LinkedPriorityQueue::new().expect("marker supplies the priority function");
    chain.enqueue_all([4, 8]);
    assert_eq!(chain.dequeue().expect("queue is non-empty"), 8);
    assert_eq!(chain.priority_fn(), HigherPriority(funcs::max_first));
}

#[test]
fn test_agreeing_channels_construct() {
    let map =
        HashMap::<i64, &str, ByIdentity>::with_hasher(funcs::identity_hash)
            .expect("both channels name the same function");
    assert_eq!(map.hash_fn(), HashFn(funcs::identity_hash));

    let set = HashSet::<i64, ByIdentity>::with_config_and_hasher(
        TableConfig::default(),
        funcs::identity_hash,
    )
    .expect("both channels name the same function");
    assert_eq!(set.hash_fn(), HashFn(funcs::identity_hash));

    let bst = BstMap::<i64, i64, Ascending>::with_comparator(funcs::int_less)
        .expect("both channels name the same function");
    assert_eq!(bst.order_fn(), LessThan(funcs::int_less));

    let heap = HeapQueue::<i64, MaxFirst>::with_priority(funcs::max_first)
        .expect("both channels name the same function");
    assert_eq!(heap.priority_fn(), HigherPriority(funcs::max_first));

    let chain =
        LinkedPriorityQueue::<i64, MaxFirst>::with_priority(funcs::max_first)
            .expect("both channels name the same function");
    assert_eq!(chain.priority_fn(), HigherPriority(funcs::max_first));
}

#[test]
fn test_neither_specified_across_containers() {
    let err = HashMap::<i64, &str>::new().unwrap_err();
    assert_eq!(err.container(), "HashMap");
    assert_eq!(err.constructor(), "new");
    assert_eq!(err.kind(), StrategyErrorKind::NeitherSpecified);

    let err =
        HashMap::<i64, &str>::with_config(TableConfig::default()).unwrap_err();
    assert_eq!(err.constructor(), "with_config");

    let err = HashSet::<i64>::from_elements([1, 2]).unwrap_err();
    assert_eq!(err.container(), "HashSet");
    assert_eq!(err.constructor(), "from_elements");
    assert_eq!(err.kind(), StrategyErrorKind::NeitherSpecified);

    let err = BstMap::<i64, i64>::from_entries([(1, 10)]).unwrap_err();
    assert_eq!(err.container(), "BstMap");
    assert_eq!(err.constructor(), "from_entries");

    let err = HeapQueue::<i64>::from_elements([3, 1]).unwrap_err();
    assert_eq!(err.container(), "HeapQueue");
    assert_eq!(err.constructor(), "from_elements");

    let err = LinkedPriorityQueue::<i64>::new().unwrap_err();
    assert_eq!(err.container(), "LinkedPriorityQueue");
    assert_eq!(err.kind(), StrategyErrorKind::NeitherSpecified);
}

#[test]
fn test_both_different_across_containers() {
    let err = HashMap::<i64, &str, ByIdentity>::with_hasher(funcs::shifted_hash)
        .unwrap_err();
    assert_eq!(err.container(), "HashMap");
    assert_eq!(err.constructor(), "with_hasher");
    assert_eq!(err.kind(), StrategyErrorKind::BothDifferent);

    let err = HashSet::<i64, ByIdentity>::with_config_and_hasher(
        TableConfig::default(),
        funcs::one_bin_hash,
    )
    .unwrap_err();
    assert_eq!(err.container(), "HashSet");
    assert_eq!(err.constructor(), "with_config_and_hasher");
    assert_eq!(err.kind(), StrategyErrorKind::BothDifferent);

    let err = BstMap::<i64, i64, Ascending>::with_comparator(funcs::int_greater)
        .unwrap_err();
    assert_eq!(err.container(), "BstMap");
    assert_eq!(err.constructor(), "with_comparator");
    assert_eq!(err.kind(), StrategyErrorKind::BothDifferent);

    let err = HeapQueue::<i64, MaxFirst>::with_priority(funcs::min_first)
        .unwrap_err();
    assert_eq!(err.container(), "HeapQueue");
    assert_eq!(err.constructor(), "with_priority");
    assert_eq!(err.kind(), StrategyErrorKind::BothDifferent);

    let err =
        LinkedPriorityQueue::<i64, MaxFirst>::with_priority(funcs::min_first)
            .unwrap_err();
    assert_eq!(err.container(), "LinkedPriorityQueue");
    assert_eq!(err.constructor(), "with_priority");
    assert_eq!(err.kind(), StrategyErrorKind::BothDifferent);
}

#[test]
fn test_identity_not_behavior() {
    assert_eq!(HashFn(funcs::identity_hash), HashFn(funcs::identity_hash));
    assert_ne!(HashFn(funcs::identity_hash), HashFn::<i64>(identity_again));

    // Same behavior, different address: still a conflict.
    let err = HashMap::<i64, &str, ByIdentity>::with_hasher(identity_again)
        .unwrap_err();
    assert_eq!(err.kind(), StrategyErrorKind::BothDifferent);

    assert_eq!(HashFn(funcs::identity_hash).apply(&7), 7);
    assert_eq!(HashFn::<i64>(identity_again).apply(&7), 7);
    assert!(LessThan(funcs::int_less).apply(&1, &2));
    assert!(!LessThan(funcs::int_less).apply(&2, &1));
    assert!(HigherPriority(funcs::max_first).apply(&9, &3));
    assert!(!HigherPriority(funcs::max_first).apply(&3, &3));
}

#[test]
fn test_supplied_function_alone_constructs() {
    let map = HashMap::<i64, &str>::with_hasher(funcs::identity_hash)
        .expect("one channel is enough");
    assert_eq!(map.hash_fn(), HashFn(funcs::identity_hash));

    let bst = BstMap::<i64, i64>::with_comparator(funcs::int_less)
        .expect("one channel is enough");
    assert_eq!(bst.order_fn(), LessThan(funcs::int_less));

    let heap = HeapQueue::<i64>::with_priority(funcs::max_first)
        .expect("one channel is enough");
    assert_eq!(heap.priority_fn(), HigherPriority(funcs::max_first));

    // The *_by constructors are only available on Unspecified containers
    // and skip resolution entirely.
    let map = HashMap::<i64, &str>::hashed_by(funcs::one_bin_hash);
    assert_eq!(map.hash_fn(), HashFn(funcs::one_bin_hash));

    let set = HashSet::hashed_by_with_config(
        funcs::identity_hash,
        TableConfig { initial_bins: 4, load_threshold: 2.0 },
    );
    assert_eq!(set.hash_fn(), HashFn::<i64>(funcs::identity_hash));

    let bst: BstMap<i64, i64> = BstMap::ordered_by(funcs::int_greater);
    assert_eq!(bst.order_fn(), LessThan(funcs::int_greater));

    let heap = HeapQueue::from_elements_by([5, 1, 3], funcs::min_first);
    assert_eq!(heap.priority_fn(), HigherPriority::<i64>(funcs::min_first));
    assert_eq!(heap.peek().expect("queue is non-empty"), &1);

    let chain: LinkedPriorityQueue<i64> =
        LinkedPriorityQueue::prioritized_by(funcs::max_first);
    assert_eq!(chain.priority_fn(), HigherPriority(funcs::max_first));
}

#[test]
fn test_clone_with_resolves_against_the_marker() {
    let mut map: HashMap<i64, &str, ByIdentity> =
        HashMap::new().expect("marker supplies the hash function");
    map.put(1, "a");
    map.put(2, "b");

    let copy = map
        .clone_with_hasher(funcs::identity_hash)
        .expect("agreeing function is accepted");
    assert_eq!(copy.get(&1), Some(&"a"));
    assert_eq!(copy.len(), 2);

    let err = map.clone_with_hasher(funcs::shifted_hash).unwrap_err();
    assert_eq!(err.container(), "HashMap");
    assert_eq!(err.constructor(), "clone_with_hasher");
    assert_eq!(err.kind(), StrategyErrorKind::BothDifferent);

    let mut set: HashSet<i64, ByIdentity> =
        HashSet::new().expect("marker supplies the hash function");
    set.insert(7);
    let err = set.clone_with_hasher(funcs::one_bin_hash).unwrap_err();
    assert_eq!(err.constructor(), "clone_with_hasher");

    let mut bst: BstMap<i64, i64, Ascending> =
        BstMap::new().expect("marker supplies the ordering function");
    bst.put(1, 10);
    let err = bst.clone_with_comparator(funcs::int_greater).unwrap_err();
    assert_eq!(err.container(), "BstMap");
    assert_eq!(err.constructor(), "clone_with_comparator");
    assert_eq!(err.kind(), StrategyErrorKind::BothDifferent);

    let mut heap: HeapQueue<i64, MaxFirst> =
        HeapQueue::new().expect("marker supplies the priority function");
    heap.enqueue(5);
    let err = heap.clone_with_priority(funcs::min_first).unwrap_err();
    assert_eq!(err.container(), "HeapQueue");
    assert_eq!(err.constructor(), "clone_with_priority");

    let mut chain: LinkedPriorityQueue<i64, MaxFirst> =
        LinkedPriorityQueue::new().expect("marker supplies the priority function");
    chain.enqueue(5);
    let err = chain.clone_with_priority(funcs::min_first).unwrap_err();
    assert_eq!(err.container(), "LinkedPriorityQueue");
    assert_eq!(err.constructor(), "clone_with_priority");
}

#[test]
fn test_error_display() {
    let err = HashMap::<i64, &str>::new().unwrap_err();
    assert_eq!(
        err.to_string(),
        "HashMap::new: neither the marker type nor the caller specified \
         a strategy function"
    );

    let err = BstMap::<i64, i64, Ascending>::with_comparator(funcs::int_greater)
        .unwrap_err();
    assert_eq!(
        err.to_string(),
        "BstMap::with_comparator: the marker type and the caller specified \
         different strategy functions"
    );
}

#[test]
fn test_newtype_debug_prints_the_address() {
    let shown = format!("{:?}", HashFn(funcs::identity_hash));
    assert!(shown.starts_with("HashFn(0x"), "unexpected debug form: {shown}");

    let shown = format!("{:?}", LessThan(funcs::int_less));
    assert!(shown.starts_with("LessThan(0x"), "unexpected debug form: {shown}");
}
