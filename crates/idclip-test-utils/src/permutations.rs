//! Proptest strategies shared by the integration tests.

use proptest::{prelude::*, sample::SizeRange};

/// Generates distinct-keyed pairs plus a shuffled copy of them. Feeding the
/// two orders into separate containers must produce equal content.
pub fn pair_permutation_strategy(
    size: impl Into<SizeRange>,
) -> impl Strategy<Value = (Vec<(i64, String)>, Vec<(i64, String)>)> {
    prop::collection::btree_map(any::<i64>(), "[a-z]{0,8}", size)
        .prop_map(|map| map.into_iter().collect::<Vec<_>>())
        .prop_flat_map(|pairs| {
            let shuffled = Just(pairs.clone()).prop_shuffle();
            (Just(pairs), shuffled)
        })
}

/// Generates distinct elements plus a shuffled copy, for the set
/// containers.
pub fn element_permutation_strategy(
    size: impl Into<SizeRange>,
) -> impl Strategy<Value = (Vec<i64>, Vec<i64>)> {
    prop::collection::btree_set(any::<i64>(), size)
        .prop_map(|set| set.into_iter().collect::<Vec<_>>())
        .prop_flat_map(|elements| {
            let shuffled = Just(elements.clone()).prop_shuffle();
            (Just(elements), shuffled)
        })
}
