use idclip::{hashers, HashMap};

/// Sizes every benchmark group sweeps over.
pub const SIZES: &[usize] = &[10, 100, 1_000, 10_000, 100_000];

/// An idclip map holding `data{i}` under each key in `0..size`.
pub fn filled_map(size: usize) -> HashMap<i64, String> {
    let mut map = HashMap::hashed_by(hashers::int_hash);
    for i in 0..size as i64 {
        map.put(i, format!("data{}", i));
    }
    map
}

/// A std map holding the same entries.
pub fn filled_std_map(size: usize) -> std::collections::HashMap<i64, String> {
    let mut map = std::collections::HashMap::new();
    for i in 0..size as i64 {
        map.insert(i, format!("data{}", i));
    }
    map
}

/// The keys `0..size` in a fixed scrambled order, so heap inserts are not
/// all best-case or all worst-case. 31 is coprime to every size in
/// [`SIZES`], making this a permutation.
pub fn scrambled_keys(size: usize) -> Vec<i64> {
    (0..size).map(|i| ((i * 31) % size) as i64).collect()
}
