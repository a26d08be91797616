//! Strategy functions shared by the integration tests and benches.
//!
//! Each one is a distinct `fn` item so tests can also exercise the
//! by-address identity rules: two of these are never "the same function"
//! even when their behavior matches.

/// Sends every key to bin zero, forcing the whole table into one chain.
pub fn one_bin_hash(_key: &i64) -> i64 {
    0
}

/// Hashes a key to itself, making bin placement predictable.
pub fn identity_hash(key: &i64) -> i64 {
    *key
}

/// A deliberately different hasher for strategy-mismatch tests.
pub fn shifted_hash(key: &i64) -> i64 {
    key.wrapping_add(1)
}

/// Hashes a string by length only, so anagram-length keys collide.
pub fn len_hash(key: &String) -> i64 {
    key.len() as i64
}

pub fn int_less(a: &i64, b: &i64) -> bool {
    a < b
}

pub fn int_greater(a: &i64, b: &i64) -> bool {
    a > b
}

pub fn str_less(a: &String, b: &String) -> bool {
    a < b
}

/// Priority function for max-heaps over `i64`.
pub fn max_first(a: &i64, b: &i64) -> bool {
    a > b
}

/// Priority function for min-heaps over `i64`.
pub fn min_first(a: &i64, b: &i64) -> bool {
    a < b
}
