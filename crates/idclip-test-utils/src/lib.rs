pub mod eq_props;
pub mod funcs;
pub mod naive_map;
pub mod permutations;
pub mod unwind;
