//! Exact route search.
//!
//! - [`ExhaustiveSearch`] — brute-force minimum-distance open path, O(n!·n)
//! - [`Permutations`] — restartable lexicographic index permutation generator

mod exhaustive;
mod permutations;

pub use exhaustive::{shortest_route, ExhaustiveSearch};
pub use permutations::{next_permutation, permutation_count, Permutations};
