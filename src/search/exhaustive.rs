//! Exact shortest open path by exhaustive enumeration.
//!
//! # Algorithm
//!
//! Every permutation of the stop indices is scored as the sum of its
//! consecutive leg lengths (no return leg). The enumeration is split into
//! blocks by first stop; within a block the remaining indices are permuted
//! lexicographically, so visiting blocks in index order reproduces the full
//! lexicographic enumeration. A candidate replaces the incumbent only when
//! strictly shorter, so the first optimum in enumeration order wins.
//!
//! With the `parallel` feature, blocks are scored on the rayon pool and
//! reduced in block order, which keeps the same winner.
//!
//! # Complexity
//!
//! O(n!·n) leg lookups plus O(n²) metric evaluations for the matrix.
//! Practical only for about ten stops or fewer.

use super::permutations::{permutation_count, Permutations};
use crate::distance::{DistanceMatrix, DistanceMetric};
use crate::models::{Route, Stop};

/// Exhaustive shortest-path search over stop permutations.
///
/// # Examples
///
/// ```
/// use u_delivery::distance::Haversine;
/// use u_delivery::models::{Coordinate, Priority, Stop};
/// use u_delivery::search::ExhaustiveSearch;
///
/// let stop = |id: &str, lat, lon| {
///     Stop::new(id, Priority::High, Coordinate::new(lat, lon).unwrap())
/// };
/// let stops = vec![stop("a", 0.0, 0.0), stop("b", 0.0, 2.0), stop("c", 0.0, 1.0)];
///
/// let (route, distance) = ExhaustiveSearch::new().shortest_route(&stops, &Haversine::default());
/// assert_eq!(route.ids(), vec!["a", "c", "b"]);
/// assert!((distance - 222.39).abs() < 0.01);
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ExhaustiveSearch {
    parallel: bool,
}

impl ExhaustiveSearch {
    /// Creates a sequential search.
    pub fn new() -> Self {
        Self::default()
    }

    /// Scores permutation blocks on the rayon pool.
    ///
    /// Has no effect unless the crate is built with the `parallel` feature.
    pub fn with_parallel(mut self, parallel: bool) -> Self {
        self.parallel = parallel;
        self
    }

    /// Returns `true` if blocks will actually be scored in parallel.
    pub fn is_parallel(&self) -> bool {
        cfg!(feature = "parallel") && self.parallel
    }

    /// Finds the shortest visiting order of `stops` under `metric`.
    ///
    /// Returns the winning route and its total distance. Empty and
    /// single-stop inputs yield themselves with distance 0.
    pub fn shortest_route<M: DistanceMetric + ?Sized>(
        &self,
        stops: &[Stop],
        metric: &M,
    ) -> (Route, f64) {
        let coords: Vec<_> = stops.iter().map(Stop::coordinate).collect();
        let distances = DistanceMatrix::from_coordinates(&coords, metric);
        let (order, distance) = self.best_order(&distances);
        let route = Route::new(order.into_iter().map(|i| stops[i].clone()).collect());
        (route, distance)
    }

    /// Finds the shortest open path over all locations of `distances`.
    ///
    /// Returns the winning index order and its length.
    pub fn best_order(&self, distances: &DistanceMatrix) -> (Vec<usize>, f64) {
        let n = distances.size();
        if n == 0 {
            return (Vec::new(), 0.0);
        }

        log::trace!(
            "enumerating {} permutations of {} stops",
            permutation_count(n).unwrap_or(u64::MAX),
            n
        );

        let blocks = self.score_blocks(distances);
        let best = first_minimum(blocks);
        log::debug!("shortest path over {} stops: {:.3} km", n, best.1);
        best
    }

    #[cfg(feature = "parallel")]
    fn score_blocks(&self, distances: &DistanceMatrix) -> Vec<(Vec<usize>, f64)> {
        use rayon::prelude::*;

        if self.parallel {
            (0..distances.size())
                .into_par_iter()
                .map(|first| best_in_block(distances, first))
                .collect()
        } else {
            score_blocks_sequential(distances)
        }
    }

    #[cfg(not(feature = "parallel"))]
    fn score_blocks(&self, distances: &DistanceMatrix) -> Vec<(Vec<usize>, f64)> {
        score_blocks_sequential(distances)
    }
}

/// Finds the shortest visiting order of `stops` under `metric`, sequentially.
///
/// Shorthand for [`ExhaustiveSearch::new`] followed by
/// [`ExhaustiveSearch::shortest_route`].
pub fn shortest_route<M: DistanceMetric + ?Sized>(stops: &[Stop], metric: &M) -> (Route, f64) {
    ExhaustiveSearch::new().shortest_route(stops, metric)
}

fn score_blocks_sequential(distances: &DistanceMatrix) -> Vec<(Vec<usize>, f64)> {
    (0..distances.size())
        .map(|first| best_in_block(distances, first))
        .collect()
}

/// Best path among those starting at `first`.
///
/// The first permutation seeds the incumbent, so a path is returned even
/// when every total is infinite or NaN.
fn best_in_block(distances: &DistanceMatrix, first: usize) -> (Vec<usize>, f64) {
    let n = distances.size();
    let rest: Vec<usize> = (0..n).filter(|&i| i != first).collect();
    let mut perms = Permutations::from_sorted(rest);

    let mut order = Vec::with_capacity(n);
    let mut best: Option<(Vec<usize>, f64)> = None;

    while let Some(tail) = perms.advance() {
        order.clear();
        order.push(first);
        order.extend_from_slice(tail);

        let d = distances.path_length(&order);
        match &mut best {
            Some((path, best_distance)) => {
                if improves(d, *best_distance) {
                    *best_distance = d;
                    path.clone_from(&order);
                }
            }
            None => best = Some((order.clone(), d)),
        }
    }
    best.unwrap_or_else(|| (vec![first], 0.0))
}

/// Earliest candidate with the strictly smallest distance.
fn first_minimum(candidates: Vec<(Vec<usize>, f64)>) -> (Vec<usize>, f64) {
    let mut candidates = candidates.into_iter();
    let Some(seed) = candidates.next() else {
        return (Vec::new(), 0.0);
    };
    candidates.fold(seed, |best, candidate| {
        if improves(candidate.1, best.1) {
            candidate
        } else {
            best
        }
    })
}

/// Strictly shorter, with any number beating a NaN incumbent.
fn improves(candidate: f64, incumbent: f64) -> bool {
    candidate < incumbent || (incumbent.is_nan() && !candidate.is_nan())
}
