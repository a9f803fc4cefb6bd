//! Property-based tests for the distance metric, priority ordering and
//! exhaustive search.
//!
//! # Invariants tested
//!
//! - **Symmetry / identity:** `d(a, b) = d(b, a)` and `d(a, a) = 0`.
//! - **Stable ordering:** equal-priority stops keep their input order.
//! - **Optimality:** no permutation beats the returned distance, checked by
//!   an independent recursive enumeration.
//! - **Permutation:** the returned route visits exactly the input stops.

use proptest::prelude::*;
use u_delivery::distance::{haversine, route_distance, DistanceMetric, Haversine};
use u_delivery::models::{Coordinate, Priority, Stop};
use u_delivery::ordering::sort_by_priority;
use u_delivery::search::shortest_route;
use u_delivery::RouteOptimizer;

fn coordinate() -> impl Strategy<Value = Coordinate> {
    (-90.0f64..=90.0, -180.0f64..=180.0)
        .prop_map(|(lat, lon)| Coordinate::new(lat, lon).expect("in range"))
}

fn priority() -> impl Strategy<Value = Priority> {
    prop_oneof![
        Just(Priority::High),
        Just(Priority::Medium),
        Just(Priority::Low),
    ]
}

fn stops(max: usize) -> impl Strategy<Value = Vec<Stop>> {
    prop::collection::vec((priority(), coordinate()), 0..=max).prop_map(|items| {
        items
            .into_iter()
            .enumerate()
            .map(|(i, (p, c))| Stop::new(i.to_string(), p, c))
            .collect()
    })
}

/// Every ordering of `items`, by recursive insertion.
fn all_orderings(items: &[Coordinate]) -> Vec<Vec<Coordinate>> {
    match items.split_first() {
        None => vec![Vec::new()],
        Some((head, tail)) => {
            let mut out = Vec::new();
            for rest in all_orderings(tail) {
                for pos in 0..=rest.len() {
                    let mut ordering = rest.clone();
                    ordering.insert(pos, *head);
                    out.push(ordering);
                }
            }
            out
        }
    }
}

fn sorted_pairs(coords: &[Coordinate]) -> Vec<(f64, f64)> {
    let mut pairs: Vec<(f64, f64)> = coords
        .iter()
        .map(|c| (c.latitude(), c.longitude()))
        .collect();
    pairs.sort_by(|a, b| a.0.total_cmp(&b.0).then(a.1.total_cmp(&b.1)));
    pairs
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    #[test]
    fn distance_is_symmetric(a in coordinate(), b in coordinate()) {
        prop_assert!((haversine(a, b) - haversine(b, a)).abs() < 1e-9);
    }

    #[test]
    fn distance_to_self_is_zero(a in coordinate()) {
        prop_assert_eq!(haversine(a, a), 0.0);
    }

    #[test]
    fn distance_is_finite_and_bounded(a in coordinate(), b in coordinate()) {
        let d = haversine(a, b);
        prop_assert!(d.is_finite());
        prop_assert!(d >= 0.0);
        prop_assert!(d <= std::f64::consts::PI * Haversine::default().radius_km() + 1e-6);
    }

    #[test]
    fn priority_sort_is_stable(input in stops(12)) {
        let sorted = sort_by_priority(&input).expect("generated labels are valid");
        prop_assert_eq!(sorted.len(), input.len());
        for pair in sorted.windows(2) {
            let (a, b) = (&pair[0], &pair[1]);
            let (ra, rb) = (a.priority().expect("valid").rank(), b.priority().expect("valid").rank());
            prop_assert!(ra <= rb);
            if ra == rb {
                let ia: usize = a.id().parse().expect("numeric id");
                let ib: usize = b.id().parse().expect("numeric id");
                prop_assert!(ia < ib, "{} placed before {}", ia, ib);
            }
        }
    }

    #[test]
    fn search_is_optimal(input in stops(6)) {
        let metric = Haversine::default();
        let (route, best) = shortest_route(&input, &metric);

        let coords: Vec<Coordinate> = input.iter().map(Stop::coordinate).collect();
        for ordering in all_orderings(&coords) {
            let total = route_distance(&ordering, &metric);
            prop_assert!(best <= total + 1e-9, "{} beats returned {}", total, best);
        }
        prop_assert!((route_distance(&route.coordinates(), &metric) - best).abs() < 1e-9);
    }

    #[test]
    fn route_is_permutation_of_input(input in stops(6)) {
        let result = RouteOptimizer::default().optimize(&input).expect("valid input");
        let expected: Vec<Coordinate> = input.iter().map(Stop::coordinate).collect();
        prop_assert_eq!(result.len(), input.len());
        prop_assert_eq!(sorted_pairs(result.coordinates()), sorted_pairs(&expected));
    }

    #[test]
    fn presort_does_not_change_optimal_distance(input in stops(6)) {
        let metric = Haversine::default();
        let (_, unsorted) = shortest_route(&input, &metric);
        let result = RouteOptimizer::default().optimize(&input).expect("valid input");
        prop_assert!((result.total_distance() - unsorted).abs() < 1e-9);
    }
}

/// Compile-time check that the trait is object safe for callers who box it.
#[test]
fn metric_is_object_safe() {
    let boxed: Box<dyn DistanceMetric> = Box::new(Haversine::default());
    let a = Coordinate::new(0.0, 0.0).expect("valid");
    assert_eq!(boxed.distance(a, a), 0.0);
}
