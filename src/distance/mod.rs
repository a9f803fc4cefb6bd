//! Distance computation over geographic coordinates.
//!
//! Provides the haversine great-circle metric and a dense distance matrix
//! for the permutation search.

mod haversine;
mod matrix;

pub use haversine::{haversine, route_distance, DistanceMetric, Haversine, EARTH_RADIUS_KM};
pub use matrix::DistanceMatrix;
