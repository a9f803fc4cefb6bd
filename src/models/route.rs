//! Route and route result types.

use serde::{Deserialize, Serialize};

use super::{Coordinate, Stop};

/// An ordered sequence of stops, each input stop appearing exactly once.
///
/// # Examples
///
/// ```
/// use u_delivery::models::{Coordinate, Priority, Route, Stop};
///
/// let a = Stop::new("A", Priority::High, Coordinate::new(0.0, 0.0).unwrap());
/// let b = Stop::new("B", Priority::Low, Coordinate::new(0.0, 1.0).unwrap());
/// let route = Route::new(vec![b, a]);
/// assert_eq!(route.len(), 2);
/// assert_eq!(route.ids(), vec!["B", "A"]);
/// ```
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Route {
    stops: Vec<Stop>,
}

impl Route {
    /// Creates a route visiting `stops` in the given order.
    pub fn new(stops: Vec<Stop>) -> Self {
        Self { stops }
    }

    /// Stops in visiting order.
    pub fn stops(&self) -> &[Stop] {
        &self.stops
    }

    /// Number of stops.
    pub fn len(&self) -> usize {
        self.stops.len()
    }

    /// Returns `true` if the route visits nothing.
    pub fn is_empty(&self) -> bool {
        self.stops.is_empty()
    }

    /// Stop identifiers in visiting order.
    pub fn ids(&self) -> Vec<&str> {
        self.stops.iter().map(Stop::id).collect()
    }

    /// Stop coordinates in visiting order.
    pub fn coordinates(&self) -> Vec<Coordinate> {
        self.stops.iter().map(Stop::coordinate).collect()
    }

    /// Consumes the route, returning its stops.
    pub fn into_stops(self) -> Vec<Stop> {
        self.stops
    }
}

/// Output of an optimization run: visiting order and its length.
///
/// `total_distance` is in kilometres at full precision; rounding for
/// display is left to the caller.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RouteResult {
    #[serde(rename = "optimized_route")]
    route: Vec<Coordinate>,
    total_distance: f64,
}

impl RouteResult {
    /// Creates a result from ordered coordinates and their total distance.
    pub fn new(route: Vec<Coordinate>, total_distance: f64) -> Self {
        Self {
            route,
            total_distance,
        }
    }

    /// Projects a winning [`Route`] to its coordinates.
    pub fn from_route(route: &Route, total_distance: f64) -> Self {
        Self::new(route.coordinates(), total_distance)
    }

    /// Coordinates in visiting order.
    pub fn coordinates(&self) -> &[Coordinate] {
        &self.route
    }

    /// Sum of consecutive leg distances, in kilometres.
    pub fn total_distance(&self) -> f64 {
        self.total_distance
    }

    /// Number of visited coordinates.
    pub fn len(&self) -> usize {
        self.route.len()
    }

    /// Returns `true` for the result of an empty stop list.
    pub fn is_empty(&self) -> bool {
        self.route.is_empty()
    }
}
