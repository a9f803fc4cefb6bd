//! Great-circle distance over a spherical Earth.
//!
//! # Algorithm
//!
//! ```text
//! h = sin²(Δlat/2) + cos(lat1)·cos(lat2)·sin²(Δlon/2)
//! d = 2·R·asin(√h)
//! ```
//!
//! `h` is clamped into `[0, 1]` first: rounding can push it just above 1 for
//! antipodal pairs, where `asin` would return NaN.

use std::f64::consts::PI;

use crate::error::{Result, RoutingError};
use crate::models::Coordinate;

/// Mean Earth radius in kilometres.
pub const EARTH_RADIUS_KM: f64 = 6371.0;

/// Distance between two coordinates.
///
/// Implementations must be pure, non-negative, and symmetric.
pub trait DistanceMetric: Send + Sync {
    /// Distance from `a` to `b`.
    fn distance(&self, a: Coordinate, b: Coordinate) -> f64;
}

/// Haversine distance in kilometres.
///
/// # Examples
///
/// ```
/// use u_delivery::distance::{DistanceMetric, Haversine};
/// use u_delivery::models::Coordinate;
///
/// let a = Coordinate::new(0.0, 0.0).unwrap();
/// let b = Coordinate::new(0.0, 1.0).unwrap();
/// let d = Haversine::default().distance(a, b);
/// assert!((d - 111.19).abs() < 0.01);
///
/// assert!(Haversine::with_radius(-1.0).is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Haversine {
    radius_km: f64,
}

impl Haversine {
    /// Creates a metric over a sphere of the given radius.
    ///
    /// The radius must be positive, and half the circumference (the longest
    /// possible leg) must be finite.
    pub fn with_radius(radius_km: f64) -> Result<Self> {
        if !(radius_km > 0.0 && (PI * radius_km).is_finite()) {
            return Err(RoutingError::InvalidConfig {
                field: "earth_radius_km",
                value: radius_km,
            });
        }
        Ok(Self { radius_km })
    }

    /// Sphere radius in kilometres.
    pub fn radius_km(&self) -> f64 {
        self.radius_km
    }
}

impl Default for Haversine {
    fn default() -> Self {
        Self {
            radius_km: EARTH_RADIUS_KM,
        }
    }
}

impl DistanceMetric for Haversine {
    fn distance(&self, a: Coordinate, b: Coordinate) -> f64 {
        let lat1 = a.latitude().to_radians();
        let lat2 = b.latitude().to_radians();
        let dlat = (b.latitude() - a.latitude()).to_radians();
        let dlon = (b.longitude() - a.longitude()).to_radians();

        let s_lat = (dlat / 2.0).sin();
        let s_lon = (dlon / 2.0).sin();
        let h = s_lat * s_lat + lat1.cos() * lat2.cos() * s_lon * s_lon;

        2.0 * self.radius_km * h.clamp(0.0, 1.0).sqrt().asin()
    }
}

/// Haversine distance on the mean Earth sphere, in kilometres.
pub fn haversine(a: Coordinate, b: Coordinate) -> f64 {
    Haversine::default().distance(a, b)
}

/// Sum of distances between consecutive coordinates.
///
/// Returns 0 for fewer than two coordinates. No return leg is added.
pub fn route_distance<M: DistanceMetric + ?Sized>(coords: &[Coordinate], metric: &M) -> f64 {
    coords
        .windows(2)
        .map(|pair| metric.distance(pair[0], pair[1]))
        .sum()
}
