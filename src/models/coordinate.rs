//! Geographic coordinate type.

use serde::{Deserialize, Serialize};

use crate::error::{Result, RoutingError};

/// A validated WGS84 position in decimal degrees.
///
/// Latitude must lie in `[-90, 90]` and longitude in `[-180, 180]`; both must
/// be finite. Serializes as a `[latitude, longitude]` pair.
///
/// # Examples
///
/// ```
/// use u_delivery::models::Coordinate;
///
/// let c = Coordinate::new(51.5, -0.12).unwrap();
/// assert_eq!(c.latitude(), 51.5);
/// assert_eq!(c.longitude(), -0.12);
/// assert!(Coordinate::new(91.0, 0.0).is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "[f64; 2]", into = "[f64; 2]")]
pub struct Coordinate {
    latitude: f64,
    longitude: f64,
}

impl Coordinate {
    /// Creates a coordinate, rejecting non-finite or out-of-range values.
    pub fn new(latitude: f64, longitude: f64) -> Result<Self> {
        let lat_ok = latitude.is_finite() && (-90.0..=90.0).contains(&latitude);
        let lon_ok = longitude.is_finite() && (-180.0..=180.0).contains(&longitude);
        if !lat_ok || !lon_ok {
            return Err(RoutingError::MalformedCoordinate {
                latitude,
                longitude,
            });
        }
        Ok(Self {
            latitude,
            longitude,
        })
    }

    /// Latitude in decimal degrees.
    pub fn latitude(&self) -> f64 {
        self.latitude
    }

    /// Longitude in decimal degrees.
    pub fn longitude(&self) -> f64 {
        self.longitude
    }
}

impl TryFrom<[f64; 2]> for Coordinate {
    type Error = RoutingError;

    fn try_from([latitude, longitude]: [f64; 2]) -> Result<Self> {
        Self::new(latitude, longitude)
    }
}

impl From<Coordinate> for [f64; 2] {
    fn from(c: Coordinate) -> Self {
        [c.latitude, c.longitude]
    }
}
