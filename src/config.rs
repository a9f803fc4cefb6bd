//! Optimizer configuration.

use serde::{Deserialize, Serialize};

use crate::distance::{Haversine, EARTH_RADIUS_KM};
use crate::error::{Result, RoutingError};

/// Default upper bound on stops accepted by the exhaustive search.
pub const DEFAULT_MAX_STOPS: usize = 10;

/// Tunables for [`RouteOptimizer`](crate::RouteOptimizer).
///
/// Missing fields deserialize to their defaults; an invalid radius is
/// rejected during deserialization.
///
/// # Examples
///
/// ```
/// use u_delivery::OptimizerConfig;
///
/// let config = OptimizerConfig::default().with_max_stops(8);
/// assert_eq!(config.max_stops, 8);
/// assert_eq!(config.earth_radius_km, 6371.0);
/// assert!(!config.parallel);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "ConfigFields")]
pub struct OptimizerConfig {
    /// Largest stop count searched; more yields `TooManyStops`.
    pub max_stops: usize,
    /// Sphere radius for the haversine metric.
    pub earth_radius_km: f64,
    /// Score permutation blocks in parallel (`parallel` feature only).
    pub parallel: bool,
}

impl OptimizerConfig {
    /// Sets the stop limit.
    pub fn with_max_stops(mut self, max_stops: usize) -> Self {
        self.max_stops = max_stops;
        self
    }

    /// Sets the sphere radius in kilometres.
    pub fn with_earth_radius_km(mut self, radius_km: f64) -> Self {
        self.earth_radius_km = radius_km;
        self
    }

    /// Enables or disables parallel search.
    pub fn with_parallel(mut self, parallel: bool) -> Self {
        self.parallel = parallel;
        self
    }

    /// Checks that `earth_radius_km` is positive and finite.
    pub fn validate(&self) -> Result<()> {
        Haversine::with_radius(self.earth_radius_km).map(|_| ())
    }
}

impl Default for OptimizerConfig {
    fn default() -> Self {
        Self {
            max_stops: DEFAULT_MAX_STOPS,
            earth_radius_km: EARTH_RADIUS_KM,
            parallel: false,
        }
    }
}

/// Wire form of [`OptimizerConfig`], validated on conversion.
#[derive(Deserialize)]
#[serde(default)]
struct ConfigFields {
    max_stops: usize,
    earth_radius_km: f64,
    parallel: bool,
}

impl Default for ConfigFields {
    fn default() -> Self {
        let config = OptimizerConfig::default();
        Self {
            max_stops: config.max_stops,
            earth_radius_km: config.earth_radius_km,
            parallel: config.parallel,
        }
    }
}

impl TryFrom<ConfigFields> for OptimizerConfig {
    type Error = RoutingError;

    fn try_from(fields: ConfigFields) -> Result<Self> {
        let config = Self {
            max_stops: fields.max_stops,
            earth_radius_km: fields.earth_radius_km,
            parallel: fields.parallel,
        };
        config.validate()?;
        Ok(config)
    }
}
