//! Error type shared by every fallible routing operation.

use thiserror::Error;

/// Errors raised while validating or optimizing a set of delivery stops.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum RoutingError {
    /// A stop's priority label is not one of `high`, `medium` or `low`.
    #[error("stop {stop_id} has unrecognized priority {label:?}")]
    InvalidPriority {
        /// Identifier of the offending stop.
        stop_id: String,
        /// The label as supplied by the caller.
        label: String,
    },
    /// Latitude or longitude is out of range or not finite.
    #[error("coordinate ({latitude}, {longitude}) is outside [-90, 90] x [-180, 180]")]
    MalformedCoordinate {
        /// Latitude in decimal degrees.
        latitude: f64,
        /// Longitude in decimal degrees.
        longitude: f64,
    },
    /// A configuration value is outside its valid range.
    #[error("invalid {field}: {value}")]
    InvalidConfig {
        /// Name of the offending setting.
        field: &'static str,
        /// The rejected value.
        value: f64,
    },
    /// More stops than the configured exhaustive-search limit.
    #[error("{count} stops exceed the exhaustive search limit of {limit}")]
    TooManyStops {
        /// Number of stops supplied.
        count: usize,
        /// Configured `max_stops`.
        limit: usize,
    },
}

/// Convenience alias used across the crate.
pub type Result<T> = std::result::Result<T, RoutingError>;
