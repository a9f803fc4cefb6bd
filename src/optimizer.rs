//! Single entry point composing priority ordering and exact search.

use crate::config::OptimizerConfig;
use crate::distance::{DistanceMetric, Haversine};
use crate::error::{Result, RoutingError};
use crate::models::{RouteResult, Stop};
use crate::ordering::sort_by_priority;
use crate::search::ExhaustiveSearch;

/// Orders delivery stops by priority, then finds the shortest visiting order.
///
/// The search runs over the priority-sorted list, so among routes of equal
/// length the one reached first from that arrangement is returned. Sorting
/// never changes the optimal distance itself.
///
/// # Examples
///
/// ```
/// use u_delivery::models::{Coordinate, Priority, Stop};
/// use u_delivery::RouteOptimizer;
///
/// let stops = vec![
///     Stop::new("a", Priority::Low, Coordinate::new(0.0, 2.0).unwrap()),
///     Stop::new("b", Priority::High, Coordinate::new(0.0, 0.0).unwrap()),
///     Stop::new("c", Priority::Medium, Coordinate::new(0.0, 1.0).unwrap()),
/// ];
/// let result = RouteOptimizer::default().optimize(&stops).unwrap();
/// assert_eq!(result.len(), 3);
/// assert_eq!(result.coordinates()[0], Coordinate::new(0.0, 0.0).unwrap());
/// assert!((result.total_distance() - 222.39).abs() < 0.01);
/// ```
#[derive(Debug, Clone)]
pub struct RouteOptimizer<M = Haversine> {
    config: OptimizerConfig,
    metric: M,
}

impl RouteOptimizer<Haversine> {
    /// Creates an optimizer using the haversine metric at the configured
    /// radius.
    ///
    /// # Errors
    ///
    /// [`RoutingError::InvalidConfig`] if `earth_radius_km` is not positive
    /// and finite.
    pub fn new(config: OptimizerConfig) -> Result<Self> {
        let metric = Haversine::with_radius(config.earth_radius_km)?;
        Ok(Self::with_metric(config, metric))
    }
}

impl Default for RouteOptimizer<Haversine> {
    fn default() -> Self {
        Self::with_metric(OptimizerConfig::default(), Haversine::default())
    }
}

impl<M: DistanceMetric> RouteOptimizer<M> {
    /// Creates an optimizer with a caller-supplied metric.
    ///
    /// `config.earth_radius_km` is not consulted.
    pub fn with_metric(config: OptimizerConfig, metric: M) -> Self {
        Self { config, metric }
    }

    /// Active configuration.
    pub fn config(&self) -> &OptimizerConfig {
        &self.config
    }

    /// Distance metric in use.
    pub fn metric(&self) -> &M {
        &self.metric
    }

    /// Optimizes the visiting order of `stops`.
    ///
    /// # Errors
    ///
    /// - [`RoutingError::InvalidPriority`] if any stop's label is
    ///   unrecognized; no distances are computed.
    /// - [`RoutingError::TooManyStops`] if there are more stops than
    ///   `max_stops`.
    pub fn optimize(&self, stops: &[Stop]) -> Result<RouteResult> {
        let sorted = sort_by_priority(stops)?;

        if sorted.len() > self.config.max_stops {
            return Err(RoutingError::TooManyStops {
                count: sorted.len(),
                limit: self.config.max_stops,
            });
        }

        log::debug!(
            "optimizing {} stops (parallel: {})",
            sorted.len(),
            self.config.parallel
        );

        let search = ExhaustiveSearch::new().with_parallel(self.config.parallel);
        let (route, total_distance) = search.shortest_route(&sorted, &self.metric);
        Ok(RouteResult::from_route(&route, total_distance))
    }
}

/// Optimizes `stops` with the default configuration.
///
/// Shorthand for `RouteOptimizer::default().optimize(stops)`.
pub fn optimize(stops: &[Stop]) -> Result<RouteResult> {
    RouteOptimizer::default().optimize(stops)
}
