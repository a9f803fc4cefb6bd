//! # u-delivery
//!
//! Priority-aware delivery route optimization. Stops carrying a geographic
//! coordinate and a priority class are pre-ordered by priority, then every
//! visiting order is enumerated to find the exact shortest open path under
//! the haversine great-circle metric.
//!
//! The search is exact and O(n!·n); [`OptimizerConfig::max_stops`] bounds
//! the input size.
//!
//! ## Modules
//!
//! - [`models`] — Domain model types (Coordinate, Stop, Priority, Route, RouteResult)
//! - [`distance`] — Haversine metric and dense distance matrix
//! - [`ordering`] — Stable priority pre-ordering
//! - [`search`] — Exhaustive permutation search and its index generator
//!
//! ## Example
//!
//! ```
//! use u_delivery::models::{Coordinate, Priority, Stop};
//!
//! let stops = vec![
//!     Stop::new("Delivery 1", Priority::High, Coordinate::new(0.0, 0.0).unwrap()),
//!     Stop::new("Delivery 2", Priority::High, Coordinate::new(0.0, 1.0).unwrap()),
//!     Stop::new("Delivery 3", Priority::High, Coordinate::new(1.0, 0.0).unwrap()),
//! ];
//! let result = u_delivery::optimize(&stops).unwrap();
//! assert_eq!(result.len(), 3);
//! println!("Total Distance: {:.2} km", result.total_distance());
//! ```

mod config;
pub mod distance;
mod error;
pub mod models;
mod optimizer;
pub mod ordering;
pub mod search;

pub use config::{OptimizerConfig, DEFAULT_MAX_STOPS};
pub use error::{Result, RoutingError};
pub use optimizer::{optimize, RouteOptimizer};
