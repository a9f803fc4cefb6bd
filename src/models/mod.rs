//! Domain model types for delivery route optimization.
//!
//! Provides validated coordinates, stops carrying a priority label,
//! ordered routes, and the result returned to callers.

mod coordinate;
mod route;
mod stop;

pub use coordinate::Coordinate;
pub use route::{Route, RouteResult};
pub use stop::{ParsePriorityError, Priority, Stop};
