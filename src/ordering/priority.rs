//! Stable priority sort.
//!
//! Every label is resolved before anything is reordered, so an unrecognized
//! label fails the whole call and no partial ordering escapes.

use crate::error::Result;
use crate::models::{Priority, Stop};

/// Returns input indices ordered by priority rank, `High` first.
///
/// The sort is stable: stops of equal priority keep their input order.
/// Fails with [`RoutingError::InvalidPriority`](crate::RoutingError::InvalidPriority)
/// for the first stop (in input order) whose label is unrecognized.
///
/// # Examples
///
/// ```
/// use u_delivery::models::{Coordinate, Priority, Stop};
/// use u_delivery::ordering::priority_order;
///
/// let at = Coordinate::new(0.0, 0.0).unwrap();
/// let stops = vec![
///     Stop::new("a", Priority::Low, at),
///     Stop::new("b", Priority::High, at),
///     Stop::new("c", Priority::Low, at),
/// ];
/// assert_eq!(priority_order(&stops).unwrap(), vec![1, 0, 2]);
/// ```
pub fn priority_order(stops: &[Stop]) -> Result<Vec<usize>> {
    let ranks = stops
        .iter()
        .map(Stop::priority)
        .collect::<Result<Vec<Priority>>>()?;

    let mut order: Vec<usize> = (0..stops.len()).collect();
    order.sort_by_key(|&i| ranks[i].rank());
    Ok(order)
}

/// Returns a copy of `stops` sorted by priority rank, `High` first.
///
/// See [`priority_order`] for stability and error semantics. The input is
/// left untouched.
pub fn sort_by_priority(stops: &[Stop]) -> Result<Vec<Stop>> {
    let order = priority_order(stops)?;
    Ok(order.into_iter().map(|i| stops[i].clone()).collect())
}
