//! Priority pre-ordering of stops.
//!
//! - [`sort_by_priority`] — stable sort of stops by priority rank
//! - [`priority_order`] — the same ordering as input indices

mod priority;

pub use priority::{priority_order, sort_by_priority};
