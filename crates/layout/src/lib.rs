#![warn(missing_docs)]
//! Magnitude layout: how many cubes of what size represent a value, and how
//! they stack.
//!
//! A value is decomposed into a power-of-1000 *unit* and an instance count
//! ([`choose_unit_for_value`]), the count is packed into a bounded 3D grid
//! ([`compute_grid_for_count`]), and the two combine into a bounding box in
//! centimetres ([`estimate_block_dimensions_cm`]). Every function is pure;
//! [`LayoutCache`] memoizes whole [`BlockLayout`]s for callers that revisit
//! the same values.

mod cache;
mod dimensions;
mod grid;
mod plan;
mod policy;
mod unit;

pub use cache::{CacheStats, LayoutCache};
pub use dimensions::{estimate_block_dimensions_cm, BlockDimensions};
pub use grid::{compute_grid_for_count, GridShape};
pub use plan::{plan_block, BlockLayout};
pub use policy::{LayoutPolicy, GRID_EDGE, MAX_UNIT_INSTANCES};
pub use unit::{choose_unit_for_value, UnitChoice};

pub use numcube_core::Magnitude;
