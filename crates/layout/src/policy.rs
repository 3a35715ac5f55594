//! Fixed limits that bound every layout.

use serde::{Deserialize, Serialize};

/// Most unit cubes a layout will ask the view layer to instance.
pub const MAX_UNIT_INSTANCES: u32 = 10_000;

/// Longest grid edge along X and Z, in unit cubes.
pub const GRID_EDGE: u32 = 10;

/// The limits a layout is computed under.
///
/// The free functions of this crate use [`LayoutPolicy::DEFAULT`]; configured
/// callers construct their own.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct LayoutPolicy {
    /// Instance cap before the unit steps up a bracket.
    pub max_unit_instances: u32,
    /// Longest X/Z grid edge, at most [`GRID_EDGE`].
    pub grid_edge: u32,
}

impl LayoutPolicy {
    /// `MAX_UNIT_INSTANCES` instances on a `GRID_EDGE` footprint.
    pub const DEFAULT: Self = Self {
        max_unit_instances: MAX_UNIT_INSTANCES,
        grid_edge: GRID_EDGE,
    };

    /// Build a policy, clamping the cap to at least 1 and the edge to `1..=GRID_EDGE`.
    pub fn new(max_unit_instances: u32, grid_edge: u32) -> Self {
        Self {
            max_unit_instances: max_unit_instances.max(1),
            grid_edge: grid_edge.clamp(1, GRID_EDGE),
        }
    }
}

impl Default for LayoutPolicy {
    fn default() -> Self {
        Self::DEFAULT
    }
}
