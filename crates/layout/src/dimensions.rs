//! Bounding box of a packed cube stack.

use numcube_core::Magnitude;
use serde::{Deserialize, Serialize};

use crate::{GridShape, LayoutPolicy};

/// Outer size of a stack, in centimetres.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct BlockDimensions {
    /// Extent along X.
    pub width_cm: f64,
    /// Extent along Y; at least one unit side even when empty.
    pub height_cm: f64,
    /// Extent along Z.
    pub depth_cm: f64,
    /// Largest of the three; drives camera framing and reference choice.
    pub max_cm: f64,
}

impl BlockDimensions {
    /// Size of `grid` built from cubes with side `unit_side_cm`.
    pub fn from_grid(grid: GridShape, unit_side_cm: f64) -> Self {
        let width_cm = f64::from(grid.grid_x) * unit_side_cm;
        let depth_cm = f64::from(grid.grid_z) * unit_side_cm;
        let height_cm = f64::from(grid.layers.max(1)) * unit_side_cm;
        Self {
            width_cm,
            height_cm,
            depth_cm,
            max_cm: width_cm.max(height_cm).max(depth_cm),
        }
    }
}

impl LayoutPolicy {
    /// Bounding box of the stack that represents `value`.
    pub fn estimate_dimensions(&self, value: Magnitude) -> BlockDimensions {
        self.plan(value).dimensions
    }
}

/// Bounding box of the stack for `value` under the default policy.
pub fn estimate_block_dimensions_cm(value: Magnitude) -> BlockDimensions {
    LayoutPolicy::DEFAULT.estimate_dimensions(value)
}
