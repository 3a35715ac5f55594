//! The composed layout for one value.

use numcube_core::Magnitude;
use serde::{Deserialize, Serialize};

use crate::{BlockDimensions, GridShape, LayoutPolicy, UnitChoice};

/// Everything the view layer needs to draw one value.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BlockLayout {
    /// The value laid out.
    pub value: Magnitude,
    /// Unit cube value, side, and count.
    pub unit: UnitChoice,
    /// Arrangement of the unit cubes.
    pub grid: GridShape,
    /// Outer size of the arrangement.
    pub dimensions: BlockDimensions,
}

impl BlockLayout {
    /// Part of the value too small to show as a whole unit cube.
    pub fn remainder(&self) -> Magnitude {
        self.value - self.unit.covered()
    }
}

impl LayoutPolicy {
    /// Unit, grid, and bounding box for `value`.
    pub fn plan(&self, value: Magnitude) -> BlockLayout {
        let unit = self.choose_unit(value);
        let grid = self.compute_grid(unit.instance_count());
        BlockLayout {
            value,
            unit,
            grid,
            dimensions: BlockDimensions::from_grid(grid, unit.unit_side_cm),
        }
    }
}

/// Full layout for `value` under the default policy.
pub fn plan_block(value: Magnitude) -> BlockLayout {
    LayoutPolicy::DEFAULT.plan(value)
}
