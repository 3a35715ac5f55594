//! Decorations drawn on unit cubes.

use numcube_layout::{BlockLayout, Magnitude};
use serde::Serialize;

/// Largest stack whose thousand-cubes get a 10×10 face grid.
pub const FACE_GRID_MAX_INSTANCES: u32 = 800;
/// Largest stack whose cubes get a value label.
pub const LABEL_MAX_INSTANCES: u32 = 40;

/// Extra detail for the unit cubes of one stack.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DecorationHints {
    /// Draw 10×10 lines on each face, showing a thousand-cube is made of ones.
    pub face_grid: bool,
    /// Text printed on each cube face, e.g. `1,000,000`.
    pub value_label: Option<String>,
}

impl DecorationHints {
    /// Decorations for `layout`; empty and large stacks stay plain.
    pub fn for_layout(layout: &BlockLayout) -> Self {
        let unit = &layout.unit;
        let count = unit.instance_count();
        let shown = count > 0;
        let face_grid =
            shown && unit.unit_value == Magnitude::THOUSAND && count <= FACE_GRID_MAX_INSTANCES;
        let value_label = (shown
            && unit.unit_value >= Magnitude::THOUSAND
            && count <= LABEL_MAX_INSTANCES)
            .then(|| unit.unit_value.grouped());
        Self {
            face_grid,
            value_label,
        }
    }
}
