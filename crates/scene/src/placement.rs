//! Where each unit cube of a stack sits.
//!
//! Cubes fill a layer row by row along X, then Z, then move up a layer. The
//! footprint is centred on the origin and the bottom layer rests on `y = 0`.
//! Positions are cube centres in centimetres; the view layer multiplies by
//! its scene scale.

use glam::DVec3;
use numcube_layout::{BlockLayout, GridShape};

/// Centre of cube `index` in a `grid` of cubes with side `side_cm`.
pub fn instance_position(index: u32, grid: GridShape, side_cm: f64) -> DVec3 {
    let per_layer = grid.per_layer().max(1);
    let layer = index / per_layer;
    let within = index % per_layer;
    let x = within % grid.grid_x.max(1);
    let z = within / grid.grid_x.max(1);

    let half_width = f64::from(grid.grid_x) * side_cm / 2.0;
    let half_depth = f64::from(grid.grid_z) * side_cm / 2.0;
    DVec3::new(
        -half_width + (f64::from(x) + 0.5) * side_cm,
        (f64::from(layer) + 0.5) * side_cm,
        -half_depth + (f64::from(z) + 0.5) * side_cm,
    )
}

/// Centres of every unit cube in `layout`, one per instance.
pub fn instance_positions(layout: &BlockLayout) -> impl ExactSizeIterator<Item = DVec3> {
    let grid = layout.grid;
    let side = layout.unit.unit_side_cm;
    (0..layout.unit.instance_count()).map(move |index| instance_position(index, grid, side))
}
