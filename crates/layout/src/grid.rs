//! Grid packing: arrange N identical cubes into a rectangular stack.

use serde::{Deserialize, Serialize};

use crate::LayoutPolicy;

/// Below this count a single near-square layer is used.
const SINGLE_LAYER_LIMIT: u32 = 100;

/// How unit cubes are stacked: `grid_x` by `grid_z` per layer, `layers` high.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct GridShape {
    /// Cubes along X.
    pub grid_x: u32,
    /// Cubes along Z.
    pub grid_z: u32,
    /// Cubes along Y.
    pub layers: u32,
}

impl GridShape {
    /// The shape for zero cubes.
    pub const EMPTY: Self = Self::new(0, 0, 0);

    /// Construct a shape.
    pub const fn new(grid_x: u32, grid_z: u32, layers: u32) -> Self {
        Self {
            grid_x,
            grid_z,
            layers,
        }
    }

    /// Cubes in one full layer.
    pub const fn per_layer(&self) -> u32 {
        self.grid_x * self.grid_z
    }

    /// Slots in the whole stack; at least the packed count.
    pub const fn capacity(&self) -> u64 {
        self.grid_x as u64 * self.grid_z as u64 * self.layers as u64
    }

    /// Longest edge in cubes.
    pub fn max_dim(&self) -> u32 {
        self.grid_x.max(self.grid_z).max(self.layers)
    }
}

/// Round numbers that must read as familiar objects: a plate, a cube, and a
/// 5×2 tray instead of a 10-long bar.
fn canonical_shape(count: u32) -> Option<GridShape> {
    match count {
        10 => Some(GridShape::new(5, 2, 1)),
        100 => Some(GridShape::new(10, 10, 1)),
        1000 => Some(GridShape::new(10, 10, 10)),
        _ => None,
    }
}

impl LayoutPolicy {
    /// Arrange `count` cubes with X/Z edges in `1..=grid_edge`.
    pub fn compute_grid(&self, count: u32) -> GridShape {
        if count == 0 {
            return GridShape::EMPTY;
        }

        let edge = self.grid_edge.max(1);
        if let Some(shape) = canonical_shape(count) {
            if shape.grid_x <= edge && shape.grid_z <= edge {
                return shape;
            }
        }

        if count < SINGLE_LAYER_LIMIT {
            near_square(count, edge)
        } else {
            search_compact(count, edge)
        }
    }
}

/// Arrange `count` cubes under the default policy.
pub fn compute_grid_for_count(count: u32) -> GridShape {
    LayoutPolicy::DEFAULT.compute_grid(count)
}

fn near_square(count: u32, edge: u32) -> GridShape {
    let grid_x = (f64::from(count).sqrt().round() as u32).clamp(1, edge);
    let grid_z = count.div_ceil(grid_x).clamp(1, edge);
    let layers = count.div_ceil(grid_x * grid_z);
    GridShape::new(grid_x, grid_z, layers)
}

/// Score every footprint up to `edge`×`edge` and keep the most cube-like.
///
/// Ordering: shortest longest-edge, then least imbalance between the three
/// edges, then fewest empty slots, then smallest footprint. Ties keep the
/// first candidate in X-major order.
fn search_compact(count: u32, edge: u32) -> GridShape {
    let candidates = (1..=edge).flat_map(|grid_x| {
        (1..=edge).map(move |grid_z| {
            let layers = count.div_ceil(grid_x * grid_z);
            GridShape::new(grid_x, grid_z, layers)
        })
    });

    candidates
        .min_by_key(|shape| {
            let (x, z, y) = (shape.grid_x, shape.grid_z, shape.layers);
            let balance = x.abs_diff(z) + x.abs_diff(y) + z.abs_diff(y);
            let waste = shape.capacity() - u64::from(count);
            (shape.max_dim(), balance, waste, shape.per_layer())
        })
        .unwrap_or(GridShape::new(1, 1, count))
}
