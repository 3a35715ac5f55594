//! Stage sizing and camera framing.

use numcube_layout::{BlockLayout, LayoutPolicy, Magnitude};
use serde::Serialize;

/// World units the taller of stack and reference is scaled to.
pub const TARGET_MAX_HEIGHT_UNITS: f64 = 120.0;
/// Smallest world units per centimetre.
pub const MIN_SCENE_SCALE: f64 = 1e-15;
/// Largest world units per centimetre.
pub const MAX_SCENE_SCALE: f64 = 8.0;
/// Vertical field of view of the stage camera.
pub const CAMERA_FOV_DEGREES: f64 = 35.0;
/// Closest the camera may sit to the scene centre, in world units.
pub const MIN_FRAME_RADIUS: f64 = 70.0;
/// Farthest the camera may sit from the scene centre, in world units.
pub const MAX_FRAME_RADIUS: f64 = 520.0;
/// Share of the view the scene should fill.
const FRAME_FILL: f64 = 0.62;

/// World units per centimetre so the taller of the stack and the reference
/// fits `target_units`.
pub fn scene_scale(max_cm: f64, reference_height_cm: f64, target_units: f64) -> f64 {
    let raw_max = max_cm.max(reference_height_cm);
    if raw_max <= 0.0 {
        return MAX_SCENE_SCALE;
    }
    (target_units / raw_max).clamp(MIN_SCENE_SCALE, MAX_SCENE_SCALE)
}

/// Camera distance that frames a scene whose largest extent is `extent_units`.
pub fn frame_radius(extent_units: f64) -> f64 {
    let half_fov = CAMERA_FOV_DEGREES.to_radians() / 2.0;
    let extent = extent_units.max(1.0);
    (extent * FRAME_FILL / half_fov.tan()).clamp(MIN_FRAME_RADIUS, MAX_FRAME_RADIUS)
}

/// How the view layer should draw a stack.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum RenderMode {
    /// One instance per unit cube.
    Instanced,
    /// A single box with the stack's bounding dimensions.
    Aggregate,
}

impl RenderMode {
    /// Instance when there is something to instance and the count is under the cap.
    pub fn for_layout(layout: &BlockLayout, policy: &LayoutPolicy) -> Self {
        let count = layout.unit.unit_count;
        if !count.is_zero() && count <= Magnitude::from(policy.max_unit_instances) {
            Self::Instanced
        } else {
            Self::Aggregate
        }
    }
}
