//! One composed stage: the stack, its reference object, and framing.

use numcube_layout::{BlockLayout, LayoutPolicy};
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::framing::{frame_radius, scene_scale, RenderMode, TARGET_MAX_HEIGHT_UNITS};
use crate::reference::{choose_reference_with_tolerance, DEFAULT_TOLERANCE};
use crate::{DecorationHints, ReferenceObject};

/// Gap between the stack and the reference object.
pub const REFERENCE_MARGIN_CM: f64 = 10.0;

/// Tunables for stage composition.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct StageSettings {
    /// How much taller than a reference a stack may be and still use it.
    pub reference_tolerance: f64,
    /// World units the taller of stack and reference is scaled to.
    pub target_max_height_units: f64,
}

impl Default for StageSettings {
    fn default() -> Self {
        Self {
            reference_tolerance: DEFAULT_TOLERANCE,
            target_max_height_units: TARGET_MAX_HEIGHT_UNITS,
        }
    }
}

/// Everything the view layer needs for one step.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Stage {
    /// The cube stack.
    pub layout: BlockLayout,
    /// Object shown for comparison.
    pub reference: ReferenceObject,
    /// World units per centimetre.
    pub scene_scale: f64,
    /// Instanced cubes or a single aggregate box.
    pub render_mode: RenderMode,
    /// Face grids and labels.
    pub decorations: DecorationHints,
    /// X offset of the reference centre from the stack centre, in centimetres.
    pub reference_offset_cm: f64,
    /// Camera distance from the scene centre, in world units.
    pub frame_radius: f64,
}

impl Stage {
    /// Compose the stage for `layout`.
    ///
    /// The reference is treated as a cube as wide as it is tall when placing
    /// it and when framing the camera.
    pub fn compose(layout: BlockLayout, policy: &LayoutPolicy, settings: &StageSettings) -> Self {
        let dims = layout.dimensions;
        let reference = *choose_reference_with_tolerance(dims.max_cm, settings.reference_tolerance);
        let scale = scene_scale(
            dims.max_cm,
            reference.height_cm,
            settings.target_max_height_units,
        );

        let reference_offset_cm =
            dims.width_cm / 2.0 + REFERENCE_MARGIN_CM + reference.height_cm / 2.0;
        let extent_cm = (dims.width_cm + REFERENCE_MARGIN_CM + reference.height_cm)
            .max(dims.height_cm)
            .max(dims.depth_cm)
            .max(reference.height_cm);

        debug!(
            value = %layout.value,
            reference = reference.id,
            scale,
            "composed stage"
        );

        Self {
            layout,
            reference,
            scene_scale: scale,
            render_mode: RenderMode::for_layout(&layout, policy),
            decorations: DecorationHints::for_layout(&layout),
            reference_offset_cm,
            frame_radius: frame_radius(extent_cm * scale),
        }
    }
}
