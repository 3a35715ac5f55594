//! Property-based tests for stage composition
//!
//! - Every unit cube gets its own cell inside the bounding box
//! - The chosen reference is tall enough unless it is the last resort
//! - Scale and camera distance stay inside their limits

use std::collections::HashSet;

use numcube_layout::{plan_block, LayoutPolicy, Magnitude};
use numcube_scene::framing::{
    MAX_FRAME_RADIUS, MAX_SCENE_SCALE, MIN_FRAME_RADIUS, MIN_SCENE_SCALE,
};
use numcube_scene::{
    choose_reference, frame_radius, instance_positions, scene_scale, Stage, StageSettings,
    REFERENCES,
};
use proptest::prelude::*;

fn magnitude() -> impl Strategy<Value = Magnitude> {
    prop_oneof![
        (1u128..10_000).prop_map(Magnitude::new),
        (1u128..=100_000_000_000_000_000).prop_map(Magnitude::new),
    ]
}

proptest! {
    /// Property: positions are distinct and inside the block
    #[test]
    fn positions_are_distinct_and_contained(value in magnitude()) {
        let layout = plan_block(value);
        let dims = layout.dimensions;
        let half = layout.unit.unit_side_cm / 2.0;
        let slack = dims.max_cm * 1e-12;

        let mut seen = HashSet::new();
        for p in instance_positions(&layout) {
            prop_assert!(seen.insert((p.x.to_bits(), p.y.to_bits(), p.z.to_bits())));
            prop_assert!(p.x.abs() + half <= dims.width_cm / 2.0 + slack);
            prop_assert!(p.z.abs() + half <= dims.depth_cm / 2.0 + slack);
            prop_assert!(p.y - half >= -slack);
            prop_assert!(p.y + half <= dims.height_cm + slack);
        }
        prop_assert_eq!(seen.len() as u32, layout.unit.instance_count());
    }

    /// Property: the reference covers the block, or is the largest one
    #[test]
    fn reference_is_tall_enough_or_last(height in 0.0f64..1e14) {
        let reference = choose_reference(height);
        let last = &REFERENCES[REFERENCES.len() - 1];
        prop_assert!(height <= reference.height_cm * 1.4 || reference.id == last.id);
    }

    /// Property: a taller block never gets a smaller reference
    #[test]
    fn reference_height_is_monotone(a in 0.0f64..1e12, b in 0.0f64..1e12) {
        let (low, high) = if a <= b { (a, b) } else { (b, a) };
        prop_assert!(choose_reference(low).height_cm <= choose_reference(high).height_cm);
    }

    /// Property: scene scale and frame radius are clamped
    #[test]
    fn framing_is_clamped(max_cm in 0.0f64..1e18, reference in 0.0f64..1e11, extent in 0.0f64..1e6) {
        let scale = scene_scale(max_cm, reference, 120.0);
        prop_assert!((MIN_SCENE_SCALE..=MAX_SCENE_SCALE).contains(&scale));
        let radius = frame_radius(extent);
        prop_assert!((MIN_FRAME_RADIUS..=MAX_FRAME_RADIUS).contains(&radius));
    }

    /// Property: composing a stage keeps the layout it was given
    #[test]
    fn stage_keeps_its_layout(value in magnitude()) {
        let layout = plan_block(value);
        let stage = Stage::compose(layout, &LayoutPolicy::DEFAULT, &StageSettings::default());
        prop_assert_eq!(stage.layout, layout);
        prop_assert!(stage.reference_offset_cm > layout.dimensions.width_cm / 2.0);
    }
}
