#![warn(missing_docs)]
//! Scene-side data for the number cube explorer.
//!
//! Everything here is what the view layer consumes besides the raw layout:
//! the fixed sequence of values to step through, the real-world objects the
//! cube stack is compared against, how big the stage should be, where each
//! unit cube sits, and which decorations a stack gets.

pub mod decoration;
pub mod framing;
pub mod placement;
pub mod reference;
pub mod stage;
pub mod steps;

pub use decoration::DecorationHints;
pub use framing::{frame_radius, scene_scale, RenderMode};
pub use placement::{instance_position, instance_positions};
pub use reference::{choose_reference, ReferenceKind, ReferenceObject, REFERENCES};
pub use stage::{Stage, StageSettings};
pub use steps::{NumberStep, StepCursor, StepError, NUMBER_STEPS};
