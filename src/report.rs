//! Text and JSON renderings of composed stages.

use anyhow::Result;
use numcube_core::Magnitude;
use numcube_scene::{NumberStep, RenderMode, Stage};
use serde::Serialize;
use std::fmt;
use std::io::Write;

/// One stage as printed by the CLI, optionally tagged with its step.
#[derive(Debug, Serialize)]
pub struct StageReport<'a> {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub index: Option<usize>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub step: Option<&'a NumberStep>,
    pub stage: &'a Stage,
}

impl<'a> StageReport<'a> {
    pub fn for_step(index: usize, step: &'a NumberStep, stage: &'a Stage) -> Self {
        Self {
            index: Some(index),
            step: Some(step),
            stage,
        }
    }

    pub fn for_value(stage: &'a Stage) -> Self {
        Self {
            index: None,
            step: None,
            stage,
        }
    }

    /// Write as text, or as a single JSON line.
    pub fn write_to<W: Write>(&self, out: &mut W, json: bool) -> Result<()> {
        if json {
            serde_json::to_writer(&mut *out, self)?;
            writeln!(out)?;
        } else {
            writeln!(out, "{self}")?;
        }
        Ok(())
    }
}

/// Print every report, as text blocks or one pretty JSON array.
pub fn write_table<W: Write>(out: &mut W, reports: &[StageReport<'_>], json: bool) -> Result<()> {
    if json {
        serde_json::to_writer_pretty(&mut *out, reports)?;
        writeln!(out)?;
        return Ok(());
    }
    for report in reports {
        writeln!(out, "{report}\n")?;
    }
    Ok(())
}

/// Whole centimetres print without a fraction.
fn cm(value: f64) -> String {
    if value.fract() == 0.0 && value.abs() < 1e15 {
        format!("{value:.0}")
    } else {
        format!("{value}")
    }
}

impl fmt::Display for StageReport<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let stage = self.stage;
        let layout = &stage.layout;
        let unit = &layout.unit;
        let grid = &layout.grid;
        let dims = &layout.dimensions;

        match (self.index, self.step) {
            (Some(index), Some(step)) => writeln!(
                f,
                "#{index:<2} {}  {}",
                layout.value.grouped(),
                step.spoken
            )?,
            _ => writeln!(f, "{}", layout.value.grouped())?,
        }

        write!(
            f,
            "  unit      {} x {} ({} cm cubes",
            unit.unit_value.grouped(),
            unit.unit_count.grouped(),
            cm(unit.unit_side_cm)
        )?;
        if unit.collapsed {
            write!(f, ", collapsed")?;
        }
        writeln!(f, ")")?;

        let remainder = layout.remainder();
        if remainder != Magnitude::ZERO {
            writeln!(f, "  remainder {}", remainder.grouped())?;
        }

        writeln!(
            f,
            "  grid      {} x {} x {}",
            grid.grid_x, grid.grid_z, grid.layers
        )?;
        writeln!(
            f,
            "  size      {} x {} x {} cm",
            cm(dims.width_cm),
            cm(dims.depth_cm),
            cm(dims.height_cm)
        )?;
        writeln!(
            f,
            "  reference {} ({} cm)",
            stage.reference.name,
            cm(stage.reference.height_cm)
        )?;

        let mode = match stage.render_mode {
            RenderMode::Instanced => "instanced",
            RenderMode::Aggregate => "aggregate",
        };
        write!(f, "  render    {mode}, scale {:e}", stage.scene_scale)?;
        if stage.decorations.face_grid {
            write!(f, ", face grid")?;
        }
        if let Some(label) = &stage.decorations.value_label {
            write!(f, ", label {label}")?;
        }
        Ok(())
    }
}
