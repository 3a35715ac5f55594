//! Layout metrics exported as JSON for CI artifacts and offline comparison.
//!
//! A report lists the layout chosen for each value of a run together with
//! the policy it was computed under, so two reports can be diffed when the
//! packing heuristics change.

use anyhow::{Context, Result};
use numcube_core::Magnitude;
use numcube_layout::{BlockLayout, LayoutPolicy};
use serde::{Deserialize, Serialize};
use std::fs::{self, File};
use std::io::Write;
use std::path::{Path, PathBuf};

/// Flattened view of one [`BlockLayout`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LayoutMetric {
    /// The value laid out.
    pub value: Magnitude,
    /// Value of one unit cube.
    pub unit_value: Magnitude,
    /// Number of unit cubes.
    pub unit_count: Magnitude,
    /// Side of one unit cube (cm).
    pub unit_side_cm: f64,
    /// `[grid_x, grid_z, layers]`.
    pub grid: [u32; 3],
    /// Largest bounding-box edge (cm).
    pub max_cm: f64,
    /// Whether the collapse convention applied.
    pub collapsed: bool,
}

impl From<&BlockLayout> for LayoutMetric {
    fn from(layout: &BlockLayout) -> Self {
        Self {
            value: layout.value,
            unit_value: layout.unit.unit_value,
            unit_count: layout.unit.unit_count,
            unit_side_cm: layout.unit.unit_side_cm,
            grid: [layout.grid.grid_x, layout.grid.grid_z, layout.grid.layers],
            max_cm: layout.dimensions.max_cm,
            collapsed: layout.unit.collapsed,
        }
    }
}

/// A full metrics export.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LayoutMetricsReport {
    /// Run identifier.
    pub name: String,
    /// When the report was built (RFC 3339).
    pub timestamp: String,
    /// Limits the layouts were computed under.
    pub policy: LayoutPolicy,
    /// One entry per value, in visiting order.
    pub layouts: Vec<LayoutMetric>,
}

/// Builder for [`LayoutMetricsReport`].
pub struct LayoutMetricsReportBuilder {
    report: LayoutMetricsReport,
}

impl LayoutMetricsReportBuilder {
    /// Start a report stamped with the current time.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            report: LayoutMetricsReport {
                name: name.into(),
                timestamp: chrono::Utc::now().to_rfc3339(),
                policy: LayoutPolicy::DEFAULT,
                layouts: Vec::new(),
            },
        }
    }

    /// Record the policy in effect.
    pub fn policy(mut self, policy: LayoutPolicy) -> Self {
        self.report.policy = policy;
        self
    }

    /// Append one layout.
    pub fn layout(mut self, layout: &BlockLayout) -> Self {
        self.report.layouts.push(LayoutMetric::from(layout));
        self
    }

    /// Append several layouts.
    pub fn layouts<'a>(mut self, layouts: impl IntoIterator<Item = &'a BlockLayout>) -> Self {
        self.report
            .layouts
            .extend(layouts.into_iter().map(LayoutMetric::from));
        self
    }

    /// Finish the report.
    pub fn build(self) -> LayoutMetricsReport {
        self.report
    }
}

/// Writes metrics reports as pretty JSON.
pub struct LayoutMetricsSink {
    path: PathBuf,
}

impl LayoutMetricsSink {
    /// Point a sink at `path`, creating parent directories if needed.
    pub fn create<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref().to_path_buf();
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)
                .with_context(|| format!("creating metrics directory {}", parent.display()))?;
        }
        Ok(Self { path })
    }

    /// Path the sink writes to.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Overwrite the file with `report`.
    pub fn write(&self, report: &LayoutMetricsReport) -> Result<()> {
        let json = serde_json::to_string_pretty(report)?;
        let mut file = File::create(&self.path)
            .with_context(|| format!("creating metrics file {}", self.path.display()))?;
        file.write_all(json.as_bytes())?;
        file.write_all(b"\n")?;
        Ok(())
    }
}
