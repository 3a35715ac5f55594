//! Step sweeps: golden snapshots over a sequence of values.
//!
//! A sweep visits each value in order, captures a serializable snapshot of
//! whatever the test cares about, and compares the whole report against a
//! golden JSON file (or rewrites it when `NUMCUBE_UPDATE_SNAPSHOTS=1`).

use crate::snapshot::{assert_json_snapshot, SnapshotOutcome};
use anyhow::Result;
use numcube_core::Magnitude;
use serde::Serialize;
use std::path::PathBuf;

/// Configuration for a sweep.
#[derive(Debug, Clone)]
pub struct SweepConfig {
    /// Human-readable name written into the report.
    pub name: String,
    /// Path to the golden JSON file.
    pub snapshot_path: PathBuf,
}

/// Snapshot captured for one value.
#[derive(Debug, Clone, Serialize)]
pub struct SweepFrame<S> {
    /// Position in the sweep.
    pub index: usize,
    /// Value visited.
    pub value: Magnitude,
    /// Snapshot payload.
    pub snapshot: S,
}

#[derive(Debug, Clone, Serialize)]
struct SweepReport<S> {
    name: String,
    frames: Vec<SweepFrame<S>>,
}

/// Snapshot every value in `values` and assert the report against the golden file.
pub fn run_sweep<I, S, F>(
    config: SweepConfig,
    values: I,
    mut snapshot: F,
) -> Result<SnapshotOutcome>
where
    I: IntoIterator<Item = Magnitude>,
    S: Serialize,
    F: FnMut(Magnitude) -> S,
{
    let frames = values
        .into_iter()
        .enumerate()
        .map(|(index, value)| SweepFrame {
            index,
            value,
            snapshot: snapshot(value),
        })
        .collect();

    let report = SweepReport {
        name: config.name,
        frames,
    };
    assert_json_snapshot(config.snapshot_path, &report)
}
