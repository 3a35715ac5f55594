#![warn(missing_docs)]
//! Test surfaces for the workspace: golden snapshots, step sweeps, layout
//! metrics, and a JSONL event log.

mod metrics;
mod snapshot;
mod sweep;

use anyhow::{Context, Result};
use numcube_core::Magnitude;
use serde::Serialize;
use std::fs::{self, File};
use std::io::{BufWriter, Write};
use std::path::Path;

pub use metrics::*;
pub use snapshot::*;
pub use sweep::*;

/// One navigation event captured while exploring.
#[derive(Debug, Serialize)]
pub struct StepEvent<'a> {
    /// Step index after the action.
    pub index: usize,
    /// Value shown after the action.
    pub value: Magnitude,
    /// Action label (`next`, `prev`, `reset`, ...).
    pub action: &'a str,
}

/// A sink that writes newline-delimited JSON to disk.
pub struct JsonlSink {
    writer: BufWriter<File>,
}

impl JsonlSink {
    /// Create (or truncate) the log at `path`.
    pub fn create<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        let file =
            File::create(path).with_context(|| format!("creating event log {}", path.display()))?;
        Ok(Self {
            writer: BufWriter::new(file),
        })
    }

    /// Append one record.
    pub fn write<T: Serialize>(&mut self, record: &T) -> Result<()> {
        serde_json::to_writer(&mut self.writer, record)?;
        self.writer.write_all(b"\n")?;
        Ok(())
    }

    /// Flush buffered records to disk.
    pub fn flush(&mut self) -> Result<()> {
        self.writer.flush()?;
        Ok(())
    }
}
