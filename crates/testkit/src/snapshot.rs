//! Golden-file JSON snapshots.
//!
//! Values are serialized as pretty JSON with object keys sorted, so a golden
//! file only changes when a layout does. Tests compare against the file on
//! disk; rerun with `NUMCUBE_UPDATE_SNAPSHOTS=1` to rewrite it.

use anyhow::{Context, Result};
use serde::Serialize;
use serde_json::Value;
use std::fs;
use std::path::Path;
use tracing::info;

/// Environment variable that switches snapshot asserts into update mode.
pub const UPDATE_SNAPSHOTS_ENV: &str = "NUMCUBE_UPDATE_SNAPSHOTS";

/// What a snapshot assert did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SnapshotOutcome {
    /// The golden file matched.
    Matched,
    /// Update mode was on and the golden file was rewritten.
    Updated,
}

/// Assert that `value` matches the golden JSON at `path`.
///
/// In update mode the file is (re)written instead and the assert passes.
pub fn assert_json_snapshot<P: AsRef<Path>, T: Serialize>(
    path: P,
    value: &T,
) -> Result<SnapshotOutcome> {
    compare_or_update(path.as_ref(), value, update_requested())
}

fn compare_or_update<T: Serialize>(
    path: &Path,
    value: &T,
    update: bool,
) -> Result<SnapshotOutcome> {
    let actual = canonical_json(value)?;

    if update {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)
                .with_context(|| format!("creating snapshot directory {}", parent.display()))?;
        }
        fs::write(path, &actual)
            .with_context(|| format!("writing snapshot {}", path.display()))?;
        info!(path = %path.display(), "snapshot updated");
        return Ok(SnapshotOutcome::Updated);
    }

    let expected = fs::read_to_string(path).with_context(|| {
        format!(
            "snapshot missing at {} (rerun with {UPDATE_SNAPSHOTS_ENV}=1 to create it)",
            path.display()
        )
    })?;

    if let Some((line, want, got)) = first_difference(&expected, &actual) {
        anyhow::bail!(
            "snapshot mismatch at {} line {line}: expected `{want}`, got `{got}` \
             (rerun with {UPDATE_SNAPSHOTS_ENV}=1 to update)",
            path.display()
        );
    }
    if expected != actual {
        anyhow::bail!(
            "snapshot mismatch at {}: line endings or trailing newline differ \
             (rerun with {UPDATE_SNAPSHOTS_ENV}=1 to update)",
            path.display()
        );
    }

    Ok(SnapshotOutcome::Matched)
}

fn update_requested() -> bool {
    std::env::var(UPDATE_SNAPSHOTS_ENV)
        .map(|v| matches!(v.to_ascii_lowercase().as_str(), "1" | "true" | "yes"))
        .unwrap_or(false)
}

/// First line (1-based) where the two texts differ, with both versions.
fn first_difference<'a>(
    expected: &'a str,
    actual: &'a str,
) -> Option<(usize, &'a str, &'a str)> {
    let mut want = expected.lines();
    let mut got = actual.lines();
    let mut line = 1;
    loop {
        match (want.next(), got.next()) {
            (None, None) => return None,
            (w, g) if w == g => line += 1,
            (w, g) => return Some((line, w.unwrap_or("<eof>"), g.unwrap_or("<eof>"))),
        }
    }
}

fn canonical_json<T: Serialize>(value: &T) -> Result<String> {
    let value = serde_json::to_value(value).context("serializing snapshot value")?;
    let mut text =
        serde_json::to_string_pretty(&sort_keys(value)).context("formatting snapshot JSON")?;
    text.push('\n');
    Ok(text)
}

fn sort_keys(value: Value) -> Value {
    match value {
        Value::Object(map) => {
            let mut entries: Vec<_> = map.into_iter().collect();
            entries.sort_by(|a, b| a.0.cmp(&b.0));
            Value::Object(entries.into_iter().map(|(k, v)| (k, sort_keys(v))).collect())
        }
        Value::Array(items) => Value::Array(items.into_iter().map(sort_keys).collect()),
        other => other,
    }
}
