//! numcube - lays out magnitudes as stacks of unit cubes
//!
//! Prints the explorer's step table, a single value, or steps through the
//! table interactively from stdin.

mod config;
mod explorer;
mod report;

use anyhow::{Context, Result};
use clap::Parser;
use config::{ExplorerConfig, DEFAULT_CONFIG_PATH};
use explorer::Explorer;
use numcube_core::Magnitude;
use numcube_layout::LayoutCache;
use numcube_scene::{Stage, StageSettings, StepCursor, NUMBER_STEPS};
use numcube_testkit::{JsonlSink, LayoutMetricsReportBuilder, LayoutMetricsSink};
use report::StageReport;
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use tracing::info;

#[derive(Parser, Debug)]
#[command(name = "numcube", version, about = "Lay out magnitudes as stacks of unit cubes")]
struct Cli {
    /// Lay out one value instead of the step table
    #[arg(short, long)]
    value: Option<Magnitude>,

    /// Print JSON instead of text
    #[arg(long)]
    json: bool,

    /// Show one step of the table, or start the interactive explorer there
    #[arg(short, long)]
    step: Option<usize>,

    /// Read n/p/r/q commands from stdin and print each step
    #[arg(short, long)]
    interactive: bool,

    /// Write the step table layouts as JSON metrics to this path
    #[arg(long)]
    metrics: Option<PathBuf>,

    /// Log interactive navigation as JSONL to this path
    #[arg(long)]
    event_log: Option<PathBuf>,

    /// Save the effective configuration to this path
    #[arg(long)]
    write_config: Option<PathBuf>,

    /// Configuration file
    #[arg(short, long, default_value = DEFAULT_CONFIG_PATH)]
    config: PathBuf,
}

fn main() -> Result<()> {
    // WARN by default, RUST_LOG overrides; stdout stays clean for reports.
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn")),
        )
        .with_writer(io::stderr)
        .init();

    info!("Starting numcube v{}", env!("CARGO_PKG_VERSION"));

    let cli = Cli::parse();
    let config = ExplorerConfig::load_from_path(&cli.config);
    if let Some(path) = &cli.write_config {
        config
            .save_to_path(path)
            .with_context(|| format!("writing config {}", path.display()))?;
        info!(path = %path.display(), "config saved");
    }

    let policy = config.layout_policy();
    let settings = config.stage_settings();
    let mut cache = LayoutCache::new(policy, config.cache_capacity);

    if let Some(path) = &cli.metrics {
        export_metrics(path, &mut cache)?;
    }

    let stdout = io::stdout();
    let mut out = stdout.lock();

    if let Some(value) = cli.value {
        let stage = Stage::compose(cache.layout(value), &policy, &settings);
        return StageReport::for_value(&stage).write_to(&mut out, cli.json);
    }

    if cli.interactive {
        let start = cli.step.unwrap_or(config.start_step);
        let mut explorer = Explorer::new(cache, settings, start)?.with_json(cli.json);
        if let Some(path) = &cli.event_log {
            explorer = explorer.with_event_log(JsonlSink::create(path)?);
        }
        let stdin = io::stdin();
        return explorer.run(stdin.lock(), &mut out);
    }

    if let Some(index) = cli.step {
        let mut cursor = StepCursor::standard();
        let step = cursor.jump(index)?;
        let stage = Stage::compose(cache.layout(step.value), &policy, &settings);
        return StageReport::for_step(index, step, &stage).write_to(&mut out, cli.json);
    }

    print_step_table(&mut out, &mut cache, &settings, cli.json)
}

fn print_step_table<W: Write>(
    out: &mut W,
    cache: &mut LayoutCache,
    settings: &StageSettings,
    json: bool,
) -> Result<()> {
    let policy = cache.policy();
    let stages: Vec<Stage> = NUMBER_STEPS
        .iter()
        .map(|step| Stage::compose(cache.layout(step.value), &policy, settings))
        .collect();
    let reports: Vec<_> = NUMBER_STEPS
        .iter()
        .zip(&stages)
        .enumerate()
        .map(|(index, (step, stage))| StageReport::for_step(index, step, stage))
        .collect();
    report::write_table(out, &reports, json)
}

fn export_metrics(path: &Path, cache: &mut LayoutCache) -> Result<()> {
    let layouts: Vec<_> = NUMBER_STEPS
        .iter()
        .map(|step| cache.layout(step.value))
        .collect();
    let report = LayoutMetricsReportBuilder::new("number_steps")
        .policy(cache.policy())
        .layouts(&layouts)
        .build();
    let sink = LayoutMetricsSink::create(path)?;
    sink.write(&report)?;
    info!(path = %sink.path().display(), layouts = layouts.len(), "metrics written");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use numcube_layout::LayoutPolicy;
    use numcube_testkit::LayoutMetricsReport;
    use std::time::{SystemTime, UNIX_EPOCH};

    fn cache() -> LayoutCache {
        LayoutCache::new(LayoutPolicy::DEFAULT, 8)
    }

    #[test]
    fn cli_defaults_to_the_step_table() {
        let cli = Cli::try_parse_from(["numcube"]).unwrap();
        assert_eq!(cli.value, None);
        assert_eq!(cli.step, None);
        assert!(!cli.json && !cli.interactive);
        assert_eq!(cli.config, PathBuf::from(DEFAULT_CONFIG_PATH));
    }

    #[test]
    fn cli_parses_values_and_paths() {
        let cli = Cli::try_parse_from([
            "numcube",
            "--value",
            "12_345",
            "--json",
            "-s",
            "4",
            "--metrics",
            "out/metrics.json",
            "--config",
            "custom.toml",
        ])
        .unwrap();
        assert_eq!(cli.value, Some(Magnitude::new(12_345)));
        assert!(cli.json);
        assert_eq!(cli.step, Some(4));
        assert_eq!(cli.metrics, Some(PathBuf::from("out/metrics.json")));
        assert_eq!(cli.config, PathBuf::from("custom.toml"));
    }

    #[test]
    fn cli_rejects_negative_values() {
        assert!(Cli::try_parse_from(["numcube", "--value", "-5"]).is_err());
        assert!(Cli::try_parse_from(["numcube", "--value", "12a"]).is_err());
    }

    #[test]
    fn step_table_prints_every_step() {
        let mut out = Vec::new();
        print_step_table(&mut out, &mut cache(), &StageSettings::default(), false).unwrap();
        let text = String::from_utf8(out).unwrap();
        assert!(text.starts_with("#0  1 "), "{text}");
        assert!(text.contains("#24 100,000,000,000,000,000 "), "{text}");
        assert_eq!(text.matches("  unit      ").count(), NUMBER_STEPS.len());
    }

    #[test]
    fn step_table_json_lists_every_step() {
        let mut out = Vec::new();
        let mut cache = cache();
        print_step_table(&mut out, &mut cache, &StageSettings::default(), true).unwrap();
        let json: serde_json::Value = serde_json::from_slice(&out).unwrap();
        let steps = json.as_array().unwrap();
        assert_eq!(steps.len(), NUMBER_STEPS.len());
        assert_eq!(steps[2]["stage"]["layout"]["value"], "1000");
        assert_eq!(cache.stats().misses, NUMBER_STEPS.len() as u64);
    }

    #[test]
    fn metrics_export_round_trips() {
        let path = std::env::temp_dir().join(format!(
            "numcube-cli-metrics-{}/steps.json",
            SystemTime::now()
                .duration_since(UNIX_EPOCH)
                .unwrap()
                .as_nanos()
        ));
        let mut cache = LayoutCache::new(LayoutPolicy::new(5_000, 8), 8);
        export_metrics(&path, &mut cache).unwrap();

        let contents = std::fs::read_to_string(&path).unwrap();
        let report: LayoutMetricsReport = serde_json::from_str(&contents).unwrap();
        assert_eq!(report.name, "number_steps");
        assert_eq!(report.policy, LayoutPolicy::new(5_000, 8));
        assert_eq!(report.layouts.len(), NUMBER_STEPS.len());
        assert_eq!(report.layouts[1].value, Magnitude::new(100));
        assert!(report.layouts[2].collapsed);

        if let Some(dir) = path.parent() {
            std::fs::remove_dir_all(dir).ok();
        }
    }
}
