use anyhow::Result;
use numcube_layout::{LayoutPolicy, GRID_EDGE, MAX_UNIT_INSTANCES};
use numcube_scene::framing::TARGET_MAX_HEIGHT_UNITS;
use numcube_scene::reference::DEFAULT_TOLERANCE;
use numcube_scene::{StageSettings, NUMBER_STEPS};
use serde::{Deserialize, Serialize};
use std::{fs, path::Path};
use tracing::warn;

pub const DEFAULT_CONFIG_PATH: &str = "config/numcube.toml";

const DEFAULT_CACHE_CAPACITY: usize = 64;

#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct ExplorerConfig {
    /// Instance cap before the unit steps up a bracket.
    pub max_unit_instances: u32,
    /// Longest X/Z grid edge, 1 to 10.
    pub grid_edge: u32,
    /// How much taller than a reference object a stack may be and still use it.
    pub reference_tolerance: f64,
    /// World units the taller of stack and reference is scaled to.
    pub target_max_height_units: f64,
    /// Layouts kept in the LRU cache.
    pub cache_capacity: usize,
    /// Step the interactive explorer opens on.
    pub start_step: usize,
}

impl Default for ExplorerConfig {
    fn default() -> Self {
        Self {
            max_unit_instances: MAX_UNIT_INSTANCES,
            grid_edge: GRID_EDGE,
            reference_tolerance: DEFAULT_TOLERANCE,
            target_max_height_units: TARGET_MAX_HEIGHT_UNITS,
            cache_capacity: DEFAULT_CACHE_CAPACITY,
            start_step: 0,
        }
    }
}

impl ExplorerConfig {
    /// Load configuration from an explicit path, falling back to defaults on errors.
    pub fn load_from_path(path: &Path) -> Self {
        let config = match fs::read_to_string(path) {
            Ok(contents) => match toml::from_str::<ExplorerConfig>(&contents) {
                Ok(cfg) => cfg,
                Err(err) => {
                    warn!("Failed to parse {}: {err}. Using defaults", path.display());
                    ExplorerConfig::default()
                }
            },
            Err(err) => {
                if path != Path::new(DEFAULT_CONFIG_PATH)
                    || err.kind() != std::io::ErrorKind::NotFound
                {
                    warn!("Failed to read {}: {err}. Using defaults", path.display());
                }
                ExplorerConfig::default()
            }
        };
        config.sanitized()
    }

    /// Save configuration to an explicit path.
    pub fn save_to_path(&self, path: &Path) -> Result<()> {
        let toml = toml::to_string_pretty(self)?;
        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent)?;
            }
        }
        fs::write(path, toml)?;
        Ok(())
    }

    /// Clamp every field into the range the explorer can use.
    pub fn sanitized(mut self) -> Self {
        let policy = LayoutPolicy::new(self.max_unit_instances, self.grid_edge);
        if policy.max_unit_instances != self.max_unit_instances
            || policy.grid_edge != self.grid_edge
        {
            warn!(
                max_unit_instances = self.max_unit_instances,
                grid_edge = self.grid_edge,
                "layout limits clamped"
            );
        }
        self.max_unit_instances = policy.max_unit_instances;
        self.grid_edge = policy.grid_edge;

        if self.reference_tolerance.is_nan() || self.reference_tolerance < 1.0 {
            warn!(
                tolerance = self.reference_tolerance,
                "reference tolerance below 1, using 1"
            );
            self.reference_tolerance = 1.0;
        }
        if !(self.target_max_height_units.is_finite() && self.target_max_height_units > 0.0) {
            warn!(
                target = self.target_max_height_units,
                "invalid target height, using default"
            );
            self.target_max_height_units = TARGET_MAX_HEIGHT_UNITS;
        }
        self.cache_capacity = self.cache_capacity.max(1);
        if self.start_step >= NUMBER_STEPS.len() {
            warn!(start_step = self.start_step, "start step out of range, using 0");
            self.start_step = 0;
        }
        self
    }

    pub fn layout_policy(&self) -> LayoutPolicy {
        LayoutPolicy::new(self.max_unit_instances, self.grid_edge)
    }

    pub fn stage_settings(&self) -> StageSettings {
        StageSettings {
            reference_tolerance: self.reference_tolerance,
            target_max_height_units: self.target_max_height_units,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::{SystemTime, UNIX_EPOCH};

    fn temp_path(tag: &str) -> std::path::PathBuf {
        let nanos = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .unwrap()
            .as_nanos();
        std::env::temp_dir().join(format!("numcube-config-{tag}-{nanos}.toml"))
    }

    #[test]
    fn missing_file_uses_defaults() {
        let config = ExplorerConfig::load_from_path(&temp_path("missing"));
        assert_eq!(config, ExplorerConfig::default());
        assert_eq!(config.layout_policy(), LayoutPolicy::DEFAULT);
        assert_eq!(config.stage_settings(), StageSettings::default());
    }

    #[test]
    fn partial_file_keeps_other_defaults() {
        let path = temp_path("partial");
        fs::write(&path, "grid_edge = 6\ncache_capacity = 8\n").unwrap();
        let config = ExplorerConfig::load_from_path(&path);
        assert_eq!(config.grid_edge, 6);
        assert_eq!(config.cache_capacity, 8);
        assert_eq!(config.max_unit_instances, MAX_UNIT_INSTANCES);
        assert_eq!(config.reference_tolerance, DEFAULT_TOLERANCE);
        fs::remove_file(&path).ok();
    }

    #[test]
    fn malformed_file_uses_defaults() {
        let path = temp_path("malformed");
        fs::write(&path, "grid_edge = \"wide\"").unwrap();
        assert_eq!(
            ExplorerConfig::load_from_path(&path),
            ExplorerConfig::default()
        );
        fs::remove_file(&path).ok();
    }

    #[test]
    fn out_of_range_values_are_clamped() {
        let config = ExplorerConfig {
            max_unit_instances: 0,
            grid_edge: 40,
            reference_tolerance: 0.5,
            target_max_height_units: -3.0,
            cache_capacity: 0,
            start_step: 99,
        }
        .sanitized();
        assert_eq!(config.max_unit_instances, 1);
        assert_eq!(config.grid_edge, GRID_EDGE);
        assert_eq!(config.reference_tolerance, 1.0);
        assert_eq!(config.target_max_height_units, TARGET_MAX_HEIGHT_UNITS);
        assert_eq!(config.cache_capacity, 1);
        assert_eq!(config.start_step, 0);
    }

    #[test]
    fn save_then_load() {
        let path = temp_path("roundtrip");
        let config = ExplorerConfig {
            grid_edge: 8,
            start_step: 3,
            ..ExplorerConfig::default()
        };
        config.save_to_path(&path).unwrap();
        assert_eq!(ExplorerConfig::load_from_path(&path), config);
        fs::remove_file(&path).ok();
    }
}
