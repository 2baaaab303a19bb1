use serde::Deserialize;
use std::{fs, io, path::Path, path::PathBuf};
use tracing::info;

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Failed to read config file '{}'", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("Failed to parse config file")]
    Parse(#[from] toml::de::Error),
    #[error("Config value '{name}' is invalid: {reason}")]
    Invalid { name: &'static str, reason: String },
}

#[derive(Clone, PartialEq, Debug, Deserialize)]
#[serde(default, rename_all = "kebab-case")]
pub struct EngineConfig {
    /// Upper bound on memoized satellite states
    pub cache_capacity: usize,
    /// Upper bound on prepared propagation models, one per distinct element set
    pub model_cache_capacity: usize,
    /// Longitude jump between consecutive samples [deg] that marks a ±180° crossing
    pub wraparound_threshold_deg: f64,
    pub ground_track: GroundTrackConfig,
    pub antemeridian: AntemeridianConfig,
}

#[derive(Clone, PartialEq, Debug, Deserialize)]
#[serde(default, rename_all = "kebab-case")]
pub struct GroundTrackConfig {
    /// Window sampled when no crossing is found, e.g. geosynchronous orbits
    pub fallback_window_ms: i64,
    pub fallback_step_ms: i64,
    /// Orbits sampled before the last crossing
    pub orbits_before: f64,
    /// Orbits sampled after the last crossing
    pub orbits_after: f64,
}

#[derive(Clone, PartialEq, Debug, Deserialize)]
#[serde(default, rename_all = "kebab-case")]
pub struct AntemeridianConfig {
    pub coarse_steps_per_orbit: u32,
    /// How far back to search, in orbital periods
    pub horizon_orbits: f64,
    /// Bisection stops once the bracket is this narrow
    pub resolution_ms: i64,
    pub max_bisections: u32,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            cache_capacity: 100_000,
            model_cache_capacity: 1_024,
            wraparound_threshold_deg: 180.0,
            ground_track: Default::default(),
            antemeridian: Default::default(),
        }
    }
}

impl Default for GroundTrackConfig {
    fn default() -> Self {
        Self {
            fallback_window_ms: 86_400_000,
            fallback_step_ms: 600_000,
            orbits_before: 1.0,
            orbits_after: 2.0,
        }
    }
}

impl Default for AntemeridianConfig {
    fn default() -> Self {
        Self {
            coarse_steps_per_orbit: 32,
            horizon_orbits: 2.0,
            resolution_ms: 1,
            max_bisections: 64,
        }
    }
}

impl EngineConfig {
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let content = fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_owned(),
            source,
        })?;
        let cfg = Self::from_str_checked(&content)?;
        info!(path = %path.display(), "Loaded engine config");
        Ok(cfg)
    }

    pub fn from_str_checked(s: &str) -> Result<Self, ConfigError> {
        let cfg: EngineConfig = toml::from_str(s)?;
        cfg.validate()?;
        Ok(cfg)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        check("cache-capacity", self.cache_capacity > 0, "must be non-zero")?;
        check(
            "model-cache-capacity",
            self.model_cache_capacity > 0,
            "must be non-zero",
        )?;
        check(
            "wraparound-threshold-deg",
            self.wraparound_threshold_deg > 0.0 && self.wraparound_threshold_deg <= 360.0,
            "must lie in (0, 360]",
        )?;

        let gt = &self.ground_track;
        check(
            "ground-track.fallback-window-ms",
            gt.fallback_window_ms >= 0,
            "must not be negative",
        )?;
        check(
            "ground-track.fallback-step-ms",
            gt.fallback_step_ms > 0,
            "must be positive",
        )?;
        check(
            "ground-track.orbits-before",
            gt.orbits_before.is_finite() && gt.orbits_before >= 0.0,
            "must be a non-negative number",
        )?;
        check(
            "ground-track.orbits-after",
            gt.orbits_after.is_finite() && gt.orbits_after >= 0.0,
            "must be a non-negative number",
        )?;

        let am = &self.antemeridian;
        check(
            "antemeridian.coarse-steps-per-orbit",
            am.coarse_steps_per_orbit > 0,
            "must be non-zero",
        )?;
        check(
            "antemeridian.horizon-orbits",
            am.horizon_orbits.is_finite() && am.horizon_orbits > 0.0,
            "must be a positive number",
        )?;
        check(
            "antemeridian.resolution-ms",
            am.resolution_ms > 0,
            "must be positive",
        )?;
        check(
            "antemeridian.max-bisections",
            am.max_bisections > 0,
            "must be non-zero",
        )
    }
}

fn check(name: &'static str, ok: bool, reason: &str) -> Result<(), ConfigError> {
    if ok {
        Ok(())
    } else {
        Err(ConfigError::Invalid {
            name,
            reason: reason.to_owned(),
        })
    }
}
