//! Top-level skillbelief configuration with 4-layer resolution.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use super::{DecayConfig, SamplingConfig, TrendConfig, UncertaintyConfig, UpdaterConfig};
use crate::errors::ConfigError;
use crate::types::SourceType;

/// Project-level config file name.
pub const PROJECT_CONFIG_FILE: &str = "skillbelief.toml";

/// Top-level configuration aggregating all sub-configs.
///
/// Every value defaults to the policy constants in [`crate::constants`].
///
/// Resolution order (highest priority first):
/// 1. Explicit overrides (applied via `apply_overrides`)
/// 2. Environment variables (`SKILLBELIEF_*`)
/// 3. Project config (`skillbelief.toml` in the project root)
/// 4. User config (`~/.skillbelief/config.toml`)
/// 5. Compiled defaults
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct BeliefConfig {
    pub updater: UpdaterConfig,
    pub decay: DecayConfig,
    pub trend: TrendConfig,
    pub uncertainty: UncertaintyConfig,
    pub sampling: SamplingConfig,
}

/// Programmatic overrides that take precedence over every other layer.
#[derive(Debug, Clone, Default)]
pub struct ConfigOverrides {
    pub observation_scale: Option<f64>,
    pub half_life_days: Option<f64>,
    pub sampling_seed: Option<u64>,
    pub default_samples: Option<usize>,
}

impl BeliefConfig {
    /// Load configuration with 4-layer resolution.
    pub fn load(root: &Path, overrides: Option<&ConfigOverrides>) -> Result<Self, ConfigError> {
        let mut config = Self::default();

        // Layer 4 (lowest priority): user config
        if let Some(user_config_path) = Self::user_config_path() {
            if user_config_path.exists() {
                match Self::merge_toml_file(&mut config, &user_config_path) {
                    Ok(()) => {}
                    Err(e @ ConfigError::ParseError { .. }) => return Err(e),
                    Err(e) => {
                        // Unreadable user config is not fatal; fall back to defaults.
                        ::tracing::warn!(error = %e, "ignoring user config");
                    }
                }
            }
        }

        // Layer 3: project config
        let project_config_path = root.join(PROJECT_CONFIG_FILE);
        if project_config_path.exists() {
            Self::merge_toml_file(&mut config, &project_config_path)?;
        }

        // Layer 2: environment variables
        Self::apply_env_overrides(&mut config);

        // Layer 1 (highest priority): explicit overrides
        if let Some(o) = overrides {
            Self::apply_overrides(&mut config, o);
        }

        Self::validate(&config)?;

        Ok(config)
    }

    /// Load configuration from a TOML string.
    pub fn from_toml(toml_str: &str) -> Result<Self, ConfigError> {
        toml::from_str(toml_str).map_err(|e| ConfigError::ParseError {
            path: "<string>".to_string(),
            message: e.to_string(),
        })
    }

    /// Serialize the config back to TOML.
    pub fn to_toml(&self) -> Result<String, ConfigError> {
        toml::to_string_pretty(self).map_err(|e| ConfigError::ParseError {
            path: "<serialization>".to_string(),
            message: e.to_string(),
        })
    }

    /// Validate the configuration values.
    pub fn validate(config: &BeliefConfig) -> Result<(), ConfigError> {
        if let Some(scale) = config.updater.observation_scale {
            require(
                scale.is_finite() && scale > 0.0,
                "updater.observation_scale",
                "must be a positive number",
            )?;
        }
        for (name, reliability) in &config.updater.reliability_overrides {
            let field = format!("updater.reliability_overrides.{name}");
            let parsed: SourceType = name.parse().unwrap_or(SourceType::Unknown);
            if parsed.name() != name.as_str() {
                return Err(ConfigError::InvalidValue {
                    field,
                    message: "unknown source type".to_string(),
                });
            }
            require((0.0..=1.0).contains(reliability), &field, "must be between 0.0 and 1.0")?;
        }
        if let Some(grace) = config.decay.grace_days {
            require(grace.is_finite() && grace >= 0.0, "decay.grace_days", "must be non-negative")?;
        }
        if let Some(half_life) = config.decay.half_life_days {
            require(
                half_life.is_finite() && half_life > 0.0,
                "decay.half_life_days",
                "must be greater than 0",
            )?;
        }
        if let Some(window) = config.trend.window {
            require(window > 0, "trend.window", "must be greater than 0")?;
        }
        if let Some(band) = config.trend.band_points {
            require(
                (0.0..=100.0).contains(&band),
                "trend.band_points",
                "must be between 0 and 100",
            )?;
        }
        if let Some(stale) = config.trend.stale_days {
            require(stale.is_finite() && stale >= 0.0, "trend.stale_days", "must be non-negative")?;
        }
        if let Some(z) = config.uncertainty.z_score {
            require(z.is_finite() && z > 0.0, "uncertainty.z_score", "must be a positive number")?;
        }
        Ok(())
    }

    /// Returns the user config path: `~/.skillbelief/config.toml`.
    fn user_config_path() -> Option<PathBuf> {
        home_dir().map(|h| h.join(".skillbelief").join("config.toml"))
    }

    /// Merge a TOML file into the existing config.
    /// Unknown keys are silently ignored (forward-compatible).
    fn merge_toml_file(config: &mut BeliefConfig, path: &Path) -> Result<(), ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|_| ConfigError::FileNotFound {
            path: path.display().to_string(),
        })?;

        let file_config: BeliefConfig =
            toml::from_str(&content).map_err(|e| ConfigError::ParseError {
                path: path.display().to_string(),
                message: e.to_string(),
            })?;

        Self::merge(config, &file_config);
        Ok(())
    }

    /// Merge `other` into `base`, where `other` values override `base` values
    /// only when `other` has a `Some` value.
    fn merge(base: &mut BeliefConfig, other: &BeliefConfig) {
        // Updater
        if other.updater.observation_scale.is_some() {
            base.updater.observation_scale = other.updater.observation_scale;
        }
        for (name, reliability) in &other.updater.reliability_overrides {
            base.updater
                .reliability_overrides
                .insert(name.clone(), *reliability);
        }

        // Decay
        if other.decay.grace_days.is_some() {
            base.decay.grace_days = other.decay.grace_days;
        }
        if other.decay.half_life_days.is_some() {
            base.decay.half_life_days = other.decay.half_life_days;
        }

        // Trend
        if other.trend.window.is_some() {
            base.trend.window = other.trend.window;
        }
        if other.trend.band_points.is_some() {
            base.trend.band_points = other.trend.band_points;
        }
        if other.trend.stale_days.is_some() {
            base.trend.stale_days = other.trend.stale_days;
        }

        // Uncertainty
        if other.uncertainty.z_score.is_some() {
            base.uncertainty.z_score = other.uncertainty.z_score;
        }

        // Sampling
        if other.sampling.default_samples.is_some() {
            base.sampling.default_samples = other.sampling.default_samples;
        }
        if other.sampling.seed.is_some() {
            base.sampling.seed = other.sampling.seed;
        }
    }

    /// Apply environment variable overrides.
    /// Pattern: `SKILLBELIEF_OBSERVATION_SCALE`, `SKILLBELIEF_DECAY_HALF_LIFE_DAYS`, etc.
    fn apply_env_overrides(config: &mut BeliefConfig) {
        if let Some(v) = env_parse::<f64>("SKILLBELIEF_OBSERVATION_SCALE") {
            config.updater.observation_scale = Some(v);
        }
        if let Some(v) = env_parse::<f64>("SKILLBELIEF_DECAY_GRACE_DAYS") {
            config.decay.grace_days = Some(v);
        }
        if let Some(v) = env_parse::<f64>("SKILLBELIEF_DECAY_HALF_LIFE_DAYS") {
            config.decay.half_life_days = Some(v);
        }
        if let Some(v) = env_parse::<f64>("SKILLBELIEF_TREND_STALE_DAYS") {
            config.trend.stale_days = Some(v);
        }
        if let Some(v) = env_parse::<f64>("SKILLBELIEF_TREND_BAND_POINTS") {
            config.trend.band_points = Some(v);
        }
        if let Some(v) = env_parse::<usize>("SKILLBELIEF_SAMPLING_DEFAULT_SAMPLES") {
            config.sampling.default_samples = Some(v);
        }
        if let Some(v) = env_parse::<u64>("SKILLBELIEF_SAMPLING_SEED") {
            config.sampling.seed = Some(v);
        }
    }

    /// Apply explicit overrides (highest priority).
    fn apply_overrides(config: &mut BeliefConfig, overrides: &ConfigOverrides) {
        if let Some(v) = overrides.observation_scale {
            config.updater.observation_scale = Some(v);
        }
        if let Some(v) = overrides.half_life_days {
            config.decay.half_life_days = Some(v);
        }
        if let Some(v) = overrides.sampling_seed {
            config.sampling.seed = Some(v);
        }
        if let Some(v) = overrides.default_samples {
            config.sampling.default_samples = Some(v);
        }
    }
}

fn require(ok: bool, field: &str, message: &str) -> Result<(), ConfigError> {
    if ok {
        Ok(())
    } else {
        Err(ConfigError::ValidationFailed {
            field: field.to_string(),
            message: message.to_string(),
        })
    }
}

/// Parse an env var, ignoring unset or unparsable values.
fn env_parse<T: std::str::FromStr>(key: &str) -> Option<T> {
    std::env::var(key).ok().and_then(|v| v.trim().parse().ok())
}

/// Cross-platform home directory resolution.
fn home_dir() -> Option<PathBuf> {
    std::env::var_os("HOME")
        .or_else(|| std::env::var_os("USERPROFILE"))
        .map(PathBuf::from)
}
