//! Tests for the skillbelief configuration system.

use std::sync::Mutex;

use skillbelief_core::config::{BeliefConfig, ConfigOverrides};
use skillbelief_core::constants;
use skillbelief_core::errors::ConfigError;
use skillbelief_core::types::SourceType;

/// Global mutex to serialize tests that modify environment variables.
static ENV_MUTEX: Mutex<()> = Mutex::new(());

fn tempdir() -> tempfile::TempDir {
    tempfile::TempDir::new().unwrap()
}

/// Clear all SKILLBELIEF_ env vars to prevent cross-test contamination.
fn clear_env_vars() {
    for key in [
        "SKILLBELIEF_OBSERVATION_SCALE",
        "SKILLBELIEF_DECAY_GRACE_DAYS",
        "SKILLBELIEF_DECAY_HALF_LIFE_DAYS",
        "SKILLBELIEF_TREND_STALE_DAYS",
        "SKILLBELIEF_TREND_BAND_POINTS",
        "SKILLBELIEF_SAMPLING_DEFAULT_SAMPLES",
        "SKILLBELIEF_SAMPLING_SEED",
    ] {
        std::env::remove_var(key);
    }
}

#[test]
fn test_defaults_match_policy_constants() {
    let config = BeliefConfig::default();
    assert_eq!(config.updater.effective_observation_scale(), constants::OBSERVATION_SCALE);
    assert_eq!(config.decay.effective_grace_days(), 30.0);
    assert_eq!(config.decay.effective_half_life_days(), 365.0);
    assert_eq!(config.trend.effective_window(), 3);
    assert_eq!(config.trend.effective_band_points(), 5.0);
    assert_eq!(config.trend.effective_stale_days(), 180.0);
    assert_eq!(config.uncertainty.effective_z_score(), 1.96);
    assert_eq!(config.sampling.effective_default_samples(), 1000);
    assert!(config.sampling.seed.is_none());
    assert!(BeliefConfig::validate(&config).is_ok());
}

#[test]
fn test_layered_resolution() {
    let _lock = ENV_MUTEX.lock().unwrap();
    clear_env_vars();

    let dir = tempdir();
    std::fs::write(
        dir.path().join("skillbelief.toml"),
        r#"
[updater]
observation_scale = 8.0

[decay]
half_life_days = 200.0
grace_days = 14.0
"#,
    )
    .unwrap();

    // Env overrides project for half-life.
    std::env::set_var("SKILLBELIEF_DECAY_HALF_LIFE_DAYS", "500");

    let overrides = ConfigOverrides {
        observation_scale: Some(12.0),
        ..Default::default()
    };
    let config = BeliefConfig::load(dir.path(), Some(&overrides)).unwrap();

    // Overrides beat the project file.
    assert_eq!(config.updater.observation_scale, Some(12.0));
    // Env beats the project file.
    assert_eq!(config.decay.half_life_days, Some(500.0));
    // Project file beats defaults.
    assert_eq!(config.decay.grace_days, Some(14.0));

    clear_env_vars();
}

#[test]
fn test_load_without_files_uses_defaults() {
    let _lock = ENV_MUTEX.lock().unwrap();
    clear_env_vars();

    let dir = tempdir();
    let config = BeliefConfig::load(dir.path(), None).unwrap();
    assert_eq!(config.decay.effective_half_life_days(), 365.0);
    assert_eq!(config.updater.effective_observation_scale(), 10.0);
}

#[test]
fn test_unparsable_env_var_is_ignored() {
    let _lock = ENV_MUTEX.lock().unwrap();
    clear_env_vars();

    std::env::set_var("SKILLBELIEF_SAMPLING_SEED", "not-a-number");
    let dir = tempdir();
    let config = BeliefConfig::load(dir.path(), None).unwrap();
    assert!(config.sampling.seed.is_none());

    clear_env_vars();
}

#[test]
fn test_invalid_project_toml_is_parse_error() {
    let _lock = ENV_MUTEX.lock().unwrap();
    clear_env_vars();

    let dir = tempdir();
    std::fs::write(dir.path().join("skillbelief.toml"), "[decay\nhalf_life_days = ").unwrap();
    let err = BeliefConfig::load(dir.path(), None).unwrap_err();
    assert!(matches!(err, ConfigError::ParseError { .. }));
}

#[test]
fn test_validation_rejects_out_of_range_values() {
    let config = BeliefConfig::from_toml("[decay]\nhalf_life_days = 0.0\n").unwrap();
    let err = BeliefConfig::validate(&config).unwrap_err();
    assert!(matches!(err, ConfigError::ValidationFailed { ref field, .. } if field == "decay.half_life_days"));

    let config = BeliefConfig::from_toml("[trend]\nwindow = 0\n").unwrap();
    assert!(BeliefConfig::validate(&config).is_err());

    let config = BeliefConfig::from_toml("[uncertainty]\nz_score = -1.0\n").unwrap();
    assert!(BeliefConfig::validate(&config).is_err());

    let config =
        BeliefConfig::from_toml("[updater.reliability_overrides]\npeer_review = 1.4\n").unwrap();
    assert!(BeliefConfig::validate(&config).is_err());
}

#[test]
fn test_reliability_overrides() {
    let config = BeliefConfig::from_toml(
        r#"
[updater.reliability_overrides]
peer_review = 0.7
unknown = 0.3
"#,
    )
    .unwrap();
    assert!(BeliefConfig::validate(&config).is_ok());
    assert_eq!(config.updater.reliability_for(SourceType::PeerReview), 0.7);
    assert_eq!(config.updater.reliability_for(SourceType::Unknown), 0.3);
    // Untouched types keep the built-in table.
    assert_eq!(config.updater.reliability_for(SourceType::ProctoredExam), 0.95);
}

#[test]
fn test_unknown_reliability_key_rejected() {
    let config =
        BeliefConfig::from_toml("[updater.reliability_overrides]\nhackathon = 0.4\n").unwrap();
    let err = BeliefConfig::validate(&config).unwrap_err();
    assert!(matches!(err, ConfigError::InvalidValue { .. }));
}

#[test]
fn test_unknown_keys_are_ignored() {
    let config = BeliefConfig::from_toml("[future_section]\nknob = 1\n").unwrap();
    assert!(config.decay.half_life_days.is_none());
}

#[test]
fn test_toml_round_trip_preserves_values() {
    let mut config = BeliefConfig::default();
    config.decay.half_life_days = Some(180.0);
    config.sampling.seed = Some(42);
    let text = config.to_toml().unwrap();
    let back = BeliefConfig::from_toml(&text).unwrap();
    assert_eq!(back.decay.half_life_days, Some(180.0));
    assert_eq!(back.sampling.seed, Some(42));
}
