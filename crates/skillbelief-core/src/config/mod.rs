//! Configuration system for skillbelief.
//! TOML-based, 4-layer resolution: overrides > env > project > user > defaults.

pub mod belief_config;
pub mod decay_config;
pub mod sampling_config;
pub mod trend_config;
pub mod uncertainty_config;
pub mod updater_config;

pub use belief_config::{BeliefConfig, ConfigOverrides};
pub use decay_config::DecayConfig;
pub use sampling_config::SamplingConfig;
pub use trend_config::TrendConfig;
pub use uncertainty_config::UncertaintyConfig;
pub use updater_config::UpdaterConfig;
