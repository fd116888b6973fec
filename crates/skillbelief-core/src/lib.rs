//! # skillbelief-core
//!
//! Foundation crate for the skill-belief engine.
//! Defines the evidence and belief types, policy constants, config, errors,
//! and tracing setup. The engine crate depends on this.

pub mod config;
pub mod constants;
pub mod errors;
pub mod tracing;
pub mod types;

// Re-export the most commonly used types at the crate root.
pub use config::BeliefConfig;
pub use errors::{BeliefErrorCode, ConfigError};
pub use types::{EvidenceSignal, Posterior, SkillBelief, SkillId, SourceType, Trend};
