//! Error handling for skillbelief.
//! Inference is total; only configuration loading can fail.
//! `thiserror` only, zero `anyhow`.

pub mod config_error;
pub mod error_code;

pub use config_error::ConfigError;
pub use error_code::BeliefErrorCode;
