//! Observability for skillbelief.
//! `tracing` events filtered by `SKILLBELIEF_LOG` via `EnvFilter`.

pub mod setup;

pub use setup::{build_filter, filter_from, init_tracing, DEFAULT_FILTER, LOG_ENV_VAR};
