//! Log filter resolution for the skillbelief crates.

use std::sync::Mutex;

use skillbelief_core::tracing::{build_filter, filter_from, init_tracing, DEFAULT_FILTER, LOG_ENV_VAR};
use tracing::Level;
use tracing_subscriber::prelude::*;

/// Serializes tests that touch the log env var.
static ENV_MUTEX: Mutex<()> = Mutex::new(());

#[test]
fn test_missing_directives_use_default() {
    assert_eq!(filter_from(None).to_string(), DEFAULT_FILTER);
    assert_eq!(filter_from(Some("   ")).to_string(), DEFAULT_FILTER);
}

#[test]
fn test_unparsable_directives_fall_back() {
    assert_eq!(filter_from(Some("this_is_garbage=not_a_level")).to_string(), DEFAULT_FILTER);
    assert_eq!(filter_from(Some("{oops")).to_string(), DEFAULT_FILTER);
}

#[test]
fn test_valid_directives_are_kept() {
    assert_eq!(
        filter_from(Some("skillbelief_engine=debug")).to_string(),
        "skillbelief_engine=debug"
    );
}

#[test]
fn test_default_covers_both_crates_at_info() {
    let subscriber = tracing_subscriber::registry().with(filter_from(None));
    tracing::subscriber::with_default(subscriber, || {
        assert!(tracing::enabled!(target: "skillbelief_engine::updater", Level::INFO));
        assert!(tracing::enabled!(target: "skillbelief_core::config", Level::WARN));
        assert!(!tracing::enabled!(target: "skillbelief_engine::engine", Level::DEBUG));
        assert!(!tracing::enabled!(target: "rayon_core", Level::INFO));
    });
}

#[test]
fn test_per_module_directive_narrows_engine() {
    let subscriber = tracing_subscriber::registry().with(filter_from(Some(
        "skillbelief_engine::updater=debug,skillbelief_engine=warn",
    )));
    tracing::subscriber::with_default(subscriber, || {
        assert!(tracing::enabled!(target: "skillbelief_engine::updater", Level::DEBUG));
        assert!(!tracing::enabled!(target: "skillbelief_engine::engine", Level::INFO));
        assert!(tracing::enabled!(target: "skillbelief_engine::engine", Level::WARN));
    });
}

#[test]
fn test_build_filter_reads_env_var() {
    let _lock = ENV_MUTEX.lock().unwrap();

    std::env::set_var(LOG_ENV_VAR, "skillbelief_core=trace");
    assert_eq!(build_filter().to_string(), "skillbelief_core=trace");

    std::env::set_var(LOG_ENV_VAR, "skillbelief=loud");
    assert_eq!(build_filter().to_string(), DEFAULT_FILTER);

    std::env::remove_var(LOG_ENV_VAR);
    assert_eq!(build_filter().to_string(), DEFAULT_FILTER);
}

#[test]
fn test_init_tracing_idempotent() {
    let _lock = ENV_MUTEX.lock().unwrap();
    init_tracing();
    init_tracing();
}
