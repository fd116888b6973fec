//! Log filter resolution and subscriber installation.
//!
//! The engine only emits events: debug spans per inference and warnings for
//! discarded inputs. Installing a subscriber is left to the host unless it
//! opts into [`init_tracing`].

use std::sync::Once;

use tracing_subscriber::{fmt, prelude::*, EnvFilter};

/// Environment variable holding the log filter directives.
pub const LOG_ENV_VAR: &str = "SKILLBELIEF_LOG";

/// Directive used when `SKILLBELIEF_LOG` is unset, blank, or unparsable.
///
/// Target prefixes match, so this covers `skillbelief_core` and
/// `skillbelief_engine` alike.
pub const DEFAULT_FILTER: &str = "skillbelief=info";

static INIT: Once = Once::new();

/// Filter built from explicit directives, falling back to [`DEFAULT_FILTER`].
pub fn filter_from(directives: Option<&str>) -> EnvFilter {
    directives
        .map(str::trim)
        .filter(|d| !d.is_empty())
        .and_then(|d| EnvFilter::try_new(d).ok())
        .unwrap_or_else(|| EnvFilter::new(DEFAULT_FILTER))
}

/// Filter resolved from `SKILLBELIEF_LOG`.
pub fn build_filter() -> EnvFilter {
    let directives = std::env::var(LOG_ENV_VAR).ok();
    filter_from(directives.as_deref())
}

/// Install a compact stderr subscriber filtered by [`build_filter`].
///
/// Idempotent. A subscriber installed by the host application first wins.
pub fn init_tracing() {
    INIT.call_once(|| {
        let installed = tracing_subscriber::registry()
            .with(
                fmt::layer()
                    .compact()
                    .with_target(true)
                    .with_writer(std::io::stderr),
            )
            .with(build_filter())
            .try_init();

        if installed.is_err() {
            ::tracing::debug!("host subscriber already installed; skillbelief logging not initialized");
        }
    });
}
