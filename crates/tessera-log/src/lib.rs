//! Structured logging for the tessellation tools.
//!
//! Console logging via the `tracing` ecosystem: timestamps, module paths,
//! severity levels, and environment-based filtering. The configuration
//! system's `log_level` setting provides the default filter, overridable
//! through `RUST_LOG`.

use tessera_config::TesseraConfig;
use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

/// Initialize the tracing subscriber.
///
/// The filter comes from `RUST_LOG` when set; otherwise from the config's
/// `debug.log_level`, falling back to `info`. Safe to call once per process;
/// a second call is a no-op because a global subscriber is already set.
pub fn init_logging(config: Option<&TesseraConfig>) {
    let filter_str = config
        .map(|c| c.debug.log_level.as_str())
        .filter(|level| !level.is_empty())
        .unwrap_or("info");

    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(filter_str));

    let console_layer = fmt::layer()
        .with_target(true)
        .with_level(true)
        .with_timer(fmt::time::uptime());

    let _ = tracing_subscriber::registry()
        .with(env_filter)
        .with(console_layer)
        .try_init();
}

/// Create an `EnvFilter` with the default filter string.
///
/// Useful for tests and for consistent default behavior.
pub fn default_env_filter() -> EnvFilter {
    EnvFilter::new("info")
}
