//! Tracing subscriber setup
//!
//! Installs a global `tracing-subscriber` formatter. The level comes from
//! [`LoggingConfig`]; a non-empty `RUST_LOG` overrides it.

use daylog_domain::{DaylogError, LoggingConfig, Result};
use tracing_subscriber::EnvFilter;

/// Install the global subscriber.
///
/// # Errors
/// Returns `DaylogError::Config` if the filter directives don't parse or a
/// global subscriber is already installed.
pub fn init_tracing(config: &LoggingConfig) -> Result<()> {
    let filter = build_filter(&config.level, std::env::var(EnvFilter::DEFAULT_ENV).ok())?;
    let builder = tracing_subscriber::fmt().with_env_filter(filter).with_target(true);

    let installed = if config.json { builder.json().try_init() } else { builder.try_init() };

    installed.map_err(|e| DaylogError::Config(format!("failed to install tracing subscriber: {e}")))
}

fn build_filter(level: &str, from_env: Option<String>) -> Result<EnvFilter> {
    let directives = from_env.filter(|value| !value.trim().is_empty());
    let directives = directives.as_deref().unwrap_or(level);

    EnvFilter::try_new(directives)
        .map_err(|e| DaylogError::Config(format!("invalid log filter '{directives}': {e}")))
}
