//! Log subscriber setup
//!
//! Events go to stderr so stdout carries only command output. The filter
//! comes from `RUST_LOG` when it holds a valid, non-blank directive,
//! otherwise [`DEFAULT_FILTER`].

use crate::error::WthrrError;
use std::io::IsTerminal;
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

/// Filter used when `RUST_LOG` is unset, blank or invalid
pub const DEFAULT_FILTER: &str = "info";

/// Build a filter from an optional directive string
///
/// A blank value counts as unset: an empty directive list would otherwise
/// disable every event.
pub fn filter_from(directives: Option<&str>) -> EnvFilter {
    directives
        .map(str::trim)
        .filter(|d| !d.is_empty())
        .and_then(|d| EnvFilter::try_new(d).ok())
        .unwrap_or_else(|| EnvFilter::new(DEFAULT_FILTER))
}

/// Build the filter from `RUST_LOG`
pub fn env_filter() -> EnvFilter {
    let directives = std::env::var(EnvFilter::DEFAULT_ENV).ok();
    filter_from(directives.as_deref())
}

/// Install the global subscriber for the CLI
///
/// Output is compact and carries no timestamps, so repeated runs write the
/// same bytes to stderr.
///
/// # Errors
///
/// Returns `WthrrError::Logging` if a global subscriber is already set.
pub fn init_cli_logger() -> Result<(), WthrrError> {
    tracing_subscriber::registry()
        .with(env_filter())
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(std::io::stderr)
                .with_ansi(std::io::stderr().is_terminal())
                .with_target(false)
                .without_time()
                .compact(),
        )
        .try_init()?;

    Ok(())
}
