//! Console logging setup.
//!
//! `RUST_LOG` takes precedence over `logging.console_level` when set.

use anyhow::{Context, Result};
use tracing_subscriber::filter::LevelFilter;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{EnvFilter, Layer};

use crate::config::{LogFormat, LoggingConfig};

/// Noisy dependencies are capped at `warn` unless `RUST_LOG` says otherwise.
const QUIET_CRATES: &str = ",hyper=warn,h2=warn,tower=warn";

/// Build the console filter.
///
/// `logging.console_level` must be a plain level even when `RUST_LOG` wins.
///
/// # Errors
/// Returns an error if `logging.console_level` is not `off`, `error`, `warn`,
/// `info`, `debug` or `trace`.
pub fn build_filter(cfg: &LoggingConfig) -> Result<EnvFilter> {
    let level: LevelFilter = cfg
        .console_level
        .parse()
        .with_context(|| format!("invalid logging.console_level '{}'", cfg.console_level))?;

    if let Ok(filter) = EnvFilter::try_from_default_env() {
        return Ok(filter);
    }
    EnvFilter::try_new(format!("{level}{QUIET_CRATES}"))
        .with_context(|| format!("invalid logging.console_level '{}'", cfg.console_level))
}

/// Install the global subscriber. Later calls are no-ops.
///
/// # Errors
/// Returns an error if the console filter cannot be built.
pub fn init_logging(cfg: &LoggingConfig) -> Result<()> {
    let filter = build_filter(cfg)?;

    let fmt_layer = match cfg.format {
        LogFormat::Text => tracing_subscriber::fmt::layer()
            .with_target(true)
            .with_writer(std::io::stderr)
            .with_filter(filter)
            .boxed(),
        LogFormat::Json => tracing_subscriber::fmt::layer()
            .json()
            .with_current_span(true)
            .with_writer(std::io::stderr)
            .with_filter(filter)
            .boxed(),
    };

    // try_init: tests and embedders may have installed a subscriber already
    let _ = tracing_subscriber::registry().with(fmt_layer).try_init();
    Ok(())
}
