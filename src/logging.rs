//! Logging initialisation.
//!
//! Installs a global `tracing` subscriber built from [`LogConfig`]. The
//! `RUST_LOG` environment variable, when set, takes precedence over the
//! configured level.

use once_cell::sync::OnceCell;
use tracing_subscriber::EnvFilter;

use crate::config::LogConfig;
use crate::error::{DictionaryError, DictionaryResult};

/// Set once the global subscriber is installed.
static LOGGING: OnceCell<()> = OnceCell::new();

/// Initialize the logging system.
///
/// Calling this more than once is harmless; only the first call installs a
/// subscriber.
///
/// # Returns
///
/// * `Ok(())` if logging is ready
/// * `Err(DictionaryError)` if another subscriber was installed elsewhere
pub fn init_logging(config: &LogConfig) -> DictionaryResult<()> {
    LOGGING
        .get_or_try_init(|| install_subscriber(config))
        .map(|_| ())
}

fn install_subscriber(config: &LogConfig) -> DictionaryResult<()> {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&config.level));

    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_line_number(config.source_location)
        .with_file(config.source_location)
        .with_thread_names(true);

    let result = if config.json {
        tracing::subscriber::set_global_default(builder.json().finish())
    } else {
        tracing::subscriber::set_global_default(builder.finish())
    };

    result.map_err(|e| {
        DictionaryError::Custom(format!("Failed to set global tracing subscriber: {e}"))
    })
}
