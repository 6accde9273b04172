//! Logging setup built on `tracing-subscriber`.

use tracing_subscriber::EnvFilter;

use crate::config::LoggingConfig;
use crate::constants::LOG_ENV;

/// Install a global `fmt` subscriber.
///
/// The filter comes from `URM_LOG` when set and valid, otherwise from
/// `config.level`, otherwise `info`. Returns `false` when a global
/// subscriber was already installed.
pub fn init_logging(config: &LoggingConfig) -> bool {
    let filter = EnvFilter::try_from_env(LOG_ENV)
        .or_else(|_| EnvFilter::try_new(config.effective_level()))
        .unwrap_or_else(|_| EnvFilter::new("info"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_ansi(config.effective_ansi())
        .with_target(true)
        .try_init()
        .is_ok()
}
