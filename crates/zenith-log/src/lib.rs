//! Structured logging for the Zenith renderer.
//!
//! Installs a `tracing` subscriber with an environment-aware filter. Console
//! output goes to stderr so that an image streamed to stdout stays clean.
//! Debug builds can additionally write JSON lines to a log file.

use std::path::Path;

use tracing_subscriber::util::TryInitError;
use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};
use zenith_config::Config;

/// Filter used when neither `RUST_LOG` nor the config names a level.
pub const DEFAULT_FILTER: &str = "info";

/// File written inside `log_dir` when file logging is enabled.
pub const LOG_FILE_NAME: &str = "zenith.log";

/// Initialize the global tracing subscriber.
///
/// Sets up:
/// - Console output on stderr with uptime timestamps, targets and levels
/// - JSON file logging in debug builds when `log_dir` is given
/// - Filtering from `RUST_LOG`, falling back to the config's `debug.log_level`
///
/// Fails only if a global subscriber is already installed.
///
/// # Examples
///
/// ```no_run
/// use zenith_config::Config;
/// use zenith_log::init_logging;
///
/// let config = Config::default();
/// init_logging(None, false, Some(&config)).expect("logger already set");
/// ```
pub fn init_logging(
    log_dir: Option<&Path>,
    debug_build: bool,
    config: Option<&Config>,
) -> Result<(), TryInitError> {
    let filter_str = filter_directive(config);

    // RUST_LOG wins over the config file
    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&filter_str));

    let console_layer = fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(true)
        .with_thread_names(true) // rayon workers are named
        .with_level(true)
        .with_timer(fmt::time::uptime());

    let subscriber = tracing_subscriber::registry()
        .with(env_filter)
        .with(console_layer);

    if debug_build
        && let Some(log_dir) = log_dir
        && std::fs::create_dir_all(log_dir).is_ok()
        && let Ok(log_file) = std::fs::File::create(log_dir.join(LOG_FILE_NAME))
    {
        let file_layer = fmt::layer()
            .with_writer(log_file)
            .with_ansi(false)
            .with_target(true)
            .with_timer(fmt::time::uptime())
            .json();

        return subscriber.with(file_layer).try_init();
    }

    subscriber.try_init()
}

/// The filter directive implied by `config`, before `RUST_LOG` is consulted.
pub fn filter_directive(config: Option<&Config>) -> String {
    match config {
        Some(config) if !config.debug.log_level.trim().is_empty() => {
            config.debug.log_level.trim().to_string()
        }
        _ => DEFAULT_FILTER.to_string(),
    }
}
