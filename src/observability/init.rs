//! Tracing initialization and subscriber setup.

use crate::infrastructure::paths::get_data_dir;
use crate::Config;
use std::fs::OpenOptions;
use std::sync::Mutex;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Initializes the tracing subscriber with file-based output.
///
/// Builds a registry with an [`EnvFilter`] from the configured trace level
/// and an `fmt` layer writing to `ztodo.log` in the plugin data directory.
///
/// # Initialization Behavior
///
/// - Creates the data directory if it doesn't exist
/// - Silently does nothing if the directory or file cannot be created
///   (observability is optional)
/// - Idempotent: only the first successful call installs a subscriber
pub fn init_tracing(config: &Config) {
    let level = config
        .trace_level
        .clone()
        .unwrap_or_else(|| "info".to_string());

    let data_dir = get_data_dir();
    if std::fs::create_dir_all(&data_dir).is_err() {
        return;
    }

    let Ok(log_file) = OpenOptions::new()
        .create(true)
        .append(true)
        .open(data_dir.join("ztodo.log"))
    else {
        return;
    };

    let fmt_layer = tracing_subscriber::fmt::layer()
        .with_ansi(false)
        .with_writer(Mutex::new(log_file));

    let subscriber = tracing_subscriber::registry()
        .with(EnvFilter::new(level))
        .with(fmt_layer);

    let _ = subscriber.try_init();
}
