//! Tracing setup for binaries and tests embedding the store.

use tracing_subscriber::EnvFilter;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt};

/// Initialize tracing with optional file output.
///
/// Filtering comes from `RUST_LOG`, defaulting to `info`.
/// Set `SPECSTORE_LOG` to a file path to log there instead of stderr.
pub fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    match std::env::var("SPECSTORE_LOG").ok() {
        Some(log_path) => {
            let Ok(file) = std::fs::File::create(&log_path) else {
                eprintln!("Warning: Failed to create log file: {}", log_path);
                return;
            };

            let file_layer = fmt::layer()
                .with_writer(file)
                .with_ansi(false)
                .with_target(true)
                .with_level(true);

            tracing_subscriber::registry()
                .with(filter)
                .with(file_layer)
                .init();
        }
        None => {
            let stderr_layer = fmt::layer()
                .with_writer(std::io::stderr)
                .with_target(true)
                .with_level(true);

            tracing_subscriber::registry()
                .with(filter)
                .with(stderr_layer)
                .init();
        }
    }
}
