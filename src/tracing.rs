//! Tracing setup
//!
//! The terminal UI owns stdout, so by default logs only go to a file:
//! `~/.config/albert-code/logs/albert.log`, rotated daily.
//!
//! Configure via RUST_LOG environment variable:
//! - `RUST_LOG=debug` - all debug logs
//! - `RUST_LOG=albert::update=trace` - module-level filtering

use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter, Layer};

/// Keeps the non-blocking file writer alive; drop it at exit to flush
pub struct LoggingGuard {
    _file: Option<WorkerGuard>,
}

/// Initialize the tracing subscriber
///
/// File logging defaults to `info` unless RUST_LOG says otherwise.
/// `log_stderr` adds a stderr layer, useful when the UI is redirected.
pub fn init(log_stderr: bool) -> LoggingGuard {
    let file_filter =
        || EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    let (file_layer, file_guard) = match crate::config_paths::ensure_logs_dir() {
        Ok(logs_dir) => {
            let file_appender = tracing_appender::rolling::daily(logs_dir, "albert.log");
            let (writer, guard) = tracing_appender::non_blocking(file_appender);
            (
                Some(
                    fmt::layer()
                        .with_writer(writer)
                        .with_ansi(false)
                        .with_target(true)
                        .with_line_number(true)
                        .with_filter(file_filter()),
                ),
                Some(guard),
            )
        }
        Err(e) => {
            eprintln!("Warning: Could not initialize file logging: {}", e);
            (None, None)
        }
    };

    let stderr_layer = log_stderr.then(|| {
        fmt::layer()
            .with_writer(std::io::stderr)
            .with_target(true)
            .with_filter(file_filter())
    });

    let result = tracing_subscriber::registry()
        .with(file_layer)
        .with(stderr_layer)
        .try_init();
    if let Err(e) = result {
        eprintln!("Warning: tracing already initialized: {}", e);
    }

    LoggingGuard { _file: file_guard }
}
