//! Tracing subscriber setup

use codeshack_core::error::ResultExt;
use codeshack_core::{CodeShackError, CodeShackResult, LoggingConfig};
use std::fs::OpenOptions;
use std::sync::Mutex;
use tracing_subscriber::EnvFilter;
use tracing_subscriber::fmt::writer::BoxMakeWriter;

/// Install the global subscriber
///
/// `RUST_LOG` wins over the configured level. Logs go to stderr unless a log
/// file is configured.
pub fn init(config: &LoggingConfig) -> CodeShackResult<()> {
    let level = if config.level.is_empty() {
        "info"
    } else {
        config.level.as_str()
    };
    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(level))
        .map_err(|e| CodeShackError::config(format!("Invalid log level '{}': {}", level, e)))?;

    let (writer, ansi) = match &config.log_file {
        Some(path) => {
            let file = OpenOptions::new()
                .create(true)
                .append(true)
                .open(path)
                .map_err(|e| {
                    CodeShackError::io_with_path(e.to_string(), path.display().to_string())
                })?;
            (BoxMakeWriter::new(Mutex::new(file)), false)
        }
        None => (BoxMakeWriter::new(std::io::stderr), true),
    };

    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(writer)
        .with_ansi(ansi);

    let result = match config.format.as_str() {
        "json" => builder.json().try_init(),
        "compact" => builder.compact().try_init(),
        _ => builder.pretty().try_init(),
    };

    result.context("Failed to initialize logging")
}
