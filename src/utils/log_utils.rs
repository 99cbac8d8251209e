//! Logging utilities for the application

use tracing_subscriber::EnvFilter;

/// Severity for upload-related messages.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UploadLogLevel {
    Debug,
    Info,
}

/// Interface for routing upload feedback to the active frontend.
pub trait UploadLogger {
    fn log(&self, level: UploadLogLevel, message: &str);

    fn debug(&self, message: &str) {
        self.log(UploadLogLevel::Debug, message);
    }

    fn info(&self, message: &str) {
        self.log(UploadLogLevel::Info, message);
    }
}

/// CLI implementation that forwards to `tracing`.
#[derive(Clone, Copy, Default)]
pub struct CliUploadLogger;

impl UploadLogger for CliUploadLogger {
    fn log(&self, level: UploadLogLevel, message: &str) {
        match level {
            UploadLogLevel::Debug => tracing::debug!("{message}"),
            UploadLogLevel::Info => tracing::info!("{message}"),
        }
    }
}

/// Map the `-v` count to a default filter directive
///
/// * `0` - warnings and errors only
/// * `1` - info
/// * `2+` - debug
#[must_use]
pub fn filter_for_verbosity(verbosity: u8) -> &'static str {
    match verbosity {
        0 => "warn",
        1 => "info",
        _ => "debug",
    }
}

/// Install the global subscriber. `RUST_LOG` wins over the verbosity flag.
pub fn init_tracing(verbosity: u8) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(filter_for_verbosity(verbosity)));
    // Logs go to stderr; stdout carries the aws output.
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}
