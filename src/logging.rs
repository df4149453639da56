//! Logging setup
//!
//! Installs the process-wide tracing subscriber. Library code only emits
//! events; this is the single place that decides where they go.

use std::fs::OpenOptions;
use std::io::IsTerminal;
use std::path::PathBuf;
use std::sync::Mutex;

use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{EnvFilter, Layer};

use crate::error::{Result, UninstallError};

/// Environment variable holding a full filter directive, e.g. `debug`
pub const LOG_ENV: &str = "LAUNCHER_LOG";

#[derive(Debug, Clone, Default)]
pub struct LogOptions {
    pub verbose: bool,
    pub log_file: Option<PathBuf>,
}

/// Default directive when `LAUNCHER_LOG` is not set
pub fn default_directive(verbose: bool) -> &'static str {
    if verbose { "debug" } else { "info" }
}

fn filter(verbose: bool) -> EnvFilter {
    EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new(default_directive(verbose)))
}

/// Install the subscriber: stderr always, plus an optional log file
pub fn init(options: &LogOptions) -> Result<()> {
    let console = tracing_subscriber::fmt::layer()
        .with_writer(std::io::stderr)
        .with_ansi(std::io::stderr().is_terminal())
        .without_time()
        .with_target(options.verbose)
        .with_filter(filter(options.verbose));

    let file = match &options.log_file {
        Some(path) => {
            let file = OpenOptions::new()
                .create(true)
                .append(true)
                .open(path)
                .map_err(|e| UninstallError::IoError {
                    message: format!("Failed to open log file {}: {}", path.display(), e),
                    source: Some(Box::new(e)),
                })?;
            Some(
                tracing_subscriber::fmt::layer()
                    .with_ansi(false)
                    .with_writer(Mutex::new(file))
                    .with_filter(filter(options.verbose)),
            )
        }
        None => None,
    };

    tracing_subscriber::registry()
        .with(console)
        .with(file)
        .try_init()
        .map_err(|e| UninstallError::IoError {
            message: format!("Failed to initialize logging: {e}"),
            source: None,
        })
}
