//! Tracing subscriber setup for the command-line run.

use crate::error::AppError;
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

/// Installs a global `fmt` subscriber writing to stderr. `RUST_LOG` wins over
/// the level chosen by `verbose`.
pub fn init_logging(verbose: bool) -> Result<(), AppError> {
    let default_level = if verbose { "debug" } else { "info" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().with_writer(std::io::stderr).with_target(false))
        .try_init()
        .map_err(|e| AppError::Logging(e.to_string()))
}
