use std::fs::File;
use std::path::Path;
use std::sync::Mutex;

use tracing_subscriber::EnvFilter;

use crate::error::{AppError, Result};

const DEFAULT_FILTER: &str = "grid_snake=info";

/// Routes tracing output to `path`.
///
/// The terminal is in raw mode while the game runs, so logs go to a file or
/// nowhere. `RUST_LOG` overrides the default filter.
pub fn init_file_logging(path: &Path) -> Result<()> {
    let file = File::create(path).map_err(|source| AppError::LogFile {
        path: path.to_path_buf(),
        source,
    })?;

    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_ansi(false)
        .with_writer(Mutex::new(file))
        .try_init()
        .map_err(|error| AppError::Subscriber(error.to_string()))
}
