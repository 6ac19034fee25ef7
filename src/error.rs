use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Failures outside the game rules: terminal I/O and logging setup.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("terminal I/O failed: {0}")]
    Terminal(#[from] io::Error),

    #[error("cannot open log file {path}: {source}")]
    LogFile {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("cannot install log subscriber: {0}")]
    Subscriber(String),
}

pub type Result<T> = std::result::Result<T, AppError>;
