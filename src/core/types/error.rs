use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Failure raised while scanning a directory group.
///
/// Each case is a named variant so callers and users can tell a malformed
/// log line from an empty group or a plain io failure.
#[derive(Debug, Error)]
pub enum ScanError {
    /// A line contained the marker but no colon-delimited integer suffix.
    #[error("{}:{line}: marker line has no numeric suffix: {content:?}", path.display())]
    Parse {
        path: PathBuf,
        line: usize,
        content: String,
    },

    /// A group directory yielded no log files, so its mean is undefined.
    #[error("group {} matched no log files", dir.display())]
    EmptyGroup { dir: PathBuf },

    #[error(transparent)]
    Io(#[from] io::Error),
}

pub type ScanResult<T> = Result<T, ScanError>;

/// Top-level application error.
#[derive(Debug, Error)]
pub enum AppError {
    #[error(transparent)]
    Scan(#[from] ScanError),

    #[error(transparent)]
    Io(#[from] io::Error),

    #[error(transparent)]
    Json(#[from] serde_json::Error),

    #[error("{0}")]
    Custom(String),
}

pub type AppResult<T> = Result<T, AppError>;
