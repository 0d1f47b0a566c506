//! Fatal error taxonomy.
//!
//! Noisy input is never an error here: undecodable bytes are dropped,
//! malformed hand blocks are discarded and bad timestamps are left unset.
//! What remains are failures the caller has to see.

use std::path::PathBuf;

/// Errors that abort a run.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("Failed to read input {path:?}: {source}")]
    Input {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to write export {path:?}: {source}")]
    Export {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Invalid config: {0}")]
    InvalidConfig(String),
}

impl Error {
    pub(crate) fn input(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Error::Input {
            path: path.into(),
            source,
        }
    }

    pub(crate) fn export(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Error::Export {
            path: path.into(),
            source,
        }
    }
}

pub type Result<T> = std::result::Result<T, Error>;
