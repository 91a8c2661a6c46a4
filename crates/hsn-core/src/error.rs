//! Error types for master data loading.
//!
//! Loading the reference table is a startup precondition; every variant here
//! is fatal to the process, never a per-request error.

use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum MasterDataError {
    #[error("failed to open master data file {path}: {source}")]
    Open {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse master data: {0}")]
    Parse(#[from] csv::Error),

    #[error("master data is missing required column '{0}'")]
    MissingColumn(&'static str),
}
