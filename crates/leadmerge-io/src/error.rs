use std::path::PathBuf;

use leadmerge_types::TypeError;
use thiserror::Error;

/// Fatal errors raised while reading input or writing output.
#[derive(Debug, Error)]
pub enum IoError {
    #[error("input file {0} does not exist")]
    InputNotFound(PathBuf),

    #[error("failed to read {path}: {source}")]
    InputRead {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("failed to parse leads from {path}: {reason}")]
    InputParse { path: PathBuf, reason: String },

    #[error("invalid lead in {path}: {source}")]
    RecordSchema { path: PathBuf, source: TypeError },

    #[error("unable to write to {path}: {source}")]
    OutputWrite {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

pub type IoResult<T> = Result<T, IoError>;
