use thiserror::Error;

/// Errors produced by type operations.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum TypeError {
    #[error("lead #{index} does not match the record schema: {reason}")]
    InvalidRecord { index: usize, reason: String },

    #[error("missing field `{0}`")]
    MissingField(String),
}
