//! Error type shared by the scorer, detector and record store

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ScanError {
    /// No words or no sentences to score
    #[error("input is empty: nothing to analyze")]
    EmptyInput,

    #[error("unsupported media type: {0}")]
    InvalidMediaType(String),

    /// Request body missing, malformed or of the wrong shape
    #[error("invalid request: {0}")]
    InvalidRequest(String),

    #[error("record storage error: {0}")]
    Storage(String),

    #[error("serialization error: {0}")]
    Serialization(String),

    #[error("not found: {0}")]
    NotFound(String),

    #[error("configuration error: {0}")]
    Config(String),
}

impl From<std::io::Error> for ScanError {
    fn from(err: std::io::Error) -> Self {
        ScanError::Storage(err.to_string())
    }
}

impl From<serde_json::Error> for ScanError {
    fn from(err: serde_json::Error) -> Self {
        ScanError::Serialization(err.to_string())
    }
}

pub type ScanResult<T> = Result<T, ScanError>;
