//! VolcAsr Error Types
//!
//! Errors for the fallible edges of the crate: configuration and parsing of
//! user-supplied names. Session failures never surface as these; they are
//! delivered to the listener as `ErrorEvent`s.

use thiserror::Error;

/// Central error type for VolcAsr
#[derive(Error, Debug)]
pub enum VolcError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Unsupported ASR model: {0}. Supported models: standard, big-model, seed-asr")]
    UnknownModel(String),

    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    Json(#[from] serde_json::Error),
}

/// Result type alias for VolcAsr operations
pub type VolcResult<T> = Result<T, VolcError>;
