//! Stage error types

use thiserror::Error;

/// Stage-related errors
#[derive(Error, Debug)]
pub enum StageError {
    /// Window limit reached; no further windows may open until some close
    #[error("Window limit reached: {0} windows already open")]
    LimitExceeded(usize),

    /// Window configuration was rejected
    #[error("Invalid window config: {0}")]
    InvalidConfig(String),
}

/// Result type for stage operations
pub type Result<T> = std::result::Result<T, StageError>;
