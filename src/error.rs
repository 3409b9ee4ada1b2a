//! Error types for the dayblock crate.

use thiserror::Error;

/// Errors that can occur in dayblock operations.
#[derive(Error, Debug)]
pub enum DayblockError {
    #[error("Invalid calendar date: {year:04}-{month:02}-{day:02}")]
    InvalidDate { year: i32, month: u32, day: u32 },

    #[error("Persistence error: {0}")]
    Persistence(String),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(String),
}

/// Result type alias for dayblock operations.
pub type DayblockResult<T> = Result<T, DayblockError>;
