//! Error types for substring_cover

use thiserror::Error;

/// Result type alias using our Error
pub type Result<T> = std::result::Result<T, Error>;

#[derive(Error, Debug)]
pub enum Error {
    /// More search keys than the configured mask width can index
    #[error("{count} search keys exceed the {capacity}-bit mask capacity")]
    TooManySearchKeys { count: usize, capacity: u32 },

    /// Neither the greedy baseline nor the search produced a cover
    #[error("no cover exists for this vocabulary (keys without any candidate word: {missing:?})")]
    Uncoverable { missing: Vec<String> },

    /// I/O error while reading a word list
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Failure writing a solution as JSON
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}
