//! Error types for focuswave.

use thiserror::Error;

/// Errors surfaced by the focuswave library and CLI.
#[derive(Debug, Error)]
pub enum FocusError {
    /// Configuration could not be read, parsed, or written.
    #[error("Configuration error: {0}")]
    Config(String),

    /// The SQLite key-value store failed.
    #[error("Database error: {0}")]
    Database(String),

    /// JSON encoding or decoding failed.
    #[error("Parse error: {0}")]
    Parse(#[from] serde_json::Error),

    /// User input was rejected before reaching the tracker.
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// The terminal UI could not be set up or drawn.
    #[error("Terminal error: {0}")]
    Terminal(String),
}
