//! Storage errors

/// Generic error type for arbridge storage operations
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// Generic error
    #[error("Error: {0}")]
    Generic(String),
    /// An IO error occurred
    #[error("IO error: {0}")]
    IOError(#[from] std::io::Error),
    /// The stored blob could not be parsed
    #[error("Parse error: {0}")]
    Parse(#[from] serde_json::Error),
}
